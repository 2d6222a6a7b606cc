use super::*;

#[get("/restaurants/nearby?<lat>&<lon>")]
pub fn get_nearby_restaurants(
    db: sqlite::Connections,
    lat: f64,
    lon: f64,
) -> Result<Vec<json::Restaurant>> {
    let nearby = usecases::nearby_restaurants(
        &db.shared()?,
        lat,
        lon,
        usecases::MAX_NEARBY_RESTAURANTS,
    )?;
    Ok(Json(
        nearby.into_iter().map(to_json::nearby_restaurant).collect(),
    ))
}

#[get("/restaurants/<id>")]
pub fn get_restaurant(db: sqlite::Connections, id: String) -> Result<json::RestaurantWithReviews> {
    let details = usecases::get_restaurant_details(&db.shared()?, &Id::from(id))?;
    Ok(Json(to_json::restaurant_details(details)))
}

#[post("/restaurants/<id>/reviews", format = "application/json", data = "<review>")]
pub fn post_review(
    connections: sqlite::Connections,
    notify: &State<Notify>,
    auth: Auth,
    id: String,
    review: JsonResult<json::NewReview>,
) -> Result<json::Review> {
    let review = from_json::new_review(review?.into_inner());
    let author = auth.user(&connections.shared()?)?;
    let created = flows::create_review(
        &connections,
        &*notify.0,
        &author,
        &Id::from(id),
        review,
    )?;
    let review = json::Review {
        user: Some((&author).into()),
        ..created.review.into()
    };
    Ok(Json(review))
}
