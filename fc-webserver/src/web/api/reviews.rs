use super::*;

#[get("/reviews/recent")]
pub fn get_recent_reviews(db: sqlite::Connections) -> Result<Vec<json::Review>> {
    let reviews = usecases::recent_reviews(&db.shared()?)?;
    Ok(Json(reviews.into_iter().map(to_json::feed_review).collect()))
}
