use super::*;
use std::collections::HashMap;

impl<'a> ReviewRepo for DbReadOnly<'a> {
    fn create_review(&self, _review: &Review) -> Result<()> {
        unreachable!();
    }

    fn get_review(&self, id: &Id) -> Result<Review> {
        get_review(&mut self.conn.borrow_mut(), id)
    }
    fn get_reviews(&self, ids: &[&str]) -> Result<Vec<Review>> {
        get_reviews(&mut self.conn.borrow_mut(), ids)
    }
    fn recent_reviews(&self, limit: usize) -> Result<Vec<Review>> {
        recent_reviews(&mut self.conn.borrow_mut(), limit)
    }
    fn reviews_of_restaurant(&self, restaurant_id: &Id) -> Result<Vec<Review>> {
        reviews_of_restaurant(&mut self.conn.borrow_mut(), restaurant_id)
    }
}

impl<'a> ReviewRepo for DbConnection<'a> {
    fn create_review(&self, review: &Review) -> Result<()> {
        create_review(&mut self.conn.borrow_mut(), review)
    }

    fn get_review(&self, id: &Id) -> Result<Review> {
        get_review(&mut self.conn.borrow_mut(), id)
    }
    fn get_reviews(&self, ids: &[&str]) -> Result<Vec<Review>> {
        get_reviews(&mut self.conn.borrow_mut(), ids)
    }
    fn recent_reviews(&self, limit: usize) -> Result<Vec<Review>> {
        recent_reviews(&mut self.conn.borrow_mut(), limit)
    }
    fn reviews_of_restaurant(&self, restaurant_id: &Id) -> Result<Vec<Review>> {
        reviews_of_restaurant(&mut self.conn.borrow_mut(), restaurant_id)
    }
}

fn create_review(conn: &mut SqliteConnection, r: &Review) -> Result<()> {
    let new_review = models::NewReview {
        id: r.id.as_str(),
        author_id: r.author_id.as_str(),
        restaurant_id: r.restaurant_id.as_str(),
        rating: r.rating.into(),
        review_text: &r.text,
        is_promoter_request: r.is_promoter_request,
        created_at: r.created_at.as_millis(),
    };
    diesel::insert_into(schema::reviews::table)
        .values(&new_review)
        .execute(conn)
        .map_err(from_diesel_err)?;
    let photos: Vec<_> = r
        .photo_urls
        .iter()
        .enumerate()
        .map(|(position, url)| models::NewReviewPhoto {
            review_id: r.id.as_str(),
            position: position as i16,
            url: url.as_str(),
        })
        .collect();
    if !photos.is_empty() {
        diesel::insert_into(schema::review_photos::table)
            .values(&photos)
            .execute(conn)
            .map_err(from_diesel_err)?;
    }
    Ok(())
}

fn get_review(conn: &mut SqliteConnection, id: &Id) -> Result<Review> {
    use schema::reviews::dsl;
    let review = dsl::reviews
        .filter(dsl::id.eq(id.as_str()))
        .first::<models::ReviewEntity>(conn)
        .map_err(from_diesel_err)?;
    load_reviews(conn, vec![review])?
        .pop()
        .ok_or(repo::Error::NotFound)
}

fn get_reviews(conn: &mut SqliteConnection, ids: &[&str]) -> Result<Vec<Review>> {
    use schema::reviews::dsl;
    let reviews = dsl::reviews
        .filter(dsl::id.eq_any(ids))
        .load::<models::ReviewEntity>(conn)
        .map_err(from_diesel_err)?;
    load_reviews(conn, reviews)
}

fn recent_reviews(conn: &mut SqliteConnection, limit: usize) -> Result<Vec<Review>> {
    use schema::reviews::dsl;
    let reviews = dsl::reviews
        .order_by((dsl::created_at.desc(), dsl::id.desc()))
        .limit(limit as i64)
        .load::<models::ReviewEntity>(conn)
        .map_err(from_diesel_err)?;
    load_reviews(conn, reviews)
}

fn reviews_of_restaurant(conn: &mut SqliteConnection, restaurant_id: &Id) -> Result<Vec<Review>> {
    use schema::reviews::dsl;
    let reviews = dsl::reviews
        .filter(dsl::restaurant_id.eq(restaurant_id.as_str()))
        .order_by((dsl::created_at.desc(), dsl::id.desc()))
        .load::<models::ReviewEntity>(conn)
        .map_err(from_diesel_err)?;
    load_reviews(conn, reviews)
}

// Attaches the photos to the reviews and preserves their order.
fn load_reviews(conn: &mut SqliteConnection, reviews: Vec<models::ReviewEntity>) -> Result<Vec<Review>> {
    use schema::review_photos::dsl;
    let review_ids: Vec<_> = reviews.iter().map(|r| r.id.as_str()).collect();
    let mut photos: HashMap<String, Vec<Url>> = HashMap::new();
    for photo in dsl::review_photos
        .filter(dsl::review_id.eq_any(&review_ids))
        .order_by((dsl::review_id, dsl::position))
        .load::<models::ReviewPhotoEntity>(conn)
        .map_err(from_diesel_err)?
    {
        let models::ReviewPhotoEntity { review_id, url, .. } = photo;
        if let Some(url) = load_url(url) {
            photos.entry(review_id).or_default().push(url);
        }
    }
    reviews
        .into_iter()
        .map(|r| -> Result<Review> {
            let models::ReviewEntity {
                id,
                author_id,
                restaurant_id,
                rating,
                review_text,
                is_promoter_request,
                created_at,
            } = r;
            let rating = RatingValue::try_new(rating.into())
                .ok_or_else(|| anyhow!("Invalid rating value of review {id}: {rating}"))?;
            let photo_urls = photos.remove(&id).unwrap_or_default();
            Ok(Review {
                id: id.into(),
                author_id: author_id.into(),
                restaurant_id: restaurant_id.into(),
                rating,
                text: review_text,
                photo_urls,
                is_promoter_request,
                created_at: Timestamp::from_millis(created_at),
            })
        })
        .collect()
}
