use std::collections::HashMap;

use super::{load_users_by_id, prelude::*};

pub const RECENT_REVIEWS_LIMIT: usize = 20;

#[derive(Debug, Clone)]
pub struct FeedReview {
    pub review: Review,
    pub author: User,
    pub restaurant: Restaurant,
}

/// The newest reviews across all restaurants.
pub fn recent_reviews<R>(repo: &R) -> Result<Vec<FeedReview>>
where
    R: ReviewRepo + UserRepo + RestaurantRepo,
{
    let reviews = repo.recent_reviews(RECENT_REVIEWS_LIMIT)?;
    let author_ids: Vec<_> = reviews.iter().map(|r| &r.author_id).collect();
    let authors = load_users_by_id(repo, &author_ids)?;

    let mut restaurant_ids: Vec<_> = reviews.iter().map(|r| r.restaurant_id.as_str()).collect();
    restaurant_ids.sort_unstable();
    restaurant_ids.dedup();
    let restaurants: HashMap<_, _> = repo
        .get_restaurants(&restaurant_ids)?
        .into_iter()
        .map(|r| (r.id.clone(), r))
        .collect();

    Ok(reviews
        .into_iter()
        .filter_map(|review| {
            let author = authors.get(&review.author_id)?.clone();
            let restaurant = restaurants.get(&review.restaurant_id)?.clone();
            Some(FeedReview {
                review,
                author,
                restaurant,
            })
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};
    use fc_entities::builders::*;

    #[test]
    fn newest_reviews_first_and_limited() {
        let db = MockDb::default();
        db.users
            .borrow_mut()
            .push(User::build().id("u1").username("anna").loyalty_points(150).finish());
        db.restaurants
            .borrow_mut()
            .push(Restaurant::build().id("r1").name("Da Mario").finish());
        for i in 0..(RECENT_REVIEWS_LIMIT as i64 + 3) {
            db.reviews.borrow_mut().push(
                Review::build()
                    .id(&format!("rev{i}"))
                    .author_id("u1")
                    .restaurant_id("r1")
                    .created_at(Timestamp::from_millis(i))
                    .finish(),
            );
        }
        let feed = recent_reviews(&db).unwrap();
        assert_eq!(RECENT_REVIEWS_LIMIT, feed.len());
        assert_eq!("rev22", feed[0].review.id.as_str());
        assert_eq!("rev3", feed[RECENT_REVIEWS_LIMIT - 1].review.id.as_str());
        assert_eq!("anna", feed[0].author.username);
        assert_eq!(Tier::Silver, feed[0].author.tier());
        assert_eq!("Da Mario", feed[0].restaurant.name);
    }
}
