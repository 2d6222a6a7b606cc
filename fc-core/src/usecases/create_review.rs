use super::prelude::*;
use crate::util::validate::Validate;

#[derive(Debug, Clone)]
pub struct NewReview {
    pub rating: i64,
    pub text: String,
    pub photo_urls: Vec<String>,
    pub is_promoter_request: bool,
}

#[derive(Debug, Clone)]
pub struct CreatedReview {
    pub review: Review,
    pub promotion_request: Option<PromotionRequest>,
}

/// Appends a review to the ledger.
///
/// A review that is flagged as promoter request also
/// enqueues a pending request for the restaurant.
pub fn create_review<R>(
    repo: &R,
    author: &User,
    restaurant_id: &Id,
    new_review: NewReview,
) -> Result<CreatedReview>
where
    R: RestaurantRepo + ReviewRepo + PromotionRepo,
{
    if author.kind != UserKind::Foodie {
        return Err(Error::Forbidden);
    }
    let restaurant = repo.get_restaurant(restaurant_id)?;
    let NewReview {
        rating,
        text,
        photo_urls,
        is_promoter_request,
    } = new_review;
    let rating = RatingValue::try_new(rating).ok_or(Error::RatingValue)?;
    let photo_urls = photo_urls
        .iter()
        .map(|url| url.trim().parse::<Url>())
        .collect::<std::result::Result<Vec<_>, _>>()?;
    let review = Review {
        id: Id::new(),
        author_id: author.id.clone(),
        restaurant_id: restaurant.id,
        rating,
        text: text.trim().to_owned(),
        photo_urls,
        is_promoter_request,
        created_at: Timestamp::now(),
    };
    review.validate()?;
    log::debug!(
        "Creating review {} for restaurant {}",
        review.id,
        review.restaurant_id
    );
    repo.create_review(&review)?;
    let promotion_request = if review.is_promoter_request {
        let request = PromotionRequest::new_pending(
            review.id.clone(),
            review.restaurant_id.clone(),
            review.author_id.clone(),
            review.created_at,
        );
        repo.create_promotion_request(&request)?;
        Some(request)
    } else {
        None
    };
    Ok(CreatedReview {
        review,
        promotion_request,
    })
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};
    use crate::repositories::Error as RepoError;
    use fc_entities::builders::*;

    fn new_review(rating: i64, is_promoter_request: bool) -> NewReview {
        NewReview {
            rating,
            text: " Great pasta! ".into(),
            photo_urls: vec!["https://img.example.com/1.jpg".into()],
            is_promoter_request,
        }
    }

    fn setup() -> (MockDb, User) {
        let db = MockDb::default();
        db.restaurants
            .borrow_mut()
            .push(Restaurant::build().id("r1").finish());
        let foodie = User::build().id("u1").finish();
        db.users.borrow_mut().push(foodie.clone());
        (db, foodie)
    }

    #[test]
    fn create_plain_review() {
        let (db, foodie) = setup();
        let created = create_review(&db, &foodie, &"r1".into(), new_review(4, false)).unwrap();
        assert!(created.promotion_request.is_none());
        assert_eq!("Great pasta!", created.review.text);
        assert_eq!(1, created.review.photo_urls.len());
        assert_eq!(1, db.reviews.borrow().len());
        assert!(db.promotions.borrow().is_empty());
    }

    #[test]
    fn create_promoter_review() {
        let (db, foodie) = setup();
        let created = create_review(&db, &foodie, &"r1".into(), new_review(5, true)).unwrap();
        let request = created.promotion_request.unwrap();
        assert_eq!(created.review.id, request.review_id);
        assert_eq!(foodie.id, request.promoter_id);
        assert!(request.is_pending());
        assert_eq!(1, db.promotions.borrow().len());
    }

    #[test]
    fn rating_out_of_range() {
        let (db, foodie) = setup();
        for rating in [-1, 0, 6, 100] {
            assert!(matches!(
                create_review(&db, &foodie, &"r1".into(), new_review(rating, false)),
                Err(Error::RatingValue)
            ));
        }
        assert!(db.reviews.borrow().is_empty());
    }

    #[test]
    fn invalid_photo_url() {
        let (db, foodie) = setup();
        let mut review = new_review(3, false);
        review.photo_urls.push("not a url".into());
        assert!(matches!(
            create_review(&db, &foodie, &"r1".into(), review),
            Err(Error::Url)
        ));
    }

    #[test]
    fn unknown_restaurant() {
        let (db, foodie) = setup();
        assert!(matches!(
            create_review(&db, &foodie, &"r2".into(), new_review(3, false)),
            Err(Error::Repo(RepoError::NotFound))
        ));
    }

    #[test]
    fn restaurant_owners_cannot_review() {
        let (db, _) = setup();
        let owner = User::build()
            .kind(UserKind::RestaurantOwner)
            .restaurant_id("r1")
            .finish();
        assert!(matches!(
            create_review(&db, &owner, &"r1".into(), new_review(5, true)),
            Err(Error::Forbidden)
        ));
    }
}
