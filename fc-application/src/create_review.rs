use super::*;

pub fn create_review(
    connections: &sqlite::Connections,
    notify: &dyn NotificationGateway,
    author: &User,
    restaurant_id: &Id,
    new_review: usecases::NewReview,
) -> Result<usecases::CreatedReview> {
    let created = connections.exclusive()?.transaction(|conn| {
        usecases::create_review(conn, author, restaurant_id, new_review).map_err(|err| {
            warn!("Failed to create review of restaurant {restaurant_id}: {err}");
            err
        })
    })?;
    if let Some(request) = &created.promotion_request {
        notify.notify(NotificationEvent::PromotionRequested { request });
    }
    Ok(created)
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    #[test]
    fn promoter_review_enters_the_queue_of_the_restaurant() {
        let fixture = BackendFixture::new();
        let owner = fixture.create_owner("Luigi", "luigi@example.com");
        let foodie = fixture.create_foodie("Anna", "anna@example.com");
        let restaurant_id = owner.restaurant_id.clone().unwrap();

        let created = flows::create_review(
            &fixture.db_connections,
            &fixture.notify,
            &foodie,
            &restaurant_id,
            new_review(5, true),
        )
        .unwrap();
        let request = created.promotion_request.unwrap();
        assert!(request.is_pending());

        let db = fixture.db_connections.shared().unwrap();
        let pending = usecases::pending_promotion_requests(&db, &owner).unwrap();
        assert_eq!(1, pending.len());
        assert_eq!(created.review.id, pending[0].review.id);
        assert_eq!(foodie.username, pending[0].promoter.username);
    }

    #[test]
    fn reject_invalid_ratings() {
        let fixture = BackendFixture::new();
        let owner = fixture.create_owner("Luigi", "luigi@example.com");
        let foodie = fixture.create_foodie("Anna", "anna@example.com");
        let restaurant_id = owner.restaurant_id.clone().unwrap();
        for rating in [0, 6, -1] {
            let err = flows::create_review(
                &fixture.db_connections,
                &fixture.notify,
                &foodie,
                &restaurant_id,
                new_review(rating, true),
            )
            .unwrap_err();
            assert!(matches!(
                err,
                AppError::Business(BError::Parameter(usecases::Error::RatingValue))
            ));
        }
        let db = fixture.db_connections.shared().unwrap();
        assert!(db.reviews_of_restaurant(&restaurant_id).unwrap().is_empty());
        assert!(db.pending_promotion_requests(&restaurant_id).unwrap().is_empty());
    }
}
