use super::*;
use fc_core::offers::OfferCatalog;

pub fn approve_promotion(
    connections: &sqlite::Connections,
    cipher: &dyn CodeCipher,
    offers: &OfferCatalog,
    notify: &dyn NotificationGateway,
    owner: &User,
    approve: usecases::ApprovePromotion,
) -> Result<usecases::Approval> {
    let review_id = approve.review_id.clone();
    let approval = connections.exclusive()?.transaction(|conn| {
        usecases::approve_promotion(conn, cipher, offers, owner, approve).map_err(|err| {
            warn!("Failed to approve promotion of review {review_id}: {err}");
            err
        })
    })?;
    if !approval.replayed {
        notify.notify(NotificationEvent::PromotionApproved {
            request: &approval.request,
            code: &approval.code,
        });
    }
    Ok(approval)
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    #[test]
    fn approve_once() {
        let fixture = BackendFixture::new();
        let owner = fixture.create_owner("Luigi", "luigi@example.com");
        let foodie = fixture.create_foodie("Anna", "anna@example.com");
        let review_id = fixture.create_promoter_review(&foodie, &owner);

        let approval = fixture.approve(&owner, &review_id, "OFFER_SUMMER15", None).unwrap();
        assert_eq!(PromotionStatus::Approved, approval.request.status);
        assert_eq!(
            approval.code.payload(),
            fixture.cipher.open(&approval.code.sealed).unwrap()
        );

        assert!(matches!(
            fixture.approve(&owner, &review_id, "OFFER_SUMMER15", None),
            Err(AppError::Business(BError::Parameter(
                usecases::Error::AlreadyApproved
            )))
        ));
        let db = fixture.db_connections.shared().unwrap();
        assert_eq!(
            approval.code,
            db.get_redemption_code_of_review(&review_id).unwrap()
        );
    }

    #[test]
    fn approve_unknown_review() {
        let fixture = BackendFixture::new();
        let owner = fixture.create_owner("Luigi", "luigi@example.com");
        assert!(matches!(
            fixture.approve(&owner, &"unknown".into(), "OFFER_SUMMER15", None),
            Err(AppError::Business(BError::Repo(RepoError::NotFound)))
        ));
    }

    #[test]
    fn replay_approval_with_idempotency_key() {
        let fixture = BackendFixture::new();
        let owner = fixture.create_owner("Luigi", "luigi@example.com");
        let foodie = fixture.create_foodie("Anna", "anna@example.com");
        let review_id = fixture.create_promoter_review(&foodie, &owner);
        let key: IdempotencyKey = "approve-1".parse().unwrap();

        let first = fixture
            .approve(&owner, &review_id, "OFFER_SUMMER15", Some(&key))
            .unwrap();
        let second = fixture
            .approve(&owner, &review_id, "OFFER_SUMMER15", Some(&key))
            .unwrap();
        assert!(!first.replayed);
        assert!(second.replayed);
        assert_eq!(first.code, second.code);

        assert!(matches!(
            fixture.approve(&owner, &review_id, "OFFER_WINTER", Some(&key)),
            Err(AppError::Business(BError::Parameter(
                usecases::Error::IdempotencyKeyReused
            )))
        ));
    }
}
