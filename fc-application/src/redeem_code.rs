use super::*;

pub fn redeem_code(
    connections: &sqlite::Connections,
    cipher: &dyn CodeCipher,
    notify: &dyn NotificationGateway,
    redeemer: &User,
    sealed_code: &str,
    idempotency_key: Option<&IdempotencyKey>,
) -> Result<usecases::RedemptionOutcome> {
    // Opening the code does not require the database
    let payload = usecases::open_redemption_code(cipher, sealed_code)?;
    let outcome = connections.exclusive()?.transaction(|conn| {
        usecases::redeem_code(
            conn,
            redeemer,
            usecases::RedeemCode {
                payload: &payload,
                idempotency_key,
            },
        )
        .map_err(|err| {
            info!("Redemption of code {} failed: {err}", payload.code_id);
            err
        })
    })?;
    if !outcome.replayed {
        notify.notify(NotificationEvent::CodeRedeemed {
            redemption: &outcome.redemption,
        });
    }
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;
    use std::{sync::Arc, thread};

    #[test]
    fn redeem_once_and_fail_on_replay() {
        let fixture = BackendFixture::new();
        let owner = fixture.create_owner("Luigi", "luigi@example.com");
        let foodie = fixture.create_foodie("Anna", "anna@example.com");
        let review_id = fixture.create_promoter_review(&foodie, &owner);
        let code = fixture
            .approve(&owner, &review_id, "OFFER_SUMMER15", None)
            .unwrap()
            .code;

        let outcome = fixture.redeem(&owner, &code.sealed, None).unwrap();
        assert_eq!(code.id, outcome.redemption.code_id);
        assert_eq!(foodie.id, outcome.redemption.promoter_id);
        assert_eq!(10, outcome.redemption.points_awarded);
        assert_eq!(10, fixture.loyalty_points(&foodie.id));

        assert!(matches!(
            fixture.redeem(&owner, &code.sealed, None),
            Err(AppError::Business(BError::Parameter(
                usecases::Error::AlreadyRedeemed
            )))
        ));
        assert_eq!(10, fixture.loyalty_points(&foodie.id));
    }

    #[test]
    fn reject_tampered_codes() {
        let fixture = BackendFixture::new();
        let owner = fixture.create_owner("Luigi", "luigi@example.com");
        let foodie = fixture.create_foodie("Anna", "anna@example.com");
        let review_id = fixture.create_promoter_review(&foodie, &owner);
        let code = fixture
            .approve(&owner, &review_id, "OFFER_SUMMER15", None)
            .unwrap()
            .code;
        let mut tampered = code.sealed.clone();
        let last = tampered.pop().unwrap();
        tampered.push(if last == 'A' { 'B' } else { 'A' });

        for sealed in ["", "garbage", tampered.as_str()] {
            assert!(matches!(
                fixture.redeem(&owner, sealed, None),
                Err(AppError::Business(BError::Parameter(
                    usecases::Error::InvalidCode
                )))
            ));
        }
        assert_eq!(0, fixture.loyalty_points(&foodie.id));
    }

    #[test]
    fn only_a_single_concurrent_redemption_succeeds() {
        let _ = env_logger::builder().is_test(true).try_init();
        let fixture = Arc::new(BackendFixture::new());
        let owner = fixture.create_owner("Luigi", "luigi@example.com");
        let foodie = fixture.create_foodie("Anna", "anna@example.com");
        let review_id = fixture.create_promoter_review(&foodie, &owner);
        let code = fixture
            .approve(&owner, &review_id, "OFFER_SUMMER15", None)
            .unwrap()
            .code;

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let fixture = Arc::clone(&fixture);
                let owner = owner.clone();
                let sealed = code.sealed.clone();
                thread::spawn(move || fixture.redeem(&owner, &sealed, None))
            })
            .collect();
        let results: Vec<_> = handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect();

        assert_eq!(1, results.iter().filter(|res| res.is_ok()).count());
        assert!(results.iter().filter_map(|res| res.as_ref().err()).all(|err| matches!(
            err,
            AppError::Business(BError::Parameter(usecases::Error::AlreadyRedeemed))
        )));
        assert_eq!(10, fixture.loyalty_points(&foodie.id));
    }

    #[test]
    fn promote_review_and_redeem_summer_offer() {
        let fixture = BackendFixture::new();
        let owner = fixture.create_owner("Luigi", "luigi@example.com");
        let foodie = fixture.create_foodie("Anna", "anna@example.com");
        let restaurant_id = owner.restaurant_id.clone().unwrap();

        // The foodie asks to become a promoter
        let created = flows::create_review(
            &fixture.db_connections,
            &fixture.notify,
            &foodie,
            &restaurant_id,
            new_review(5, true),
        )
        .unwrap();

        // The owner finds the request in the queue
        let pending = {
            let db = fixture.db_connections.shared().unwrap();
            usecases::pending_promotion_requests(&db, &owner).unwrap()
        };
        assert_eq!(created.review.id, pending[0].request.review_id);

        // The owner approves and hands out the code
        let code = fixture
            .approve(&owner, &pending[0].request.review_id, "OFFER_SUMMER15", None)
            .unwrap()
            .code;

        // The code is redeemed at the restaurant exactly once
        let key: IdempotencyKey = "redeem-1".parse().unwrap();
        let first = fixture.redeem(&owner, &code.sealed, Some(&key)).unwrap();
        let retry = fixture.redeem(&owner, &code.sealed, Some(&key)).unwrap();
        assert!(retry.replayed);
        assert_eq!(first.redemption, retry.redemption);
        assert!(fixture.redeem(&owner, &code.sealed, None).is_err());

        let db = fixture.db_connections.shared().unwrap();
        assert!(db.pending_promotion_requests(&restaurant_id).unwrap().is_empty());
        assert_eq!(10, db.get_user(&foodie.id).unwrap().loyalty_points);
    }
}
