pub mod prelude {

    pub use fc_core::{
        entities::*,
        gateways::code_cipher::CodeCipher,
        offers::OfferCatalog,
        repositories::{Error as RepoError, *},
        usecases,
    };
    use fc_gateways::{code_cipher::AesGcmCodeCipher, notify::Notify};

    pub mod sqlite {
        pub use super::super::super::sqlite::*;
    }

    pub use crate::{
        error::{AppError, BError},
        prelude as flows,
    };

    pub fn new_review(rating: i64, is_promoter_request: bool) -> usecases::NewReview {
        usecases::NewReview {
            rating,
            text: "Great pasta!".into(),
            photo_urls: vec!["https://example.com/pasta.jpg".into()],
            is_promoter_request,
        }
    }

    pub struct BackendFixture {
        pub db_connections: sqlite::Connections,
        pub cipher: AesGcmCodeCipher,
        pub offers: OfferCatalog,
        pub notify: Notify,
    }

    impl BackendFixture {
        pub fn new() -> Self {
            let db_connections = sqlite::Connections::init(":memory:", 1).unwrap();
            fc_db_sqlite::run_embedded_database_migrations(db_connections.exclusive().unwrap())
                .unwrap();
            Self {
                db_connections,
                cipher: AesGcmCodeCipher::generate(),
                offers: OfferCatalog::default(),
                notify: Notify::all(),
            }
        }

        fn new_user(username: &str, email: &str) -> usecases::NewUser {
            usecases::NewUser {
                username: username.into(),
                email: email.into(),
                password: "secret".into(),
            }
        }

        pub fn create_foodie(&self, username: &str, email: &str) -> User {
            flows::register_foodie(
                &self.db_connections,
                &self.notify,
                Self::new_user(username, email),
            )
            .unwrap()
        }

        pub fn create_owner(&self, username: &str, email: &str) -> User {
            flows::register_restaurant_owner(
                &self.db_connections,
                &self.notify,
                Self::new_user(username, email),
            )
            .unwrap()
            .0
        }

        pub fn create_promoter_review(&self, foodie: &User, owner: &User) -> Id {
            let restaurant_id = owner.restaurant_id.clone().unwrap();
            flows::create_review(
                &self.db_connections,
                &self.notify,
                foodie,
                &restaurant_id,
                new_review(5, true),
            )
            .unwrap()
            .review
            .id
        }

        pub fn approve(
            &self,
            owner: &User,
            review_id: &Id,
            offer_id: &str,
            idempotency_key: Option<&IdempotencyKey>,
        ) -> crate::Result<usecases::Approval> {
            flows::approve_promotion(
                &self.db_connections,
                &self.cipher,
                &self.offers,
                &self.notify,
                owner,
                usecases::ApprovePromotion {
                    review_id,
                    offer_id,
                    idempotency_key,
                },
            )
        }

        pub fn redeem(
            &self,
            redeemer: &User,
            sealed_code: &str,
            idempotency_key: Option<&IdempotencyKey>,
        ) -> crate::Result<usecases::RedemptionOutcome> {
            flows::redeem_code(
                &self.db_connections,
                &self.cipher,
                &self.notify,
                redeemer,
                sealed_code,
                idempotency_key,
            )
        }

        pub fn loyalty_points(&self, user_id: &Id) -> u64 {
            self.db_connections
                .shared()
                .unwrap()
                .get_user(user_id)
                .unwrap()
                .loyalty_points
        }
    }
}
