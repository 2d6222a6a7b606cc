// Low-level database access traits.
// Each repository is responsible for a single entity and
// its relationships. Related entities are only referenced
// by their id and never modified or loaded by another
// repository.

use crate::entities::*;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

pub trait UserRepo {
    fn create_user(&self, user: &User) -> Result<()>;

    fn get_user(&self, id: &Id) -> Result<User>;
    fn get_users(&self, ids: &[&str]) -> Result<Vec<User>>;
    fn get_user_by_email(&self, email: &EmailAddress) -> Result<User>;
    fn try_get_user_by_email(&self, email: &EmailAddress) -> Result<Option<User>>;
    fn count_users(&self) -> Result<usize>;

    fn set_user_restaurant(&self, user_id: &Id, restaurant_id: &Id) -> Result<()>;

    /// Atomically increments the loyalty points of a user.
    fn add_loyalty_points(&self, user_id: &Id, points: u64) -> Result<()>;
}

pub trait RestaurantRepo {
    fn create_restaurant(&self, restaurant: &Restaurant) -> Result<()>;

    fn get_restaurant(&self, id: &Id) -> Result<Restaurant>;
    fn get_restaurants(&self, ids: &[&str]) -> Result<Vec<Restaurant>>;
    fn all_restaurants(&self) -> Result<Vec<Restaurant>>;
}

pub trait ReviewRepo {
    fn create_review(&self, review: &Review) -> Result<()>;

    fn get_review(&self, id: &Id) -> Result<Review>;
    fn get_reviews(&self, ids: &[&str]) -> Result<Vec<Review>>;

    // Newest first
    fn recent_reviews(&self, limit: usize) -> Result<Vec<Review>>;
    // Newest first
    fn reviews_of_restaurant(&self, restaurant_id: &Id) -> Result<Vec<Review>>;
}

pub trait PromotionRepo {
    fn create_promotion_request(&self, request: &PromotionRequest) -> Result<()>;

    fn get_promotion_request(&self, review_id: &Id) -> Result<PromotionRequest>;

    // Oldest first
    fn pending_promotion_requests(&self, restaurant_id: &Id) -> Result<Vec<PromotionRequest>>;

    /// Transitions a pending request into the approved state.
    ///
    /// Fails with [`Error::NotFound`] if there is no pending
    /// request for the given review.
    fn approve_promotion_request(
        &self,
        review_id: &Id,
        offer_id: &OfferId,
        approved_at: Timestamp,
    ) -> Result<()>;
}

pub trait RedemptionCodeRepo {
    fn create_redemption_code(&self, code: &RedemptionCode) -> Result<()>;

    fn get_redemption_code(&self, id: &Id) -> Result<RedemptionCode>;
    fn get_redemption_code_of_review(&self, review_id: &Id) -> Result<RedemptionCode>;

    /// Marks an unredeemed code as redeemed.
    ///
    /// Fails with [`Error::NotFound`] if the code does not
    /// exist or has already been redeemed.
    fn consume_redemption_code(
        &self,
        id: &Id,
        redeemed_by: &Id,
        redeemed_at: Timestamp,
    ) -> Result<()>;
}

pub trait FollowRepo {
    /// Returns `false` if the follow relation already existed.
    fn create_follow(&self, follow: &Follow) -> Result<bool>;
    fn is_following(&self, follower_id: &Id, following_id: &Id) -> Result<bool>;
    fn count_followers(&self, user_id: &Id) -> Result<usize>;
}

pub trait IdempotencyRepo {
    fn create_idempotency_record(&self, record: &IdempotencyRecord) -> Result<()>;
    fn try_get_idempotency_record(
        &self,
        owner_id: &Id,
        key: &IdempotencyKey,
    ) -> Result<Option<IdempotencyRecord>>;
}
