use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::{FromPrimitive as _, ToPrimitive as _};
use strum::{AsRefStr, EnumString};
use thiserror::Error;

use crate::{id::Id, offer::OfferId, time::Timestamp};

pub type PromotionStatusPrimitive = i16;

/// The state of a promoter request.
///
/// The only transition is `Pending -> Approved`.
#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, FromPrimitive, ToPrimitive, EnumString, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum PromotionStatus {
    Pending  = 0,
    Approved = 1,
}

#[derive(Debug, Error)]
#[error("Invalid promotion status primitive: {0}")]
pub struct InvalidPromotionStatusPrimitive(PromotionStatusPrimitive);

impl TryFrom<PromotionStatusPrimitive> for PromotionStatus {
    type Error = InvalidPromotionStatusPrimitive;
    fn try_from(from: PromotionStatusPrimitive) -> Result<Self, Self::Error> {
        Self::from_i16(from).ok_or(InvalidPromotionStatusPrimitive(from))
    }
}

impl From<PromotionStatus> for PromotionStatusPrimitive {
    fn from(from: PromotionStatus) -> Self {
        from.to_i16().expect("promotion status primitive")
    }
}

/// A promoter request derived 1:1 from a review.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromotionRequest {
    pub review_id     : Id,
    pub restaurant_id : Id,
    pub promoter_id   : Id,
    pub status        : PromotionStatus,
    pub created_at    : Timestamp,
    pub approved_at   : Option<Timestamp>,
    pub offer_id      : Option<OfferId>,
}

impl PromotionRequest {
    pub fn new_pending(review_id: Id, restaurant_id: Id, promoter_id: Id, created_at: Timestamp) -> Self {
        Self {
            review_id,
            restaurant_id,
            promoter_id,
            status: PromotionStatus::Pending,
            created_at,
            approved_at: None,
            offer_id: None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.status == PromotionStatus::Pending
    }
}
