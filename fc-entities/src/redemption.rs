use crate::{id::Id, offer::OfferId, time::Timestamp};

/// A single-use code issued on approval of a promoter request.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedemptionCode {
    pub id            : Id,
    pub review_id     : Id,
    pub offer_id      : OfferId,
    pub restaurant_id : Id,
    pub promoter_id   : Id,
    /// The sealed representation that has been handed out.
    pub sealed        : String,
    pub reward_points : u64,
    pub issued_at     : Timestamp,
    pub expires_at    : Option<Timestamp>,
    pub redeemed_at   : Option<Timestamp>,
    pub redeemed_by   : Option<Id>,
}

impl RedemptionCode {
    pub fn payload(&self) -> CodePayload {
        CodePayload {
            code_id: self.id.clone(),
            offer_id: self.offer_id.clone(),
            restaurant_id: self.restaurant_id.clone(),
            reviewer_id: self.promoter_id.clone(),
            review_id: self.review_id.clone(),
            issued_at: self.issued_at,
            expires_at: self.expires_at,
        }
    }

    /// Checks that an opened payload refers to exactly this code.
    pub fn matches(&self, payload: &CodePayload) -> bool {
        self.payload() == *payload
    }

    pub fn is_expired_at(&self, now: Timestamp) -> bool {
        self.expires_at.map(|exp| now >= exp).unwrap_or(false)
    }

    pub fn is_redeemed(&self) -> bool {
        self.redeemed_at.is_some()
    }
}

/// The content of a sealed redemption code.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodePayload {
    pub code_id       : Id,
    pub offer_id      : OfferId,
    pub restaurant_id : Id,
    pub reviewer_id   : Id,
    pub review_id     : Id,
    pub issued_at     : Timestamp,
    pub expires_at    : Option<Timestamp>,
}

/// The outcome of a successful redemption.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redemption {
    pub code_id        : Id,
    pub offer_id       : OfferId,
    pub restaurant_id  : Id,
    pub promoter_id    : Id,
    pub points_awarded : u64,
    pub redeemed_at    : Timestamp,
}

impl Redemption {
    /// Rebuilds the outcome of a code that has already been redeemed.
    pub fn from_redeemed_code(code: &RedemptionCode) -> Option<Self> {
        let redeemed_at = code.redeemed_at?;
        Some(Self {
            code_id: code.id.clone(),
            offer_id: code.offer_id.clone(),
            restaurant_id: code.restaurant_id.clone(),
            promoter_id: code.promoter_id.clone(),
            points_awarded: code.reward_points,
            redeemed_at,
        })
    }
}
