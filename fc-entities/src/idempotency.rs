use strum::{AsRefStr, EnumString};

use crate::{id::Id, time::Timestamp};

/// A client supplied key that makes a retried request safe.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IdempotencyKey(String);

impl IdempotencyKey {
    pub const MAX_LEN: usize = 128;

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::str::FromStr for IdempotencyKey {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s.len() > Self::MAX_LEN {
            return Err(());
        }
        Ok(Self(s.to_owned()))
    }
}

/// The operations that accept an idempotency key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum IdempotentOperation {
    ApprovePromotion,
    RedeemCode,
}

/// Remembers which resource was produced for a key.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdempotencyRecord {
    pub owner_id    : Id,
    pub key         : IdempotencyKey,
    pub operation   : IdempotentOperation,
    /// Identifies the request the key was first used for.
    pub request_ref : String,
    pub resource_id : Id,
    pub created_at  : Timestamp,
}
