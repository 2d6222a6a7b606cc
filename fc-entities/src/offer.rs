use std::{fmt, str::FromStr};

use thiserror::Error;

/// Identifies a restaurant offer like `OFFER_SUMMER15`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OfferId(String);

impl OfferId {
    pub const MAX_LEN: usize = 64;

    pub fn new_unchecked(id: String) -> Self {
        Self(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Error)]
pub enum OfferIdParseError {
    #[error("empty offer id")]
    Empty,
    #[error("offer id exceeds {} characters", OfferId::MAX_LEN)]
    TooLong,
}

impl FromStr for OfferId {
    type Err = OfferIdParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(OfferIdParseError::Empty);
        }
        if s.chars().count() > Self::MAX_LEN {
            return Err(OfferIdParseError::TooLong);
        }
        Ok(Self(s.to_owned()))
    }
}

impl fmt::Display for OfferId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<OfferId> for String {
    fn from(from: OfferId) -> Self {
        from.0
    }
}
