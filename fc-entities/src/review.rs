use crate::{id::Id, rating::RatingValue, time::Timestamp, url::Url};

/// A review of a restaurant written by a foodie.
///
/// Reviews are immutable once created.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    pub id                  : Id,
    pub author_id           : Id,
    pub restaurant_id       : Id,
    pub rating              : RatingValue,
    pub text                : String,
    pub photo_urls          : Vec<Url>,
    pub is_promoter_request : bool,
    pub created_at          : Timestamp,
}
