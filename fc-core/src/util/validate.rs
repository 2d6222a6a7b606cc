use fc_entities::review::Review;
use thiserror::Error;

pub use fast_chemail::is_valid_email;

pub trait Validate {
    type Error;
    fn validate(&self) -> Result<(), Self::Error>;
}

pub const USERNAME_MAX_LEN: usize = 50;
pub const REVIEW_TEXT_MAX_LEN: usize = 5_000;
pub const REVIEW_PHOTOS_MAX_COUNT: usize = 10;

pub fn is_valid_username(username: &str) -> bool {
    let username = username.trim();
    !username.is_empty()
        && username.chars().count() <= USERNAME_MAX_LEN
        && !username.chars().any(char::is_control)
}

#[derive(Debug, Error)]
pub enum ReviewInvalidation {
    #[error("Rating value out of range")]
    RatingValue,
    #[error("Review text exceeds {REVIEW_TEXT_MAX_LEN} characters")]
    TextTooLong,
    #[error("More than {REVIEW_PHOTOS_MAX_COUNT} photos")]
    TooManyPhotos,
}

impl Validate for Review {
    type Error = ReviewInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        if !self.rating.is_valid() {
            return Err(Self::Error::RatingValue);
        }
        if self.text.chars().count() > REVIEW_TEXT_MAX_LEN {
            return Err(Self::Error::TextTooLong);
        }
        if self.photo_urls.len() > REVIEW_PHOTOS_MAX_COUNT {
            return Err(Self::Error::TooManyPhotos);
        }
        Ok(())
    }
}
