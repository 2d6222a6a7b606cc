use crate::{gateways::code_cipher::CodeCipherError, repositories, util::validate::ReviewInvalidation};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid username")]
    Username,
    #[error("Invalid email address")]
    EmailAddress,
    #[error("Invalid password")]
    Password,
    #[error("The user already exists")]
    UserExists,
    #[error("Invalid credentials")]
    Credentials,
    #[error("This is not allowed")]
    Forbidden,
    #[error("This is not allowed without auth")]
    Unauthorized,
    #[error("Rating value out of range")]
    RatingValue,
    #[error("Review text is too long")]
    ReviewText,
    #[error("Too many photos")]
    TooManyPhotos,
    #[error("Invalid URL")]
    Url,
    #[error("Invalid position")]
    InvalidPosition,
    #[error("Invalid offer id")]
    OfferId,
    #[error("Users cannot follow themselves")]
    SelfFollow,
    #[error("The promotion has already been approved")]
    AlreadyApproved,
    #[error("Invalid idempotency key")]
    IdempotencyKey,
    #[error("The idempotency key has already been used for a different request")]
    IdempotencyKeyReused,
    #[error("Invalid redemption code")]
    InvalidCode,
    #[error("The redemption code has expired")]
    CodeExpired,
    #[error("The redemption code has already been redeemed")]
    AlreadyRedeemed,
    #[error(transparent)]
    CodeCipher(CodeCipherError),
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl From<fc_entities::password::ParseError> for Error {
    fn from(_: fc_entities::password::ParseError) -> Self {
        Self::Password
    }
}

impl From<fc_entities::email::EmailAddressParseError> for Error {
    fn from(_: fc_entities::email::EmailAddressParseError) -> Self {
        Self::EmailAddress
    }
}

impl From<fc_entities::offer::OfferIdParseError> for Error {
    fn from(_: fc_entities::offer::OfferIdParseError) -> Self {
        Self::OfferId
    }
}

impl From<fc_entities::url::ParseError> for Error {
    fn from(_: fc_entities::url::ParseError) -> Self {
        Self::Url
    }
}

impl From<ReviewInvalidation> for Error {
    fn from(err: ReviewInvalidation) -> Self {
        match err {
            ReviewInvalidation::RatingValue => Self::RatingValue,
            ReviewInvalidation::TextTooLong => Self::ReviewText,
            ReviewInvalidation::TooManyPhotos => Self::TooManyPhotos,
        }
    }
}
