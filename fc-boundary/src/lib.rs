use serde::{Deserialize, Serialize};

#[cfg(feature = "entity-conversions")]
mod conv;

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct Token {
    pub token: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// The plain acknowledgement of a successful request.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq, Eq))]
pub struct Ack {
    pub ok: bool,
}

impl Ack {
    pub const OK: Self = Self { ok: true };
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash)
)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    Foodie,
    Restaurant,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash)
)]
pub enum Level {
    Bronze,
    Silver,
    Gold,
    Platinum,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id                  : String,
    pub username            : String,
    pub email               : String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_picture_url : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio                 : Option<String>,
    pub loyalty_points      : u64,
    pub level               : Level,
    pub user_type           : UserType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restaurant_id       : Option<String>,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub id           : String,
    pub name         : String,
    pub address      : String,
    pub latitude     : f64,
    pub longitude    : f64,
    pub cuisine_type : String,
    pub is_verified  : bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_km  : Option<f64>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct RestaurantWithReviews {
    #[serde(flatten)]
    pub restaurant: Restaurant,
    pub reviews: Vec<Review>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct ReviewAuthor {
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_picture_url: Option<String>,
    pub level: Level,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct ReviewedRestaurant {
    pub name: String,
    pub cuisine_type: String,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id            : String,
    pub user_id       : String,
    pub restaurant_id : String,
    pub rating        : u8,
    pub review_text   : String,
    pub is_promoter   : bool,
    pub photos        : Vec<String>,
    pub created_at    : i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user          : Option<ReviewAuthor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restaurant    : Option<ReviewedRestaurant>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
#[serde(rename_all = "camelCase")]
pub struct NewReview {
    pub rating: i64,
    #[serde(default)]
    pub review_text: String,
    #[serde(default)]
    pub is_promoter: bool,
    #[serde(default)]
    pub photo_urls: Vec<String>,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct PromotionRequest {
    pub review_id     : String,
    pub restaurant_id : String,
    pub promoter_id   : String,
    pub username      : String,
    pub review_text   : String,
    pub rating        : u8,
    pub created_at    : i64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
#[serde(rename_all = "camelCase")]
pub struct ApprovePromotion {
    pub offer_id: String,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct IssuedCode {
    pub encrypted_code : String,
    pub code_id        : String,
    pub offer_id       : String,
    pub reward_points  : u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at     : Option<i64>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
#[serde(rename_all = "camelCase")]
pub struct RedeemCode {
    pub encrypted_code: String,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct RedemptionResult {
    pub code_id        : String,
    pub offer_id       : String,
    pub restaurant_id  : String,
    pub promoter_id    : String,
    pub points_awarded : u64,
    pub redeemed_at    : i64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash)
)]
pub enum ErrorKind {
    Unauthorized,
    Forbidden,
    NotFound,
    Conflict,
    InvalidCode,
    Expired,
    AlreadyRedeemed,
    ValidationError,
    Internal,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, PartialEq, Eq, thiserror::Error)
)]
#[cfg_attr(feature = "extra-derive", error("{message}"))]
#[serde(rename_all = "camelCase")]
pub struct Error {
    pub http_status: u16,
    pub kind: ErrorKind,
    pub message: String,
}
