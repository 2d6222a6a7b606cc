use super::schema::*;

#[derive(Insertable)]
#[diesel(table_name = users)]
pub struct NewUser<'a> {
    pub id: &'a str,
    pub username: &'a str,
    pub email: &'a str,
    pub password: &'a str,
    pub kind: i16,
    pub loyalty_points: i64,
    pub profile_picture_url: Option<&'a str>,
    pub bio: Option<&'a str>,
    pub restaurant_id: Option<&'a str>,
    pub created_at: i64,
}

#[derive(Queryable)]
pub struct UserEntity {
    pub id: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub kind: i16,
    pub loyalty_points: i64,
    pub profile_picture_url: Option<String>,
    pub bio: Option<String>,
    pub restaurant_id: Option<String>,
    pub created_at: i64,
}

#[derive(Insertable)]
#[diesel(table_name = restaurants)]
pub struct NewRestaurant<'a> {
    pub id: &'a str,
    pub owner_id: &'a str,
    pub name: &'a str,
    pub address: &'a str,
    pub lat: f64,
    pub lon: f64,
    pub cuisine_type: &'a str,
    pub is_verified: bool,
    pub created_at: i64,
}

#[derive(Queryable)]
pub struct RestaurantEntity {
    pub id: String,
    pub owner_id: String,
    pub name: String,
    pub address: String,
    pub lat: f64,
    pub lon: f64,
    pub cuisine_type: String,
    pub is_verified: bool,
    pub created_at: i64,
}

#[derive(Insertable)]
#[diesel(table_name = reviews)]
pub struct NewReview<'a> {
    pub id: &'a str,
    pub author_id: &'a str,
    pub restaurant_id: &'a str,
    pub rating: i16,
    pub review_text: &'a str,
    pub is_promoter_request: bool,
    pub created_at: i64,
}

#[derive(Queryable)]
pub struct ReviewEntity {
    pub id: String,
    pub author_id: String,
    pub restaurant_id: String,
    pub rating: i16,
    pub review_text: String,
    pub is_promoter_request: bool,
    pub created_at: i64,
}

#[derive(Insertable)]
#[diesel(table_name = review_photos)]
pub struct NewReviewPhoto<'a> {
    pub review_id: &'a str,
    pub position: i16,
    pub url: &'a str,
}

#[derive(Queryable)]
pub struct ReviewPhotoEntity {
    pub review_id: String,
    pub position: i16,
    pub url: String,
}

#[derive(Insertable)]
#[diesel(table_name = promotion_requests)]
pub struct NewPromotionRequest<'a> {
    pub review_id: &'a str,
    pub restaurant_id: &'a str,
    pub promoter_id: &'a str,
    pub status: i16,
    pub created_at: i64,
    pub approved_at: Option<i64>,
    pub offer_id: Option<&'a str>,
}

#[derive(Queryable)]
pub struct PromotionRequestEntity {
    pub review_id: String,
    pub restaurant_id: String,
    pub promoter_id: String,
    pub status: i16,
    pub created_at: i64,
    pub approved_at: Option<i64>,
    pub offer_id: Option<String>,
}

#[derive(Insertable)]
#[diesel(table_name = redemption_codes)]
pub struct NewRedemptionCode<'a> {
    pub id: &'a str,
    pub review_id: &'a str,
    pub offer_id: &'a str,
    pub restaurant_id: &'a str,
    pub promoter_id: &'a str,
    pub sealed: &'a str,
    pub reward_points: i64,
    pub issued_at: i64,
    pub expires_at: Option<i64>,
    pub redeemed_at: Option<i64>,
    pub redeemed_by: Option<&'a str>,
}

#[derive(Queryable)]
pub struct RedemptionCodeEntity {
    pub id: String,
    pub review_id: String,
    pub offer_id: String,
    pub restaurant_id: String,
    pub promoter_id: String,
    pub sealed: String,
    pub reward_points: i64,
    pub issued_at: i64,
    pub expires_at: Option<i64>,
    pub redeemed_at: Option<i64>,
    pub redeemed_by: Option<String>,
}

#[derive(Insertable)]
#[diesel(table_name = followers)]
pub struct NewFollower<'a> {
    pub follower_id: &'a str,
    pub following_id: &'a str,
    pub created_at: i64,
}

#[derive(Insertable)]
#[diesel(table_name = idempotency_keys)]
pub struct NewIdempotencyKey<'a> {
    pub owner_id: &'a str,
    pub idem_key: &'a str,
    pub operation: &'a str,
    pub request_ref: &'a str,
    pub resource_id: &'a str,
    pub created_at: i64,
}

#[derive(Queryable)]
pub struct IdempotencyKeyEntity {
    pub owner_id: String,
    pub idem_key: String,
    pub operation: String,
    pub request_ref: String,
    pub resource_id: String,
    pub created_at: i64,
}
