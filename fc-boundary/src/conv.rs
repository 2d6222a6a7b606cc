use super::*;
use fc_entities as e;

impl From<e::user::Tier> for Level {
    fn from(from: e::user::Tier) -> Self {
        use e::user::Tier::*;
        match from {
            Bronze => Level::Bronze,
            Silver => Level::Silver,
            Gold => Level::Gold,
            Platinum => Level::Platinum,
        }
    }
}

impl From<e::user::UserKind> for UserType {
    fn from(from: e::user::UserKind) -> Self {
        use e::user::UserKind::*;
        match from {
            Foodie => UserType::Foodie,
            RestaurantOwner => UserType::Restaurant,
        }
    }
}

impl From<e::user::User> for User {
    fn from(from: e::user::User) -> Self {
        let level = from.tier().into();
        let e::user::User {
            id,
            username,
            email,
            password: _password,
            kind,
            loyalty_points,
            profile_picture_url,
            bio,
            restaurant_id,
            created_at: _,
        } = from;
        Self {
            id: id.into(),
            username,
            email: email.into_string(),
            profile_picture_url: profile_picture_url.map(String::from),
            bio,
            loyalty_points,
            level,
            user_type: kind.into(),
            restaurant_id: restaurant_id.map(String::from),
        }
    }
}

impl From<&e::user::User> for ReviewAuthor {
    fn from(from: &e::user::User) -> Self {
        Self {
            username: from.username.clone(),
            profile_picture_url: from.profile_picture_url.as_ref().map(ToString::to_string),
            level: from.tier().into(),
        }
    }
}

impl From<e::restaurant::Restaurant> for Restaurant {
    fn from(from: e::restaurant::Restaurant) -> Self {
        let e::restaurant::Restaurant {
            id,
            owner_id: _,
            name,
            address,
            pos,
            cuisine_type,
            is_verified,
            created_at: _,
        } = from;
        let (latitude, longitude) = pos.to_lat_lng_deg();
        Self {
            id: id.into(),
            name,
            address,
            latitude,
            longitude,
            cuisine_type,
            is_verified,
            distance_km: None,
        }
    }
}

impl From<&e::restaurant::Restaurant> for ReviewedRestaurant {
    fn from(from: &e::restaurant::Restaurant) -> Self {
        Self {
            name: from.name.clone(),
            cuisine_type: from.cuisine_type.clone(),
        }
    }
}

impl From<e::review::Review> for Review {
    fn from(from: e::review::Review) -> Self {
        let e::review::Review {
            id,
            author_id,
            restaurant_id,
            rating,
            text,
            photo_urls,
            is_promoter_request,
            created_at,
        } = from;
        Self {
            id: id.into(),
            user_id: author_id.into(),
            restaurant_id: restaurant_id.into(),
            rating: rating.into(),
            review_text: text,
            is_promoter: is_promoter_request,
            photos: photo_urls.into_iter().map(String::from).collect(),
            created_at: created_at.as_millis(),
            user: None,
            restaurant: None,
        }
    }
}

impl From<e::redemption::RedemptionCode> for IssuedCode {
    fn from(from: e::redemption::RedemptionCode) -> Self {
        let e::redemption::RedemptionCode {
            id,
            offer_id,
            sealed,
            reward_points,
            expires_at,
            ..
        } = from;
        Self {
            encrypted_code: sealed,
            code_id: id.into(),
            offer_id: offer_id.into(),
            reward_points,
            expires_at: expires_at.map(e::time::Timestamp::as_millis),
        }
    }
}

impl From<e::redemption::Redemption> for RedemptionResult {
    fn from(from: e::redemption::Redemption) -> Self {
        let e::redemption::Redemption {
            code_id,
            offer_id,
            restaurant_id,
            promoter_id,
            points_awarded,
            redeemed_at,
        } = from;
        Self {
            code_id: code_id.into(),
            offer_id: offer_id.into(),
            restaurant_id: restaurant_id.into(),
            promoter_id: promoter_id.into(),
            points_awarded,
            redeemed_at: redeemed_at.as_millis(),
        }
    }
}
