table! {
    users (id) {
        id -> Text,
        username -> Text,
        email -> Text,
        password -> Text,
        kind -> SmallInt,
        loyalty_points -> BigInt,
        profile_picture_url -> Nullable<Text>,
        bio -> Nullable<Text>,
        restaurant_id -> Nullable<Text>,
        created_at -> BigInt,
    }
}

table! {
    restaurants (id) {
        id -> Text,
        owner_id -> Text,
        name -> Text,
        address -> Text,
        lat -> Double,
        lon -> Double,
        cuisine_type -> Text,
        is_verified -> Bool,
        created_at -> BigInt,
    }
}

table! {
    reviews (id) {
        id -> Text,
        author_id -> Text,
        restaurant_id -> Text,
        rating -> SmallInt,
        review_text -> Text,
        is_promoter_request -> Bool,
        created_at -> BigInt,
    }
}

table! {
    review_photos (review_id, position) {
        review_id -> Text,
        position -> SmallInt,
        url -> Text,
    }
}

table! {
    promotion_requests (review_id) {
        review_id -> Text,
        restaurant_id -> Text,
        promoter_id -> Text,
        status -> SmallInt,
        created_at -> BigInt,
        approved_at -> Nullable<BigInt>,
        offer_id -> Nullable<Text>,
    }
}

table! {
    redemption_codes (id) {
        id -> Text,
        review_id -> Text,
        offer_id -> Text,
        restaurant_id -> Text,
        promoter_id -> Text,
        sealed -> Text,
        reward_points -> BigInt,
        issued_at -> BigInt,
        expires_at -> Nullable<BigInt>,
        redeemed_at -> Nullable<BigInt>,
        redeemed_by -> Nullable<Text>,
    }
}

table! {
    followers (follower_id, following_id) {
        follower_id -> Text,
        following_id -> Text,
        created_at -> BigInt,
    }
}

table! {
    idempotency_keys (owner_id, idem_key) {
        owner_id -> Text,
        idem_key -> Text,
        operation -> Text,
        request_ref -> Text,
        resource_id -> Text,
        created_at -> BigInt,
    }
}

joinable!(reviews -> restaurants (restaurant_id));
joinable!(review_photos -> reviews (review_id));
joinable!(promotion_requests -> reviews (review_id));

allow_tables_to_appear_in_same_query!(
    users,
    restaurants,
    reviews,
    review_photos,
    promotion_requests,
    redemption_codes,
    followers,
    idempotency_keys,
);
