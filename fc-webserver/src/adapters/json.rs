pub use fc_boundary::*;

use fc_core::usecases;

pub mod from_json {
    //! JSON -> use case parameters

    use super::*;

    // NOTE:
    // We cannot impl From<T> here, because the JSON structs
    // and the use case types both are outside this crate.

    pub fn new_user(from: NewUser) -> usecases::NewUser {
        let NewUser {
            username,
            email,
            password,
        } = from;
        usecases::NewUser {
            username,
            email,
            password,
        }
    }

    pub fn new_review(from: NewReview) -> usecases::NewReview {
        let NewReview {
            rating,
            review_text,
            is_promoter,
            photo_urls,
        } = from;
        usecases::NewReview {
            rating,
            text: review_text,
            photo_urls,
            is_promoter_request: is_promoter,
        }
    }
}

pub mod to_json {
    //! Use case results -> JSON

    use super::*;

    pub fn nearby_restaurant(from: usecases::NearbyRestaurant) -> Restaurant {
        let usecases::NearbyRestaurant {
            restaurant,
            distance,
        } = from;
        Restaurant {
            distance_km: Some(distance.to_kilometers()),
            ..restaurant.into()
        }
    }

    pub fn review_with_author(from: usecases::ReviewWithAuthor) -> Review {
        let usecases::ReviewWithAuthor { review, author } = from;
        Review {
            user: Some((&author).into()),
            ..review.into()
        }
    }

    pub fn restaurant_details(from: usecases::RestaurantDetails) -> RestaurantWithReviews {
        let usecases::RestaurantDetails {
            restaurant,
            reviews,
        } = from;
        RestaurantWithReviews {
            restaurant: restaurant.into(),
            reviews: reviews.into_iter().map(review_with_author).collect(),
        }
    }

    pub fn feed_review(from: usecases::FeedReview) -> Review {
        let usecases::FeedReview {
            review,
            author,
            restaurant,
        } = from;
        Review {
            user: Some((&author).into()),
            restaurant: Some((&restaurant).into()),
            ..review.into()
        }
    }

    pub fn pending_promotion(from: usecases::PendingPromotion) -> PromotionRequest {
        let usecases::PendingPromotion {
            request,
            review,
            promoter,
        } = from;
        PromotionRequest {
            review_id: request.review_id.into(),
            restaurant_id: request.restaurant_id.into(),
            promoter_id: request.promoter_id.into(),
            username: promoter.username,
            review_text: review.text,
            rating: review.rating.into(),
            created_at: request.created_at.as_millis(),
        }
    }
}
