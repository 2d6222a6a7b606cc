pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{restaurant_builder::*, review_builder::*, user_builder::*};

pub mod user_builder {

    use super::*;
    use crate::{email::*, id::*, password::*, time::*, user::*};

    #[derive(Debug)]
    pub struct UserBuild {
        user: User,
    }

    impl UserBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.user.id = id.into();
            self
        }
        pub fn username(mut self, username: &str) -> Self {
            self.user.username = username.into();
            self
        }
        pub fn email(mut self, email: &str) -> Self {
            self.user.email = email.parse().unwrap();
            self
        }
        pub fn password(mut self, password: &str) -> Self {
            self.user.password = password.parse().unwrap();
            self
        }
        pub fn kind(mut self, kind: UserKind) -> Self {
            self.user.kind = kind;
            self
        }
        pub fn loyalty_points(mut self, points: u64) -> Self {
            self.user.loyalty_points = points;
            self
        }
        pub fn restaurant_id(mut self, id: &str) -> Self {
            self.user.restaurant_id = Some(id.into());
            self
        }
        pub fn finish(self) -> User {
            self.user
        }
    }

    impl Builder for User {
        type Build = UserBuild;
        fn build() -> UserBuild {
            UserBuild {
                user: User {
                    id: Id::new(),
                    username: "foodie".into(),
                    email: EmailAddress::new_unchecked("foodie@example.com".into()),
                    password: Password::from("not-a-valid-hash".to_string()),
                    kind: UserKind::Foodie,
                    loyalty_points: 0,
                    profile_picture_url: None,
                    bio: None,
                    restaurant_id: None,
                    created_at: Timestamp::now(),
                },
            }
        }
    }
}

pub mod restaurant_builder {

    use super::*;
    use crate::{geo::*, id::*, restaurant::*, time::*};

    #[derive(Debug)]
    pub struct RestaurantBuild {
        restaurant: Restaurant,
    }

    impl RestaurantBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.restaurant.id = id.into();
            self
        }
        pub fn owner_id(mut self, id: &str) -> Self {
            self.restaurant.owner_id = id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.restaurant.name = name.into();
            self
        }
        pub fn pos(mut self, pos: MapPoint) -> Self {
            self.restaurant.pos = pos;
            self
        }
        pub fn cuisine_type(mut self, cuisine_type: &str) -> Self {
            self.restaurant.cuisine_type = cuisine_type.into();
            self
        }
        pub fn finish(self) -> Restaurant {
            self.restaurant
        }
    }

    impl Builder for Restaurant {
        type Build = RestaurantBuild;
        fn build() -> RestaurantBuild {
            RestaurantBuild {
                restaurant: Restaurant {
                    id: Id::new(),
                    owner_id: Id::new(),
                    name: "Trattoria".into(),
                    address: String::new(),
                    pos: MapPoint::from_lat_lng_deg(0.0, 0.0),
                    cuisine_type: "Italian".into(),
                    is_verified: false,
                    created_at: Timestamp::now(),
                },
            }
        }
    }
}

pub mod review_builder {

    use super::*;
    use crate::{id::*, rating::*, review::*, time::*};

    #[derive(Debug)]
    pub struct ReviewBuild {
        review: Review,
    }

    impl ReviewBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.review.id = id.into();
            self
        }
        pub fn author_id(mut self, id: &str) -> Self {
            self.review.author_id = id.into();
            self
        }
        pub fn restaurant_id(mut self, id: &str) -> Self {
            self.review.restaurant_id = id.into();
            self
        }
        pub fn rating(mut self, rating: u8) -> Self {
            self.review.rating = rating.into();
            self
        }
        pub fn text(mut self, text: &str) -> Self {
            self.review.text = text.into();
            self
        }
        pub fn promoter_request(mut self, flag: bool) -> Self {
            self.review.is_promoter_request = flag;
            self
        }
        pub fn created_at(mut self, at: Timestamp) -> Self {
            self.review.created_at = at;
            self
        }
        pub fn finish(self) -> Review {
            self.review
        }
    }

    impl Builder for Review {
        type Build = ReviewBuild;
        fn build() -> ReviewBuild {
            ReviewBuild {
                review: Review {
                    id: Id::new(),
                    author_id: Id::new(),
                    restaurant_id: Id::new(),
                    rating: RatingValue::max(),
                    text: "Delicious".into(),
                    photo_urls: vec![],
                    is_promoter_request: false,
                    created_at: Timestamp::now(),
                },
            }
        }
    }
}
