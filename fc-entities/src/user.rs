use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::{FromPrimitive as _, ToPrimitive as _};
use strum::{AsRefStr, Display, EnumIter, EnumString};
use thiserror::Error;

use crate::{email::EmailAddress, id::Id, password::Password, time::Timestamp, url::Url};

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id                  : Id,
    pub username            : String,
    pub email               : EmailAddress,
    pub password            : Password,
    pub kind                : UserKind,
    pub loyalty_points      : u64,
    pub profile_picture_url : Option<Url>,
    pub bio                 : Option<String>,
    pub restaurant_id       : Option<Id>,
    pub created_at          : Timestamp,
}

impl User {
    pub fn tier(&self) -> Tier {
        Tier::from_points(self.loyalty_points)
    }

    pub fn is_restaurant_owner(&self) -> bool {
        self.kind == UserKind::RestaurantOwner
    }

    /// Whether this user is the owning principal of the given restaurant.
    pub fn owns_restaurant(&self, restaurant_id: &Id) -> bool {
        self.is_restaurant_owner() && self.restaurant_id.as_ref() == Some(restaurant_id)
    }
}

pub type UserKindPrimitive = i16;

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive, ToPrimitive, EnumString, AsRefStr)]
pub enum UserKind {
    #[strum(serialize = "foodie")]
    Foodie          = 0,
    #[strum(serialize = "restaurant")]
    RestaurantOwner = 1,
}

#[derive(Debug, Error)]
#[error("Invalid user kind primitive: {0}")]
pub struct InvalidUserKindPrimitive(UserKindPrimitive);

impl TryFrom<UserKindPrimitive> for UserKind {
    type Error = InvalidUserKindPrimitive;
    fn try_from(from: UserKindPrimitive) -> Result<Self, Self::Error> {
        Self::from_i16(from).ok_or(InvalidUserKindPrimitive(from))
    }
}

impl From<UserKind> for UserKindPrimitive {
    fn from(from: UserKind) -> Self {
        from.to_i16().expect("user kind primitive")
    }
}

/// Loyalty tier, derived from the accumulated points.
#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumIter, EnumString, AsRefStr)]
pub enum Tier {
    Bronze,
    Silver,
    Gold,
    Platinum,
}

impl Tier {
    /// The minimum number of points required to reach this tier.
    pub const fn min_points(self) -> u64 {
        match self {
            Self::Bronze => 0,
            Self::Silver => 100,
            Self::Gold => 500,
            Self::Platinum => 2_000,
        }
    }

    pub const fn from_points(points: u64) -> Self {
        if points >= Self::Platinum.min_points() {
            Self::Platinum
        } else if points >= Self::Gold.min_points() {
            Self::Gold
        } else if points >= Self::Silver.min_points() {
            Self::Silver
        } else {
            Self::Bronze
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn tier_thresholds() {
        assert_eq!(Tier::Bronze, Tier::from_points(0));
        assert_eq!(Tier::Bronze, Tier::from_points(99));
        assert_eq!(Tier::Silver, Tier::from_points(100));
        assert_eq!(Tier::Silver, Tier::from_points(499));
        assert_eq!(Tier::Gold, Tier::from_points(500));
        assert_eq!(Tier::Gold, Tier::from_points(1_999));
        assert_eq!(Tier::Platinum, Tier::from_points(2_000));
        assert_eq!(Tier::Platinum, Tier::from_points(u64::MAX));
    }

    #[test]
    fn tier_is_monotonic_in_points() {
        let mut last = Tier::Bronze;
        for points in 0..3_000 {
            let tier = Tier::from_points(points);
            assert!(tier >= last);
            last = tier;
        }
        for tier in Tier::iter() {
            assert_eq!(tier, Tier::from_points(tier.min_points()));
        }
    }

    #[test]
    fn user_kind_primitives() {
        for kind in [UserKind::Foodie, UserKind::RestaurantOwner] {
            let p = UserKindPrimitive::from(kind);
            assert_eq!(kind, UserKind::try_from(p).unwrap());
        }
        assert!(UserKind::try_from(7).is_err());
        assert_eq!("restaurant", UserKind::RestaurantOwner.as_ref());
        assert_eq!(UserKind::Foodie, "foodie".parse().unwrap());
    }
}
