use crate::{geo::MapPoint, id::Id, time::Timestamp};

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct Restaurant {
    pub id           : Id,
    pub owner_id     : Id,
    pub name         : String,
    pub address      : String,
    pub pos          : MapPoint,
    pub cuisine_type : String,
    pub is_verified  : bool,
    pub created_at   : Timestamp,
}

impl Restaurant {
    pub const DEFAULT_CUISINE_TYPE: &'static str = "Unknown";

    /// The placeholder restaurant that is registered together
    /// with a new owner account.
    pub fn placeholder_for_owner(owner_id: Id, owner_name: &str, created_at: Timestamp) -> Self {
        Self {
            id: Id::new(),
            owner_id,
            name: format!("{owner_name}'s Restaurant"),
            address: String::new(),
            pos: MapPoint::from_lat_lng_deg(0.0, 0.0),
            cuisine_type: Self::DEFAULT_CUISINE_TYPE.to_owned(),
            is_verified: false,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_restaurant() {
        let owner_id = Id::new();
        let r = Restaurant::placeholder_for_owner(owner_id.clone(), "mario", Timestamp::now());
        assert_eq!("mario's Restaurant", r.name);
        assert_eq!(owner_id, r.owner_id);
        assert_eq!("Unknown", r.cuisine_type);
        assert!(!r.is_verified);
        assert!(r.address.is_empty());
        assert_eq!((0.0, 0.0), r.pos.to_lat_lng_deg());
    }
}
