pub mod gateways;
pub mod offers;
pub mod repositories;
pub mod usecases;
pub mod util;

pub mod entities {
    pub use fc_entities::{
        email::*, follow::*, geo::*, id::*, idempotency::*, offer::*, password::*, promotion::*,
        rating::*, redemption::*, restaurant::*, review::*, time::*, url::*, user::*,
    };
}
