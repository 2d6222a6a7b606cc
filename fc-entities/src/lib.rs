#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # fc-entities
//!
//! Reusable, agnostic domain entities for Foodie's Circle.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod email;
pub mod follow;
pub mod geo;
pub mod id;
pub mod idempotency;
pub mod offer;
pub mod password;
pub mod promotion;
pub mod rating;
pub mod redemption;
pub mod restaurant;
pub mod review;
pub mod time;
pub mod user;
pub mod url {
    pub use url::{ParseError, Url};
}

#[cfg(any(test, feature = "builders"))]
pub mod builders;
