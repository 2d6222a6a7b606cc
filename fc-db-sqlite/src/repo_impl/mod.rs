// NOTE:
// All timestamps with the `_at` postfix are stored
// as unix timestamp in **milli**seconds.

use anyhow::anyhow;
use diesel::{
    self,
    prelude::*,
    result::{DatabaseErrorKind, Error as DieselError},
};

use fc_core::{
    entities::*,
    repositories::{self as repo, *},
};

use super::*;

mod follow;
mod idempotency;
mod promotion;
mod redemption_code;
mod restaurant;
mod review;
mod user;

type Result<T> = std::result::Result<T, repo::Error>;

pub fn from_diesel_err(err: DieselError) -> repo::Error {
    match err {
        DieselError::NotFound => repo::Error::NotFound,
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            repo::Error::AlreadyExists
        }
        _ => repo::Error::Other(err.into()),
    }
}

fn load_url(url: String) -> Option<Url> {
    url.parse()
        .map_err(|err| {
            // This should never happen if URLs have been validated properly on insert
            log::error!("Failed to load invalid URL '{url}': {err}");
            err
        })
        .ok()
}

fn load_points(points: i64) -> Result<u64> {
    u64::try_from(points).map_err(|_| anyhow!("Invalid number of points: {points}").into())
}

fn points_value(points: u64) -> Result<i64> {
    i64::try_from(points).map_err(|_| anyhow!("Number of points out of range: {points}").into())
}

fn load_offer_id(offer_id: String) -> OfferId {
    // Offer ids have been parsed before they have been stored
    OfferId::new_unchecked(offer_id)
}
