use reqwest::blocking::Response;
use serde::de::DeserializeOwned;
use thiserror::Error;

mod location;
mod public;
mod user;

pub use self::{location::*, public::*, user::*};

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum Error {
    #[error("{0}")]
    Fetch(String),

    #[error("{0}")]
    Api(#[from] fc_boundary::Error),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Self::Fetch(format!("{err}"))
    }
}

fn into_json<T>(response: Response) -> Result<T>
where
    T: DeserializeOwned,
{
    // ensure we've got 2xx status
    let status = response.status();
    if status.is_success() {
        Ok(response.json()?)
    } else {
        match response.json::<fc_boundary::Error>() {
            Ok(err) => Err(err.into()),
            Err(_) => Err(Error::Fetch(format!("Unexpected response status: {status}"))),
        }
    }
}
