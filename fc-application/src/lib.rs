#[macro_use]
extern crate log;

mod approve_promotion;
mod create_review;
mod follow_user;
mod redeem_code;
mod register_user;

pub mod prelude {
    pub use super::{
        approve_promotion::*, create_review::*, follow_user::*, redeem_code::*, register_user::*,
    };
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use fc_core::{
    entities::*,
    gateways::{
        code_cipher::CodeCipher,
        notify::{NotificationEvent, NotificationGateway},
    },
    usecases,
};

#[cfg(test)]
pub(crate) mod tests;

pub(crate) mod sqlite {
    pub use fc_db_sqlite::Connections;
}
