mod approve_promotion;
mod authorize;
mod create_review;
mod error;
mod follow_user;
mod login;
mod promotion_requests;
mod recent_reviews;
mod redeem_code;
mod register;
mod restaurants;

#[cfg(test)]
pub mod tests;

pub use self::{
    approve_promotion::*, authorize::*, create_review::*, error::Error, follow_user::*,
    login::*, promotion_requests::*, recent_reviews::*, redeem_code::*,
    register::*, restaurants::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{entities::*, repositories::*};
}

use self::prelude::*;

fn load_users_by_id<R: UserRepo>(
    repo: &R,
    ids: &[&Id],
) -> Result<std::collections::HashMap<Id, User>> {
    let mut ids: Vec<&str> = ids.iter().map(|id| id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    let users = repo.get_users(&ids)?;
    Ok(users.into_iter().map(|u| (u.id.clone(), u)).collect())
}
