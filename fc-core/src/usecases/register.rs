use super::prelude::*;
use crate::{repositories::Error as RepoError, util::validate};

#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
}

fn prepare_user<R: UserRepo>(repo: &R, u: NewUser, kind: UserKind) -> Result<User> {
    if !validate::is_valid_username(&u.username) {
        return Err(Error::Username);
    }
    let email = u.email.parse::<EmailAddress>()?;
    if !validate::is_valid_email(email.as_str()) {
        return Err(Error::EmailAddress);
    }
    if repo.try_get_user_by_email(&email)?.is_some() {
        return Err(Error::UserExists);
    }
    let password = u.password.parse::<Password>()?;
    Ok(User {
        id: Id::new(),
        username: u.username.trim().to_owned(),
        email,
        password,
        kind,
        loyalty_points: 0,
        profile_picture_url: None,
        bio: None,
        restaurant_id: None,
        created_at: Timestamp::now(),
    })
}

fn store_user<R: UserRepo>(repo: &R, user: &User) -> Result<()> {
    log::debug!("Creating new user: email = {}", user.email);
    repo.create_user(user).map_err(|err| match err {
        RepoError::AlreadyExists => Error::UserExists,
        err => err.into(),
    })
}

pub fn register_foodie<R: UserRepo>(repo: &R, new_user: NewUser) -> Result<User> {
    let user = prepare_user(repo, new_user, UserKind::Foodie)?;
    store_user(repo, &user)?;
    Ok(user)
}

/// Registers a restaurant owner together with a placeholder
/// restaurant that can be completed later.
pub fn register_restaurant_owner<R>(repo: &R, new_user: NewUser) -> Result<(User, Restaurant)>
where
    R: UserRepo + RestaurantRepo,
{
    let mut user = prepare_user(repo, new_user, UserKind::RestaurantOwner)?;
    let restaurant =
        Restaurant::placeholder_for_owner(user.id.clone(), &user.username, user.created_at);
    store_user(repo, &user)?;
    repo.create_restaurant(&restaurant)?;
    repo.set_user_restaurant(&user.id, &restaurant.id)?;
    user.restaurant_id = Some(restaurant.id.clone());
    Ok((user, restaurant))
}
