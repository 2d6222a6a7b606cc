use super::prelude::*;
use crate::repositories::Error as RepoError;

/// Resolves the principal of an authenticated session.
///
/// A session that refers to a user that no longer exists
/// is treated as unauthenticated.
pub fn authorize_user_by_id<R: UserRepo>(repo: &R, user_id: &Id) -> Result<User> {
    match repo.get_user(user_id) {
        Ok(user) => Ok(user),
        Err(RepoError::NotFound) => Err(Error::Unauthorized),
        Err(err) => Err(Error::Repo(err)),
    }
}

/// Resolves the restaurant that is owned by the given user.
pub fn authorize_restaurant_owner<R: RestaurantRepo>(repo: &R, user: &User) -> Result<Restaurant> {
    let restaurant_id = match (&user.kind, &user.restaurant_id) {
        (UserKind::RestaurantOwner, Some(id)) => id,
        _ => return Err(Error::Forbidden),
    };
    let restaurant = match repo.get_restaurant(restaurant_id) {
        Ok(restaurant) => restaurant,
        Err(RepoError::NotFound) => return Err(Error::Forbidden),
        Err(err) => return Err(Error::Repo(err)),
    };
    if restaurant.owner_id != user.id {
        return Err(Error::Forbidden);
    }
    Ok(restaurant)
}
