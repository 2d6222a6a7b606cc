use super::*;

pub fn register_foodie(
    connections: &sqlite::Connections,
    notify: &dyn NotificationGateway,
    new_user: usecases::NewUser,
) -> Result<User> {
    let user = connections.exclusive()?.transaction(|conn| {
        usecases::register_foodie(conn, new_user).map_err(|err| {
            warn!("Failed to register new foodie: {err}");
            err
        })
    })?;
    notify.notify(NotificationEvent::UserRegistered { user: &user });
    Ok(user)
}

pub fn register_restaurant_owner(
    connections: &sqlite::Connections,
    notify: &dyn NotificationGateway,
    new_user: usecases::NewUser,
) -> Result<(User, Restaurant)> {
    let (user, restaurant) = connections.exclusive()?.transaction(|conn| {
        usecases::register_restaurant_owner(conn, new_user).map_err(|err| {
            warn!("Failed to register new restaurant owner: {err}");
            err
        })
    })?;
    notify.notify(NotificationEvent::UserRegistered { user: &user });
    Ok((user, restaurant))
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    fn new_user(email: &str) -> usecases::NewUser {
        usecases::NewUser {
            username: "Luigi".into(),
            email: email.into(),
            password: "secret".into(),
        }
    }

    #[test]
    fn register_owner_with_placeholder_restaurant() {
        let fixture = BackendFixture::new();
        let (owner, restaurant) = flows::register_restaurant_owner(
            &fixture.db_connections,
            &fixture.notify,
            new_user("luigi@example.com"),
        )
        .unwrap();
        assert_eq!(Some(restaurant.id.clone()), owner.restaurant_id);
        assert_eq!("Luigi's Restaurant", restaurant.name);

        let db = fixture.db_connections.shared().unwrap();
        let stored = db.get_user(&owner.id).unwrap();
        assert_eq!(Some(restaurant.id.clone()), stored.restaurant_id);
        assert_eq!(owner.id, db.get_restaurant(&restaurant.id).unwrap().owner_id);
    }

    #[test]
    fn reject_duplicate_email_without_side_effects() {
        let fixture = BackendFixture::new();
        flows::register_foodie(
            &fixture.db_connections,
            &fixture.notify,
            new_user("luigi@example.com"),
        )
        .unwrap();
        let err = flows::register_restaurant_owner(
            &fixture.db_connections,
            &fixture.notify,
            new_user("LUIGI@example.com"),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            AppError::Business(BError::Parameter(usecases::Error::UserExists))
        ));
        let db = fixture.db_connections.shared().unwrap();
        assert_eq!(1, db.count_users().unwrap());
        assert!(db.all_restaurants().unwrap().is_empty());
    }
}
