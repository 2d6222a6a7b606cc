use super::prelude::*;

pub struct Credentials<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

pub fn login_with_email<R>(repo: &R, login: &Credentials) -> Result<User>
where
    R: UserRepo,
{
    let email = login
        .email
        .parse::<EmailAddress>()
        .map_err(|_| Error::Credentials)?;
    match repo.try_get_user_by_email(&email)? {
        Some(user) if user.password.verify(login.password) => Ok(user),
        _ => Err(Error::Credentials),
    }
}

#[cfg(test)]
mod tests {
    use super::{
        super::{register_foodie, tests::MockDb, NewUser},
        *,
    };

    fn db_with_user() -> MockDb {
        let db = MockDb::default();
        register_foodie(
            &db,
            NewUser {
                username: "foo".into(),
                email: "foo@bar.de".into(),
                password: "secret".into(),
            },
        )
        .unwrap();
        db
    }

    #[test]
    fn login_with_valid_credentials() {
        let db = db_with_user();
        let user = login_with_email(
            &db,
            &Credentials {
                email: "Foo@Bar.de",
                password: "secret",
            },
        )
        .unwrap();
        assert_eq!("foo", user.username);
    }

    #[test]
    fn login_with_invalid_credentials() {
        let db = db_with_user();
        for (email, password) in [
            ("foo@bar.de", "wrong!"),
            ("baz@bar.de", "secret"),
            ("", "secret"),
        ] {
            assert!(matches!(
                login_with_email(&db, &Credentials { email, password }),
                Err(Error::Credentials)
            ));
        }
    }
}
