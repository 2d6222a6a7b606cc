use super::*;

impl<'a> UserRepo for DbReadOnly<'a> {
    fn create_user(&self, _user: &User) -> Result<()> {
        unreachable!();
    }
    fn set_user_restaurant(&self, _user_id: &Id, _restaurant_id: &Id) -> Result<()> {
        unreachable!();
    }
    fn add_loyalty_points(&self, _user_id: &Id, _points: u64) -> Result<()> {
        unreachable!();
    }

    fn get_user(&self, id: &Id) -> Result<User> {
        get_user(&mut self.conn.borrow_mut(), id)
    }
    fn get_users(&self, ids: &[&str]) -> Result<Vec<User>> {
        get_users(&mut self.conn.borrow_mut(), ids)
    }
    fn get_user_by_email(&self, email: &EmailAddress) -> Result<User> {
        get_user_by_email(&mut self.conn.borrow_mut(), email)
    }
    fn try_get_user_by_email(&self, email: &EmailAddress) -> Result<Option<User>> {
        try_get_user_by_email(&mut self.conn.borrow_mut(), email)
    }
    fn count_users(&self) -> Result<usize> {
        count_users(&mut self.conn.borrow_mut())
    }
}

impl<'a> UserRepo for DbConnection<'a> {
    fn create_user(&self, user: &User) -> Result<()> {
        create_user(&mut self.conn.borrow_mut(), user)
    }
    fn set_user_restaurant(&self, user_id: &Id, restaurant_id: &Id) -> Result<()> {
        set_user_restaurant(&mut self.conn.borrow_mut(), user_id, restaurant_id)
    }
    fn add_loyalty_points(&self, user_id: &Id, points: u64) -> Result<()> {
        add_loyalty_points(&mut self.conn.borrow_mut(), user_id, points)
    }

    fn get_user(&self, id: &Id) -> Result<User> {
        get_user(&mut self.conn.borrow_mut(), id)
    }
    fn get_users(&self, ids: &[&str]) -> Result<Vec<User>> {
        get_users(&mut self.conn.borrow_mut(), ids)
    }
    fn get_user_by_email(&self, email: &EmailAddress) -> Result<User> {
        get_user_by_email(&mut self.conn.borrow_mut(), email)
    }
    fn try_get_user_by_email(&self, email: &EmailAddress) -> Result<Option<User>> {
        try_get_user_by_email(&mut self.conn.borrow_mut(), email)
    }
    fn count_users(&self) -> Result<usize> {
        count_users(&mut self.conn.borrow_mut())
    }
}

fn create_user(conn: &mut SqliteConnection, u: &User) -> Result<()> {
    let new_user = models::NewUser {
        id: u.id.as_str(),
        username: &u.username,
        email: u.email.as_str(),
        password: u.password.as_ref(),
        kind: u.kind.into(),
        loyalty_points: points_value(u.loyalty_points)?,
        profile_picture_url: u.profile_picture_url.as_ref().map(Url::as_str),
        bio: u.bio.as_deref(),
        restaurant_id: u.restaurant_id.as_ref().map(Id::as_str),
        created_at: u.created_at.as_millis(),
    };
    diesel::insert_into(schema::users::table)
        .values(&new_user)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn set_user_restaurant(conn: &mut SqliteConnection, user_id: &Id, restaurant_id: &Id) -> Result<()> {
    use schema::users::dsl;
    let count = diesel::update(dsl::users.filter(dsl::id.eq(user_id.as_str())))
        .set(dsl::restaurant_id.eq(Some(restaurant_id.as_str())))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    debug_assert_eq!(1, count);
    Ok(())
}

fn add_loyalty_points(conn: &mut SqliteConnection, user_id: &Id, points: u64) -> Result<()> {
    use schema::users::dsl;
    let points = points_value(points)?;
    // A single UPDATE statement without a prior read
    let count = diesel::update(dsl::users.filter(dsl::id.eq(user_id.as_str())))
        .set(dsl::loyalty_points.eq(dsl::loyalty_points + points))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    debug_assert_eq!(1, count);
    Ok(())
}

fn get_user(conn: &mut SqliteConnection, id: &Id) -> Result<User> {
    use schema::users::dsl;
    let user = dsl::users
        .filter(dsl::id.eq(id.as_str()))
        .first::<models::UserEntity>(conn)
        .map_err(from_diesel_err)?;
    load_user(user)
}

fn get_users(conn: &mut SqliteConnection, ids: &[&str]) -> Result<Vec<User>> {
    use schema::users::dsl;
    dsl::users
        .filter(dsl::id.eq_any(ids))
        .load::<models::UserEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_user)
        .collect()
}

fn get_user_by_email(conn: &mut SqliteConnection, email: &EmailAddress) -> Result<User> {
    use schema::users::dsl;
    let user = dsl::users
        .filter(dsl::email.eq(email.as_str()))
        .first::<models::UserEntity>(conn)
        .map_err(from_diesel_err)?;
    load_user(user)
}

fn try_get_user_by_email(conn: &mut SqliteConnection, email: &EmailAddress) -> Result<Option<User>> {
    use schema::users::dsl;
    dsl::users
        .filter(dsl::email.eq(email.as_str()))
        .first::<models::UserEntity>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(load_user)
        .transpose()
}

fn count_users(conn: &mut SqliteConnection) -> Result<usize> {
    use schema::users::dsl;
    Ok(dsl::users
        .select(diesel::dsl::count(dsl::id))
        .first::<i64>(conn)
        .map_err(from_diesel_err)? as usize)
}

fn load_user(u: models::UserEntity) -> Result<User> {
    let models::UserEntity {
        id,
        username,
        email,
        password,
        kind,
        loyalty_points,
        profile_picture_url,
        bio,
        restaurant_id,
        created_at,
    } = u;
    let kind = UserKind::try_from(kind).map_err(|err| repo::Error::Other(err.into()))?;
    Ok(User {
        id: id.into(),
        username,
        email: EmailAddress::new_unchecked(email),
        password: password.into(),
        kind,
        loyalty_points: load_points(loyalty_points)?,
        profile_picture_url: profile_picture_url.and_then(load_url),
        bio,
        restaurant_id: restaurant_id.map(Into::into),
        created_at: Timestamp::from_millis(created_at),
    })
}
