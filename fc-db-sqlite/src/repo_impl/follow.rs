use super::*;

impl<'a> FollowRepo for DbReadOnly<'a> {
    fn create_follow(&self, _follow: &Follow) -> Result<bool> {
        unreachable!();
    }

    fn is_following(&self, follower_id: &Id, following_id: &Id) -> Result<bool> {
        is_following(&mut self.conn.borrow_mut(), follower_id, following_id)
    }
    fn count_followers(&self, user_id: &Id) -> Result<usize> {
        count_followers(&mut self.conn.borrow_mut(), user_id)
    }
}

impl<'a> FollowRepo for DbConnection<'a> {
    fn create_follow(&self, follow: &Follow) -> Result<bool> {
        create_follow(&mut self.conn.borrow_mut(), follow)
    }

    fn is_following(&self, follower_id: &Id, following_id: &Id) -> Result<bool> {
        is_following(&mut self.conn.borrow_mut(), follower_id, following_id)
    }
    fn count_followers(&self, user_id: &Id) -> Result<usize> {
        count_followers(&mut self.conn.borrow_mut(), user_id)
    }
}

fn create_follow(conn: &mut SqliteConnection, f: &Follow) -> Result<bool> {
    let new_follower = models::NewFollower {
        follower_id: f.follower_id.as_str(),
        following_id: f.following_id.as_str(),
        created_at: f.created_at.as_millis(),
    };
    let insert_count = diesel::insert_or_ignore_into(schema::followers::table)
        .values(&new_follower)
        .execute(conn)
        .map_err(from_diesel_err)?;
    debug_assert!(insert_count <= 1);
    Ok(insert_count > 0)
}

fn is_following(conn: &mut SqliteConnection, follower_id: &Id, following_id: &Id) -> Result<bool> {
    use schema::followers::dsl;
    let count = dsl::followers
        .filter(dsl::follower_id.eq(follower_id.as_str()))
        .filter(dsl::following_id.eq(following_id.as_str()))
        .count()
        .get_result::<i64>(conn)
        .map_err(from_diesel_err)?;
    Ok(count > 0)
}

fn count_followers(conn: &mut SqliteConnection, user_id: &Id) -> Result<usize> {
    use schema::followers::dsl;
    Ok(dsl::followers
        .filter(dsl::following_id.eq(user_id.as_str()))
        .count()
        .get_result::<i64>(conn)
        .map_err(from_diesel_err)? as usize)
}
