use super::*;

pub fn follow_user(
    connections: &sqlite::Connections,
    follower: &User,
    following_id: &Id,
) -> Result<bool> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::follow_user(conn, follower, following_id).map_err(|err| {
            debug!("User {} failed to follow {following_id}: {err}", follower.id);
            err
        })
    })?)
}
