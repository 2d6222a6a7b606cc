use super::prelude::*;

/// Returns `false` if the follower already followed the user.
pub fn follow_user<R>(repo: &R, follower: &User, following_id: &Id) -> Result<bool>
where
    R: UserRepo + FollowRepo,
{
    if &follower.id == following_id {
        return Err(Error::SelfFollow);
    }
    let following = repo.get_user(following_id)?;
    let follow = Follow {
        follower_id: follower.id.clone(),
        following_id: following.id,
        created_at: Timestamp::now(),
    };
    Ok(repo.create_follow(&follow)?)
}
