use crate::{id::Id, time::Timestamp};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Follow {
    pub follower_id: Id,
    pub following_id: Id,
    pub created_at: Timestamp,
}
