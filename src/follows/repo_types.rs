use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Row of the `Follow` table: `follower_id` follows `following_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Follow {
    pub id: String,
    pub follower_id: String,
    pub following_id: String,
}
