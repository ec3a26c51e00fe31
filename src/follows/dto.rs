use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct FollowRequest {
    #[serde(rename = "userToFollowId")]
    pub user_to_follow_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UnfollowRequest {
    #[serde(rename = "userToUnfollowId")]
    pub user_to_unfollow_id: Option<String>,
}
