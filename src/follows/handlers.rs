use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::{
    auth::jwt::AuthUser,
    dto::MessageResponse,
    error::AppError,
    follows::{
        dto::{FollowRequest, UnfollowRequest},
        repo_types::Follow,
    },
    ids,
    state::AppState,
};

pub fn follow_routes() -> Router<AppState> {
    Router::new()
        .route("/user/follow", post(follow))
        .route("/user/unfollow", post(unfollow))
}

fn required_id(value: Option<String>, field: &str) -> Result<String, AppError> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::validation(format!("Missing field: {field}")))
}

#[instrument(skip(state, caller, payload), fields(follower_id = %caller.id))]
pub async fn follow(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    payload: Result<Json<FollowRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    let Json(payload) = payload?;
    let following_id = required_id(payload.user_to_follow_id, "userToFollowId")?;

    if following_id == caller.id {
        warn!("user tried to follow themselves");
        return Err(AppError::validation("You cannot follow yourself"));
    }

    if state.users.find_by_id(&following_id).await?.is_none() {
        warn!(%following_id, "follow target not found");
        return Err(AppError::not_found("User to follow not found"));
    }

    let created = state
        .follows
        .create(&Follow {
            id: ids::generate(),
            follower_id: caller.id,
            following_id: following_id.clone(),
        })
        .await?;

    info!(%following_id, created, "followed");
    Ok(Json(MessageResponse::new("Followed successfully")))
}

#[instrument(skip(state, caller, payload), fields(follower_id = %caller.id))]
pub async fn unfollow(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    payload: Result<Json<UnfollowRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    let Json(payload) = payload?;
    let following_id = required_id(payload.user_to_unfollow_id, "userToUnfollowId")?;

    let removed = state.follows.delete(&caller.id, &following_id).await?;

    info!(%following_id, removed, "unfollowed");
    Ok(Json(MessageResponse::new("Unfollowed successfully")))
}
