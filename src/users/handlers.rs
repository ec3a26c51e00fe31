use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::{
    auth::jwt::AuthUser,
    dto::MessageResponse,
    error::AppError,
    state::AppState,
    users::dto::{ProfileResponse, PublicUser},
};

pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/user/profile", get(get_profile))
        .route("/user/:id", get(get_user).delete(delete_user))
}

#[instrument(skip(state, caller), fields(user_id = %caller.id))]
pub async fn get_profile(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
) -> Result<Json<ProfileResponse>, AppError> {
    let user = state
        .users
        .find_by_id(&caller.id)
        .await?
        .ok_or_else(|| AppError::not_found("User not found"))?;
    Ok(Json(user.into()))
}

#[instrument(skip(state, _caller))]
pub async fn get_user(
    State(state): State<AppState>,
    AuthUser(_caller): AuthUser,
    Path(id): Path<String>,
) -> Result<Json<PublicUser>, AppError> {
    let user = state
        .users
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found("User not found"))?;
    Ok(Json(user.into()))
}

#[instrument(skip(state, caller), fields(caller_id = %caller.id))]
pub async fn delete_user(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    if !caller.is_admin() {
        warn!(target_id = %id, "non-admin tried to delete a user");
        return Err(AppError::forbidden("Only administrators can delete users"));
    }

    let removed = state.users.delete_by_id(&id).await?;
    info!(target_id = %id, removed, "user deleted");
    Ok(Json(MessageResponse::new("User deleted")))
}
