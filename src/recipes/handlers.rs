use axum::{
    extract::{rejection::JsonRejection, Path, State},
    routing::{get, post},
    Json, Router,
};
use time::{Date, OffsetDateTime};
use tracing::{info, instrument};

use crate::{
    auth::jwt::AuthUser,
    dto::MessageResponse,
    error::AppError,
    ids,
    recipes::{
        dto::{CreateRecipeRequest, FeedItem, FeedResponse, RecipeResponse},
        repo_types::Recipe,
    },
    state::AppState,
};

pub fn recipe_routes() -> Router<AppState> {
    Router::new()
        .route("/recipe", post(create_recipe))
        .route("/recipe/:id", get(get_recipe))
        .route("/feed", get(get_feed))
}

fn today() -> Date {
    OffsetDateTime::now_utc().date()
}

fn required(value: Option<String>, field: &str) -> Result<String, AppError> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| AppError::validation(format!("Missing field: {field}")))
}

#[instrument(skip(state, caller, payload), fields(user_id = %caller.id))]
pub async fn create_recipe(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    payload: Result<Json<CreateRecipeRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    let Json(payload) = payload?;

    let recipe = Recipe {
        title: required(payload.title, "title")?,
        ingredients: required(payload.ingredients, "ingredients")?,
        preparation_method: required(payload.preparation_method, "preparation_method")?,
        id: ids::generate(),
        creation_date: today(),
        creator_user_id: caller.id,
    };
    state.recipes.create(&recipe).await?;

    info!(recipe_id = %recipe.id, "recipe created");
    Ok(Json(MessageResponse::new("Recipe created")))
}

#[instrument(skip(state, _caller))]
pub async fn get_recipe(
    State(state): State<AppState>,
    AuthUser(_caller): AuthUser,
    Path(id): Path<String>,
) -> Result<Json<RecipeResponse>, AppError> {
    let recipe = state
        .recipes
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found("Recipe not found"))?;
    Ok(Json(RecipeResponse::try_from(recipe)?))
}

#[instrument(skip(state, _caller))]
pub async fn get_feed(
    State(state): State<AppState>,
    AuthUser(_caller): AuthUser,
) -> Result<Json<FeedResponse>, AppError> {
    let recipes = state
        .recipes
        .list_with_creator()
        .await?
        .into_iter()
        .map(FeedItem::try_from)
        .collect::<anyhow::Result<Vec<_>>>()?;
    Ok(Json(FeedResponse { recipes }))
}
