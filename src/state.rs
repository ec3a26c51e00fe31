use std::sync::Arc;

use sqlx::PgPool;

use crate::auth::jwt::JwtKeys;
use crate::config::AppConfig;
use crate::follows::repo::{FollowStore, PgFollowStore};
use crate::recipes::repo::{PgRecipeStore, RecipeStore};
use crate::users::repo::{PgUserStore, UserStore};

#[derive(Clone)]
pub struct AppState {
    pub jwt: JwtKeys,
    pub users: Arc<dyn UserStore>,
    pub recipes: Arc<dyn RecipeStore>,
    pub follows: Arc<dyn FollowStore>,
}

impl AppState {
    pub fn new(config: &AppConfig, db: PgPool) -> Self {
        Self::from_parts(
            config,
            Arc::new(PgUserStore::new(db.clone())),
            Arc::new(PgRecipeStore::new(db.clone())),
            Arc::new(PgFollowStore::new(db)),
        )
    }

    pub fn from_parts(
        config: &AppConfig,
        users: Arc<dyn UserStore>,
        recipes: Arc<dyn RecipeStore>,
        follows: Arc<dyn FollowStore>,
    ) -> Self {
        Self {
            jwt: JwtKeys::from_config(&config.jwt),
            users,
            recipes,
            follows,
        }
    }
}
