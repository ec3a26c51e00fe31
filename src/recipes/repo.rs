use anyhow::Context;
use async_trait::async_trait;
use sqlx::PgPool;

use crate::recipes::repo_types::{FeedRecipe, Recipe};

#[async_trait]
pub trait RecipeStore: Send + Sync {
    async fn create(&self, recipe: &Recipe) -> anyhow::Result<()>;
    async fn find_by_id(&self, id: &str) -> anyhow::Result<Option<Recipe>>;
    async fn list_with_creator(&self) -> anyhow::Result<Vec<FeedRecipe>>;
}

#[derive(Clone)]
pub struct PgRecipeStore {
    db: PgPool,
}

impl PgRecipeStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RecipeStore for PgRecipeStore {
    async fn create(&self, recipe: &Recipe) -> anyhow::Result<()> {
        let mut conn = self.db.acquire().await.context("acquire connection")?;
        sqlx::query(
            r#"
            INSERT INTO Recipe (id, title, ingredients, preparation_method, creation_date, creator_user_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(&recipe.id)
        .bind(&recipe.title)
        .bind(&recipe.ingredients)
        .bind(&recipe.preparation_method)
        .bind(recipe.creation_date)
        .bind(&recipe.creator_user_id)
        .execute(&mut *conn)
        .await
        .context("insert recipe")?;
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> anyhow::Result<Option<Recipe>> {
        let mut conn = self.db.acquire().await.context("acquire connection")?;
        let recipe = sqlx::query_as::<_, Recipe>(
            r#"
            SELECT id, title, ingredients, preparation_method, creation_date, creator_user_id
            FROM Recipe
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .context("select recipe by id")?;
        Ok(recipe)
    }

    async fn list_with_creator(&self) -> anyhow::Result<Vec<FeedRecipe>> {
        let mut conn = self.db.acquire().await.context("acquire connection")?;
        let rows = sqlx::query_as::<_, FeedRecipe>(
            r#"
            SELECT r.id, r.title, r.ingredients, r.preparation_method, r.creation_date,
                   r.creator_user_id, u.name AS creator_name
            FROM Recipe r
            JOIN UserCook u ON u.id = r.creator_user_id
            ORDER BY r.creation_date DESC, r.id
            "#,
        )
        .fetch_all(&mut *conn)
        .await
        .context("list feed")?;
        Ok(rows)
    }
}
