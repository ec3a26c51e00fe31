use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::Date;

/// Row of the `Recipe` table.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Recipe {
    pub id: String,
    pub title: String,
    pub ingredients: String,
    pub preparation_method: String,
    pub creation_date: Date,
    pub creator_user_id: String,
}

/// Recipe joined with its creator's name.
#[derive(Debug, Clone, FromRow)]
pub struct FeedRecipe {
    pub id: String,
    pub title: String,
    pub ingredients: String,
    pub preparation_method: String,
    pub creation_date: Date,
    pub creator_user_id: String,
    pub creator_name: String,
}
