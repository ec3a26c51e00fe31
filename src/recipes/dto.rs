use serde::{Deserialize, Serialize};
use time::{format_description::FormatItem, macros::format_description, Date};

use crate::recipes::repo_types::{FeedRecipe, Recipe};

const DISPLAY_DATE: &[FormatItem<'static>] = format_description!("[day]/[month]/[year]");

/// Dates go out to clients as `DD/MM/YYYY`.
pub fn format_date(date: Date) -> anyhow::Result<String> {
    Ok(date.format(DISPLAY_DATE)?)
}

#[derive(Debug, Deserialize)]
pub struct CreateRecipeRequest {
    pub title: Option<String>,
    pub ingredients: Option<String>,
    pub preparation_method: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RecipeResponse {
    pub id: String,
    pub title: String,
    pub ingredients: String,
    pub preparation_method: String,
    pub creation_date: String,
}

impl TryFrom<Recipe> for RecipeResponse {
    type Error = anyhow::Error;

    fn try_from(r: Recipe) -> anyhow::Result<Self> {
        Ok(Self {
            creation_date: format_date(r.creation_date)?,
            id: r.id,
            title: r.title,
            ingredients: r.ingredients,
            preparation_method: r.preparation_method,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct FeedItem {
    pub id: String,
    pub title: String,
    pub ingredients: String,
    pub preparation_method: String,
    pub creation_date: String,
    pub creator_user_id: String,
    pub creator_name: String,
}

impl TryFrom<FeedRecipe> for FeedItem {
    type Error = anyhow::Error;

    fn try_from(r: FeedRecipe) -> anyhow::Result<Self> {
        Ok(Self {
            creation_date: format_date(r.creation_date)?,
            id: r.id,
            title: r.title,
            ingredients: r.ingredients,
            preparation_method: r.preparation_method,
            creator_user_id: r.creator_user_id,
            creator_name: r.creator_name,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct FeedResponse {
    pub recipes: Vec<FeedItem>,
}
