use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::recipe::diff::ItemLine;
use crate::domain::recipe::errors::RecipeError;
use crate::domain::recipe::model::Recipe;
use crate::domain::shared::session::Session;

/// Creates a recipe when `id` is absent, otherwise reconciles the caller's recipe with `items`.
pub struct SaveRecipeParams {
    pub session: Session,
    pub id: Option<Uuid>,
    pub name: String,
    pub items: Vec<ItemLine>,
}

#[async_trait]
pub trait SaveRecipeUseCase: Send + Sync {
    async fn execute(&self, params: SaveRecipeParams) -> Result<Recipe, RecipeError>;
}
