use async_trait::async_trait;

use crate::domain::recipe::errors::RecipeError;
use crate::domain::recipe::model::RecipeOverview;
use crate::domain::shared::session::Session;

pub struct GetAllRecipesParams {
    pub session: Session,
}

#[async_trait]
pub trait GetAllRecipesUseCase: Send + Sync {
    async fn execute(&self, params: GetAllRecipesParams)
    -> Result<Vec<RecipeOverview>, RecipeError>;
}
