use async_trait::async_trait;

use crate::domain::recipe::errors::RecipeError;
use crate::domain::recipe::model::RecipeOverview;
use crate::domain::shared::session::Session;

pub struct ListSharedRecipesParams {
    pub session: Session,
}

#[async_trait]
pub trait ListSharedRecipesUseCase: Send + Sync {
    async fn execute(
        &self,
        params: ListSharedRecipesParams,
    ) -> Result<Vec<RecipeOverview>, RecipeError>;
}
