use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::recipe::errors::RecipeError;
use crate::domain::recipe::model::RecipeOverview;
use crate::domain::recipe::repository::RecipeRepository;
use crate::domain::recipe::use_cases::get_all::{GetAllRecipesParams, GetAllRecipesUseCase};

pub struct GetAllRecipesUseCaseImpl {
    pub repository: Arc<dyn RecipeRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllRecipesUseCase for GetAllRecipesUseCaseImpl {
    async fn execute(
        &self,
        params: GetAllRecipesParams,
    ) -> Result<Vec<RecipeOverview>, RecipeError> {
        let scope = params.session.scope()?;
        self.logger.info("Getting all recipes");
        let recipes = self.repository.list_visible(&scope).await?;
        self.logger
            .info(&format!("Retrieved {} recipes", recipes.len()));
        Ok(recipes)
    }
}
