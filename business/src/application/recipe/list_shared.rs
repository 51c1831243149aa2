use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::recipe::errors::RecipeError;
use crate::domain::recipe::model::RecipeOverview;
use crate::domain::recipe::repository::RecipeRepository;
use crate::domain::recipe::use_cases::list_shared::{
    ListSharedRecipesParams, ListSharedRecipesUseCase,
};

pub struct ListSharedRecipesUseCaseImpl {
    pub repository: Arc<dyn RecipeRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ListSharedRecipesUseCase for ListSharedRecipesUseCaseImpl {
    async fn execute(
        &self,
        params: ListSharedRecipesParams,
    ) -> Result<Vec<RecipeOverview>, RecipeError> {
        let scope = params.session.scope()?;
        let recipes = self.repository.list_shared_with(&scope).await?;
        self.logger.info(&format!(
            "Retrieved {} recipes shared with {}",
            recipes.len(),
            scope.user_id()
        ));
        Ok(recipes)
    }
}
