use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::recipe::errors::RecipeError;
use crate::domain::recipe::repository::RecipeRepository;
use crate::domain::recipe::use_cases::delete::{DeleteRecipeParams, DeleteRecipeUseCase};

pub struct DeleteRecipeUseCaseImpl {
    pub repository: Arc<dyn RecipeRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteRecipeUseCase for DeleteRecipeUseCaseImpl {
    async fn execute(&self, params: DeleteRecipeParams) -> Result<(), RecipeError> {
        let scope = params.session.scope()?;
        self.logger.info(&format!("Archiving recipe: {}", params.id));

        self.repository
            .archive(params.id, &scope)
            .await
            .map_err(RecipeError::from_lookup)?;

        self.logger.info(&format!("Recipe archived: {}", params.id));
        Ok(())
    }
}
