use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::recipe::errors::RecipeError;
use crate::domain::recipe::social::{RecipeShare, RecipeSocialRepository};
use crate::domain::recipe::use_cases::accept_share::{AcceptShareParams, AcceptShareUseCase};

pub struct AcceptShareUseCaseImpl {
    pub social_repository: Arc<dyn RecipeSocialRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AcceptShareUseCase for AcceptShareUseCaseImpl {
    async fn execute(&self, params: AcceptShareParams) -> Result<RecipeShare, RecipeError> {
        let scope = params.session.scope()?;

        let mut share = self
            .social_repository
            .find_share(params.recipe_id, scope.user_id())
            .await?
            .ok_or(RecipeError::ShareNotFound)?;

        if share.is_accepted() {
            return Err(RecipeError::ShareAlreadyAccepted);
        }

        share.accept();
        self.social_repository.save_share(&share).await?;

        self.logger.info(&format!(
            "User {} accepted recipe {}",
            scope.user_id(),
            params.recipe_id
        ));
        Ok(share)
    }
}
