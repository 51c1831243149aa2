use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::recipe::errors::RecipeError;
use crate::domain::recipe::repository::RecipeRepository;
use crate::domain::recipe::social::{RecipeShare, RecipeSocialRepository};
use crate::domain::recipe::use_cases::share::{ShareRecipeParams, ShareRecipeUseCase};
use crate::domain::user::model::normalize_email;
use crate::domain::user::repository::UserRepository;

/// Offers one of the caller's recipes to another user, identified by email.
pub struct ShareRecipeUseCaseImpl {
    pub recipe_repository: Arc<dyn RecipeRepository>,
    pub social_repository: Arc<dyn RecipeSocialRepository>,
    pub user_repository: Arc<dyn UserRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ShareRecipeUseCase for ShareRecipeUseCaseImpl {
    async fn execute(&self, params: ShareRecipeParams) -> Result<RecipeShare, RecipeError> {
        let scope = params.session.scope()?;

        let recipe = self
            .recipe_repository
            .find_with_items(params.recipe_id, &scope)
            .await?;
        let recipe = scope.authorize(recipe).map_err(RecipeError::from_lookup)?;

        let recipient = self
            .user_repository
            .find_by_email(&normalize_email(&params.recipient_email))
            .await?
            .ok_or(RecipeError::RecipientNotFound)?;

        if &recipient.id == scope.user_id() {
            return Err(RecipeError::CannotShareWithSelf);
        }

        match self
            .social_repository
            .find_share(recipe.id, &recipient.id)
            .await?
        {
            Some(share) if share.is_accepted() => Err(RecipeError::ShareAlreadyAccepted),
            Some(share) => {
                self.logger.debug(&format!(
                    "Recipe {} already offered to {}",
                    recipe.id, recipient.id
                ));
                Ok(share)
            }
            None => {
                let share = RecipeShare::pending(recipe.id, recipient.id);
                self.social_repository.save_share(&share).await?;
                self.logger.info(&format!(
                    "Recipe {} shared with {}",
                    recipe.id, recipient.id
                ));
                Ok(share)
            }
        }
    }
}
