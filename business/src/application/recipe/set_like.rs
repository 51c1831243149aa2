use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::recipe::errors::RecipeError;
use crate::domain::recipe::repository::RecipeRepository;
use crate::domain::recipe::social::RecipeSocialRepository;
use crate::domain::recipe::use_cases::set_like::{SetRecipeLikeParams, SetRecipeLikeUseCase};

/// Likes or unlikes a recipe the caller owns or has accepted from someone else.
pub struct SetRecipeLikeUseCaseImpl {
    pub recipe_repository: Arc<dyn RecipeRepository>,
    pub social_repository: Arc<dyn RecipeSocialRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SetRecipeLikeUseCase for SetRecipeLikeUseCaseImpl {
    async fn execute(&self, params: SetRecipeLikeParams) -> Result<(), RecipeError> {
        let scope = params.session.scope()?;

        let owned = self
            .recipe_repository
            .find_with_items(params.recipe_id, &scope)
            .await?
            .is_some_and(|recipe| scope.owns(&recipe));

        if !owned {
            let shared = self
                .social_repository
                .has_accepted_visible_share(params.recipe_id, scope.user_id())
                .await?;
            if !shared {
                return Err(RecipeError::NotFound);
            }
        }

        self.social_repository
            .set_like(params.recipe_id, scope.user_id(), params.liked)
            .await?;

        self.logger.info(&format!(
            "User {} {} recipe {}",
            scope.user_id(),
            if params.liked { "liked" } else { "unliked" },
            params.recipe_id
        ));
        Ok(())
    }
}
