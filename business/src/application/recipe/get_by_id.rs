use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::recipe::errors::RecipeError;
use crate::domain::recipe::model::Recipe;
use crate::domain::recipe::repository::RecipeRepository;
use crate::domain::recipe::use_cases::get_by_id::{GetRecipeByIdParams, GetRecipeByIdUseCase};

pub struct GetRecipeByIdUseCaseImpl {
    pub repository: Arc<dyn RecipeRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetRecipeByIdUseCase for GetRecipeByIdUseCaseImpl {
    async fn execute(&self, params: GetRecipeByIdParams) -> Result<Recipe, RecipeError> {
        let scope = params.session.scope()?;
        self.logger.debug(&format!("Getting recipe: {}", params.id));

        let recipe = self.repository.find_with_items(params.id, &scope).await?;
        scope.authorize(recipe).map_err(RecipeError::from_lookup)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::recipe::diff::ItemLine;
    use crate::domain::recipe::model::{RecipeOverview, RecipeUpdate};
    use crate::domain::shared::scope::OwnerScope;
    use crate::domain::shared::session::Session;
    use crate::domain::shared::value_objects::UserId;
    use bigdecimal::BigDecimal;
    use mockall::mock;
    use uuid::Uuid;

    mock! {
        pub RecipeRepo {}

        #[async_trait]
        impl RecipeRepository for RecipeRepo {
            async fn list_visible(&self, scope: &OwnerScope) -> Result<Vec<RecipeOverview>, RepositoryError>;
            async fn list_shared_with(&self, scope: &OwnerScope) -> Result<Vec<RecipeOverview>, RepositoryError>;
            async fn find_with_items(&self, id: Uuid, scope: &OwnerScope) -> Result<Option<Recipe>, RepositoryError>;
            async fn create(&self, recipe: &Recipe) -> Result<Recipe, RepositoryError>;
            async fn apply_changes(&self, update: &RecipeUpdate, scope: &OwnerScope) -> Result<Recipe, RepositoryError>;
            async fn archive(&self, id: Uuid, scope: &OwnerScope) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    #[tokio::test]
    async fn should_return_recipe_with_items() {
        let user_id = UserId::generate();
        let item_id = Uuid::new_v4();
        let mut mock_repo = MockRecipeRepo::new();
        mock_repo.expect_find_with_items().returning(move |_, scope| {
            Ok(Some(Recipe::new(
                *scope.user_id(),
                "Omelette".to_string(),
                vec![ItemLine::new(item_id, BigDecimal::from(3))],
            )))
        });

        let use_case = GetRecipeByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let recipe = use_case
            .execute(GetRecipeByIdParams {
                session: Session::authenticated(user_id),
                id: Uuid::new_v4(),
            })
            .await
            .unwrap();

        assert_eq!(recipe.user_id, user_id);
        assert_eq!(recipe.items[0].item_id, item_id);
    }

    #[tokio::test]
    async fn should_return_not_found_when_missing() {
        let mut mock_repo = MockRecipeRepo::new();
        mock_repo.expect_find_with_items().returning(|_, _| Ok(None));

        let use_case = GetRecipeByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetRecipeByIdParams {
                session: Session::authenticated(UserId::generate()),
                id: Uuid::new_v4(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), RecipeError::NotFound));
    }
}
