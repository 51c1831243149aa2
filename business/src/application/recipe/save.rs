use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::item::repository::ItemRepository;
use crate::domain::logger::Logger;
use crate::domain::recipe::diff::ItemLine;
use crate::domain::recipe::errors::RecipeError;
use crate::domain::recipe::model::{Recipe, RecipeUpdate, validate_lines, validate_name};
use crate::domain::recipe::repository::RecipeRepository;
use crate::domain::recipe::use_cases::save::{SaveRecipeParams, SaveRecipeUseCase};
use crate::domain::shared::scope::OwnerScope;

/// Creates recipes, or hands an existing recipe's rename and submitted item
/// list to the repository, which reconciles the rows in a single transaction.
pub struct SaveRecipeUseCaseImpl {
    pub recipe_repository: Arc<dyn RecipeRepository>,
    pub item_repository: Arc<dyn ItemRepository>,
    pub logger: Arc<dyn Logger>,
}

impl SaveRecipeUseCaseImpl {
    /// Every submitted line must point at an item of the caller, archived or not.
    async fn ensure_items_owned(
        &self,
        lines: &[ItemLine],
        scope: &OwnerScope,
    ) -> Result<(), RecipeError> {
        if lines.is_empty() {
            return Ok(());
        }

        let ids: Vec<Uuid> = lines.iter().map(|line| line.item_id).collect();
        let owned: HashSet<Uuid> = self
            .item_repository
            .find_by_ids(&ids, scope)
            .await?
            .into_iter()
            .filter(|item| scope.owns(item))
            .map(|item| item.id)
            .collect();

        let positions: Vec<usize> = lines
            .iter()
            .enumerate()
            .filter(|(_, line)| !owned.contains(&line.item_id))
            .map(|(position, _)| position)
            .collect();

        if positions.is_empty() {
            Ok(())
        } else {
            Err(RecipeError::UnknownItems { positions })
        }
    }
}

#[async_trait]
impl SaveRecipeUseCase for SaveRecipeUseCaseImpl {
    async fn execute(&self, params: SaveRecipeParams) -> Result<Recipe, RecipeError> {
        let scope = params.session.scope()?;
        let name = validate_name(&params.name)?;
        validate_lines(&params.items)?;
        self.ensure_items_owned(&params.items, &scope).await?;

        match params.id {
            None => {
                self.logger.info(&format!(
                    "Creating recipe '{}' with {} items",
                    name,
                    params.items.len()
                ));
                let recipe = Recipe::new(*scope.user_id(), name, params.items);
                let saved = self.recipe_repository.create(&recipe).await?;
                self.logger.info(&format!("Recipe created: {}", saved.id));
                Ok(saved)
            }
            Some(id) => {
                self.logger.info(&format!(
                    "Updating recipe {} with {} items",
                    id,
                    params.items.len()
                ));
                let update = RecipeUpdate {
                    recipe_id: id,
                    name,
                    items: params.items,
                    updated_at: Utc::now(),
                };
                let saved = self
                    .recipe_repository
                    .apply_changes(&update, &scope)
                    .await
                    .map_err(RecipeError::from_lookup)?;

                self.logger.info(&format!("Recipe updated: {}", saved.id));
                Ok(saved)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::item::model::Item;
    use crate::domain::recipe::model::RecipeOverview;
    use crate::domain::shared::session::Session;
    use crate::domain::shared::value_objects::{EntityState, UserId};
    use bigdecimal::BigDecimal;
    use mockall::mock;

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
        pub ItemRepo {}

        #[async_trait]
        impl ItemRepository for ItemRepo {
            async fn list_visible(&self, scope: &OwnerScope) -> Result<Vec<Item>, RepositoryError>;
            async fn get_by_id(&self, id: Uuid, scope: &OwnerScope) -> Result<Item, RepositoryError>;
            async fn find_by_ids(&self, ids: &[Uuid], scope: &OwnerScope) -> Result<Vec<Item>, RepositoryError>;
            async fn save(&self, item: &Item) -> Result<(), RepositoryError>;
            async fn is_referenced(&self, id: Uuid, scope: &OwnerScope) -> Result<bool, RepositoryError>;
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

    fn line(item_id: Uuid, amount: i64) -> ItemLine {
        ItemLine::new(item_id, BigDecimal::from(amount))
    }

    fn owned_item(id: Uuid, owner: UserId) -> Item {
        Item::from_repository(
            id,
            owner,
            "Butter".to_string(),
            250,
            "g".to_string(),
            BigDecimal::from(2),
            EntityState::Visible,
            Utc::now(),
            Utc::now(),
        )
    }

    /// Item repository that knows every requested id as an item of the scope owner.
    fn items_of_caller() -> MockItemRepo {
        let mut repo = MockItemRepo::new();
        repo.expect_find_by_ids().returning(|ids, scope| {
            Ok(ids
                .iter()
                .map(|id| owned_item(*id, *scope.user_id()))
                .collect())
        });
        repo
    }

    fn stored_recipe(id: Uuid, owner: UserId, lines: Vec<ItemLine>) -> Recipe {
        let mut recipe = Recipe::new(owner, "Pasta".to_string(), lines);
        recipe.id = id;
        for row in &mut recipe.items {
            row.recipe_id = id;
        }
        recipe
    }

    fn params(session: Session, id: Option<Uuid>, items: Vec<ItemLine>) -> SaveRecipeParams {
        SaveRecipeParams {
            session,
            id,
            name: "Pasta al burro".to_string(),
            items,
        }
    }

    #[tokio::test]
    async fn should_create_recipe_with_all_submitted_items() {
        let user_id = UserId::generate();
        let (a, b) = (Uuid::new_v4(), Uuid::new_v4());
        let mut recipe_repo = MockRecipeRepo::new();
        recipe_repo.expect_find_with_items().never();
        recipe_repo
            .expect_create()
            .withf(move |recipe| recipe.user_id == user_id && recipe.items.len() == 2)
            .times(1)
            .returning(|recipe| Ok(recipe.clone()));

        let use_case = SaveRecipeUseCaseImpl {
            recipe_repository: Arc::new(recipe_repo),
            item_repository: Arc::new(items_of_caller()),
            logger: mock_logger(),
        };

        let recipe = use_case
            .execute(params(
                Session::authenticated(user_id),
                None,
                vec![line(a, 100), line(b, 2)],
            ))
            .await
            .unwrap();

        assert_eq!(recipe.name, "Pasta al burro");
        assert_eq!(recipe.lines(), vec![line(a, 100), line(b, 2)]);
    }

    #[tokio::test]
    async fn should_hand_full_submission_to_repository_when_updating() {
        let user_id = UserId::generate();
        let recipe_id = Uuid::new_v4();
        let (kept, added) = (Uuid::new_v4(), Uuid::new_v4());
        let submitted = vec![line(kept, 1), line(added, 4)];

        let mut recipe_repo = MockRecipeRepo::new();
        // Stored rows are read under the update's own lock, never beforehand
        recipe_repo.expect_find_with_items().never();
        recipe_repo.expect_create().never();
        let expected = submitted.clone();
        recipe_repo
            .expect_apply_changes()
            .withf(move |update, scope| {
                update.recipe_id == recipe_id
                    && update.name == "Pasta al burro"
                    && update.items == expected
                    && *scope.user_id() == user_id
            })
            .times(1)
            .returning(move |update, scope| {
                Ok(stored_recipe(
                    update.recipe_id,
                    *scope.user_id(),
                    update.items.clone(),
                ))
            });

        let use_case = SaveRecipeUseCaseImpl {
            recipe_repository: Arc::new(recipe_repo),
            item_repository: Arc::new(items_of_caller()),
            logger: mock_logger(),
        };

        let recipe = use_case
            .execute(params(
                Session::authenticated(user_id),
                Some(recipe_id),
                submitted.clone(),
            ))
            .await
            .unwrap();

        assert_eq!(recipe.id, recipe_id);
        assert_eq!(recipe.lines(), submitted);
    }

    #[tokio::test]
    async fn should_reject_duplicate_items_before_any_repository_call() {
        let item_id = Uuid::new_v4();
        let mut recipe_repo = MockRecipeRepo::new();
        recipe_repo.expect_find_with_items().never();
        recipe_repo.expect_create().never();
        recipe_repo.expect_apply_changes().never();
        let mut item_repo = MockItemRepo::new();
        item_repo.expect_find_by_ids().never();

        let use_case = SaveRecipeUseCaseImpl {
            recipe_repository: Arc::new(recipe_repo),
            item_repository: Arc::new(item_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(params(
                Session::authenticated(UserId::generate()),
                Some(Uuid::new_v4()),
                vec![line(item_id, 1), line(item_id, 2)],
            ))
            .await;

        match result {
            Err(RecipeError::DuplicateItems { positions }) => assert_eq!(positions, vec![0, 1]),
            other => panic!("expected duplicate items error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn should_return_not_found_for_recipe_of_other_user() {
        let mut recipe_repo = MockRecipeRepo::new();
        // Scoped lock finds no row of the caller
        recipe_repo
            .expect_apply_changes()
            .times(1)
            .returning(|_, _| Err(RepositoryError::NotFound));

        let use_case = SaveRecipeUseCaseImpl {
            recipe_repository: Arc::new(recipe_repo),
            item_repository: Arc::new(items_of_caller()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(params(
                Session::authenticated(UserId::generate()),
                Some(Uuid::new_v4()),
                vec![line(Uuid::new_v4(), 1)],
            ))
            .await;

        assert!(matches!(result.unwrap_err(), RecipeError::NotFound));
    }

    #[tokio::test]
    async fn should_reject_items_the_caller_does_not_own() {
        let user_id = UserId::generate();
        let (mine, foreign) = (Uuid::new_v4(), Uuid::new_v4());
        let mut item_repo = MockItemRepo::new();
        item_repo
            .expect_find_by_ids()
            .returning(move |_, scope| Ok(vec![owned_item(mine, *scope.user_id())]));
        let mut recipe_repo = MockRecipeRepo::new();
        recipe_repo.expect_create().never();

        let use_case = SaveRecipeUseCaseImpl {
            recipe_repository: Arc::new(recipe_repo),
            item_repository: Arc::new(item_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(params(
                Session::authenticated(user_id),
                None,
                vec![line(mine, 1), line(foreign, 1)],
            ))
            .await;

        match result {
            Err(RecipeError::UnknownItems { positions }) => assert_eq!(positions, vec![1]),
            other => panic!("expected unknown items error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn should_reject_non_positive_amounts() {
        let mut item_repo = MockItemRepo::new();
        item_repo.expect_find_by_ids().never();

        let use_case = SaveRecipeUseCaseImpl {
            recipe_repository: Arc::new(MockRecipeRepo::new()),
            item_repository: Arc::new(item_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(params(
                Session::authenticated(UserId::generate()),
                None,
                vec![line(Uuid::new_v4(), 0)],
            ))
            .await;

        assert!(matches!(
            result.unwrap_err(),
            RecipeError::AmountNotPositive { .. }
        ));
    }

    #[tokio::test]
    async fn should_reject_anonymous_caller() {
        let use_case = SaveRecipeUseCaseImpl {
            recipe_repository: Arc::new(MockRecipeRepo::new()),
            item_repository: Arc::new(MockItemRepo::new()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(params(Session::anonymous(), None, vec![]))
            .await;

        assert!(matches!(result.unwrap_err(), RecipeError::Unauthorized(_)));
    }

    #[tokio::test]
    async fn should_surface_failed_transaction_as_repository_error() {
        let mut recipe_repo = MockRecipeRepo::new();
        recipe_repo
            .expect_apply_changes()
            .returning(|_, _| Err(RepositoryError::DatabaseError));

        let use_case = SaveRecipeUseCaseImpl {
            recipe_repository: Arc::new(recipe_repo),
            item_repository: Arc::new(items_of_caller()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(params(
                Session::authenticated(UserId::generate()),
                Some(Uuid::new_v4()),
                vec![],
            ))
            .await;

        assert!(matches!(
            result.unwrap_err(),
            RecipeError::Repository(RepositoryError::DatabaseError)
        ));
    }
}
