use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::scope::OwnerScope;

use super::model::{Recipe, RecipeOverview, RecipeUpdate};

#[async_trait]
pub trait RecipeRepository: Send + Sync {
    /// Visible recipes of the scope owner, ordered by name.
    async fn list_visible(&self, scope: &OwnerScope) -> Result<Vec<RecipeOverview>, RepositoryError>;
    /// Visible recipes other users shared with the scope owner and that were accepted.
    async fn list_shared_with(
        &self,
        scope: &OwnerScope,
    ) -> Result<Vec<RecipeOverview>, RepositoryError>;
    /// Visible recipe of the scope owner with its item rows.
    async fn find_with_items(
        &self,
        id: Uuid,
        scope: &OwnerScope,
    ) -> Result<Option<Recipe>, RepositoryError>;
    /// Inserts the recipe and its item rows atomically.
    async fn create(&self, recipe: &Recipe) -> Result<Recipe, RepositoryError>;
    /// Locks the recipe, diffs the submitted lines against its current rows and
    /// applies rename plus diff in the same transaction. Returns the stored result.
    async fn apply_changes(
        &self,
        update: &RecipeUpdate,
        scope: &OwnerScope,
    ) -> Result<Recipe, RepositoryError>;
    async fn archive(&self, id: Uuid, scope: &OwnerScope) -> Result<(), RepositoryError>;
}
