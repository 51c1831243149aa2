use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::scope::OwnerScope;

use super::model::Item;

#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Visible items of the scope owner, ordered by name.
    async fn list_visible(&self, scope: &OwnerScope) -> Result<Vec<Item>, RepositoryError>;
    async fn get_by_id(&self, id: Uuid, scope: &OwnerScope) -> Result<Item, RepositoryError>;
    /// Items of the scope owner among `ids`; unknown or foreign ids are skipped.
    async fn find_by_ids(
        &self,
        ids: &[Uuid],
        scope: &OwnerScope,
    ) -> Result<Vec<Item>, RepositoryError>;
    /// Inserts or updates; `Duplicated` when the owner already has a visible item with that name.
    async fn save(&self, item: &Item) -> Result<(), RepositoryError>;
    /// Whether any recipe, archived or not, still uses the item.
    async fn is_referenced(&self, id: Uuid, scope: &OwnerScope) -> Result<bool, RepositoryError>;
}
