use async_trait::async_trait;
use bigdecimal::BigDecimal;
use uuid::Uuid;

use crate::domain::item::errors::ItemError;
use crate::domain::item::model::Item;
use crate::domain::shared::session::Session;

/// Creates an item when `id` is absent, otherwise updates the caller's item.
pub struct SaveItemParams {
    pub session: Session,
    pub id: Option<Uuid>,
    pub name: String,
    pub base_amount: i32,
    pub amount_kind: String,
    pub price: BigDecimal,
}

#[async_trait]
pub trait SaveItemUseCase: Send + Sync {
    async fn execute(&self, params: SaveItemParams) -> Result<Item, ItemError>;
}
