use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::item::errors::ItemError;
use crate::domain::item::model::Item;
use crate::domain::shared::session::Session;

pub struct GetItemByIdParams {
    pub session: Session,
    pub id: Uuid,
}

#[async_trait]
pub trait GetItemByIdUseCase: Send + Sync {
    async fn execute(&self, params: GetItemByIdParams) -> Result<Item, ItemError>;
}
