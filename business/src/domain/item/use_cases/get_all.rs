use async_trait::async_trait;

use crate::domain::item::errors::ItemError;
use crate::domain::item::model::Item;
use crate::domain::shared::session::Session;

pub struct GetAllItemsParams {
    pub session: Session,
}

#[async_trait]
pub trait GetAllItemsUseCase: Send + Sync {
    async fn execute(&self, params: GetAllItemsParams) -> Result<Vec<Item>, ItemError>;
}
