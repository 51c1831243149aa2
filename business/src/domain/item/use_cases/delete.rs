use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::item::errors::ItemError;
use crate::domain::shared::session::Session;

pub struct DeleteItemParams {
    pub session: Session,
    pub id: Uuid,
}

#[async_trait]
pub trait DeleteItemUseCase: Send + Sync {
    async fn execute(&self, params: DeleteItemParams) -> Result<(), ItemError>;
}
