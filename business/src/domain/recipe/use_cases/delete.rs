use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::recipe::errors::RecipeError;
use crate::domain::shared::session::Session;

pub struct DeleteRecipeParams {
    pub session: Session,
    pub id: Uuid,
}

#[async_trait]
pub trait DeleteRecipeUseCase: Send + Sync {
    async fn execute(&self, params: DeleteRecipeParams) -> Result<(), RecipeError>;
}
