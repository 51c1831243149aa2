use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::recipe::errors::RecipeError;
use crate::domain::recipe::social::RecipeShare;
use crate::domain::shared::session::Session;

pub struct AcceptShareParams {
    pub session: Session,
    pub recipe_id: Uuid,
}

#[async_trait]
pub trait AcceptShareUseCase: Send + Sync {
    async fn execute(&self, params: AcceptShareParams) -> Result<RecipeShare, RecipeError>;
}
