use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::recipe::errors::RecipeError;
use crate::domain::shared::session::Session;

pub struct SetRecipeLikeParams {
    pub session: Session,
    pub recipe_id: Uuid,
    pub liked: bool,
}

#[async_trait]
pub trait SetRecipeLikeUseCase: Send + Sync {
    async fn execute(&self, params: SetRecipeLikeParams) -> Result<(), RecipeError>;
}
