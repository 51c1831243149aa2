use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::recipe::errors::RecipeError;
use crate::domain::recipe::social::RecipeShare;
use crate::domain::shared::session::Session;

pub struct ShareRecipeParams {
    pub session: Session,
    pub recipe_id: Uuid,
    pub recipient_email: String,
}

#[async_trait]
pub trait ShareRecipeUseCase: Send + Sync {
    async fn execute(&self, params: ShareRecipeParams) -> Result<RecipeShare, RecipeError>;
}
