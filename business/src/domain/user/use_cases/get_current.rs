use async_trait::async_trait;

use crate::domain::shared::session::Session;
use crate::domain::user::errors::UserError;
use crate::domain::user::model::User;

pub struct GetCurrentUserParams {
    pub session: Session,
}

#[async_trait]
pub trait GetCurrentUserUseCase: Send + Sync {
    async fn execute(&self, params: GetCurrentUserParams) -> Result<Option<User>, UserError>;
}
