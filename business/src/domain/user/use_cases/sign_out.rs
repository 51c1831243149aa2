use async_trait::async_trait;

use crate::domain::shared::session::Session;
use crate::domain::user::errors::UserError;

pub struct SignOutParams {
    pub session: Session,
}

#[async_trait]
pub trait SignOutUseCase: Send + Sync {
    async fn execute(&self, params: SignOutParams) -> Result<(), UserError>;
}
