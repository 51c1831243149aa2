use async_trait::async_trait;

use crate::domain::user::errors::UserError;
use crate::domain::user::model::User;

pub struct SignInParams {
    pub email: String,
    pub password: String,
}

/// Authenticated user plus the session token to hand back to the client.
#[derive(Debug, Clone)]
pub struct SignInResult {
    pub user: User,
    pub token: String,
}

#[async_trait]
pub trait SignInUseCase: Send + Sync {
    async fn execute(&self, params: SignInParams) -> Result<SignInResult, UserError>;
}
