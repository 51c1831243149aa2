use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::user::errors::UserError;
use crate::domain::user::model::normalize_email;
use crate::domain::user::repository::UserRepository;
use crate::domain::user::services::{PasswordHasher, TokenService};
use crate::domain::user::use_cases::sign_in::{SignInParams, SignInResult, SignInUseCase};

pub struct SignInUseCaseImpl {
    pub repository: Arc<dyn UserRepository>,
    pub password_hasher: Arc<dyn PasswordHasher>,
    pub token_service: Arc<dyn TokenService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SignInUseCase for SignInUseCaseImpl {
    async fn execute(&self, params: SignInParams) -> Result<SignInResult, UserError> {
        let email = normalize_email(&params.email);

        let user = match self.repository.find_by_email(&email).await? {
            Some(user) => user,
            None => {
                self.logger.warn("Sign-in attempt for unknown email");
                return Err(UserError::InvalidCredentials);
            }
        };

        if !self
            .password_hasher
            .verify(&params.password, user.password_hash.as_str())
        {
            self.logger
                .warn(&format!("Wrong password for user {}", user.id));
            return Err(UserError::InvalidCredentials);
        }

        let token = self.token_service.issue(&user.id)?;
        self.logger.info(&format!("User signed in: {}", user.id));

        Ok(SignInResult { user, token })
    }
}
