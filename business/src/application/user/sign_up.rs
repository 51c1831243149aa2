use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::user::errors::UserError;
use crate::domain::user::model::{PasswordHash, Registration, User};
use crate::domain::user::repository::UserRepository;
use crate::domain::user::services::PasswordHasher;
use crate::domain::user::use_cases::sign_up::{SignUpParams, SignUpUseCase};

pub struct SignUpUseCaseImpl {
    pub repository: Arc<dyn UserRepository>,
    pub password_hasher: Arc<dyn PasswordHasher>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SignUpUseCase for SignUpUseCaseImpl {
    async fn execute(&self, params: SignUpParams) -> Result<User, UserError> {
        let registration = Registration::validate(
            &params.name,
            &params.email,
            &params.password,
            params.profile_picture_url.as_deref(),
        )?;

        if self
            .repository
            .find_by_email(&registration.email)
            .await?
            .is_some()
        {
            return Err(UserError::EmailTaken);
        }

        let hash = self.password_hasher.hash(&params.password)?;
        let user = User::new(registration, PasswordHash::new(hash));

        self.repository.save(&user).await.map_err(|e| match e {
            RepositoryError::Duplicated => UserError::EmailTaken,
            other => UserError::Repository(other),
        })?;

        self.logger.info(&format!("User signed up: {}", user.id));
        Ok(user)
    }
}
