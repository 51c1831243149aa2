use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::user::errors::UserError;
use crate::domain::user::model::User;
use crate::domain::user::repository::UserRepository;
use crate::domain::user::use_cases::get_current::{GetCurrentUserParams, GetCurrentUserUseCase};

pub struct GetCurrentUserUseCaseImpl {
    pub repository: Arc<dyn UserRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetCurrentUserUseCase for GetCurrentUserUseCaseImpl {
    async fn execute(&self, params: GetCurrentUserParams) -> Result<Option<User>, UserError> {
        let Some(user_id) = params.session.user_id() else {
            return Ok(None);
        };

        let user = self.repository.find_by_id(user_id).await?;
        if user.is_none() {
            // Token outlived its account
            self.logger
                .warn(&format!("Session refers to missing user {}", user_id));
        }
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::shared::session::Session;
    use crate::domain::shared::value_objects::UserId;
    use crate::domain::user::model::PasswordHash;
    use chrono::Utc;
    use mockall::mock;

    mock! {
        pub UserRepo {}

        #[async_trait]
        impl UserRepository for UserRepo {
            async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, RepositoryError>;
            async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError>;
            async fn save(&self, user: &User) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    #[tokio::test]
    async fn should_return_none_for_anonymous_session() {
        let mut repo = MockUserRepo::new();
        repo.expect_find_by_id().never();

        let use_case = GetCurrentUserUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetCurrentUserParams {
                session: Session::anonymous(),
            })
            .await;

        assert!(result.unwrap().is_none());
    }

    #[tokio::test]
    async fn should_load_signed_in_user() {
        let user_id = UserId::generate();
        let mut repo = MockUserRepo::new();
        repo.expect_find_by_id().returning(|id| {
            Ok(Some(User {
                id: *id,
                name: "Barbara".to_string(),
                email: "barbara@example.com".to_string(),
                password_hash: PasswordHash::new("h".to_string()),
                profile_picture_url: "https://example.com/b.png".to_string(),
                created_at: Utc::now(),
                updated_at: Utc::now(),
            }))
        });

        let use_case = GetCurrentUserUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let user = use_case
            .execute(GetCurrentUserParams {
                session: Session::authenticated(user_id),
            })
            .await
            .unwrap()
            .unwrap();

        assert_eq!(user.id, user_id);
    }

    #[tokio::test]
    async fn should_return_none_when_account_is_gone() {
        let mut repo = MockUserRepo::new();
        repo.expect_find_by_id().returning(|_| Ok(None));

        let use_case = GetCurrentUserUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetCurrentUserParams {
                session: Session::authenticated(UserId::generate()),
            })
            .await;

        assert!(result.unwrap().is_none());
    }
}
