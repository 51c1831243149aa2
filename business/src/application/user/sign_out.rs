use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::user::errors::UserError;
use crate::domain::user::use_cases::sign_out::{SignOutParams, SignOutUseCase};

/// Tokens are stateless, so signing out only checks there is someone to sign out;
/// the transport layer drops the cookie.
pub struct SignOutUseCaseImpl {
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SignOutUseCase for SignOutUseCaseImpl {
    async fn execute(&self, params: SignOutParams) -> Result<(), UserError> {
        let scope = params.session.scope()?;
        self.logger
            .info(&format!("User signed out: {}", scope.user_id()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::session::Session;
    use crate::domain::shared::value_objects::UserId;
    use mockall::mock;

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    #[tokio::test]
    async fn should_sign_out_authenticated_user() {
        let mut logger = MockLog::new();
        logger.expect_info().times(1).returning(|_| ());

        let use_case = SignOutUseCaseImpl {
            logger: Arc::new(logger),
        };

        let result = use_case
            .execute(SignOutParams {
                session: Session::authenticated(UserId::generate()),
            })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_reject_anonymous_sign_out() {
        let mut logger = MockLog::new();
        logger.expect_info().never();

        let use_case = SignOutUseCaseImpl {
            logger: Arc::new(logger),
        };

        let result = use_case
            .execute(SignOutParams {
                session: Session::anonymous(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), UserError::Unauthorized(_)));
    }
}
