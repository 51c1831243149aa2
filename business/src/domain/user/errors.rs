use crate::domain::errors::RepositoryError;
use crate::domain::shared::session::Unauthorized;

#[derive(Debug, thiserror::Error)]
pub enum UserError {
    #[error("user.name_too_short")]
    NameTooShort,
    #[error("user.invalid_email")]
    InvalidEmail,
    #[error("user.password_too_short")]
    PasswordTooShort,
    #[error("user.invalid_profile_picture_url")]
    InvalidProfilePictureUrl,
    #[error("user.email_taken")]
    EmailTaken,
    /// Unknown email and wrong password share this variant.
    #[error("user.invalid_credentials")]
    InvalidCredentials,
    #[error("user.password_hashing_failed")]
    PasswordHashingFailed,
    #[error("user.token_issue_failed")]
    TokenIssueFailed,
    #[error("auth.unauthorized")]
    Unauthorized(#[from] Unauthorized),
    #[error("repository.persistence")]
    Repository(#[from] RepositoryError),
}
