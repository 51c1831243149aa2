use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

use super::model::User;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, RepositoryError>;
    /// Lookup by normalised (trimmed, lower-cased) email.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError>;
    /// Inserts a new user; `Duplicated` when the email is already registered.
    async fn save(&self, user: &User) -> Result<(), RepositoryError>;
}
