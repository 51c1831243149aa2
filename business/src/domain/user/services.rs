use super::errors::UserError;
use crate::domain::shared::value_objects::UserId;

/// One-way password hashing.
pub trait PasswordHasher: Send + Sync {
    fn hash(&self, password: &str) -> Result<String, UserError>;
    /// `false` for a wrong password and for an unreadable stored hash alike.
    fn verify(&self, password: &str, hash: &str) -> bool;
}

/// Issues and checks signed session tokens.
pub trait TokenService: Send + Sync {
    fn issue(&self, user_id: &UserId) -> Result<String, UserError>;
    /// Returns the subject of a valid, unexpired token.
    fn verify(&self, token: &str) -> Option<UserId>;
}
