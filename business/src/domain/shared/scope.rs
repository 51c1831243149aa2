use crate::domain::errors::RepositoryError;

use super::value_objects::UserId;

/// Entities that belong to exactly one user.
pub trait Owned {
    fn owner(&self) -> &UserId;
}

/// Ownership filter applied to every user-scoped read and write.
///
/// Repositories take a scope instead of a bare user id so that no query can
/// be issued without an owner filter. Loaded entities can be re-checked with
/// [`OwnerScope::authorize`]; missing and foreign rows both surface as
/// `NotFound` so callers cannot tell other users' rows from missing ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OwnerScope {
    user_id: UserId,
}

impl OwnerScope {
    pub fn new(user_id: UserId) -> Self {
        Self { user_id }
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn owns<T: Owned>(&self, entity: &T) -> bool {
        entity.owner() == &self.user_id
    }

    pub fn authorize<T: Owned>(&self, entity: Option<T>) -> Result<T, RepositoryError> {
        entity
            .filter(|e| self.owns(e))
            .ok_or(RepositoryError::NotFound)
    }
}
