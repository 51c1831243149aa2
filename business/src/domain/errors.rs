/// Repository errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// Row is missing or outside the caller's ownership scope.
    #[error("repository.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Persistence,
    /// A uniqueness constraint rejected the write.
    #[error("repository.duplicated")]
    Duplicated,
    #[error("repository.database_error")]
    DatabaseError,
}

impl RepositoryError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, RepositoryError::NotFound)
    }
}
