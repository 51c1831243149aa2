use crate::domain::errors::RepositoryError;
use crate::domain::shared::session::Unauthorized;

/// Recipe errors. Validation variants carry the offending positions of the submitted item list.
#[derive(Debug, thiserror::Error)]
pub enum RecipeError {
    #[error("recipe.name_too_short")]
    NameTooShort,
    #[error("recipe.duplicate_items")]
    DuplicateItems { positions: Vec<usize> },
    #[error("recipe.amount_not_positive")]
    AmountNotPositive { positions: Vec<usize> },
    #[error("recipe.unknown_items")]
    UnknownItems { positions: Vec<usize> },
    #[error("recipe.not_found")]
    NotFound,
    #[error("recipe.cannot_share_with_self")]
    CannotShareWithSelf,
    #[error("recipe.recipient_not_found")]
    RecipientNotFound,
    #[error("recipe.share_not_found")]
    ShareNotFound,
    #[error("recipe.share_already_accepted")]
    ShareAlreadyAccepted,
    #[error("auth.unauthorized")]
    Unauthorized(#[from] Unauthorized),
    #[error("repository.persistence")]
    Repository(#[from] RepositoryError),
}

impl RecipeError {
    /// Maps a storage `NotFound` to the recipe variant, keeping other failures as they are.
    pub fn from_lookup(error: RepositoryError) -> Self {
        match error {
            RepositoryError::NotFound => RecipeError::NotFound,
            other => RecipeError::Repository(other),
        }
    }
}
