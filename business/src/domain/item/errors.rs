use crate::domain::shared::session::Unauthorized;

#[derive(Debug, thiserror::Error)]
pub enum ItemError {
    #[error("item.name_too_short")]
    NameTooShort,
    #[error("item.base_amount_not_positive")]
    BaseAmountNotPositive,
    #[error("item.amount_kind_empty")]
    AmountKindEmpty,
    #[error("item.price_too_low")]
    PriceTooLow,
    #[error("item.not_found")]
    NotFound,
    #[error("item.name_taken")]
    NameTaken,
    #[error("item.in_use")]
    InUse,
    #[error("auth.unauthorized")]
    Unauthorized(#[from] Unauthorized),
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
