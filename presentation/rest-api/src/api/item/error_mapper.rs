use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::item::errors::ItemError;

use crate::api::error::{ErrorResponse, FieldError, IntoErrorResponse};

impl IntoErrorResponse for ItemError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let message = self.to_string();
        let field = match &self {
            ItemError::NameTooShort => Some("name"),
            ItemError::BaseAmountNotPositive => Some("base_amount"),
            ItemError::AmountKindEmpty => Some("amount_kind"),
            ItemError::PriceTooLow => Some("price"),
            _ => None,
        };
        if let Some(field) = field {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::validation(
                    &message,
                    vec![FieldError::new(field, &message)],
                )),
            );
        }

        let (status, name, message) = match &self {
            ItemError::NotFound => (StatusCode::NOT_FOUND, "NotFound", "item.not_found"),
            ItemError::NameTaken => (StatusCode::CONFLICT, "Conflict", "item.name_taken"),
            ItemError::InUse => (StatusCode::CONFLICT, "Conflict", "item.in_use"),
            ItemError::Unauthorized(_) => {
                (StatusCode::UNAUTHORIZED, "Unauthorized", "auth.unauthorized")
            }
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        };

        (status, Json(ErrorResponse::new(name, message)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::errors::RepositoryError;
    use business::domain::shared::session::Unauthorized;

    #[test]
    fn should_point_validation_errors_at_their_field() {
        let (status, json) = ItemError::PriceTooLow.into_error_response();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json.0.name, "ValidationError");
        assert_eq!(
            json.0.fields,
            Some(vec![FieldError::new("price", "item.price_too_low")])
        );
    }

    #[test]
    fn should_map_in_use_to_conflict() {
        let (status, json) = ItemError::InUse.into_error_response();

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(json.0.message, "item.in_use");
    }

    #[test]
    fn should_map_session_and_storage_failures() {
        let (status, _) = ItemError::Unauthorized(Unauthorized).into_error_response();
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (status, json) =
            ItemError::Repository(RepositoryError::DatabaseError).into_error_response();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json.0.name, "InternalError");
    }
}
