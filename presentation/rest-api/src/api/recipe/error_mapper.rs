use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::recipe::errors::RecipeError;

use crate::api::error::{ErrorResponse, FieldError, IntoErrorResponse};

fn item_fields(positions: &[usize], attribute: &str, message: &str) -> Vec<FieldError> {
    positions
        .iter()
        .map(|position| FieldError::new(format!("items[{position}].{attribute}"), message))
        .collect()
}

impl IntoErrorResponse for RecipeError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let message = self.to_string();
        let fields = match &self {
            RecipeError::NameTooShort => Some(vec![FieldError::new("name", &message)]),
            RecipeError::DuplicateItems { positions } | RecipeError::UnknownItems { positions } => {
                Some(item_fields(positions, "id", &message))
            }
            RecipeError::AmountNotPositive { positions } => {
                Some(item_fields(positions, "amount", &message))
            }
            RecipeError::CannotShareWithSelf => Some(vec![FieldError::new("email", &message)]),
            _ => None,
        };
        if let Some(fields) = fields {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::validation(&message, fields)),
            );
        }

        let (status, name) = match &self {
            RecipeError::NotFound
            | RecipeError::RecipientNotFound
            | RecipeError::ShareNotFound => (StatusCode::NOT_FOUND, "NotFound"),
            RecipeError::ShareAlreadyAccepted => (StatusCode::CONFLICT, "Conflict"),
            RecipeError::Unauthorized(_) => (StatusCode::UNAUTHORIZED, "Unauthorized"),
            _ => {
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse::new("InternalError", "repository.persistence")),
                );
            }
        };

        (status, Json(ErrorResponse::new(name, &message)))
    }
}
