use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::user::errors::UserError;

use crate::api::error::{ErrorResponse, FieldError, IntoErrorResponse};

impl IntoErrorResponse for UserError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let message = self.to_string();
        let field = match &self {
            UserError::NameTooShort => Some("name"),
            UserError::InvalidEmail => Some("email"),
            UserError::PasswordTooShort => Some("password"),
            UserError::InvalidProfilePictureUrl => Some("profile_picture_url"),
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

        let (status, name) = match &self {
            UserError::EmailTaken => (StatusCode::CONFLICT, "Conflict"),
            UserError::InvalidCredentials | UserError::Unauthorized(_) => {
                (StatusCode::UNAUTHORIZED, "Unauthorized")
            }
            UserError::PasswordHashingFailed | UserError::TokenIssueFailed => {
                (StatusCode::INTERNAL_SERVER_ERROR, "InternalError")
            }
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_report_invalid_email_on_email_field() {
        let (status, json) = UserError::InvalidEmail.into_error_response();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            json.0.fields,
            Some(vec![FieldError::new("email", "user.invalid_email")])
        );
    }

    #[test]
    fn should_map_credentials_failure_to_unauthorized() {
        let (status, json) = UserError::InvalidCredentials.into_error_response();

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(json.0.message, "user.invalid_credentials");
    }

    #[test]
    fn should_map_taken_email_to_conflict() {
        let (status, _) = UserError::EmailTaken.into_error_response();

        assert_eq!(status, StatusCode::CONFLICT);
    }
}
