use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

/// One offending input, addressed by its path in the request body (e.g. `items[1].id`).
#[derive(Object, Debug, Clone, PartialEq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

#[derive(Object, Debug)]
pub struct ErrorResponse {
    pub name: String,
    pub message: String,
    #[oai(skip_serializing_if_is_none)]
    pub fields: Option<Vec<FieldError>>,
}

impl ErrorResponse {
    pub fn new(name: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            message: message.to_string(),
            fields: None,
        }
    }

    pub fn validation(message: &str, fields: Vec<FieldError>) -> Self {
        Self {
            name: "ValidationError".to_string(),
            message: message.to_string(),
            fields: (!fields.is_empty()).then_some(fields),
        }
    }
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: &str) -> Self {
        Self {
            field: field.into(),
            message: message.to_string(),
        }
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}

/// 400 for a path or body id that is not a UUID.
pub fn invalid_id(message: &str, field: &str) -> Json<ErrorResponse> {
    Json(ErrorResponse::validation(
        message,
        vec![FieldError::new(field, message)],
    ))
}
