use chrono::{DateTime, Utc};
use poem_openapi::Object;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use business::domain::user::model::User;

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct SignUpRequest {
    pub name: String,
    pub email: String,
    /// At least 8 characters
    pub password: String,
    /// Defaults to a Gravatar image derived from the email
    pub profile_picture_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

/// Public view of an account. Never carries the password hash.
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct UserResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub profile_picture_url: String,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.as_uuid(),
            name: user.name,
            email: user.email,
            profile_picture_url: user.profile_picture_url,
            created_at: user.created_at,
        }
    }
}
