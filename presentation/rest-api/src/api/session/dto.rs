use poem_openapi::Object;
use serde::{Deserialize, Serialize};

use crate::api::user::dto::UserResponse;

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct SessionResponse {
    /// Active UI theme, `light` when none was chosen
    pub theme: String,
    /// Signed-in user, absent for anonymous visitors
    pub user: Option<UserResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct SaveThemeRequest {
    pub theme: String,
}
