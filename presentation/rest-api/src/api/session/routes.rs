use std::sync::Arc;

use poem::web::cookie::CookieJar;
use poem_openapi::{OpenApi, payload::Json};

use business::domain::theme::Theme;
use business::domain::user::use_cases::get_current::{
    GetCurrentUserParams, GetCurrentUserUseCase,
};

use crate::api::error::{ErrorResponse, FieldError, IntoErrorResponse};
use crate::api::security::SessionResolver;
use crate::api::session::dto::{SaveThemeRequest, SessionResponse};
use crate::api::tags::ApiTags;

pub struct SessionApi {
    sessions: Arc<SessionResolver>,
    get_current_user_use_case: Arc<dyn GetCurrentUserUseCase>,
}

impl SessionApi {
    pub fn new(
        sessions: Arc<SessionResolver>,
        get_current_user_use_case: Arc<dyn GetCurrentUserUseCase>,
    ) -> Self {
        Self {
            sessions,
            get_current_user_use_case,
        }
    }
}

#[OpenApi]
impl SessionApi {
    /// Current session
    ///
    /// Public. Returns the theme preference and, when signed in, the user.
    #[oai(path = "/session", method = "get", tag = "ApiTags::Session")]
    async fn get_session(&self, cookie_jar: &CookieJar) -> GetSessionResponse {
        let theme = self.sessions.read_theme(cookie_jar);
        let params = GetCurrentUserParams {
            session: self.sessions.resolve(cookie_jar),
        };

        match self.get_current_user_use_case.execute(params).await {
            Ok(user) => GetSessionResponse::Ok(Json(SessionResponse {
                theme: theme.to_string(),
                user: user.map(Into::into),
            })),
            Err(err) => {
                let (_, json) = err.into_error_response();
                GetSessionResponse::InternalError(json)
            }
        }
    }

    /// Save theme preference
    #[oai(path = "/theme", method = "put", tag = "ApiTags::Session")]
    async fn save_theme(
        &self,
        cookie_jar: &CookieJar,
        body: Json<SaveThemeRequest>,
    ) -> SaveThemeResponse {
        match body.0.theme.parse::<Theme>() {
            Ok(theme) => {
                cookie_jar.add(self.sessions.theme_cookie(theme));
                SaveThemeResponse::NoContent
            }
            Err(_) => SaveThemeResponse::BadRequest(Json(ErrorResponse::validation(
                "theme.invalid",
                vec![FieldError::new("theme", "theme.invalid")],
            ))),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetSessionResponse {
    #[oai(status = 200)]
    Ok(Json<SessionResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum SaveThemeResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
}
