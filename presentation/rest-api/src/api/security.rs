use std::sync::Arc;
use std::time::Duration;

use poem::web::cookie::{Cookie, CookieJar, SameSite};
use poem_openapi::payload::Json;

use business::domain::shared::session::{Session, Unauthorized};
use business::domain::theme::Theme;
use business::domain::user::services::TokenService;

use crate::api::error::ErrorResponse;

pub const SESSION_COOKIE: &str = "jwt";
pub const THEME_COOKIE: &str = "theme";

const SESSION_MAX_AGE: Duration = Duration::from_secs(30 * 24 * 60 * 60);
const THEME_MAX_AGE: Duration = Duration::from_secs(360 * 24 * 60 * 60);

/// Rejects anonymous sessions with the 401 body. Handlers call this before
/// parsing ids or payloads.
pub fn require_session(session: Session) -> Result<Session, Json<ErrorResponse>> {
    if session.is_authenticated() {
        Ok(session)
    } else {
        Err(Json(ErrorResponse::new(
            "Unauthorized",
            &Unauthorized.to_string(),
        )))
    }
}

/// Turns request cookies into a [`Session`] and builds the cookies handed back to the client.
///
/// A missing, expired or tampered `jwt` cookie resolves to an anonymous session;
/// use cases decide whether that is acceptable.
pub struct SessionResolver {
    token_service: Arc<dyn TokenService>,
    secure_cookies: bool,
}

impl SessionResolver {
    pub fn new(token_service: Arc<dyn TokenService>, secure_cookies: bool) -> Self {
        Self {
            token_service,
            secure_cookies,
        }
    }

    pub fn resolve(&self, cookie_jar: &CookieJar) -> Session {
        self.resolve_token(cookie_jar.get(SESSION_COOKIE).as_ref().map(Cookie::value_str))
    }

    fn resolve_token(&self, token: Option<&str>) -> Session {
        match token.filter(|t| !t.is_empty()) {
            Some(token) => match self.token_service.verify(token) {
                Some(user_id) => Session::authenticated(user_id),
                None => {
                    tracing::debug!("Ignoring invalid session token");
                    Session::anonymous()
                }
            },
            None => Session::anonymous(),
        }
    }

    pub fn session_cookie(&self, token: &str) -> Cookie {
        let mut cookie = self.base_cookie(SESSION_COOKIE, token);
        cookie.set_max_age(SESSION_MAX_AGE);
        cookie
    }

    /// Overwrites the session cookie with an empty value that expires immediately.
    pub fn expired_session_cookie(&self) -> Cookie {
        let mut cookie = self.base_cookie(SESSION_COOKIE, "");
        cookie.set_max_age(Duration::ZERO);
        cookie
    }

    pub fn theme_cookie(&self, theme: Theme) -> Cookie {
        let mut cookie = self.base_cookie(THEME_COOKIE, &theme.to_string());
        cookie.set_max_age(THEME_MAX_AGE);
        cookie
    }

    pub fn read_theme(&self, cookie_jar: &CookieJar) -> Theme {
        Theme::from_cookie(cookie_jar.get(THEME_COOKIE).as_ref().map(Cookie::value_str))
    }

    fn base_cookie(&self, name: &str, value: &str) -> Cookie {
        let mut cookie = Cookie::new_with_str(name, value);
        cookie.set_path("/");
        cookie.set_http_only(true);
        cookie.set_same_site(SameSite::Strict);
        cookie.set_secure(self.secure_cookies);
        cookie
    }
}
