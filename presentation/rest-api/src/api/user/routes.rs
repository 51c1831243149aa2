use std::sync::Arc;

use poem::web::cookie::CookieJar;
use poem_openapi::{OpenApi, payload::Json};

use business::domain::user::use_cases::sign_in::{SignInParams, SignInUseCase};
use business::domain::user::use_cases::sign_out::{SignOutParams, SignOutUseCase};
use business::domain::user::use_cases::sign_up::{SignUpParams, SignUpUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::security::SessionResolver;
use crate::api::tags::ApiTags;
use crate::api::user::dto::{SignInRequest, SignUpRequest, UserResponse};

pub struct UserApi {
    sessions: Arc<SessionResolver>,
    sign_up_use_case: Arc<dyn SignUpUseCase>,
    sign_in_use_case: Arc<dyn SignInUseCase>,
    sign_out_use_case: Arc<dyn SignOutUseCase>,
}

impl UserApi {
    pub fn new(
        sessions: Arc<SessionResolver>,
        sign_up_use_case: Arc<dyn SignUpUseCase>,
        sign_in_use_case: Arc<dyn SignInUseCase>,
        sign_out_use_case: Arc<dyn SignOutUseCase>,
    ) -> Self {
        Self {
            sessions,
            sign_up_use_case,
            sign_in_use_case,
            sign_out_use_case,
        }
    }
}

/// Account API
#[OpenApi]
impl UserApi {
    /// Register a new account
    #[oai(path = "/users/sign-up", method = "post", tag = "ApiTags::Users")]
    async fn sign_up(&self, body: Json<SignUpRequest>) -> SignUpResponse {
        let params = SignUpParams {
            name: body.0.name,
            email: body.0.email,
            password: body.0.password,
            profile_picture_url: body.0.profile_picture_url,
        };

        match self.sign_up_use_case.execute(params).await {
            Ok(user) => SignUpResponse::Created(Json(user.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => SignUpResponse::BadRequest(json),
                    409 => SignUpResponse::Conflict(json),
                    _ => SignUpResponse::InternalError(json),
                }
            }
        }
    }

    /// Sign in
    ///
    /// Sets the `jwt` session cookie on success.
    #[oai(path = "/users/sign-in", method = "post", tag = "ApiTags::Users")]
    async fn sign_in(&self, cookie_jar: &CookieJar, body: Json<SignInRequest>) -> SignInResponse {
        let params = SignInParams {
            email: body.0.email,
            password: body.0.password,
        };

        match self.sign_in_use_case.execute(params).await {
            Ok(result) => {
                cookie_jar.add(self.sessions.session_cookie(&result.token));
                SignInResponse::Ok(Json(result.user.into()))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    401 => SignInResponse::Unauthorized(json),
                    _ => SignInResponse::InternalError(json),
                }
            }
        }
    }

    /// Sign out
    ///
    /// Clears the session cookie.
    #[oai(path = "/users/sign-out", method = "post", tag = "ApiTags::Users")]
    async fn sign_out(&self, cookie_jar: &CookieJar) -> SignOutResponse {
        let params = SignOutParams {
            session: self.sessions.resolve(cookie_jar),
        };

        match self.sign_out_use_case.execute(params).await {
            Ok(()) => {
                cookie_jar.add(self.sessions.expired_session_cookie());
                SignOutResponse::NoContent
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    401 => SignOutResponse::Unauthorized(json),
                    _ => SignOutResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum SignUpResponse {
    #[oai(status = 201)]
    Created(Json<UserResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum SignInResponse {
    #[oai(status = 200)]
    Ok(Json<UserResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum SignOutResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
