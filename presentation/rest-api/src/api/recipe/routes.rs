use std::sync::Arc;

use poem::web::cookie::CookieJar;
use poem_openapi::{OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::recipe::use_cases::accept_share::{AcceptShareParams, AcceptShareUseCase};
use business::domain::recipe::use_cases::delete::{DeleteRecipeParams, DeleteRecipeUseCase};
use business::domain::recipe::use_cases::get_all::{GetAllRecipesParams, GetAllRecipesUseCase};
use business::domain::recipe::use_cases::get_by_id::{
    GetRecipeByIdParams, GetRecipeByIdUseCase,
};
use business::domain::recipe::use_cases::list_shared::{
    ListSharedRecipesParams, ListSharedRecipesUseCase,
};
use business::domain::recipe::use_cases::save::{SaveRecipeParams, SaveRecipeUseCase};
use business::domain::recipe::use_cases::set_like::{SetRecipeLikeParams, SetRecipeLikeUseCase};
use business::domain::recipe::use_cases::share::{ShareRecipeParams, ShareRecipeUseCase};
use business::domain::shared::session::Session;

use crate::api::error::{ErrorResponse, IntoErrorResponse, invalid_id};
use crate::api::recipe::dto::{
    RecipeOverviewResponse, RecipeResponse, RecipeShareResponse, SaveRecipeRequest,
    ShareRecipeRequest,
};
use crate::api::security::{SessionResolver, require_session};
use crate::api::tags::ApiTags;

/// Use cases behind the recipe endpoints.
pub struct RecipeUseCases {
    pub save: Arc<dyn SaveRecipeUseCase>,
    pub get_all: Arc<dyn GetAllRecipesUseCase>,
    pub get_by_id: Arc<dyn GetRecipeByIdUseCase>,
    pub delete: Arc<dyn DeleteRecipeUseCase>,
    pub share: Arc<dyn ShareRecipeUseCase>,
    pub accept_share: Arc<dyn AcceptShareUseCase>,
    pub list_shared: Arc<dyn ListSharedRecipesUseCase>,
    pub set_like: Arc<dyn SetRecipeLikeUseCase>,
}

pub struct RecipeApi {
    sessions: Arc<SessionResolver>,
    use_cases: RecipeUseCases,
}

type Failure = (u16, Json<ErrorResponse>);

impl RecipeApi {
    pub fn new(sessions: Arc<SessionResolver>, use_cases: RecipeUseCases) -> Self {
        Self {
            sessions,
            use_cases,
        }
    }

    async fn save(
        &self,
        session: Session,
        id: Option<&str>,
        body: SaveRecipeRequest,
    ) -> Result<RecipeResponse, Failure> {
        let params = save_params(session, id, body)?;

        self.use_cases
            .save
            .execute(params)
            .await
            .map(Into::into)
            .map_err(|err| {
                let (status, json) = err.into_error_response();
                (status.as_u16(), json)
            })
    }

    async fn set_like(&self, session: Session, id: &str, liked: bool) -> Result<(), Failure> {
        let session = require_session(session).map_err(|json| (401, json))?;
        let Ok(recipe_id) = Uuid::parse_str(id) else {
            return Err((400, invalid_id("recipe.invalid_id", "id")));
        };

        self.use_cases
            .set_like
            .execute(SetRecipeLikeParams {
                session,
                recipe_id,
                liked,
            })
            .await
            .map_err(|err| {
                let (status, json) = err.into_error_response();
                (status.as_u16(), json)
            })
    }
}

/// Checks the session before the path id and the id before the body.
fn save_params(
    session: Session,
    id: Option<&str>,
    body: SaveRecipeRequest,
) -> Result<SaveRecipeParams, Failure> {
    let session = require_session(session).map_err(|json| (401, json))?;
    let id = id
        .map(|raw| Uuid::parse_str(raw).map_err(|_| (400, invalid_id("recipe.invalid_id", "id"))))
        .transpose()?;
    let items = body.item_lines().map_err(|fields| {
        (
            400,
            Json(ErrorResponse::validation("recipe.invalid_items", fields)),
        )
    })?;

    Ok(SaveRecipeParams {
        session,
        id,
        name: body.name,
        items,
    })
}

/// Recipe API
///
/// Recipes combine the caller's items with an amount each. Updates replace
/// the whole item list; only the differences are written.
#[OpenApi]
impl RecipeApi {
    /// Create a recipe
    #[oai(path = "/recipes", method = "post", tag = "ApiTags::Recipes")]
    async fn create_recipe(
        &self,
        cookie_jar: &CookieJar,
        body: Json<SaveRecipeRequest>,
    ) -> CreateRecipeResponse {
        match self.save(self.sessions.resolve(cookie_jar), None, body.0).await {
            Ok(recipe) => CreateRecipeResponse::Created(Json(recipe)),
            Err((status, json)) => match status {
                400 => CreateRecipeResponse::BadRequest(json),
                401 => CreateRecipeResponse::Unauthorized(json),
                _ => CreateRecipeResponse::InternalError(json),
            },
        }
    }

    /// List own recipes
    ///
    /// Each entry carries its ingredients, like count and estimated cost.
    #[oai(path = "/recipes", method = "get", tag = "ApiTags::Recipes")]
    async fn get_all_recipes(&self, cookie_jar: &CookieJar) -> ListRecipesResponse {
        let params = GetAllRecipesParams {
            session: self.sessions.resolve(cookie_jar),
        };

        match self.use_cases.get_all.execute(params).await {
            Ok(recipes) => {
                ListRecipesResponse::Ok(Json(recipes.into_iter().map(Into::into).collect()))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    401 => ListRecipesResponse::Unauthorized(json),
                    _ => ListRecipesResponse::InternalError(json),
                }
            }
        }
    }

    /// List recipes shared with me
    #[oai(path = "/recipes/shared", method = "get", tag = "ApiTags::Recipes")]
    async fn get_shared_recipes(&self, cookie_jar: &CookieJar) -> ListRecipesResponse {
        let params = ListSharedRecipesParams {
            session: self.sessions.resolve(cookie_jar),
        };

        match self.use_cases.list_shared.execute(params).await {
            Ok(recipes) => {
                ListRecipesResponse::Ok(Json(recipes.into_iter().map(Into::into).collect()))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    401 => ListRecipesResponse::Unauthorized(json),
                    _ => ListRecipesResponse::InternalError(json),
                }
            }
        }
    }

    /// Get a recipe by ID
    #[oai(path = "/recipes/:id", method = "get", tag = "ApiTags::Recipes")]
    async fn get_recipe_by_id(
        &self,
        cookie_jar: &CookieJar,
        id: Path<String>,
    ) -> GetRecipeByIdResponse {
        let session = match require_session(self.sessions.resolve(cookie_jar)) {
            Ok(session) => session,
            Err(json) => return GetRecipeByIdResponse::Unauthorized(json),
        };
        let Ok(uuid) = Uuid::parse_str(&id.0) else {
            return GetRecipeByIdResponse::BadRequest(invalid_id("recipe.invalid_id", "id"));
        };

        let params = GetRecipeByIdParams {
            session,
            id: uuid,
        };

        match self.use_cases.get_by_id.execute(params).await {
            Ok(recipe) => GetRecipeByIdResponse::Ok(Json(recipe.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    401 => GetRecipeByIdResponse::Unauthorized(json),
                    404 => GetRecipeByIdResponse::NotFound(json),
                    _ => GetRecipeByIdResponse::InternalError(json),
                }
            }
        }
    }

    /// Update a recipe
    ///
    /// The submitted item list replaces the stored one.
    #[oai(path = "/recipes/:id", method = "put", tag = "ApiTags::Recipes")]
    async fn update_recipe(
        &self,
        cookie_jar: &CookieJar,
        id: Path<String>,
        body: Json<SaveRecipeRequest>,
    ) -> UpdateRecipeResponse {
        match self
            .save(self.sessions.resolve(cookie_jar), Some(id.0.as_str()), body.0)
            .await
        {
            Ok(recipe) => UpdateRecipeResponse::Ok(Json(recipe)),
            Err((status, json)) => match status {
                400 => UpdateRecipeResponse::BadRequest(json),
                401 => UpdateRecipeResponse::Unauthorized(json),
                404 => UpdateRecipeResponse::NotFound(json),
                _ => UpdateRecipeResponse::InternalError(json),
            },
        }
    }

    /// Delete a recipe
    #[oai(path = "/recipes/:id", method = "delete", tag = "ApiTags::Recipes")]
    async fn delete_recipe(
        &self,
        cookie_jar: &CookieJar,
        id: Path<String>,
    ) -> EmptyRecipeResponse {
        let session = match require_session(self.sessions.resolve(cookie_jar)) {
            Ok(session) => session,
            Err(json) => return EmptyRecipeResponse::Unauthorized(json),
        };
        let Ok(uuid) = Uuid::parse_str(&id.0) else {
            return EmptyRecipeResponse::BadRequest(invalid_id("recipe.invalid_id", "id"));
        };

        let params = DeleteRecipeParams {
            session,
            id: uuid,
        };

        match self.use_cases.delete.execute(params).await {
            Ok(()) => EmptyRecipeResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                EmptyRecipeResponse::from_failure(status.as_u16(), json)
            }
        }
    }

    /// Share a recipe
    ///
    /// Offers the recipe to another user by email. The share stays pending
    /// until the recipient accepts it.
    #[oai(path = "/recipes/:id/shares", method = "post", tag = "ApiTags::Recipes")]
    async fn share_recipe(
        &self,
        cookie_jar: &CookieJar,
        id: Path<String>,
        body: Json<ShareRecipeRequest>,
    ) -> ShareResponse {
        let session = match require_session(self.sessions.resolve(cookie_jar)) {
            Ok(session) => session,
            Err(json) => return ShareResponse::Unauthorized(json),
        };
        let Ok(uuid) = Uuid::parse_str(&id.0) else {
            return ShareResponse::BadRequest(invalid_id("recipe.invalid_id", "id"));
        };

        let params = ShareRecipeParams {
            session,
            recipe_id: uuid,
            recipient_email: body.0.email,
        };

        match self.use_cases.share.execute(params).await {
            Ok(share) => ShareResponse::Ok(Json(share.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                ShareResponse::from_failure(status.as_u16(), json)
            }
        }
    }

    /// Accept a shared recipe
    #[oai(
        path = "/recipes/:id/shares/accept",
        method = "post",
        tag = "ApiTags::Recipes"
    )]
    async fn accept_share(&self, cookie_jar: &CookieJar, id: Path<String>) -> ShareResponse {
        let session = match require_session(self.sessions.resolve(cookie_jar)) {
            Ok(session) => session,
            Err(json) => return ShareResponse::Unauthorized(json),
        };
        let Ok(uuid) = Uuid::parse_str(&id.0) else {
            return ShareResponse::BadRequest(invalid_id("recipe.invalid_id", "id"));
        };

        let params = AcceptShareParams {
            session,
            recipe_id: uuid,
        };

        match self.use_cases.accept_share.execute(params).await {
            Ok(share) => ShareResponse::Ok(Json(share.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                ShareResponse::from_failure(status.as_u16(), json)
            }
        }
    }

    /// Like a recipe
    #[oai(path = "/recipes/:id/like", method = "put", tag = "ApiTags::Recipes")]
    async fn like_recipe(&self, cookie_jar: &CookieJar, id: Path<String>) -> EmptyRecipeResponse {
        match self
            .set_like(self.sessions.resolve(cookie_jar), &id.0, true)
            .await
        {
            Ok(()) => EmptyRecipeResponse::NoContent,
            Err((status, json)) => EmptyRecipeResponse::from_failure(status, json),
        }
    }

    /// Remove a like
    #[oai(path = "/recipes/:id/like", method = "delete", tag = "ApiTags::Recipes")]
    async fn unlike_recipe(
        &self,
        cookie_jar: &CookieJar,
        id: Path<String>,
    ) -> EmptyRecipeResponse {
        match self
            .set_like(self.sessions.resolve(cookie_jar), &id.0, false)
            .await
        {
            Ok(()) => EmptyRecipeResponse::NoContent,
            Err((status, json)) => EmptyRecipeResponse::from_failure(status, json),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateRecipeResponse {
    #[oai(status = 201)]
    Created(Json<RecipeResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ListRecipesResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<RecipeOverviewResponse>>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetRecipeByIdResponse {
    #[oai(status = 200)]
    Ok(Json<RecipeResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateRecipeResponse {
    #[oai(status = 200)]
    Ok(Json<RecipeResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum EmptyRecipeResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl EmptyRecipeResponse {
    fn from_failure(status: u16, json: Json<ErrorResponse>) -> Self {
        match status {
            400 => Self::BadRequest(json),
            401 => Self::Unauthorized(json),
            404 => Self::NotFound(json),
            _ => Self::InternalError(json),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum ShareResponse {
    #[oai(status = 200)]
    Ok(Json<RecipeShareResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl ShareResponse {
    fn from_failure(status: u16, json: Json<ErrorResponse>) -> Self {
        match status {
            400 => Self::BadRequest(json),
            401 => Self::Unauthorized(json),
            404 => Self::NotFound(json),
            409 => Self::Conflict(json),
            _ => Self::InternalError(json),
        }
    }
}
