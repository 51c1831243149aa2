use std::sync::Arc;

use poem::web::cookie::CookieJar;
use poem_openapi::{OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::item::use_cases::delete::{DeleteItemParams, DeleteItemUseCase};
use business::domain::item::use_cases::get_all::{GetAllItemsParams, GetAllItemsUseCase};
use business::domain::item::use_cases::get_by_id::{GetItemByIdParams, GetItemByIdUseCase};
use business::domain::item::use_cases::save::{SaveItemParams, SaveItemUseCase};
use business::domain::shared::session::Session;

use crate::api::decimal::to_decimal;
use crate::api::error::{ErrorResponse, FieldError, IntoErrorResponse, invalid_id};
use crate::api::item::dto::{ItemResponse, SaveItemRequest};
use crate::api::security::{SessionResolver, require_session};
use crate::api::tags::ApiTags;

pub struct ItemApi {
    sessions: Arc<SessionResolver>,
    save_use_case: Arc<dyn SaveItemUseCase>,
    get_all_use_case: Arc<dyn GetAllItemsUseCase>,
    get_by_id_use_case: Arc<dyn GetItemByIdUseCase>,
    delete_use_case: Arc<dyn DeleteItemUseCase>,
}

impl ItemApi {
    pub fn new(
        sessions: Arc<SessionResolver>,
        save_use_case: Arc<dyn SaveItemUseCase>,
        get_all_use_case: Arc<dyn GetAllItemsUseCase>,
        get_by_id_use_case: Arc<dyn GetItemByIdUseCase>,
        delete_use_case: Arc<dyn DeleteItemUseCase>,
    ) -> Self {
        Self {
            sessions,
            save_use_case,
            get_all_use_case,
            get_by_id_use_case,
            delete_use_case,
        }
    }

    async fn save(
        &self,
        session: Session,
        id: Option<&str>,
        body: SaveItemRequest,
    ) -> Result<ItemResponse, (u16, Json<ErrorResponse>)> {
        let params = save_params(session, id, body)?;

        match self.save_use_case.execute(params).await {
            Ok(item) => Ok(item.into()),
            Err(err) => {
                let (status, json) = err.into_error_response();
                Err((status.as_u16(), json))
            }
        }
    }
}

fn save_params(
    session: Session,
    id: Option<&str>,
    body: SaveItemRequest,
) -> Result<SaveItemParams, (u16, Json<ErrorResponse>)> {
    let session = require_session(session).map_err(|json| (401, json))?;
    let id = id
        .map(|raw| Uuid::parse_str(raw).map_err(|_| (400, invalid_id("item.invalid_id", "id"))))
        .transpose()?;
    let price = to_decimal(body.price).ok_or_else(|| {
        (
            400,
            Json(ErrorResponse::validation(
                "item.price_too_low",
                vec![FieldError::new("price", "item.price_too_low")],
            )),
        )
    })?;

    Ok(SaveItemParams {
        session,
        id,
        name: body.name,
        base_amount: body.base_amount,
        amount_kind: body.amount_kind,
        price,
    })
}

/// Item catalog API
///
/// Every endpoint acts on the signed-in user's own items.
#[OpenApi]
impl ItemApi {
    /// Create an item
    #[oai(path = "/items", method = "post", tag = "ApiTags::Items")]
    async fn create_item(
        &self,
        cookie_jar: &CookieJar,
        body: Json<SaveItemRequest>,
    ) -> CreateItemResponse {
        match self.save(self.sessions.resolve(cookie_jar), None, body.0).await {
            Ok(item) => CreateItemResponse::Created(Json(item)),
            Err((status, json)) => match status {
                400 => CreateItemResponse::BadRequest(json),
                401 => CreateItemResponse::Unauthorized(json),
                409 => CreateItemResponse::Conflict(json),
                _ => CreateItemResponse::InternalError(json),
            },
        }
    }

    /// List visible items
    ///
    /// Archived items are left out. Sorted by name.
    #[oai(path = "/items", method = "get", tag = "ApiTags::Items")]
    async fn get_all_items(&self, cookie_jar: &CookieJar) -> GetAllItemsResponse {
        let params = GetAllItemsParams {
            session: self.sessions.resolve(cookie_jar),
        };

        match self.get_all_use_case.execute(params).await {
            Ok(items) => GetAllItemsResponse::Ok(Json(items.into_iter().map(Into::into).collect())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    401 => GetAllItemsResponse::Unauthorized(json),
                    _ => GetAllItemsResponse::InternalError(json),
                }
            }
        }
    }

    /// Get an item by ID
    ///
    /// Archived items are still returned so recipes can show what they use.
    #[oai(path = "/items/:id", method = "get", tag = "ApiTags::Items")]
    async fn get_item_by_id(&self, cookie_jar: &CookieJar, id: Path<String>) -> GetItemByIdResponse {
        let session = match require_session(self.sessions.resolve(cookie_jar)) {
            Ok(session) => session,
            Err(json) => return GetItemByIdResponse::Unauthorized(json),
        };
        let Ok(uuid) = Uuid::parse_str(&id.0) else {
            return GetItemByIdResponse::BadRequest(invalid_id("item.invalid_id", "id"));
        };

        let params = GetItemByIdParams {
            session,
            id: uuid,
        };

        match self.get_by_id_use_case.execute(params).await {
            Ok(item) => GetItemByIdResponse::Ok(Json(item.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    401 => GetItemByIdResponse::Unauthorized(json),
                    404 => GetItemByIdResponse::NotFound(json),
                    _ => GetItemByIdResponse::InternalError(json),
                }
            }
        }
    }

    /// Update an item
    #[oai(path = "/items/:id", method = "put", tag = "ApiTags::Items")]
    async fn update_item(
        &self,
        cookie_jar: &CookieJar,
        id: Path<String>,
        body: Json<SaveItemRequest>,
    ) -> UpdateItemResponse {
        match self
            .save(self.sessions.resolve(cookie_jar), Some(id.0.as_str()), body.0)
            .await
        {
            Ok(item) => UpdateItemResponse::Ok(Json(item)),
            Err((status, json)) => match status {
                400 => UpdateItemResponse::BadRequest(json),
                401 => UpdateItemResponse::Unauthorized(json),
                404 => UpdateItemResponse::NotFound(json),
                409 => UpdateItemResponse::Conflict(json),
                _ => UpdateItemResponse::InternalError(json),
            },
        }
    }

    /// Delete an item
    ///
    /// Archives the item. Fails with 409 while any recipe still uses it.
    #[oai(path = "/items/:id", method = "delete", tag = "ApiTags::Items")]
    async fn delete_item(&self, cookie_jar: &CookieJar, id: Path<String>) -> DeleteItemResponse {
        let session = match require_session(self.sessions.resolve(cookie_jar)) {
            Ok(session) => session,
            Err(json) => return DeleteItemResponse::Unauthorized(json),
        };
        let Ok(uuid) = Uuid::parse_str(&id.0) else {
            return DeleteItemResponse::BadRequest(invalid_id("item.invalid_id", "id"));
        };

        let params = DeleteItemParams {
            session,
            id: uuid,
        };

        match self.delete_use_case.execute(params).await {
            Ok(()) => DeleteItemResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    401 => DeleteItemResponse::Unauthorized(json),
                    404 => DeleteItemResponse::NotFound(json),
                    409 => DeleteItemResponse::Conflict(json),
                    _ => DeleteItemResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateItemResponse {
    #[oai(status = 201)]
    Created(Json<ItemResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllItemsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ItemResponse>>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetItemByIdResponse {
    #[oai(status = 200)]
    Ok(Json<ItemResponse>),
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
pub enum UpdateItemResponse {
    #[oai(status = 200)]
    Ok(Json<ItemResponse>),
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

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteItemResponse {
    #[oai(status = 204)]
    NoContent,
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

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::shared::value_objects::UserId;

    fn request(price: f64) -> SaveItemRequest {
        SaveItemRequest {
            name: "Butter".to_string(),
            base_amount: 250,
            amount_kind: "g".to_string(),
            price,
        }
    }

    #[test]
    fn should_reject_anonymous_save_before_checking_price() {
        let result = save_params(Session::anonymous(), Some("bad-id"), request(f64::NAN));

        assert_eq!(result.err().map(|(status, _)| status), Some(401));
    }

    #[test]
    fn should_report_bad_id_then_bad_price_for_signed_in_caller() {
        let session = Session::authenticated(UserId::generate());

        let bad_id = save_params(session.clone(), Some("bad-id"), request(2.5));
        let bad_price = save_params(session, None, request(f64::NAN));

        assert_eq!(
            bad_id.err().map(|(status, json)| (status, json.0.message)),
            Some((400, "item.invalid_id".to_string()))
        );
        assert_eq!(
            bad_price.err().map(|(status, json)| (status, json.0.message)),
            Some((400, "item.price_too_low".to_string()))
        );
    }
}
