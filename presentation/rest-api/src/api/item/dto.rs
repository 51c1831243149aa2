use chrono::{DateTime, Utc};
use poem_openapi::Object;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use business::domain::item::model::Item;

use crate::api::decimal::to_number;

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct SaveItemRequest {
    /// Display name, at least 3 characters
    pub name: String,
    /// How many units of `amount_kind` the price buys
    pub base_amount: i32,
    /// Unit label, e.g. `g`, `ml`, `un`
    pub amount_kind: String,
    /// Price of `base_amount` units, at least 0.01
    pub price: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct ItemResponse {
    pub id: Uuid,
    pub name: String,
    pub base_amount: i32,
    pub amount_kind: String,
    pub price: f64,
    pub state: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Item> for ItemResponse {
    fn from(item: Item) -> Self {
        Self {
            id: item.id,
            price: to_number(&item.price),
            state: item.state.to_string(),
            name: item.name,
            base_amount: item.base_amount,
            amount_kind: item.amount_kind,
            created_at: item.created_at,
            updated_at: item.updated_at,
        }
    }
}
