use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::item::model::Item;
use business::domain::shared::value_objects::{EntityState, UserId};

pub const ITEM_COLUMNS: &str =
    "id, user_id, name, base_amount, amount_kind, price, state, created_at, updated_at";

#[derive(Debug, FromRow)]
pub struct ItemEntity {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub base_amount: i32,
    pub amount_kind: String,
    pub price: BigDecimal,
    pub state: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ItemEntity {
    pub fn into_domain(self) -> Item {
        Item::from_repository(
            self.id,
            UserId::new(self.user_id),
            self.name,
            self.base_amount,
            self.amount_kind,
            self.price,
            self.state
                .parse::<EntityState>()
                .unwrap_or(EntityState::Visible),
            self.created_at,
            self.updated_at,
        )
    }
}
