use bigdecimal::BigDecimal;
use bigdecimal::num_bigint::BigInt;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::ItemError;
use crate::domain::shared::scope::Owned;
use crate::domain::shared::value_objects::{EntityState, UserId};

pub const MIN_NAME_LENGTH: usize = 3;

/// Smallest accepted unit price (one cent).
pub fn min_price() -> BigDecimal {
    BigDecimal::new(BigInt::from(1), 2)
}

/// A purchasable catalog entry: `base_amount` units of `amount_kind` cost `price`.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: Uuid,
    pub user_id: UserId,
    pub name: String,
    pub base_amount: i32,
    pub amount_kind: String,
    pub price: BigDecimal,
    pub state: EntityState,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Caller-editable fields of an item.
#[derive(Debug, Clone)]
pub struct ItemDetails {
    pub name: String,
    pub base_amount: i32,
    pub amount_kind: String,
    pub price: BigDecimal,
}

impl ItemDetails {
    /// Trims text fields and checks every bound.
    pub fn validated(self) -> Result<Self, ItemError> {
        let name = self.name.trim().to_string();
        if name.chars().count() < MIN_NAME_LENGTH {
            return Err(ItemError::NameTooShort);
        }
        if self.base_amount < 1 {
            return Err(ItemError::BaseAmountNotPositive);
        }
        let amount_kind = self.amount_kind.trim().to_string();
        if amount_kind.is_empty() {
            return Err(ItemError::AmountKindEmpty);
        }
        if self.price < min_price() {
            return Err(ItemError::PriceTooLow);
        }

        Ok(Self {
            name,
            base_amount: self.base_amount,
            amount_kind,
            price: self.price,
        })
    }
}

impl Item {
    pub fn new(user_id: UserId, details: ItemDetails) -> Result<Self, ItemError> {
        let details = details.validated()?;

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            user_id,
            name: details.name,
            base_amount: details.base_amount,
            amount_kind: details.amount_kind,
            price: details.price,
            state: EntityState::Visible,
            created_at: now,
            updated_at: now,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: Uuid,
        user_id: UserId,
        name: String,
        base_amount: i32,
        amount_kind: String,
        price: BigDecimal,
        state: EntityState,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            name,
            base_amount,
            amount_kind,
            price,
            state,
            created_at,
            updated_at,
        }
    }

    /// Replaces the editable fields, keeping identity, owner and lifecycle state.
    pub fn apply_details(&mut self, details: ItemDetails) -> Result<(), ItemError> {
        let details = details.validated()?;
        self.name = details.name;
        self.base_amount = details.base_amount;
        self.amount_kind = details.amount_kind;
        self.price = details.price;
        self.updated_at = Utc::now();
        Ok(())
    }

    pub fn archive(&mut self) {
        self.state = EntityState::Archived;
        self.updated_at = Utc::now();
    }

    pub fn is_visible(&self) -> bool {
        self.state == EntityState::Visible
    }
}

impl Owned for Item {
    fn owner(&self) -> &UserId {
        &self.user_id
    }
}
