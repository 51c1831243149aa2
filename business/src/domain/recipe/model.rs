use bigdecimal::{BigDecimal, Zero};
use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::diff::{ItemLine, ItemListDiff, diff_item_lines, duplicate_positions};
use super::errors::RecipeError;
use crate::domain::item::model::Item;
use crate::domain::shared::scope::Owned;
use crate::domain::shared::value_objects::{EntityState, UserId};

pub const MIN_NAME_LENGTH: usize = 3;

/// Association row between a recipe and one of the owner's items.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeItem {
    pub recipe_id: Uuid,
    pub item_id: Uuid,
    pub amount: BigDecimal,
}

impl RecipeItem {
    pub fn line(&self) -> ItemLine {
        ItemLine::new(self.item_id, self.amount.clone())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Recipe {
    pub id: Uuid,
    pub user_id: UserId,
    pub name: String,
    pub state: EntityState,
    pub items: Vec<RecipeItem>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Recipe {
    /// Builds a new visible recipe. `lines` must already be validated.
    pub fn new(user_id: UserId, name: String, lines: Vec<ItemLine>) -> Self {
        let id = Uuid::new_v4();
        let now = Utc::now();
        Self {
            id,
            user_id,
            name,
            state: EntityState::Visible,
            items: lines
                .into_iter()
                .map(|line| RecipeItem {
                    recipe_id: id,
                    item_id: line.item_id,
                    amount: line.amount,
                })
                .collect(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn lines(&self) -> Vec<ItemLine> {
        self.items.iter().map(RecipeItem::line).collect()
    }

    pub fn is_visible(&self) -> bool {
        self.state == EntityState::Visible
    }
}

impl Owned for Recipe {
    fn owner(&self) -> &UserId {
        &self.user_id
    }
}

/// A validated submission for an existing recipe. The item diff is taken
/// against whatever rows are stored when the update runs, not when it was built.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeUpdate {
    pub recipe_id: Uuid,
    pub name: String,
    pub items: Vec<ItemLine>,
    pub updated_at: DateTime<Utc>,
}

impl RecipeUpdate {
    pub fn diff_against(&self, current: &Recipe) -> ItemListDiff {
        diff_item_lines(&current.lines(), &self.items)
    }
}

/// Trims and checks a recipe name.
pub fn validate_name(name: &str) -> Result<String, RecipeError> {
    let name = name.trim();
    if name.chars().count() < MIN_NAME_LENGTH {
        return Err(RecipeError::NameTooShort);
    }
    Ok(name.to_string())
}

/// Rejects repeated item ids first, then non-positive amounts.
pub fn validate_lines(lines: &[ItemLine]) -> Result<(), RecipeError> {
    let positions = duplicate_positions(lines);
    if !positions.is_empty() {
        return Err(RecipeError::DuplicateItems { positions });
    }

    let positions: Vec<usize> = lines
        .iter()
        .enumerate()
        .filter(|(_, line)| line.amount <= BigDecimal::zero())
        .map(|(position, _)| position)
        .collect();
    if !positions.is_empty() {
        return Err(RecipeError::AmountNotPositive { positions });
    }

    Ok(())
}

/// An item as used by a recipe listing.
#[derive(Debug, Clone, PartialEq)]
pub struct Ingredient {
    pub item: Item,
    pub amount: BigDecimal,
}

impl Ingredient {
    /// Price of the used amount, proportional to the item's purchase unit.
    pub fn cost(&self) -> BigDecimal {
        if self.item.base_amount <= 0 {
            return BigDecimal::zero();
        }
        &self.amount * &self.item.price / BigDecimal::from(self.item.base_amount)
    }
}

/// Read model for recipe listings.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeOverview {
    pub id: Uuid,
    pub user_id: UserId,
    pub name: String,
    pub ingredients: Vec<Ingredient>,
    pub like_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl RecipeOverview {
    pub fn estimated_cost(&self) -> BigDecimal {
        self.ingredients
            .iter()
            .map(Ingredient::cost)
            .fold(BigDecimal::zero(), |total, cost| total + cost)
            .round(2)
    }
}
