use chrono::{DateTime, Utc};
use poem_openapi::Object;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use business::domain::recipe::diff::ItemLine;
use business::domain::recipe::model::{Ingredient, Recipe, RecipeOverview};
use business::domain::recipe::social::RecipeShare;

use crate::api::decimal::{to_decimal, to_number};
use crate::api::error::FieldError;

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct RecipeItemRequest {
    /// Id of one of the caller's items
    pub id: String,
    /// Amount used, in the item's unit; must be greater than zero
    pub amount: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct SaveRecipeRequest {
    pub name: String,
    pub items: Vec<RecipeItemRequest>,
}

impl SaveRecipeRequest {
    /// Parses item ids and amounts, collecting every malformed entry.
    pub fn item_lines(&self) -> Result<Vec<ItemLine>, Vec<FieldError>> {
        let mut lines = Vec::with_capacity(self.items.len());
        let mut errors = Vec::new();

        for (position, item) in self.items.iter().enumerate() {
            let id = Uuid::parse_str(&item.id);
            if id.is_err() {
                errors.push(FieldError::new(
                    format!("items[{position}].id"),
                    "recipe.invalid_item_id",
                ));
            }
            let amount = to_decimal(item.amount);
            if amount.is_none() {
                errors.push(FieldError::new(
                    format!("items[{position}].amount"),
                    "recipe.amount_not_positive",
                ));
            }
            if let (Ok(id), Some(amount)) = (id, amount) {
                lines.push(ItemLine::new(id, amount));
            }
        }

        if errors.is_empty() {
            Ok(lines)
        } else {
            Err(errors)
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct RecipeItemResponse {
    pub item_id: Uuid,
    pub amount: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct RecipeResponse {
    pub id: Uuid,
    pub name: String,
    pub state: String,
    pub items: Vec<RecipeItemResponse>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Recipe> for RecipeResponse {
    fn from(recipe: Recipe) -> Self {
        Self {
            id: recipe.id,
            name: recipe.name,
            state: recipe.state.to_string(),
            items: recipe
                .items
                .iter()
                .map(|item| RecipeItemResponse {
                    item_id: item.item_id,
                    amount: to_number(&item.amount),
                })
                .collect(),
            created_at: recipe.created_at,
            updated_at: recipe.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct IngredientResponse {
    pub item_id: Uuid,
    pub name: String,
    pub base_amount: i32,
    pub amount_kind: String,
    pub price: f64,
    pub amount: f64,
    pub cost: f64,
}

impl From<&Ingredient> for IngredientResponse {
    fn from(ingredient: &Ingredient) -> Self {
        Self {
            item_id: ingredient.item.id,
            name: ingredient.item.name.clone(),
            base_amount: ingredient.item.base_amount,
            amount_kind: ingredient.item.amount_kind.clone(),
            price: to_number(&ingredient.item.price),
            amount: to_number(&ingredient.amount),
            cost: to_number(&ingredient.cost().round(2)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct RecipeOverviewResponse {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub name: String,
    pub ingredients: Vec<IngredientResponse>,
    pub like_count: i64,
    pub estimated_cost: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<RecipeOverview> for RecipeOverviewResponse {
    fn from(overview: RecipeOverview) -> Self {
        Self {
            estimated_cost: to_number(&overview.estimated_cost()),
            ingredients: overview.ingredients.iter().map(Into::into).collect(),
            id: overview.id,
            owner_id: overview.user_id.as_uuid(),
            name: overview.name,
            like_count: overview.like_count,
            created_at: overview.created_at,
            updated_at: overview.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct ShareRecipeRequest {
    /// Email of the user to share with
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct RecipeShareResponse {
    pub recipe_id: Uuid,
    pub user_id: Uuid,
    /// `pending` or `accepted`
    pub status: String,
}

impl From<RecipeShare> for RecipeShareResponse {
    fn from(share: RecipeShare) -> Self {
        Self {
            recipe_id: share.recipe_id,
            user_id: share.user_id.as_uuid(),
            status: share.status.to_string(),
        }
    }
}
