use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::recipe::model::{Ingredient, Recipe, RecipeItem, RecipeOverview};
use business::domain::shared::value_objects::{EntityState, UserId};

use crate::item::entity::ItemEntity;

#[derive(Debug, FromRow)]
pub struct RecipeEntity {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub state: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl RecipeEntity {
    pub fn into_domain(self, items: Vec<RecipeItemEntity>) -> Recipe {
        Recipe {
            id: self.id,
            user_id: UserId::new(self.user_id),
            name: self.name,
            state: self
                .state
                .parse::<EntityState>()
                .unwrap_or(EntityState::Visible),
            items: items.into_iter().map(|e| e.into_domain()).collect(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, FromRow)]
pub struct RecipeItemEntity {
    pub recipe_id: Uuid,
    pub item_id: Uuid,
    pub amount: BigDecimal,
}

impl RecipeItemEntity {
    pub fn into_domain(self) -> RecipeItem {
        RecipeItem {
            recipe_id: self.recipe_id,
            item_id: self.item_id,
            amount: self.amount,
        }
    }
}

/// Recipe row of a listing, with its like count.
#[derive(Debug, FromRow)]
pub struct RecipeSummaryEntity {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub like_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl RecipeSummaryEntity {
    pub fn into_domain(self, ingredients: Vec<Ingredient>) -> RecipeOverview {
        RecipeOverview {
            id: self.id,
            user_id: UserId::new(self.user_id),
            name: self.name,
            ingredients,
            like_count: self.like_count,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// A `recipe_items` row joined with the item it points at.
#[derive(Debug, FromRow)]
pub struct IngredientEntity {
    pub recipe_id: Uuid,
    pub amount: BigDecimal,
    #[sqlx(flatten)]
    pub item: ItemEntity,
}

impl IngredientEntity {
    pub fn into_domain(self) -> Ingredient {
        Ingredient {
            item: self.item.into_domain(),
            amount: self.amount,
        }
    }
}
