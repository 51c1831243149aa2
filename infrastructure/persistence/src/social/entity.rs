use sqlx::FromRow;
use uuid::Uuid;

use business::domain::recipe::social::{RecipeShare, ShareStatus};
use business::domain::shared::value_objects::UserId;

#[derive(Debug, FromRow)]
pub struct RecipeShareEntity {
    pub recipe_id: Uuid,
    pub user_id: Uuid,
    pub status: String,
}

impl RecipeShareEntity {
    pub fn into_domain(self) -> RecipeShare {
        RecipeShare {
            recipe_id: self.recipe_id,
            user_id: UserId::new(self.user_id),
            status: self
                .status
                .parse::<ShareStatus>()
                .unwrap_or(ShareStatus::Pending),
        }
    }
}
