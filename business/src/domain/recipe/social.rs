use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ShareStatus {
    Pending,
    Accepted,
}

/// Offer of a recipe from its owner to another user.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeShare {
    pub recipe_id: Uuid,
    pub user_id: UserId,
    pub status: ShareStatus,
}

impl RecipeShare {
    pub fn pending(recipe_id: Uuid, user_id: UserId) -> Self {
        Self {
            recipe_id,
            user_id,
            status: ShareStatus::Pending,
        }
    }

    pub fn is_accepted(&self) -> bool {
        self.status == ShareStatus::Accepted
    }

    pub fn accept(&mut self) {
        self.status = ShareStatus::Accepted;
    }
}

/// Shares and likes. These rows link a recipe to users other than its owner,
/// so access checks happen in the use cases rather than through an owner scope.
#[async_trait]
pub trait RecipeSocialRepository: Send + Sync {
    async fn find_share(
        &self,
        recipe_id: Uuid,
        user_id: &UserId,
    ) -> Result<Option<RecipeShare>, RepositoryError>;
    /// True when `user_id` accepted a share of the recipe and the recipe is still visible.
    async fn has_accepted_visible_share(
        &self,
        recipe_id: Uuid,
        user_id: &UserId,
    ) -> Result<bool, RepositoryError>;
    /// Inserts or updates the share keyed by recipe and recipient.
    async fn save_share(&self, share: &RecipeShare) -> Result<(), RepositoryError>;
    /// Adds or removes the like of `user_id`; repeating the same call is a no-op.
    async fn set_like(
        &self,
        recipe_id: Uuid,
        user_id: &UserId,
        liked: bool,
    ) -> Result<(), RepositoryError>;
}
