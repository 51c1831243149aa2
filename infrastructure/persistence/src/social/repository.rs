use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::recipe::social::{RecipeShare, RecipeSocialRepository};
use business::domain::shared::value_objects::UserId;

use super::entity::RecipeShareEntity;
use crate::db::map_sqlx_error;

pub struct RecipeSocialRepositoryPostgres {
    pool: PgPool,
}

impl RecipeSocialRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecipeSocialRepository for RecipeSocialRepositoryPostgres {
    async fn find_share(
        &self,
        recipe_id: Uuid,
        user_id: &UserId,
    ) -> Result<Option<RecipeShare>, RepositoryError> {
        let entity = sqlx::query_as::<_, RecipeShareEntity>(
            "SELECT recipe_id, user_id, status FROM recipe_shares WHERE recipe_id = $1 AND user_id = $2",
        )
        .bind(recipe_id)
        .bind(user_id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(entity.map(|e| e.into_domain()))
    }

    async fn has_accepted_visible_share(
        &self,
        recipe_id: Uuid,
        user_id: &UserId,
    ) -> Result<bool, RepositoryError> {
        sqlx::query_scalar::<_, bool>(
            r#"SELECT EXISTS (
                SELECT 1 FROM recipe_shares s
                JOIN recipes r ON r.id = s.recipe_id
                WHERE s.recipe_id = $1 AND s.user_id = $2
                    AND s.status = 'accepted' AND r.state = 'visible'
            )"#,
        )
        .bind(recipe_id)
        .bind(user_id.as_uuid())
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)
    }

    async fn save_share(&self, share: &RecipeShare) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO recipe_shares (recipe_id, user_id, status)
            VALUES ($1, $2, $3)
            ON CONFLICT (recipe_id, user_id) DO UPDATE SET status = EXCLUDED.status"#,
        )
        .bind(share.recipe_id)
        .bind(share.user_id.as_uuid())
        .bind(share.status.to_string())
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(())
    }

    async fn set_like(
        &self,
        recipe_id: Uuid,
        user_id: &UserId,
        liked: bool,
    ) -> Result<(), RepositoryError> {
        let query = if liked {
            "INSERT INTO recipe_likes (recipe_id, user_id) VALUES ($1, $2) ON CONFLICT DO NOTHING"
        } else {
            "DELETE FROM recipe_likes WHERE recipe_id = $1 AND user_id = $2"
        };

        sqlx::query(query)
            .bind(recipe_id)
            .bind(user_id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(())
    }
}
