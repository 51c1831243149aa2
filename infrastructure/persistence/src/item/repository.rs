use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::item::model::Item;
use business::domain::item::repository::ItemRepository;
use business::domain::shared::scope::OwnerScope;

use super::entity::{ITEM_COLUMNS, ItemEntity};
use crate::db::map_sqlx_error;

pub struct ItemRepositoryPostgres {
    pool: PgPool,
}

impl ItemRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ItemRepository for ItemRepositoryPostgres {
    async fn list_visible(&self, scope: &OwnerScope) -> Result<Vec<Item>, RepositoryError> {
        let entities = sqlx::query_as::<_, ItemEntity>(&format!(
            "SELECT {ITEM_COLUMNS} FROM items WHERE user_id = $1 AND state = 'visible' ORDER BY name ASC"
        ))
        .bind(scope.user_id().as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_by_id(&self, id: Uuid, scope: &OwnerScope) -> Result<Item, RepositoryError> {
        let entity = sqlx::query_as::<_, ItemEntity>(&format!(
            "SELECT {ITEM_COLUMNS} FROM items WHERE id = $1 AND user_id = $2"
        ))
        .bind(id)
        .bind(scope.user_id().as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn find_by_ids(
        &self,
        ids: &[Uuid],
        scope: &OwnerScope,
    ) -> Result<Vec<Item>, RepositoryError> {
        let entities = sqlx::query_as::<_, ItemEntity>(&format!(
            "SELECT {ITEM_COLUMNS} FROM items WHERE user_id = $1 AND id = ANY($2)"
        ))
        .bind(scope.user_id().as_uuid())
        .bind(ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn save(&self, item: &Item) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r#"INSERT INTO items (id, user_id, name, base_amount, amount_kind, price, state, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name,
                base_amount = EXCLUDED.base_amount,
                amount_kind = EXCLUDED.amount_kind,
                price = EXCLUDED.price,
                state = EXCLUDED.state,
                updated_at = EXCLUDED.updated_at
            WHERE items.user_id = EXCLUDED.user_id"#,
        )
        .bind(item.id)
        .bind(item.user_id.as_uuid())
        .bind(&item.name)
        .bind(item.base_amount)
        .bind(&item.amount_kind)
        .bind(&item.price)
        .bind(item.state.to_string())
        .bind(item.created_at)
        .bind(item.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        // An id owned by someone else leaves the row untouched
        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn is_referenced(&self, id: Uuid, scope: &OwnerScope) -> Result<bool, RepositoryError> {
        sqlx::query_scalar::<_, bool>(
            r#"SELECT EXISTS (
                SELECT 1 FROM recipe_items ri
                JOIN items i ON i.id = ri.item_id
                WHERE ri.item_id = $1 AND i.user_id = $2
            )"#,
        )
        .bind(id)
        .bind(scope.user_id().as_uuid())
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)
    }
}
