use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::recipe::model::{Ingredient, Recipe, RecipeOverview, RecipeUpdate};
use business::domain::recipe::repository::RecipeRepository;
use business::domain::shared::scope::OwnerScope;

use super::entity::{IngredientEntity, RecipeEntity, RecipeItemEntity, RecipeSummaryEntity};
use crate::db::map_sqlx_error;

const SUMMARY_COLUMNS: &str = "r.id, r.user_id, r.name, r.created_at, r.updated_at, \
     (SELECT COUNT(*) FROM recipe_likes l WHERE l.recipe_id = r.id) AS like_count";

pub struct RecipeRepositoryPostgres {
    pool: PgPool,
}

impl RecipeRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Attaches ingredients to listing rows, keeping the listing order.
    async fn with_ingredients(
        &self,
        summaries: Vec<RecipeSummaryEntity>,
    ) -> Result<Vec<RecipeOverview>, RepositoryError> {
        if summaries.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<Uuid> = summaries.iter().map(|s| s.id).collect();
        let rows = sqlx::query_as::<_, IngredientEntity>(
            r#"SELECT ri.recipe_id, ri.amount,
                i.id, i.user_id, i.name, i.base_amount, i.amount_kind, i.price, i.state, i.created_at, i.updated_at
            FROM recipe_items ri
            JOIN items i ON i.id = ri.item_id
            WHERE ri.recipe_id = ANY($1)
            ORDER BY i.name ASC"#,
        )
        .bind(&ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        let mut by_recipe: HashMap<Uuid, Vec<Ingredient>> = HashMap::new();
        for row in rows {
            by_recipe
                .entry(row.recipe_id)
                .or_default()
                .push(row.into_domain());
        }

        Ok(summaries
            .into_iter()
            .map(|summary| {
                let ingredients = by_recipe.remove(&summary.id).unwrap_or_default();
                summary.into_domain(ingredients)
            })
            .collect())
    }
}

const RECIPE_BY_OWNER: &str = r#"SELECT id, user_id, name, state, created_at, updated_at
    FROM recipes
    WHERE id = $1 AND user_id = $2 AND state = 'visible'"#;

fn recipe_query(lock: bool) -> String {
    if lock {
        format!("{RECIPE_BY_OWNER} FOR UPDATE")
    } else {
        RECIPE_BY_OWNER.to_string()
    }
}

/// Reads a visible recipe of the scope owner with its item rows. With `lock`
/// the recipe row stays locked until the surrounding transaction ends.
async fn load_recipe(
    conn: &mut PgConnection,
    id: Uuid,
    scope: &OwnerScope,
    lock: bool,
) -> Result<Option<Recipe>, RepositoryError> {
    let query = recipe_query(lock);
    let Some(entity) = sqlx::query_as::<_, RecipeEntity>(&query)
        .bind(id)
        .bind(scope.user_id().as_uuid())
        .fetch_optional(&mut *conn)
        .await
        .map_err(map_sqlx_error)?
    else {
        return Ok(None);
    };

    let items = sqlx::query_as::<_, RecipeItemEntity>(
        "SELECT recipe_id, item_id, amount FROM recipe_items WHERE recipe_id = $1 ORDER BY item_id",
    )
    .bind(id)
    .fetch_all(&mut *conn)
    .await
    .map_err(map_sqlx_error)?;

    Ok(Some(entity.into_domain(items)))
}

async fn insert_item_row(
    conn: &mut PgConnection,
    recipe_id: Uuid,
    item_id: Uuid,
    amount: &bigdecimal::BigDecimal,
) -> Result<(), RepositoryError> {
    sqlx::query("INSERT INTO recipe_items (recipe_id, item_id, amount) VALUES ($1, $2, $3)")
        .bind(recipe_id)
        .bind(item_id)
        .bind(amount)
        .execute(&mut *conn)
        .await
        .map_err(map_sqlx_error)?;
    Ok(())
}

#[async_trait]
impl RecipeRepository for RecipeRepositoryPostgres {
    async fn list_visible(
        &self,
        scope: &OwnerScope,
    ) -> Result<Vec<RecipeOverview>, RepositoryError> {
        let summaries = sqlx::query_as::<_, RecipeSummaryEntity>(&format!(
            "SELECT {SUMMARY_COLUMNS} FROM recipes r \
             WHERE r.user_id = $1 AND r.state = 'visible' ORDER BY r.name ASC"
        ))
        .bind(scope.user_id().as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        self.with_ingredients(summaries).await
    }

    async fn list_shared_with(
        &self,
        scope: &OwnerScope,
    ) -> Result<Vec<RecipeOverview>, RepositoryError> {
        let summaries = sqlx::query_as::<_, RecipeSummaryEntity>(&format!(
            "SELECT {SUMMARY_COLUMNS} FROM recipes r \
             JOIN recipe_shares s ON s.recipe_id = r.id \
             WHERE s.user_id = $1 AND s.status = 'accepted' AND r.state = 'visible' \
             ORDER BY r.name ASC"
        ))
        .bind(scope.user_id().as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        self.with_ingredients(summaries).await
    }

    async fn find_with_items(
        &self,
        id: Uuid,
        scope: &OwnerScope,
    ) -> Result<Option<Recipe>, RepositoryError> {
        let mut conn = self.pool.acquire().await.map_err(map_sqlx_error)?;
        load_recipe(&mut conn, id, scope, false).await
    }

    async fn create(&self, recipe: &Recipe) -> Result<Recipe, RepositoryError> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx_error)?;

        sqlx::query(
            r#"INSERT INTO recipes (id, user_id, name, state, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)"#,
        )
        .bind(recipe.id)
        .bind(recipe.user_id.as_uuid())
        .bind(&recipe.name)
        .bind(recipe.state.to_string())
        .bind(recipe.created_at)
        .bind(recipe.updated_at)
        .execute(&mut *tx)
        .await
        .map_err(map_sqlx_error)?;

        for row in &recipe.items {
            insert_item_row(&mut tx, recipe.id, row.item_id, &row.amount).await?;
        }

        tx.commit().await.map_err(map_sqlx_error)?;
        Ok(recipe.clone())
    }

    async fn apply_changes(
        &self,
        update: &RecipeUpdate,
        scope: &OwnerScope,
    ) -> Result<Recipe, RepositoryError> {
        // Dropping `tx` on any early return rolls everything back
        let mut tx = self.pool.begin().await.map_err(map_sqlx_error)?;

        // Concurrent saves of the same recipe wait here for the previous commit
        let current = load_recipe(&mut tx, update.recipe_id, scope, true)
            .await?
            .ok_or(RepositoryError::NotFound)?;
        let diff = update.diff_against(&current);
        tracing::debug!(
            "Recipe {} diff: {} to create, {} to update, {} to delete",
            update.recipe_id,
            diff.to_create.len(),
            diff.to_update.len(),
            diff.to_delete.len()
        );

        sqlx::query("UPDATE recipes SET name = $1, updated_at = $2 WHERE id = $3")
            .bind(&update.name)
            .bind(update.updated_at)
            .bind(update.recipe_id)
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx_error)?;

        let removed: Vec<Uuid> = diff.to_delete.iter().map(|l| l.item_id).collect();
        if !removed.is_empty() {
            sqlx::query("DELETE FROM recipe_items WHERE recipe_id = $1 AND item_id = ANY($2)")
                .bind(update.recipe_id)
                .bind(&removed)
                .execute(&mut *tx)
                .await
                .map_err(map_sqlx_error)?;
        }

        for line in &diff.to_update {
            sqlx::query("UPDATE recipe_items SET amount = $1 WHERE recipe_id = $2 AND item_id = $3")
                .bind(&line.amount)
                .bind(update.recipe_id)
                .bind(line.item_id)
                .execute(&mut *tx)
                .await
                .map_err(map_sqlx_error)?;
        }

        for line in &diff.to_create {
            insert_item_row(&mut tx, update.recipe_id, line.item_id, &line.amount).await?;
        }

        let recipe = load_recipe(&mut tx, update.recipe_id, scope, false)
            .await?
            .ok_or(RepositoryError::NotFound)?;

        tx.commit().await.map_err(map_sqlx_error)?;
        Ok(recipe)
    }

    async fn archive(&self, id: Uuid, scope: &OwnerScope) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r#"UPDATE recipes SET state = 'archived', updated_at = NOW()
            WHERE id = $1 AND user_id = $2 AND state = 'visible'"#,
        )
        .bind(id)
        .bind(scope.user_id().as_uuid())
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
