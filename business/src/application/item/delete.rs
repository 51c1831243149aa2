use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::item::errors::ItemError;
use crate::domain::item::repository::ItemRepository;
use crate::domain::item::use_cases::delete::{DeleteItemParams, DeleteItemUseCase};
use crate::domain::logger::Logger;

/// Archives an item unless a recipe still references it.
pub struct DeleteItemUseCaseImpl {
    pub repository: Arc<dyn ItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteItemUseCase for DeleteItemUseCaseImpl {
    async fn execute(&self, params: DeleteItemParams) -> Result<(), ItemError> {
        let scope = params.session.scope()?;
        self.logger.info(&format!("Deleting item: {}", params.id));

        let mut item = self
            .repository
            .get_by_id(params.id, &scope)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ItemError::NotFound,
                other => ItemError::Repository(other),
            })?;

        if self.repository.is_referenced(item.id, &scope).await? {
            self.logger
                .warn(&format!("Item {} is used by a recipe, refusing delete", item.id));
            return Err(ItemError::InUse);
        }

        item.archive();
        self.repository.save(&item).await?;

        self.logger.info(&format!("Item archived: {}", item.id));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::item::model::Item;
    use crate::domain::shared::scope::OwnerScope;
    use crate::domain::shared::session::Session;
    use crate::domain::shared::value_objects::{EntityState, UserId};
    use bigdecimal::BigDecimal;
    use chrono::Utc;
    use mockall::mock;
    use uuid::Uuid;

    mock! {
        pub ItemRepo {}

        #[async_trait]
        impl ItemRepository for ItemRepo {
            async fn list_visible(&self, scope: &OwnerScope) -> Result<Vec<Item>, RepositoryError>;
            async fn get_by_id(&self, id: Uuid, scope: &OwnerScope) -> Result<Item, RepositoryError>;
            async fn find_by_ids(&self, ids: &[Uuid], scope: &OwnerScope) -> Result<Vec<Item>, RepositoryError>;
            async fn save(&self, item: &Item) -> Result<(), RepositoryError>;
            async fn is_referenced(&self, id: Uuid, scope: &OwnerScope) -> Result<bool, RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn stored_item(id: Uuid, owner: UserId) -> Item {
        Item::from_repository(
            id,
            owner,
            "Tomato Sauce".to_string(),
            350,
            "g".to_string(),
            BigDecimal::from(3),
            EntityState::Visible,
            Utc::now(),
            Utc::now(),
        )
    }

    #[tokio::test]
    async fn should_archive_item_when_unused() {
        let user_id = UserId::generate();
        let item_id = Uuid::new_v4();
        let mut mock_repo = MockItemRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(move |id, _| Ok(stored_item(id, user_id)));
        mock_repo.expect_is_referenced().returning(|_, _| Ok(false));
        mock_repo
            .expect_save()
            .withf(|item| item.state == EntityState::Archived)
            .times(1)
            .returning(|_| Ok(()));

        let use_case = DeleteItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteItemParams {
                session: Session::authenticated(user_id),
                id: item_id,
            })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_return_conflict_and_keep_state_when_item_in_use() {
        let user_id = UserId::generate();
        let mut mock_repo = MockItemRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(move |id, _| Ok(stored_item(id, user_id)));
        mock_repo.expect_is_referenced().returning(|_, _| Ok(true));
        mock_repo.expect_save().never();

        let use_case = DeleteItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteItemParams {
                session: Session::authenticated(user_id),
                id: Uuid::new_v4(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), ItemError::InUse));
    }

    #[tokio::test]
    async fn should_return_not_found_when_deleting_item_from_other_user() {
        let mut mock_repo = MockItemRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_, _| Err(RepositoryError::NotFound));
        mock_repo.expect_is_referenced().never();

        let use_case = DeleteItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteItemParams {
                session: Session::authenticated(UserId::generate()),
                id: Uuid::new_v4(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), ItemError::NotFound));
    }

    #[tokio::test]
    async fn should_reject_anonymous_caller() {
        let mut mock_repo = MockItemRepo::new();
        mock_repo.expect_get_by_id().never();

        let use_case = DeleteItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteItemParams {
                session: Session::anonymous(),
                id: Uuid::new_v4(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), ItemError::Unauthorized(_)));
    }
}
