use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::item::errors::ItemError;
use crate::domain::item::model::Item;
use crate::domain::item::repository::ItemRepository;
use crate::domain::item::use_cases::get_all::{GetAllItemsParams, GetAllItemsUseCase};
use crate::domain::logger::Logger;

pub struct GetAllItemsUseCaseImpl {
    pub repository: Arc<dyn ItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllItemsUseCase for GetAllItemsUseCaseImpl {
    async fn execute(&self, params: GetAllItemsParams) -> Result<Vec<Item>, ItemError> {
        let scope = params.session.scope()?;
        self.logger.info("Getting all items");
        let items = self.repository.list_visible(&scope).await?;
        self.logger
            .info(&format!("Retrieved {} items", items.len()));
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::item::model::ItemDetails;
    use crate::domain::shared::scope::OwnerScope;
    use crate::domain::shared::session::Session;
    use crate::domain::shared::value_objects::UserId;
    use bigdecimal::BigDecimal;
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

    fn item(owner: UserId, name: &str) -> Item {
        Item::new(
            owner,
            ItemDetails {
                name: name.to_string(),
                base_amount: 1,
                amount_kind: "un".to_string(),
                price: BigDecimal::from(2),
            },
        )
        .unwrap()
    }

    #[tokio::test]
    async fn should_return_visible_items_of_caller() {
        let user_id = UserId::generate();
        let mut mock_repo = MockItemRepo::new();
        mock_repo
            .expect_list_visible()
            .withf(move |scope| scope.user_id() == &user_id)
            .returning(move |scope| {
                Ok(vec![
                    item(*scope.user_id(), "Butter"),
                    item(*scope.user_id(), "Eggs"),
                ])
            });

        let use_case = GetAllItemsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetAllItemsParams {
                session: Session::authenticated(user_id),
            })
            .await;

        assert_eq!(result.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn should_reject_anonymous_caller() {
        let mut mock_repo = MockItemRepo::new();
        mock_repo.expect_list_visible().never();

        let use_case = GetAllItemsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetAllItemsParams {
                session: Session::anonymous(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), ItemError::Unauthorized(_)));
    }
}
