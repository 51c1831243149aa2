use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::item::errors::ItemError;
use crate::domain::item::model::{Item, ItemDetails};
use crate::domain::item::repository::ItemRepository;
use crate::domain::item::use_cases::save::{SaveItemParams, SaveItemUseCase};
use crate::domain::logger::Logger;

pub struct SaveItemUseCaseImpl {
    pub repository: Arc<dyn ItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SaveItemUseCase for SaveItemUseCaseImpl {
    async fn execute(&self, params: SaveItemParams) -> Result<Item, ItemError> {
        let scope = params.session.scope()?;

        let details = ItemDetails {
            name: params.name,
            base_amount: params.base_amount,
            amount_kind: params.amount_kind,
            price: params.price,
        }
        .validated()?;

        let item = match params.id {
            None => {
                self.logger
                    .info(&format!("Creating item: {}", details.name));
                Item::new(*scope.user_id(), details)?
            }
            Some(id) => {
                self.logger.info(&format!("Updating item: {}", id));
                let mut existing = self
                    .repository
                    .get_by_id(id, &scope)
                    .await
                    .map_err(|e| match e {
                        RepositoryError::NotFound => ItemError::NotFound,
                        other => ItemError::Repository(other),
                    })?;
                existing.apply_details(details)?;
                existing
            }
        };

        self.repository.save(&item).await.map_err(|e| match e {
            RepositoryError::Duplicated => ItemError::NameTaken,
            other => ItemError::Repository(other),
        })?;

        self.logger.info(&format!("Item saved: {}", item.id));
        Ok(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::scope::OwnerScope;
    use crate::domain::shared::session::Session;
    use crate::domain::shared::value_objects::{EntityState, UserId};
    use bigdecimal::BigDecimal;
    use chrono::Utc;
    use mockall::mock;
    use std::str::FromStr;
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

    fn price(value: &str) -> BigDecimal {
        BigDecimal::from_str(value).unwrap()
    }

    fn params(session: Session, id: Option<Uuid>, name: &str) -> SaveItemParams {
        SaveItemParams {
            session,
            id,
            name: name.to_string(),
            base_amount: 500,
            amount_kind: "g".to_string(),
            price: price("3.49"),
        }
    }

    fn stored_item(id: Uuid, owner: UserId) -> Item {
        Item::from_repository(
            id,
            owner,
            "Rice".to_string(),
            1000,
            "g".to_string(),
            price("5.00"),
            EntityState::Visible,
            Utc::now(),
            Utc::now(),
        )
    }

    #[tokio::test]
    async fn should_create_item_owned_by_caller() {
        let user_id = UserId::generate();
        let mut mock_repo = MockItemRepo::new();
        mock_repo.expect_get_by_id().never();
        mock_repo
            .expect_save()
            .withf(move |item| item.user_id == user_id)
            .returning(|_| Ok(()));

        let use_case = SaveItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(params(Session::authenticated(user_id), None, "Basmati Rice"))
            .await;

        assert!(result.is_ok());
        let item = result.unwrap();
        assert_eq!(item.name, "Basmati Rice");
        assert_eq!(item.state, EntityState::Visible);
    }

    #[tokio::test]
    async fn should_update_existing_item_in_place() {
        let user_id = UserId::generate();
        let item_id = Uuid::new_v4();
        let mut mock_repo = MockItemRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(move |id, _| Ok(stored_item(id, user_id)));
        mock_repo.expect_save().returning(|_| Ok(()));

        let use_case = SaveItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(params(
                Session::authenticated(user_id),
                Some(item_id),
                "Brown Rice",
            ))
            .await;

        let item = result.unwrap();
        assert_eq!(item.id, item_id);
        assert_eq!(item.name, "Brown Rice");
        assert_eq!(item.base_amount, 500);
    }

    #[tokio::test]
    async fn should_reject_anonymous_caller() {
        let mock_repo = MockItemRepo::new();

        let use_case = SaveItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(params(Session::anonymous(), None, "Basmati Rice"))
            .await;

        assert!(matches!(result.unwrap_err(), ItemError::Unauthorized(_)));
    }

    #[tokio::test]
    async fn should_reject_invalid_details_before_touching_repository() {
        let mut mock_repo = MockItemRepo::new();
        mock_repo.expect_get_by_id().never();
        mock_repo.expect_save().never();

        let use_case = SaveItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(params(
                Session::authenticated(UserId::generate()),
                Some(Uuid::new_v4()),
                "ab",
            ))
            .await;

        assert!(matches!(result.unwrap_err(), ItemError::NameTooShort));
    }

    #[tokio::test]
    async fn should_return_not_found_when_updating_item_from_other_user() {
        let mut mock_repo = MockItemRepo::new();
        // Repository returns NotFound for items belonging to other users
        mock_repo
            .expect_get_by_id()
            .returning(|_, _| Err(RepositoryError::NotFound));
        mock_repo.expect_save().never();

        let use_case = SaveItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(params(
                Session::authenticated(UserId::generate()),
                Some(Uuid::new_v4()),
                "Brown Rice",
            ))
            .await;

        assert!(matches!(result.unwrap_err(), ItemError::NotFound));
    }

    #[tokio::test]
    async fn should_report_name_taken_on_duplicate() {
        let mut mock_repo = MockItemRepo::new();
        mock_repo
            .expect_save()
            .returning(|_| Err(RepositoryError::Duplicated));

        let use_case = SaveItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(params(
                Session::authenticated(UserId::generate()),
                None,
                "Basmati Rice",
            ))
            .await;

        assert!(matches!(result.unwrap_err(), ItemError::NameTaken));
    }
}
