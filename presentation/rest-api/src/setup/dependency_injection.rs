use std::sync::Arc;

use auth::{Argon2PasswordHasher, JwtTokenService};
use logger::TracingLogger;
use persistence::item::repository::ItemRepositoryPostgres;
use persistence::recipe::repository::RecipeRepositoryPostgres;
use persistence::social::repository::RecipeSocialRepositoryPostgres;
use persistence::user::repository::UserRepositoryPostgres;

use business::application::item::delete::DeleteItemUseCaseImpl;
use business::application::item::get_all::GetAllItemsUseCaseImpl;
use business::application::item::get_by_id::GetItemByIdUseCaseImpl;
use business::application::item::save::SaveItemUseCaseImpl;
use business::application::recipe::accept_share::AcceptShareUseCaseImpl;
use business::application::recipe::delete::DeleteRecipeUseCaseImpl;
use business::application::recipe::get_all::GetAllRecipesUseCaseImpl;
use business::application::recipe::get_by_id::GetRecipeByIdUseCaseImpl;
use business::application::recipe::list_shared::ListSharedRecipesUseCaseImpl;
use business::application::recipe::save::SaveRecipeUseCaseImpl;
use business::application::recipe::set_like::SetRecipeLikeUseCaseImpl;
use business::application::recipe::share::ShareRecipeUseCaseImpl;
use business::application::user::get_current::GetCurrentUserUseCaseImpl;
use business::application::user::sign_in::SignInUseCaseImpl;
use business::application::user::sign_out::SignOutUseCaseImpl;
use business::application::user::sign_up::SignUpUseCaseImpl;

use crate::api::health::routes::HealthApi;
use crate::api::item::routes::ItemApi;
use crate::api::recipe::routes::{RecipeApi, RecipeUseCases};
use crate::api::security::SessionResolver;
use crate::api::session::routes::SessionApi;
use crate::api::user::routes::UserApi;
use crate::config::auth_config::AuthConfig;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub user_api: UserApi,
    pub session_api: SessionApi,
    pub item_api: ItemApi,
    pub recipe_api: RecipeApi,
}

impl DependencyContainer {
    pub fn new(pool: sqlx::PgPool, auth: AuthConfig) -> Self {
        let logger = Arc::new(TracingLogger);

        // Infrastructure adapters
        let item_repository = Arc::new(ItemRepositoryPostgres::new(pool.clone()));
        let recipe_repository = Arc::new(RecipeRepositoryPostgres::new(pool.clone()));
        let social_repository = Arc::new(RecipeSocialRepositoryPostgres::new(pool.clone()));
        let user_repository = Arc::new(UserRepositoryPostgres::new(pool));

        let password_hasher = Arc::new(Argon2PasswordHasher::new());
        let token_service = Arc::new(JwtTokenService::new(auth.jwt));
        let sessions = Arc::new(SessionResolver::new(
            token_service.clone(),
            auth.secure_cookies,
        ));

        // User use cases
        let sign_up_use_case = Arc::new(SignUpUseCaseImpl {
            repository: user_repository.clone(),
            password_hasher: password_hasher.clone(),
            logger: logger.clone(),
        });
        let sign_in_use_case = Arc::new(SignInUseCaseImpl {
            repository: user_repository.clone(),
            password_hasher,
            token_service,
            logger: logger.clone(),
        });
        let sign_out_use_case = Arc::new(SignOutUseCaseImpl {
            logger: logger.clone(),
        });
        let get_current_user_use_case = Arc::new(GetCurrentUserUseCaseImpl {
            repository: user_repository.clone(),
            logger: logger.clone(),
        });

        // Item use cases
        let save_item_use_case = Arc::new(SaveItemUseCaseImpl {
            repository: item_repository.clone(),
            logger: logger.clone(),
        });
        let get_all_items_use_case = Arc::new(GetAllItemsUseCaseImpl {
            repository: item_repository.clone(),
            logger: logger.clone(),
        });
        let get_item_by_id_use_case = Arc::new(GetItemByIdUseCaseImpl {
            repository: item_repository.clone(),
            logger: logger.clone(),
        });
        let delete_item_use_case = Arc::new(DeleteItemUseCaseImpl {
            repository: item_repository.clone(),
            logger: logger.clone(),
        });

        // Recipe use cases
        let recipe_use_cases = RecipeUseCases {
            save: Arc::new(SaveRecipeUseCaseImpl {
                recipe_repository: recipe_repository.clone(),
                item_repository,
                logger: logger.clone(),
            }),
            get_all: Arc::new(GetAllRecipesUseCaseImpl {
                repository: recipe_repository.clone(),
                logger: logger.clone(),
            }),
            get_by_id: Arc::new(GetRecipeByIdUseCaseImpl {
                repository: recipe_repository.clone(),
                logger: logger.clone(),
            }),
            delete: Arc::new(DeleteRecipeUseCaseImpl {
                repository: recipe_repository.clone(),
                logger: logger.clone(),
            }),
            share: Arc::new(ShareRecipeUseCaseImpl {
                recipe_repository: recipe_repository.clone(),
                social_repository: social_repository.clone(),
                user_repository,
                logger: logger.clone(),
            }),
            accept_share: Arc::new(AcceptShareUseCaseImpl {
                social_repository: social_repository.clone(),
                logger: logger.clone(),
            }),
            list_shared: Arc::new(ListSharedRecipesUseCaseImpl {
                repository: recipe_repository.clone(),
                logger: logger.clone(),
            }),
            set_like: Arc::new(SetRecipeLikeUseCaseImpl {
                recipe_repository,
                social_repository,
                logger,
            }),
        };

        Self {
            health_api: HealthApi,
            user_api: UserApi::new(
                sessions.clone(),
                sign_up_use_case,
                sign_in_use_case,
                sign_out_use_case,
            ),
            session_api: SessionApi::new(sessions.clone(), get_current_user_use_case),
            item_api: ItemApi::new(
                sessions.clone(),
                save_item_use_case,
                get_all_items_use_case,
                get_item_by_id_use_case,
                delete_item_use_case,
            ),
            recipe_api: RecipeApi::new(sessions, recipe_use_cases),
        }
    }
}
