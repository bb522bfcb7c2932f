use std::sync::Arc;

use logger::TracingLogger;
use persistence::food::repository::FoodRepositoryPostgres;

use business::application::food::create::CreateFoodUseCaseImpl;
use business::application::food::delete::DeleteFoodUseCaseImpl;
use business::application::food::get_all::GetAllFoodsUseCaseImpl;
use business::application::food::get_by_id::GetFoodByIdUseCaseImpl;
use business::application::food::update::UpdateFoodUseCaseImpl;
use business::domain::food::policy::CatalogPolicy;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub food_api: crate::api::food::routes::FoodApi,
}

impl DependencyContainer {
    pub fn new(pool: sqlx::PgPool, policy: CatalogPolicy) -> Self {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters
        let food_repository = Arc::new(FoodRepositoryPostgres::new(pool));

        // Catalog use cases
        let create_use_case = Arc::new(CreateFoodUseCaseImpl {
            repository: food_repository.clone(),
            policy: policy.clone(),
            logger: logger.clone(),
        });
        let get_all_use_case = Arc::new(GetAllFoodsUseCaseImpl {
            repository: food_repository.clone(),
            logger: logger.clone(),
        });
        let get_by_id_use_case = Arc::new(GetFoodByIdUseCaseImpl {
            repository: food_repository.clone(),
            logger: logger.clone(),
        });
        let update_use_case = Arc::new(UpdateFoodUseCaseImpl {
            repository: food_repository.clone(),
            policy,
            logger: logger.clone(),
        });
        let delete_use_case = Arc::new(DeleteFoodUseCaseImpl {
            repository: food_repository,
            logger,
        });

        let food_api = crate::api::food::routes::FoodApi::new(
            create_use_case,
            get_all_use_case,
            get_by_id_use_case,
            update_use_case,
            delete_use_case,
        );

        Self {
            health_api,
            food_api,
        }
    }
}
