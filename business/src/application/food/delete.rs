use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::food::errors::FoodError;
use crate::domain::food::repository::FoodRepository;
use crate::domain::food::use_cases::delete::{DeleteFoodParams, DeleteFoodUseCase};
use crate::domain::logger::Logger;

pub struct DeleteFoodUseCaseImpl {
    pub repository: Arc<dyn FoodRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteFoodUseCase for DeleteFoodUseCaseImpl {
    async fn execute(&self, params: DeleteFoodParams) -> Result<(), FoodError> {
        self.logger.info(&format!("Deleting food: {}", params.id));

        // Verify the food exists so a missing id maps to NotFound
        self.repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => FoodError::NotFound,
                other => FoodError::Repository(other),
            })?;

        self.repository.delete(params.id).await?;

        self.logger.info(&format!("Food deleted: {}", params.id));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::food::model::Food;
    use crate::domain::food::value_objects::Category;
    use crate::domain::shared::value_objects::Price;
    use chrono::Utc;
    use mockall::mock;
    use uuid::Uuid;

    mock! {
        pub FoodRepo {}

        #[async_trait]
        impl FoodRepository for FoodRepo {
            async fn get_all(&self) -> Result<Vec<Food>, RepositoryError>;
            async fn get_by_category(&self, category: Category) -> Result<Vec<Food>, RepositoryError>;
            async fn get_by_id(&self, id: Uuid) -> Result<Food, RepositoryError>;
            async fn save(&self, food: &Food) -> Result<(), RepositoryError>;
            async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
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

    #[tokio::test]
    async fn should_delete_food_when_exists() {
        let food_id = Uuid::new_v4();
        let now = Utc::now();
        let mut mock_repo = MockFoodRepo::new();

        mock_repo.expect_get_by_id().returning(move |id| {
            Ok(Food::from_repository(
                id,
                "Roti Sabzi".to_string(),
                "Fresh rotis with mixed vegetable curry".to_string(),
                Price::new(10000),
                Category::Dinner,
                "main dish".to_string(),
                "Indian".to_string(),
                "https://example.com/images/roti-sabzi.jpg".to_string(),
                now,
                now,
            ))
        });
        mock_repo.expect_delete().returning(|_| Ok(()));

        let use_case = DeleteFoodUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(DeleteFoodParams { id: food_id }).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_return_not_found_when_deleting_nonexistent_food() {
        let mut mock_repo = MockFoodRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));
        mock_repo.expect_delete().never();

        let use_case = DeleteFoodUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteFoodParams { id: Uuid::new_v4() })
            .await;

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), FoodError::NotFound));
    }
}
