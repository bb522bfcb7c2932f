use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::food::errors::FoodError;
use crate::domain::food::model::Food;
use crate::domain::food::repository::FoodRepository;
use crate::domain::food::use_cases::get_all::{GetAllFoodsParams, GetAllFoodsUseCase};
use crate::domain::logger::Logger;

pub struct GetAllFoodsUseCaseImpl {
    pub repository: Arc<dyn FoodRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllFoodsUseCase for GetAllFoodsUseCaseImpl {
    async fn execute(&self, params: GetAllFoodsParams) -> Result<Vec<Food>, FoodError> {
        let foods = match params.category {
            Some(category) => {
                self.logger
                    .info(&format!("Fetching foods in category: {}", category));
                self.repository.get_by_category(category).await?
            }
            None => {
                self.logger.info("Fetching all foods");
                self.repository.get_all().await?
            }
        };

        self.logger.info(&format!("Found {} foods", foods.len()));
        Ok(foods)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
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

    fn sample_food(name: &str, category: Category) -> Food {
        let now = Utc::now();
        Food::from_repository(
            Uuid::new_v4(),
            name.to_string(),
            format!("{} description", name),
            Price::new(10000),
            category,
            "main dish".to_string(),
            "Indian".to_string(),
            "https://example.com/images/item.jpg".to_string(),
            now,
            now,
        )
    }

    #[tokio::test]
    async fn should_return_all_foods_when_no_category_given() {
        let mut mock_repo = MockFoodRepo::new();
        mock_repo.expect_get_all().returning(|| {
            Ok(vec![
                sample_food("Dal Rice", Category::Lunch),
                sample_food("Masala Dosa", Category::Breakfast),
            ])
        });
        mock_repo.expect_get_by_category().never();

        let use_case = GetAllFoodsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(GetAllFoodsParams { category: None }).await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn should_filter_by_category_when_given() {
        let mut mock_repo = MockFoodRepo::new();
        mock_repo
            .expect_get_by_category()
            .withf(|category| *category == Category::Breakfast)
            .returning(|_| Ok(vec![sample_food("Masala Dosa", Category::Breakfast)]));
        mock_repo.expect_get_all().never();

        let use_case = GetAllFoodsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetAllFoodsParams {
                category: Some(Category::Breakfast),
            })
            .await;

        assert!(result.is_ok());
        let foods = result.unwrap();
        assert_eq!(foods.len(), 1);
        assert_eq!(foods[0].name, "Masala Dosa");
    }

    #[tokio::test]
    async fn should_return_empty_list_when_catalog_empty() {
        let mut mock_repo = MockFoodRepo::new();
        mock_repo.expect_get_all().returning(|| Ok(vec![]));

        let use_case = GetAllFoodsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(GetAllFoodsParams { category: None }).await;

        assert!(result.is_ok());
        assert!(result.unwrap().is_empty());
    }
}
