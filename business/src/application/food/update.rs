use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::food::errors::FoodError;
use crate::domain::food::model::{Food, validate_image_url};
use crate::domain::food::policy::CatalogPolicy;
use crate::domain::food::repository::FoodRepository;
use crate::domain::food::use_cases::update::{UpdateFoodParams, UpdateFoodUseCase};
use crate::domain::logger::Logger;
use crate::domain::shared::value_objects::Price;

pub struct UpdateFoodUseCaseImpl {
    pub repository: Arc<dyn FoodRepository>,
    pub policy: CatalogPolicy,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateFoodUseCase for UpdateFoodUseCaseImpl {
    async fn execute(&self, params: UpdateFoodParams) -> Result<Food, FoodError> {
        self.logger.info(&format!("Updating food: {}", params.id));

        let existing = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => FoodError::NotFound,
                other => FoodError::Repository(other),
            })?;

        let name = match params.name {
            Some(ref n) if n.trim().is_empty() => return Err(FoodError::NameEmpty),
            Some(n) => n,
            None => existing.name,
        };
        let description = match params.description {
            Some(ref d) if d.trim().is_empty() => return Err(FoodError::DescriptionEmpty),
            Some(d) => d,
            None => existing.description,
        };
        let price = match params.price {
            Some(p) => Price::from_minor_units(p).map_err(|_| FoodError::PriceNegative)?,
            None => existing.price,
        };
        let category = params.category.unwrap_or(existing.category);
        let kind = match params.kind {
            Some(ref k) if k.trim().is_empty() => return Err(FoodError::KindEmpty),
            Some(k) => k,
            None => existing.kind,
        };
        let cuisine = match params.cuisine {
            Some(ref c) if c.trim().is_empty() => return Err(FoodError::CuisineEmpty),
            Some(c) => c,
            None => existing.cuisine,
        };
        let image = match params.image {
            Some(i) => {
                validate_image_url(&i)?;
                i
            }
            None => existing.image,
        };

        let updated = Food::from_repository(
            existing.id,
            name,
            description,
            price,
            category,
            kind,
            cuisine,
            image,
            existing.created_at,
            chrono::Utc::now(),
        );
        self.policy.check(&updated)?;

        self.repository.save(&updated).await?;

        self.logger.info(&format!("Food updated: {}", updated.id));
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::food::value_objects::Category;
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

    fn existing_food(id: Uuid) -> Food {
        let now = Utc::now();
        Food::from_repository(
            id,
            "Dal Rice".to_string(),
            "Freshly cooked dal with steamed rice".to_string(),
            Price::new(12000),
            Category::Lunch,
            "main dish".to_string(),
            "Indian".to_string(),
            "https://example.com/images/dal-rice.jpg".to_string(),
            now,
            now,
        )
    }

    fn empty_params(id: Uuid) -> UpdateFoodParams {
        UpdateFoodParams {
            id,
            name: None,
            description: None,
            price: None,
            category: None,
            kind: None,
            cuisine: None,
            image: None,
        }
    }

    #[tokio::test]
    async fn should_update_provided_fields_only() {
        let food_id = Uuid::new_v4();
        let mut mock_repo = MockFoodRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(move |id| Ok(existing_food(id)));
        mock_repo.expect_save().returning(|_| Ok(()));

        let use_case = UpdateFoodUseCaseImpl {
            repository: Arc::new(mock_repo),
            policy: CatalogPolicy::default(),
            logger: mock_logger(),
        };

        let mut params = empty_params(food_id);
        params.name = Some("Dal Tadka Rice".to_string());
        params.price = Some(13000);
        let result = use_case.execute(params).await;

        assert!(result.is_ok());
        let food = result.unwrap();
        assert_eq!(food.name, "Dal Tadka Rice");
        assert_eq!(food.price.minor_units(), 13000);
        // Untouched fields keep their current values.
        assert_eq!(food.description, "Freshly cooked dal with steamed rice");
        assert_eq!(food.category, Category::Lunch);
    }

    #[tokio::test]
    async fn should_keep_everything_when_body_empty() {
        let food_id = Uuid::new_v4();
        let mut mock_repo = MockFoodRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(move |id| Ok(existing_food(id)));
        mock_repo.expect_save().returning(|_| Ok(()));

        let use_case = UpdateFoodUseCaseImpl {
            repository: Arc::new(mock_repo),
            policy: CatalogPolicy::default(),
            logger: mock_logger(),
        };

        let result = use_case.execute(empty_params(food_id)).await;

        assert!(result.is_ok());
        let food = result.unwrap();
        assert_eq!(food.name, "Dal Rice");
        assert_eq!(food.price.minor_units(), 12000);
    }

    #[tokio::test]
    async fn should_return_not_found_when_updating_nonexistent_food() {
        let mut mock_repo = MockFoodRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = UpdateFoodUseCaseImpl {
            repository: Arc::new(mock_repo),
            policy: CatalogPolicy::default(),
            logger: mock_logger(),
        };

        let result = use_case.execute(empty_params(Uuid::new_v4())).await;

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), FoodError::NotFound));
    }

    #[tokio::test]
    async fn should_reject_update_when_name_blank() {
        let food_id = Uuid::new_v4();
        let mut mock_repo = MockFoodRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(move |id| Ok(existing_food(id)));

        let use_case = UpdateFoodUseCaseImpl {
            repository: Arc::new(mock_repo),
            policy: CatalogPolicy::default(),
            logger: mock_logger(),
        };

        let mut params = empty_params(food_id);
        params.name = Some("  ".to_string());
        let result = use_case.execute(params).await;

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), FoodError::NameEmpty));
    }

    #[tokio::test]
    async fn should_reject_update_when_price_negative() {
        let food_id = Uuid::new_v4();
        let mut mock_repo = MockFoodRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(move |id| Ok(existing_food(id)));

        let use_case = UpdateFoodUseCaseImpl {
            repository: Arc::new(mock_repo),
            policy: CatalogPolicy::default(),
            logger: mock_logger(),
        };

        let mut params = empty_params(food_id);
        params.price = Some(-500);
        let result = use_case.execute(params).await;

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), FoodError::PriceNegative));
    }

    #[tokio::test]
    async fn should_reject_update_when_image_invalid() {
        let food_id = Uuid::new_v4();
        let mut mock_repo = MockFoodRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(move |id| Ok(existing_food(id)));

        let use_case = UpdateFoodUseCaseImpl {
            repository: Arc::new(mock_repo),
            policy: CatalogPolicy::default(),
            logger: mock_logger(),
        };

        let mut params = empty_params(food_id);
        params.image = Some("dal-rice.jpg".to_string());
        let result = use_case.execute(params).await;

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), FoodError::ImageUrlInvalid));
    }
}
