use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::food::errors::FoodError;
use crate::domain::food::model::Food;
use crate::domain::food::repository::FoodRepository;
use crate::domain::food::use_cases::get_by_id::{GetFoodByIdParams, GetFoodByIdUseCase};
use crate::domain::logger::Logger;

pub struct GetFoodByIdUseCaseImpl {
    pub repository: Arc<dyn FoodRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetFoodByIdUseCase for GetFoodByIdUseCaseImpl {
    async fn execute(&self, params: GetFoodByIdParams) -> Result<Food, FoodError> {
        self.logger.info(&format!("Fetching food: {}", params.id));

        let food = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => FoodError::NotFound,
                other => FoodError::Repository(other),
            })?;

        Ok(food)
    }
}
