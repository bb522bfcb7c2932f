use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::food::errors::FoodError;
use crate::domain::food::model::{Food, NewFoodProps};
use crate::domain::food::policy::CatalogPolicy;
use crate::domain::food::repository::FoodRepository;
use crate::domain::food::use_cases::create::{CreateFoodParams, CreateFoodUseCase};
use crate::domain::logger::Logger;

pub struct CreateFoodUseCaseImpl {
    pub repository: Arc<dyn FoodRepository>,
    pub policy: CatalogPolicy,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateFoodUseCase for CreateFoodUseCaseImpl {
    async fn execute(&self, params: CreateFoodParams) -> Result<Food, FoodError> {
        self.logger.info(&format!("Creating food: {}", params.name));

        let food = Food::new(NewFoodProps {
            name: params.name,
            description: params.description,
            price: params.price,
            category: params.category,
            kind: params.kind,
            cuisine: params.cuisine,
            image: params.image,
        })?;
        self.policy.check(&food)?;

        self.repository.save(&food).await?;

        self.logger.info(&format!("Food created with id: {}", food.id));
        Ok(food)
    }
}
