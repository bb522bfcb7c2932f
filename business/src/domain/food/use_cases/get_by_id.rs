use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::food::errors::FoodError;
use crate::domain::food::model::Food;

pub struct GetFoodByIdParams {
    pub id: Uuid,
}

#[async_trait]
pub trait GetFoodByIdUseCase: Send + Sync {
    async fn execute(&self, params: GetFoodByIdParams) -> Result<Food, FoodError>;
}
