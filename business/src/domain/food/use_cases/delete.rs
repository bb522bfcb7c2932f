use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::food::errors::FoodError;

pub struct DeleteFoodParams {
    pub id: Uuid,
}

#[async_trait]
pub trait DeleteFoodUseCase: Send + Sync {
    async fn execute(&self, params: DeleteFoodParams) -> Result<(), FoodError>;
}
