use async_trait::async_trait;

use crate::domain::food::errors::FoodError;
use crate::domain::food::model::Food;
use crate::domain::food::value_objects::Category;

pub struct GetAllFoodsParams {
    pub category: Option<Category>,
}

#[async_trait]
pub trait GetAllFoodsUseCase: Send + Sync {
    async fn execute(&self, params: GetAllFoodsParams) -> Result<Vec<Food>, FoodError>;
}
