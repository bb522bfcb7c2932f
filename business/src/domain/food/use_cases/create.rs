use async_trait::async_trait;

use crate::domain::food::errors::FoodError;
use crate::domain::food::model::Food;
use crate::domain::food::value_objects::Category;

pub struct CreateFoodParams {
    pub name: String,
    pub description: String,
    pub price: i64,
    pub category: Category,
    pub kind: Option<String>,
    pub cuisine: Option<String>,
    pub image: String,
}

#[async_trait]
pub trait CreateFoodUseCase: Send + Sync {
    async fn execute(&self, params: CreateFoodParams) -> Result<Food, FoodError>;
}
