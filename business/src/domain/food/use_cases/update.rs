use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::food::errors::FoodError;
use crate::domain::food::model::Food;
use crate::domain::food::value_objects::Category;

/// Partial update: absent fields keep their current values.
pub struct UpdateFoodParams {
    pub id: Uuid,
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<i64>,
    pub category: Option<Category>,
    pub kind: Option<String>,
    pub cuisine: Option<String>,
    pub image: Option<String>,
}

#[async_trait]
pub trait UpdateFoodUseCase: Send + Sync {
    async fn execute(&self, params: UpdateFoodParams) -> Result<Food, FoodError>;
}
