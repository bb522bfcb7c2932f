use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::model::Food;
use super::value_objects::Category;

#[async_trait]
pub trait FoodRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Food>, RepositoryError>;
    async fn get_by_category(&self, category: Category) -> Result<Vec<Food>, RepositoryError>;
    async fn get_by_id(&self, id: Uuid) -> Result<Food, RepositoryError>;
    async fn save(&self, food: &Food) -> Result<(), RepositoryError>;
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}
