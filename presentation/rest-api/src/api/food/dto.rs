use chrono::{DateTime, Utc};
use poem_openapi::{Enum, Object};
use serde::{Deserialize, Serialize};

use business::domain::food::model::Food;
use business::domain::food::value_objects::Category;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Enum)]
pub enum CategoryDto {
    #[oai(rename = "breakfast")]
    Breakfast,
    #[oai(rename = "lunch")]
    Lunch,
    #[oai(rename = "dinner")]
    Dinner,
}

impl From<Category> for CategoryDto {
    fn from(category: Category) -> Self {
        match category {
            Category::Breakfast => CategoryDto::Breakfast,
            Category::Lunch => CategoryDto::Lunch,
            Category::Dinner => CategoryDto::Dinner,
        }
    }
}

impl From<CategoryDto> for Category {
    fn from(dto: CategoryDto) -> Self {
        match dto {
            CategoryDto::Breakfast => Category::Breakfast,
            CategoryDto::Lunch => Category::Lunch,
            CategoryDto::Dinner => Category::Dinner,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CreateFoodRequest {
    /// Food name (cannot be empty)
    pub name: String,
    /// Food description (cannot be empty)
    pub description: String,
    /// Price in minor units (paise), non-negative
    pub price: i64,
    /// Meal category
    pub category: CategoryDto,
    /// Free-text classification, defaults to "main dish"
    #[oai(rename = "type", skip_serializing_if_is_none)]
    pub kind: Option<String>,
    /// Cuisine, defaults to "Indian"
    #[oai(skip_serializing_if_is_none)]
    pub cuisine: Option<String>,
    /// Absolute http(s) image URL
    pub image: String,
}

/// Partial update: omitted fields keep their current values.
#[derive(Debug, Clone, Object)]
pub struct UpdateFoodRequest {
    /// Food name (cannot be empty)
    #[oai(skip_serializing_if_is_none)]
    pub name: Option<String>,
    /// Food description (cannot be empty)
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    /// Price in minor units (paise), non-negative
    #[oai(skip_serializing_if_is_none)]
    pub price: Option<i64>,
    /// Meal category
    #[oai(skip_serializing_if_is_none)]
    pub category: Option<CategoryDto>,
    /// Free-text classification
    #[oai(rename = "type", skip_serializing_if_is_none)]
    pub kind: Option<String>,
    /// Cuisine
    #[oai(skip_serializing_if_is_none)]
    pub cuisine: Option<String>,
    /// Absolute http(s) image URL
    #[oai(skip_serializing_if_is_none)]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Object)]
pub struct FoodResponse {
    /// Food unique identifier
    pub id: String,
    /// Food name
    pub name: String,
    /// Food description
    pub description: String,
    /// Price in minor units (paise)
    pub price: u64,
    /// Meal category
    pub category: CategoryDto,
    /// Free-text classification
    #[oai(rename = "type")]
    pub kind: String,
    /// Cuisine
    pub cuisine: String,
    /// Image URL
    pub image: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl From<Food> for FoodResponse {
    fn from(food: Food) -> Self {
        Self {
            id: food.id.to_string(),
            name: food.name,
            description: food.description,
            price: food.price.minor_units(),
            category: food.category.into(),
            kind: food.kind,
            cuisine: food.cuisine,
            image: food.image,
            created_at: food.created_at,
            updated_at: food.updated_at,
        }
    }
}

/// Confirmation body for delete operations.
#[derive(Debug, Clone, Object)]
pub struct MessageResponse {
    pub message: String,
}
