use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::food::model::Food;
use business::domain::food::value_objects::Category;
use business::domain::shared::value_objects::Price;

/// Row shape of the `foods` table. Prices are stored as BIGINT minor units;
/// `kind` is the column name for the API-level `type` field.
#[derive(Debug, FromRow)]
pub struct FoodEntity {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price: i64,
    pub category: String,
    pub kind: String,
    pub cuisine: String,
    pub image: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl FoodEntity {
    pub fn into_domain(self) -> Food {
        Food::from_repository(
            self.id,
            self.name,
            self.description,
            Price::from_minor_units(self.price).unwrap_or(Price::ZERO),
            self.category
                .parse::<Category>()
                .unwrap_or(Category::Breakfast),
            self.kind,
            self.cuisine,
            self.image,
            self.created_at,
            self.updated_at,
        )
    }
}
