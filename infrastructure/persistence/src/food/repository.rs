use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::food::model::Food;
use business::domain::food::repository::FoodRepository;
use business::domain::food::value_objects::Category;

use super::entity::FoodEntity;

pub struct FoodRepositoryPostgres {
    pool: PgPool,
}

impl FoodRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FoodRepository for FoodRepositoryPostgres {
    async fn get_all(&self) -> Result<Vec<Food>, RepositoryError> {
        let entities = sqlx::query_as::<_, FoodEntity>(
            "SELECT id, name, description, price, category, kind, cuisine, image, created_at, updated_at FROM foods ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_by_category(&self, category: Category) -> Result<Vec<Food>, RepositoryError> {
        let entities = sqlx::query_as::<_, FoodEntity>(
            "SELECT id, name, description, price, category, kind, cuisine, image, created_at, updated_at FROM foods WHERE category = $1 ORDER BY created_at DESC",
        )
        .bind(category.to_string())
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Food, RepositoryError> {
        let entity = sqlx::query_as::<_, FoodEntity>(
            "SELECT id, name, description, price, category, kind, cuisine, image, created_at, updated_at FROM foods WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn save(&self, food: &Food) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO foods (id, name, description, price, category, kind, cuisine, image, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name,
                description = EXCLUDED.description,
                price = EXCLUDED.price,
                category = EXCLUDED.category,
                kind = EXCLUDED.kind,
                cuisine = EXCLUDED.cuisine,
                image = EXCLUDED.image,
                updated_at = EXCLUDED.updated_at"#,
        )
        .bind(food.id)
        .bind(&food.name)
        .bind(&food.description)
        .bind(food.price.minor_units() as i64)
        .bind(food.category.to_string())
        .bind(&food.kind)
        .bind(&food.cuisine)
        .bind(&food.image)
        .bind(food.created_at)
        .bind(food.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM foods WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }
}
