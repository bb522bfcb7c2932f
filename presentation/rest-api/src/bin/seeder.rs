use std::env;

use anyhow::Context;
use dotenvy::dotenv;

use business::domain::food::model::{Food, NewFoodProps};
use business::domain::food::repository::FoodRepository;
use business::domain::food::value_objects::Category;
use persistence::db::{DatabaseConfig, create_postgres_pool, run_migrations};
use persistence::food::repository::FoodRepositoryPostgres;

/// Database seeder
///
/// Imports a sample menu into the foods table, replacing whatever is there.
/// Run with `-d` to destroy the data instead of importing.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let db_url = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let pool = create_postgres_pool(&DatabaseConfig::new(db_url)).await?;

    let migrations_path = env::var("MIGRATIONS_PATH")
        .unwrap_or_else(|_| "infrastructure/persistence/migrations".to_string());
    run_migrations(&pool, &migrations_path).await?;

    sqlx::query("DELETE FROM foods").execute(&pool).await?;

    if env::args().nth(1).as_deref() == Some("-d") {
        println!("Data Destroyed!");
        return Ok(());
    }

    let repository = FoodRepositoryPostgres::new(pool);
    let foods = sample_foods()?;
    let count = foods.len();
    for food in &foods {
        repository.save(food).await?;
    }

    println!("Data Imported! ({} items)", count);
    Ok(())
}

fn sample_foods() -> anyhow::Result<Vec<Food>> {
    let items = [
        (
            "Masala Dosa",
            "Crispy dosa with potato filling",
            8000,
            Category::Breakfast,
            "South Indian",
            "https://example.com/images/masala-dosa.jpg",
        ),
        (
            "Chole Bhature",
            "Spicy chickpea curry with fried bread",
            11000,
            Category::Breakfast,
            "North Indian",
            "https://example.com/images/chole-bhature.jpg",
        ),
        (
            "Dal Rice",
            "Freshly cooked dal with steamed rice",
            12000,
            Category::Lunch,
            "Indian",
            "https://example.com/images/dal-rice.jpg",
        ),
        (
            "Roti Sabzi",
            "Fresh rotis with mixed vegetable curry",
            10000,
            Category::Dinner,
            "Indian",
            "https://example.com/images/roti-sabzi.jpg",
        ),
        (
            "Veg Thali",
            "Complete meal with rice, dal, roti, sabzi and dessert",
            15000,
            Category::Dinner,
            "Indian",
            "https://example.com/images/veg-thali.jpg",
        ),
    ];

    let mut foods = Vec::with_capacity(items.len());
    for (name, description, price, category, cuisine, image) in items {
        foods.push(Food::new(NewFoodProps {
            name: name.to_string(),
            description: description.to_string(),
            price,
            category,
            kind: None,
            cuisine: Some(cuisine.to_string()),
            image: image.to_string(),
        })?);
    }
    Ok(foods)
}
