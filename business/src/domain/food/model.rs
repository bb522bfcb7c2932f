use chrono::{DateTime, Utc};
use url::Url;
use uuid::Uuid;

use super::errors::FoodError;
use super::value_objects::Category;
use crate::domain::shared::value_objects::Price;

pub const DEFAULT_KIND: &str = "main dish";
pub const DEFAULT_CUISINE: &str = "Indian";

/// A purchasable menu item. Owned by the catalog; carts only ever hold copies
/// taken at add time.
#[derive(Debug, Clone, PartialEq)]
pub struct Food {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price: Price,
    pub category: Category,
    /// Free-text classification ("main dish", "side dish", ...). Serialized
    /// as `type` at every boundary; `kind` only because `type` is reserved.
    pub kind: String,
    pub cuisine: String,
    pub image: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct NewFoodProps {
    pub name: String,
    pub description: String,
    pub price: i64,
    pub category: Category,
    pub kind: Option<String>,
    pub cuisine: Option<String>,
    pub image: String,
}

impl Food {
    pub fn new(props: NewFoodProps) -> Result<Self, FoodError> {
        if props.name.trim().is_empty() {
            return Err(FoodError::NameEmpty);
        }
        if props.description.trim().is_empty() {
            return Err(FoodError::DescriptionEmpty);
        }
        let price = Price::from_minor_units(props.price).map_err(|_| FoodError::PriceNegative)?;
        validate_image_url(&props.image)?;

        let kind = match props.kind {
            Some(k) if k.trim().is_empty() => return Err(FoodError::KindEmpty),
            Some(k) => k,
            None => DEFAULT_KIND.to_string(),
        };
        let cuisine = match props.cuisine {
            Some(c) if c.trim().is_empty() => return Err(FoodError::CuisineEmpty),
            Some(c) => c,
            None => DEFAULT_CUISINE.to_string(),
        };

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            name: props.name,
            description: props.description,
            price,
            category: props.category,
            kind,
            cuisine,
            image: props.image,
            created_at: now,
            updated_at: now,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: Uuid,
        name: String,
        description: String,
        price: Price,
        category: Category,
        kind: String,
        cuisine: String,
        image: String,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            description,
            price,
            category,
            kind,
            cuisine,
            image,
            created_at,
            updated_at,
        }
    }
}

/// Images must be absolute http(s) URLs so clients can render them as-is.
pub fn validate_image_url(image: &str) -> Result<(), FoodError> {
    match Url::parse(image) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => Ok(()),
        _ => Err(FoodError::ImageUrlInvalid),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_props() -> NewFoodProps {
        NewFoodProps {
            name: "Masala Dosa".to_string(),
            description: "Crispy dosa with potato filling".to_string(),
            price: 8000,
            category: Category::Breakfast,
            kind: None,
            cuisine: None,
            image: "https://example.com/images/masala-dosa.jpg".to_string(),
        }
    }

    #[test]
    fn should_create_food_when_props_valid() {
        let food = Food::new(valid_props()).unwrap();

        assert_eq!(food.name, "Masala Dosa");
        assert_eq!(food.price.minor_units(), 8000);
        assert_eq!(food.category, Category::Breakfast);
    }

    #[test]
    fn should_default_kind_and_cuisine_when_absent() {
        let food = Food::new(valid_props()).unwrap();

        assert_eq!(food.kind, DEFAULT_KIND);
        assert_eq!(food.cuisine, DEFAULT_CUISINE);
    }

    #[test]
    fn should_keep_kind_and_cuisine_when_provided() {
        let mut props = valid_props();
        props.kind = Some("side dish".to_string());
        props.cuisine = Some("South Indian".to_string());

        let food = Food::new(props).unwrap();

        assert_eq!(food.kind, "side dish");
        assert_eq!(food.cuisine, "South Indian");
    }

    #[test]
    fn should_reject_when_name_empty() {
        let mut props = valid_props();
        props.name = "   ".to_string();

        assert!(matches!(Food::new(props), Err(FoodError::NameEmpty)));
    }

    #[test]
    fn should_reject_when_description_empty() {
        let mut props = valid_props();
        props.description = "".to_string();

        assert!(matches!(Food::new(props), Err(FoodError::DescriptionEmpty)));
    }

    #[test]
    fn should_reject_when_price_negative() {
        let mut props = valid_props();
        props.price = -100;

        assert!(matches!(Food::new(props), Err(FoodError::PriceNegative)));
    }

    #[test]
    fn should_reject_when_image_not_absolute_url() {
        let mut props = valid_props();
        props.image = "images/masala-dosa.jpg".to_string();

        assert!(matches!(Food::new(props), Err(FoodError::ImageUrlInvalid)));
    }

    #[test]
    fn should_reject_when_image_scheme_not_http() {
        let mut props = valid_props();
        props.image = "ftp://example.com/masala-dosa.jpg".to_string();

        assert!(matches!(Food::new(props), Err(FoodError::ImageUrlInvalid)));
    }

    #[test]
    fn should_reject_blank_kind() {
        let mut props = valid_props();
        props.kind = Some(" ".to_string());

        assert!(matches!(Food::new(props), Err(FoodError::KindEmpty)));
    }
}
