use serde::{Deserialize, Serialize};

/// Meal slot a food belongs to. The only closed classification on a food;
/// `kind` and `cuisine` stay free text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Breakfast,
    Lunch,
    Dinner,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Breakfast => write!(f, "breakfast"),
            Category::Lunch => write!(f, "lunch"),
            Category::Dinner => write!(f, "dinner"),
        }
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "breakfast" => Ok(Category::Breakfast),
            "lunch" => Ok(Category::Lunch),
            "dinner" => Ok(Category::Dinner),
            _ => Err(format!("Invalid category: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_round_trip_through_display_and_from_str() {
        for category in [Category::Breakfast, Category::Lunch, Category::Dinner] {
            let parsed: Category = category.to_string().parse().unwrap();
            assert_eq!(parsed, category);
        }
    }

    #[test]
    fn should_reject_unknown_category() {
        assert!("brunch".parse::<Category>().is_err());
    }
}
