use std::collections::HashSet;

use super::errors::FoodError;
use super::model::Food;

/// Optional allow-lists for the free-text food fields. The fields stay open
/// string sets; deployments that want stricter guarantees configure a list
/// and everything else keeps `Any`.
#[derive(Debug, Clone, Default)]
pub struct CatalogPolicy {
    pub kinds: AllowList,
    pub cuisines: AllowList,
}

#[derive(Debug, Clone, Default)]
pub enum AllowList {
    #[default]
    Any,
    Of(HashSet<String>),
}

impl AllowList {
    pub fn of(values: impl IntoIterator<Item = String>) -> Self {
        Self::Of(values.into_iter().collect())
    }

    pub fn permits(&self, value: &str) -> bool {
        match self {
            AllowList::Any => true,
            AllowList::Of(values) => values.contains(value),
        }
    }
}

impl CatalogPolicy {
    pub fn check(&self, food: &Food) -> Result<(), FoodError> {
        if !self.kinds.permits(&food.kind) {
            return Err(FoodError::KindNotAllowed);
        }
        if !self.cuisines.permits(&food.cuisine) {
            return Err(FoodError::CuisineNotAllowed);
        }
        Ok(())
    }
}
