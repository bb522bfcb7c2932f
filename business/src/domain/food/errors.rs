#[derive(Debug, thiserror::Error)]
pub enum FoodError {
    #[error("food.name_empty")]
    NameEmpty,
    #[error("food.description_empty")]
    DescriptionEmpty,
    #[error("food.price_negative")]
    PriceNegative,
    #[error("food.image_url_invalid")]
    ImageUrlInvalid,
    #[error("food.type_empty")]
    KindEmpty,
    #[error("food.type_not_allowed")]
    KindNotAllowed,
    #[error("food.cuisine_empty")]
    CuisineEmpty,
    #[error("food.cuisine_not_allowed")]
    CuisineNotAllowed,
    #[error("food.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
