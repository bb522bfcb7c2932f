use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::food::errors::FoodError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for FoodError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, message) = match &self {
            FoodError::NameEmpty => (StatusCode::BAD_REQUEST, "food.name_empty"),
            FoodError::DescriptionEmpty => (StatusCode::BAD_REQUEST, "food.description_empty"),
            FoodError::PriceNegative => (StatusCode::BAD_REQUEST, "food.price_negative"),
            FoodError::ImageUrlInvalid => (StatusCode::BAD_REQUEST, "food.image_url_invalid"),
            FoodError::KindEmpty => (StatusCode::BAD_REQUEST, "food.type_empty"),
            FoodError::KindNotAllowed => (StatusCode::BAD_REQUEST, "food.type_not_allowed"),
            FoodError::CuisineEmpty => (StatusCode::BAD_REQUEST, "food.cuisine_empty"),
            FoodError::CuisineNotAllowed => (StatusCode::BAD_REQUEST, "food.cuisine_not_allowed"),
            FoodError::NotFound => (StatusCode::NOT_FOUND, "food.not_found"),
            FoodError::Repository(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "repository.persistence")
            }
        };

        (
            status,
            Json(ErrorResponse {
                message: message.to_string(),
            }),
        )
    }
}
