use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};
use uuid::Uuid;

use business::domain::food::use_cases::create::{CreateFoodParams, CreateFoodUseCase};
use business::domain::food::use_cases::delete::{DeleteFoodParams, DeleteFoodUseCase};
use business::domain::food::use_cases::get_all::{GetAllFoodsParams, GetAllFoodsUseCase};
use business::domain::food::use_cases::get_by_id::{GetFoodByIdParams, GetFoodByIdUseCase};
use business::domain::food::use_cases::update::{UpdateFoodParams, UpdateFoodUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::food::dto::{
    CategoryDto, CreateFoodRequest, FoodResponse, MessageResponse, UpdateFoodRequest,
};
use crate::api::tags::ApiTags;

pub struct FoodApi {
    create_use_case: Arc<dyn CreateFoodUseCase>,
    get_all_use_case: Arc<dyn GetAllFoodsUseCase>,
    get_by_id_use_case: Arc<dyn GetFoodByIdUseCase>,
    update_use_case: Arc<dyn UpdateFoodUseCase>,
    delete_use_case: Arc<dyn DeleteFoodUseCase>,
}

impl FoodApi {
    pub fn new(
        create_use_case: Arc<dyn CreateFoodUseCase>,
        get_all_use_case: Arc<dyn GetAllFoodsUseCase>,
        get_by_id_use_case: Arc<dyn GetFoodByIdUseCase>,
        update_use_case: Arc<dyn UpdateFoodUseCase>,
        delete_use_case: Arc<dyn DeleteFoodUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
            get_by_id_use_case,
            update_use_case,
            delete_use_case,
        }
    }
}

/// Food catalog API
///
/// Public menu listing plus the administrative CRUD surface.
#[OpenApi]
impl FoodApi {
    /// List food items
    ///
    /// Returns the full menu, optionally filtered by meal category. Always
    /// responds 200; an unknown catalog is just an empty array.
    #[oai(path = "/foods", method = "get", tag = "ApiTags::Foods")]
    async fn get_all_foods(&self, category: Query<Option<CategoryDto>>) -> GetAllFoodsResponse {
        let params = GetAllFoodsParams {
            category: category.0.map(|c| c.into()),
        };

        match self.get_all_use_case.execute(params).await {
            Ok(foods) => {
                let responses: Vec<FoodResponse> = foods.into_iter().map(|f| f.into()).collect();
                GetAllFoodsResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAllFoodsResponse::InternalError(json)
            }
        }
    }

    /// Get a food item by ID
    #[oai(path = "/foods/:id", method = "get", tag = "ApiTags::Foods")]
    async fn get_food_by_id(&self, id: Path<String>) -> GetFoodByIdResponse {
        let uuid = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => {
                return GetFoodByIdResponse::BadRequest(Json(ErrorResponse {
                    message: "food.invalid_id".to_string(),
                }));
            }
        };

        match self
            .get_by_id_use_case
            .execute(GetFoodByIdParams { id: uuid })
            .await
        {
            Ok(food) => GetFoodByIdResponse::Ok(Json(food.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetFoodByIdResponse::NotFound(json),
                    _ => GetFoodByIdResponse::InternalError(json),
                }
            }
        }
    }

    /// Create a food item
    ///
    /// Adds a new item to the menu.
    #[oai(path = "/foods", method = "post", tag = "ApiTags::Foods")]
    async fn create_food(&self, body: Json<CreateFoodRequest>) -> CreateFoodResponse {
        let params = CreateFoodParams {
            name: body.0.name,
            description: body.0.description,
            price: body.0.price,
            category: body.0.category.into(),
            kind: body.0.kind,
            cuisine: body.0.cuisine,
            image: body.0.image,
        };

        match self.create_use_case.execute(params).await {
            Ok(food) => CreateFoodResponse::Created(Json(food.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateFoodResponse::BadRequest(json),
                    _ => CreateFoodResponse::InternalError(json),
                }
            }
        }
    }

    /// Update a food item
    ///
    /// Partial update: omitted fields keep their current values.
    #[oai(path = "/foods/:id", method = "put", tag = "ApiTags::Foods")]
    async fn update_food(&self, id: Path<String>, body: Json<UpdateFoodRequest>) -> UpdateFoodResponse {
        let uuid = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => {
                return UpdateFoodResponse::BadRequest(Json(ErrorResponse {
                    message: "food.invalid_id".to_string(),
                }));
            }
        };

        let params = UpdateFoodParams {
            id: uuid,
            name: body.0.name,
            description: body.0.description,
            price: body.0.price,
            category: body.0.category.map(|c| c.into()),
            kind: body.0.kind,
            cuisine: body.0.cuisine,
            image: body.0.image,
        };

        match self.update_use_case.execute(params).await {
            Ok(food) => UpdateFoodResponse::Ok(Json(food.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateFoodResponse::BadRequest(json),
                    404 => UpdateFoodResponse::NotFound(json),
                    _ => UpdateFoodResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete a food item
    ///
    /// Permanently removes an item from the menu. Carts that already hold a
    /// snapshot of it are unaffected.
    #[oai(path = "/foods/:id", method = "delete", tag = "ApiTags::Foods")]
    async fn delete_food(&self, id: Path<String>) -> DeleteFoodResponse {
        let uuid = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => {
                return DeleteFoodResponse::BadRequest(Json(ErrorResponse {
                    message: "food.invalid_id".to_string(),
                }));
            }
        };

        match self
            .delete_use_case
            .execute(DeleteFoodParams { id: uuid })
            .await
        {
            Ok(()) => DeleteFoodResponse::Ok(Json(MessageResponse {
                message: "food.removed".to_string(),
            })),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => DeleteFoodResponse::NotFound(json),
                    _ => DeleteFoodResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllFoodsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<FoodResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetFoodByIdResponse {
    #[oai(status = 200)]
    Ok(Json<FoodResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateFoodResponse {
    #[oai(status = 201)]
    Created(Json<FoodResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateFoodResponse {
    #[oai(status = 200)]
    Ok(Json<FoodResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteFoodResponse {
    #[oai(status = 200)]
    Ok(Json<MessageResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
