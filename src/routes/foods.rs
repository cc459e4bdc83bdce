use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};
use sea_orm::prelude::DateTimeWithTimeZone;
use serde::{Deserialize, Serialize};

use crate::{
    db::entities::food,
    response::{ApiResult, JsonApiResponse},
    routes::validate,
    services::{
        ServiceContext,
        food_service::{FoodPatch, NewFood},
    },
    state::AppState,
};

#[derive(Debug, Deserialize)]
pub struct CreateFoodRequest {
    pub name: String,
    pub price: f64,
    pub food_image: String,
    pub menu_id: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateFoodRequest {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub food_image: Option<String>,
    pub menu_id: Option<String>,
}

/// Raw strings so that junk values fall back to defaults instead of a 400.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodPageQuery {
    pub record_per_page: Option<String>,
    pub page: Option<String>,
    pub start_index: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct FoodResponse {
    pub food_id: String,
    pub name: String,
    pub price: f64,
    pub food_image: String,
    pub menu_id: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Debug, Serialize)]
pub struct FoodPageResponse {
    pub total_count: u64,
    pub food_items: Vec<FoodResponse>,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/foods", get(list_foods).post(create_food))
        .route("/foods/{food_id}", get(get_food).patch(update_food))
        .with_state(state)
}

async fn list_foods(
    State(state): State<Arc<AppState>>,
    Query(query): Query<FoodPageQuery>,
) -> ApiResult<FoodPageResponse> {
    let (offset, limit) = validate::page_window(
        query.record_per_page.as_deref(),
        query.page.as_deref(),
        query.start_index.as_deref(),
    );
    let page = ServiceContext::from_state(state.as_ref())
        .food()
        .list_page(offset, limit)
        .await?;
    JsonApiResponse::ok(FoodPageResponse {
        total_count: page.total,
        food_items: page.items.into_iter().map(FoodResponse::from).collect(),
    })
}

async fn get_food(
    State(state): State<Arc<AppState>>,
    Path(food_id): Path<String>,
) -> ApiResult<FoodResponse> {
    let food = ServiceContext::from_state(state.as_ref())
        .food()
        .get(&food_id)
        .await?;
    JsonApiResponse::ok(food.into())
}

async fn create_food(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateFoodRequest>,
) -> ApiResult<FoodResponse> {
    let input = NewFood {
        name: validate::bounded_name("name", &body.name)?.to_string(),
        price: validate::price("price", body.price)?,
        food_image: validate::required("food_image", &body.food_image)?.to_string(),
        menu_id: validate::required("menu_id", &body.menu_id)?.to_string(),
    };
    let food = ServiceContext::from_state(state.as_ref())
        .food()
        .create(input)
        .await?;
    JsonApiResponse::with_status(StatusCode::CREATED, "created", food.into())
}

async fn update_food(
    State(state): State<Arc<AppState>>,
    Path(food_id): Path<String>,
    Json(body): Json<UpdateFoodRequest>,
) -> ApiResult<FoodResponse> {
    let patch = FoodPatch {
        name: body
            .name
            .as_deref()
            .map(|name| validate::bounded_name("name", name))
            .transpose()?
            .map(str::to_string),
        price: body
            .price
            .map(|price| validate::price("price", price))
            .transpose()?,
        food_image: validate::optional_required("food_image", body.food_image.as_deref())?
            .map(str::to_string),
        menu_id: validate::optional_required("menu_id", body.menu_id.as_deref())?
            .map(str::to_string),
    };
    let food = ServiceContext::from_state(state.as_ref())
        .food()
        .update(&food_id, patch)
        .await?;
    JsonApiResponse::ok(food.into())
}

impl From<food::Model> for FoodResponse {
    fn from(model: food::Model) -> Self {
        Self {
            food_id: model.food_id,
            name: model.name,
            price: model.price,
            food_image: model.food_image,
            menu_id: model.menu_id,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
