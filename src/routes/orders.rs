use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use sea_orm::prelude::DateTimeWithTimeZone;
use serde::{Deserialize, Serialize};

use crate::{
    db::entities::order,
    response::{ApiResult, JsonApiResponse},
    routes::validate,
    services::{ServiceContext, order_service::OrderPatch},
    state::AppState,
};

#[derive(Debug, Deserialize)]
pub struct CreateOrderRequest {
    pub table_id: String,
    pub order_date: Option<DateTimeWithTimeZone>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateOrderRequest {
    pub table_id: Option<String>,
    pub order_date: Option<DateTimeWithTimeZone>,
}

#[derive(Debug, Serialize)]
pub struct OrderResponse {
    pub order_id: String,
    pub order_date: DateTimeWithTimeZone,
    pub table_id: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/orders", get(list_orders).post(create_order))
        .route("/orders/{order_id}", get(get_order).patch(update_order))
        .with_state(state)
}

async fn list_orders(State(state): State<Arc<AppState>>) -> ApiResult<Vec<OrderResponse>> {
    let orders = ServiceContext::from_state(state.as_ref()).order().list().await?;
    JsonApiResponse::ok(orders.into_iter().map(OrderResponse::from).collect())
}

async fn get_order(
    State(state): State<Arc<AppState>>,
    Path(order_id): Path<String>,
) -> ApiResult<OrderResponse> {
    let order = ServiceContext::from_state(state.as_ref())
        .order()
        .get(&order_id)
        .await?;
    JsonApiResponse::ok(order.into())
}

async fn create_order(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateOrderRequest>,
) -> ApiResult<OrderResponse> {
    let table_id = validate::required("table_id", &body.table_id)?;
    let order = ServiceContext::from_state(state.as_ref())
        .order()
        .create(table_id, body.order_date)
        .await?;
    JsonApiResponse::with_status(StatusCode::CREATED, "created", order.into())
}

async fn update_order(
    State(state): State<Arc<AppState>>,
    Path(order_id): Path<String>,
    Json(body): Json<UpdateOrderRequest>,
) -> ApiResult<OrderResponse> {
    let patch = OrderPatch {
        table_id: validate::optional_required("table_id", body.table_id.as_deref())?
            .map(str::to_string),
        order_date: body.order_date,
    };
    let order = ServiceContext::from_state(state.as_ref())
        .order()
        .update(&order_id, patch)
        .await?;
    JsonApiResponse::ok(order.into())
}

impl From<order::Model> for OrderResponse {
    fn from(model: order::Model) -> Self {
        Self {
            order_id: model.order_id,
            order_date: model.order_date,
            table_id: model.table_id,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
