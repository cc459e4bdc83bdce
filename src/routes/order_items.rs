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
    db::entities::order_item,
    error::AppError,
    middleware::AuthGuard,
    response::{ApiResult, JsonApiResponse},
    routes::validate,
    services::{
        ServiceContext,
        billing_service::Bill,
        order_item_service::{NewOrderItem, OrderItemPatch},
    },
    state::AppState,
};

#[derive(Debug, Deserialize)]
pub struct OrderItemLine {
    pub quantity: String,
    pub unit_price: f64,
    pub food_id: String,
}

#[derive(Debug, Deserialize)]
pub struct PlaceOrderRequest {
    pub table_id: String,
    pub order_items: Vec<OrderItemLine>,
}

/// Only `quantity` and `unit_price` are writable once an item is placed.
#[derive(Debug, Deserialize)]
pub struct UpdateOrderItemRequest {
    pub quantity: Option<String>,
    pub unit_price: Option<f64>,
    pub food_id: Option<serde_json::Value>,
    pub order_id: Option<serde_json::Value>,
}

#[derive(Debug, Serialize)]
pub struct OrderItemResponse {
    pub order_item_id: String,
    pub quantity: String,
    pub unit_price: f64,
    pub food_id: String,
    pub order_id: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Debug, Serialize)]
pub struct PlacedOrderResponse {
    pub order_id: String,
    pub table_id: String,
    pub order_items: Vec<OrderItemResponse>,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/orderItems", get(list_order_items).post(place_order))
        .route(
            "/orderItems/{order_item_id}",
            get(get_order_item).patch(update_order_item),
        )
        .route("/orderItems-order/{order_id}", get(order_bill))
        .with_state(state)
}

async fn list_order_items(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Vec<OrderItemResponse>> {
    let items = ServiceContext::from_state(state.as_ref())
        .order_item()
        .list()
        .await?;
    JsonApiResponse::ok(items.into_iter().map(OrderItemResponse::from).collect())
}

async fn get_order_item(
    State(state): State<Arc<AppState>>,
    Path(order_item_id): Path<String>,
) -> ApiResult<OrderItemResponse> {
    let item = ServiceContext::from_state(state.as_ref())
        .order_item()
        .get(&order_item_id)
        .await?;
    JsonApiResponse::ok(item.into())
}

async fn order_bill(
    State(state): State<Arc<AppState>>,
    Path(order_id): Path<String>,
) -> ApiResult<Bill> {
    let bill = ServiceContext::from_state(state.as_ref())
        .billing()
        .compute_bill(&order_id)
        .await?;
    JsonApiResponse::ok(bill)
}

async fn place_order(
    State(state): State<Arc<AppState>>,
    claims: AuthGuard,
    Json(body): Json<PlaceOrderRequest>,
) -> ApiResult<PlacedOrderResponse> {
    let table_id = validate::required("table_id", &body.table_id)?;
    let items = body
        .order_items
        .iter()
        .map(|line| {
            Ok(NewOrderItem {
                quantity: validate::required("quantity", &line.quantity)?.to_string(),
                unit_price: validate::price("unit_price", line.unit_price)?,
                food_id: validate::required("food_id", &line.food_id)?.to_string(),
            })
        })
        .collect::<Result<Vec<_>, AppError>>()?;

    let placed = ServiceContext::from_state(state.as_ref())
        .order_item()
        .place(table_id, items)
        .await?;
    tracing::info!(
        order_id = %placed.order.order_id,
        items = placed.items.len(),
        uid = %claims.uid,
        "order placed"
    );
    JsonApiResponse::with_status(
        StatusCode::CREATED,
        "created",
        PlacedOrderResponse {
            order_id: placed.order.order_id,
            table_id: placed.order.table_id,
            order_items: placed.items.into_iter().map(OrderItemResponse::from).collect(),
        },
    )
}

async fn update_order_item(
    State(state): State<Arc<AppState>>,
    Path(order_item_id): Path<String>,
    Json(body): Json<UpdateOrderItemRequest>,
) -> ApiResult<OrderItemResponse> {
    for (field, present) in [
        ("food_id", body.food_id.is_some()),
        ("order_id", body.order_id.is_some()),
    ] {
        if present {
            return Err(AppError::bad_request(format!(
                "{field} cannot be changed once the item is placed"
            )));
        }
    }

    let patch = OrderItemPatch {
        quantity: validate::optional_required("quantity", body.quantity.as_deref())?
            .map(str::to_string),
        unit_price: body
            .unit_price
            .map(|price| validate::price("unit_price", price))
            .transpose()?,
    };
    let item = ServiceContext::from_state(state.as_ref())
        .order_item()
        .update(&order_item_id, patch)
        .await?;
    JsonApiResponse::ok(item.into())
}

impl From<order_item::Model> for OrderItemResponse {
    fn from(model: order_item::Model) -> Self {
        Self {
            order_item_id: model.order_item_id,
            quantity: model.quantity,
            unit_price: model.unit_price,
            food_id: model.food_id,
            order_id: model.order_id,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
