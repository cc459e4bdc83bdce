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
    db::entities::invoice,
    error::AppError,
    response::{ApiResult, JsonApiResponse},
    routes::validate,
    services::{
        ServiceContext,
        invoice_service::{InvoicePatch, InvoiceView, PaymentMethod, PaymentStatus},
    },
    state::AppState,
};

#[derive(Debug, Deserialize)]
pub struct CreateInvoiceRequest {
    pub order_id: String,
    pub payment_method: Option<String>,
    pub payment_status: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateInvoiceRequest {
    pub payment_method: Option<String>,
    pub payment_status: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct InvoiceResponse {
    pub invoice_id: String,
    pub order_id: String,
    pub payment_method: Option<String>,
    pub payment_status: String,
    pub payment_due_date: DateTimeWithTimeZone,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/invoices", get(list_invoices).post(create_invoice))
        .route("/invoices/{invoice_id}", get(get_invoice).patch(update_invoice))
        .with_state(state)
}

async fn list_invoices(State(state): State<Arc<AppState>>) -> ApiResult<Vec<InvoiceResponse>> {
    let invoices = ServiceContext::from_state(state.as_ref())
        .invoice()
        .list()
        .await?;
    JsonApiResponse::ok(invoices.into_iter().map(InvoiceResponse::from).collect())
}

async fn get_invoice(
    State(state): State<Arc<AppState>>,
    Path(invoice_id): Path<String>,
) -> ApiResult<InvoiceView> {
    let view = ServiceContext::from_state(state.as_ref())
        .invoice()
        .view(&invoice_id)
        .await?;
    JsonApiResponse::ok(view)
}

async fn create_invoice(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateInvoiceRequest>,
) -> ApiResult<InvoiceResponse> {
    let order_id = validate::required("order_id", &body.order_id)?;
    let method = parse_optional::<PaymentMethod>(body.payment_method.as_deref())?;
    let status = parse_optional::<PaymentStatus>(body.payment_status.as_deref())?;

    let invoice = ServiceContext::from_state(state.as_ref())
        .invoice()
        .create(order_id, method, status)
        .await?;
    JsonApiResponse::with_status(StatusCode::CREATED, "created", invoice.into())
}

async fn update_invoice(
    State(state): State<Arc<AppState>>,
    Path(invoice_id): Path<String>,
    Json(body): Json<UpdateInvoiceRequest>,
) -> ApiResult<InvoiceResponse> {
    let patch = InvoicePatch {
        payment_method: parse_optional(body.payment_method.as_deref())?,
        payment_status: parse_optional(body.payment_status.as_deref())?,
    };
    let invoice = ServiceContext::from_state(state.as_ref())
        .invoice()
        .update(&invoice_id, patch)
        .await?;
    JsonApiResponse::ok(invoice.into())
}

fn parse_optional<T>(value: Option<&str>) -> Result<Option<T>, AppError>
where
    T: std::str::FromStr<Err = AppError>,
{
    value.map(str::parse).transpose()
}

impl From<invoice::Model> for InvoiceResponse {
    fn from(model: invoice::Model) -> Self {
        Self {
            invoice_id: model.invoice_id,
            order_id: model.order_id,
            payment_method: model.payment_method,
            payment_status: model.payment_status,
            payment_due_date: model.payment_due_date,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
