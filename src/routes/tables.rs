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
    db::entities::table,
    response::{ApiResult, JsonApiResponse},
    routes::validate,
    services::{ServiceContext, table_service::TablePatch},
    state::AppState,
};

#[derive(Debug, Deserialize)]
pub struct CreateTableRequest {
    pub number_of_guests: i32,
    pub table_number: i32,
}

#[derive(Debug, Deserialize)]
pub struct UpdateTableRequest {
    pub number_of_guests: Option<i32>,
    pub table_number: Option<i32>,
}

#[derive(Debug, Serialize)]
pub struct TableResponse {
    pub table_id: String,
    pub number_of_guests: i32,
    pub table_number: i32,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/tables", get(list_tables).post(create_table))
        .route("/tables/{table_id}", get(get_table).patch(update_table))
        .with_state(state)
}

async fn list_tables(State(state): State<Arc<AppState>>) -> ApiResult<Vec<TableResponse>> {
    let tables = ServiceContext::from_state(state.as_ref()).table().list().await?;
    JsonApiResponse::ok(tables.into_iter().map(TableResponse::from).collect())
}

async fn get_table(
    State(state): State<Arc<AppState>>,
    Path(table_id): Path<String>,
) -> ApiResult<TableResponse> {
    let table = ServiceContext::from_state(state.as_ref())
        .table()
        .get(&table_id)
        .await?;
    JsonApiResponse::ok(table.into())
}

async fn create_table(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateTableRequest>,
) -> ApiResult<TableResponse> {
    let guests = validate::non_negative("number_of_guests", body.number_of_guests)?;
    let number = validate::non_negative("table_number", body.table_number)?;
    let table = ServiceContext::from_state(state.as_ref())
        .table()
        .create(guests, number)
        .await?;
    JsonApiResponse::with_status(StatusCode::CREATED, "created", table.into())
}

async fn update_table(
    State(state): State<Arc<AppState>>,
    Path(table_id): Path<String>,
    Json(body): Json<UpdateTableRequest>,
) -> ApiResult<TableResponse> {
    let patch = TablePatch {
        number_of_guests: body
            .number_of_guests
            .map(|guests| validate::non_negative("number_of_guests", guests))
            .transpose()?,
        table_number: body
            .table_number
            .map(|number| validate::non_negative("table_number", number))
            .transpose()?,
    };
    let table = ServiceContext::from_state(state.as_ref())
        .table()
        .update(&table_id, patch)
        .await?;
    JsonApiResponse::ok(table.into())
}

impl From<table::Model> for TableResponse {
    fn from(model: table::Model) -> Self {
        Self {
            table_id: model.table_id,
            number_of_guests: model.number_of_guests,
            table_number: model.table_number,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
