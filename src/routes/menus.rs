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
    db::entities::menu,
    response::{ApiResult, JsonApiResponse},
    routes::validate,
    services::{
        ServiceContext,
        menu_service::{MenuPatch, NewMenu},
    },
    state::AppState,
};

#[derive(Debug, Deserialize)]
pub struct CreateMenuRequest {
    pub name: String,
    pub category: String,
    pub start_date: Option<DateTimeWithTimeZone>,
    pub end_date: Option<DateTimeWithTimeZone>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateMenuRequest {
    pub name: Option<String>,
    pub category: Option<String>,
    pub start_date: Option<DateTimeWithTimeZone>,
    pub end_date: Option<DateTimeWithTimeZone>,
}

#[derive(Debug, Serialize)]
pub struct MenuResponse {
    pub menu_id: String,
    pub name: String,
    pub category: String,
    pub start_date: Option<DateTimeWithTimeZone>,
    pub end_date: Option<DateTimeWithTimeZone>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/menus", get(list_menus).post(create_menu))
        .route("/menus/{menu_id}", get(get_menu).patch(update_menu))
        .with_state(state)
}

async fn list_menus(State(state): State<Arc<AppState>>) -> ApiResult<Vec<MenuResponse>> {
    let menus = ServiceContext::from_state(state.as_ref()).menu().list().await?;
    JsonApiResponse::ok(menus.into_iter().map(MenuResponse::from).collect())
}

async fn get_menu(
    State(state): State<Arc<AppState>>,
    Path(menu_id): Path<String>,
) -> ApiResult<MenuResponse> {
    let menu = ServiceContext::from_state(state.as_ref())
        .menu()
        .get(&menu_id)
        .await?;
    JsonApiResponse::ok(menu.into())
}

async fn create_menu(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateMenuRequest>,
) -> ApiResult<MenuResponse> {
    let input = NewMenu {
        name: validate::required("name", &body.name)?.to_string(),
        category: validate::required("category", &body.category)?.to_string(),
        start_date: body.start_date,
        end_date: body.end_date,
    };
    let menu = ServiceContext::from_state(state.as_ref())
        .menu()
        .create(input)
        .await?;
    JsonApiResponse::with_status(StatusCode::CREATED, "created", menu.into())
}

async fn update_menu(
    State(state): State<Arc<AppState>>,
    Path(menu_id): Path<String>,
    Json(body): Json<UpdateMenuRequest>,
) -> ApiResult<MenuResponse> {
    let patch = MenuPatch {
        name: validate::optional_required("name", body.name.as_deref())?.map(str::to_string),
        category: validate::optional_required("category", body.category.as_deref())?
            .map(str::to_string),
        start_date: body.start_date,
        end_date: body.end_date,
    };
    let menu = ServiceContext::from_state(state.as_ref())
        .menu()
        .update(&menu_id, patch)
        .await?;
    JsonApiResponse::ok(menu.into())
}

impl From<menu::Model> for MenuResponse {
    fn from(model: menu::Model) -> Self {
        Self {
            menu_id: model.menu_id,
            name: model.name,
            category: model.category,
            start_date: model.start_date,
            end_date: model.end_date,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
