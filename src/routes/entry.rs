use std::sync::Arc;

use axum::{Router, middleware};

use crate::{middleware::jwt_auth, state::AppState};

use super::{foods, invoices, menus, order_items, orders, tables, users};

/// Signup, login and refresh are open; every other route needs an access
/// token.
pub fn router(state: Arc<AppState>) -> Router {
    let protected = Router::new()
        .merge(users::router(state.clone()))
        .merge(foods::router(state.clone()))
        .merge(menus::router(state.clone()))
        .merge(tables::router(state.clone()))
        .merge(orders::router(state.clone()))
        .merge(order_items::router(state.clone()))
        .merge(invoices::router(state.clone()))
        .route_layer(middleware::from_fn_with_state(state.clone(), jwt_auth));

    Router::new()
        .merge(users::public_router(state))
        .merge(protected)
}
