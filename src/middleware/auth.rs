use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{HeaderMap, header},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::{auth::AccessClaims, error::AppError, state::AppState};

/// Header the clients send the access token in.
pub const TOKEN_HEADER: &str = "token";

/// Reads the access token from the `token` header, falling back to
/// `Authorization: Bearer`.
pub fn access_token_from(headers: &HeaderMap) -> Option<&str> {
    let raw = headers
        .get(TOKEN_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty());
    if raw.is_some() {
        return raw;
    }

    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

pub(crate) fn authenticate(state: &AppState, headers: &HeaderMap) -> Result<AccessClaims, AppError> {
    let token = access_token_from(headers)
        .ok_or_else(|| AppError::unauthorized("no authorization header provided"))?;

    state.tokens.validate_access(token).map_err(|err| {
        tracing::debug!(error = %err, "access token rejected");
        AppError::from(err)
    })
}

pub async fn jwt_auth(
    State(state): State<Arc<AppState>>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let claims = authenticate(state.as_ref(), req.headers()).map_err(IntoResponse::into_response)?;
    req.extensions_mut().insert(claims);
    Ok(next.run(req).await)
}
