use std::sync::Arc;

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::{auth::AccessClaims, error::AppError, state::AppState};

use super::auth::authenticate;

// Reuses claims left by `jwt_auth`; validates the headers itself otherwise.
impl FromRequestParts<Arc<AppState>> for AccessClaims {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        if let Some(claims) = parts.extensions.get::<AccessClaims>().cloned() {
            return Ok(claims);
        }

        let claims = authenticate(state.as_ref(), &parts.headers)?;
        parts.extensions.insert(claims.clone());
        Ok(claims)
    }
}

pub type AuthGuard = AccessClaims;
