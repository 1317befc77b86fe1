//! Route guard: extract the logged-in session from a bearer token.
//!
//! Presence of the token in the session map is the entire check, matching
//! the dashboard's protected-route behavior. Handlers that take a
//! [`CurrentUser`] reject unauthenticated requests with 401.

use axum::extract::FromRequestParts;
use axum::http::{header::AUTHORIZATION, request::Parts, StatusCode};
use axum::Json;
use std::sync::Arc;

use crate::server::routes::ErrorResponse;
use crate::server::AppState;
use crate::session::Session;

pub struct CurrentUser(pub Session);

impl FromRequestParts<Arc<AppState>> for CurrentUser {
    type Rejection = (StatusCode, Json<ErrorResponse>);

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "));

        let session = token.and_then(|t| state.sessions.get(t));
        match session {
            Some(session) => Ok(CurrentUser(session)),
            None => Err((
                StatusCode::UNAUTHORIZED,
                Json(ErrorResponse {
                    error: "Not logged in".to_string(),
                }),
            )),
        }
    }
}
