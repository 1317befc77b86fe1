//! Authentication endpoints. All three call through the one
//! [`AuthService`]; there is no second credential path to drift from it.

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::auth::{AuthError, SignupForm};
use crate::model::User;
use crate::server::extract::CurrentUser;
use crate::server::routes::{ApiError, ErrorResponse, MessageResponse};
use crate::server::AppState;
use crate::session::Session;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/signup", post(signup_handler))
        .route("/login", post(login_handler))
        .route("/logout", post(logout_handler))
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login success: the token plus the full user record the client caches.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
    pub user: User,
}

fn auth_error(err: AuthError) -> ApiError {
    let status = match err {
        AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
        _ => StatusCode::BAD_REQUEST,
    };
    (
        status,
        Json(ErrorResponse {
            error: err.to_string(),
        }),
    )
}

/// POST /signup - register an account. Success caches nothing.
async fn signup_handler(
    State(state): State<Arc<AppState>>,
    Json(form): Json<SignupForm>,
) -> Result<Json<MessageResponse>, ApiError> {
    let user = state.auth.signup(form).map_err(auth_error)?;
    eprintln!("[server] registered {} ({:?})", user.email, user.role);
    Ok(Json(MessageResponse {
        message: "User registered successfully".to_string(),
    }))
}

/// POST /login - verify credentials and create a session. Unknown email and
/// wrong password return the identical body.
async fn login_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let user = state
        .auth
        .login(&req.email, &req.password)
        .map_err(auth_error)?;

    let Session { token, user, .. } = state.sessions.create(user);
    Ok(Json(LoginResponse {
        message: "Login successful!".to_string(),
        token,
        user,
    }))
}

/// POST /logout - tear down the session.
async fn logout_handler(
    CurrentUser(session): CurrentUser,
    State(state): State<Arc<AppState>>,
) -> Json<MessageResponse> {
    state.sessions.remove(&session.token);
    Json(MessageResponse {
        message: "Logged out".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Role;

    #[test]
    fn test_login_request_deserialize() {
        let json = r#"{"email": "juan@email.com", "password": "hunter22"}"#;
        let req: LoginRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.email, "juan@email.com");
    }

    #[test]
    fn test_signup_form_role_defaults_to_participant() {
        let json = r#"{
            "name": "Juan Dela Cruz",
            "email": "juan@email.com",
            "password": "hunter22",
            "confirm_password": "hunter22"
        }"#;
        let form: SignupForm = serde_json::from_str(json).unwrap();
        assert_eq!(form.role, Role::Participant);
    }

    #[test]
    fn test_invalid_credentials_map_to_401() {
        let (status, body) = auth_error(AuthError::InvalidCredentials);
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body.error, "Invalid email or password.");

        let (status, _) = auth_error(AuthError::PasswordMismatch);
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
