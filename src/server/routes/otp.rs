//! HTTP surface of the OTP side-service, mounted by the `eventdesk-otp`
//! binary. Send always reports success; verify consumes the code.

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::otp::OtpStore;

pub fn routes() -> Router<Arc<OtpStore>> {
    Router::new()
        .route("/api/send-otp", post(send_handler))
        .route("/api/verify-otp", post(verify_handler))
}

#[derive(Debug, Deserialize)]
pub struct SendOtpRequest {
    pub email: String,
}

#[derive(Debug, Deserialize)]
pub struct VerifyOtpRequest {
    pub email: String,
    pub otp: String,
}

#[derive(Debug, Serialize)]
pub struct OtpResponse {
    pub success: bool,
}

/// POST /api/send-otp - issue a code; the response never says more than
/// "sent".
async fn send_handler(
    State(store): State<Arc<OtpStore>>,
    Json(req): Json<SendOtpRequest>,
) -> Json<OtpResponse> {
    store.issue(&req.email);
    Json(OtpResponse { success: true })
}

/// POST /api/verify-otp - exact match, one shot.
async fn verify_handler(
    State(store): State<Arc<OtpStore>>,
    Json(req): Json<VerifyOtpRequest>,
) -> Json<OtpResponse> {
    let success = store.verify(&req.email, &req.otp);
    Json(OtpResponse { success })
}
