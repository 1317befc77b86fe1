//! Route modules, one per dashboard page, plus the shared response shapes.

pub mod approvals;
pub mod auth;
pub mod calendar;
pub mod dashboard;
pub mod event_requests;
pub mod multimedia;
pub mod nav;
pub mod notifications;
pub mod otp;
pub mod participants;
pub mod venues;

use axum::http::StatusCode;
use axum::Json;
use base64::{engine::general_purpose, Engine as _};
use serde::Serialize;

use crate::roster::RosterError;

/// Standard error body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Standard success body for operations that only need a message.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

pub type ApiError = (StatusCode, Json<ErrorResponse>);

pub fn bad_request(message: impl Into<String>) -> ApiError {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
}

pub fn not_found(message: impl Into<String>) -> ApiError {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
}

/// Map a roster failure to its HTTP status: 400 for validation, 404 for a
/// missing id.
pub fn roster_error(err: RosterError) -> ApiError {
    match err {
        RosterError::MissingFields => bad_request(err.to_string()),
        RosterError::NotFound(_) => not_found(err.to_string()),
    }
}

/// Reject images that are not decodable base64 data URLs. `None` is fine;
/// images are optional everywhere.
pub fn check_image(image: &Option<String>) -> Result<(), ApiError> {
    let Some(url) = image else {
        return Ok(());
    };
    let payload = url
        .strip_prefix("data:")
        .and_then(|rest| rest.split_once(";base64,"))
        .map(|(_, payload)| payload);
    let valid = match payload {
        Some(payload) => general_purpose::STANDARD.decode(payload).is_ok(),
        None => false,
    };
    if valid {
        Ok(())
    } else {
        Err(bad_request("image must be a base64 data URL"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_image_accepts_none_and_valid_data_url() {
        assert!(check_image(&None).is_ok());
        // "hi" base64-encoded.
        let url = Some("data:image/png;base64,aGk=".to_string());
        assert!(check_image(&url).is_ok());
    }

    #[test]
    fn test_check_image_rejects_garbage() {
        let bare = Some("http://example.com/pic.png".to_string());
        assert!(check_image(&bare).is_err());
        let bad_payload = Some("data:image/png;base64,%%%".to_string());
        assert!(check_image(&bad_payload).is_err());
    }

    #[test]
    fn test_roster_error_statuses() {
        let (status, _) = roster_error(RosterError::MissingFields);
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let (status, _) = roster_error(RosterError::NotFound(9));
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
