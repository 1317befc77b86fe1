//! Participant roster: search, add, edit, remove.

use axum::extract::{Path, Query, State};
use axum::routing::{get, put};
use axum::{Json, Router};
use serde::Deserialize;
use std::sync::Arc;

use crate::model::{Participant, ParticipantStatus};
use crate::server::extract::CurrentUser;
use crate::server::routes::{roster_error, ApiError, MessageResponse};
use crate::server::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/participants", get(list_handler).post(create_handler))
        .route(
            "/participants/{id}",
            put(update_handler).delete(delete_handler),
        )
}

#[derive(Debug, Deserialize)]
struct SearchQuery {
    #[serde(default)]
    q: String,
}

/// Add/edit form. New participants start as Registered unless stated.
#[derive(Debug, Deserialize)]
pub struct ParticipantForm {
    pub name: String,
    pub email: String,
    pub role: String,
    #[serde(default = "default_status")]
    pub status: ParticipantStatus,
}

fn default_status() -> ParticipantStatus {
    ParticipantStatus::Registered
}

impl ParticipantForm {
    fn into_participant(self) -> Participant {
        Participant {
            id: 0,
            name: self.name,
            email: self.email,
            role: self.role,
            status: self.status,
        }
    }
}

/// GET /participants?q= - substring match on name, email, or role.
async fn list_handler(
    _user: CurrentUser,
    State(state): State<Arc<AppState>>,
    Query(query): Query<SearchQuery>,
) -> Json<Vec<Participant>> {
    Json(state.participants.filter(&query.q))
}

/// POST /participants
async fn create_handler(
    _user: CurrentUser,
    State(state): State<Arc<AppState>>,
    Json(form): Json<ParticipantForm>,
) -> Result<Json<Participant>, ApiError> {
    let created = state
        .participants
        .create(form.into_participant())
        .map_err(roster_error)?;
    Ok(Json(created))
}

/// PUT /participants/{id}
async fn update_handler(
    _user: CurrentUser,
    State(state): State<Arc<AppState>>,
    Path(id): Path<u32>,
    Json(form): Json<ParticipantForm>,
) -> Result<Json<Participant>, ApiError> {
    let updated = state
        .participants
        .update(id, form.into_participant())
        .map_err(roster_error)?;
    Ok(Json(updated))
}

/// DELETE /participants/{id}
async fn delete_handler(
    _user: CurrentUser,
    State(state): State<Arc<AppState>>,
    Path(id): Path<u32>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.participants.remove(id).map_err(roster_error)?;
    Ok(Json(MessageResponse {
        message: "Participant removed".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_defaults_to_registered() {
        let form: ParticipantForm = serde_json::from_str(
            r#"{"name": "Ana Lim", "email": "ana@email.com", "role": "Student"}"#,
        )
        .unwrap();
        assert_eq!(form.status, ParticipantStatus::Registered);
    }

    #[test]
    fn test_form_accepts_checked_in_status() {
        let form: ParticipantForm = serde_json::from_str(
            r#"{"name": "Ana Lim", "email": "ana@email.com", "role": "Student", "status": "Checked In"}"#,
        )
        .unwrap();
        assert_eq!(form.status, ParticipantStatus::CheckedIn);
    }
}
