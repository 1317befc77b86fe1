//! Event-request form: one validated insert into the persisted table.
//!
//! The committee list rides along as a single JSON-encoded column, the
//! same shape the table has always stored.

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::model::{CommitteeMember, EventRequestRow, RequestStatus};
use crate::server::extract::CurrentUser;
use crate::server::routes::{bad_request, ApiError, MessageResponse};
use crate::server::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/event-requests", post(submit_handler).get(list_handler))
}

/// Committee member as submitted; ids are assigned server-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitteeForm {
    pub name: String,
    pub role: String,
    pub email: String,
}

/// The full request form. Starred fields on the page are required here;
/// the rest default to empty.
#[derive(Debug, Deserialize)]
pub struct EventRequestForm {
    pub event_title: String,
    pub event_type: String,
    pub description: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub venue: String,
    pub expected_participants: Option<u32>,
    pub budget: Option<f64>,
    #[serde(default)]
    pub objectives: String,
    #[serde(default)]
    pub target_audience: String,
    #[serde(default)]
    pub requirements: String,
    #[serde(default)]
    pub committees: Vec<CommitteeForm>,
}

impl EventRequestForm {
    fn validate(&self) -> Result<(), ApiError> {
        let required = [
            &self.event_title,
            &self.event_type,
            &self.description,
            &self.venue,
        ];
        if required.iter().any(|f| f.trim().is_empty())
            || self.start_date.is_none()
            || self.end_date.is_none()
        {
            return Err(bad_request("All fields are required"));
        }
        Ok(())
    }
}

/// POST /event-requests - submit the form. A single round-trip insert with
/// status starting at pending.
async fn submit_handler(
    CurrentUser(session): CurrentUser,
    State(state): State<Arc<AppState>>,
    Json(form): Json<EventRequestForm>,
) -> Result<Json<MessageResponse>, ApiError> {
    form.validate()?;

    let members: Vec<CommitteeMember> = form
        .committees
        .into_iter()
        .map(|m| CommitteeMember {
            id: Uuid::new_v4(),
            name: m.name,
            role: m.role,
            email: m.email,
        })
        .collect();
    let committees =
        serde_json::to_string(&members).map_err(|e| bad_request(e.to_string()))?;

    let row = EventRequestRow {
        id: Uuid::new_v4(),
        user_id: session.user.id,
        event_title: form.event_title,
        event_type: form.event_type,
        description: form.description,
        start_date: form.start_date,
        end_date: form.end_date,
        venue: form.venue,
        expected_participants: form.expected_participants,
        budget: form.budget,
        objectives: form.objectives,
        target_audience: form.target_audience,
        requirements: form.requirements,
        committees,
        status: RequestStatus::Pending,
        submitted_at: Utc::now(),
    };

    state
        .store
        .insert_event_request(row)
        .map_err(|e| bad_request(e.to_string()))?;

    Ok(Json(MessageResponse {
        message: "Your event request has been submitted for approval.".to_string(),
    }))
}

/// GET /event-requests - stored rows, most recent first.
async fn list_handler(
    _user: CurrentUser,
    State(state): State<Arc<AppState>>,
) -> Json<Vec<EventRequestRow>> {
    Json(state.store.list_event_requests())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_form() -> EventRequestForm {
        serde_json::from_str(
            r#"{
                "event_title": "Science Fair",
                "event_type": "academic",
                "description": "Annual science fair.",
                "start_date": "2024-10-10",
                "end_date": "2024-10-11",
                "venue": "Main Auditorium",
                "expected_participants": 120,
                "budget": 1500.0,
                "committees": [
                    {"name": "Maria Santos", "role": "Logistics", "email": "maria@email.com"}
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_form_deserializes_with_optional_fields_defaulted() {
        let form = base_form();
        assert_eq!(form.objectives, "");
        assert_eq!(form.committees.len(), 1);
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_missing_required_field_fails_validation() {
        let mut form = base_form();
        form.venue = "  ".to_string();
        assert!(form.validate().is_err());

        let mut form = base_form();
        form.end_date = None;
        assert!(form.validate().is_err());
    }
}
