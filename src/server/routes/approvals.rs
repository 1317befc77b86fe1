//! Approvals page: review the request list and move Pending rows to
//! Approved or Rejected. Anything already decided stays decided.

use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;

use crate::model::{Approval, RequestStatus};
use crate::server::extract::CurrentUser;
use crate::server::routes::{bad_request, roster_error, ApiError};
use crate::server::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/approvals", get(list_handler))
        .route("/approvals/{id}/approve", post(approve_handler))
        .route("/approvals/{id}/reject", post(reject_handler))
}

/// List entry: the record plus its rendered "time ago" string.
#[derive(Debug, Serialize)]
pub struct ApprovalView {
    #[serde(flatten)]
    pub approval: Approval,
    pub requested_ago: String,
}

/// Coarse relative-time rendering for the requested-at column.
fn time_ago(now: DateTime<Utc>, then: DateTime<Utc>) -> String {
    let diff = (now - then).num_seconds().max(0);
    if diff < 60 {
        format!("{} sec ago", diff)
    } else if diff < 3600 {
        format!("{} min ago", diff / 60)
    } else if diff < 86400 {
        format!("{} hours ago", diff / 3600)
    } else {
        then.format("%Y-%m-%d %H:%M").to_string()
    }
}

/// GET /approvals
async fn list_handler(
    _user: CurrentUser,
    State(state): State<Arc<AppState>>,
) -> Json<Vec<ApprovalView>> {
    let now = Utc::now();
    let views = state
        .approvals
        .list()
        .into_iter()
        .map(|approval| ApprovalView {
            requested_ago: time_ago(now, approval.requested_at),
            approval,
        })
        .collect();
    Json(views)
}

fn transition(
    state: &AppState,
    id: u32,
    to: RequestStatus,
) -> Result<Json<Approval>, ApiError> {
    let existing = state
        .approvals
        .get(id)
        .ok_or_else(|| roster_error(crate::roster::RosterError::NotFound(id)))?;
    if existing.status != RequestStatus::Pending {
        return Err(bad_request("Only pending requests can be decided"));
    }
    let updated = state
        .approvals
        .modify(id, |a| a.status = to)
        .map_err(roster_error)?;
    Ok(Json(updated))
}

/// POST /approvals/{id}/approve
async fn approve_handler(
    _user: CurrentUser,
    State(state): State<Arc<AppState>>,
    Path(id): Path<u32>,
) -> Result<Json<Approval>, ApiError> {
    transition(&state, id, RequestStatus::Approved)
}

/// POST /approvals/{id}/reject
async fn reject_handler(
    _user: CurrentUser,
    State(state): State<Arc<AppState>>,
    Path(id): Path<u32>,
) -> Result<Json<Approval>, ApiError> {
    transition(&state, id, RequestStatus::Rejected)
}
