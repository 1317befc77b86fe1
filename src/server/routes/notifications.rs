//! Notifications page: list and mark-as-read.

use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use std::sync::Arc;

use crate::model::Notification;
use crate::server::extract::CurrentUser;
use crate::server::routes::{roster_error, ApiError};
use crate::server::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/notifications", get(list_handler))
        .route("/notifications/{id}/read", post(mark_read_handler))
}

/// GET /notifications - full list in insertion order.
async fn list_handler(
    _user: CurrentUser,
    State(state): State<Arc<AppState>>,
) -> Json<Vec<Notification>> {
    Json(state.notifications.list())
}

/// POST /notifications/{id}/read - idempotent mark-as-read.
async fn mark_read_handler(
    _user: CurrentUser,
    State(state): State<Arc<AppState>>,
    Path(id): Path<u32>,
) -> Result<Json<Notification>, ApiError> {
    let updated = state
        .notifications
        .modify(id, |n| n.read = true)
        .map_err(roster_error)?;
    Ok(Json(updated))
}

#[cfg(test)]
mod tests {
    use crate::model::{Notification, NotificationKind};
    use crate::roster::Roster;
    use crate::seed;

    #[test]
    fn test_mark_read_is_idempotent() {
        let roster: Roster<Notification> = Roster::new(seed::notifications());
        let first = roster.modify(1, |n| n.read = true).unwrap();
        assert!(first.read);
        let second = roster.modify(1, |n| n.read = true).unwrap();
        assert!(second.read);
        assert_eq!(roster.len(), 3);
    }

    #[test]
    fn test_seed_kinds_cover_all_three() {
        let kinds: Vec<NotificationKind> =
            seed::notifications().iter().map(|n| n.kind).collect();
        assert!(kinds.contains(&NotificationKind::Approval));
        assert!(kinds.contains(&NotificationKind::Registration));
        assert!(kinds.contains(&NotificationKind::Info));
    }
}
