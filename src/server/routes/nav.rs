//! Navigation shell: the fixed sidebar menu with the active entry flagged.

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::server::extract::CurrentUser;
use crate::server::AppState;

/// The menu never changes; only the active flag does.
const MENU: &[(&str, &str)] = &[
    ("Dashboard", "/dashboard"),
    ("Calendar of Activities", "/calendar"),
    ("Notifications", "/notifications"),
    ("Participants", "/participants"),
    ("Venue & Registration", "/venue"),
    ("Program Flow", "/program"),
    ("Multimedia", "/multimedia"),
    ("Approvals", "/approvals"),
    ("Feedback", "/feedback"),
    ("Reports & Analytics", "/reports"),
];

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/nav", get(nav_handler))
}

#[derive(Debug, Deserialize)]
struct NavQuery {
    #[serde(default)]
    path: String,
}

#[derive(Debug, Serialize)]
pub struct NavEntry {
    pub title: &'static str,
    pub url: &'static str,
    pub active: bool,
}

/// GET /nav?path= - the menu, with the entry exactly matching `path`
/// marked active.
async fn nav_handler(
    _user: CurrentUser,
    State(_state): State<Arc<AppState>>,
    Query(query): Query<NavQuery>,
) -> Json<Vec<NavEntry>> {
    let entries = MENU
        .iter()
        .map(|(title, url)| NavEntry {
            title,
            url,
            active: *url == query.path,
        })
        .collect();
    Json(entries)
}
