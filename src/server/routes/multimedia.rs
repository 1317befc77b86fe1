//! Multimedia gallery: search, add, edit, remove past-event entries.

use axum::extract::{Path, Query, State};
use axum::routing::{get, put};
use axum::{Json, Router};
use chrono::NaiveDate;
use serde::Deserialize;
use std::sync::Arc;

use crate::model::MultimediaEvent;
use crate::server::extract::CurrentUser;
use crate::server::routes::{check_image, roster_error, ApiError, MessageResponse};
use crate::server::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/multimedia", get(list_handler).post(create_handler))
        .route(
            "/multimedia/{id}",
            put(update_handler).delete(delete_handler),
        )
}

#[derive(Debug, Deserialize)]
struct SearchQuery {
    #[serde(default)]
    q: String,
}

#[derive(Debug, Deserialize)]
pub struct MultimediaForm {
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub image: Option<String>,
}

impl MultimediaForm {
    fn into_event(self) -> MultimediaEvent {
        MultimediaEvent {
            id: 0,
            title: self.title,
            description: self.description,
            date: self.date,
            image: self.image,
        }
    }
}

/// GET /multimedia?q= - substring match on title or description.
async fn list_handler(
    _user: CurrentUser,
    State(state): State<Arc<AppState>>,
    Query(query): Query<SearchQuery>,
) -> Json<Vec<MultimediaEvent>> {
    Json(state.multimedia.filter(&query.q))
}

/// POST /multimedia
async fn create_handler(
    _user: CurrentUser,
    State(state): State<Arc<AppState>>,
    Json(form): Json<MultimediaForm>,
) -> Result<Json<MultimediaEvent>, ApiError> {
    check_image(&form.image)?;
    let created = state
        .multimedia
        .create(form.into_event())
        .map_err(roster_error)?;
    Ok(Json(created))
}

/// PUT /multimedia/{id}
async fn update_handler(
    _user: CurrentUser,
    State(state): State<Arc<AppState>>,
    Path(id): Path<u32>,
    Json(form): Json<MultimediaForm>,
) -> Result<Json<MultimediaEvent>, ApiError> {
    check_image(&form.image)?;
    let updated = state
        .multimedia
        .update(id, form.into_event())
        .map_err(roster_error)?;
    Ok(Json(updated))
}

/// DELETE /multimedia/{id}
async fn delete_handler(
    _user: CurrentUser,
    State(state): State<Arc<AppState>>,
    Path(id): Path<u32>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.multimedia.remove(id).map_err(roster_error)?;
    Ok(Json(MessageResponse {
        message: "Event removed".to_string(),
    }))
}
