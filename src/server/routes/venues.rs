//! Venue listing: search, add, edit, remove. Images are optional base64
//! data URLs held in memory only.

use axum::extract::{Path, Query, State};
use axum::routing::{get, put};
use axum::{Json, Router};
use serde::Deserialize;
use std::sync::Arc;

use crate::model::{Venue, VenueStatus};
use crate::server::extract::CurrentUser;
use crate::server::routes::{check_image, roster_error, ApiError, MessageResponse};
use crate::server::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/venues", get(list_handler).post(create_handler))
        .route("/venues/{id}", put(update_handler).delete(delete_handler))
}

#[derive(Debug, Deserialize)]
struct SearchQuery {
    #[serde(default)]
    q: String,
}

/// Create form. Status is not accepted: a new venue is always Available.
#[derive(Debug, Deserialize)]
pub struct CreateVenue {
    pub name: String,
    pub location: String,
    pub capacity: u32,
    #[serde(default)]
    pub image: Option<String>,
}

/// Edit form, submitted from the pre-filled modal with every field.
#[derive(Debug, Deserialize)]
pub struct UpdateVenue {
    pub name: String,
    pub location: String,
    pub capacity: u32,
    #[serde(default)]
    pub image: Option<String>,
    pub status: VenueStatus,
}

/// GET /venues?q= - substring match on name or location.
async fn list_handler(
    _user: CurrentUser,
    State(state): State<Arc<AppState>>,
    Query(query): Query<SearchQuery>,
) -> Json<Vec<Venue>> {
    Json(state.venues.filter(&query.q))
}

/// POST /venues
async fn create_handler(
    _user: CurrentUser,
    State(state): State<Arc<AppState>>,
    Json(form): Json<CreateVenue>,
) -> Result<Json<Venue>, ApiError> {
    check_image(&form.image)?;
    let venue = Venue {
        id: 0,
        name: form.name,
        location: form.location,
        image: form.image,
        capacity: form.capacity,
        status: VenueStatus::Available,
    };
    let created = state.venues.create(venue).map_err(roster_error)?;
    Ok(Json(created))
}

/// PUT /venues/{id}
async fn update_handler(
    _user: CurrentUser,
    State(state): State<Arc<AppState>>,
    Path(id): Path<u32>,
    Json(form): Json<UpdateVenue>,
) -> Result<Json<Venue>, ApiError> {
    check_image(&form.image)?;
    let venue = Venue {
        id,
        name: form.name,
        location: form.location,
        image: form.image,
        capacity: form.capacity,
        status: form.status,
    };
    let updated = state.venues.update(id, venue).map_err(roster_error)?;
    Ok(Json(updated))
}

/// DELETE /venues/{id}
async fn delete_handler(
    _user: CurrentUser,
    State(state): State<Arc<AppState>>,
    Path(id): Path<u32>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.venues.remove(id).map_err(roster_error)?;
    Ok(Json(MessageResponse {
        message: "Venue removed".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_form_has_no_status_field() {
        let form: CreateVenue = serde_json::from_str(
            r#"{"name": "Main Auditorium", "location": "Building A", "capacity": 300}"#,
        )
        .unwrap();
        assert!(form.image.is_none());
        assert_eq!(form.capacity, 300);
    }

    #[test]
    fn test_update_form_requires_status() {
        let result: Result<UpdateVenue, _> = serde_json::from_str(
            r#"{"name": "Main Auditorium", "location": "Building A", "capacity": 300}"#,
        );
        assert!(result.is_err());

        let form: UpdateVenue = serde_json::from_str(
            r#"{"name": "Main Auditorium", "location": "Building A", "capacity": 300, "status": "Booked"}"#,
        )
        .unwrap();
        assert_eq!(form.status, VenueStatus::Booked);
    }
}
