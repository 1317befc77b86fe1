//! Calendar of activities: the month grid plus activity CRUD.
//!
//! Day cells carry the activities whose date equals the cell date exactly;
//! there is no range or recurrence logic.

use axum::extract::{Path, Query, State};
use axum::routing::{get, put};
use axum::{Json, Router};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::calendar::{month_grid, next_month, prev_month};
use crate::model::{type_color, Activity};
use crate::server::extract::CurrentUser;
use crate::server::routes::{bad_request, roster_error, ApiError, MessageResponse};
use crate::server::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/calendar/grid", get(grid_handler))
        .route("/calendar/nav", get(nav_handler))
        .route(
            "/calendar/activities",
            get(list_handler).post(create_handler),
        )
        .route(
            "/calendar/activities/{id}",
            put(update_handler).delete(delete_handler),
        )
}

#[derive(Debug, Deserialize)]
struct MonthQuery {
    year: i32,
    month: u32,
}

#[derive(Debug, Deserialize)]
struct NavQuery {
    year: i32,
    month: u32,
    step: NavStep,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
enum NavStep {
    Prev,
    Next,
}

#[derive(Debug, Serialize)]
pub struct GridCell {
    pub day: Option<u32>,
    pub date: Option<NaiveDate>,
    pub activities: Vec<Activity>,
}

#[derive(Debug, Serialize)]
pub struct GridResponse {
    pub year: i32,
    pub month: u32,
    pub label: String,
    pub weeks: Vec<Vec<GridCell>>,
}

#[derive(Debug, Serialize)]
pub struct MonthResponse {
    pub year: i32,
    pub month: u32,
}

/// Form for both create and update. Color is derived from the type, never
/// submitted.
#[derive(Debug, Deserialize)]
pub struct ActivityForm {
    pub title: String,
    pub date: NaiveDate,
    pub event_type: String,
    #[serde(default)]
    pub description: String,
}

impl ActivityForm {
    fn into_activity(self) -> Activity {
        let color = type_color(&self.event_type).to_string();
        Activity {
            id: 0,
            title: self.title,
            date: self.date,
            event_type: self.event_type,
            description: self.description,
            color,
        }
    }
}

/// GET /calendar/grid?year=&month= - the fixed 6x7 layout with activities
/// attached to their day cells.
async fn grid_handler(
    _user: CurrentUser,
    State(state): State<Arc<AppState>>,
    Query(query): Query<MonthQuery>,
) -> Result<Json<GridResponse>, ApiError> {
    let weeks = month_grid(query.year, query.month)
        .ok_or_else(|| bad_request("invalid year or month"))?;
    let first = NaiveDate::from_ymd_opt(query.year, query.month, 1)
        .ok_or_else(|| bad_request("invalid year or month"))?;

    let activities = state.activities.list();
    let weeks = weeks
        .into_iter()
        .map(|week| {
            week.into_iter()
                .map(|cell| {
                    let on_day = match cell.date {
                        Some(date) => activities
                            .iter()
                            .filter(|a| a.date == date)
                            .cloned()
                            .collect(),
                        None => Vec::new(),
                    };
                    GridCell {
                        day: cell.day,
                        date: cell.date,
                        activities: on_day,
                    }
                })
                .collect()
        })
        .collect();

    Ok(Json(GridResponse {
        year: query.year,
        month: query.month,
        label: first.format("%B %Y").to_string(),
        weeks,
    }))
}

/// GET /calendar/nav?year=&month=&step=prev|next - step one month with
/// Dec<->Jan wrapping.
async fn nav_handler(
    _user: CurrentUser,
    Query(query): Query<NavQuery>,
) -> Result<Json<MonthResponse>, ApiError> {
    if !(1..=12).contains(&query.month) {
        return Err(bad_request("invalid year or month"));
    }
    let (year, month) = match query.step {
        NavStep::Prev => prev_month(query.year, query.month),
        NavStep::Next => next_month(query.year, query.month),
    };
    Ok(Json(MonthResponse { year, month }))
}

#[derive(Debug, Deserialize)]
struct DateQuery {
    date: Option<NaiveDate>,
}

/// GET /calendar/activities?date= - exact-date filter, or the whole list.
async fn list_handler(
    _user: CurrentUser,
    State(state): State<Arc<AppState>>,
    Query(query): Query<DateQuery>,
) -> Json<Vec<Activity>> {
    let activities = match query.date {
        Some(date) => state
            .activities
            .list()
            .into_iter()
            .filter(|a| a.date == date)
            .collect(),
        None => state.activities.list(),
    };
    Json(activities)
}

/// POST /calendar/activities - add an event.
async fn create_handler(
    _user: CurrentUser,
    State(state): State<Arc<AppState>>,
    Json(form): Json<ActivityForm>,
) -> Result<Json<Activity>, ApiError> {
    let created = state
        .activities
        .create(form.into_activity())
        .map_err(roster_error)?;
    Ok(Json(created))
}

/// PUT /calendar/activities/{id} - update in place.
async fn update_handler(
    _user: CurrentUser,
    State(state): State<Arc<AppState>>,
    Path(id): Path<u32>,
    Json(form): Json<ActivityForm>,
) -> Result<Json<Activity>, ApiError> {
    let updated = state
        .activities
        .update(id, form.into_activity())
        .map_err(roster_error)?;
    Ok(Json(updated))
}

/// DELETE /calendar/activities/{id}
async fn delete_handler(
    _user: CurrentUser,
    State(state): State<Arc<AppState>>,
    Path(id): Path<u32>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.activities.remove(id).map_err(roster_error)?;
    Ok(Json(MessageResponse {
        message: "The event was deleted.".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_form_derives_color_from_type() {
        let form: ActivityForm = serde_json::from_str(
            r#"{"title": "Sports Meet", "date": "2024-10-15", "event_type": "Sports"}"#,
        )
        .unwrap();
        let activity = form.into_activity();
        assert_eq!(activity.color, "from-green-400 to-green-600");
        assert_eq!(activity.description, "");
    }

    #[test]
    fn test_nav_step_deserialize() {
        let step: NavStep = serde_json::from_str("\"prev\"").unwrap();
        assert!(matches!(step, NavStep::Prev));
    }
}
