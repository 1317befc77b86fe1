//! Typed records for every page of the dashboard.
//!
//! Each list page works over one of these types; the persisted tables
//! (`users`, `event_requests`) live in [`crate::store`] but their row types
//! are defined here alongside the rest.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Account role, defaulting to the least privileged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Participant,
    Organizer,
    Admin,
}

/// A registered account. The password hash travels with the record because
/// the login response caches the full row, matching the stored shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
}

/// Fixed event-type palette for the calendar. Unknown types fall back to
/// the first entry's color.
pub const EVENT_TYPES: &[(&str, &str)] = &[
    ("Academic", "from-blue-400 to-blue-600"),
    ("Sports", "from-green-400 to-green-600"),
    ("Cultural", "from-pink-400 to-pink-600"),
    ("Other", "from-violet-400 to-violet-600"),
];

/// Gradient color for an event type label.
pub fn type_color(event_type: &str) -> &'static str {
    EVENT_TYPES
        .iter()
        .find(|(label, _)| *label == event_type)
        .map(|(_, color)| *color)
        .unwrap_or(EVENT_TYPES[0].1)
}

/// Calendar activity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    pub id: u32,
    pub title: String,
    pub date: NaiveDate,
    pub event_type: String,
    pub description: String,
    pub color: String,
}

/// Participant roster entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Participant {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub role: String,
    pub status: ParticipantStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParticipantStatus {
    Registered,
    #[serde(rename = "Checked In")]
    CheckedIn,
    Cancelled,
}

/// Venue listing. `image` is an optional base64 data URL held in memory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Venue {
    pub id: u32,
    pub name: String,
    pub location: String,
    #[serde(default)]
    pub image: Option<String>,
    pub capacity: u32,
    pub status: VenueStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VenueStatus {
    Available,
    Booked,
}

/// In-app notification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub id: u32,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub time: String,
    pub read: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Approval,
    Registration,
    Info,
}

/// Gallery entry on the multimedia page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MultimediaEvent {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub image: Option<String>,
}

/// Pending/approved/rejected request on the approvals page. Kept as its own
/// list with no key back into `event_requests`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Approval {
    pub id: u32,
    pub event_title: String,
    pub event_type: String,
    pub description: String,
    pub requested_by: String,
    pub requested_at: DateTime<Utc>,
    pub status: RequestStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequestStatus {
    Pending,
    Approved,
    Rejected,
}

/// Organizing committee member nested inside an event request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitteeMember {
    pub id: Uuid,
    pub name: String,
    pub role: String,
    pub email: String,
}

/// Persisted `event_requests` row. Committees are stored as one JSON-encoded
/// string, matching the table's column shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventRequestRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub event_title: String,
    pub event_type: String,
    pub description: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub venue: String,
    pub expected_participants: Option<u32>,
    pub budget: Option<f64>,
    pub objectives: String,
    pub target_audience: String,
    pub requirements: String,
    pub committees: String,
    pub status: RequestStatus,
    pub submitted_at: DateTime<Utc>,
}

impl EventRequestRow {
    /// Decode the committees blob back into members.
    pub fn committee_members(&self) -> serde_json::Result<Vec<CommitteeMember>> {
        serde_json::from_str(&self.committees)
    }
}
