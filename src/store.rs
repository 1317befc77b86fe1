//! File-backed row store for the two persisted tables.
//!
//! `users` and `event_requests` are the only state that outlives the
//! process. Rows live in concurrent maps and are written through to JSON
//! files under the data directory on every mutation; both files are loaded
//! once at open. The store is where uniqueness lives: callers do not
//! pre-check emails, they surface whatever error the store reports.

use anyhow::{bail, Result};
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

use crate::model::{EventRequestRow, User};

#[derive(Debug, Default, Serialize, Deserialize)]
struct UsersFile {
    users: Vec<User>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct RequestsFile {
    event_requests: Vec<EventRequestRow>,
}

/// Row-level insert/select over the persisted tables.
pub struct TableStore {
    data_dir: PathBuf,
    users: DashMap<Uuid, User>,
    event_requests: DashMap<Uuid, EventRequestRow>,
}

impl TableStore {
    /// Open the store, creating the data directory and loading any
    /// previously written rows.
    pub fn open(data_dir: &Path) -> Result<Self> {
        fs::create_dir_all(data_dir)?;
        let store = Self {
            data_dir: data_dir.to_path_buf(),
            users: DashMap::new(),
            event_requests: DashMap::new(),
        };

        let users_path = store.users_path();
        if users_path.exists() {
            let json = fs::read_to_string(&users_path)?;
            let file: UsersFile = serde_json::from_str(&json)?;
            for user in file.users {
                store.users.insert(user.id, user);
            }
        }

        let requests_path = store.requests_path();
        if requests_path.exists() {
            let json = fs::read_to_string(&requests_path)?;
            let file: RequestsFile = serde_json::from_str(&json)?;
            for row in file.event_requests {
                store.event_requests.insert(row.id, row);
            }
        }

        eprintln!(
            "[store] loaded {} user(s), {} event request(s) from {}",
            store.users.len(),
            store.event_requests.len(),
            data_dir.display()
        );
        Ok(store)
    }

    fn users_path(&self) -> PathBuf {
        self.data_dir.join("users.json")
    }

    fn requests_path(&self) -> PathBuf {
        self.data_dir.join("event_requests.json")
    }

    /// Insert a user row. Email uniqueness is enforced here and nowhere
    /// else.
    pub fn insert_user(&self, user: User) -> Result<User> {
        if self.find_user_by_email(&user.email).is_some() {
            bail!("a user with email {} already exists", user.email);
        }
        self.users.insert(user.id, user.clone());
        self.save_users()?;
        Ok(user)
    }

    /// Select-by-email, the login query.
    pub fn find_user_by_email(&self, email: &str) -> Option<User> {
        self.users
            .iter()
            .find(|entry| entry.value().email == email)
            .map(|entry| entry.value().clone())
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    /// Insert an event-request row, one atomic write.
    pub fn insert_event_request(&self, row: EventRequestRow) -> Result<EventRequestRow> {
        self.event_requests.insert(row.id, row.clone());
        self.save_requests()?;
        Ok(row)
    }

    /// All stored request rows, most recent first.
    pub fn list_event_requests(&self) -> Vec<EventRequestRow> {
        let mut rows: Vec<EventRequestRow> = self
            .event_requests
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        rows.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at));
        rows
    }

    fn save_users(&self) -> Result<()> {
        let file = UsersFile {
            users: self.users.iter().map(|e| e.value().clone()).collect(),
        };
        let json = serde_json::to_string_pretty(&file)?;
        fs::write(self.users_path(), json)?;
        Ok(())
    }

    fn save_requests(&self) -> Result<()> {
        let file = RequestsFile {
            event_requests: self
                .event_requests
                .iter()
                .map(|e| e.value().clone())
                .collect(),
        };
        let json = serde_json::to_string_pretty(&file)?;
        fs::write(self.requests_path(), json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{RequestStatus, Role};
    use chrono::Utc;
    use tempfile::tempdir;

    fn user(email: &str) -> User {
        User {
            id: Uuid::new_v4(),
            name: "Juan Dela Cruz".to_string(),
            email: email.to_string(),
            password_hash: "$2b$10$abcdefghijklmnopqrstuv".to_string(),
            role: Role::Participant,
        }
    }

    fn request_row() -> EventRequestRow {
        EventRequestRow {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            event_title: "Science Fair".to_string(),
            event_type: "academic".to_string(),
            description: "Annual science fair.".to_string(),
            start_date: None,
            end_date: None,
            venue: "Main Auditorium".to_string(),
            expected_participants: Some(120),
            budget: Some(1500.0),
            objectives: String::new(),
            target_audience: String::new(),
            requirements: String::new(),
            committees: "[]".to_string(),
            status: RequestStatus::Pending,
            submitted_at: Utc::now(),
        }
    }

    #[test]
    fn test_users_survive_reopen() {
        let dir = tempdir().unwrap();
        {
            let store = TableStore::open(dir.path()).unwrap();
            store.insert_user(user("juan@email.com")).unwrap();
        }
        let store = TableStore::open(dir.path()).unwrap();
        let found = store.find_user_by_email("juan@email.com").unwrap();
        assert_eq!(found.name, "Juan Dela Cruz");
        assert_eq!(store.user_count(), 1);
    }

    #[test]
    fn test_duplicate_email_rejected() {
        let dir = tempdir().unwrap();
        let store = TableStore::open(dir.path()).unwrap();
        store.insert_user(user("juan@email.com")).unwrap();
        let err = store.insert_user(user("juan@email.com")).unwrap_err();
        assert!(err.to_string().contains("already exists"));
        assert_eq!(store.user_count(), 1);
    }

    #[test]
    fn test_find_user_misses_unknown_email() {
        let dir = tempdir().unwrap();
        let store = TableStore::open(dir.path()).unwrap();
        assert!(store.find_user_by_email("nobody@email.com").is_none());
    }

    #[test]
    fn test_event_requests_survive_reopen() {
        let dir = tempdir().unwrap();
        let row = request_row();
        {
            let store = TableStore::open(dir.path()).unwrap();
            store.insert_event_request(row.clone()).unwrap();
        }
        let store = TableStore::open(dir.path()).unwrap();
        let rows = store.list_event_requests();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, row.id);
        assert_eq!(rows[0].status, RequestStatus::Pending);
    }
}
