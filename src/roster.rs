//! Generic in-memory list manager backing every page-level list.
//!
//! All six list pages share the same contract: create with a fresh id
//! (max + 1), case-insensitive substring filtering over a fixed set of
//! fields, in-place update by id, and delete by id preserving order. The
//! per-page differences (which fields are searchable, which are required)
//! live in the [`Record`] impls.

use std::fmt;
use std::sync::RwLock;

use crate::model::{
    Activity, Approval, MultimediaEvent, Notification, Participant, Venue,
};

/// Error from a roster mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    /// A required field was empty on submit.
    MissingFields,
    /// No record with the given id.
    NotFound(u32),
}

impl fmt::Display for RosterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RosterError::MissingFields => write!(f, "All fields are required"),
            RosterError::NotFound(id) => write!(f, "No record with id {}", id),
        }
    }
}

impl std::error::Error for RosterError {}

/// A record that can live in a [`Roster`].
pub trait Record: Clone {
    fn id(&self) -> u32;
    fn set_id(&mut self, id: u32);

    /// The fields the free-text filter matches against.
    fn search_text(&self) -> Vec<&str>;

    /// Required-field check, run on create and update.
    fn validate(&self) -> Result<(), RosterError>;
}

fn all_present(fields: &[&str]) -> Result<(), RosterError> {
    if fields.iter().any(|f| f.trim().is_empty()) {
        Err(RosterError::MissingFields)
    } else {
        Ok(())
    }
}

/// Ordered list of records with interior mutability, private to the page
/// that owns it and alive only for the process lifetime.
pub struct Roster<T: Record> {
    items: RwLock<Vec<T>>,
}

impl<T: Record> Roster<T> {
    pub fn new(seed: Vec<T>) -> Self {
        Self {
            items: RwLock::new(seed),
        }
    }

    /// Validate and append, assigning id = max existing id + 1 (1 if empty).
    pub fn create(&self, mut item: T) -> Result<T, RosterError> {
        item.validate()?;
        let mut items = self.items.write().expect("roster lock");
        let next_id = items.iter().map(|i| i.id()).max().unwrap_or(0) + 1;
        item.set_id(next_id);
        items.push(item.clone());
        Ok(item)
    }

    /// The whole list in insertion order.
    pub fn list(&self) -> Vec<T> {
        self.items.read().expect("roster lock").clone()
    }

    /// Case-insensitive substring filter over each record's searchable
    /// fields. An empty query returns the full list unchanged.
    pub fn filter(&self, query: &str) -> Vec<T> {
        let query = query.to_lowercase();
        self.items
            .read()
            .expect("roster lock")
            .iter()
            .filter(|item| {
                query.is_empty()
                    || item
                        .search_text()
                        .iter()
                        .any(|field| field.to_lowercase().contains(&query))
            })
            .cloned()
            .collect()
    }

    pub fn get(&self, id: u32) -> Option<T> {
        self.items
            .read()
            .expect("roster lock")
            .iter()
            .find(|i| i.id() == id)
            .cloned()
    }

    /// Replace the record with matching id in place, preserving position.
    pub fn update(&self, id: u32, mut item: T) -> Result<T, RosterError> {
        item.validate()?;
        item.set_id(id);
        let mut items = self.items.write().expect("roster lock");
        match items.iter_mut().find(|i| i.id() == id) {
            Some(slot) => {
                *slot = item.clone();
                Ok(item)
            }
            None => Err(RosterError::NotFound(id)),
        }
    }

    /// Apply an edit to the record with matching id, returning the updated
    /// copy. Used for single-field transitions (mark read, approve).
    pub fn modify(&self, id: u32, edit: impl FnOnce(&mut T)) -> Result<T, RosterError> {
        let mut items = self.items.write().expect("roster lock");
        match items.iter_mut().find(|i| i.id() == id) {
            Some(slot) => {
                edit(slot);
                Ok(slot.clone())
            }
            None => Err(RosterError::NotFound(id)),
        }
    }

    /// Remove the record with matching id; all others keep their relative
    /// order.
    pub fn remove(&self, id: u32) -> Result<(), RosterError> {
        let mut items = self.items.write().expect("roster lock");
        let before = items.len();
        items.retain(|i| i.id() != id);
        if items.len() == before {
            Err(RosterError::NotFound(id))
        } else {
            Ok(())
        }
    }

    pub fn len(&self) -> usize {
        self.items.read().expect("roster lock").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Record for Activity {
    fn id(&self) -> u32 {
        self.id
    }
    fn set_id(&mut self, id: u32) {
        self.id = id;
    }
    fn search_text(&self) -> Vec<&str> {
        vec![&self.title, &self.description]
    }
    fn validate(&self) -> Result<(), RosterError> {
        all_present(&[&self.title, &self.event_type])
    }
}

impl Record for Participant {
    fn id(&self) -> u32 {
        self.id
    }
    fn set_id(&mut self, id: u32) {
        self.id = id;
    }
    fn search_text(&self) -> Vec<&str> {
        vec![&self.name, &self.email, &self.role]
    }
    fn validate(&self) -> Result<(), RosterError> {
        all_present(&[&self.name, &self.email, &self.role])
    }
}

impl Record for Venue {
    fn id(&self) -> u32 {
        self.id
    }
    fn set_id(&mut self, id: u32) {
        self.id = id;
    }
    fn search_text(&self) -> Vec<&str> {
        vec![&self.name, &self.location]
    }
    fn validate(&self) -> Result<(), RosterError> {
        all_present(&[&self.name, &self.location])
    }
}

impl Record for Notification {
    fn id(&self) -> u32 {
        self.id
    }
    fn set_id(&mut self, id: u32) {
        self.id = id;
    }
    fn search_text(&self) -> Vec<&str> {
        vec![&self.title, &self.message]
    }
    fn validate(&self) -> Result<(), RosterError> {
        all_present(&[&self.title, &self.message])
    }
}

impl Record for MultimediaEvent {
    fn id(&self) -> u32 {
        self.id
    }
    fn set_id(&mut self, id: u32) {
        self.id = id;
    }
    fn search_text(&self) -> Vec<&str> {
        vec![&self.title, &self.description]
    }
    fn validate(&self) -> Result<(), RosterError> {
        all_present(&[&self.title, &self.description])
    }
}

impl Record for Approval {
    fn id(&self) -> u32 {
        self.id
    }
    fn set_id(&mut self, id: u32) {
        self.id = id;
    }
    fn search_text(&self) -> Vec<&str> {
        vec![&self.event_title, &self.description]
    }
    fn validate(&self) -> Result<(), RosterError> {
        all_present(&[&self.event_title, &self.event_type, &self.requested_by])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ParticipantStatus;

    fn participant(id: u32, name: &str, email: &str, role: &str) -> Participant {
        Participant {
            id,
            name: name.to_string(),
            email: email.to_string(),
            role: role.to_string(),
            status: ParticipantStatus::Registered,
        }
    }

    fn seeded() -> Roster<Participant> {
        Roster::new(vec![
            participant(1, "Juan Dela Cruz", "juan@email.com", "Student"),
            participant(2, "Maria Santos", "maria@email.com", "Teacher"),
            participant(3, "Pedro Reyes", "pedro@email.com", "Parent"),
        ])
    }

    #[test]
    fn test_create_assigns_max_plus_one() {
        let roster = seeded();
        let created = roster
            .create(participant(0, "Ana Lim", "ana@email.com", "Student"))
            .unwrap();
        assert_eq!(created.id, 4);
        assert_eq!(roster.len(), 4);
    }

    #[test]
    fn test_create_on_empty_starts_at_one() {
        let roster: Roster<Participant> = Roster::new(Vec::new());
        let created = roster
            .create(participant(0, "Ana Lim", "ana@email.com", "Student"))
            .unwrap();
        assert_eq!(created.id, 1);
    }

    #[test]
    fn test_create_after_delete_does_not_reuse_live_id() {
        let roster = seeded();
        roster.remove(2).unwrap();
        let created = roster
            .create(participant(0, "Ana Lim", "ana@email.com", "Student"))
            .unwrap();
        // Max live id is 3, so the new record gets 4.
        assert_eq!(created.id, 4);
    }

    #[test]
    fn test_create_rejects_empty_required_field() {
        let roster = seeded();
        let err = roster
            .create(participant(0, "", "ana@email.com", "Student"))
            .unwrap_err();
        assert_eq!(err, RosterError::MissingFields);
        assert_eq!(roster.len(), 3);
    }

    #[test]
    fn test_filter_is_case_insensitive_substring() {
        let roster = seeded();
        let hits = roster.filter("MARIA");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Maria Santos");

        // Matches the role field too.
        let hits = roster.filter("teach");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 2);
    }

    #[test]
    fn test_empty_query_returns_full_list_in_order() {
        let roster = seeded();
        let all = roster.filter("");
        assert_eq!(all.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn test_update_replaces_in_place() {
        let roster = seeded();
        let updated = roster
            .update(2, participant(999, "Maria Cruz", "maria@email.com", "Teacher"))
            .unwrap();
        assert_eq!(updated.id, 2);
        let ids: Vec<u32> = roster.list().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(roster.get(2).unwrap().name, "Maria Cruz");
    }

    #[test]
    fn test_update_unknown_id_errors() {
        let roster = seeded();
        let err = roster
            .update(42, participant(0, "Ana", "ana@email.com", "Student"))
            .unwrap_err();
        assert_eq!(err, RosterError::NotFound(42));
    }

    #[test]
    fn test_remove_preserves_order_of_rest() {
        let roster = seeded();
        roster.remove(2).unwrap();
        let ids: Vec<u32> = roster.list().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert!(roster.remove(2).is_err());
    }
}
