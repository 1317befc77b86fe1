//! Startup sample data for the page lists.
//!
//! Every roster is loaded from these at process start and mutated only in
//! memory afterwards; none of it is persisted.

use chrono::{NaiveDate, TimeZone, Utc};

use crate::model::{
    type_color, Activity, Approval, MultimediaEvent, Notification, NotificationKind,
    Participant, ParticipantStatus, RequestStatus, Venue, VenueStatus,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid seed date")
}

pub fn activities() -> Vec<Activity> {
    let entries = [
        (1, "Science Fair", date(2024, 10, 10), "Academic", "Annual science fair."),
        (2, "Sports Meet", date(2024, 10, 15), "Sports", "Inter-school sports meet."),
        (3, "Cultural Night", date(2024, 10, 20), "Cultural", "Music and dance night."),
    ];
    entries
        .into_iter()
        .map(|(id, title, date, event_type, description)| Activity {
            id,
            title: title.to_string(),
            date,
            event_type: event_type.to_string(),
            description: description.to_string(),
            color: type_color(event_type).to_string(),
        })
        .collect()
}

pub fn participants() -> Vec<Participant> {
    vec![
        Participant {
            id: 1,
            name: "Juan Dela Cruz".to_string(),
            email: "juan@email.com".to_string(),
            role: "Student".to_string(),
            status: ParticipantStatus::Registered,
        },
        Participant {
            id: 2,
            name: "Maria Santos".to_string(),
            email: "maria@email.com".to_string(),
            role: "Teacher".to_string(),
            status: ParticipantStatus::CheckedIn,
        },
        Participant {
            id: 3,
            name: "Pedro Reyes".to_string(),
            email: "pedro@email.com".to_string(),
            role: "Parent".to_string(),
            status: ParticipantStatus::Registered,
        },
    ]
}

pub fn venues() -> Vec<Venue> {
    vec![
        Venue {
            id: 1,
            name: "Main Auditorium".to_string(),
            location: "Building A, 2nd Floor".to_string(),
            image: None,
            capacity: 300,
            status: VenueStatus::Available,
        },
        Venue {
            id: 2,
            name: "Sports Complex".to_string(),
            location: "North Wing".to_string(),
            image: None,
            capacity: 500,
            status: VenueStatus::Booked,
        },
    ]
}

pub fn notifications() -> Vec<Notification> {
    vec![
        Notification {
            id: 1,
            kind: NotificationKind::Approval,
            title: "Event Approval Required".to_string(),
            message: "Winter Sports Meet needs your approval".to_string(),
            time: "2 hours ago".to_string(),
            read: false,
        },
        Notification {
            id: 2,
            kind: NotificationKind::Registration,
            title: "New Registration".to_string(),
            message: "15 new participants registered for Science Fair".to_string(),
            time: "5 hours ago".to_string(),
            read: false,
        },
        Notification {
            id: 3,
            kind: NotificationKind::Info,
            title: "System Update".to_string(),
            message: "School event system updated successfully.".to_string(),
            time: "1 day ago".to_string(),
            read: true,
        },
    ]
}

pub fn multimedia() -> Vec<MultimediaEvent> {
    vec![
        MultimediaEvent {
            id: 1,
            title: "School foundation day".to_string(),
            description: "A vibrant parade celebrating school pride and achievements.".to_string(),
            date: date(2025, 9, 15),
            image: None,
        },
        MultimediaEvent {
            id: 2,
            title: "sports fest".to_string(),
            description: "An energetic day filled with competitive sports and team spirit.".to_string(),
            date: date(2025, 9, 10),
            image: None,
        },
    ]
}

pub fn approvals() -> Vec<Approval> {
    vec![
        Approval {
            id: 1,
            event_title: "sports fest".to_string(),
            event_type: "Academic".to_string(),
            description: "An energetic day filled with competitive sports and team spirit."
                .to_string(),
            requested_by: "Juan Dela Cruz".to_string(),
            requested_at: Utc.with_ymd_and_hms(2024, 9, 15, 10, 30, 0).unwrap(),
            status: RequestStatus::Pending,
        },
        Approval {
            id: 2,
            event_title: "Sports Meet".to_string(),
            event_type: "Sports".to_string(),
            description: "Inter-school sports meet.".to_string(),
            requested_by: "Maria Santos".to_string(),
            requested_at: Utc.with_ymd_and_hms(2024, 9, 27, 14, 0, 0).unwrap(),
            status: RequestStatus::Approved,
        },
        Approval {
            id: 3,
            event_title: "Cultural Night".to_string(),
            event_type: "Cultural".to_string(),
            description: "Music and dance night.".to_string(),
            requested_by: "Pedro Reyes".to_string(),
            requested_at: Utc.with_ymd_and_hms(2024, 9, 26, 9, 0, 0).unwrap(),
            status: RequestStatus::Rejected,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_ids_are_unique_per_list() {
        let mut ids: Vec<u32> = activities().iter().map(|a| a.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), activities().len());

        let mut ids: Vec<u32> = participants().iter().map(|p| p.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), participants().len());
    }

    #[test]
    fn test_activity_colors_follow_type() {
        for activity in activities() {
            assert_eq!(activity.color, type_color(&activity.event_type));
        }
    }
}
