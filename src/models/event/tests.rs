use std::str::FromStr;

use chrono::{TimeZone, Utc};
use uuid::Uuid;

use super::*;
use crate::models::Puppy;

fn birthdate() -> chrono::NaiveDate {
    chrono::NaiveDate::from_ymd_opt(2023, 11, 2).unwrap()
}

// ===== EventKind Tests =====

#[test]
fn test_kind_round_trip() {
    for kind in [EventKind::Pee, EventKind::Poop, EventKind::Both] {
        assert_eq!(EventKind::from_str(kind.as_str()).unwrap(), kind);
    }
}

#[test]
fn test_kind_unknown_string_fails() {
    let err = EventKind::from_str("wet").unwrap_err();
    assert_eq!(err.to_string(), "unknown event kind: wet");
}

#[test]
fn test_kind_serde_lowercase() {
    let json = serde_json::to_string(&EventKind::Both).unwrap();
    assert_eq!(json, "\"both\"");

    let kind: EventKind = serde_json::from_str("\"poop\"").unwrap();
    assert_eq!(kind, EventKind::Poop);
}

#[test]
fn test_kind_flags() {
    assert_eq!(EventKind::Pee.flags(), KindFlags { pee: true, poop: false });
    assert_eq!(EventKind::Poop.flags(), KindFlags { pee: false, poop: true });
    // One `both` event contributes to each tally without becoming two events
    assert_eq!(EventKind::Both.flags(), KindFlags { pee: true, poop: true });
}

// ===== Event Tests =====

#[test]
fn test_event_new_generates_uuid() {
    let ts = Utc.with_ymd_and_hms(2024, 3, 15, 8, 30, 0).unwrap();
    let event = Event::new("puppy-1", EventKind::Pee, ts);

    assert!(Uuid::parse_str(&event.id).is_ok());
    assert_eq!(event.puppy_id, "puppy-1");
    assert_eq!(event.kind, EventKind::Pee);
    assert_eq!(event.timestamp, ts);
    assert!(event.notes.is_none());
    assert!(event.photo_path.is_none());
}

#[test]
fn test_event_optional_fields_skipped_in_json() {
    let ts = Utc.with_ymd_and_hms(2024, 3, 15, 8, 30, 0).unwrap();
    let event = Event::new("puppy-1", EventKind::Pee, ts);
    let json = serde_json::to_string(&event).unwrap();

    assert!(!json.contains("notes"));
    assert!(!json.contains("photo_path"));
}

#[test]
fn test_event_serde_round_trip() {
    let ts = Utc.with_ymd_and_hms(2024, 3, 15, 21, 5, 0).unwrap();
    let mut event = Event::new("puppy-2", EventKind::Both, ts);
    event.notes = Some("after dinner".to_string());

    let json = serde_json::to_string(&event).unwrap();
    let parsed: Event = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, event);
}

#[test]
fn test_event_belongs_to() {
    let ts = Utc.with_ymd_and_hms(2024, 3, 15, 8, 30, 0).unwrap();
    let event = Event::new("puppy-1", EventKind::Pee, ts);

    assert!(event.belongs_to("puppy-1"));
    assert!(!event.belongs_to("puppy-2"));
}

// ===== Cascade Delete Tests =====

#[test]
fn test_remove_puppy_cascade() {
    let ts = Utc.with_ymd_and_hms(2024, 3, 15, 8, 30, 0).unwrap();
    let bello = Puppy::new("owner-1", "Bello", "Labrador", birthdate());
    let luna = Puppy::new("owner-1", "Luna", "Beagle", birthdate());

    let mut puppies = vec![bello.clone(), luna.clone()];
    let mut events = vec![
        Event::new(&bello.id, EventKind::Pee, ts),
        Event::new(&luna.id, EventKind::Poop, ts),
        Event::new(&bello.id, EventKind::Both, ts),
    ];

    assert!(remove_puppy_cascade(&mut puppies, &mut events, &bello.id));

    assert_eq!(puppies.len(), 1);
    assert_eq!(puppies[0].id, luna.id);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].puppy_id, luna.id);
}

#[test]
fn test_remove_puppy_cascade_unknown_id() {
    let ts = Utc.with_ymd_and_hms(2024, 3, 15, 8, 30, 0).unwrap();
    let bello = Puppy::new("owner-1", "Bello", "Labrador", birthdate());

    let mut puppies = vec![bello.clone()];
    let mut events = vec![Event::new(&bello.id, EventKind::Pee, ts)];

    assert!(!remove_puppy_cascade(&mut puppies, &mut events, "missing"));
    assert_eq!(puppies.len(), 1);
    assert_eq!(events.len(), 1);
}
