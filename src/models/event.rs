//! House-training event data model
//!
//! Defines the Event structure and its three-way kind classification,
//! plus the flag view the aggregation code counts with.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppError;

use super::puppy::Puppy;

/// What a single diary entry recorded
///
/// `Both` is one occurrence that counts toward the pee tally and the poop
/// tally at the same time; it is never two events. The three-way value is
/// the serialization contract; counting code goes through [`KindFlags`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Pee,
    Poop,
    Both,
}

impl EventKind {
    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Pee => "pee",
            EventKind::Poop => "poop",
            EventKind::Both => "both",
        }
    }

    /// Per-kind tally flags for this kind
    pub fn flags(self) -> KindFlags {
        match self {
            EventKind::Pee => KindFlags { pee: true, poop: false },
            EventKind::Poop => KindFlags { pee: false, poop: true },
            EventKind::Both => KindFlags { pee: true, poop: true },
        }
    }
}

impl FromStr for EventKind {
    type Err = AppError;

    /// Parse a kind string from the ingestion boundary
    ///
    /// Unknown strings are an input-contract violation and fail loudly.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pee" => Ok(EventKind::Pee),
            "poop" => Ok(EventKind::Poop),
            "both" => Ok(EventKind::Both),
            other => Err(AppError::UnknownEventKind(other.to_string())),
        }
    }
}

/// Which per-kind tallies an event contributes to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KindFlags {
    pub pee: bool,
    pub poop: bool,
}

impl From<EventKind> for KindFlags {
    fn from(kind: EventKind) -> Self {
        kind.flags()
    }
}

/// A single recorded house-training occurrence for a puppy
///
/// Immutable once created except for deletion. Owned by exactly one puppy;
/// referential integrity is the persistence collaborator's responsibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Event {
    /// Event unique ID (UUID)
    pub id: String,
    /// Owning puppy ID
    pub puppy_id: String,
    /// What was recorded
    pub kind: EventKind,
    /// When it happened
    pub timestamp: DateTime<Utc>,
    /// Optional free-text note
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Optional photo reference in the host application's storage
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_path: Option<String>,
}

impl Event {
    /// Create a new event with a fresh ID
    pub fn new(puppy_id: impl Into<String>, kind: EventKind, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            puppy_id: puppy_id.into(),
            kind,
            timestamp,
            notes: None,
            photo_path: None,
        }
    }

    /// Whether this event is owned by the given puppy
    pub fn belongs_to(&self, puppy_id: &str) -> bool {
        self.puppy_id == puppy_id
    }
}

/// Remove a puppy together with every event it owns
///
/// Event rows do not outlive their puppy; the aggregator never deletes, so
/// delete paths in the caller go through here. Returns whether a puppy with
/// the given ID was present.
pub fn remove_puppy_cascade(
    puppies: &mut Vec<Puppy>,
    events: &mut Vec<Event>,
    puppy_id: &str,
) -> bool {
    let before = puppies.len();
    puppies.retain(|p| p.id != puppy_id);
    events.retain(|e| !e.belongs_to(puppy_id));
    puppies.len() != before
}

#[cfg(test)]
mod tests;
