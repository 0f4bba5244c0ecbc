//! Puppy data model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A puppy whose house-training progress is being tracked
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Puppy {
    /// Puppy unique ID (UUID)
    pub id: String,
    /// Owning user ID
    pub owner_id: String,
    /// Display name
    pub name: String,
    /// Breed description
    pub breed: String,
    /// Date of birth
    pub birthdate: NaiveDate,
    /// Optional photo reference in the host application's storage
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_path: Option<String>,
    /// Creation time
    pub created_at: DateTime<Utc>,
    /// Last update time
    pub updated_at: DateTime<Utc>,
}

impl Puppy {
    /// Create a new puppy with a fresh ID
    pub fn new(
        owner_id: impl Into<String>,
        name: impl Into<String>,
        breed: impl Into<String>,
        birthdate: NaiveDate,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            owner_id: owner_id.into(),
            name: name.into(),
            breed: breed.into(),
            birthdate,
            photo_path: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Record that the puppy's profile was edited
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
