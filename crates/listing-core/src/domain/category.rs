use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type CategoryId = i32;

/// Category entity - a uniquely named classification for listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Category {
    /// Rename the category, bumping `updated_at`.
    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.updated_at = Utc::now();
    }
}

/// A category that has not been stored yet; the store assigns the ID.
#[derive(Debug, Clone)]
pub struct NewCategory {
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl NewCategory {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            created_at: Utc::now(),
        }
    }
}
