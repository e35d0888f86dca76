use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::HabitId;

/// A habit scheduled for a day, as reported by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Habit {
    id: HabitId,
    #[serde(default)]
    title: String,
    #[serde(default)]
    created_at: Option<DateTime<Utc>>,
}

impl Habit {
    #[must_use]
    pub fn new(id: impl Into<HabitId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            created_at: None,
        }
    }

    #[must_use]
    pub fn id(&self) -> &HabitId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }
}
