use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct DirectoryEntry {
    pub player_name: String,
    pub profile_url: String,
}

/// Players announced for the upcoming tournament.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct PlayerDirectory {
    pub entries: Vec<DirectoryEntry>,
    pub fetched_at: Option<DateTime<Utc>>,
}

impl PlayerDirectory {
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
