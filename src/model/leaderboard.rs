use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One row of the scraped leaderboard. `rank` is kept exactly as published
/// ("1", "T5", "CUT", "WD", "-").
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct PlayerStanding {
    pub rank: String,
    pub player_name: String,
    pub today: String,
    pub total_score: String,
    pub round_scores: Vec<String>,
}

impl PlayerStanding {
    #[must_use]
    pub fn round_scores_display(&self) -> String {
        if self.round_scores.is_empty() {
            "N/A".to_string()
        } else {
            self.round_scores.join(", ")
        }
    }
}

/// Standings in site order at fetch time. A refetch builds a new snapshot.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct LeaderboardSnapshot {
    standings: Vec<PlayerStanding>,
    fetched_at: DateTime<Utc>,
}

impl LeaderboardSnapshot {
    #[must_use]
    pub fn new(standings: Vec<PlayerStanding>, fetched_at: DateTime<Utc>) -> Self {
        Self {
            standings,
            fetched_at,
        }
    }

    #[must_use]
    pub fn standings(&self) -> &[PlayerStanding] {
        &self.standings
    }

    #[must_use]
    pub fn fetched_at(&self) -> DateTime<Utc> {
        self.fetched_at
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.standings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.standings.is_empty()
    }

    /// First standing whose name matches exactly (case and accents included).
    #[must_use]
    pub fn find(&self, player_name: &str) -> Option<&PlayerStanding> {
        self.standings.iter().find(|s| s.player_name == player_name)
    }
}
