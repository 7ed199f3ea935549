#![allow(dead_code)]

use async_trait::async_trait;
use chrono::Utc;
use rusty_golf_picks::model::{
    DirectoryEntry, LeaderboardSnapshot, PlayerDirectory, PlayerStanding,
};
use rusty_golf_picks::source::{LeaderboardSource, PlayerDirectorySource, SourceError};
use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

pub fn standing(player_name: &str, rank: &str) -> PlayerStanding {
    PlayerStanding {
        rank: rank.to_string(),
        player_name: player_name.to_string(),
        today: "-2".to_string(),
        total_score: "-8".to_string(),
        round_scores: vec!["68".to_string(), "70".to_string()],
    }
}

pub fn snapshot(rows: &[(&str, &str)]) -> LeaderboardSnapshot {
    LeaderboardSnapshot::new(
        rows.iter().map(|(name, rank)| standing(name, rank)).collect(),
        Utc::now(),
    )
}

pub fn directory(names: &[&str]) -> PlayerDirectory {
    PlayerDirectory {
        entries: names
            .iter()
            .enumerate()
            .map(|(i, name)| DirectoryEntry {
                player_name: (*name).to_string(),
                profile_url: format!("https://www.pgatour.com/player/{i}/x"),
            })
            .collect(),
        fetched_at: Some(Utc::now()),
    }
}

pub fn five(prefix: &str) -> Vec<String> {
    (1..=5).map(|i| format!("{prefix}{i}")).collect()
}

/// Leaderboard that always answers the same way.
pub struct FakeLeaderboard {
    pub response: Result<LeaderboardSnapshot, SourceError>,
}

#[async_trait]
impl LeaderboardSource for FakeLeaderboard {
    async fn fetch_leaderboard(&self) -> Result<LeaderboardSnapshot, SourceError> {
        self.response.clone()
    }
}

/// Directory source that replays queued responses and counts calls.
/// Once the queue runs dry every call fails.
pub struct FakeDirectory {
    calls: AtomicUsize,
    responses: Mutex<VecDeque<Result<PlayerDirectory, SourceError>>>,
    delay: Option<Duration>,
}

impl FakeDirectory {
    pub fn new(responses: Vec<Result<PlayerDirectory, SourceError>>) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            responses: Mutex::new(responses.into()),
            delay: None,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PlayerDirectorySource for FakeDirectory {
    async fn fetch_directory(&self) -> Result<PlayerDirectory, SourceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let next = self.responses.lock().unwrap().pop_front();
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        next.unwrap_or_else(|| Err(SourceError::Transient("no more responses".to_string())))
    }
}
