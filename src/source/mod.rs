pub mod client;
pub mod directory;
pub mod leaderboard;

use crate::model::{LeaderboardSnapshot, PlayerDirectory};
use async_trait::async_trait;
use thiserror::Error;

pub use client::PgaTourClient;

/// Why a fetch from the tournament site produced nothing usable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    /// Network failure, timeout or a non-2xx response.
    #[error("transient fetch error: {0}")]
    Transient(String),
    /// The page no longer has the shape the parser expects.
    #[error("source changed shape: {0}")]
    Shape(String),
    #[error("source returned no players")]
    Empty,
}

impl From<reqwest::Error> for SourceError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transient(err.to_string())
    }
}

#[async_trait]
pub trait LeaderboardSource: Send + Sync {
    async fn fetch_leaderboard(&self) -> Result<LeaderboardSnapshot, SourceError>;
}

#[async_trait]
pub trait PlayerDirectorySource: Send + Sync {
    async fn fetch_directory(&self) -> Result<PlayerDirectory, SourceError>;
}
