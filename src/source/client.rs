use super::{LeaderboardSource, PlayerDirectorySource, SourceError};
use crate::model::{LeaderboardSnapshot, PlayerDirectory};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{info, warn};

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/119.0.0.0 Safari/537.36";

pub const DEFAULT_LEADERBOARD_URL: &str = "https://www.pgatour.com/leaderboard";
pub const DEFAULT_TOURNAMENT_URL: &str =
    "https://www.pgatour.com/tournaments/2025/the-genesis-invitational/R2025007";

/// Scrapes pgatour.com. Every request is bounded by the client timeout so a
/// hung page surfaces as `SourceError::Transient` instead of blocking.
pub struct PgaTourClient {
    http: Client,
    leaderboard_url: String,
    tournament_url: String,
}

impl PgaTourClient {
    /// # Errors
    ///
    /// Will return `Err` if the underlying http client cannot be built
    pub fn new(
        leaderboard_url: impl Into<String>,
        tournament_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, SourceError> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;
        Ok(Self {
            http,
            leaderboard_url: leaderboard_url.into(),
            tournament_url: tournament_url.into(),
        })
    }

    async fn get_html(&self, url: &str) -> Result<String, SourceError> {
        let resp = self.http.get(url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(SourceError::Transient(format!("{url} returned {status}")));
        }
        Ok(resp.text().await?)
    }
}

#[async_trait]
impl LeaderboardSource for PgaTourClient {
    async fn fetch_leaderboard(&self) -> Result<LeaderboardSnapshot, SourceError> {
        let html = self.get_html(&self.leaderboard_url).await.inspect_err(|e| {
            warn!(url = %self.leaderboard_url, error = %e, "leaderboard fetch failed");
        })?;
        let snapshot = super::leaderboard::parse_leaderboard_html(&html, chrono::Utc::now())?;
        info!(players = snapshot.len(), "fetched leaderboard");
        Ok(snapshot)
    }
}

#[async_trait]
impl PlayerDirectorySource for PgaTourClient {
    async fn fetch_directory(&self) -> Result<PlayerDirectory, SourceError> {
        let html = self.get_html(&self.tournament_url).await?;
        let directory = super::directory::parse_directory_html(&html, chrono::Utc::now())?;
        info!(players = directory.entries.len(), "fetched upcoming players");
        Ok(directory)
    }
}
