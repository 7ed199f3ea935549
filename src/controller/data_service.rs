use crate::controller::cache::UpcomingPlayersCache;
use crate::error::AppError;
use crate::model::{BetEntry, BetResult, LeaderboardSnapshot, PlayerDirectory};
use crate::registry::BetRegistry;
use crate::score::score_all;
use crate::source::LeaderboardSource;
use std::sync::Arc;
use tracing::warn;

/// Wires the leaderboard source, the bet registry and the upcoming-players
/// cache together. Built once in `main` and shared by every request.
#[derive(Clone)]
pub struct PicksService {
    leaderboard: Arc<dyn LeaderboardSource>,
    registry: Arc<dyn BetRegistry>,
    upcoming: Arc<UpcomingPlayersCache>,
}

impl PicksService {
    #[must_use]
    pub fn new(
        leaderboard: Arc<dyn LeaderboardSource>,
        registry: Arc<dyn BetRegistry>,
        upcoming: Arc<UpcomingPlayersCache>,
    ) -> Self {
        Self {
            leaderboard,
            registry,
            upcoming,
        }
    }

    /// # Errors
    ///
    /// Will return `Err` if the leaderboard fetch fails; an unavailable
    /// leaderboard is never turned into an empty one
    pub async fn leaderboard(&self) -> Result<LeaderboardSnapshot, AppError> {
        self.leaderboard.fetch_leaderboard().await.map_err(|e| {
            warn!(error = %e, "leaderboard unavailable");
            AppError::SourceUnavailable(e)
        })
    }

    /// Scores every entry against a fresh leaderboard, best standing first.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the registry read or the leaderboard fetch fails
    pub async fn results(&self, include_hidden: bool) -> Result<Vec<BetResult>, AppError> {
        let entries = self.registry.list_entries(include_hidden).await?;
        let snapshot = self.leaderboard().await?;
        Ok(score_all(&entries, &snapshot))
    }

    pub async fn upcoming_players(&self) -> Arc<PlayerDirectory> {
        self.upcoming.get_upcoming_players().await
    }

    /// # Errors
    ///
    /// Will return `Err` if the registry read fails
    pub async fn list_entries(&self, include_hidden: bool) -> Result<Vec<BetEntry>, AppError> {
        Ok(self.registry.list_entries(include_hidden).await?)
    }

    /// # Errors
    ///
    /// Will return `Err` on a blank owner, a duplicate owner or a player count other than five
    pub async fn add_entry(&self, owner: &str, players: Vec<String>) -> Result<BetEntry, AppError> {
        Ok(self.registry.add(owner, players).await?)
    }

    /// # Errors
    ///
    /// Will return `Err` if the registry write fails
    pub async fn remove_entry(&self, owner: &str) -> Result<bool, AppError> {
        Ok(self.registry.remove(owner).await?)
    }

    /// # Errors
    ///
    /// Will return `Err` if the owner has no entry
    pub async fn set_hidden(&self, owner: &str, hidden: bool) -> Result<(), AppError> {
        Ok(self.registry.set_hidden(owner, hidden).await?)
    }

    /// # Errors
    ///
    /// Will return `Err` if the owner has no entry or the player count is not five
    pub async fn replace_players(&self, owner: &str, players: Vec<String>) -> Result<(), AppError> {
        Ok(self.registry.replace_players(owner, players).await?)
    }
}
