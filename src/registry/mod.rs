pub mod memory;
pub mod sqlite;

use crate::model::{BetEntry, PLAYERS_PER_ENTRY};
use async_trait::async_trait;
use thiserror::Error;

pub use memory::MemoryBetRegistry;
pub use sqlite::SqliteBetRegistry;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("owner is required")]
    OwnerMissing,
    #[error("expected {expected} players, got {actual}")]
    WrongPlayerCount { expected: usize, actual: usize },
    #[error("owner already has an entry: {0}")]
    OwnerExists(String),
    #[error("no entry for owner: {0}")]
    NotFound(String),
    #[error("storage error: {0}")]
    Storage(String),
}

impl From<rusqlite::Error> for RegistryError {
    fn from(err: rusqlite::Error) -> Self {
        Self::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for RegistryError {
    fn from(err: serde_json::Error) -> Self {
        Self::Storage(err.to_string())
    }
}

/// Named entries of exactly five players, unique by owner.
///
/// Every mutation validates first; a rejected call leaves the store as it was.
#[async_trait]
pub trait BetRegistry: Send + Sync {
    async fn list_entries(&self, include_hidden: bool) -> Result<Vec<BetEntry>, RegistryError>;
    async fn add(&self, owner: &str, players: Vec<String>) -> Result<BetEntry, RegistryError>;
    async fn remove(&self, owner: &str) -> Result<bool, RegistryError>;
    async fn set_hidden(&self, owner: &str, hidden: bool) -> Result<(), RegistryError>;
    async fn replace_players(&self, owner: &str, players: Vec<String>)
    -> Result<(), RegistryError>;
}

/// # Errors
///
/// Will return `Err` if the owner is blank
pub fn validate_owner(owner: &str) -> Result<(), RegistryError> {
    if owner.trim().is_empty() {
        return Err(RegistryError::OwnerMissing);
    }
    Ok(())
}

/// # Errors
///
/// Will return `Err` unless exactly five players are given
pub fn validate_players(players: &[String]) -> Result<(), RegistryError> {
    if players.len() != PLAYERS_PER_ENTRY {
        return Err(RegistryError::WrongPlayerCount {
            expected: PLAYERS_PER_ENTRY,
            actual: players.len(),
        });
    }
    Ok(())
}
