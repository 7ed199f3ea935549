use super::{BetRegistry, RegistryError, validate_owner, validate_players};
use crate::model::BetEntry;
use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::info;

/// Process-local registry; entries are listed in insertion order.
#[derive(Default)]
pub struct MemoryBetRegistry {
    entries: RwLock<Vec<BetEntry>>,
}

impl MemoryBetRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BetRegistry for MemoryBetRegistry {
    async fn list_entries(&self, include_hidden: bool) -> Result<Vec<BetEntry>, RegistryError> {
        let entries = self.entries.read().await;
        Ok(entries
            .iter()
            .filter(|e| include_hidden || !e.hidden)
            .cloned()
            .collect())
    }

    async fn add(&self, owner: &str, players: Vec<String>) -> Result<BetEntry, RegistryError> {
        validate_owner(owner)?;
        validate_players(&players)?;

        let mut entries = self.entries.write().await;
        if entries.iter().any(|e| e.owner == owner) {
            info!(owner, "rejected duplicate owner");
            return Err(RegistryError::OwnerExists(owner.to_string()));
        }
        let entry = BetEntry {
            owner: owner.to_string(),
            players,
            hidden: false,
        };
        entries.push(entry.clone());
        Ok(entry)
    }

    async fn remove(&self, owner: &str) -> Result<bool, RegistryError> {
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|e| e.owner != owner);
        Ok(entries.len() != before)
    }

    async fn set_hidden(&self, owner: &str, hidden: bool) -> Result<(), RegistryError> {
        let mut entries = self.entries.write().await;
        let entry = entries
            .iter_mut()
            .find(|e| e.owner == owner)
            .ok_or_else(|| RegistryError::NotFound(owner.to_string()))?;
        entry.hidden = hidden;
        Ok(())
    }

    async fn replace_players(
        &self,
        owner: &str,
        players: Vec<String>,
    ) -> Result<(), RegistryError> {
        validate_players(&players)?;
        let mut entries = self.entries.write().await;
        let entry = entries
            .iter_mut()
            .find(|e| e.owner == owner)
            .ok_or_else(|| RegistryError::NotFound(owner.to_string()))?;
        entry.players = players;
        Ok(())
    }
}
