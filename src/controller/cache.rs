use crate::model::PlayerDirectory;
use crate::source::{PlayerDirectorySource, SourceError};
use chrono::{DateTime, Duration, Utc};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

pub const DEFAULT_TTL_MINUTES: i64 = 120;

/// What the last refresh attempt produced. Callers of
/// `get_upcoming_players` only ever see a directory; this is for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheOutcome {
    NeverFetched,
    Fresh,
    Failed(SourceError),
}

struct CacheSlot {
    data: Arc<PlayerDirectory>,
    fetched_at: DateTime<Utc>,
}

struct CacheState {
    slot: Option<CacheSlot>,
    outcome: CacheOutcome,
}

/// Time-boxed cache in front of the upcoming-players fetch.
///
/// The lock is held for the whole refresh, so concurrent callers that find the
/// slot stale wait for the single in-flight fetch and then read its result.
pub struct UpcomingPlayersCache {
    source: Arc<dyn PlayerDirectorySource>,
    ttl: Duration,
    state: Mutex<CacheState>,
}

impl UpcomingPlayersCache {
    #[must_use]
    pub fn new(source: Arc<dyn PlayerDirectorySource>, ttl: Duration) -> Self {
        Self {
            source,
            ttl,
            state: Mutex::new(CacheState {
                slot: None,
                outcome: CacheOutcome::NeverFetched,
            }),
        }
    }

    #[must_use]
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub async fn get_upcoming_players(&self) -> Arc<PlayerDirectory> {
        self.get_upcoming_players_at(Utc::now()).await
    }

    /// Same as `get_upcoming_players` with the clock supplied by the caller.
    pub async fn get_upcoming_players_at(&self, now: DateTime<Utc>) -> Arc<PlayerDirectory> {
        let mut state = self.state.lock().await;

        if let Some(slot) = &state.slot {
            if now - slot.fetched_at <= self.ttl {
                debug!("upcoming players served from cache");
                return Arc::clone(&slot.data);
            }
        }

        let (data, outcome) = match self.source.fetch_directory().await {
            Ok(directory) if !directory.is_empty() => {
                info!(players = directory.entries.len(), "upcoming players refreshed");
                (Arc::new(directory), CacheOutcome::Fresh)
            }
            Ok(_) => {
                warn!("upcoming players fetch returned nothing, caching empty list");
                (Arc::new(PlayerDirectory::empty()), CacheOutcome::Failed(SourceError::Empty))
            }
            Err(e) => {
                warn!(error = %e, "upcoming players fetch failed, caching empty list");
                (Arc::new(PlayerDirectory::empty()), CacheOutcome::Failed(e))
            }
        };

        // data and timestamp are replaced together under the lock
        state.slot = Some(CacheSlot {
            data: Arc::clone(&data),
            fetched_at: now,
        });
        state.outcome = outcome;
        data
    }

    /// Drops the cached slot so the next read fetches again.
    pub async fn force_refresh(&self) {
        let mut state = self.state.lock().await;
        state.slot = None;
    }

    pub async fn last_outcome(&self) -> CacheOutcome {
        self.state.lock().await.outcome.clone()
    }
}
