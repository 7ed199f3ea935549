use super::{BetRegistry, RegistryError, validate_owner, validate_players};
use crate::model::BetEntry;
use async_trait::async_trait;
use rusqlite::{Connection, ErrorCode, params};
use std::path::Path;
use std::sync::Mutex;
use tracing::info;

const SCHEMA: &str = include_str!("../sql/schema/sqlite/00_bet_entry.sql");

/// Registry backed by a single SQLite connection. Owner uniqueness is the
/// table's `unq_owner` constraint; all writes go through the one connection.
pub struct SqliteBetRegistry {
    conn: Mutex<Connection>,
}

impl SqliteBetRegistry {
    /// Opens (or creates) the database file. `:memory:` gives a private
    /// in-memory database.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the file cannot be opened or the schema cannot be created
    pub fn open(path: impl AsRef<Path>) -> Result<Self, RegistryError> {
        let conn = Connection::open(path)?;
        Self::with_connection(conn)
    }

    /// # Errors
    ///
    /// Will return `Err` if the schema cannot be created
    pub fn with_connection(conn: Connection) -> Result<Self, RegistryError> {
        conn.execute_batch(SCHEMA)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn with_conn<T>(
        &self,
        f: impl FnOnce(&Connection) -> Result<T, RegistryError>,
    ) -> Result<T, RegistryError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| RegistryError::Storage(e.to_string()))?;
        f(&conn)
    }
}

fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _) if e.code == ErrorCode::ConstraintViolation
    )
}

fn list(conn: &Connection, include_hidden: bool) -> Result<Vec<BetEntry>, RegistryError> {
    let query = if include_hidden {
        "SELECT owner, players, hidden FROM bet_entry ORDER BY id"
    } else {
        "SELECT owner, players, hidden FROM bet_entry WHERE hidden = 0 ORDER BY id"
    };
    let mut stmt = conn.prepare(query)?;
    let rows = stmt
        .query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, bool>(2)?,
            ))
        })?
        .collect::<Result<Vec<_>, _>>()?;

    rows.into_iter()
        .map(|(owner, players, hidden)| -> Result<BetEntry, RegistryError> {
            Ok(BetEntry {
                owner,
                players: serde_json::from_str(&players)?,
                hidden,
            })
        })
        .collect()
}

#[async_trait]
impl BetRegistry for SqliteBetRegistry {
    async fn list_entries(&self, include_hidden: bool) -> Result<Vec<BetEntry>, RegistryError> {
        self.with_conn(|conn| list(conn, include_hidden))
    }

    async fn add(&self, owner: &str, players: Vec<String>) -> Result<BetEntry, RegistryError> {
        validate_owner(owner)?;
        validate_players(&players)?;
        let players_json = serde_json::to_string(&players)?;

        self.with_conn(|conn| {
            match conn.execute(
                "INSERT INTO bet_entry (owner, players, hidden) VALUES (?1, ?2, 0)",
                params![owner, players_json],
            ) {
                Ok(_) => Ok(()),
                Err(e) if is_unique_violation(&e) => {
                    info!(owner, "rejected duplicate owner");
                    Err(RegistryError::OwnerExists(owner.to_string()))
                }
                Err(e) => Err(e.into()),
            }
        })?;

        Ok(BetEntry {
            owner: owner.to_string(),
            players,
            hidden: false,
        })
    }

    async fn remove(&self, owner: &str) -> Result<bool, RegistryError> {
        self.with_conn(|conn| {
            let changed = conn.execute("DELETE FROM bet_entry WHERE owner = ?1", params![owner])?;
            Ok(changed > 0)
        })
    }

    async fn set_hidden(&self, owner: &str, hidden: bool) -> Result<(), RegistryError> {
        self.with_conn(|conn| {
            let changed = conn.execute(
                "UPDATE bet_entry SET hidden = ?1 WHERE owner = ?2",
                params![hidden, owner],
            )?;
            if changed == 0 {
                return Err(RegistryError::NotFound(owner.to_string()));
            }
            Ok(())
        })
    }

    async fn replace_players(
        &self,
        owner: &str,
        players: Vec<String>,
    ) -> Result<(), RegistryError> {
        validate_players(&players)?;
        let players_json = serde_json::to_string(&players)?;
        self.with_conn(|conn| {
            let changed = conn.execute(
                "UPDATE bet_entry SET players = ?1 WHERE owner = ?2",
                params![players_json, owner],
            )?;
            if changed == 0 {
                return Err(RegistryError::NotFound(owner.to_string()));
            }
            Ok(())
        })
    }
}
