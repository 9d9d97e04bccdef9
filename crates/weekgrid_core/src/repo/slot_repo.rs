//! Key-value slot contract and SQLite implementation.
//!
//! # Responsibility
//! - Load and save one named snapshot slot.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - `save` replaces the whole slot value in a single statement.
//! - The slot key is fixed when the repository is built.

use crate::db::DbError;
use rusqlite::{params, Connection, OptionalExtension};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

/// Slot key used when the caller does not pick one.
pub const DEFAULT_SLOT_KEY: &str = "ozy-schedule";

pub type RepoResult<T> = Result<T, RepoError>;

/// Persistence failure for slot or file access.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    InvalidKey(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Io { path, source } => write!(f, "{}: {source}", path.display()),
            Self::InvalidKey(key) => write!(f, "invalid slot key `{key}`"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Io { source, .. } => Some(source),
            Self::InvalidKey(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Durable storage for one serialized schedule.
pub trait SlotRepository {
    /// Returns the stored snapshot text, or `None` when nothing was saved yet.
    fn load(&self) -> RepoResult<Option<String>>;
    /// Replaces the stored snapshot text.
    fn save(&self, value: &str) -> RepoResult<()>;
}

/// SQLite-backed slot stored in the `kv_slots` table.
pub struct SqliteSlotRepository<'conn> {
    conn: &'conn Connection,
    key: String,
}

impl<'conn> SqliteSlotRepository<'conn> {
    /// Repository over [`DEFAULT_SLOT_KEY`].
    pub fn new(conn: &'conn Connection) -> Self {
        Self {
            conn,
            key: DEFAULT_SLOT_KEY.to_string(),
        }
    }

    /// Repository over a caller-chosen slot.
    ///
    /// # Errors
    /// - `InvalidKey` when `key` is blank.
    pub fn with_key(conn: &'conn Connection, key: impl Into<String>) -> RepoResult<Self> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err(RepoError::InvalidKey(key));
        }
        Ok(Self { conn, key })
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

impl SlotRepository for SqliteSlotRepository<'_> {
    fn load(&self) -> RepoResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_slots WHERE key = ?1;",
                [self.key.as_str()],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn save(&self, value: &str) -> RepoResult<()> {
        self.conn.execute(
            "INSERT INTO kv_slots (key, value, updated_at)
             VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![self.key.as_str(), value, now_epoch_ms()],
        )?;
        Ok(())
    }
}

fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| {
            i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX)
        })
}
