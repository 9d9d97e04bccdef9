//! Persistence port for schedule snapshots.
//!
//! # Responsibility
//! - Define the key-value slot contract the service persists through.
//! - Provide the SQLite slot store and the file export/import helpers.
//!
//! # Invariants
//! - Repositories store snapshot text verbatim; validation belongs to
//!   `snapshot::codec`.
//! - A missing slot is reported as `Ok(None)`, never as an error.

pub mod slot_repo;
pub mod snapshot_file;

pub use slot_repo::{
    RepoError, RepoResult, SlotRepository, SqliteSlotRepository, DEFAULT_SLOT_KEY,
};
pub use snapshot_file::{read_snapshot_file, write_snapshot_file};
