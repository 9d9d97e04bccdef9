//! Core domain logic for weekgrid.
//! This crate is the single source of truth for schedule invariants.

pub mod aggregate;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod snapshot;
pub mod store;

pub use aggregate::{aggregate, hours_per_day, hours_per_week, CategoryGroup, Totals};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::category::{Category, UnknownCategory};
pub use model::clock::{
    block_to_clock, clock_to_block, ClockError, ClockTime, BLOCKS_PER_CLOCK_DAY, BLOCKS_PER_DAY,
    BLOCK_LENGTH_MINUTES, DAYS_PER_WEEK, DEFAULT_WAKE_OFFSET,
};
pub use model::schedule::{ActivityRegistry, ScheduleState, Slot, TimeGrid};
pub use repo::{RepoError, RepoResult, SlotRepository, SqliteSlotRepository, DEFAULT_SLOT_KEY};
pub use service::schedule_service::{ScheduleService, ServiceError, StateOrigin};
pub use snapshot::{SerializedState, SnapshotError};
pub use store::{ScheduleError, ScheduleResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
