//! Schedule store transitions.
//!
//! # Responsibility
//! - Expose every allowed change to a `ScheduleState` as a pure function.
//! - Reject changes that would break registry or grid invariants.
//!
//! # Invariants
//! - Transitions never perform I/O.
//! - A failed transition returns an error and no state; the input snapshot is
//!   never touched.
//! - Rename rewrites registry and grid in the same returned snapshot.
//! - Delete is refused while any slot still uses the activity.

mod error;
mod ops;

pub use error::{ScheduleError, ScheduleResult};
pub use ops::{
    create_activity, delete_activity, recategorize_activity, rename_activity, set_time_slot,
    set_wake_offset,
};
