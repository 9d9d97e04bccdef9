//! Domain model for the weekly block schedule.
//!
//! # Responsibility
//! - Define the canonical schedule aggregate and its leaf types.
//! - Keep block geometry and clock math in one place.
//!
//! # Invariants
//! - Activities are identified by name; the registry is the only authority
//!   on which names exist.
//! - Grid cells reference activities by name and never dangle.

pub mod category;
pub mod clock;
pub mod schedule;
