//! Derived time totals.
//!
//! # Responsibility
//! - Compute per-activity and per-category minutes from a schedule snapshot.
//! - Convert minutes into the hours-per-week and hours-per-day display values.
//!
//! # Invariants
//! - Totals are recomputed from the grid on every call; nothing is cached.
//! - Every registered activity and every category appears, even at zero.
//! - Σ category minutes == Σ activity minutes == assigned slots × block length.

mod totals;

pub use totals::{aggregate, hours_per_day, hours_per_week, CategoryGroup, Totals};
