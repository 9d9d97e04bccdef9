//! Canonical schedule aggregate.
//!
//! # Responsibility
//! - Hold the weekly time grid, the activity registry and the wake offset as
//!   one immutable snapshot.
//! - Provide copy-on-write helpers used by store transitions.
//!
//! # Invariants
//! - The grid always has `DAYS_PER_WEEK` rows of `BLOCKS_PER_DAY` slots.
//! - Every assigned slot names an activity present in the registry.
//! - `wake_offset < BLOCKS_PER_CLOCK_DAY`.
//! - A snapshot is never mutated after construction; transitions build a new
//!   one and share untouched day rows with the previous version.

use crate::model::category::Category;
use crate::model::clock::{BLOCKS_PER_DAY, DAYS_PER_WEEK, DEFAULT_WAKE_OFFSET};
use std::collections::BTreeMap;
use std::sync::Arc;

/// One grid cell. `None` is the unassigned sentinel.
pub type Slot = Option<String>;

/// Activity name to category, iterated in ascending name order.
pub type ActivityRegistry = BTreeMap<String, Category>;

/// Seven day rows of fixed-length block slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeGrid {
    days: Vec<Arc<Vec<Slot>>>,
}

impl TimeGrid {
    /// Grid with every slot unassigned.
    pub fn empty() -> Self {
        let row = Arc::new(vec![None; BLOCKS_PER_DAY]);
        Self {
            days: (0..DAYS_PER_WEEK).map(|_| Arc::clone(&row)).collect(),
        }
    }

    /// Builds a grid from owned rows.
    ///
    /// Returns `None` unless there are exactly `DAYS_PER_WEEK` rows of
    /// `BLOCKS_PER_DAY` slots.
    pub fn from_rows(rows: Vec<Vec<Slot>>) -> Option<Self> {
        if rows.len() != DAYS_PER_WEEK || rows.iter().any(|row| row.len() != BLOCKS_PER_DAY) {
            return None;
        }
        Some(Self {
            days: rows.into_iter().map(Arc::new).collect(),
        })
    }

    /// Slots for one day, or `None` when `day` is out of range.
    pub fn day(&self, day: usize) -> Option<&[Slot]> {
        self.days.get(day).map(|row| row.as_slice())
    }

    /// All day rows in order.
    pub fn days(&self) -> impl Iterator<Item = &[Slot]> + '_ {
        self.days.iter().map(|row| row.as_slice())
    }

    /// Activity assigned at `(day, block)`, `None` if unassigned or out of range.
    pub fn activity_at(&self, day: usize, block: usize) -> Option<&str> {
        self.day(day)?.get(block)?.as_deref()
    }

    /// Every assigned slot as `(day, block, activity)`.
    pub fn assigned(&self) -> impl Iterator<Item = (usize, usize, &str)> + '_ {
        self.days().enumerate().flat_map(|(day, row)| {
            row.iter()
                .enumerate()
                .filter_map(move |(block, slot)| slot.as_deref().map(|name| (day, block, name)))
        })
    }

    /// Number of assigned slots.
    pub fn assigned_count(&self) -> usize {
        self.assigned().count()
    }

    /// Whether day `day` is physically shared with `other` (no copy was made).
    pub fn shares_day_with(&self, other: &TimeGrid, day: usize) -> bool {
        match (self.days.get(day), other.days.get(day)) {
            (Some(left), Some(right)) => Arc::ptr_eq(left, right),
            _ => false,
        }
    }

    /// Copy with one slot replaced. Indices must already be validated.
    pub(crate) fn with_slot(&self, day: usize, block: usize, slot: Slot) -> Self {
        let mut next = self.clone();
        Arc::make_mut(&mut next.days[day])[block] = slot;
        next
    }

    /// Copy with every `old` reference rewritten to `new`.
    ///
    /// Rows that never mention `old` are shared, not copied.
    pub(crate) fn with_renamed(&self, old: &str, new: &str) -> Self {
        let mut next = self.clone();
        for row in &mut next.days {
            if !row.iter().any(|slot| slot.as_deref() == Some(old)) {
                continue;
            }
            for slot in Arc::make_mut(row).iter_mut() {
                if slot.as_deref() == Some(old) {
                    *slot = Some(new.to_string());
                }
            }
        }
        next
    }
}

impl Default for TimeGrid {
    fn default() -> Self {
        Self::empty()
    }
}

/// Full canonical schedule: grid, registry and wake offset.
///
/// Only the store transitions and the snapshot codec construct non-default
/// values, so every reachable `ScheduleState` satisfies the module
/// invariants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleState {
    grid: TimeGrid,
    activities: ActivityRegistry,
    wake_offset: usize,
}

impl ScheduleState {
    pub(crate) fn from_parts(
        grid: TimeGrid,
        activities: ActivityRegistry,
        wake_offset: usize,
    ) -> Self {
        Self {
            grid,
            activities,
            wake_offset,
        }
    }

    pub fn grid(&self) -> &TimeGrid {
        &self.grid
    }

    pub fn activities(&self) -> &ActivityRegistry {
        &self.activities
    }

    pub fn wake_offset(&self) -> usize {
        self.wake_offset
    }

    /// Category of a registered activity.
    pub fn category_of(&self, name: &str) -> Option<Category> {
        self.activities.get(name).copied()
    }

    pub(crate) fn with_grid(&self, grid: TimeGrid) -> Self {
        Self {
            grid,
            activities: self.activities.clone(),
            wake_offset: self.wake_offset,
        }
    }

    pub(crate) fn with_activities(&self, activities: ActivityRegistry) -> Self {
        Self {
            grid: self.grid.clone(),
            activities,
            wake_offset: self.wake_offset,
        }
    }

    pub(crate) fn with_wake_offset(&self, wake_offset: usize) -> Self {
        Self {
            grid: self.grid.clone(),
            activities: self.activities.clone(),
            wake_offset,
        }
    }
}

impl Default for ScheduleState {
    fn default() -> Self {
        Self {
            grid: TimeGrid::empty(),
            activities: ActivityRegistry::new(),
            wake_offset: DEFAULT_WAKE_OFFSET,
        }
    }
}
