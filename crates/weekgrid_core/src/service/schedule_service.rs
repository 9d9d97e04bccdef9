//! Schedule use-case service.
//!
//! # Responsibility
//! - Load the persisted schedule at startup, falling back to an empty one.
//! - Run one store transition per call and persist the result.
//! - Export and import snapshot files.
//!
//! # Invariants
//! - The in-memory state only advances after the new snapshot was saved.
//! - A rejected transition or failed save leaves the current state as is.
//! - Activity names never reach the log; counts and indices do.

use crate::aggregate::{aggregate, Totals};
use crate::model::category::Category;
use crate::model::clock::ClockTime;
use crate::model::schedule::ScheduleState;
use crate::repo::{read_snapshot_file, write_snapshot_file, RepoError, SlotRepository};
use crate::snapshot::{from_json, to_json, SnapshotError};
use crate::store::{self, ScheduleError, ScheduleResult};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

/// Errors from schedule service operations.
#[derive(Debug)]
pub enum ServiceError {
    /// Transition rejected by the store.
    Schedule(ScheduleError),
    /// Snapshot text could not be encoded or decoded.
    Snapshot(SnapshotError),
    /// Slot or file access failed.
    Repo(RepoError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Schedule(err) => write!(f, "{err}"),
            Self::Snapshot(err) => write!(f, "{err}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Schedule(err) => Some(err),
            Self::Snapshot(err) => Some(err),
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<ScheduleError> for ServiceError {
    fn from(value: ScheduleError) -> Self {
        Self::Schedule(value)
    }
}

impl From<SnapshotError> for ServiceError {
    fn from(value: SnapshotError) -> Self {
        Self::Snapshot(value)
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Where the startup state came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateOrigin {
    /// Decoded from the persisted slot.
    Loaded,
    /// Slot was empty; started from the default state.
    Fresh,
    /// Slot held an invalid snapshot; started from the default state.
    Recovered,
}

/// Schedule service facade over a slot repository.
pub struct ScheduleService<R: SlotRepository> {
    repo: R,
    state: ScheduleState,
    origin: StateOrigin,
}

impl<R: SlotRepository> ScheduleService<R> {
    /// Loads the current schedule from `repo`.
    ///
    /// An invalid stored snapshot is logged and replaced by the default
    /// state in memory; the slot itself is left untouched until the next
    /// successful change.
    ///
    /// # Errors
    /// - `Repo` when the slot cannot be read.
    pub fn open(repo: R) -> Result<Self, ServiceError> {
        let (state, origin) = match repo.load()? {
            None => (ScheduleState::default(), StateOrigin::Fresh),
            Some(text) => match from_json(&text) {
                Ok(state) => (state, StateOrigin::Loaded),
                Err(err) => {
                    warn!(
                        "event=schedule_load module=service status=fallback error_code={}",
                        err.code()
                    );
                    (ScheduleState::default(), StateOrigin::Recovered)
                }
            },
        };

        info!(
            "event=schedule_load module=service status=ok origin={origin:?} activities={} assigned_slots={}",
            state.activities().len(),
            state.grid().assigned_count()
        );
        Ok(Self {
            repo,
            state,
            origin,
        })
    }

    /// Current schedule snapshot.
    pub fn state(&self) -> &ScheduleState {
        &self.state
    }

    pub fn origin(&self) -> StateOrigin {
        self.origin
    }

    /// Weekly totals for the current snapshot.
    pub fn totals(&self) -> Result<Totals, ServiceError> {
        aggregate(&self.state).map_err(Into::into)
    }

    pub fn create_activity(&mut self, name: &str, category: Category) -> Result<(), ServiceError> {
        self.commit("activity_create", |state| {
            store::create_activity(state, name, category)
        })
    }

    pub fn recategorize_activity(
        &mut self,
        name: &str,
        category: Category,
    ) -> Result<(), ServiceError> {
        self.commit("activity_recategorize", |state| {
            store::recategorize_activity(state, name, category)
        })
    }

    pub fn rename_activity(&mut self, old_name: &str, new_name: &str) -> Result<(), ServiceError> {
        self.commit("activity_rename", |state| {
            store::rename_activity(state, old_name, new_name)
        })
    }

    pub fn delete_activity(&mut self, name: &str) -> Result<(), ServiceError> {
        self.commit("activity_delete", |state| store::delete_activity(state, name))
    }

    /// Assigns `activity` to a slot, or clears it with `None`.
    pub fn set_time_slot(
        &mut self,
        day: usize,
        block: usize,
        activity: Option<&str>,
    ) -> Result<(), ServiceError> {
        self.commit("slot_set", |state| {
            store::set_time_slot(state, day, block, activity)
        })
    }

    pub fn set_wake_offset(&mut self, wake_offset: usize) -> Result<(), ServiceError> {
        self.commit("wake_set", |state| store::set_wake_offset(state, wake_offset))
    }

    /// Sets the wake offset from a clock reading.
    pub fn set_wake_time(&mut self, time: ClockTime) -> Result<(), ServiceError> {
        self.set_wake_offset(time.block_index())
    }

    /// Current snapshot as export-ready JSON text.
    pub fn export_json(&self) -> Result<String, ServiceError> {
        to_json(&self.state).map_err(Into::into)
    }

    /// Writes the current snapshot to `path`.
    pub fn export_to(&self, path: impl AsRef<Path>) -> Result<(), ServiceError> {
        let text = self.export_json()?;
        write_snapshot_file(path.as_ref(), &text)?;
        info!(
            "event=schedule_export module=service status=ok bytes={}",
            text.len()
        );
        Ok(())
    }

    /// Replaces the current schedule with the snapshot stored at `path`.
    ///
    /// The file is fully validated before anything is saved.
    pub fn import_from(&mut self, path: impl AsRef<Path>) -> Result<(), ServiceError> {
        let text = read_snapshot_file(path.as_ref())?;
        self.import_json(&text)
    }

    /// Replaces the current schedule with a JSON snapshot.
    pub fn import_json(&mut self, text: &str) -> Result<(), ServiceError> {
        let next = match from_json(text) {
            Ok(state) => state,
            Err(err) => {
                warn!("event=schedule_import module=service status=error error_code={}", err.code());
                return Err(err.into());
            }
        };
        self.persist(next)?;
        info!(
            "event=schedule_import module=service status=ok activities={} assigned_slots={}",
            self.state.activities().len(),
            self.state.grid().assigned_count()
        );
        Ok(())
    }

    fn commit(
        &mut self,
        event: &'static str,
        transition: impl FnOnce(&ScheduleState) -> ScheduleResult<ScheduleState>,
    ) -> Result<(), ServiceError> {
        let next = match transition(&self.state) {
            Ok(next) => next,
            Err(err) => {
                info!("event={event} module=service status=rejected error_code={}", err.code());
                return Err(err.into());
            }
        };
        self.persist(next)?;
        info!(
            "event={event} module=service status=ok activities={} assigned_slots={}",
            self.state.activities().len(),
            self.state.grid().assigned_count()
        );
        Ok(())
    }

    fn persist(&mut self, next: ScheduleState) -> Result<(), ServiceError> {
        let text = to_json(&next)?;
        if let Err(err) = self.repo.save(&text) {
            warn!("event=schedule_save module=service status=error error={err}");
            return Err(err.into());
        }
        self.state = next;
        Ok(())
    }
}
