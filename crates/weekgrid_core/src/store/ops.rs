use super::error::{ScheduleError, ScheduleResult};
use crate::aggregate::aggregate;
use crate::model::category::Category;
use crate::model::clock::{BLOCKS_PER_CLOCK_DAY, BLOCKS_PER_DAY, DAYS_PER_WEEK};
use crate::model::schedule::ScheduleState;

/// Registers a new activity.
///
/// # Errors
/// - `EmptyName` when `name` is blank.
/// - `DuplicateName` when `name` is already registered.
pub fn create_activity(
    state: &ScheduleState,
    name: &str,
    category: Category,
) -> ScheduleResult<ScheduleState> {
    ensure_not_blank(name)?;
    if state.activities().contains_key(name) {
        return Err(ScheduleError::DuplicateName(name.to_string()));
    }

    let mut activities = state.activities().clone();
    activities.insert(name.to_string(), category);
    Ok(state.with_activities(activities))
}

/// Moves an existing activity to another category.
///
/// # Errors
/// - `UnknownActivity` when `name` is not registered.
pub fn recategorize_activity(
    state: &ScheduleState,
    name: &str,
    category: Category,
) -> ScheduleResult<ScheduleState> {
    if !state.activities().contains_key(name) {
        return Err(ScheduleError::UnknownActivity(name.to_string()));
    }

    let mut activities = state.activities().clone();
    activities.insert(name.to_string(), category);
    Ok(state.with_activities(activities))
}

/// Renames an activity and every slot that references it.
///
/// The category is carried over unchanged.
///
/// # Errors
/// - `EmptyName` when `new_name` is blank.
/// - `UnknownActivity` when `old_name` is not registered.
/// - `DuplicateName` when `new_name` is already registered (including
///   `new_name == old_name`).
pub fn rename_activity(
    state: &ScheduleState,
    old_name: &str,
    new_name: &str,
) -> ScheduleResult<ScheduleState> {
    ensure_not_blank(new_name)?;
    let category = state
        .category_of(old_name)
        .ok_or_else(|| ScheduleError::UnknownActivity(old_name.to_string()))?;
    if state.activities().contains_key(new_name) {
        return Err(ScheduleError::DuplicateName(new_name.to_string()));
    }

    let mut activities = state.activities().clone();
    activities.remove(old_name);
    activities.insert(new_name.to_string(), category);
    let grid = state.grid().with_renamed(old_name, new_name);

    Ok(ScheduleState::from_parts(
        grid,
        activities,
        state.wake_offset(),
    ))
}

/// Removes an activity that no slot uses.
///
/// Usage is recomputed from the grid on every call; slots are never cleared
/// on the caller's behalf.
///
/// # Errors
/// - `UnknownActivity` when `name` is not registered.
/// - `ActivityInUse` when the activity still has assigned minutes.
/// - `DanglingReference` when the input state is already inconsistent.
pub fn delete_activity(state: &ScheduleState, name: &str) -> ScheduleResult<ScheduleState> {
    if !state.activities().contains_key(name) {
        return Err(ScheduleError::UnknownActivity(name.to_string()));
    }

    let minutes = aggregate(state)?.activity_minutes(name);
    if minutes > 0 {
        return Err(ScheduleError::ActivityInUse {
            name: name.to_string(),
            minutes,
        });
    }

    let mut activities = state.activities().clone();
    activities.remove(name);
    Ok(state.with_activities(activities))
}

/// Assigns or clears one grid slot.
///
/// `None` and blank names clear the slot.
///
/// # Errors
/// - `OutOfRange` when `day` or `block` is outside the grid.
/// - `UnknownActivity` when a non-blank `activity` is not registered.
pub fn set_time_slot(
    state: &ScheduleState,
    day: usize,
    block: usize,
    activity: Option<&str>,
) -> ScheduleResult<ScheduleState> {
    ensure_in_range("day", day, DAYS_PER_WEEK)?;
    ensure_in_range("block", block, BLOCKS_PER_DAY)?;

    let slot = match activity {
        Some(name) if !name.trim().is_empty() => {
            if !state.activities().contains_key(name) {
                return Err(ScheduleError::UnknownActivity(name.to_string()));
            }
            Some(name.to_string())
        }
        _ => None,
    };

    Ok(state.with_grid(state.grid().with_slot(day, block, slot)))
}

/// Moves the clock time that grid row 0 corresponds to.
///
/// # Errors
/// - `OutOfRange` when `wake_offset >= BLOCKS_PER_CLOCK_DAY`.
pub fn set_wake_offset(state: &ScheduleState, wake_offset: usize) -> ScheduleResult<ScheduleState> {
    ensure_in_range("wake offset", wake_offset, BLOCKS_PER_CLOCK_DAY)?;
    Ok(state.with_wake_offset(wake_offset))
}

fn ensure_not_blank(name: &str) -> ScheduleResult<()> {
    if name.trim().is_empty() {
        return Err(ScheduleError::EmptyName);
    }
    Ok(())
}

fn ensure_in_range(field: &'static str, value: usize, limit: usize) -> ScheduleResult<()> {
    if value >= limit {
        return Err(ScheduleError::OutOfRange {
            field,
            value,
            limit,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{create_activity, rename_activity, set_time_slot};
    use crate::model::category::Category;
    use crate::model::schedule::ScheduleState;
    use crate::store::ScheduleError;

    #[test]
    fn blank_slot_name_clears_the_slot() {
        let state = create_activity(&ScheduleState::default(), "Run", Category::Exercise).unwrap();
        let state = set_time_slot(&state, 1, 1, Some("Run")).unwrap();
        let state = set_time_slot(&state, 1, 1, Some("  ")).unwrap();
        assert_eq!(state.grid().activity_at(1, 1), None);
    }

    #[test]
    fn rename_to_same_name_is_duplicate() {
        let state = create_activity(&ScheduleState::default(), "Run", Category::Exercise).unwrap();
        let err = rename_activity(&state, "Run", "Run").unwrap_err();
        assert_eq!(err, ScheduleError::DuplicateName("Run".to_string()));
    }

    #[test]
    fn rename_leaves_untouched_days_shared() {
        let state = create_activity(&ScheduleState::default(), "Run", Category::Exercise).unwrap();
        let state = set_time_slot(&state, 4, 0, Some("Run")).unwrap();
        let renamed = rename_activity(&state, "Run", "Jog").unwrap();

        assert!(renamed.grid().shares_day_with(state.grid(), 0));
        assert!(!renamed.grid().shares_day_with(state.grid(), 4));
        assert_eq!(renamed.grid().activity_at(4, 0), Some("Jog"));
    }
}
