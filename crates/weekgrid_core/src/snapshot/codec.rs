//! Snapshot encode/decode.

use crate::model::category::Category;
use crate::model::clock::{BLOCKS_PER_CLOCK_DAY, BLOCKS_PER_DAY, DAYS_PER_WEEK};
use crate::model::schedule::{ActivityRegistry, ScheduleState, Slot, TimeGrid};
use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

const JSON_INDENT: &[u8] = b"    ";

/// Wire shape of a schedule snapshot.
///
/// Field names follow the external schema (`times`, `optionsByName`,
/// `wakeUpAt`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SerializedState {
    /// Day-major rows; `null` marks an unassigned slot.
    pub times: Vec<Vec<Option<String>>>,
    /// Activity name to category label.
    pub options_by_name: BTreeMap<String, String>,
    /// Wake offset in blocks from midnight.
    pub wake_up_at: usize,
}

/// Snapshot payload that cannot become a valid `ScheduleState`.
#[derive(Debug)]
pub enum SnapshotError {
    /// Activity carries a label outside the category set.
    InvalidCategory { activity: String, label: String },
    /// Payload is not valid JSON or violates the schema or model invariants.
    MalformedSnapshot(String),
    /// Snapshot could not be rendered to JSON.
    Encode(serde_json::Error),
}

impl Display for SnapshotError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCategory { activity, label } => {
                write!(f, "activity {activity} has unknown category `{label}`")
            }
            Self::MalformedSnapshot(message) => write!(f, "malformed snapshot: {message}"),
            Self::Encode(err) => write!(f, "failed to encode snapshot: {err}"),
        }
    }
}

impl SnapshotError {
    /// Stable identifier safe to log; carries no user text.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidCategory { .. } => "invalid_category",
            Self::MalformedSnapshot(_) => "malformed_snapshot",
            Self::Encode(_) => "encode_failed",
        }
    }
}

impl Error for SnapshotError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Encode(err) => Some(err),
            Self::InvalidCategory { .. } | Self::MalformedSnapshot(_) => None,
        }
    }
}

/// Wire value for one in-memory slot. Unassigned becomes `null`.
pub fn slot_to_wire(slot: &Slot) -> Option<String> {
    slot.clone()
}

/// In-memory slot for one wire value.
///
/// `null` and the empty string both mean unassigned; the empty string is
/// what older exports wrote for a cleared selection.
pub fn slot_from_wire(value: Option<String>) -> Slot {
    value.filter(|name| !name.is_empty())
}

/// Converts a state into its wire shape.
pub fn encode(state: &ScheduleState) -> SerializedState {
    SerializedState {
        times: state
            .grid()
            .days()
            .map(|row| row.iter().map(slot_to_wire).collect())
            .collect(),
        options_by_name: state
            .activities()
            .iter()
            .map(|(name, category)| (name.clone(), category.label().to_string()))
            .collect(),
        wake_up_at: state.wake_offset(),
    }
}

/// Validates a wire snapshot and converts it into a state.
///
/// # Errors
/// - `InvalidCategory` for an unknown category label.
/// - `MalformedSnapshot` for a wrong grid shape, a blank activity name, a slot
///   naming an unregistered activity, or an out-of-range `wakeUpAt`.
pub fn decode(serialized: SerializedState) -> Result<ScheduleState, SnapshotError> {
    let mut activities = ActivityRegistry::new();
    for (name, label) in serialized.options_by_name {
        if name.trim().is_empty() {
            return Err(SnapshotError::MalformedSnapshot(
                "activity name must not be blank".to_string(),
            ));
        }
        let category = Category::from_label(&label).ok_or_else(|| {
            SnapshotError::InvalidCategory {
                activity: name.clone(),
                label: label.clone(),
            }
        })?;
        activities.insert(name, category);
    }

    if serialized.wake_up_at >= BLOCKS_PER_CLOCK_DAY {
        return Err(SnapshotError::MalformedSnapshot(format!(
            "wakeUpAt {} is out of range 0..{BLOCKS_PER_CLOCK_DAY}",
            serialized.wake_up_at
        )));
    }

    let rows = serialized
        .times
        .into_iter()
        .map(|row| row.into_iter().map(slot_from_wire).collect::<Vec<_>>())
        .collect::<Vec<_>>();
    let grid = TimeGrid::from_rows(rows).ok_or_else(|| {
        SnapshotError::MalformedSnapshot(format!(
            "times must be {DAYS_PER_WEEK} days of {BLOCKS_PER_DAY} slots"
        ))
    })?;

    if let Some((day, block, name)) = grid
        .assigned()
        .find(|(_, _, name)| !activities.contains_key(*name))
    {
        return Err(SnapshotError::MalformedSnapshot(format!(
            "slot day={day} block={block} references unregistered activity {name}"
        )));
    }

    Ok(ScheduleState::from_parts(
        grid,
        activities,
        serialized.wake_up_at,
    ))
}

/// Renders a state as 4-space indented JSON.
///
/// # Errors
/// - `Encode` when the JSON writer fails.
pub fn to_json(state: &ScheduleState) -> Result<String, SnapshotError> {
    let mut buffer = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(JSON_INDENT));
    encode(state)
        .serialize(&mut serializer)
        .map_err(SnapshotError::Encode)?;
    String::from_utf8(buffer)
        .map_err(|err| SnapshotError::MalformedSnapshot(format!("non UTF-8 output: {err}")))
}

/// Parses and validates a JSON snapshot.
///
/// # Errors
/// - `MalformedSnapshot` when the text is not a snapshot-shaped JSON object.
/// - Any error from [`decode`].
pub fn from_json(text: &str) -> Result<ScheduleState, SnapshotError> {
    let serialized = serde_json::from_str::<SerializedState>(text)
        .map_err(|err| SnapshotError::MalformedSnapshot(err.to_string()))?;
    decode(serialized)
}

#[cfg(test)]
mod tests {
    use super::{slot_from_wire, slot_to_wire};

    #[test]
    fn null_and_empty_string_normalize_to_unassigned() {
        assert_eq!(slot_from_wire(None), None);
        assert_eq!(slot_from_wire(Some(String::new())), None);
        assert_eq!(
            slot_from_wire(Some("Write".to_string())),
            Some("Write".to_string())
        );
    }

    #[test]
    fn unassigned_is_written_as_null() {
        assert_eq!(slot_to_wire(&None), None);
        let json = serde_json::to_string(&slot_to_wire(&None)).unwrap();
        assert_eq!(json, "null");
    }
}
