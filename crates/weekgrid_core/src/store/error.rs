use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ScheduleResult<T> = Result<T, ScheduleError>;

/// Rejected schedule transition or broken aggregate invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// Activity name is empty or whitespace only.
    EmptyName,
    /// Another activity already uses this name.
    DuplicateName(String),
    /// Name is not in the activity registry.
    UnknownActivity(String),
    /// Activity still has assigned slots; carries the assigned minutes.
    ActivityInUse { name: String, minutes: u32 },
    /// Index outside its valid range `0..limit`.
    OutOfRange {
        field: &'static str,
        value: usize,
        limit: usize,
    },
    /// Grid slot names an activity missing from the registry.
    DanglingReference {
        day: usize,
        block: usize,
        name: String,
    },
}

impl Display for ScheduleError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "activity name must not be blank"),
            Self::DuplicateName(name) => write!(f, "activity already exists: {name}"),
            Self::UnknownActivity(name) => write!(f, "activity not found: {name}"),
            Self::ActivityInUse { name, minutes } => write!(
                f,
                "activity {name} is still scheduled for {minutes} minutes per week"
            ),
            Self::OutOfRange {
                field,
                value,
                limit,
            } => write!(f, "{field} {value} is out of range 0..{limit}"),
            Self::DanglingReference { day, block, name } => write!(
                f,
                "slot day={day} block={block} references unregistered activity {name}"
            ),
        }
    }
}

impl ScheduleError {
    /// Stable identifier safe to log; carries no user text.
    pub fn code(&self) -> &'static str {
        match self {
            Self::EmptyName => "empty_name",
            Self::DuplicateName(_) => "duplicate_name",
            Self::UnknownActivity(_) => "unknown_activity",
            Self::ActivityInUse { .. } => "activity_in_use",
            Self::OutOfRange { .. } => "out_of_range",
            Self::DanglingReference { .. } => "dangling_reference",
        }
    }
}

impl Error for ScheduleError {}
