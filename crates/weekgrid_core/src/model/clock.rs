//! Block index to clock time conversions.
//!
//! # Responsibility
//! - Fix the block geometry shared by the grid, the store and aggregation.
//! - Convert a grid row (relative to the wake offset) to a 12-hour clock
//!   time and back.
//!
//! # Invariants
//! - `block_to_clock` is total and wraps across midnight.
//! - `clock_to_block(t)` is the left inverse of `block_to_clock` for every
//!   block-aligned `t`.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Length of one grid block in minutes.
pub const BLOCK_LENGTH_MINUTES: u32 = 15;
/// Hours per day left off the grid.
pub const HOURS_IN_BED: u32 = 9;
/// Days in one schedule week.
pub const DAYS_PER_WEEK: usize = 7;
/// Grid rows per day: `(24 - HOURS_IN_BED) * 60 / BLOCK_LENGTH_MINUTES`.
pub const BLOCKS_PER_DAY: usize = ((24 - HOURS_IN_BED) * 60 / BLOCK_LENGTH_MINUTES) as usize;
/// Blocks in a full 24-hour clock day; wake offsets index into this range.
pub const BLOCKS_PER_CLOCK_DAY: usize = (24 * 60 / BLOCK_LENGTH_MINUTES) as usize;
/// Blocks per clock hour.
pub const BLOCKS_PER_HOUR: usize = (60 / BLOCK_LENGTH_MINUTES) as usize;
/// Default wake offset (5:00 AM).
pub const DEFAULT_WAKE_OFFSET: usize = BLOCKS_PER_HOUR * 5;

/// Invalid clock input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClockError {
    /// Hour outside `1..=12`.
    InvalidHour(u32),
    /// Minute past the hour or not aligned to a block boundary.
    InvalidMinute(u32),
    /// Text that is not `H:MM AM|PM`.
    Unparseable(String),
}

impl Display for ClockError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidHour(hour) => write!(f, "hour must be within 1..=12, got {hour}"),
            Self::InvalidMinute(minute) => write!(
                f,
                "minute must be a multiple of {BLOCK_LENGTH_MINUTES} below 60, got {minute}"
            ),
            Self::Unparseable(text) => {
                write!(f, "expected a time like `7:30 AM`, got `{text}`")
            }
        }
    }
}

impl Error for ClockError {}

/// Wall-clock time on a 12-hour dial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockTime {
    pub hour12: u32,
    pub minute: u32,
    pub is_am: bool,
}

impl ClockTime {
    /// Builds a block-aligned clock time.
    ///
    /// # Errors
    /// - `InvalidHour` when `hour12` is outside `1..=12`.
    /// - `InvalidMinute` when `minute` is not a block boundary below 60.
    pub fn new(hour12: u32, minute: u32, is_am: bool) -> Result<Self, ClockError> {
        if !(1..=12).contains(&hour12) {
            return Err(ClockError::InvalidHour(hour12));
        }
        if minute >= 60 || minute % BLOCK_LENGTH_MINUTES != 0 {
            return Err(ClockError::InvalidMinute(minute));
        }
        Ok(Self {
            hour12,
            minute,
            is_am,
        })
    }

    /// Hour on the 24-hour dial: 12 AM is 0, 12 PM is 12.
    pub fn hour24(self) -> u32 {
        match (self.hour12, self.is_am) {
            (12, true) => 0,
            (12, false) => 12,
            (hour, true) => hour,
            (hour, false) => hour + 12,
        }
    }

    /// Block index from midnight.
    pub fn block_index(self) -> usize {
        self.hour24() as usize * BLOCKS_PER_HOUR + (self.minute / BLOCK_LENGTH_MINUTES) as usize
    }
}

impl Display for ClockTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{:02} {}",
            self.hour12,
            self.minute,
            if self.is_am { "AM" } else { "PM" }
        )
    }
}

impl FromStr for ClockTime {
    type Err = ClockError;

    /// Parses `7:30 PM`, `7:30pm` or `12:00 am`.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let unparseable = || ClockError::Unparseable(value.to_string());
        let compact = value
            .chars()
            .filter(|ch| !ch.is_whitespace())
            .collect::<String>()
            .to_ascii_lowercase();

        let (body, is_am) = if let Some(body) = compact.strip_suffix("am") {
            (body, true)
        } else if let Some(body) = compact.strip_suffix("pm") {
            (body, false)
        } else {
            return Err(unparseable());
        };

        let (hour, minute) = body.split_once(':').ok_or_else(unparseable)?;
        let hour12 = hour.parse::<u32>().map_err(|_| unparseable())?;
        let minute = minute.parse::<u32>().map_err(|_| unparseable())?;
        Self::new(hour12, minute, is_am)
    }
}

/// Clock time shown for grid row `index` when row 0 sits at `wake_offset`.
pub fn block_to_clock(index: usize, wake_offset: usize) -> ClockTime {
    let block = (wake_offset % BLOCKS_PER_CLOCK_DAY + index % BLOCKS_PER_CLOCK_DAY)
        % BLOCKS_PER_CLOCK_DAY;
    let minutes = block as u32 * BLOCK_LENGTH_MINUTES;
    let hour = minutes / 60;
    let minute = minutes % 60;
    let hour12 = match hour % 12 {
        0 => 12,
        other => other,
    };
    ClockTime {
        hour12,
        minute,
        is_am: hour < 12,
    }
}

/// Block index from midnight for a 12-hour clock reading.
///
/// # Errors
/// Same as [`ClockTime::new`].
pub fn clock_to_block(hour12: u32, minute: u32, is_am: bool) -> Result<usize, ClockError> {
    ClockTime::new(hour12, minute, is_am).map(ClockTime::block_index)
}

#[cfg(test)]
mod tests {
    use super::{block_to_clock, BLOCKS_PER_CLOCK_DAY, BLOCKS_PER_DAY, DEFAULT_WAKE_OFFSET};

    #[test]
    fn geometry_matches_defaults() {
        assert_eq!(BLOCKS_PER_DAY, 60);
        assert_eq!(BLOCKS_PER_CLOCK_DAY, 96);
        assert_eq!(DEFAULT_WAKE_OFFSET, 20);
    }

    #[test]
    fn row_zero_at_default_wake_is_five_am() {
        assert_eq!(block_to_clock(0, DEFAULT_WAKE_OFFSET).to_string(), "5:00 AM");
        assert_eq!(block_to_clock(59, DEFAULT_WAKE_OFFSET).to_string(), "7:45 PM");
    }
}
