//! Plain-text reports for the terminal.

use std::fmt::Write as _;
use weekgrid_core::{
    block_to_clock, hours_per_day, hours_per_week, Category, ScheduleState, Totals,
};

pub const DAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

const EMPTY_CELL: &str = "-";
const TIME_COLUMN_WIDTH: usize = 8;

/// Weekly grid: one row per block, one column per day.
pub fn render_grid(state: &ScheduleState) -> String {
    let width = state
        .activities()
        .keys()
        .map(|name| name.chars().count())
        .chain(DAY_NAMES.iter().map(|day| day.len()))
        .max()
        .unwrap_or(EMPTY_CELL.len());

    let mut out = String::new();
    let _ = write!(out, "{:>TIME_COLUMN_WIDTH$}", "");
    for day in DAY_NAMES {
        let _ = write!(out, "  {day:<width$}");
    }
    out.push('\n');

    let rows = state.grid().day(0).map_or(0, <[_]>::len);
    for block in 0..rows {
        let label = block_to_clock(block, state.wake_offset()).to_string();
        let _ = write!(out, "{label:>TIME_COLUMN_WIDTH$}");
        for day in 0..DAY_NAMES.len() {
            let cell = state.grid().activity_at(day, block).unwrap_or(EMPTY_CELL);
            let _ = write!(out, "  {cell:<width$}");
        }
        out.push('\n');
    }
    out
}

/// Category table followed by activities grouped per category.
pub fn render_totals(state: &ScheduleState, totals: &Totals) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<16}{:>16}{:>16}", "Category", "Hours Per Week", "Hours Per Day");
    for category in Category::ALL {
        let minutes = totals.category_minutes(category);
        let _ = writeln!(
            out,
            "{:<16}{:>16}{:>16}",
            category.label(),
            hours_per_week(minutes),
            hours_per_day(minutes)
        );
    }

    let groups = totals.grouped(state.activities());
    if groups.is_empty() {
        return out;
    }

    out.push('\n');
    let _ = writeln!(out, "{:<24}{:>16}{:>16}", "Activity", "Hours Per Week", "Hours Per Day");
    for group in groups {
        let _ = writeln!(out, "[{}]", group.category);
        for (name, minutes) in group.activities {
            let _ = writeln!(
                out,
                "  {:<22}{:>16}{:>16}",
                name,
                hours_per_week(minutes),
                hours_per_day(minutes)
            );
        }
    }
    out
}

/// Registered activities with their category.
pub fn render_activities(state: &ScheduleState) -> String {
    let mut out = String::new();
    for (name, category) in state.activities() {
        let _ = writeln!(out, "{name}\t{category}");
    }
    out
}

/// Category labels with their display color.
pub fn render_categories() -> String {
    let mut out = String::new();
    for category in Category::ALL {
        let (r, g, b) = category.rgb();
        let _ = writeln!(out, "{:<16}#{r:02x}{g:02x}{b:02x}", category.label());
    }
    out
}
