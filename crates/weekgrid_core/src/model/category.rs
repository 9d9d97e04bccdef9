//! Activity category model.
//!
//! # Responsibility
//! - Define the closed set of categories activities are grouped under.
//! - Map each category to its wire label and display color.
//!
//! # Invariants
//! - Wire labels are matched exactly; there is no case folding on load.
//! - `Category::ALL` order is the canonical report order.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Fixed category tag carried by every activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    DeepWork,
    Exercise,
    Education,
    Contemplation,
    Maintenance,
    Social,
    Trading,
}

impl Category {
    /// Every category in report order.
    pub const ALL: [Category; 7] = [
        Category::DeepWork,
        Category::Exercise,
        Category::Education,
        Category::Contemplation,
        Category::Maintenance,
        Category::Social,
        Category::Trading,
    ];

    /// Returns the exact label used in persisted snapshots.
    pub fn label(self) -> &'static str {
        match self {
            Self::DeepWork => "Deep Work",
            Self::Exercise => "Exercise",
            Self::Education => "Education",
            Self::Contemplation => "Contemplation",
            Self::Maintenance => "Maintenance",
            Self::Social => "Social",
            Self::Trading => "Trading",
        }
    }

    /// Resolves a persisted label. Returns `None` for anything not in the set.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|category| category.label() == label)
    }

    /// Background color used by presentation layers, as `(r, g, b)`.
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            Self::DeepWork => (0, 255, 255),
            Self::Exercise => (191, 144, 0),
            Self::Education => (204, 204, 204),
            Self::Contemplation => (100, 126, 107),
            Self::Maintenance => (255, 242, 204),
            Self::Social => (180, 167, 214),
            Self::Trading => (0, 255, 0),
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Error for labels outside the closed category set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl Display for UnknownCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown category `{}`", self.0)
    }
}

impl Error for UnknownCategory {}

impl FromStr for Category {
    type Err = UnknownCategory;

    /// Lenient parse for command-line input: accepts the wire label or the
    /// variant name, ignoring case, spaces, dashes and underscores.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let wanted = squash(value);
        Self::ALL
            .into_iter()
            .find(|category| squash(category.label()) == wanted)
            .ok_or_else(|| UnknownCategory(value.to_string()))
    }
}

fn squash(value: &str) -> String {
    value
        .chars()
        .filter(|ch| !matches!(ch, ' ' | '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}
