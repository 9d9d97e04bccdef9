use crate::model::category::Category;
use crate::model::clock::{BLOCK_LENGTH_MINUTES, DAYS_PER_WEEK};
use crate::model::schedule::{ActivityRegistry, ScheduleState};
use crate::store::{ScheduleError, ScheduleResult};
use std::collections::BTreeMap;

/// Weekly minutes per activity and per category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Totals {
    pub per_activity: BTreeMap<String, u32>,
    pub per_category: BTreeMap<Category, u32>,
}

/// Activities of one category with their minutes, for grouped reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryGroup {
    pub category: Category,
    pub total_minutes: u32,
    pub activities: Vec<(String, u32)>,
}

impl Totals {
    /// Minutes for `name`; unregistered names count as zero.
    pub fn activity_minutes(&self, name: &str) -> u32 {
        self.per_activity.get(name).copied().unwrap_or(0)
    }

    pub fn category_minutes(&self, category: Category) -> u32 {
        self.per_category.get(&category).copied().unwrap_or(0)
    }

    /// Minutes across the whole week.
    pub fn total_minutes(&self) -> u32 {
        self.per_category.values().sum()
    }

    /// Groups registered activities under their category.
    ///
    /// Categories follow `Category::ALL` order and activities stay in name
    /// order. Categories without activities are left out.
    pub fn grouped(&self, activities: &ActivityRegistry) -> Vec<CategoryGroup> {
        Category::ALL
            .into_iter()
            .filter_map(|category| {
                let members = activities
                    .iter()
                    .filter(|(_, owner)| **owner == category)
                    .map(|(name, _)| (name.clone(), self.activity_minutes(name)))
                    .collect::<Vec<_>>();
                if members.is_empty() {
                    return None;
                }
                Some(CategoryGroup {
                    category,
                    total_minutes: self.category_minutes(category),
                    activities: members,
                })
            })
            .collect()
    }
}

/// Computes weekly totals for `state`.
///
/// # Errors
/// - `DanglingReference` when a slot names an unregistered activity. Store
///   transitions never produce such a state.
pub fn aggregate(state: &ScheduleState) -> ScheduleResult<Totals> {
    let mut per_activity = state
        .activities()
        .keys()
        .map(|name| (name.clone(), 0_u32))
        .collect::<BTreeMap<_, _>>();
    let mut per_category = Category::ALL
        .into_iter()
        .map(|category| (category, 0_u32))
        .collect::<BTreeMap<_, _>>();

    for (day, block, name) in state.grid().assigned() {
        let category = state
            .category_of(name)
            .ok_or_else(|| ScheduleError::DanglingReference {
                day,
                block,
                name: name.to_string(),
            })?;
        *per_activity.entry(name.to_string()).or_default() += BLOCK_LENGTH_MINUTES;
        *per_category.entry(category).or_default() += BLOCK_LENGTH_MINUTES;
    }

    Ok(Totals {
        per_activity,
        per_category,
    })
}

/// Exact weekly hours.
pub fn hours_per_week(minutes: u32) -> f64 {
    f64::from(minutes) / 60.0
}

/// Average daily hours, rounded to three decimal places.
pub fn hours_per_day(minutes: u32) -> f64 {
    (f64::from(minutes) / 60.0 / DAYS_PER_WEEK as f64 * 1000.0).round() / 1000.0
}
