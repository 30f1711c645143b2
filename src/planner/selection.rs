use std::collections::BTreeMap;

use tracing::debug;

use crate::models::{Goal, MealCandidate, MealSlot, NO_RESTRICTIONS, SlotCalorieTargets};
use crate::planner::catalog::{MealCatalog, STANDARD_CATALOG};
use crate::planner::constants::*;

/// Restriction tags parsed from a profile's comma-joined list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RestrictionSet {
    tags: Vec<String>,
}

impl RestrictionSet {
    /// Split on commas. `"None"` and empty input give an empty set.
    ///
    /// Tokens are kept verbatim: `"Vegan, Gluten-Free"` yields `" Gluten-Free"`,
    /// which matches no known tag.
    pub fn parse(raw: &str) -> Self {
        if raw == NO_RESTRICTIONS {
            return Self::default();
        }

        let mut tags: Vec<String> = Vec::new();
        for tag in raw.split(',').filter(|t| !t.is_empty()) {
            if !tags.iter().any(|t| t == tag) {
                tags.push(tag.to_string());
            }
        }
        Self { tags }
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Name substrings that disqualify a meal under these restrictions.
    pub fn exclusions(&self) -> Vec<&'static str> {
        EXCLUSION_SUBSTRINGS
            .iter()
            .filter(|(tag, _)| self.contains(tag))
            .map(|(_, needle)| *needle)
            .collect()
    }

    /// Whether a meal name hits any active exclusion.
    pub fn excludes(&self, meal_name: &str) -> bool {
        self.exclusions()
            .into_iter()
            .any(|needle| meal_name.contains(needle))
    }
}

/// Day-lists per slot, Sunday first.
///
/// Entries borrow from the catalog the selection was made from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeeklySelection<'a> {
    slots: BTreeMap<MealSlot, Vec<&'a MealCandidate>>,
}

impl<'a> WeeklySelection<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, slot: MealSlot, day_list: Vec<&'a MealCandidate>) {
        self.slots.insert(slot, day_list);
    }

    /// The slot's day-list; empty if the slot was never filled.
    pub fn day_list(&self, slot: MealSlot) -> &[&'a MealCandidate] {
        self.slots.get(&slot).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Meal for a slot on a given day index, if the day-list reaches that far.
    pub fn meal(&self, slot: MealSlot, day: usize) -> Option<&'a MealCandidate> {
        self.day_list(slot).get(day).copied()
    }
}

/// Split the daily target across slots (truncated).
pub fn slot_calorie_targets(calories: i32) -> SlotCalorieTargets {
    let share = |slot: MealSlot| {
        SLOT_CALORIE_SHARES
            .iter()
            .find(|(s, _)| *s == slot)
            .map(|(_, fraction)| (calories as f64 * fraction) as i32)
            .unwrap_or(0)
    };

    SlotCalorieTargets {
        breakfast: share(MealSlot::Breakfast),
        lunch: share(MealSlot::Lunch),
        snack: share(MealSlot::Snack),
        dinner: share(MealSlot::Dinner),
    }
}

/// Candidates that survive the restriction filter.
///
/// Falls back to the whole pool when the filter removes everything.
pub fn eligible_pool<'a>(
    pool: &'a [MealCandidate],
    restrictions: &RestrictionSet,
) -> Vec<&'a MealCandidate> {
    let filtered: Vec<&MealCandidate> = pool
        .iter()
        .filter(|meal| !restrictions.excludes(&meal.name))
        .collect();

    if filtered.is_empty() && !pool.is_empty() {
        debug!(pool = pool.len(), "All candidates excluded, using full pool");
        return pool.iter().collect();
    }

    filtered
}

/// Order a pool for the week.
///
/// Sorted by calories ascending, then: muscle gain takes the richest meals
/// first, weight loss the lightest, and maintenance starts from the middle
/// (back half before front half).
pub fn order_pool<'a>(mut pool: Vec<&'a MealCandidate>, goal: Goal) -> Vec<&'a MealCandidate> {
    pool.sort_by_key(|meal| meal.calories);

    match goal {
        Goal::MuscleGain => pool.reverse(),
        Goal::WeightLoss => {}
        Goal::Maintenance => {
            let mid = pool.len() / 2;
            pool.rotate_left(mid);
        }
    }

    pool
}

/// Cycle an ordered pool into one entry per day.
pub fn cycle_week<'a>(ordered: &[&'a MealCandidate]) -> Vec<&'a MealCandidate> {
    if ordered.is_empty() {
        return Vec::new();
    }

    (0..DAYS_PER_WEEK)
        .map(|day| ordered[day % ordered.len()])
        .collect()
}

/// Pick a week of meals for every slot of `catalog`.
pub fn select_week<'a>(
    catalog: &'a MealCatalog,
    calories: i32,
    goal: Goal,
    restrictions: &str,
) -> WeeklySelection<'a> {
    let restriction_set = RestrictionSet::parse(restrictions);
    // Slot targets are not used for matching.
    let targets = slot_calorie_targets(calories);

    let mut selection = WeeklySelection::new();
    for slot in MealSlot::ALL {
        let pool = eligible_pool(catalog.pool(slot), &restriction_set);
        let ordered = order_pool(pool, goal);

        debug!(
            slot = slot.key(),
            target = targets.get(slot),
            eligible = ordered.len(),
            "Ordered slot pool"
        );

        selection.insert(slot, cycle_week(&ordered));
    }

    selection
}

/// [`select_week`] over the built-in catalog.
pub fn select_standard_week(
    calories: i32,
    goal: Goal,
    restrictions: &str,
) -> WeeklySelection<'static> {
    select_week(&STANDARD_CATALOG, calories, goal, restrictions)
}
