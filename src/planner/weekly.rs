use std::fmt;

use tracing::debug;

use crate::models::{FallbackMeal, MealSlot, WeeklyPlanRow};
use crate::planner::constants::*;
use crate::planner::selection::WeeklySelection;

/// Diet family used to choose fallback meals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DietType {
    #[default]
    Vegetarian,
    Vegan,
    NonVegetarian,
}

impl DietType {
    /// Classify a comma-joined restriction list, case-insensitively.
    ///
    /// Vegan wins over vegetarian, which wins over non-vegetarian. No match
    /// (or no list at all) means vegetarian.
    pub fn classify(restrictions: Option<&str>) -> Self {
        let Some(raw) = restrictions else {
            return DietType::default();
        };

        let parts: Vec<String> = raw
            .split(',')
            .map(|p| p.trim().to_lowercase())
            .filter(|p| !p.is_empty())
            .collect();
        let has = |tag: &str| parts.iter().any(|p| p == tag);

        if has("vegan") {
            DietType::Vegan
        } else if has("vegetarian") {
            DietType::Vegetarian
        } else if has("non-vegetarian") || has("nonveg") || has("non veg") {
            DietType::NonVegetarian
        } else {
            DietType::default()
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DietType::Vegetarian => "Vegetarian",
            DietType::Vegan => "Vegan",
            DietType::NonVegetarian => "Non-Vegetarian",
        }
    }

    /// Stand-in meal for a slot whose day-list runs short.
    pub fn fallback(self, slot: MealSlot) -> FallbackMeal {
        let table = match self {
            DietType::Vegetarian => &VEGETARIAN_DEFAULTS,
            DietType::Vegan => &VEGAN_DEFAULTS,
            DietType::NonVegetarian => &NON_VEGETARIAN_DEFAULTS,
        };
        table[slot as usize]
    }
}

impl fmt::Display for DietType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Build the Sunday-to-Saturday plan from per-slot day-lists.
pub fn assemble_week(
    selection: &WeeklySelection<'_>,
    restrictions: Option<&str>,
) -> Vec<WeeklyPlanRow> {
    let diet = DietType::classify(restrictions);
    debug!(diet = diet.label(), "Assembling weekly plan");

    WEEK_DAYS
        .iter()
        .enumerate()
        .map(|(day_idx, day)| {
            let mut total_calories = 0;
            let mut cell = |slot: MealSlot| {
                let (label, calories) = match selection.meal(slot, day_idx) {
                    Some(meal) => (meal.display_label(), meal.calories),
                    None => {
                        let fallback = diet.fallback(slot);
                        debug!(
                            day = *day,
                            slot = slot.key(),
                            meal = fallback.name,
                            "Using fallback meal"
                        );
                        (fallback.display_label(), fallback.calories)
                    }
                };
                total_calories += calories;
                label
            };

            let breakfast = cell(MealSlot::Breakfast);
            let lunch = cell(MealSlot::Lunch);
            let snack = cell(MealSlot::Snack);
            let dinner = cell(MealSlot::Dinner);

            WeeklyPlanRow {
                day: day.to_string(),
                breakfast,
                lunch,
                snack,
                dinner,
                total_calories,
            }
        })
        .collect()
}
