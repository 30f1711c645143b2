use std::collections::BTreeMap;

use tracing::info;

use crate::models::{ActivityLevel, MealSlot, MealSummary, Profile, Recommendation};
use crate::planner::calories::{estimate_daily_calories, macro_targets};
use crate::planner::catalog::{MealCatalog, STANDARD_CATALOG};
use crate::planner::selection::{select_week, slot_calorie_targets};
use crate::planner::weekly::assemble_week;

/// Recommend a calorie target and weekly plan at moderate activity from the
/// built-in catalog.
pub fn recommend(profile: &Profile) -> Recommendation {
    recommend_with(profile, ActivityLevel::default(), &STANDARD_CATALOG)
}

/// Recommend with an explicit activity level and catalog.
///
/// Unknown goals, genders and restriction tags fall back to defaults; this
/// never fails.
pub fn recommend_with(
    profile: &Profile,
    activity: ActivityLevel,
    catalog: &MealCatalog,
) -> Recommendation {
    let goal = profile.goal();
    let daily_calories = estimate_daily_calories(
        profile.weight,
        profile.height,
        profile.age,
        &profile.gender,
        activity,
        goal,
    );

    let selection = select_week(catalog, daily_calories, goal, &profile.restrictions);

    let meals_today: BTreeMap<MealSlot, MealSummary> = MealSlot::ALL
        .into_iter()
        .filter_map(|slot| selection.meal(slot, 0).map(|m| (slot, MealSummary::from(m))))
        .collect();

    let weekly_plan = assemble_week(&selection, Some(profile.restrictions.as_str()));

    info!(
        profile = %profile.name,
        daily_calories,
        goal = goal.label(),
        "Built recommendation"
    );

    Recommendation {
        name: profile.name.clone(),
        age: profile.age,
        weight: profile.weight,
        height: profile.height,
        gender: profile.gender.clone(),
        goal: profile.goal.clone(),
        activity_level: activity.label().to_string(),
        daily_calories,
        macros: macro_targets(daily_calories, goal),
        slot_targets: slot_calorie_targets(daily_calories),
        meals_today,
        weekly_plan,
    }
}
