use tracing::debug;

use crate::models::{ActivityLevel, Goal, MacroTargets};
use crate::planner::constants::*;

/// Basal metabolic rate in kcal/day.
///
/// `"male"` (any case) uses the male coefficients; every other value uses
/// the second set.
pub fn basal_metabolic_rate(weight: f64, height: f64, age: u32, gender: &str) -> f64 {
    let age = age as f64;
    if gender.eq_ignore_ascii_case("male") {
        MALE_BMR_BASE + MALE_BMR_WEIGHT * weight + MALE_BMR_HEIGHT * height - MALE_BMR_AGE * age
    } else {
        OTHER_BMR_BASE + OTHER_BMR_WEIGHT * weight + OTHER_BMR_HEIGHT * height
            - OTHER_BMR_AGE * age
    }
}

/// Total daily energy expenditure before any goal adjustment.
pub fn total_daily_expenditure(
    weight: f64,
    height: f64,
    age: u32,
    gender: &str,
    activity: ActivityLevel,
) -> f64 {
    basal_metabolic_rate(weight, height, age, gender) * activity.multiplier()
}

/// Daily calorie target.
///
/// The goal adjustment is applied to the unrounded expenditure and the
/// result is truncated toward zero afterwards. Very low expenditure with a
/// weight-loss goal gives a negative target.
pub fn estimate_daily_calories(
    weight: f64,
    height: f64,
    age: u32,
    gender: &str,
    activity: ActivityLevel,
    goal: Goal,
) -> i32 {
    let tdee = total_daily_expenditure(weight, height, age, gender, activity);
    let adjusted = tdee + goal.calorie_adjustment();
    let calories = adjusted.trunc() as i32;

    debug!(
        tdee,
        activity = activity.label(),
        goal = goal.label(),
        calories,
        "Estimated daily calories"
    );

    calories
}

/// Protein/carbs/fat calorie budgets for a goal.
pub fn macro_targets(calories: i32, goal: Goal) -> MacroTargets {
    let (protein, carbs, fat) = match goal {
        Goal::MuscleGain => MUSCLE_GAIN_MACROS,
        Goal::WeightLoss => WEIGHT_LOSS_MACROS,
        Goal::Maintenance => MAINTENANCE_MACROS,
    };
    let calories = calories as f64;

    MacroTargets {
        protein_calories: (calories * protein) as i32,
        carbs_calories: (calories * carbs) as i32,
        fat_calories: (calories * fat) as i32,
    }
}
