use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::{MealSlot, MealSummary};

/// One day of the weekly plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyPlanRow {
    #[serde(rename = "Day")]
    pub day: String,

    #[serde(rename = "Breakfast")]
    pub breakfast: String,

    #[serde(rename = "Lunch")]
    pub lunch: String,

    #[serde(rename = "Snack")]
    pub snack: String,

    #[serde(rename = "Dinner")]
    pub dinner: String,

    /// Sum of the calories of the four meals shown in this row.
    #[serde(rename = "Total Calories")]
    pub total_calories: u32,
}

impl WeeklyPlanRow {
    pub fn slot(&self, slot: MealSlot) -> &str {
        match slot {
            MealSlot::Breakfast => &self.breakfast,
            MealSlot::Lunch => &self.lunch,
            MealSlot::Snack => &self.snack,
            MealSlot::Dinner => &self.dinner,
        }
    }
}

/// Calorie budgets per macronutrient for a daily target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroTargets {
    pub protein_calories: i32,
    pub carbs_calories: i32,
    pub fat_calories: i32,
}

/// Share of the daily target for each meal slot. Reported only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotCalorieTargets {
    pub breakfast: i32,
    pub lunch: i32,
    pub snack: i32,
    pub dinner: i32,
}

impl SlotCalorieTargets {
    pub fn get(&self, slot: MealSlot) -> i32 {
        match slot {
            MealSlot::Breakfast => self.breakfast,
            MealSlot::Lunch => self.lunch,
            MealSlot::Snack => self.snack,
            MealSlot::Dinner => self.dinner,
        }
    }
}

/// Full result of a recommendation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub name: String,
    pub age: u32,
    pub weight: f64,
    pub height: f64,
    pub gender: String,
    pub goal: String,
    pub activity_level: String,
    pub daily_calories: i32,
    pub macros: MacroTargets,
    pub slot_targets: SlotCalorieTargets,
    /// Day-0 meal per slot.
    ///
    /// A slot whose catalog pool is empty has no entry here (it is not sent
    /// as an empty value); the weekly plan still fills it with the diet's
    /// default meal.
    pub meals_today: BTreeMap<MealSlot, MealSummary>,
    pub weekly_plan: Vec<WeeklyPlanRow>,
}
