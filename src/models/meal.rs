use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the four fixed meals of a day, in serving order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Snack,
    Dinner,
}

impl MealSlot {
    pub const ALL: [MealSlot; 4] = [
        MealSlot::Breakfast,
        MealSlot::Lunch,
        MealSlot::Snack,
        MealSlot::Dinner,
    ];

    pub fn key(self) -> &'static str {
        match self {
            MealSlot::Breakfast => "breakfast",
            MealSlot::Lunch => "lunch",
            MealSlot::Snack => "snack",
            MealSlot::Dinner => "dinner",
        }
    }

    /// Capitalized name used in plan columns.
    pub fn title(self) -> &'static str {
        match self {
            MealSlot::Breakfast => "Breakfast",
            MealSlot::Lunch => "Lunch",
            MealSlot::Snack => "Snack",
            MealSlot::Dinner => "Dinner",
        }
    }
}

impl fmt::Display for MealSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A catalog meal that can be scheduled into a slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealCandidate {
    pub name: String,
    pub calories: u32,
    /// Protein in grams.
    #[serde(default)]
    pub protein: u32,
}

impl MealCandidate {
    pub fn new(name: &str, calories: u32, protein: u32) -> Self {
        Self {
            name: name.to_string(),
            calories,
            protein,
        }
    }

    /// Plan cell text, e.g. `Roasted Chickpeas (150 cal)`.
    pub fn display_label(&self) -> String {
        format_meal(&self.name, self.calories)
    }
}

/// Hardcoded stand-in for a slot whose day-list runs short.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FallbackMeal {
    pub name: &'static str,
    pub calories: u32,
}

impl FallbackMeal {
    pub fn display_label(&self) -> String {
        format_meal(self.name, self.calories)
    }
}

/// Name and calories of a meal as reported to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealSummary {
    pub name: String,
    pub calories: u32,
}

impl From<&MealCandidate> for MealSummary {
    fn from(meal: &MealCandidate) -> Self {
        Self {
            name: meal.name.clone(),
            calories: meal.calories,
        }
    }
}

pub fn format_meal(name: &str, calories: u32) -> String {
    format!("{} ({} cal)", name, calories)
}
