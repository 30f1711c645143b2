use crate::models::{FallbackMeal, MealSlot};

// ─────────────────────────────────────────────────────────────────────────────
// Basal metabolic rate (revised Harris-Benedict)
// ─────────────────────────────────────────────────────────────────────────────

pub const MALE_BMR_BASE: f64 = 88.362;
pub const MALE_BMR_WEIGHT: f64 = 13.397;
pub const MALE_BMR_HEIGHT: f64 = 4.799;
pub const MALE_BMR_AGE: f64 = 5.677;

pub const OTHER_BMR_BASE: f64 = 447.593;
pub const OTHER_BMR_WEIGHT: f64 = 9.247;
pub const OTHER_BMR_HEIGHT: f64 = 3.098;
pub const OTHER_BMR_AGE: f64 = 4.330;

// ─────────────────────────────────────────────────────────────────────────────
// Meal breakdown
// ─────────────────────────────────────────────────────────────────────────────

/// Fraction of the daily target per slot (breakfast, lunch, snack, dinner).
pub const SLOT_CALORIE_SHARES: [(MealSlot, f64); 4] = [
    (MealSlot::Breakfast, 0.25),
    (MealSlot::Lunch, 0.35),
    (MealSlot::Snack, 0.10),
    (MealSlot::Dinner, 0.30),
];

/// Macro split (protein, carbs, fat) as fractions of daily calories.
pub const WEIGHT_LOSS_MACROS: (f64, f64, f64) = (0.40, 0.35, 0.25);
pub const MUSCLE_GAIN_MACROS: (f64, f64, f64) = (0.35, 0.45, 0.20);
pub const MAINTENANCE_MACROS: (f64, f64, f64) = (0.30, 0.50, 0.20);

// ─────────────────────────────────────────────────────────────────────────────
// Restrictions
// ─────────────────────────────────────────────────────────────────────────────

/// Restriction tag → substring that disqualifies a meal name.
///
/// Matching is case-sensitive and relies on catalog naming.
pub const EXCLUSION_SUBSTRINGS: [(&str, &str); 5] = [
    ("Vegetarian", "Meat"),
    ("Vegan", "Animal"),
    ("Gluten-Free", "Gluten"),
    ("Dairy-Free", "Dairy"),
    ("Nut-Free", "Nut"),
];

/// Every restriction tag a profile may carry.
pub const RESTRICTION_TAGS: [&str; 6] = [
    "Vegetarian",
    "Vegan",
    "Non-Vegetarian",
    "Gluten-Free",
    "Dairy-Free",
    "Nut-Free",
];

// ─────────────────────────────────────────────────────────────────────────────
// Weekly plan
// ─────────────────────────────────────────────────────────────────────────────

pub const DAYS_PER_WEEK: usize = 7;

pub const WEEK_DAYS: [&str; DAYS_PER_WEEK] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Fallbacks in slot order (breakfast, lunch, snack, dinner).
pub const VEGETARIAN_DEFAULTS: [FallbackMeal; 4] = [
    FallbackMeal { name: "Idli with Sambar", calories: 300 },
    FallbackMeal { name: "Millet Khichdi with Vegetables", calories: 520 },
    FallbackMeal { name: "Fresh Fruit (Seasonal)", calories: 120 },
    FallbackMeal { name: "Masoor Dal with Millet Rotis", calories: 420 },
];

pub const VEGAN_DEFAULTS: [FallbackMeal; 4] = [
    FallbackMeal { name: "Ragi Malt (Vegan)", calories: 320 },
    FallbackMeal { name: "Millet Khichdi (Vegan)", calories: 550 },
    FallbackMeal { name: "Sprouted Moong Salad", calories: 160 },
    FallbackMeal { name: "Vegetable Kurma with Ragi Rotis", calories: 400 },
];

pub const NON_VEGETARIAN_DEFAULTS: [FallbackMeal; 4] = [
    FallbackMeal { name: "Idli with Sambar", calories: 300 },
    FallbackMeal { name: "Grilled Fish with Steamed Rice", calories: 560 },
    FallbackMeal { name: "Tender Coconut Water and Flesh", calories: 110 },
    FallbackMeal { name: "Fish Curry with Rice", calories: 520 },
];
