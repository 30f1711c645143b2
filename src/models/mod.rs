pub mod meal;
pub mod plan;
pub mod profile;

pub use meal::{FallbackMeal, MealCandidate, MealSlot, MealSummary};
pub use plan::{MacroTargets, Recommendation, SlotCalorieTargets, WeeklyPlanRow};
pub use profile::{ActivityLevel, Goal, NO_RESTRICTIONS, Profile, ProfileUpdate};
