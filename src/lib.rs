pub mod cli;
pub mod error;
pub mod interface;
pub mod logging;
pub mod models;
pub mod planner;
pub mod state;

pub use error::{DietError, Result};
pub use models::{MealCandidate, Profile, Recommendation, WeeklyPlanRow};
pub use planner::{recommend, recommend_with};
