pub mod calories;
pub mod catalog;
pub mod constants;
pub mod recommend;
pub mod selection;
pub mod weekly;

pub use calories::{
    basal_metabolic_rate, estimate_daily_calories, macro_targets, total_daily_expenditure,
};
pub use catalog::{MealCatalog, STANDARD_CATALOG, load_catalog};
pub use constants::*;
pub use recommend::{recommend, recommend_with};
pub use selection::{
    RestrictionSet, WeeklySelection, cycle_week, eligible_pool, order_pool, select_standard_week,
    select_week, slot_calorie_targets,
};
pub use weekly::{DietType, assemble_week};
