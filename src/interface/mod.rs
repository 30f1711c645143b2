pub mod export;
pub mod prompts;
pub mod render;

pub use export::write_plan_csv;
pub use prompts::{
    collect_profile, prompt_age, prompt_gender, prompt_goal, prompt_measurement, prompt_name,
    prompt_restrictions, prompt_yes_no,
};
pub use render::{display_profile, display_profile_list, display_recommendation, display_weekly_plan};
