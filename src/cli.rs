use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// DietPlan — Estimates daily calories and builds a weekly meal plan from a profile.
#[derive(Parser, Debug)]
#[command(name = "diet-plan")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Path to the profile store JSON file.
    #[arg(short, long, global = true, env = "DIET_PLAN_FILE", default_value = "profiles.json")]
    pub file: PathBuf,

    /// Meal catalog JSON file replacing the built-in catalog.
    #[arg(long, global = true, env = "DIET_PLAN_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Log filter used when RUST_LOG is unset (e.g. "info", "diet_plan_rs=debug").
    #[arg(long, global = true, env = "DIET_PLAN_LOG", default_value = "warn")]
    pub log_level: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create or replace a profile.
    Add(AddArgs),

    /// List saved profiles, newest first.
    List,

    /// Show one profile.
    Show {
        name: String,
    },

    /// Change selected fields of a profile.
    Update(UpdateArgs),

    /// Delete a profile.
    Delete {
        name: String,

        /// Skip the confirmation prompt.
        #[arg(short, long)]
        yes: bool,
    },

    /// Recommend daily calories and a weekly meal plan for a profile.
    Recommend(RecommendArgs),
}

#[derive(Args, Debug, Default)]
pub struct AddArgs {
    #[arg(long)]
    pub name: Option<String>,

    /// Age in years.
    #[arg(long)]
    pub age: Option<u32>,

    /// Weight in kg.
    #[arg(long)]
    pub weight: Option<f64>,

    /// Height in cm.
    #[arg(long)]
    pub height: Option<f64>,

    /// "male" or anything else.
    #[arg(long)]
    pub gender: Option<String>,

    /// Weight Loss, Muscle Gain or Maintenance.
    #[arg(long)]
    pub goal: Option<String>,

    /// Dietary restriction; repeat for several (e.g. --restriction Vegan --restriction Nut-Free).
    #[arg(long = "restriction")]
    pub restrictions: Vec<String>,

    /// Prompt for any field not given on the command line.
    #[arg(short, long)]
    pub interactive: bool,
}

#[derive(Args, Debug)]
pub struct UpdateArgs {
    pub name: String,

    #[arg(long)]
    pub age: Option<u32>,

    #[arg(long)]
    pub weight: Option<f64>,

    #[arg(long)]
    pub height: Option<f64>,

    #[arg(long)]
    pub gender: Option<String>,

    #[arg(long)]
    pub goal: Option<String>,

    /// Replaces the whole restriction list; repeat for several.
    #[arg(long = "restriction")]
    pub restrictions: Option<Vec<String>>,

    /// Clear all restrictions.
    #[arg(long, conflicts_with = "restrictions")]
    pub no_restrictions: bool,
}

#[derive(Args, Debug)]
pub struct RecommendArgs {
    pub name: String,

    /// Sedentary, Light, Moderate, Active or Very Active.
    #[arg(long, default_value = "Moderate")]
    pub activity: String,

    /// Print the recommendation as JSON instead of tables.
    #[arg(long)]
    pub json: bool,

    /// Also write the weekly plan to this CSV file.
    #[arg(long)]
    pub csv: Option<PathBuf>,
}
