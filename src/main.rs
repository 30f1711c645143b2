use std::path::Path;

use clap::Parser;
use tracing::debug;

use diet_plan_rs::cli::{AddArgs, Cli, Command, RecommendArgs, UpdateArgs};
use diet_plan_rs::error::{DietError, Result};
use diet_plan_rs::interface::{
    collect_profile, display_profile, display_profile_list, display_recommendation,
    prompt_yes_no, write_plan_csv,
};
use diet_plan_rs::logging::init_logging;
use diet_plan_rs::models::{ActivityLevel, Profile, ProfileUpdate};
use diet_plan_rs::planner::{MealCatalog, STANDARD_CATALOG, load_catalog, recommend_with};
use diet_plan_rs::state::{ProfileBook, load_profiles, save_profiles};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level)?;

    let path = cli.file.as_path();

    match cli.command {
        Command::Add(args) => cmd_add(path, args),
        Command::List => cmd_list(path),
        Command::Show { name } => cmd_show(path, &name),
        Command::Update(args) => cmd_update(path, args),
        Command::Delete { name, yes } => cmd_delete(path, &name, yes),
        Command::Recommend(args) => cmd_recommend(path, cli.catalog.as_deref(), args),
    }
}

fn open_book(path: &Path) -> Result<ProfileBook> {
    Ok(ProfileBook::new(load_profiles(path)?))
}

/// Create or replace a profile.
fn cmd_add(path: &Path, args: AddArgs) -> Result<()> {
    let mut book = open_book(path)?;
    let profile = collect_profile(args)?;
    let name = profile.name.clone();

    let replaced = book.upsert(profile)?;
    save_profiles(path, book.profiles())?;

    if replaced {
        println!("Profile updated for {}", name);
    } else {
        println!("Profile saved for {}", name);
    }
    Ok(())
}

/// List all profiles.
fn cmd_list(path: &Path) -> Result<()> {
    let book = open_book(path)?;
    display_profile_list(&book.list_all());
    Ok(())
}

/// Show a single profile.
fn cmd_show(path: &Path, name: &str) -> Result<()> {
    let book = open_book(path)?;
    display_profile(book.require(name)?);
    Ok(())
}

/// Apply a partial update to a profile.
fn cmd_update(path: &Path, args: UpdateArgs) -> Result<()> {
    let restrictions = if args.no_restrictions {
        Some(Profile::join_restrictions::<&str>(&[]))
    } else {
        args.restrictions.as_deref().map(Profile::join_restrictions)
    };

    let update = ProfileUpdate {
        age: args.age,
        weight: args.weight,
        height: args.height,
        gender: args.gender,
        goal: args.goal,
        restrictions,
    };

    if update.is_empty() {
        println!("Nothing to update. Pass at least one field, e.g. --weight 68.");
        return Ok(());
    }

    let mut book = open_book(path)?;
    book.update(&args.name, &update)?;
    save_profiles(path, book.profiles())?;
    println!("Profile updated for {}", args.name);
    Ok(())
}

/// Delete a profile after confirmation.
fn cmd_delete(path: &Path, name: &str, yes: bool) -> Result<()> {
    let mut book = open_book(path)?;
    book.require(name)?;

    if !yes && !prompt_yes_no(&format!("Delete profile '{}'?", name), false)? {
        println!("Kept profile {}", name);
        return Ok(());
    }

    book.delete(name);
    save_profiles(path, book.profiles())?;
    println!("Profile {} deleted", name);
    Ok(())
}

/// Recommend calories and a weekly plan for a profile.
fn cmd_recommend(path: &Path, catalog_path: Option<&Path>, args: RecommendArgs) -> Result<()> {
    let book = open_book(path)?;
    let profile = book.require(&args.name)?;

    let custom_catalog = match catalog_path {
        Some(p) => {
            let catalog = load_catalog(p)?;
            if catalog.is_empty() {
                return Err(DietError::InvalidInput(format!(
                    "catalog {} has no meals",
                    p.display()
                )));
            }
            debug!(path = %p.display(), meals = catalog.len(), "Loaded meal catalog");
            Some(catalog)
        }
        None => None,
    };
    let catalog: &MealCatalog = custom_catalog.as_ref().unwrap_or(&*STANDARD_CATALOG);

    let activity = ActivityLevel::parse(&args.activity);
    let rec = recommend_with(profile, activity, catalog);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&rec)?);
    } else {
        display_recommendation(&rec);
    }

    if let Some(csv_path) = &args.csv {
        write_plan_csv(&rec.weekly_plan, csv_path)?;
        if !args.json {
            println!("Wrote weekly plan to {}", csv_path.display());
        }
    }

    Ok(())
}
