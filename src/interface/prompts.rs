use dialoguer::{Confirm, Input, MultiSelect, Select};

use crate::cli::AddArgs;
use crate::error::{DietError, Result};
use crate::models::{Goal, Profile};
use crate::planner::constants::RESTRICTION_TAGS;

/// Prompt for a profile name.
pub fn prompt_name() -> Result<String> {
    let input: String = Input::new()
        .with_prompt("Profile name")
        .validate_with(|s: &String| {
            if s.trim().is_empty() {
                Err("Name cannot be empty")
            } else {
                Ok(())
            }
        })
        .interact_text()?;

    Ok(input.trim().to_string())
}

/// Prompt for age in years.
pub fn prompt_age() -> Result<u32> {
    let input: String = Input::new()
        .with_prompt("Age (years)")
        .default("30".to_string())
        .interact_text()?;

    input
        .trim()
        .parse()
        .map_err(|_| DietError::InvalidInput("Invalid age".to_string()))
}

/// Prompt for a positive measurement such as weight or height.
pub fn prompt_measurement(prompt: &str, default: f64) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?;

    let value: f64 = input
        .trim()
        .parse()
        .map_err(|_| DietError::InvalidInput("Invalid number".to_string()))?;

    if value <= 0.0 {
        return Err(DietError::InvalidInput(format!(
            "{} must be greater than 0",
            prompt
        )));
    }

    Ok(value)
}

/// Prompt for gender.
pub fn prompt_gender() -> Result<String> {
    let options = ["male", "female", "other"];
    let selection = Select::new()
        .with_prompt("Gender")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(options[selection].to_string())
}

/// Prompt for the dietary goal.
pub fn prompt_goal() -> Result<String> {
    let options: Vec<&str> = Goal::ALL.iter().map(|g| g.label()).collect();
    let selection = Select::new()
        .with_prompt("Goal")
        .items(&options)
        .default(2) // maintenance
        .interact()?;

    Ok(options[selection].to_string())
}

/// Prompt for dietary restrictions.
pub fn prompt_restrictions() -> Result<Vec<String>> {
    let selections = MultiSelect::new()
        .with_prompt("Dietary restrictions (space to toggle, enter to confirm)")
        .items(&RESTRICTION_TAGS)
        .interact()?;

    Ok(selections
        .into_iter()
        .map(|idx| RESTRICTION_TAGS[idx].to_string())
        .collect())
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Build a profile from command-line fields.
///
/// With `interactive`, missing fields are prompted for; otherwise a missing
/// required field is an error. Gender, goal and restrictions default to
/// "other", "Maintenance" and none.
pub fn collect_profile(args: AddArgs) -> Result<Profile> {
    let interactive = args.interactive;
    let missing = |field: &str| DietError::InvalidInput(format!("--{} is required", field));

    let name = match args.name {
        Some(name) => name.trim().to_string(),
        None if interactive => prompt_name()?,
        None => return Err(missing("name")),
    };
    let age = match args.age {
        Some(age) => age,
        None if interactive => prompt_age()?,
        None => return Err(missing("age")),
    };
    let weight = match args.weight {
        Some(weight) => weight,
        None if interactive => prompt_measurement("Weight (kg)", 70.0)?,
        None => return Err(missing("weight")),
    };
    let height = match args.height {
        Some(height) => height,
        None if interactive => prompt_measurement("Height (cm)", 170.0)?,
        None => return Err(missing("height")),
    };
    let gender = match args.gender {
        Some(gender) => gender,
        None if interactive => prompt_gender()?,
        None => "other".to_string(),
    };
    let goal = match args.goal {
        Some(goal) => goal,
        None if interactive => prompt_goal()?,
        None => Goal::Maintenance.label().to_string(),
    };
    let restrictions = if args.restrictions.is_empty() && interactive {
        prompt_restrictions()?
    } else {
        args.restrictions
    };

    Ok(Profile {
        name,
        age,
        weight,
        height,
        gender,
        goal,
        restrictions: Profile::join_restrictions(&restrictions),
    })
}
