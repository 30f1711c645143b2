use crate::models::{MealSlot, Profile, Recommendation, WeeklyPlanRow};

/// Display saved profiles, one per line.
pub fn display_profile_list(profiles: &[&Profile]) {
    if profiles.is_empty() {
        println!("No profiles saved. Use 'add' to create one.");
        return;
    }

    println!();
    println!("=== Profiles ({} saved) ===", profiles.len());
    println!();

    let max_name_len = profiles.iter().map(|p| p.name.len()).max().unwrap_or(10);

    for profile in profiles {
        println!(
            "  {:<width$}  {:>3} y  {:>5.1} kg  {:>5.1} cm  {:<8} {:<12} {}",
            profile.name,
            profile.age,
            profile.weight,
            profile.height,
            profile.gender,
            profile.goal,
            profile.restrictions,
            width = max_name_len
        );
    }

    println!();
}

/// Display a single profile.
pub fn display_profile(profile: &Profile) {
    println!();
    println!("=== {} ===", profile.name);
    println!("Age:          {}", profile.age);
    println!("Weight:       {} kg", profile.weight);
    println!("Height:       {} cm", profile.height);
    println!("Gender:       {}", profile.gender);
    println!("Goal:         {}", profile.goal);
    println!("Restrictions: {}", profile.restrictions);
    println!();
}

/// Display the calorie target, today's meals and the weekly plan.
pub fn display_recommendation(rec: &Recommendation) {
    println!();
    println!("=== Recommendation for {} ===", rec.name);
    println!();
    println!(
        "Daily calories: {} ({} activity, {})",
        rec.daily_calories, rec.activity_level, rec.goal
    );
    println!(
        "Macros: protein {} cal | carbs {} cal | fat {} cal",
        rec.macros.protein_calories, rec.macros.carbs_calories, rec.macros.fat_calories
    );
    println!();

    println!("--- Today ---");
    for slot in MealSlot::ALL {
        match rec.meals_today.get(&slot) {
            Some(meal) => println!(
                "  {:<9} {} ({} cal)  [target {} cal]",
                slot.title(),
                meal.name,
                meal.calories,
                rec.slot_targets.get(slot)
            ),
            None => println!("  {:<9} (none)", slot.title()),
        }
    }
    println!();

    display_weekly_plan(&rec.weekly_plan);
}

/// Display the weekly plan as a table.
pub fn display_weekly_plan(plan: &[WeeklyPlanRow]) {
    if plan.is_empty() {
        println!("No weekly plan generated.");
        return;
    }

    let width = |slot: MealSlot| {
        plan.iter()
            .map(|row| row.slot(slot).len())
            .max()
            .unwrap_or(0)
            .max(slot.title().len())
    };
    let widths: Vec<usize> = MealSlot::ALL.iter().map(|s| width(*s)).collect();

    println!("--- Weekly Plan ---");
    let mut header = format!("{:<9}", "Day");
    for (slot, w) in MealSlot::ALL.iter().zip(&widths) {
        header.push_str(&format!(" | {:<w$}", slot.title(), w = *w));
    }
    header.push_str(" | Total");
    println!("{}", header);
    println!("{}", "-".repeat(header.len()));

    for row in plan {
        let mut line = format!("{:<9}", row.day);
        for (slot, w) in MealSlot::ALL.iter().zip(&widths) {
            line.push_str(&format!(" | {:<w$}", row.slot(*slot), w = *w));
        }
        line.push_str(&format!(" | {:>5}", row.total_calories));
        println!("{}", line);
    }

    let week_total: u32 = plan.iter().map(|r| r.total_calories).sum();
    println!();
    println!("Weekly total: {} cal (avg {} cal/day)", week_total, week_total / plan.len() as u32);
    println!();
}
