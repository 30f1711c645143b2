use std::collections::BTreeMap;

use diet_plan_rs::models::{ActivityLevel, Goal, MealCandidate, MealSlot, Profile};
use diet_plan_rs::planner::{
    DietType, MealCatalog, RestrictionSet, STANDARD_CATALOG, WeeklySelection, assemble_week,
    eligible_pool, order_pool, recommend, recommend_with, select_standard_week, select_week,
};

fn sample_catalog() -> MealCatalog {
    let mut slots = BTreeMap::new();
    slots.insert(
        MealSlot::Breakfast,
        vec![
            MealCandidate::new("Meat Omelette Wrap", 450, 28),
            MealCandidate::new("Poha with Peas", 280, 6),
            MealCandidate::new("Gluten Bread Toast", 320, 9),
        ],
    );
    slots.insert(
        MealSlot::Lunch,
        vec![
            MealCandidate::new("Meat Thali", 750, 40),
            MealCandidate::new("Meat Biryani", 700, 35),
        ],
    );
    slots.insert(
        MealSlot::Snack,
        vec![
            MealCandidate::new("Nut Chikki", 180, 5),
            MealCandidate::new("Dairy Lassi", 200, 7),
            MealCandidate::new("Guava", 70, 1),
            MealCandidate::new("Cucumber Sticks", 30, 1),
        ],
    );
    slots.insert(
        MealSlot::Dinner,
        vec![
            MealCandidate::new("Chapati with Dal", 450, 15),
            MealCandidate::new("Vegetable Stew", 380, 8),
            MealCandidate::new("Animal Protein Bowl", 600, 45),
        ],
    );
    MealCatalog::new(slots)
}

fn sample_profile() -> Profile {
    Profile {
        name: "Asha".to_string(),
        age: 25,
        weight: 60.0,
        height: 165.0,
        gender: "female".to_string(),
        goal: "Weight Loss".to_string(),
        restrictions: "Vegetarian".to_string(),
    }
}

fn is_meal_label(text: &str) -> bool {
    // "<name> (<digits> cal)"
    let Some(body) = text.strip_suffix(" cal)") else {
        return false;
    };
    let Some((name, digits)) = body.rsplit_once(" (") else {
        return false;
    };
    !name.is_empty() && !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
}

#[test]
fn test_select_week_has_seven_days_from_catalog() {
    let catalog = sample_catalog();

    for goal in Goal::ALL {
        for restrictions in ["None", "Vegetarian", "Vegan,Nut-Free", "Gluten-Free,Dairy-Free"] {
            let selection = select_week(&catalog, 2000, goal, restrictions);

            for slot in MealSlot::ALL {
                let day_list = selection.day_list(slot);
                assert_eq!(day_list.len(), 7, "{slot} {goal} {restrictions}");
                for meal in day_list {
                    assert!(
                        catalog.pool(slot).iter().any(|m| std::ptr::eq(m, *meal)),
                        "{} is not from the {} catalog",
                        meal.name,
                        slot
                    );
                }
            }
        }
    }
}

#[test]
fn test_vegetarian_excludes_meat() {
    let catalog = sample_catalog();
    let selection = select_week(&catalog, 1800, Goal::Maintenance, "Vegetarian");

    for slot in [MealSlot::Breakfast, MealSlot::Snack, MealSlot::Dinner] {
        assert!(
            selection.day_list(slot).iter().all(|m| !m.name.contains("Meat")),
            "{slot} contains a meat dish"
        );
    }
}

#[test]
fn test_fully_excluded_slot_falls_back_to_catalog() {
    let catalog = sample_catalog();
    let selection = select_week(&catalog, 1800, Goal::WeightLoss, "Vegetarian");

    // Every lunch is a meat dish, so the whole slot is used.
    let lunches = selection.day_list(MealSlot::Lunch);
    assert_eq!(lunches.len(), 7);
    assert_eq!(lunches[0].name, "Meat Biryani");
    assert_eq!(lunches[1].name, "Meat Thali");
}

#[test]
fn test_combined_restrictions() {
    let catalog = sample_catalog();
    let selection = select_week(&catalog, 2200, Goal::MuscleGain, "Vegan,Nut-Free,Dairy-Free");

    let snacks: Vec<&str> = selection
        .day_list(MealSlot::Snack)
        .iter()
        .map(|m| m.name.as_str())
        .collect();
    assert!(snacks.iter().all(|n| !n.contains("Nut") && !n.contains("Dairy")));
    assert_eq!(snacks[0], "Guava");

    let dinners = selection.day_list(MealSlot::Dinner);
    assert!(dinners.iter().all(|m| !m.name.contains("Animal")));
}

#[test]
fn test_pool_ordering_properties() {
    let catalog = sample_catalog();
    let pool = || eligible_pool(catalog.pool(MealSlot::Snack), &RestrictionSet::default());

    let loss = order_pool(pool(), Goal::WeightLoss);
    assert!(loss.windows(2).all(|w| w[0].calories <= w[1].calories));

    let gain = order_pool(pool(), Goal::MuscleGain);
    assert!(gain.windows(2).all(|w| w[0].calories >= w[1].calories));

    let mid = loss.len() / 2;
    let balanced = order_pool(pool(), Goal::Maintenance);
    assert!(balanced[0].calories >= loss[mid].calories);
    assert_eq!(balanced[0].calories, 180);
}

#[test]
fn test_pool_of_three_cycles_every_three_days() {
    let catalog = sample_catalog();
    let selection = select_week(&catalog, 2000, Goal::WeightLoss, "None");
    let dinners = selection.day_list(MealSlot::Dinner);

    assert!(std::ptr::eq(dinners[0], dinners[3]));
    assert!(std::ptr::eq(dinners[1], dinners[4]));
    assert!(std::ptr::eq(dinners[2], dinners[5]));
    assert!(std::ptr::eq(dinners[0], dinners[6]));
    assert_eq!(dinners[0].name, "Vegetable Stew");
}

#[test]
fn test_standard_catalog_maintenance_order() {
    let selection = select_standard_week(2400, Goal::Maintenance, "None");
    let breakfasts: Vec<u32> = selection
        .day_list(MealSlot::Breakfast)
        .iter()
        .map(|m| m.calories)
        .collect();

    // sorted: 300, 320, 350, 380, 420 -> rotated at index 2
    assert_eq!(breakfasts, vec![350, 380, 420, 300, 320, 350, 380]);
}

#[test]
fn test_plan_totals_use_defaults_for_short_lists() {
    let catalog = sample_catalog();
    let full = select_week(&catalog, 2000, Goal::WeightLoss, "Vegan");

    let mut selection = WeeklySelection::new();
    for slot in [MealSlot::Breakfast, MealSlot::Snack, MealSlot::Dinner] {
        selection.insert(slot, full.day_list(slot).to_vec());
    }
    selection.insert(MealSlot::Lunch, full.day_list(MealSlot::Lunch)[..5].to_vec());

    let plan = assemble_week(&selection, Some("Vegan, Gluten-Free"));
    let fallback_lunch = DietType::Vegan.fallback(MealSlot::Lunch);

    for (day, row) in plan.iter().enumerate() {
        let lunch_calories = match selection.meal(MealSlot::Lunch, day) {
            Some(meal) => meal.calories,
            None => fallback_lunch.calories,
        };
        let expected: u32 = [MealSlot::Breakfast, MealSlot::Snack, MealSlot::Dinner]
            .iter()
            .map(|slot| selection.meal(*slot, day).map(|m| m.calories).unwrap_or(0))
            .sum::<u32>()
            + lunch_calories;
        assert_eq!(row.total_calories, expected, "{}", row.day);
    }

    assert_eq!(plan[5].lunch, "Millet Khichdi (Vegan) (550 cal)");
    assert_eq!(plan[6].lunch, "Millet Khichdi (Vegan) (550 cal)");
}

#[test]
fn test_spaced_restriction_tokens_do_not_filter() {
    let mut slots = BTreeMap::new();
    for slot in MealSlot::ALL {
        slots.insert(
            slot,
            vec![
                MealCandidate::new("Gluten Roti", 100, 3),
                MealCandidate::new("Rice", 200, 4),
            ],
        );
    }
    let catalog = MealCatalog::new(slots);

    // " Gluten-Free" is not a known tag, so no gluten exclusion applies.
    let selection = select_week(&catalog, 1500, Goal::WeightLoss, "Vegan, Gluten-Free");
    for slot in MealSlot::ALL {
        assert_eq!(selection.day_list(slot)[0].name, "Gluten Roti", "{slot}");
        assert_eq!(selection.day_list(slot)[1].name, "Rice", "{slot}");
    }

    // The joined form does exclude it.
    let strict = select_week(&catalog, 1500, Goal::WeightLoss, "Vegan,Gluten-Free");
    assert!(strict.day_list(MealSlot::Lunch).iter().all(|m| m.name == "Rice"));

    // Diet classification still trims and sees Vegan.
    assert_eq!(DietType::classify(Some("Vegan, Gluten-Free")), DietType::Vegan);
    let plan = assemble_week(&selection, Some("Vegan, Gluten-Free"));
    assert_eq!(plan[0].breakfast, "Gluten Roti (100 cal)");
    assert_eq!(plan[0].total_calories, 400);
}

#[test]
fn test_recommend_end_to_end() {
    let rec = recommend(&sample_profile());

    // (447.593 + 9.247*60 + 3.098*165 - 4.330*25) * 1.55 - 500 = 1678.27
    assert_eq!(rec.daily_calories, 1678);
    assert_eq!(rec.activity_level, "Moderate");

    assert_eq!(rec.weekly_plan.len(), 7);
    assert_eq!(rec.weekly_plan[0].day, "Sunday");
    assert_eq!(rec.weekly_plan[6].day, "Saturday");
    for row in &rec.weekly_plan {
        assert!(is_meal_label(&row.breakfast), "bad label: {}", row.breakfast);
        assert!(is_meal_label(&row.dinner), "bad label: {}", row.dinner);
    }

    // Weight loss starts from the lightest meal of each slot.
    let today = &rec.meals_today;
    assert_eq!(today[&MealSlot::Breakfast].name, "Idli with Sambar & Coconut Chutney");
    assert_eq!(today[&MealSlot::Snack].calories, 80);
    assert_eq!(
        rec.weekly_plan[0].breakfast,
        "Idli with Sambar & Coconut Chutney (300 cal)"
    );
    assert_eq!(rec.weekly_plan[0].total_calories, 300 + 520 + 80 + 400);
}

#[test]
fn test_empty_slot_is_left_out_of_meals_today() {
    let mut catalog_slots = BTreeMap::new();
    for slot in [MealSlot::Breakfast, MealSlot::Lunch, MealSlot::Dinner] {
        catalog_slots.insert(slot, vec![MealCandidate::new("Vegetable Upma", 300, 8)]);
    }
    let catalog = MealCatalog::new(catalog_slots);

    let rec = recommend_with(&sample_profile(), ActivityLevel::Moderate, &catalog);

    assert_eq!(rec.meals_today.len(), 3);
    assert!(!rec.meals_today.contains_key(&MealSlot::Snack));
    for row in &rec.weekly_plan {
        assert_eq!(row.snack, "Fresh Fruit (Seasonal) (120 cal)");
        assert_eq!(row.total_calories, 300 * 3 + 120);
    }
}

#[test]
fn test_recommend_never_fails_on_odd_labels() {
    let mut profile = sample_profile();
    profile.goal = "Bulk???".to_string();
    profile.gender = "".to_string();
    profile.restrictions = "Keto,,Paleo".to_string();

    let rec = recommend(&profile);
    assert_eq!(rec.weekly_plan.len(), 7);
    assert_eq!(rec.meals_today.len(), 4);
    assert_eq!(rec.goal, "Bulk???");
}

#[test]
fn test_recommendation_json_shape() {
    let rec = recommend(&sample_profile());
    let json = serde_json::to_value(&rec).unwrap();

    assert_eq!(json["daily_calories"], 1678);
    assert_eq!(json["weekly_plan"][0]["Day"], "Sunday");
    assert!(json["weekly_plan"][0]["Total Calories"].is_u64());
    assert_eq!(json["meals_today"]["lunch"]["calories"], 520);
}

#[test]
fn test_standard_catalog_is_shared() {
    let a = select_standard_week(2000, Goal::WeightLoss, "None");
    let b = select_standard_week(1500, Goal::WeightLoss, "None");
    assert!(std::ptr::eq(
        a.day_list(MealSlot::Lunch)[0],
        b.day_list(MealSlot::Lunch)[0]
    ));
    assert!(std::ptr::eq(
        a.day_list(MealSlot::Lunch)[0],
        &STANDARD_CATALOG.pool(MealSlot::Lunch)[1]
    ));
}
