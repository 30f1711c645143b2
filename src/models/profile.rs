use std::fmt;

use serde::{Deserialize, Serialize};

/// A user's biometric profile and dietary restrictions.
///
/// `restrictions` keeps the comma-joined form the profile was saved with;
/// `"None"` stands for no restrictions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,

    /// Age in years.
    pub age: u32,

    /// Weight in kg.
    pub weight: f64,

    /// Height in cm.
    pub height: f64,

    pub gender: String,

    pub goal: String,

    #[serde(default = "no_restrictions")]
    pub restrictions: String,
}

fn no_restrictions() -> String {
    NO_RESTRICTIONS.to_string()
}

/// Stored value for an empty restriction list.
pub const NO_RESTRICTIONS: &str = "None";

impl Profile {
    /// Join restriction tags in order, storing `"None"` for an empty list.
    pub fn join_restrictions<S: AsRef<str>>(tags: &[S]) -> String {
        let joined = tags
            .iter()
            .map(|t| t.as_ref().trim())
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>()
            .join(",");

        if joined.is_empty() {
            no_restrictions()
        } else {
            joined
        }
    }

    /// Parsed goal; unknown labels count as maintenance.
    pub fn goal(&self) -> Goal {
        Goal::parse(&self.goal)
    }

    /// Basic validation: a name and positive body measurements.
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty()
            && self.weight.is_finite()
            && self.weight > 0.0
            && self.height.is_finite()
            && self.height > 0.0
    }

    /// Apply every field set on `update`, leaving the rest untouched.
    pub fn apply(&mut self, update: &ProfileUpdate) {
        if let Some(age) = update.age {
            self.age = age;
        }
        if let Some(weight) = update.weight {
            self.weight = weight;
        }
        if let Some(height) = update.height {
            self.height = height;
        }
        if let Some(gender) = &update.gender {
            self.gender = gender.clone();
        }
        if let Some(goal) = &update.goal {
            self.goal = goal.clone();
        }
        if let Some(restrictions) = &update.restrictions {
            self.restrictions = restrictions.clone();
        }
    }
}

/// Partial profile change. Only the fields that are `Some` are written.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileUpdate {
    pub age: Option<u32>,
    pub weight: Option<f64>,
    pub height: Option<f64>,
    pub gender: Option<String>,
    pub goal: Option<String>,
    pub restrictions: Option<String>,
}

impl ProfileUpdate {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Dietary goal driving calorie adjustment and meal ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Goal {
    WeightLoss,
    MuscleGain,
    Maintenance,
}

impl Goal {
    pub const ALL: [Goal; 3] = [Goal::WeightLoss, Goal::MuscleGain, Goal::Maintenance];

    /// Parse a goal label. Anything unrecognized is treated as maintenance.
    pub fn parse(label: &str) -> Self {
        match label {
            "Weight Loss" => Goal::WeightLoss,
            "Muscle Gain" => Goal::MuscleGain,
            _ => Goal::Maintenance,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Goal::WeightLoss => "Weight Loss",
            Goal::MuscleGain => "Muscle Gain",
            Goal::Maintenance => "Maintenance",
        }
    }

    /// Calories added to the activity-adjusted basal rate.
    pub fn calorie_adjustment(self) -> f64 {
        match self {
            Goal::WeightLoss => -500.0,
            Goal::MuscleGain => 300.0,
            Goal::Maintenance => 0.0,
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Physical activity level used to scale the basal metabolic rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ActivityLevel {
    Sedentary,
    Light,
    #[default]
    Moderate,
    Active,
    VeryActive,
}

impl ActivityLevel {
    /// Parse an activity label. Unknown labels fall back to moderate.
    pub fn parse(label: &str) -> Self {
        match label {
            "Sedentary" => ActivityLevel::Sedentary,
            "Light" => ActivityLevel::Light,
            "Moderate" => ActivityLevel::Moderate,
            "Active" => ActivityLevel::Active,
            "Very Active" => ActivityLevel::VeryActive,
            _ => ActivityLevel::default(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary",
            ActivityLevel::Light => "Light",
            ActivityLevel::Moderate => "Moderate",
            ActivityLevel::Active => "Active",
            ActivityLevel::VeryActive => "Very Active",
        }
    }

    pub fn multiplier(self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::VeryActive => 1.9,
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
