//! Domain value types for a single advisory request.
//!
//! Everything here is built once from the form inputs and stays immutable
//! for the lifetime of the request. String parsing is deliberately lenient:
//! unrecognized activity/goal names fall back to documented defaults rather
//! than erroring, so the rule engine stays a total function.

/// Anthropometric inputs for one person.
#[derive(Debug, Clone, PartialEq)]
pub struct PersonProfile {
    pub age: u32,
    pub gender: Gender,
    pub height_cm: f32,
    pub weight_kg: f32,
}

impl PersonProfile {
    /// Body Mass Index: weight_kg / (height_m)^2.
    pub fn bmi(&self) -> f32 {
        let height_m = self.height_cm / 100.0;
        self.weight_kg / (height_m * height_m)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// First-letter match: any name starting with 'm' or 'M' is Male,
    /// everything else is Female.
    pub fn from_name(name: &str) -> Self {
        if name.trim().to_lowercase().starts_with('m') {
            Gender::Male
        } else {
            Gender::Female
        }
    }

    /// Additive constant of the Mifflin-St Jeor BMR equation.
    pub fn bmr_constant(&self) -> f32 {
        match self {
            Gender::Male => 5.0,
            Gender::Female => -161.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActivityLevel {
    Sedentary,
    Light,
    #[default]
    Moderate,
    Very,
    Extra,
}

impl ActivityLevel {
    /// Unrecognized names fall back to Moderate (factor 1.55).
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "sedentary" => ActivityLevel::Sedentary,
            "light" => ActivityLevel::Light,
            "moderate" => ActivityLevel::Moderate,
            "very" => ActivityLevel::Very,
            "extra" => ActivityLevel::Extra,
            _ => ActivityLevel::Moderate,
        }
    }

    /// TDEE multiplier applied to the BMR.
    pub fn multiplier(&self) -> f32 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Very => 1.725,
            ActivityLevel::Extra => 1.9,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Goal {
    #[default]
    Maintain,
    Gain,
    Loss,
}

impl Goal {
    /// Unrecognized names fall back to Maintain (no offset).
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "gain" => Goal::Gain,
            "loss" => Goal::Loss,
            _ => Goal::Maintain,
        }
    }

    /// Kcal offset applied to the TDEE.
    pub fn calorie_offset(&self) -> f32 {
        match self {
            Goal::Maintain => 0.0,
            Goal::Gain => 500.0,
            Goal::Loss => -500.0,
        }
    }
}

/// Free-text health conditions, lowercased at construction.
///
/// The rule engine recognizes a handful of tokens; anything else still
/// counts toward the classifier feature vector but triggers no adjustment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HealthConditions {
    conditions: Vec<String>,
}

impl HealthConditions {
    /// Splits a comma-separated input string, trimming whitespace and
    /// dropping empty segments, e.g. "Diabetes, Hypertension".
    pub fn from_comma_separated(input: &str) -> Self {
        let conditions = input
            .split(',')
            .map(|c| c.trim().to_lowercase())
            .filter(|c| !c.is_empty())
            .collect();
        Self { conditions }
    }

    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    /// Exact (lowercased) match against one condition name.
    pub fn contains(&self, name: &str) -> bool {
        self.conditions.iter().any(|c| c == name)
    }

    /// Substring match against any condition, e.g. "kidney" matches
    /// "chronic kidney disease".
    pub fn any_mentions(&self, needle: &str) -> bool {
        self.conditions.iter().any(|c| c.contains(needle))
    }
}
