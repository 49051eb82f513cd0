use crate::profile::{ActivityLevel, Goal, HealthConditions, PersonProfile};
use serde::Serialize;

/// Base fraction of total calories assigned to each macronutrient, before
/// constitution and health-condition adjustments are applied.
const BASE_RATIOS: MacroRatios = MacroRatios {
    carbs: 0.55,
    protein: 0.20,
    fat: 0.25,
};

/// Lowest a single macro ratio may fall after adjustments; ratios below
/// this are clamped before renormalization.
const RATIO_FLOOR: f32 = 0.01;

/// Final daily targets handed back to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MacroTargets {
    pub calories: i64,
    pub carbs_g: i64,
    pub protein_g: i64,
    pub fat_g: i64,
}

/// Fractions of the calorie target assigned to each macronutrient.
/// After `floor_and_normalize` the three fields sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MacroRatios {
    pub carbs: f32,
    pub protein: f32,
    pub fat: f32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct MacroDeltas {
    carbs: f32,
    protein: f32,
    fat: f32,
}

/// Calorie multiplier for a single constitution component; unknown
/// components are neutral.
fn constitution_multiplier(component: &str) -> f32 {
    match component {
        "vata" => 1.05,
        "pitta" => 1.00,
        "kapha" => 0.95,
        _ => 1.0,
    }
}

/// Ratio deltas contributed by a single constitution component; unknown
/// components contribute nothing.
fn constitution_deltas(component: &str) -> MacroDeltas {
    match component {
        "vata" => MacroDeltas {
            carbs: -0.10,
            protein: 0.05,
            fat: 0.05,
        },
        "pitta" => MacroDeltas {
            carbs: 0.05,
            protein: 0.0,
            fat: -0.05,
        },
        "kapha" => MacroDeltas {
            carbs: -0.10,
            protein: 0.10,
            fat: 0.0,
        },
        _ => MacroDeltas::default(),
    }
}

/// Splits a constitution label like "Vata-Pitta" into lowercased components.
/// `split` always yields at least one element, so the divisor used for
/// averaging is never zero.
fn constitution_components(label: &str) -> Vec<String> {
    label.split('-').map(|p| p.trim().to_lowercase()).collect()
}

/// Mifflin-St Jeor BMR scaled by activity, plus the goal's kcal offset.
fn goal_calorie_target(profile: &PersonProfile, activity: ActivityLevel, goal: Goal) -> f32 {
    let bmr = 10.0 * profile.weight_kg + 6.25 * profile.height_cm - 5.0 * profile.age as f32
        + profile.gender.bmr_constant();
    bmr * activity.multiplier() + goal.calorie_offset()
}

/// Clamps each ratio to `RATIO_FLOOR`, then renormalizes so the three sum
/// to 1.0.
fn floor_and_normalize(carbs: f32, protein: f32, fat: f32) -> MacroRatios {
    let carbs = carbs.max(RATIO_FLOOR);
    let protein = protein.max(RATIO_FLOOR);
    let fat = fat.max(RATIO_FLOOR);
    let total = carbs + protein + fat;
    MacroRatios {
        carbs: carbs / total,
        protein: protein / total,
        fat: fat / total,
    }
}

/// Computes the adjusted, normalized macro ratios for a constitution label
/// and condition set. Exposed separately from the full target computation
/// so the ratio invariants can be checked on their own.
///
/// Constitution deltas are accumulated per component and then divided by
/// the total component count, including unknown components — a compound or
/// partially unknown label dilutes the adjustment.
pub fn adjusted_macro_ratios(prakriti: &str, conditions: &HealthConditions) -> MacroRatios {
    let components = constitution_components(prakriti);
    let count = components.len() as f32;

    let mut deltas = MacroDeltas::default();
    for component in &components {
        let d = constitution_deltas(component);
        deltas.carbs += d.carbs;
        deltas.protein += d.protein;
        deltas.fat += d.fat;
    }
    deltas.carbs /= count;
    deltas.protein /= count;
    deltas.fat /= count;

    // Condition adjustments are independent and cumulative, applied in a
    // fixed order. Token matching is exact except for the kidney and
    // heart/cardiac substring checks.
    if conditions.contains("diabetes") {
        deltas.carbs -= 0.08;
        deltas.protein += 0.05;
    }
    if conditions.contains("hypertension") {
        deltas.fat -= 0.03;
    }
    if conditions.contains("obesity") {
        deltas.carbs -= 0.05;
        deltas.protein += 0.05;
    }
    if conditions.any_mentions("kidney") {
        deltas.protein -= 0.10;
    }
    if conditions.any_mentions("heart") || conditions.any_mentions("cardiac") {
        deltas.fat -= 0.05;
    }

    floor_and_normalize(
        BASE_RATIOS.carbs + deltas.carbs,
        BASE_RATIOS.protein + deltas.protein,
        BASE_RATIOS.fat + deltas.fat,
    )
}

/// Derives daily macronutrient targets for one person.
///
/// Pure and total: unknown activity/goal strings have already been mapped
/// to their defaults by the caller, unknown constitution components are
/// neutral, and an empty condition set applies no adjustments.
///
/// # Arguments
/// * `prakriti`: constitution label, one or more of Vata/Pitta/Kapha
///   joined by '-' (e.g. "Vata-Pitta"), as produced by the classifier.
///
/// # Returns
/// Rounded calorie and gram targets using the standard 4/4/9 kcal-per-gram
/// conversion for carbs/protein/fat.
pub fn compute_nutrient_targets(
    profile: &PersonProfile,
    activity: ActivityLevel,
    goal: Goal,
    prakriti: &str,
    conditions: &HealthConditions,
) -> MacroTargets {
    let mut calorie_target = goal_calorie_target(profile, activity, goal);

    // Average the per-component calorie multipliers; unknown components
    // count as neutral but still enlarge the divisor.
    let components = constitution_components(prakriti);
    let avg_multiplier = components
        .iter()
        .map(|c| constitution_multiplier(c))
        .sum::<f32>()
        / components.len() as f32;
    calorie_target *= avg_multiplier;

    if conditions.contains("obesity") {
        calorie_target *= 0.9;
    }

    let ratios = adjusted_macro_ratios(prakriti, conditions);

    MacroTargets {
        calories: calorie_target.round() as i64,
        carbs_g: (ratios.carbs * calorie_target / 4.0).round() as i64,
        protein_g: (ratios.protein * calorie_target / 4.0).round() as i64,
        fat_g: (ratios.fat * calorie_target / 9.0).round() as i64,
    }
}
