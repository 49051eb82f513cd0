use anyhow::{Context, Result};
use prakriti_diet::cli::parse_args;
use prakriti_diet::context::AppContext;
use prakriti_diet::nutrition::targets::compute_nutrient_targets;
use prakriti_diet::profile::{ActivityLevel, Goal, HealthConditions, PersonProfile};
use serde_json::json;
use std::env;
use std::path::PathBuf;

// Environment variable that can point at the artifact directory when the
// --data-dir flag is not given.
const DATA_DIR_ENV_VAR: &str = "PRAKRITI_DATA_DIR";

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok(); // Load .env so PRAKRITI_DATA_DIR can come from it

    let cli_args = parse_args();

    let data_dir = cli_args.data_dir.clone().unwrap_or_else(|| {
        env::var(DATA_DIR_ENV_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("."))
    });

    if !cli_args.json {
        println!("Loading Prakriti model artifacts from {:?}...", data_dir);
    }
    let context = AppContext::load(&data_dir)
        .await
        .with_context(|| format!("Failed to initialize classifier context from {:?}", data_dir))?;

    let profile = PersonProfile {
        age: cli_args.age,
        gender: cli_args.gender.into(),
        height_cm: cli_args.height_cm as f32,
        weight_kg: cli_args.weight_kg as f32,
    };
    let conditions = HealthConditions::from_comma_separated(&cli_args.conditions);
    let activity_name = cli_args.activity.name();

    let prakriti = context
        .classifier
        .classify(&profile, activity_name, &conditions)
        .context("Prakriti classification failed")?;

    let activity: ActivityLevel = cli_args.activity.into();
    let goal: Goal = cli_args.goal.into();
    let targets = compute_nutrient_targets(&profile, activity, goal, &prakriti, &conditions);

    if cli_args.json {
        let output = json!({
            "prakriti": prakriti,
            "targets": targets,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("\nPredicted Prakriti: {}", prakriti);
        println!("\nDaily nutrient targets:");
        println!("  Calories: {} kcal", targets.calories);
        println!("  Carbs:    {} g", targets.carbs_g);
        println!("  Protein:  {} g", targets.protein_g);
        println!("  Fat:      {} g", targets.fat_g);
    }

    Ok(())
}
