use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::profile::{ActivityLevel, Gender, Goal};

/// The input surface of the advisor. Numeric ranges are enforced here so
/// out-of-range values never reach the classifier or the rule engine.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Age in years
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=120))]
    pub age: u32,

    /// Gender
    #[arg(long, value_enum)]
    pub gender: GenderArg,

    /// Height in centimeters
    #[arg(long, value_parser = clap::value_parser!(u32).range(50..=250))]
    pub height_cm: u32,

    /// Weight in kilograms
    #[arg(long, value_parser = clap::value_parser!(u32).range(10..=200))]
    pub weight_kg: u32,

    /// Activity level
    #[arg(long, value_enum, default_value_t = ActivityArg::Moderate)]
    pub activity: ActivityArg,

    /// Dietary goal
    #[arg(long, value_enum, default_value_t = GoalArg::Maintain)]
    pub goal: GoalArg,

    /// Comma-separated health conditions, e.g. "Diabetes,Hypertension"
    #[arg(long, default_value = "")]
    pub conditions: String,

    /// Directory holding the model and lookup artifacts
    /// (falls back to PRAKRITI_DATA_DIR, then the working directory)
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Emit the result as JSON instead of the plain report
    #[arg(long)]
    pub json: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenderArg {
    Male,
    Female,
}

impl From<GenderArg> for Gender {
    fn from(arg: GenderArg) -> Self {
        match arg {
            GenderArg::Male => Gender::Male,
            GenderArg::Female => Gender::Female,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityArg {
    Sedentary,
    Light,
    Moderate,
    Very,
    Extra,
}

impl ActivityArg {
    /// The lowercase name used as the key into the activity code map.
    pub fn name(&self) -> &'static str {
        match self {
            ActivityArg::Sedentary => "sedentary",
            ActivityArg::Light => "light",
            ActivityArg::Moderate => "moderate",
            ActivityArg::Very => "very",
            ActivityArg::Extra => "extra",
        }
    }
}

impl From<ActivityArg> for ActivityLevel {
    fn from(arg: ActivityArg) -> Self {
        match arg {
            ActivityArg::Sedentary => ActivityLevel::Sedentary,
            ActivityArg::Light => ActivityLevel::Light,
            ActivityArg::Moderate => ActivityLevel::Moderate,
            ActivityArg::Very => ActivityLevel::Very,
            ActivityArg::Extra => ActivityLevel::Extra,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalArg {
    Maintain,
    Gain,
    Loss,
}

impl From<GoalArg> for Goal {
    fn from(arg: GoalArg) -> Self {
        match arg {
            GoalArg::Maintain => Goal::Maintain,
            GoalArg::Gain => Goal::Gain,
            GoalArg::Loss => Goal::Loss,
        }
    }
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
