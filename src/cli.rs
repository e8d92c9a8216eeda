use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

use crate::models::{ActivityLevel, MacroSplit};
use crate::nutrition::constants::{DEFAULT_CARBS_PCT, DEFAULT_FAT_PCT, DEFAULT_PROTEIN_PCT};

/// MacroTracker — computes a daily calorie target and tracks foods against a macro split.
#[derive(Parser, Debug)]
#[command(name = "macro_tracker")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Nutrition table to use instead of the built-in one (.json or .csv).
    #[arg(short, long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug, Default)]
pub enum Command {
    /// Interactive form: user data, macro split and food log.
    #[default]
    Session,

    /// Compute the daily calorie target.
    Calories {
        /// Weight in kg.
        #[arg(long, allow_hyphen_values = true)]
        weight: String,

        /// Height in cm.
        #[arg(long, allow_hyphen_values = true)]
        height: String,

        /// Age in years.
        #[arg(long, allow_hyphen_values = true)]
        age: String,

        /// Activity level: a factor (1.2, 1.375, 1.55, 1.725) or a name.
        #[arg(long, default_value = "sedentary")]
        activity: ActivityLevel,
    },

    /// Compute macro gram targets for a calorie target.
    Targets {
        /// Daily calorie target.
        #[arg(long)]
        calories: i64,

        #[command(flatten)]
        split: SplitArgs,
    },

    /// Total the given foods and compare them against targets.
    Totals {
        /// Food names, repeat a name to log it more than once.
        #[arg(required = true)]
        foods: Vec<String>,

        /// Daily calorie target to compare against.
        #[arg(long)]
        calories: Option<i64>,

        #[command(flatten)]
        split: SplitArgs,
    },

    /// List the nutrition table.
    Foods {
        /// Write the table as JSON to this path.
        #[arg(long)]
        export: Option<PathBuf>,
    },
}

/// Macro split percentages.
#[derive(Args, Debug, Clone)]
pub struct SplitArgs {
    /// Protein percentage.
    #[arg(long, default_value = DEFAULT_PROTEIN_PCT)]
    pub protein: String,

    /// Carbs percentage.
    #[arg(long, default_value = DEFAULT_CARBS_PCT)]
    pub carbs: String,

    /// Fat percentage.
    #[arg(long, default_value = DEFAULT_FAT_PCT)]
    pub fat: String,
}

impl SplitArgs {
    pub fn to_split(&self) -> MacroSplit {
        MacroSplit::new(&self.protein, &self.carbs, &self.fat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_command_is_session() {
        let cli = Cli::try_parse_from(["macro_tracker"]).unwrap();
        assert!(cli.command.is_none());
        assert!(matches!(cli.command.unwrap_or_default(), Command::Session));
    }

    #[test]
    fn test_parse_calories() {
        let cli = Cli::try_parse_from([
            "macro_tracker",
            "calories",
            "--weight",
            "70",
            "--height",
            "175",
            "--age",
            "25",
            "--activity",
            "1.55",
        ])
        .unwrap();

        match cli.command {
            Some(Command::Calories { weight, activity, .. }) => {
                assert_eq!(weight, "70");
                assert_eq!(activity, ActivityLevel::ModeratelyActive);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_totals_with_split() {
        let cli = Cli::try_parse_from([
            "macro_tracker",
            "-vv",
            "totals",
            "Egg (1 large)",
            "Egg (1 large)",
            "--calories",
            "2016",
            "--protein",
            "40",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 2);
        match cli.command {
            Some(Command::Totals {
                foods,
                calories,
                split,
            }) => {
                assert_eq!(foods.len(), 2);
                assert_eq!(calories, Some(2016));
                assert_eq!(split.to_split(), MacroSplit::new("40", "40", "30"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_rejects_unknown_activity() {
        let result = Cli::try_parse_from([
            "macro_tracker",
            "calories",
            "--weight",
            "70",
            "--height",
            "175",
            "--age",
            "25",
            "--activity",
            "1.9",
        ]);
        assert!(result.is_err());
    }
}
