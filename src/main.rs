use std::path::Path;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use macro_tracker_rs::cli::{Cli, Command, SplitArgs};
use macro_tracker_rs::error::Result;
use macro_tracker_rs::interface::{
    SessionAction, display_calories, display_catalog, display_food_log, display_progress,
    display_summary, display_targets, display_totals, prompt_action, prompt_activity,
    prompt_food, prompt_macro_split, prompt_remove_index, prompt_user_data,
};
use macro_tracker_rs::models::{ActivityLevel, UserProfile};
use macro_tracker_rs::nutrition::{
    calculate_macro_targets, calculate_progress, calorie_target_for,
};
use macro_tracker_rs::state::{FoodCatalog, TrackerState, load_catalog, save_catalog};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr. RUST_LOG wins over the -v count.
fn init_tracing(verbose: u8) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        match verbose {
            0 => "macro_tracker_rs=warn",
            1 => "macro_tracker_rs=debug",
            _ => "macro_tracker_rs=trace",
        }
        .into()
    });

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let catalog = match &cli.catalog {
        Some(path) => load_catalog(path)?,
        None => FoodCatalog::builtin(),
    };
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Session => cmd_session(catalog),
        Command::Calories {
            weight,
            height,
            age,
            activity,
        } => {
            cmd_calories(weight, height, age, activity);
            Ok(())
        }
        Command::Targets { calories, split } => {
            cmd_targets(calories, &split);
            Ok(())
        }
        Command::Totals {
            foods,
            calories,
            split,
        } => cmd_totals(catalog, &foods, calories, &split),
        Command::Foods { export } => cmd_foods(&catalog, export.as_deref()),
    }
}

/// Run the interactive form until the user quits.
fn cmd_session(catalog: FoodCatalog) -> Result<()> {
    println!("Macro Tracker ({} foods)", catalog.len());

    let mut state = TrackerState::new(catalog);
    let mut next = SessionAction::EditUserData;

    loop {
        let action = prompt_action(next)?;
        next = match action {
            SessionAction::EditUserData => {
                let profile = state.profile();
                let (weight, height, age) =
                    prompt_user_data(&profile.weight, &profile.height, &profile.age)?;
                state.set_weight(&weight);
                state.set_height(&height);
                state.set_age(&age);
                SessionAction::ChooseActivity
            }
            SessionAction::ChooseActivity => {
                let activity = prompt_activity(state.profile().activity)?;
                state.set_activity(activity);
                SessionAction::CalculateCalories
            }
            SessionAction::CalculateCalories => {
                if state.calculate_calories().is_none() {
                    println!("Weight, height and age must be numeric.");
                }
                SessionAction::EditMacroSplit
            }
            SessionAction::EditMacroSplit => {
                let split = prompt_macro_split(state.macro_split())?;
                state.set_macro_split(split);
                SessionAction::SelectFood
            }
            SessionAction::SelectFood => {
                let name = prompt_food(state.catalog(), state.selected_food())?;
                state.select_food(&name)?;
                SessionAction::AddFood
            }
            SessionAction::AddFood => {
                if !state.add_food() {
                    println!("Select a food first.");
                }
                SessionAction::SelectFood
            }
            SessionAction::RemoveFood => {
                if state.food_log().is_empty() {
                    println!("No foods logged.");
                } else if let Some(index) = prompt_remove_index(state.food_log())? {
                    let removed = state.remove_food(index)?;
                    println!("Removed {}", removed);
                }
                SessionAction::ShowSummary
            }
            SessionAction::ShowSummary => SessionAction::SelectFood,
            SessionAction::Quit => return Ok(()),
        };

        display_summary(&state)?;
        println!();
    }
}

/// One-shot calorie target.
fn cmd_calories(weight: String, height: String, age: String, activity: ActivityLevel) {
    let profile = UserProfile {
        weight,
        height,
        age,
        activity,
    };

    match calorie_target_for(&profile) {
        Some(calories) => {
            println!("Activity: {}", activity);
            display_calories(Some(calories));
        }
        None => println!("No calorie target: weight, height and age must be numeric."),
    }
}

/// One-shot macro targets.
fn cmd_targets(calories: i64, split: &SplitArgs) {
    let targets = calculate_macro_targets(&split.to_split(), Some(calories));
    display_calories(Some(calories));
    display_targets(targets.as_ref(), Some(calories));
}

/// Log the given foods, then print totals and progress.
fn cmd_totals(
    catalog: FoodCatalog,
    foods: &[String],
    calories: Option<i64>,
    split: &SplitArgs,
) -> Result<()> {
    let mut state = TrackerState::new(catalog);
    for name in foods {
        state.log_food(name)?;
    }

    display_food_log(&state.logged_foods()?);
    display_totals(&state.totals()?);

    if let Some(calories) = calories {
        let targets = calculate_macro_targets(&split.to_split(), Some(calories));
        display_targets(targets.as_ref(), Some(calories));
        if let Some(targets) = targets {
            let progress = calculate_progress(&state.totals()?, &targets, calories);
            display_progress(&progress);
        }
    }
    Ok(())
}

/// Print the catalog, optionally exporting it.
fn cmd_foods(catalog: &FoodCatalog, export: Option<&Path>) -> Result<()> {
    display_catalog(catalog);

    if let Some(path) = export {
        save_catalog(path, catalog)?;
        println!();
        println!("Wrote {} foods to {}", catalog.len(), path.display());
    }
    Ok(())
}
