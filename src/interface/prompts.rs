use dialoguer::{Confirm, Input, Select};

use crate::error::Result;
use crate::models::{ActivityLevel, MacroSplit};
use crate::state::FoodCatalog;

/// Actions offered by the interactive session menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionAction {
    EditUserData,
    ChooseActivity,
    CalculateCalories,
    EditMacroSplit,
    SelectFood,
    AddFood,
    RemoveFood,
    ShowSummary,
    Quit,
}

impl SessionAction {
    pub const ALL: [SessionAction; 9] = [
        SessionAction::EditUserData,
        SessionAction::ChooseActivity,
        SessionAction::CalculateCalories,
        SessionAction::EditMacroSplit,
        SessionAction::SelectFood,
        SessionAction::AddFood,
        SessionAction::RemoveFood,
        SessionAction::ShowSummary,
        SessionAction::Quit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SessionAction::EditUserData => "Edit user data",
            SessionAction::ChooseActivity => "Choose activity level",
            SessionAction::CalculateCalories => "Calculate calories",
            SessionAction::EditMacroSplit => "Edit macro % split",
            SessionAction::SelectFood => "Select food",
            SessionAction::AddFood => "Add food",
            SessionAction::RemoveFood => "Remove food",
            SessionAction::ShowSummary => "Show summary",
            SessionAction::Quit => "Quit",
        }
    }
}

/// Prompt for the next session action.
pub fn prompt_action(default: SessionAction) -> Result<SessionAction> {
    let labels: Vec<&str> = SessionAction::ALL.iter().map(|a| a.label()).collect();
    let default_idx = SessionAction::ALL
        .iter()
        .position(|a| *a == default)
        .unwrap_or(0);

    let selection = Select::new()
        .with_prompt("What next?")
        .items(&labels)
        .default(default_idx)
        .interact()?;

    Ok(SessionAction::ALL[selection])
}

/// Prompt for a raw text field. Nothing is validated here.
pub fn prompt_field(label: &str, current: &str) -> Result<String> {
    let input: String = Input::new()
        .with_prompt(label)
        .with_initial_text(current)
        .allow_empty(true)
        .interact_text()?;

    Ok(input)
}

/// Prompt for weight, height and age.
pub fn prompt_user_data(weight: &str, height: &str, age: &str) -> Result<(String, String, String)> {
    let weight = prompt_field("weight (kg)", weight)?;
    let height = prompt_field("height (cm)", height)?;
    let age = prompt_field("age (years)", age)?;
    Ok((weight, height, age))
}

/// Prompt for an activity level.
pub fn prompt_activity(current: ActivityLevel) -> Result<ActivityLevel> {
    let options: Vec<String> = ActivityLevel::ALL.iter().map(|l| l.to_string()).collect();
    let default_idx = ActivityLevel::ALL
        .iter()
        .position(|l| *l == current)
        .unwrap_or(0);

    let selection = Select::new()
        .with_prompt("Activity Level")
        .items(&options)
        .default(default_idx)
        .interact()?;

    Ok(ActivityLevel::ALL[selection])
}

/// Prompt for the three macro percentages.
pub fn prompt_macro_split(current: &MacroSplit) -> Result<MacroSplit> {
    Ok(MacroSplit {
        protein: prompt_field("protein %", &current.protein)?,
        carbs: prompt_field("carbs %", &current.carbs)?,
        fat: prompt_field("fat %", &current.fat)?,
    })
}

/// Prompt for a food from the catalog.
///
/// Returns an empty string when the user picks "-- Select Food --".
pub fn prompt_food(catalog: &FoodCatalog, current: Option<&str>) -> Result<String> {
    let mut options = vec!["-- Select Food --".to_string(), "Type a name...".to_string()];
    options.extend(
        catalog
            .iter()
            .map(|f| format!("{} ({} kcal)", f.name, f.calories)),
    );

    let default_idx = current
        .and_then(|name| catalog.names().iter().position(|n| *n == name))
        .map(|pos| pos + 2)
        .unwrap_or(0);

    let selection = Select::new()
        .with_prompt("Food")
        .items(&options)
        .default(default_idx)
        .interact()?;

    match selection {
        0 => Ok(String::new()),
        1 => prompt_food_by_name(catalog),
        n => Ok(catalog.names()[n - 2].to_string()),
    }
}

/// Prompt for a typed food name with fuzzy matching.
///
/// Returns an empty string when nothing matched or the user declined.
pub fn prompt_food_by_name(catalog: &FoodCatalog) -> Result<String> {
    let input: String = Input::new()
        .with_prompt("Food name")
        .allow_empty(true)
        .interact_text()?;

    let input = input.trim();
    if input.is_empty() {
        return Ok(String::new());
    }

    // Try exact match first (case-insensitive)
    if let Some(food) = catalog.get(input) {
        return Ok(food.name.clone());
    }

    let candidates = catalog.suggest(input);

    if candidates.is_empty() {
        println!("No matching food found for '{}'", input);
        return Ok(String::new());
    }

    if candidates.len() == 1 {
        let food = candidates[0].0;
        let confirm = prompt_yes_no(&format!("Did you mean '{}'?", food.name), true)?;
        return Ok(if confirm { food.name.clone() } else { String::new() });
    }

    // Multiple matches - let user select
    let mut options: Vec<String> = candidates.iter().map(|(f, _)| f.name.clone()).collect();
    options.push("None of these".to_string());

    let selection = Select::new()
        .with_prompt("Which did you mean?")
        .items(&options)
        .default(0)
        .interact()?;

    if selection < candidates.len() {
        Ok(options.swap_remove(selection))
    } else {
        Ok(String::new())
    }
}

/// Prompt for a food log entry to remove.
pub fn prompt_remove_index(log: &[String]) -> Result<Option<usize>> {
    let mut options: Vec<String> = log
        .iter()
        .enumerate()
        .map(|(i, name)| format!("{:>2}. {}", i + 1, name))
        .collect();
    options.push("Cancel".to_string());

    let selection = Select::new()
        .with_prompt("Remove which entry?")
        .items(&options)
        .default(0)
        .interact()?;

    Ok((selection < log.len()).then_some(selection))
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
