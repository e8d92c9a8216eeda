use crate::error::Result;
use crate::models::{FoodItem, MacroProgress, MacroTargets, Progress, Totals};
use crate::state::{FoodCatalog, TrackerState};

/// Display the calorie target, if computed.
pub fn display_calories(calories: Option<i64>) {
    match calories {
        Some(cal) => println!("Target Calories: {}", cal),
        None => println!("Target Calories: not calculated"),
    }
}

/// Display the food log with per-entry calories.
pub fn display_food_log(entries: &[&FoodItem]) {
    println!();
    println!("=== Food ===");

    if entries.is_empty() {
        println!("  (no foods logged)");
        return;
    }

    let width = entries.iter().map(|f| f.name.len()).max().unwrap_or(10);
    for (i, food) in entries.iter().enumerate() {
        println!(
            "{:>3}. {:<width$} ({} kcal)",
            i + 1,
            food.name,
            food.calories,
            width = width
        );
    }
}

/// Display accumulated totals.
pub fn display_totals(totals: &Totals) {
    println!();
    println!("=== Totals ===");
    println!("Calories: {}", trim_float(totals.calories));
    println!("Protein: {}g", trim_float(totals.protein));
    println!("Carbs: {}g", trim_float(totals.carbs));
    println!("Fat: {}g", trim_float(totals.fat));
}

/// Display macro targets, or why there are none.
pub fn display_targets(targets: Option<&MacroTargets>, calories: Option<i64>) {
    println!();
    println!("=== Macro Targets ===");
    match (targets, calories) {
        (Some(t), _) => {
            println!("Protein: {}g", t.protein);
            println!("Carbs: {}g", t.carbs);
            println!("Fat: {}g", t.fat);
        }
        (None, None) => println!("  (calculate calories first)"),
        (None, Some(_)) => println!("  (macro split must be numeric and sum to 100)"),
    }
}

/// Display totals against targets.
pub fn display_progress(progress: &MacroProgress) {
    println!();
    println!("=== Progress ===");
    print_progress_row("Calories", "kcal", &progress.calories);
    print_progress_row("Protein", "g", &progress.protein);
    print_progress_row("Carbs", "g", &progress.carbs);
    print_progress_row("Fat", "g", &progress.fat);
}

fn print_progress_row(label: &str, unit: &str, progress: &Progress) {
    let remaining = progress.remaining();
    let status = if remaining >= 0.0 {
        format!("{:.1}{} left", remaining, unit)
    } else {
        format!("{:.1}{} over", -remaining, unit)
    };
    println!(
        "{:<9} {:>7.1} / {:>5.0}{:<4} {:>5.0}%  {}",
        label,
        progress.consumed,
        progress.target,
        unit,
        progress.percent(),
        status
    );
}

/// Display every catalog entry.
pub fn display_catalog(catalog: &FoodCatalog) {
    println!();
    println!("=== Foods ===");
    println!();

    let width = catalog.iter().map(|f| f.name.len()).max().unwrap_or(10);
    println!(
        "     {:<width$} {:>8} {:>8} {:>8} {:>8}",
        "Name",
        "Protein",
        "Carbs",
        "Fat",
        "kcal",
        width = width
    );
    for (i, food) in catalog.iter().enumerate() {
        println!(
            "{:>3}. {:<width$} {:>8.1} {:>8.1} {:>8.1} {:>8.0}",
            i + 1,
            food.name,
            food.protein,
            food.carbs,
            food.fat,
            food.calories,
            width = width
        );
    }
}

/// Render the whole form: calorie target, log, totals, targets, progress.
pub fn display_summary(state: &TrackerState) -> Result<()> {
    println!();
    display_calories(state.calories());
    if let Some(selected) = state.selected_food() {
        println!("Selected: {}", selected);
    }

    display_food_log(&state.logged_foods()?);
    display_totals(&state.totals()?);

    let targets = state.macro_targets();
    display_targets(targets.as_ref(), state.calories());
    if let Some(progress) = state.progress()? {
        display_progress(&progress);
    }
    Ok(())
}

/// Format without trailing zeros (`12`, `1.2`), rounded to two places.
pub fn trim_float(value: f64) -> String {
    let formatted = format!("{:.2}", value);
    formatted
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}
