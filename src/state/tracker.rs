use tracing::{debug, info, warn};

use crate::error::{Result, TrackerError};
use crate::models::{
    ActivityLevel, FoodItem, MacroProgress, MacroSplit, MacroTargets, Totals, UserProfile,
};
use crate::nutrition::calculations;
use crate::state::FoodCatalog;

/// A macro tracking form: user data, macro split, food log and the current
/// food selection, plus the last computed calorie target.
///
/// Totals, targets and progress are derived on every read.
pub struct TrackerState {
    catalog: FoodCatalog,
    profile: UserProfile,
    macro_split: MacroSplit,
    /// Canonical catalog names, in the order added.
    food_log: Vec<String>,
    selected_food: Option<String>,
    calories: Option<i64>,
}

impl TrackerState {
    /// Create an empty form over a catalog.
    pub fn new(catalog: FoodCatalog) -> Self {
        Self {
            catalog,
            profile: UserProfile::default(),
            macro_split: MacroSplit::default(),
            food_log: Vec::new(),
            selected_food: None,
            calories: None,
        }
    }

    pub fn catalog(&self) -> &FoodCatalog {
        &self.catalog
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    pub fn set_weight(&mut self, value: &str) {
        debug!(value, "weight edited");
        self.profile.weight = value.to_string();
    }

    pub fn set_height(&mut self, value: &str) {
        debug!(value, "height edited");
        self.profile.height = value.to_string();
    }

    pub fn set_age(&mut self, value: &str) {
        debug!(value, "age edited");
        self.profile.age = value.to_string();
    }

    pub fn set_activity(&mut self, activity: ActivityLevel) {
        debug!(?activity, "activity level changed");
        self.profile.activity = activity;
    }

    /// Recompute the calorie target from the current profile.
    ///
    /// Leaves the previous target in place when any field fails to parse.
    /// Returns the target after the attempt.
    pub fn calculate_calories(&mut self) -> Option<i64> {
        match calculations::calorie_target_for(&self.profile) {
            Some(calories) => {
                info!(calories, "calorie target computed");
                self.calories = Some(calories);
            }
            None => warn!(profile = ?self.profile, "non-numeric user data, calorie target unchanged"),
        }
        self.calories
    }

    /// The last computed calorie target.
    pub fn calories(&self) -> Option<i64> {
        self.calories
    }

    pub fn macro_split(&self) -> &MacroSplit {
        &self.macro_split
    }

    pub fn set_protein_pct(&mut self, value: &str) {
        debug!(value, "protein % edited");
        self.macro_split.protein = value.to_string();
    }

    pub fn set_carbs_pct(&mut self, value: &str) {
        debug!(value, "carbs % edited");
        self.macro_split.carbs = value.to_string();
    }

    pub fn set_fat_pct(&mut self, value: &str) {
        debug!(value, "fat % edited");
        self.macro_split.fat = value.to_string();
    }

    pub fn set_macro_split(&mut self, split: MacroSplit) {
        debug!(?split, "macro split replaced");
        self.macro_split = split;
    }

    /// Select a food by name (case-insensitive). An empty name clears the
    /// selection; an unknown name is rejected and the selection kept.
    pub fn select_food(&mut self, name: &str) -> Result<()> {
        if name.trim().is_empty() {
            self.selected_food = None;
            return Ok(());
        }

        let food = self.catalog.lookup(name).inspect_err(|_| {
            warn!(name, "selected food is not in the catalog");
        })?;
        debug!(food = %food.name, "food selected");
        self.selected_food = Some(food.name.clone());
        Ok(())
    }

    pub fn selected_food(&self) -> Option<&str> {
        self.selected_food.as_deref()
    }

    /// Append the selected food to the log and clear the selection.
    ///
    /// Returns `false` without touching the log when nothing is selected.
    pub fn add_food(&mut self) -> bool {
        match self.selected_food.take() {
            Some(name) => {
                debug!(food = %name, position = self.food_log.len(), "food logged");
                self.food_log.push(name);
                true
            }
            None => false,
        }
    }

    /// Select and add in one step.
    pub fn log_food(&mut self, name: &str) -> Result<bool> {
        self.select_food(name)?;
        Ok(self.add_food())
    }

    /// Remove the entry at `index`, returning its name.
    pub fn remove_food(&mut self, index: usize) -> Result<String> {
        let len = self.food_log.len();
        if index >= len {
            warn!(index, len, "remove index out of range");
            return Err(TrackerError::IndexOutOfRange { index, len });
        }
        let removed = self.food_log.remove(index);
        debug!(food = %removed, index, "food removed");
        Ok(removed)
    }

    pub fn food_log(&self) -> &[String] {
        &self.food_log
    }

    /// Log entries resolved against the catalog.
    pub fn logged_foods(&self) -> Result<Vec<&FoodItem>> {
        self.food_log
            .iter()
            .map(|name| self.catalog.lookup(name))
            .collect()
    }

    pub fn totals(&self) -> Result<Totals> {
        calculations::calculate_totals(&self.food_log, &self.catalog)
    }

    pub fn macro_targets(&self) -> Option<MacroTargets> {
        calculations::calculate_macro_targets(&self.macro_split, self.calories)
    }

    /// Totals against targets, when targets exist.
    pub fn progress(&self) -> Result<Option<MacroProgress>> {
        let (Some(targets), Some(calories)) = (self.macro_targets(), self.calories) else {
            return Ok(None);
        };
        let totals = self.totals()?;
        Ok(Some(calculations::calculate_progress(
            &totals, &targets, calories,
        )))
    }
}

impl Default for TrackerState {
    fn default() -> Self {
        Self::new(FoodCatalog::builtin())
    }
}
