use serde::{Deserialize, Serialize};

/// A reference food entry with macronutrients per serving.
///
/// Macros are in grams; `calories` is kcal for the whole serving.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodItem {
    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "Protein")]
    pub protein: f64,

    #[serde(rename = "Carbs")]
    pub carbs: f64,

    #[serde(rename = "Fat")]
    pub fat: f64,

    #[serde(rename = "Calories")]
    pub calories: f64,
}

impl FoodItem {
    pub fn new(name: &str, protein: f64, carbs: f64, fat: f64, calories: f64) -> Self {
        Self {
            name: name.to_string(),
            protein,
            carbs,
            fat,
            calories,
        }
    }

    /// All values finite and non-negative, name non-blank.
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty()
            && [self.protein, self.carbs, self.fat, self.calories]
                .into_iter()
                .all(|v| v.is_finite() && v >= 0.0)
    }

    /// Debug string for logging.
    pub fn debug_string(&self) -> String {
        format!(
            "{}: {} kcal, P:{} C:{} F:{}",
            self.name, self.calories, self.protein, self.carbs, self.fat
        )
    }

    /// Canonical key for lookups (lowercase, trimmed name).
    pub fn key(&self) -> String {
        catalog_key(&self.name)
    }
}

/// Normalize a food name into its lookup key.
pub fn catalog_key(name: &str) -> String {
    name.trim().to_lowercase()
}
