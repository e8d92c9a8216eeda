use std::collections::HashMap;

use strsim::jaro_winkler;
use tracing::debug;

use crate::error::{Result, TrackerError};
use crate::models::{FoodItem, catalog_key};
use crate::nutrition::constants::{FUZZY_MATCH_THRESHOLD, MAX_SUGGESTIONS};

/// Immutable nutrition reference table.
///
/// Keeps entries in display order; lookups are case-insensitive.
#[derive(Debug, Clone)]
pub struct FoodCatalog {
    foods: Vec<FoodItem>,
    /// Lowercase name -> position in `foods`.
    index: HashMap<String, usize>,
}

impl FoodCatalog {
    /// Build a catalog from a list of foods.
    ///
    /// Duplicate names collapse; the last occurrence wins but keeps the
    /// position of the first.
    pub fn new(foods: Vec<FoodItem>) -> Self {
        let mut ordered: Vec<FoodItem> = Vec::with_capacity(foods.len());
        let mut index = HashMap::new();
        for food in foods {
            match index.get(&food.key()) {
                Some(&pos) => ordered[pos] = food,
                None => {
                    index.insert(food.key(), ordered.len());
                    ordered.push(food);
                }
            }
        }
        Self {
            foods: ordered,
            index,
        }
    }

    /// The compiled-in five entry table.
    pub fn builtin() -> Self {
        Self::new(vec![
            FoodItem::new("Chicken Breast (100g)", 31.0, 0.0, 3.6, 165.0),
            FoodItem::new("Brown Rice (100g)", 2.6, 23.0, 0.9, 111.0),
            FoodItem::new("Broccoli (100g)", 2.8, 7.0, 0.4, 34.0),
            FoodItem::new("Avocado (100g)", 2.0, 9.0, 15.0, 160.0),
            FoodItem::new("Egg (1 large)", 6.0, 0.6, 5.0, 78.0),
        ])
    }

    /// Get a food by name (case-insensitive).
    pub fn get(&self, name: &str) -> Option<&FoodItem> {
        self.index.get(&catalog_key(name)).map(|&pos| &self.foods[pos])
    }

    /// Like [`get`](Self::get), but a miss is an error.
    pub fn lookup(&self, name: &str) -> Result<&FoodItem> {
        self.get(name)
            .ok_or_else(|| TrackerError::FoodNotFound(name.to_string()))
    }

    /// Foods in display order.
    pub fn iter(&self) -> impl Iterator<Item = &FoodItem> {
        self.foods.iter()
    }

    /// Canonical names in display order.
    pub fn names(&self) -> Vec<&str> {
        self.foods.iter().map(|f| f.name.as_str()).collect()
    }

    /// Foods whose names resemble `input`, best match first.
    pub fn suggest(&self, input: &str) -> Vec<(&FoodItem, f64)> {
        let needle = catalog_key(input);
        let mut candidates: Vec<(&FoodItem, f64)> = self
            .foods
            .iter()
            .map(|f| (f, jaro_winkler(&f.key(), &needle)))
            .filter(|(_, score)| *score > FUZZY_MATCH_THRESHOLD)
            .collect();

        candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        candidates.truncate(MAX_SUGGESTIONS);
        debug!(input, matches = candidates.len(), "fuzzy food lookup");
        candidates
    }

    /// Convert to a list of foods for serialization.
    pub fn to_foods(&self) -> Vec<FoodItem> {
        self.foods.clone()
    }

    pub fn len(&self) -> usize {
        self.foods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }
}

impl Default for FoodCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_order() {
        let catalog = FoodCatalog::builtin();
        assert_eq!(
            catalog.names(),
            vec![
                "Chicken Breast (100g)",
                "Brown Rice (100g)",
                "Broccoli (100g)",
                "Avocado (100g)",
                "Egg (1 large)",
            ]
        );
    }

    #[test]
    fn test_get_case_insensitive() {
        let catalog = FoodCatalog::builtin();
        assert!(catalog.get("egg (1 large)").is_some());
        assert!(catalog.get("EGG (1 LARGE)").is_some());
        assert!(catalog.get("Pizza").is_none());
        assert!(matches!(
            catalog.lookup("Pizza"),
            Err(TrackerError::FoodNotFound(name)) if name == "Pizza"
        ));
    }

    #[test]
    fn test_duplicates_last_wins_first_position() {
        let catalog = FoodCatalog::new(vec![
            FoodItem::new("Apple", 0.3, 14.0, 0.2, 52.0),
            FoodItem::new("Oats", 13.0, 68.0, 7.0, 389.0),
            FoodItem::new("apple", 0.5, 15.0, 0.2, 60.0),
        ]);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.names(), vec!["apple", "Oats"]);
        assert!((catalog.get("APPLE").unwrap().calories - 60.0).abs() < 0.001);
    }

    #[test]
    fn test_suggest() {
        let catalog = FoodCatalog::builtin();
        let suggestions = catalog.suggest("brocoli");
        assert!(!suggestions.is_empty());
        assert_eq!(suggestions[0].0.name, "Broccoli (100g)");

        assert!(catalog.suggest("zzzzzzzz").is_empty());
    }
}
