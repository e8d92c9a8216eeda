use serde::Serialize;

use crate::models::FoodItem;

/// Running macro and calorie totals over a food log.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Totals {
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub calories: f64,
}

impl Totals {
    /// Add one serving of `food`.
    pub fn add(&mut self, food: &FoodItem) {
        self.protein += food.protein;
        self.carbs += food.carbs;
        self.fat += food.fat;
        self.calories += food.calories;
    }
}

/// Daily gram targets derived from a calorie target and macro split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MacroTargets {
    pub protein: i64,
    pub carbs: i64,
    pub fat: i64,
}

/// Consumed amount against a target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Progress {
    pub consumed: f64,
    pub target: f64,
}

impl Progress {
    pub fn new(consumed: f64, target: f64) -> Self {
        Self { consumed, target }
    }

    /// Target minus consumed; negative once over target.
    pub fn remaining(&self) -> f64 {
        self.target - self.consumed
    }

    /// Consumed as a percentage of target (0 when the target is 0).
    pub fn percent(&self) -> f64 {
        if self.target > 0.0 {
            self.consumed / self.target * 100.0
        } else {
            0.0
        }
    }
}

/// Totals compared against targets, per macro and for calories.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MacroProgress {
    pub calories: Progress,
    pub protein: Progress,
    pub carbs: Progress,
    pub fat: Progress,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_totals_add() {
        let mut totals = Totals::default();
        totals.add(&FoodItem::new("Broccoli (100g)", 2.8, 7.0, 0.4, 34.0));
        totals.add(&FoodItem::new("Broccoli (100g)", 2.8, 7.0, 0.4, 34.0));
        assert!((totals.protein - 5.6).abs() < 0.001);
        assert!((totals.carbs - 14.0).abs() < 0.001);
        assert!((totals.fat - 0.8).abs() < 0.001);
        assert!((totals.calories - 68.0).abs() < 0.001);
    }

    #[test]
    fn test_progress_remaining() {
        let progress = Progress::new(120.0, 151.0);
        assert!((progress.remaining() - 31.0).abs() < 0.001);

        let over = Progress::new(200.0, 151.0);
        assert!(over.remaining() < 0.0);
    }

    #[test]
    fn test_progress_percent_zero_target() {
        assert_eq!(Progress::new(10.0, 0.0).percent(), 0.0);
        assert!((Progress::new(50.0, 200.0).percent() - 25.0).abs() < 0.001);
    }
}
