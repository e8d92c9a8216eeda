pub mod calculations;
pub mod constants;

pub use calculations::{
    calculate_bmr, calculate_calorie_target, calculate_macro_targets, calculate_progress,
    calculate_totals, calorie_target_for, macro_grams, parse_numeric, round_half_up,
};
pub use constants::*;
