mod food;
mod profile;
mod summary;

pub use food::{FoodItem, catalog_key};
pub use profile::{ActivityLevel, MacroSplit, UserProfile};
pub use summary::{MacroProgress, MacroTargets, Progress, Totals};
