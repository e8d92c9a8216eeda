pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod nutrition;
pub mod state;

pub use error::{Result, TrackerError};
pub use models::{ActivityLevel, FoodItem, MacroSplit, MacroTargets, Totals, UserProfile};
pub use state::{FoodCatalog, TrackerState};
