mod catalog;
mod persistence;
mod tracker;

pub use catalog::FoodCatalog;
pub use persistence::{load_catalog, save_catalog};
pub use tracker::TrackerState;
