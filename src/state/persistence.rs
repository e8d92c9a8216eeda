use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{Result, TrackerError};
use crate::models::FoodItem;
use crate::state::FoodCatalog;

/// Load a food catalog from a JSON array or a CSV file.
///
/// The format follows the file extension; anything other than `.csv` is
/// read as JSON. Duplicate names collapse, last occurrence wins.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<FoodCatalog> {
    let path = path.as_ref();
    let is_csv = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));

    let foods = if is_csv {
        read_csv_foods(path)?
    } else {
        let content = fs::read_to_string(path)?;
        serde_json::from_str::<Vec<FoodItem>>(&content)?
    };

    if foods.is_empty() {
        return Err(TrackerError::EmptyCatalog);
    }
    if let Some(bad) = foods.iter().find(|f| !f.is_valid()) {
        return Err(TrackerError::InvalidInput(format!(
            "Invalid food entry: {}",
            bad.debug_string()
        )));
    }

    let catalog = FoodCatalog::new(foods);
    info!(path = %path.display(), foods = catalog.len(), "catalog loaded");
    Ok(catalog)
}

fn read_csv_foods(path: &Path) -> Result<Vec<FoodItem>> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_path(path)?;
    let mut foods = Vec::new();
    for record in reader.deserialize::<FoodItem>() {
        foods.push(record?);
    }
    Ok(foods)
}

/// Save a catalog as pretty JSON, in display order.
pub fn save_catalog<P: AsRef<Path>>(path: P, catalog: &FoodCatalog) -> Result<()> {
    let json = serde_json::to_string_pretty(&catalog.to_foods())?;
    fs::write(path, json)?;
    Ok(())
}
