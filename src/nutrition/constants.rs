/// Mifflin-St Jeor coefficients (male variant, no sex parameter).
pub const BMR_WEIGHT_COEFF: f64 = 10.0;
pub const BMR_HEIGHT_COEFF: f64 = 6.25;
pub const BMR_AGE_COEFF: f64 = 5.0;
pub const BMR_OFFSET: f64 = 5.0;

/// Energy per gram of each macronutrient (kcal).
pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;
pub const KCAL_PER_GRAM_CARBS: f64 = 4.0;
pub const KCAL_PER_GRAM_FAT: f64 = 9.0;

/// Required sum of the macro split percentages. Compared exactly.
pub const MACRO_SPLIT_TOTAL: f64 = 100.0;

/// Default macro split percentages.
pub const DEFAULT_PROTEIN_PCT: &str = "30";
pub const DEFAULT_CARBS_PCT: &str = "40";
pub const DEFAULT_FAT_PCT: &str = "30";

/// Minimum Jaro-Winkler score for a typed food name to count as a match.
pub const FUZZY_MATCH_THRESHOLD: f64 = 0.7;

/// Maximum number of fuzzy suggestions offered.
pub const MAX_SUGGESTIONS: usize = 5;
