use tracing::{debug, trace};

use crate::error::Result;
use crate::models::{MacroProgress, MacroSplit, MacroTargets, Progress, Totals, UserProfile};
use crate::nutrition::constants::*;
use crate::state::FoodCatalog;

/// Parse a numeric form field.
///
/// Reads the longest leading decimal number after any leading whitespace
/// and ignores the rest, so `"70kg"` is 70 and `"30%"` is 30. Input with no
/// leading digits, `NaN` and infinities count as failures.
pub fn parse_numeric(input: &str) -> Option<f64> {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let digits_from = |start: usize| bytes[start..].iter().take_while(|b| b.is_ascii_digit()).count();

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_digits = digits_from(end);
    end += int_digits;

    if bytes.get(end) == Some(&b'.') {
        let frac_digits = digits_from(end + 1);
        if frac_digits > 0 {
            end += 1 + frac_digits;
        } else if int_digits == 0 {
            return None;
        }
    } else if int_digits == 0 {
        return None;
    }

    // Exponent only counts when at least one digit follows it.
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let sign = usize::from(matches!(bytes.get(end + 1), Some(b'+' | b'-')));
        let exp_digits = digits_from(end + 1 + sign);
        if exp_digits > 0 {
            end += 1 + sign + exp_digits;
        }
    }

    s[..end].parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Round half toward positive infinity.
#[inline]
pub fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// Basal metabolic rate in kcal/day.
///
/// `10 * weight + 6.25 * height - 5 * age + 5`
pub fn calculate_bmr(weight_kg: f64, height_cm: f64, age_years: f64) -> f64 {
    BMR_WEIGHT_COEFF * weight_kg + BMR_HEIGHT_COEFF * height_cm - BMR_AGE_COEFF * age_years
        + BMR_OFFSET
}

/// Daily calorie target: BMR scaled by the activity factor, rounded.
pub fn calculate_calorie_target(bmr: f64, activity_factor: f64) -> i64 {
    round_half_up(bmr * activity_factor)
}

/// Calorie target for a profile, or `None` if weight, height or age
/// do not parse or the result does not fit an `i64`.
pub fn calorie_target_for(profile: &UserProfile) -> Option<i64> {
    let weight = parse_numeric(&profile.weight)?;
    let height = parse_numeric(&profile.height)?;
    let age = parse_numeric(&profile.age)?;

    let bmr = calculate_bmr(weight, height, age);
    let scaled = bmr * profile.activity.factor();
    if !scaled.is_finite() || scaled.abs() >= i64::MAX as f64 {
        debug!(bmr, "calorie target out of range");
        return None;
    }
    let calories = calculate_calorie_target(bmr, profile.activity.factor());
    trace!(bmr, factor = profile.activity.factor(), calories, "calorie target");
    Some(calories)
}

/// Sum macros and calories over a food log.
///
/// Each occurrence counts once. Fails on a name missing from the catalog.
pub fn calculate_totals<S: AsRef<str>>(log: &[S], catalog: &FoodCatalog) -> Result<Totals> {
    log.iter().try_fold(Totals::default(), |mut acc, name| {
        acc.add(catalog.lookup(name.as_ref())?);
        Ok(acc)
    })
}

/// Grams of a macro providing `percent` of `calories`.
pub fn macro_grams(calories: i64, percent: f64, kcal_per_gram: f64) -> i64 {
    round_half_up(calories as f64 * (percent / 100.0) / kcal_per_gram)
}

/// Gram targets for a split, or `None` when the split does not parse,
/// does not sum to exactly 100, or no calorie target exists.
pub fn calculate_macro_targets(split: &MacroSplit, calories: Option<i64>) -> Option<MacroTargets> {
    let protein = parse_numeric(&split.protein)?;
    let carbs = parse_numeric(&split.carbs)?;
    let fat = parse_numeric(&split.fat)?;

    let sum = protein + carbs + fat;
    if sum != MACRO_SPLIT_TOTAL {
        debug!(sum, "macro split does not sum to 100");
        return None;
    }
    let calories = calories?;

    Some(MacroTargets {
        protein: macro_grams(calories, protein, KCAL_PER_GRAM_PROTEIN),
        carbs: macro_grams(calories, carbs, KCAL_PER_GRAM_CARBS),
        fat: macro_grams(calories, fat, KCAL_PER_GRAM_FAT),
    })
}

/// Compare totals against targets.
pub fn calculate_progress(totals: &Totals, targets: &MacroTargets, calories: i64) -> MacroProgress {
    MacroProgress {
        calories: Progress::new(totals.calories, calories as f64),
        protein: Progress::new(totals.protein, targets.protein as f64),
        carbs: Progress::new(totals.carbs, targets.carbs as f64),
        fat: Progress::new(totals.fat, targets.fat as f64),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ActivityLevel;

    fn profile(weight: &str, height: &str, age: &str) -> UserProfile {
        UserProfile {
            weight: weight.to_string(),
            height: height.to_string(),
            age: age.to_string(),
            activity: ActivityLevel::Sedentary,
        }
    }

    #[test]
    fn test_parse_numeric() {
        assert_eq!(parse_numeric("70"), Some(70.0));
        assert_eq!(parse_numeric(" 72.5 "), Some(72.5));
        assert_eq!(parse_numeric(""), None);
        assert_eq!(parse_numeric("abc"), None);
        assert_eq!(parse_numeric("NaN"), None);
        assert_eq!(parse_numeric("inf"), None);
        assert_eq!(parse_numeric("-Infinity"), None);
    }

    #[test]
    fn test_parse_numeric_leading_prefix() {
        assert_eq!(parse_numeric("70kg"), Some(70.0));
        assert_eq!(parse_numeric("30%"), Some(30.0));
        assert_eq!(parse_numeric("  175 cm"), Some(175.0));
        assert_eq!(parse_numeric("-2.5x"), Some(-2.5));
        assert_eq!(parse_numeric(".5"), Some(0.5));
        assert_eq!(parse_numeric("5."), Some(5.0));
        assert_eq!(parse_numeric("1e3kcal"), Some(1000.0));
        assert_eq!(parse_numeric("2e"), Some(2.0));
        assert_eq!(parse_numeric("3e+"), Some(3.0));
        assert_eq!(parse_numeric("kg70"), None);
        assert_eq!(parse_numeric("-"), None);
        assert_eq!(parse_numeric("."), None);
        assert_eq!(parse_numeric("1e999"), None);
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(2016.3), 2016);
        assert_eq!(round_half_up(2.5), 3);
        assert_eq!(round_half_up(-2.5), -2);
        assert_eq!(round_half_up(66.9), 67);
    }

    #[test]
    fn test_bmr_reference_values() {
        assert!((calculate_bmr(70.0, 175.0, 25.0) - 1680.25).abs() < 1e-9);
        assert_eq!(calculate_calorie_target(1680.25, 1.2), 2016);
    }

    #[test]
    fn test_calorie_target_for_profile() {
        assert_eq!(calorie_target_for(&profile("70", "175", "25")), Some(2016));

        let mut active = profile("70", "175", "25");
        active.activity = ActivityLevel::VeryActive;
        // 1680.25 * 1.725 = 2898.43...
        assert_eq!(calorie_target_for(&active), Some(2898));
    }

    #[test]
    fn test_calorie_target_rejects_bad_fields() {
        assert_eq!(calorie_target_for(&profile("", "175", "25")), None);
        assert_eq!(calorie_target_for(&profile("70", "tall", "25")), None);
        assert_eq!(calorie_target_for(&profile("70", "175", "NaN")), None);
    }

    #[test]
    fn test_calorie_target_accepts_unit_suffixes() {
        assert_eq!(calorie_target_for(&profile("70kg", "175cm", "25")), Some(2016));
    }

    #[test]
    fn test_calorie_target_rejects_overflow() {
        assert_eq!(calorie_target_for(&profile("1e308", "175", "25")), None);
        assert_eq!(calorie_target_for(&profile("1e300", "175", "25")), None);
    }

    #[test]
    fn test_macro_targets_reference_split() {
        let targets = calculate_macro_targets(&MacroSplit::new("30", "40", "30"), Some(2016)).unwrap();
        assert_eq!(
            targets,
            MacroTargets {
                protein: 151,
                carbs: 202,
                fat: 67
            }
        );
    }

    #[test]
    fn test_macro_targets_require_exact_sum() {
        assert!(calculate_macro_targets(&MacroSplit::new("30", "40", "29"), Some(2016)).is_none());
        assert!(calculate_macro_targets(&MacroSplit::new("30", "40", "31"), Some(2016)).is_none());
        assert!(calculate_macro_targets(&MacroSplit::new("30", "", "30"), Some(2016)).is_none());
    }

    #[test]
    fn test_macro_targets_accept_percent_signs() {
        let targets =
            calculate_macro_targets(&MacroSplit::new("30%", "40%", "30%"), Some(2016)).unwrap();
        assert_eq!((targets.protein, targets.carbs, targets.fat), (151, 202, 67));
    }

    #[test]
    fn test_macro_targets_require_calories() {
        assert!(calculate_macro_targets(&MacroSplit::default(), None).is_none());
    }

    #[test]
    fn test_totals_empty_log() {
        let catalog = FoodCatalog::builtin();
        let log: Vec<String> = Vec::new();
        assert_eq!(calculate_totals(&log, &catalog).unwrap(), Totals::default());
    }

    #[test]
    fn test_totals_unknown_food() {
        let catalog = FoodCatalog::builtin();
        assert!(calculate_totals(&["Pizza"], &catalog).is_err());
    }

    #[test]
    fn test_progress() {
        let totals = Totals {
            protein: 37.0,
            carbs: 23.0,
            fat: 4.5,
            calories: 276.0,
        };
        let targets = MacroTargets {
            protein: 151,
            carbs: 202,
            fat: 67,
        };
        let progress = calculate_progress(&totals, &targets, 2016);
        assert!((progress.protein.remaining() - 114.0).abs() < 0.001);
        assert!((progress.carbs.remaining() - 179.0).abs() < 0.001);
        assert!((progress.fat.remaining() - 62.5).abs() < 0.001);
        assert!((progress.calories.remaining() - 1740.0).abs() < 0.001);
    }
}
