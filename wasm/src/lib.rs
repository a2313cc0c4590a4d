//! FitTrack WASM Module
//!
//! WebAssembly bindings exposing the calculator surface to the browser
//! PWA shell. The boundary is primitive-typed: enums arrive as strings,
//! the weight log as the JSON the app persists, and both parse leniently
//! with documented fallbacks (light activity, maintain goal, empty log)
//! so a stale client can never crash the page.

use wasm_bindgen::prelude::*;

use fittrack_core::analytics::smoothed_weight_series;
use fittrack_core::models::{ActivityLevel, Gender, Goal, WeightEntry};
use fittrack_core::{
    adjust_calories_for_goal, calculate_bmr, calculate_macros, calculate_tdee,
    calculate_water_intake as core_water_intake,
};

fn parse_activity(s: &str) -> ActivityLevel {
    s.parse().unwrap_or_default()
}

fn parse_goal(s: &str) -> Goal {
    s.parse().unwrap_or_default()
}

/// Calculate BMI from weight (kg) and height (cm)
#[wasm_bindgen]
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    if height_cm <= 0.0 {
        return 0.0;
    }
    fittrack_core::calculate_bmi(weight_kg, height_cm)
}

/// Goal-adjusted daily calorie target: Mifflin-St Jeor BMR, activity
/// multiplier, then the goal factor. Rounded to whole kcal.
#[wasm_bindgen]
pub fn calculate_goal_calories(
    weight_kg: f64,
    height_cm: f64,
    age_years: u32,
    is_male: bool,
    activity_level: &str,
    goal: &str,
) -> f64 {
    let gender = if is_male { Gender::Male } else { Gender::Female };
    let bmr = calculate_bmr(gender, age_years as i32, weight_kg, height_cm);
    let tdee = calculate_tdee(bmr, parse_activity(activity_level));
    adjust_calories_for_goal(tdee, parse_goal(goal)).round()
}

/// Macro targets for a calorie budget, as `[protein_g, carbs_g, fat_g]`
#[wasm_bindgen]
pub fn macro_split(calories: f64, goal: &str) -> Vec<f64> {
    let macros = calculate_macros(calories, parse_goal(goal));
    vec![
        f64::from(macros.protein_g),
        f64::from(macros.carbs_g),
        f64::from(macros.fat_g),
    ]
}

/// Recommended daily water intake in ml
#[wasm_bindgen]
pub fn calculate_water_intake(weight_kg: f64, activity_level: &str) -> i32 {
    core_water_intake(weight_kg, parse_activity(activity_level))
}

/// Smooth the logged weight series for the trend chart.
///
/// Takes the weight log as JSON in the shape the app persists, ordered
/// oldest first, and returns one trailing-average point per entry.
/// Unparseable input yields an empty series rather than an error.
#[wasm_bindgen]
pub fn weight_trend(entries_json: &str, window_size: usize) -> Vec<f64> {
    let entries: Vec<WeightEntry> = serde_json::from_str(entries_json).unwrap_or_default();
    smoothed_weight_series(&entries, window_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bmi() {
        assert_eq!(calculate_bmi(80.0, 180.0), 24.7);
        assert_eq!(calculate_bmi(80.0, 0.0), 0.0);
    }

    #[test]
    fn test_goal_calories() {
        // 30yo male, 80kg, 180cm, moderate, maintain: 1780 * 1.55
        let kcal = calculate_goal_calories(80.0, 180.0, 30, true, "moderate", "maintain");
        assert_eq!(kcal, (1780.0f64 * 1.55).round());

        // Weight loss applies the 15% deficit
        let loss = calculate_goal_calories(80.0, 180.0, 30, true, "moderate", "lose_weight");
        assert!(loss < kcal);
    }

    #[test]
    fn test_unknown_strings_fall_back_to_defaults() {
        let a = calculate_goal_calories(80.0, 180.0, 30, true, "???", "???");
        let b = calculate_goal_calories(80.0, 180.0, 30, true, "light", "maintain");
        assert_eq!(a, b);
    }

    #[test]
    fn test_macro_split() {
        let split = macro_split(2000.0, "maintain");
        assert_eq!(split, vec![150.0, 200.0, 67.0]);
    }

    #[test]
    fn test_water_intake() {
        assert_eq!(calculate_water_intake(70.0, "sedentary"), 2450);
    }

    #[test]
    fn test_weight_trend_from_persisted_json() {
        let json = r#"[
            {"id":"00000000-0000-0000-0000-000000000001","date":"2024-06-01","weight_kg":80.0},
            {"id":"00000000-0000-0000-0000-000000000002","date":"2024-06-02","weight_kg":81.0},
            {"id":"00000000-0000-0000-0000-000000000003","date":"2024-06-03","weight_kg":82.0}
        ]"#;
        let trend = weight_trend(json, 3);
        assert_eq!(trend.len(), 3);
        assert_eq!(trend[0], 80.0);
        assert!((trend[2] - 81.0).abs() < 0.001); // avg of 80, 81, 82
    }

    #[test]
    fn test_weight_trend_tolerates_bad_json() {
        assert!(weight_trend("not json", 3).is_empty());
        assert!(weight_trend("[]", 3).is_empty());
    }
}
