//! Metabolic calculator
//!
//! Pure functions computing BMR, TDEE, goal-adjusted calorie targets, macro
//! splits, BMI, ideal weight, water intake, and workout energy expenditure.
//!
//! # Design Principles
//!
//! 1. **Pure Functions**: All calculations are pure, no side effects
//! 2. **Caller Validates**: Inputs are assumed to be within the domain
//!    ranges enforced by [`crate::validation`]; nothing here clamps or
//!    guesses
//! 3. **Preserved Constants**: Goal adjustments and macro ratios are
//!    product-tuned configuration values, kept exactly

use serde::{Deserialize, Serialize};

use crate::models::{ActivityLevel, Gender, Goal, UserProfile};

// ============================================================================
// BMR and TDEE
// ============================================================================

/// Calculate Basal Metabolic Rate using the Mifflin-St Jeor equation.
///
/// Men: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) + 5
/// Women: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) - 161
pub fn calculate_bmr(gender: Gender, age: i32, weight_kg: f64, height_cm: f64) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * f64::from(age);
    match gender {
        Gender::Male => base + 5.0,
        Gender::Female => base - 161.0,
    }
}

/// Calculate Total Daily Energy Expenditure.
///
/// TDEE = BMR × activity multiplier
pub fn calculate_tdee(bmr: f64, activity_level: ActivityLevel) -> f64 {
    bmr * activity_level.multiplier()
}

/// Adjust the daily calorie target for the user's goal.
pub fn adjust_calories_for_goal(tdee: f64, goal: Goal) -> f64 {
    tdee * goal.calorie_factor()
}

// ============================================================================
// Macros
// ============================================================================

/// Daily macro targets in grams
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroTargets {
    pub protein_g: u32,
    pub carbs_g: u32,
    pub fat_g: u32,
    pub calories: f64,
}

/// Calculate macro targets for a calorie budget and goal.
///
/// Grams use the standard energy densities: 4 kcal/g for protein and
/// carbs, 9 kcal/g for fat. Rounded to the nearest gram.
pub fn calculate_macros(calories: f64, goal: Goal) -> MacroTargets {
    let (protein_ratio, carbs_ratio, fat_ratio) = goal.macro_ratios();

    MacroTargets {
        protein_g: (calories * protein_ratio / 4.0).round() as u32,
        carbs_g: (calories * carbs_ratio / 4.0).round() as u32,
        fat_g: (calories * fat_ratio / 9.0).round() as u32,
        calories,
    }
}

/// Complete metabolic result for a profile
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BmrResult {
    pub bmr: f64,
    pub tdee: f64,
    /// Goal-adjusted daily calorie target
    pub goal_calories: f64,
    pub protein_g: u32,
    pub carbs_g: u32,
    pub fat_g: u32,
}

/// Run the full BMR → TDEE → goal target → macros pipeline for a profile.
///
/// BMR, TDEE, and the calorie target are rounded to whole kcal.
pub fn calculate_bmr_complete(profile: &UserProfile) -> BmrResult {
    let bmr = calculate_bmr(profile.gender, profile.age, profile.weight_kg, profile.height_cm);
    let tdee = calculate_tdee(bmr, profile.activity_level);
    let goal_calories = adjust_calories_for_goal(tdee, profile.goal);
    let macros = calculate_macros(goal_calories, profile.goal);

    BmrResult {
        bmr: bmr.round(),
        tdee: tdee.round(),
        goal_calories: goal_calories.round(),
        protein_g: macros.protein_g,
        carbs_g: macros.carbs_g,
        fat_g: macros.fat_g,
    }
}

// ============================================================================
// BMI
// ============================================================================

/// BMI category classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    /// Get a human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }
}

/// Calculate BMI from weight and height, rounded to one decimal.
///
/// Formula: BMI = weight(kg) / height(m)²
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    let bmi = weight_kg / (height_m * height_m);
    (bmi * 10.0).round() / 10.0
}

/// Classify BMI into category (thresholds 18.5 / 25 / 30)
pub fn classify_bmi(bmi: f64) -> BmiCategory {
    if bmi < 18.5 {
        BmiCategory::Underweight
    } else if bmi < 25.0 {
        BmiCategory::Normal
    } else if bmi < 30.0 {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

// ============================================================================
// Ideal Weight and Hydration
// ============================================================================

/// Calculate ideal body weight in kg using the Devine formula.
///
/// Male: 50 + 2.3 kg per inch over 5 feet
/// Female: 45.5 + 2.3 kg per inch over 5 feet
pub fn calculate_ideal_weight(height_cm: f64, gender: Gender) -> f64 {
    let inches_over_5ft = height_cm / 2.54 - 60.0;
    match gender {
        Gender::Male => 50.0 + 2.3 * inches_over_5ft,
        Gender::Female => 45.5 + 2.3 * inches_over_5ft,
    }
}

/// Calculate recommended daily water intake in ml.
///
/// Base of 35 ml per kg of body weight, scaled by activity level.
pub fn calculate_water_intake(weight_kg: f64, activity_level: ActivityLevel) -> i32 {
    let base_ml = weight_kg * 35.0;
    (base_ml * activity_level.water_multiplier()).round() as i32
}

// ============================================================================
// Workout Energy Expenditure
// ============================================================================

/// Estimate calories burned during a workout.
///
/// kcal = MET × weight(kg) × duration(h)
pub fn calculate_workout_calories(weight_kg: f64, duration_minutes: f64, met: f64) -> f64 {
    (met * weight_kg * (duration_minutes / 60.0)).round()
}

/// Exercise kinds with standard MET values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseKind {
    Walking,
    Running,
    Cycling,
    Swimming,
    StrengthTraining,
    Yoga,
    Pushups,
    Squats,
    Planks,
    Burpees,
}

impl ExerciseKind {
    /// Metabolic equivalent of task for this exercise
    pub fn met(&self) -> f64 {
        match self {
            ExerciseKind::Walking => 3.5,
            ExerciseKind::Running => 8.0,
            ExerciseKind::Cycling => 6.0,
            ExerciseKind::Swimming => 7.0,
            ExerciseKind::StrengthTraining => 5.0,
            ExerciseKind::Yoga => 2.5,
            ExerciseKind::Pushups => 3.8,
            ExerciseKind::Squats => 5.0,
            ExerciseKind::Planks => 3.5,
            ExerciseKind::Burpees => 8.0,
        }
    }
}
