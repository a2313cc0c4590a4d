//! Domain models for the FitTrack analytics core
//!
//! These are the read-only input snapshots the surrounding application
//! (store, persistence layer) hands to the analytics functions. The core
//! never mutates them in place and never owns their lifecycle.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::errors::AnalyticsError;

// ============================================================================
// Profile Enumerations
// ============================================================================

/// Biological gender used for metabolic calculations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "male"),
            Gender::Female => write!(f, "female"),
        }
    }
}

impl std::str::FromStr for Gender {
    type Err = AnalyticsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            _ => Err(AnalyticsError::UnknownValue {
                field: "gender",
                value: s.to_string(),
            }),
        }
    }
}

/// Activity level for TDEE and hydration calculations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    #[default]
    Light,
    /// Moderate exercise 3-5 days/week
    Moderate,
    /// Hard exercise 6-7 days/week
    Active,
    /// Very hard exercise or physical job
    VeryActive,
}

impl ActivityLevel {
    /// Get the activity multiplier for TDEE calculation
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::VeryActive => 1.9,
        }
    }

    /// Get the water intake multiplier applied to the 35 ml/kg base
    pub fn water_multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.0,
            ActivityLevel::Light => 1.1,
            ActivityLevel::Moderate => 1.2,
            ActivityLevel::Active => 1.3,
            ActivityLevel::VeryActive => 1.4,
        }
    }

    /// Get a human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Little or no exercise",
            ActivityLevel::Light => "Light exercise 1-3 days/week",
            ActivityLevel::Moderate => "Moderate exercise 3-5 days/week",
            ActivityLevel::Active => "Hard exercise 6-7 days/week",
            ActivityLevel::VeryActive => "Very hard exercise or physical job",
        }
    }
}

impl std::str::FromStr for ActivityLevel {
    type Err = AnalyticsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sedentary" => Ok(ActivityLevel::Sedentary),
            "light" => Ok(ActivityLevel::Light),
            "moderate" => Ok(ActivityLevel::Moderate),
            "active" => Ok(ActivityLevel::Active),
            "very_active" => Ok(ActivityLevel::VeryActive),
            _ => Err(AnalyticsError::UnknownValue {
                field: "activity_level",
                value: s.to_string(),
            }),
        }
    }
}

/// User-selected fitness goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    LoseWeight,
    #[default]
    Maintain,
    GainMuscle,
}

impl Goal {
    /// Multiplier applied to TDEE to get the goal-adjusted calorie target.
    ///
    /// 15% deficit for weight loss, 15% surplus for muscle gain. These are
    /// product-tuned constants, preserved exactly.
    pub fn calorie_factor(&self) -> f64 {
        match self {
            Goal::LoseWeight => 0.85,
            Goal::Maintain => 1.0,
            Goal::GainMuscle => 1.15,
        }
    }

    /// Macro energy split (protein, carbs, fat) for this goal.
    ///
    /// Ratios for each goal sum to exactly 1.0.
    pub fn macro_ratios(&self) -> (f64, f64, f64) {
        match self {
            Goal::LoseWeight => (0.40, 0.30, 0.30),
            Goal::Maintain => (0.30, 0.40, 0.30),
            Goal::GainMuscle => (0.35, 0.45, 0.20),
        }
    }
}

impl std::str::FromStr for Goal {
    type Err = AnalyticsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lose_weight" => Ok(Goal::LoseWeight),
            "maintain" => Ok(Goal::Maintain),
            "gain_muscle" => Ok(Goal::GainMuscle),
            _ => Err(AnalyticsError::UnknownValue {
                field: "goal",
                value: s.to_string(),
            }),
        }
    }
}

// ============================================================================
// User Profile
// ============================================================================

/// User profile snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: Uuid,
    pub name: String,
    /// Age in years (valid range 10-120)
    pub age: i32,
    pub gender: Gender,
    /// Height in centimeters (valid range 100-250)
    pub height_cm: f64,
    /// Current weight in kilograms (valid range 30-300)
    pub weight_kg: f64,
    pub activity_level: ActivityLevel,
    pub goal: Goal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Workout Types
// ============================================================================

/// A single completed set within an exercise
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletedSet {
    pub reps: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,
    pub rest_secs: u32,
    pub completed: bool,
}

/// Progress through one exercise of a session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletedExercise {
    pub exercise_id: Uuid,
    pub sets: Vec<CompletedSet>,
    pub completed: bool,
}

/// A workout session log entry.
///
/// Created when the user begins a workout, mutated by the application as
/// sets complete, finalized with `completed = true` and `end_time` set on
/// finish, or left `completed = false` when abandoned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutSession {
    pub id: Uuid,
    pub workout_id: Uuid,
    pub start_time: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,
    /// Total duration in seconds, once known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_secs: Option<i64>,
    pub completed: bool,
    pub exercises: Vec<CompletedExercise>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl WorkoutSession {
    /// Calendar day this session belongs to
    pub fn date(&self) -> NaiveDate {
        self.start_time.date_naive()
    }
}

// ============================================================================
// Nutrition Types
// ============================================================================

/// Meal slot within a day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

/// A single food within a meal, with its contribution already scaled
/// to the consumed quantity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealFood {
    pub food_id: Uuid,
    pub name: String,
    /// Quantity consumed in grams
    pub quantity_g: f64,
    pub calories: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
}

/// One logged meal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meal {
    pub id: Uuid,
    pub name: String,
    pub meal_type: MealType,
    pub foods: Vec<MealFood>,
    pub total_calories: f64,
    pub total_protein_g: f64,
    pub total_carbs_g: f64,
    pub total_fat_g: f64,
}

impl Meal {
    /// Recompute meal totals from the contributing foods.
    pub fn recompute_totals(&mut self) {
        self.total_calories = self.foods.iter().map(|f| f.calories).sum();
        self.total_protein_g = self.foods.iter().map(|f| f.protein_g).sum();
        self.total_carbs_g = self.foods.iter().map(|f| f.carbs_g).sum();
        self.total_fat_g = self.foods.iter().map(|f| f.fat_g).sum();
    }
}

/// Aggregated nutrition log for one calendar date.
///
/// Unique per (user, date); the persistence layer upserts on conflict.
/// Totals must equal the sum of the contributing meals; use
/// [`NutritionDay::recompute_totals`] after editing `meals` rather than
/// editing totals independently.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NutritionDay {
    pub date: NaiveDate,
    pub meals: Vec<Meal>,
    pub total_calories: f64,
    pub total_protein_g: f64,
    pub total_carbs_g: f64,
    pub total_fat_g: f64,
    /// Water intake in milliliters
    pub water_ml: f64,
}

impl NutritionDay {
    /// Recompute day totals from the contributing meals.
    ///
    /// Water intake is logged directly, not derived from meals, so it is
    /// left untouched.
    pub fn recompute_totals(&mut self) {
        for meal in &mut self.meals {
            meal.recompute_totals();
        }
        self.total_calories = self.meals.iter().map(|m| m.total_calories).sum();
        self.total_protein_g = self.meals.iter().map(|m| m.total_protein_g).sum();
        self.total_carbs_g = self.meals.iter().map(|m| m.total_carbs_g).sum();
        self.total_fat_g = self.meals.iter().map(|m| m.total_fat_g).sum();
    }
}

// ============================================================================
// Progress Tracking Types
// ============================================================================

/// Weight log entry, unique per (user, date)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightEntry {
    pub id: Uuid,
    pub date: NaiveDate,
    pub weight_kg: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_fat_percent: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Optional body measurements for one date, purely observational
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeasurementEntry {
    pub id: Uuid,
    pub date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chest_cm: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub waist_cm: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hips_cm: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arms_cm: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thighs_cm: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Today's summary, precomputed by the caller from the raw logs
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TodayStats {
    pub calories: f64,
    pub water_ml: f64,
    pub workouts_completed: u32,
    /// Percentage of today's calorie goal reached (0-100)
    pub goal_progress: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn meal(foods: Vec<MealFood>) -> Meal {
        Meal {
            id: Uuid::new_v4(),
            name: "Lunch".to_string(),
            meal_type: MealType::Lunch,
            foods,
            total_calories: 0.0,
            total_protein_g: 0.0,
            total_carbs_g: 0.0,
            total_fat_g: 0.0,
        }
    }

    fn food(calories: f64, protein: f64, carbs: f64, fat: f64) -> MealFood {
        MealFood {
            food_id: Uuid::new_v4(),
            name: "Food".to_string(),
            quantity_g: 100.0,
            calories,
            protein_g: protein,
            carbs_g: carbs,
            fat_g: fat,
        }
    }

    #[test]
    fn test_enum_wire_names() {
        assert_eq!(
            serde_json::to_string(&ActivityLevel::VeryActive).unwrap(),
            "\"very_active\""
        );
        assert_eq!(serde_json::to_string(&Goal::LoseWeight).unwrap(), "\"lose_weight\"");
        assert_eq!(serde_json::to_string(&Gender::Male).unwrap(), "\"male\"");
    }

    #[test]
    fn test_enum_from_str() {
        assert_eq!("very_active".parse::<ActivityLevel>().unwrap(), ActivityLevel::VeryActive);
        assert_eq!("gain_muscle".parse::<Goal>().unwrap(), Goal::GainMuscle);
        assert_eq!("FEMALE".parse::<Gender>().unwrap(), Gender::Female);
        assert!("super_active".parse::<ActivityLevel>().is_err());
        assert!("".parse::<Goal>().is_err());
    }

    #[test]
    fn test_activity_multipliers_monotonic() {
        let levels = [
            ActivityLevel::Sedentary,
            ActivityLevel::Light,
            ActivityLevel::Moderate,
            ActivityLevel::Active,
            ActivityLevel::VeryActive,
        ];
        for pair in levels.windows(2) {
            assert!(pair[0].multiplier() < pair[1].multiplier());
            assert!(pair[0].water_multiplier() < pair[1].water_multiplier());
        }
    }

    #[test]
    fn test_macro_ratios_sum_to_one() {
        for goal in [Goal::LoseWeight, Goal::Maintain, Goal::GainMuscle] {
            let (p, c, f) = goal.macro_ratios();
            assert_eq!(p + c + f, 1.0, "ratios for {goal:?} must sum to 1.0");
        }
    }

    #[test]
    fn test_nutrition_day_recompute_totals() {
        let mut day = NutritionDay {
            date: NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
            meals: vec![
                meal(vec![food(400.0, 30.0, 40.0, 10.0), food(200.0, 10.0, 20.0, 8.0)]),
                meal(vec![food(600.0, 40.0, 60.0, 20.0)]),
            ],
            total_calories: 0.0,
            total_protein_g: 0.0,
            total_carbs_g: 0.0,
            total_fat_g: 0.0,
            water_ml: 1500.0,
        };
        day.recompute_totals();
        assert_eq!(day.total_calories, 1200.0);
        assert_eq!(day.total_protein_g, 80.0);
        assert_eq!(day.total_carbs_g, 120.0);
        assert_eq!(day.total_fat_g, 38.0);
        // Water is logged directly, not derived
        assert_eq!(day.water_ml, 1500.0);
    }

    #[test]
    fn test_session_date() {
        let session = WorkoutSession {
            id: Uuid::new_v4(),
            workout_id: Uuid::new_v4(),
            start_time: Utc.with_ymd_and_hms(2024, 6, 15, 18, 30, 0).unwrap(),
            end_time: None,
            duration_secs: None,
            completed: false,
            exercises: vec![],
            notes: None,
        };
        assert_eq!(session.date(), NaiveDate::from_ymd_opt(2024, 6, 15).unwrap());
    }
}
