//! FitTrack Analytics Core
//!
//! The pure-function analytics and recommendation engine behind the
//! FitTrack app: metabolic calculations (BMR, TDEE, macros), streak and
//! weekly aggregation, goal progress, rule-based recommendations, and
//! chart data shaping.
//!
//! Every function is a synchronous, deterministic transformation over
//! immutable input snapshots. The surrounding application owns the data
//! lifecycle and supplies coherent same-instant views of the profile and
//! the workout, nutrition, and weight logs; this crate never performs I/O
//! and never mutates its inputs.

pub mod analytics;
pub mod calculator;
pub mod charts;
pub mod errors;
pub mod goals;
pub mod models;
pub mod recommendations;
pub mod validation;

// Re-export commonly used items
pub use analytics::{
    calculate_streak_days, calculate_weekly_stats, generate_analytics_data,
    smoothed_weight_series, DailySnapshot, WeeklyStats,
};
pub use calculator::{
    adjust_calories_for_goal, calculate_bmi, calculate_bmr, calculate_bmr_complete,
    calculate_ideal_weight, calculate_macros, calculate_tdee, calculate_water_intake,
    calculate_workout_calories, classify_bmi, BmiCategory, BmrResult, ExerciseKind, MacroTargets,
};
pub use charts::{generate_macro_data, MacroSlice};
pub use errors::AnalyticsError;
pub use goals::{calculate_goal_progress, GoalProgress};
pub use models::{
    ActivityLevel, Gender, Goal, Meal, MealFood, MealType, MeasurementEntry, NutritionDay,
    TodayStats, UserProfile, WeightEntry, WorkoutSession,
};
pub use recommendations::{
    generate_motivation_badges, generate_nutrition_tips, generate_recommendation,
    generate_tomorrow_prediction, generate_weekly_recommendations, Badge, NutritionTip, Priority,
    Recommendation, RecommendationKind, TomorrowPrediction,
};
