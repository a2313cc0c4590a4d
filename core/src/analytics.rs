//! Streak and aggregation engine
//!
//! Windowed summaries over the raw logs: consecutive-day workout streaks,
//! trailing-week statistics, and the daily chart series. All functions are
//! pure; the `*_on` variants take the reference day explicitly and the
//! convenience wrappers anchor at the current UTC day.
//!
//! Chart rows for days without a real log are filled with deterministic
//! synthetic values so the chart stays continuous. Synthetic values are
//! flagged and never feed the streak or weekly statistics.

use std::collections::HashSet;

use chrono::{Datelike, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{NutritionDay, WeightEntry, WorkoutSession};

/// Fallback weight used when a window or chart day has no real entry
pub const DEFAULT_WEIGHT_KG: f64 = 75.0;

// ============================================================================
// Streaks
// ============================================================================

/// Calculate the current consecutive-day workout streak, anchored at today.
pub fn calculate_streak_days(sessions: &[WorkoutSession]) -> u32 {
    streak_days_on(sessions, Utc::now().date_naive())
}

/// Streak walk with an explicit reference day.
///
/// Counts back from `today` while each consecutive calendar day has at
/// least one session. A session on `today` itself is required for any
/// nonzero streak; there is no grace day.
pub fn streak_days_on(sessions: &[WorkoutSession], today: NaiveDate) -> u32 {
    let dates: HashSet<NaiveDate> = sessions.iter().map(WorkoutSession::date).collect();

    let mut streak = 0;
    let mut day = today;
    while dates.contains(&day) {
        streak += 1;
        day -= Duration::days(1);
    }
    streak
}

// ============================================================================
// Weekly Statistics
// ============================================================================

/// Aggregate statistics over the trailing seven days
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyStats {
    pub total_workouts: usize,
    pub total_calories: f64,
    pub avg_weight_kg: f64,
    /// Last-minus-first weight in the window; 0 with fewer than two entries
    pub weight_change_kg: f64,
    pub protein_avg_g: f64,
    pub water_avg_ml: f64,
    /// Streak over the full session history, not just the week
    pub streak_days: u32,
}

/// Calculate trailing-week statistics anchored at today.
pub fn calculate_weekly_stats(
    sessions: &[WorkoutSession],
    nutrition_days: &[NutritionDay],
    weight_entries: &[WeightEntry],
) -> WeeklyStats {
    weekly_stats_on(sessions, nutrition_days, weight_entries, Utc::now().date_naive())
}

/// Trailing-week statistics with an explicit reference day.
///
/// The window covers the seven calendar days up to and including `today`;
/// an entry exactly seven days back falls outside it. Weight entries are
/// expected ordered by date (oldest first), as supplied by the
/// persistence layer.
pub fn weekly_stats_on(
    sessions: &[WorkoutSession],
    nutrition_days: &[NutritionDay],
    weight_entries: &[WeightEntry],
    today: NaiveDate,
) -> WeeklyStats {
    let window_start = today - Duration::days(6);

    let week_workouts = sessions
        .iter()
        .filter(|s| s.date() >= window_start)
        .count();

    let week_nutrition: Vec<&NutritionDay> = nutrition_days
        .iter()
        .filter(|n| n.date >= window_start)
        .collect();

    let week_weights: Vec<&WeightEntry> = weight_entries
        .iter()
        .filter(|w| w.date >= window_start)
        .collect();

    let total_calories = week_nutrition.iter().map(|n| n.total_calories).sum();

    let avg_weight_kg = if week_weights.is_empty() {
        DEFAULT_WEIGHT_KG
    } else {
        week_weights.iter().map(|w| w.weight_kg).sum::<f64>() / week_weights.len() as f64
    };

    let weight_change_kg = match (week_weights.first(), week_weights.last()) {
        (Some(first), Some(last)) if week_weights.len() >= 2 => last.weight_kg - first.weight_kg,
        _ => 0.0,
    };

    let protein_avg_g = if week_nutrition.is_empty() {
        0.0
    } else {
        week_nutrition.iter().map(|n| n.total_protein_g).sum::<f64>() / week_nutrition.len() as f64
    };

    let water_avg_ml = if week_nutrition.is_empty() {
        0.0
    } else {
        week_nutrition.iter().map(|n| n.water_ml).sum::<f64>() / week_nutrition.len() as f64
    };

    let streak_days = streak_days_on(sessions, today);

    debug!(
        window_start = %window_start,
        workouts = week_workouts,
        streak = streak_days,
        "computed weekly stats"
    );

    WeeklyStats {
        total_workouts: week_workouts,
        total_calories,
        avg_weight_kg,
        weight_change_kg,
        protein_avg_g,
        water_avg_ml,
        streak_days,
    }
}

// ============================================================================
// Daily Chart Series
// ============================================================================

/// One chart row per calendar day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySnapshot {
    pub date: NaiveDate,
    pub weight_kg: f64,
    pub calories: f64,
    pub workouts: usize,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
    pub water_ml: f64,
    /// True when any value on this row was filled from the synthetic
    /// fallback rather than a real log entry
    pub synthetic: bool,
}

/// Generate the daily chart series for the trailing `days` window,
/// anchored at today.
pub fn generate_analytics_data(
    sessions: &[WorkoutSession],
    nutrition_days: &[NutritionDay],
    weight_entries: &[WeightEntry],
    days: u32,
) -> Vec<DailySnapshot> {
    analytics_data_on(sessions, nutrition_days, weight_entries, days, Utc::now().date_naive())
}

/// Daily chart series with an explicit reference day.
///
/// Emits one row per day from `today - days` through `today` inclusive,
/// oldest first. Rows matched to real logs carry the logged values; days
/// without a weight or nutrition entry are filled from the synthetic
/// fallback and flagged. Workout counts are always real (zero is a valid
/// count, never synthesized).
pub fn analytics_data_on(
    sessions: &[WorkoutSession],
    nutrition_days: &[NutritionDay],
    weight_entries: &[WeightEntry],
    days: u32,
    today: NaiveDate,
) -> Vec<DailySnapshot> {
    let mut data = Vec::with_capacity(days as usize + 1);

    for offset in (0..=i64::from(days)).rev() {
        let date = today - Duration::days(offset);

        let workouts = sessions.iter().filter(|s| s.date() == date).count();
        let nutrition = nutrition_days.iter().find(|n| n.date == date);
        let weight = weight_entries.iter().find(|w| w.date == date);
        let synthetic = nutrition.is_none() || weight.is_none();

        data.push(DailySnapshot {
            date,
            weight_kg: weight.map_or_else(|| synthetic_weight(date), |w| w.weight_kg),
            calories: nutrition.map_or_else(|| synthetic_calories(date), |n| n.total_calories),
            workouts,
            protein_g: nutrition.map_or_else(|| synthetic_protein(date), |n| n.total_protein_g),
            carbs_g: nutrition.map_or_else(|| synthetic_carbs(date), |n| n.total_carbs_g),
            fat_g: nutrition.map_or_else(|| synthetic_fat(date), |n| n.total_fat_g),
            water_ml: nutrition.map_or_else(|| synthetic_water(date), |n| n.water_ml),
            synthetic,
        });
    }

    data
}

// ============================================================================
// Weight Trend
// ============================================================================

/// Smooth the logged weight series for the trend chart.
///
/// Returns one trailing moving average per entry, over up to `window`
/// preceding entries. Entries are expected ordered by date, oldest first;
/// a zero window or empty log yields an empty series.
pub fn smoothed_weight_series(entries: &[WeightEntry], window: usize) -> Vec<f64> {
    if entries.is_empty() || window == 0 {
        return vec![];
    }

    let mut series = Vec::with_capacity(entries.len());
    for i in 0..entries.len() {
        let start = i.saturating_sub(window - 1);
        let slice = &entries[start..=i];
        let avg = slice.iter().map(|w| w.weight_kg).sum::<f64>() / slice.len() as f64;
        series.push(avg);
    }
    series
}

// ============================================================================
// Synthetic Fallbacks
// ============================================================================
//
// Plausible per-day values for chart continuity only. Deterministic in the
// calendar day so renders and tests are stable; never used in aggregate
// statistics.

fn day_seed(date: NaiveDate) -> i64 {
    i64::from(date.num_days_from_ce())
}

fn synthetic_weight(date: NaiveDate) -> f64 {
    // 72.5..=77.5 kg
    DEFAULT_WEIGHT_KG - 2.5 + (day_seed(date) % 51) as f64 * 0.1
}

fn synthetic_calories(date: NaiveDate) -> f64 {
    // 1800..=2200 kcal
    1800.0 + (day_seed(date) % 9) as f64 * 50.0
}

fn synthetic_protein(date: NaiveDate) -> f64 {
    // 120..=160 g
    120.0 + (day_seed(date) % 41) as f64
}

fn synthetic_carbs(date: NaiveDate) -> f64 {
    // 200..=260 g
    200.0 + (day_seed(date) % 61) as f64
}

fn synthetic_fat(date: NaiveDate) -> f64 {
    // 60..=80 g
    60.0 + (day_seed(date) % 21) as f64
}

fn synthetic_water(date: NaiveDate) -> f64 {
    // 2000..=3000 ml
    2000.0 + (day_seed(date) % 11) as f64 * 100.0
}
