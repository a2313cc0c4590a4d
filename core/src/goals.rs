//! Goal progress tracker
//!
//! Compares the current aggregate state against the user's selected goal
//! and produces normalized percentage-complete values per tracked metric.
//! Percentages are clamped to 0-100, never extrapolated.

use chrono::{Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::analytics::streak_days_on;
use crate::models::{Goal, UserProfile, WeightEntry, WorkoutSession};

/// Weight change tracked against this target (kg)
const WEIGHT_TARGET_KG: f64 = 5.0;
/// Workouts tracked over the trailing 30 days against this target
const MONTHLY_WORKOUT_TARGET: u32 = 12;
/// Streak tracked against this target (days)
const STREAK_TARGET_DAYS: u32 = 30;

/// Progress toward one tracked goal metric
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalProgress {
    pub name: String,
    pub current: f64,
    pub target: f64,
    pub unit: String,
    /// Percentage complete, clamped to 0-100
    pub percentage: f64,
}

/// Percentage of target reached, clamped to the 0-100 range.
fn clamped_percentage(current: f64, target: f64) -> f64 {
    if target <= 0.0 {
        return 0.0;
    }
    (current / target * 100.0).clamp(0.0, 100.0)
}

/// Calculate goal progress anchored at today.
pub fn calculate_goal_progress(
    profile: &UserProfile,
    weight_entries: &[WeightEntry],
    sessions: &[WorkoutSession],
) -> Vec<GoalProgress> {
    goal_progress_on(profile, weight_entries, sessions, Utc::now().date_naive())
}

/// Goal progress with an explicit reference day.
///
/// The goals list depends on `profile.goal`: a weight-trend goal is added
/// for weight-loss and muscle-gain goals when at least one weight entry
/// exists. The monthly-workouts and streak goals are always present.
/// Weight entries are expected ordered by date, oldest first.
pub fn goal_progress_on(
    profile: &UserProfile,
    weight_entries: &[WeightEntry],
    sessions: &[WorkoutSession],
    today: NaiveDate,
) -> Vec<GoalProgress> {
    let mut goals = Vec::new();

    if let (Some(first), Some(last)) = (weight_entries.first(), weight_entries.last()) {
        match profile.goal {
            Goal::LoseWeight => {
                let lost = first.weight_kg - last.weight_kg;
                goals.push(GoalProgress {
                    name: "Weight loss".to_string(),
                    current: lost,
                    target: WEIGHT_TARGET_KG,
                    unit: "kg".to_string(),
                    percentage: clamped_percentage(lost, WEIGHT_TARGET_KG),
                });
            }
            Goal::GainMuscle => {
                let gained = last.weight_kg - first.weight_kg;
                goals.push(GoalProgress {
                    name: "Muscle gain".to_string(),
                    current: gained,
                    target: WEIGHT_TARGET_KG,
                    unit: "kg".to_string(),
                    percentage: clamped_percentage(gained, WEIGHT_TARGET_KG),
                });
            }
            Goal::Maintain => {}
        }
    }

    let month_start = today - Duration::days(29);
    let monthly_workouts = sessions.iter().filter(|s| s.date() >= month_start).count();
    goals.push(GoalProgress {
        name: "Monthly workouts".to_string(),
        current: monthly_workouts as f64,
        target: f64::from(MONTHLY_WORKOUT_TARGET),
        unit: "workouts".to_string(),
        percentage: clamped_percentage(monthly_workouts as f64, f64::from(MONTHLY_WORKOUT_TARGET)),
    });

    let streak = streak_days_on(sessions, today);
    goals.push(GoalProgress {
        name: "Workout streak".to_string(),
        current: f64::from(streak),
        target: f64::from(STREAK_TARGET_DAYS),
        unit: "days".to_string(),
        percentage: clamped_percentage(f64::from(streak), f64::from(STREAK_TARGET_DAYS)),
    });

    goals
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ActivityLevel, Gender};
    use chrono::{Datelike, TimeZone};
    use proptest::prelude::*;
    use uuid::Uuid;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn profile(goal: Goal) -> UserProfile {
        UserProfile {
            id: Uuid::new_v4(),
            name: "Test".to_string(),
            age: 30,
            gender: Gender::Male,
            height_cm: 180.0,
            weight_kg: 80.0,
            activity_level: ActivityLevel::Moderate,
            goal,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn weight_on(date: NaiveDate, weight_kg: f64) -> WeightEntry {
        WeightEntry {
            id: Uuid::new_v4(),
            date,
            weight_kg,
            body_fat_percent: None,
            notes: None,
        }
    }

    fn session_on(date: NaiveDate) -> WorkoutSession {
        WorkoutSession {
            id: Uuid::new_v4(),
            workout_id: Uuid::new_v4(),
            start_time: Utc
                .with_ymd_and_hms(date.year(), date.month(), date.day(), 9, 0, 0)
                .unwrap(),
            end_time: None,
            duration_secs: None,
            completed: true,
            exercises: vec![],
            notes: None,
        }
    }

    #[test]
    fn test_weight_loss_goal_progress() {
        let t = today();
        let weights = vec![weight_on(t - Duration::days(60), 85.0), weight_on(t, 82.0)];
        let goals = goal_progress_on(&profile(Goal::LoseWeight), &weights, &[], t);

        let weight_goal = &goals[0];
        assert_eq!(weight_goal.name, "Weight loss");
        assert_eq!(weight_goal.current, 3.0);
        assert_eq!(weight_goal.percentage, 60.0);
    }

    #[test]
    fn test_muscle_gain_goal_is_symmetric() {
        let t = today();
        let weights = vec![weight_on(t - Duration::days(60), 70.0), weight_on(t, 72.0)];
        let goals = goal_progress_on(&profile(Goal::GainMuscle), &weights, &[], t);

        let weight_goal = &goals[0];
        assert_eq!(weight_goal.name, "Muscle gain");
        assert_eq!(weight_goal.current, 2.0);
        assert_eq!(weight_goal.percentage, 40.0);
    }

    #[test]
    fn test_maintain_has_no_weight_goal() {
        let t = today();
        let weights = vec![weight_on(t, 80.0)];
        let goals = goal_progress_on(&profile(Goal::Maintain), &weights, &[], t);
        assert_eq!(goals.len(), 2);
        assert_eq!(goals[0].name, "Monthly workouts");
        assert_eq!(goals[1].name, "Workout streak");
    }

    #[test]
    fn test_percentage_clamped_at_100() {
        let t = today();
        // Lost 8kg against a 5kg target
        let weights = vec![weight_on(t - Duration::days(90), 90.0), weight_on(t, 82.0)];
        let goals = goal_progress_on(&profile(Goal::LoseWeight), &weights, &[], t);
        assert_eq!(goals[0].percentage, 100.0);
    }

    #[test]
    fn test_percentage_floored_at_0() {
        let t = today();
        // Gained weight on a weight-loss goal
        let weights = vec![weight_on(t - Duration::days(30), 80.0), weight_on(t, 83.0)];
        let goals = goal_progress_on(&profile(Goal::LoseWeight), &weights, &[], t);
        assert_eq!(goals[0].percentage, 0.0);
    }

    #[test]
    fn test_monthly_workouts_window() {
        let t = today();
        let sessions = vec![
            session_on(t),
            session_on(t - Duration::days(10)),
            session_on(t - Duration::days(29)), // oldest day still inside
            session_on(t - Duration::days(30)), // exactly 30 days back: outside
            session_on(t - Duration::days(45)),
        ];
        let goals = goal_progress_on(&profile(Goal::Maintain), &[], &sessions, t);
        let monthly = goals.iter().find(|g| g.name == "Monthly workouts").unwrap();
        assert_eq!(monthly.current, 3.0);
        assert_eq!(monthly.percentage, 25.0);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Clamp invariant: percentage always lands in 0-100
        #[test]
        fn prop_percentage_always_clamped(current in -1000.0f64..1000.0, target in 0.1f64..100.0) {
            let pct = clamped_percentage(current, target);
            prop_assert!((0.0..=100.0).contains(&pct));
        }

        /// A non-positive target never divides
        #[test]
        fn prop_zero_target_guarded(current in -1000.0f64..1000.0) {
            prop_assert_eq!(clamped_percentage(current, 0.0), 0.0);
            prop_assert_eq!(clamped_percentage(current, -5.0), 0.0);
        }
    }
}
