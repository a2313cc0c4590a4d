//! Rule-based recommendation engine
//!
//! Evaluates calorie balance, hydration, workout frequency, and goal
//! proximity against today's snapshot and emits the single highest-priority
//! actionable recommendation, plus next-day predictions, achievement
//! badges, and nutrition tips.
//!
//! The recommendation rules form an explicit ordered list of independent
//! predicates. Each fires zero or one candidate; selection keeps the
//! highest priority with the earliest rule winning ties. A second rule
//! list runs against the trailing-week statistics and returns every
//! firing insight, capped at three.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analytics::WeeklyStats;
use crate::calculator::{adjust_calories_for_goal, calculate_bmr, calculate_tdee};
use crate::models::{ActivityLevel, Goal, NutritionDay, TodayStats, UserProfile, WorkoutSession};

/// Severe calorie deficit threshold, as a fraction of the daily target
const CALORIE_DEFICIT_RATIO: f64 = 0.5;
/// Calorie excess threshold, as a fraction of the daily target
const CALORIE_EXCESS_RATIO: f64 = 1.2;
/// Hydration floor before the drink-more-water rule fires (ml)
const LOW_WATER_ML: f64 = 1500.0;
/// Daily water goal referenced in hydration advice (ml)
const WATER_GOAL_ML: f64 = 2000.0;
/// Session count at which the day counts as fully trained
const FULL_WORKOUT_DAY: u32 = 3;
/// Weekly session count below which the frequency insight fires
const WEEKLY_WORKOUT_FLOOR: usize = 3;
/// Recommended daily protein per kg of body weight (g)
const PROTEIN_PER_KG: f64 = 1.5;
/// Weekly average hydration floor (ml)
const WEEKLY_WATER_FLOOR_ML: f64 = 2500.0;
/// Recent consecutive sessions before the recovery insight fires
const REST_SESSION_COUNT: usize = 5;
/// Streak length that earns the consistency nod (days)
const STREAK_PRAISE_DAYS: u32 = 7;
/// Weekly insight list cap
const WEEKLY_LIST_CAP: usize = 3;

// ============================================================================
// Output Types
// ============================================================================

/// Recommendation priority; higher wins selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

/// Recommendation category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationKind {
    General,
    Nutrition,
    Hydration,
    Workout,
    Recovery,
    Goal,
    Motivation,
}

/// A single actionable recommendation. Ephemeral: recomputed on every
/// evaluation, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub kind: RecommendationKind,
    pub icon: String,
    pub title: String,
    pub description: String,
    pub priority: Priority,
}

/// Heuristic prediction for tomorrow
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TomorrowPrediction {
    pub prediction: String,
    /// 0-100, capped at 80; never certainty
    pub confidence: u32,
    /// At most two tips
    pub tips: Vec<String>,
}

/// Achievement badge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Badge {
    pub icon: String,
    pub title: String,
    pub description: String,
    pub earned: bool,
}

/// Nutrition tip category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TipCategory {
    General,
    Calories,
    Protein,
    Hydration,
    Timing,
}

/// A single nutrition tip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionTip {
    pub category: TipCategory,
    pub tip: String,
    pub priority: Priority,
}

// ============================================================================
// Recommendation Rules
// ============================================================================

/// Daily calorie target for a profile: BMR → TDEE → goal adjustment.
fn daily_target_calories(profile: &UserProfile) -> f64 {
    let bmr = calculate_bmr(profile.gender, profile.age, profile.weight_kg, profile.height_cm);
    adjust_calories_for_goal(calculate_tdee(bmr, profile.activity_level), profile.goal)
}

struct RuleContext<'a> {
    profile: &'a UserProfile,
    target_calories: f64,
    today: &'a TodayStats,
}

type Rule = fn(&RuleContext) -> Option<Recommendation>;

/// Rules in fixed evaluation order; order breaks priority ties.
const RULES: &[Rule] = &[
    rule_calorie_deficit,
    rule_calorie_excess,
    rule_low_hydration,
    rule_no_workout_today,
    rule_all_workouts_done,
    rule_goal_nearly_met,
];

fn rule_calorie_deficit(ctx: &RuleContext) -> Option<Recommendation> {
    // A day with nothing logged yet is not a deficit; the workout rule
    // covers the empty-day case.
    if ctx.today.calories > 0.0 && ctx.today.calories < ctx.target_calories * CALORIE_DEFICIT_RATIO {
        let remaining = (ctx.target_calories - ctx.today.calories).round();
        Some(Recommendation {
            kind: RecommendationKind::Nutrition,
            icon: "🍽️".to_string(),
            title: "Increase your calories".to_string(),
            description: format!("You need {remaining} more kcal to reach your daily target"),
            priority: Priority::High,
        })
    } else {
        None
    }
}

fn rule_calorie_excess(ctx: &RuleContext) -> Option<Recommendation> {
    if ctx.today.calories > ctx.target_calories * CALORIE_EXCESS_RATIO {
        let excess = (ctx.today.calories - ctx.target_calories).round();
        Some(Recommendation {
            kind: RecommendationKind::Nutrition,
            icon: "⚖️".to_string(),
            title: "Ease off the calories".to_string(),
            description: format!("You are {excess} kcal over your daily target"),
            priority: Priority::Medium,
        })
    } else {
        None
    }
}

fn rule_low_hydration(ctx: &RuleContext) -> Option<Recommendation> {
    if ctx.today.water_ml < LOW_WATER_ML {
        let remaining = (WATER_GOAL_ML - ctx.today.water_ml).round();
        Some(Recommendation {
            kind: RecommendationKind::Hydration,
            icon: "💧".to_string(),
            title: "Drink more water".to_string(),
            description: format!("Drink {remaining} ml more water to stay hydrated"),
            priority: Priority::Medium,
        })
    } else {
        None
    }
}

fn rule_no_workout_today(ctx: &RuleContext) -> Option<Recommendation> {
    if ctx.today.workouts_completed == 0 {
        Some(Recommendation {
            kind: RecommendationKind::Workout,
            icon: "🏃".to_string(),
            title: "Start a workout".to_string(),
            description: "No workouts yet today. Begin with a light 15-minute warm-up".to_string(),
            priority: Priority::High,
        })
    } else {
        None
    }
}

fn rule_all_workouts_done(ctx: &RuleContext) -> Option<Recommendation> {
    if ctx.today.workouts_completed >= FULL_WORKOUT_DAY {
        Some(Recommendation {
            kind: RecommendationKind::Recovery,
            icon: "😴".to_string(),
            title: "Great work!".to_string(),
            description: "You finished all workouts for today. Remember to rest".to_string(),
            priority: Priority::Low,
        })
    } else {
        None
    }
}

fn rule_goal_nearly_met(ctx: &RuleContext) -> Option<Recommendation> {
    if ctx.profile.goal == Goal::LoseWeight && ctx.today.goal_progress > 80.0 {
        Some(Recommendation {
            kind: RecommendationKind::Goal,
            icon: "🎯".to_string(),
            title: "You are on track!".to_string(),
            description: format!(
                "{}% of today's goal complete. Keep it up!",
                ctx.today.goal_progress.round()
            ),
            priority: Priority::Low,
        })
    } else {
        None
    }
}

fn create_profile_recommendation() -> Recommendation {
    Recommendation {
        kind: RecommendationKind::General,
        icon: "💡".to_string(),
        title: "Create your profile".to_string(),
        description: "Fill in your details to get personalized recommendations".to_string(),
        priority: Priority::High,
    }
}

fn fallback_motivation() -> Recommendation {
    Recommendation {
        kind: RecommendationKind::Motivation,
        icon: "⭐".to_string(),
        title: "Great day!".to_string(),
        description: "You are keeping a good balance of nutrition and activity. Keep going!"
            .to_string(),
        priority: Priority::Low,
    }
}

/// Produce the single most important recommendation for right now.
///
/// Without a profile the engine short-circuits to a high-priority prompt
/// to create one. Otherwise the rule list runs in order and the highest
/// priority candidate wins, earliest rule breaking ties; when nothing
/// fires, a low-priority motivational fallback is returned.
pub fn generate_recommendation(
    profile: Option<&UserProfile>,
    today: &TodayStats,
    _recent_sessions: &[WorkoutSession],
    _nutrition_days: &[NutritionDay],
) -> Recommendation {
    let Some(profile) = profile else {
        return create_profile_recommendation();
    };

    let ctx = RuleContext {
        profile,
        target_calories: daily_target_calories(profile),
        today,
    };

    let mut best: Option<Recommendation> = None;
    for rule in RULES {
        if let Some(candidate) = rule(&ctx) {
            let wins = best
                .as_ref()
                .map_or(true, |current| candidate.priority > current.priority);
            if wins {
                best = Some(candidate);
            }
        }
    }

    let selected = best.unwrap_or_else(fallback_motivation);
    debug!(title = %selected.title, priority = ?selected.priority, "selected recommendation");
    selected
}

// ============================================================================
// Weekly Insights
// ============================================================================

struct WeeklyContext<'a> {
    profile: &'a UserProfile,
    stats: &'a WeeklyStats,
    recent_sessions: &'a [WorkoutSession],
}

type WeeklyRule = fn(&WeeklyContext) -> Option<Recommendation>;

/// Weekly rules in fixed evaluation order; every firing rule contributes.
const WEEKLY_RULES: &[WeeklyRule] = &[
    weekly_rule_workout_frequency,
    weekly_rule_low_protein,
    weekly_rule_low_water,
    weekly_rule_rest_needed,
    weekly_rule_streak_praise,
];

fn weekly_rule_workout_frequency(ctx: &WeeklyContext) -> Option<Recommendation> {
    if ctx.stats.total_workouts < WEEKLY_WORKOUT_FLOOR {
        Some(Recommendation {
            kind: RecommendationKind::Workout,
            icon: "💪".to_string(),
            title: "Train more often".to_string(),
            description: "Three to four sessions a week give the best results".to_string(),
            priority: Priority::High,
        })
    } else {
        None
    }
}

fn weekly_rule_low_protein(ctx: &WeeklyContext) -> Option<Recommendation> {
    let recommended = ctx.profile.weight_kg * PROTEIN_PER_KG;
    if ctx.stats.protein_avg_g < recommended {
        Some(Recommendation {
            kind: RecommendationKind::Nutrition,
            icon: "🥗".to_string(),
            title: "Add more protein".to_string(),
            description: format!(
                "You averaged {} g of protein a day; aim for {} g",
                ctx.stats.protein_avg_g.round(),
                recommended.round()
            ),
            priority: Priority::Medium,
        })
    } else {
        None
    }
}

fn weekly_rule_low_water(ctx: &WeeklyContext) -> Option<Recommendation> {
    if ctx.stats.water_avg_ml < WEEKLY_WATER_FLOOR_ML {
        Some(Recommendation {
            kind: RecommendationKind::Hydration,
            icon: "💧".to_string(),
            title: "Drink more water".to_string(),
            description: "At least 2.5 liters a day keeps your metabolism going".to_string(),
            priority: Priority::Medium,
        })
    } else {
        None
    }
}

fn weekly_rule_rest_needed(ctx: &WeeklyContext) -> Option<Recommendation> {
    if ctx.recent_sessions.len() >= REST_SESSION_COUNT {
        Some(Recommendation {
            kind: RecommendationKind::Recovery,
            icon: "😴".to_string(),
            title: "Time to rest".to_string(),
            description: "Five training days in a row. Give your body a day to recover"
                .to_string(),
            priority: Priority::High,
        })
    } else {
        None
    }
}

fn weekly_rule_streak_praise(ctx: &WeeklyContext) -> Option<Recommendation> {
    if ctx.stats.streak_days >= STREAK_PRAISE_DAYS {
        Some(Recommendation {
            kind: RecommendationKind::Motivation,
            icon: "🏆".to_string(),
            title: "Great consistency!".to_string(),
            description: format!(
                "A {}-day streak! Keep it up",
                ctx.stats.streak_days
            ),
            priority: Priority::Low,
        })
    } else {
        None
    }
}

/// Weekly insight list driven by the trailing-week statistics.
///
/// Unlike the single daily recommendation, every firing rule contributes
/// one entry in rule order and the list is capped at three. The protein
/// check scales with body weight; `recent_sessions` holds the latest
/// consecutive training days for the recovery check.
pub fn generate_weekly_recommendations(
    profile: &UserProfile,
    stats: &WeeklyStats,
    recent_sessions: &[WorkoutSession],
) -> Vec<Recommendation> {
    let ctx = WeeklyContext {
        profile,
        stats,
        recent_sessions,
    };

    let mut insights: Vec<Recommendation> =
        WEEKLY_RULES.iter().filter_map(|rule| rule(&ctx)).collect();
    debug!(fired = insights.len(), "generated weekly insights");
    insights.truncate(WEEKLY_LIST_CAP);
    insights
}

// ============================================================================
// Tomorrow Prediction
// ============================================================================

/// Assemble a heuristic prediction for tomorrow.
///
/// Predictions and tips accumulate in a fixed heuristic order; the first
/// prediction and at most two tips are returned. Confidence grows with
/// recent data volume and is capped at 80. Sequences are expected ordered
/// by date, oldest first.
pub fn generate_tomorrow_prediction(
    profile: Option<&UserProfile>,
    today: &TodayStats,
    recent_sessions: &[WorkoutSession],
    nutrition_days: &[NutritionDay],
) -> TomorrowPrediction {
    let Some(profile) = profile else {
        return TomorrowPrediction {
            prediction: "Complete your profile to unlock predictions".to_string(),
            confidence: 0,
            tips: vec![],
        };
    };

    let target = daily_target_calories(profile);
    let mut predictions: Vec<String> = Vec::new();
    let mut tips: Vec<String> = Vec::new();

    if let Some(last) = recent_sessions.last() {
        if last.completed {
            predictions.push("tomorrow looks like a good workout day".to_string());
            tips.push("Rest up and get ready for a new achievement".to_string());
        } else {
            predictions.push("tomorrow is the day to finish the workout you started".to_string());
            tips.push("Pick up where you left off".to_string());
        }
    }

    if let Some(last) = nutrition_days.last() {
        if last.total_calories > target * CALORIE_EXCESS_RATIO {
            predictions.push("tomorrow calls for a closer eye on calories".to_string());
            tips.push("Plan your meals ahead".to_string());
        }
    }

    let avg_calories = if nutrition_days.is_empty() {
        2000.0
    } else {
        nutrition_days.iter().map(|n| n.total_calories).sum::<f64>() / nutrition_days.len() as f64
    };
    if avg_calories < target * 0.9 {
        predictions.push("tomorrow it will be easier to stay within your calorie target".to_string());
        tips.push("Prepare a healthy breakfast".to_string());
    } else {
        predictions.push("tomorrow will be a good day for nutrition".to_string());
        tips.push("Keep doing what you are doing".to_string());
    }

    if recent_sessions.len() < 3 {
        predictions.push("tomorrow is a perfect day for a workout".to_string());
        tips.push("Schedule your workout for the morning".to_string());
    } else {
        predictions.push("tomorrow is a good day for a light session".to_string());
        tips.push("Focus on stretching and recovery".to_string());
    }

    if today.goal_progress > 80.0 {
        predictions.push("tomorrow should feel great".to_string());
        tips.push("You are hitting your goals!".to_string());
    } else if today.goal_progress < 30.0 {
        predictions.push("tomorrow may be tough, but you can handle it".to_string());
        tips.push("Start the day with a small win".to_string());
    }

    let confidence =
        (recent_sessions.len() as u32 * 20 + nutrition_days.len() as u32 * 10).min(80);

    tips.truncate(2);
    TomorrowPrediction {
        prediction: predictions
            .into_iter()
            .next()
            .unwrap_or_else(|| "tomorrow will be a productive day".to_string()),
        confidence,
        tips,
    }
}

// ============================================================================
// Motivation Badges
// ============================================================================

/// Evaluate the independent achievement checks for today.
///
/// Each passing check yields one earned badge; failing checks yield
/// nothing. The `earned` flag exists so callers can later render locked
/// badges without a contract change.
pub fn generate_motivation_badges(
    _profile: Option<&UserProfile>,
    today: &TodayStats,
    streak_days: u32,
) -> Vec<Badge> {
    let mut badges = Vec::new();

    if today.goal_progress >= 100.0 {
        badges.push(Badge {
            icon: "🔥".to_string(),
            title: "Calories achieved".to_string(),
            description: "Daily target reached".to_string(),
            earned: true,
        });
    }

    if today.water_ml >= WATER_GOAL_ML {
        badges.push(Badge {
            icon: "💧".to_string(),
            title: "Hydration".to_string(),
            description: "2 liters of water down".to_string(),
            earned: true,
        });
    }

    if today.workouts_completed >= FULL_WORKOUT_DAY {
        badges.push(Badge {
            icon: "💪".to_string(),
            title: "Athlete".to_string(),
            description: "All workouts complete".to_string(),
            earned: true,
        });
    }

    if streak_days >= 7 {
        badges.push(Badge {
            icon: "🔥".to_string(),
            title: "Week of success".to_string(),
            description: format!("{streak_days} days in a row"),
            earned: true,
        });
    }

    if today.goal_progress >= 50.0 {
        badges.push(Badge {
            icon: "📈".to_string(),
            title: "Progress".to_string(),
            description: format!("{}% of today's goal", today.goal_progress.round()),
            earned: true,
        });
    }

    badges
}

// ============================================================================
// Nutrition Tips
// ============================================================================

/// Goal- and activity-conditioned nutrition advice, at most three tips.
pub fn generate_nutrition_tips(
    profile: Option<&UserProfile>,
    today: &TodayStats,
    _nutrition_days: &[NutritionDay],
) -> Vec<NutritionTip> {
    let Some(profile) = profile else {
        return vec![NutritionTip {
            category: TipCategory::General,
            tip: "Balance your meals: protein, fats, and carbs in the right proportions"
                .to_string(),
            priority: Priority::Medium,
        }];
    };

    let target = daily_target_calories(profile);
    let mut tips = Vec::new();

    match profile.goal {
        Goal::LoseWeight => {
            tips.push(NutritionTip {
                category: TipCategory::Calories,
                tip: "Keep a 300-500 kcal deficit for safe weight loss".to_string(),
                priority: Priority::High,
            });
            tips.push(NutritionTip {
                category: TipCategory::Protein,
                tip: "Raise your protein intake to 1.6-2 g per kg of body weight".to_string(),
                priority: Priority::High,
            });
        }
        Goal::GainMuscle => {
            tips.push(NutritionTip {
                category: TipCategory::Calories,
                tip: "Keep a 300-500 kcal surplus to build mass".to_string(),
                priority: Priority::High,
            });
            tips.push(NutritionTip {
                category: TipCategory::Protein,
                tip: "Eat 1.8-2.2 g of protein per kg of body weight for muscle growth"
                    .to_string(),
                priority: Priority::High,
            });
        }
        Goal::Maintain => {}
    }

    if profile.activity_level == ActivityLevel::VeryActive {
        tips.push(NutritionTip {
            category: TipCategory::Hydration,
            tip: "Drink 2.5-3 liters of water a day at your activity level".to_string(),
            priority: Priority::Medium,
        });
    }

    if today.calories < target * CALORIE_DEFICIT_RATIO {
        tips.push(NutritionTip {
            category: TipCategory::Timing,
            tip: "Spread your calories evenly across the day".to_string(),
            priority: Priority::Medium,
        });
    }

    tips.truncate(3);
    tips
}
