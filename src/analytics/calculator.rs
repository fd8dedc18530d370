use chrono::{Datelike, Duration, NaiveDate};

use crate::models::analytics::{StrengthLevel, WeeklyMetrics, WeeklyWorkoutRow};

/// Category name whose workouts count towards volume and max-lift.
pub const STRENGTH_CATEGORY: &str = "Strength Training";

/// Fallback MET coefficients when a workout's category carries no stored value.
const STRENGTH_MET_FALLBACK: f64 = 6.0;
const DEFAULT_MET_FALLBACK: f64 = 7.0;

/// Body weight used for calorie estimation when the user has none on file.
pub const DEFAULT_BODYWEIGHT_KG: f64 = 70.0;

/// The Monday on or before the reference date (ISO week start).
pub fn week_start_for(reference_date: NaiveDate) -> NaiveDate {
    reference_date - Duration::days(reference_date.weekday().num_days_from_monday() as i64)
}

/// Classify lifting performance relative to body weight.
pub fn classify_strength_level(max_lift: f64, bodyweight_kg: f64) -> StrengthLevel {
    if max_lift >= 1.5 * bodyweight_kg {
        StrengthLevel::Advanced
    } else if max_lift >= bodyweight_kg {
        StrengthLevel::Intermediate
    } else {
        StrengthLevel::Beginner
    }
}

/// Aggregate one week of workouts into the derived metrics.
///
/// Only strength-category workouts count towards volume and max lift; a row
/// missing any of weight/reps/sets contributes 0 volume rather than erroring.
/// Every selected workout contributes duration and calories.
pub fn compute_weekly_metrics(
    week_start: NaiveDate,
    workouts: &[WeeklyWorkoutRow],
    bodyweight_kg: f64,
) -> WeeklyMetrics {
    let mut total_volume = 0.0;
    let mut max_lift: f64 = 0.0;
    let mut weekly_duration: i32 = 0;
    let mut total_calories = 0.0;

    for workout in workouts {
        weekly_duration += workout.workout_duration_minutes;

        let is_strength = workout.category_name.as_deref() == Some(STRENGTH_CATEGORY);
        if is_strength {
            total_volume += row_volume(workout);
            if let Some(weight) = workout.weight_used {
                max_lift = max_lift.max(weight);
            }
        }

        let met = workout.met_value.unwrap_or(if is_strength {
            STRENGTH_MET_FALLBACK
        } else {
            DEFAULT_MET_FALLBACK
        });
        total_calories +=
            met * 3.5 * bodyweight_kg / 200.0 * workout.workout_duration_minutes as f64;
    }

    let average_intensity = if weekly_duration > 0 {
        round2(total_volume / weekly_duration as f64)
    } else {
        0.0
    };

    WeeklyMetrics {
        week_start_date: week_start,
        total_volume,
        max_lift,
        average_intensity,
        strength_level: classify_strength_level(max_lift, bodyweight_kg),
        total_calories_burned: round2(total_calories),
        weekly_workout_duration_minutes: weekly_duration,
    }
}

/// weight × reps × sets, with any missing factor collapsing the row to 0.
fn row_volume(workout: &WeeklyWorkoutRow) -> f64 {
    match (workout.weight_used, workout.reps, workout.sets) {
        (Some(weight), Some(reps), Some(sets)) => weight * reps as f64 * sets as f64,
        _ => 0.0,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
