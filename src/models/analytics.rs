use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Strength classification relative to body weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StrengthLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl StrengthLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            StrengthLevel::Beginner => "Beginner",
            StrengthLevel::Intermediate => "Intermediate",
            StrengthLevel::Advanced => "Advanced",
        }
    }
}

impl std::fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Metrics for one user-week, as computed by the calculator before persistence.
#[derive(Debug, Clone, PartialEq)]
pub struct WeeklyMetrics {
    pub week_start_date: NaiveDate,
    pub total_volume: f64,
    pub max_lift: f64,
    pub average_intensity: f64,
    pub strength_level: StrengthLevel,
    pub total_calories_burned: f64,
    pub weekly_workout_duration_minutes: i32,
}

/// The stored weekly rollup. Derived state: recomputable from workouts,
/// categories and the user's weight, and only ever written by the calculator's
/// upsert.
#[derive(Debug, sqlx::FromRow, Serialize)]
pub struct WeeklyAnalytics {
    pub id: Uuid,
    pub user_id: Uuid,
    pub week_start_date: NaiveDate,
    pub total_volume: f64,
    pub max_lift: f64,
    pub average_intensity: f64,
    pub strength_level: String,
    pub total_calories_burned: f64,
    pub weekly_workout_duration_minutes: i32,
    pub updated_at: DateTime<Utc>,
}

/// The slice of a workout row the weekly calculator needs, with the category
/// name and MET coefficient joined in.
#[derive(Debug, sqlx::FromRow)]
pub struct WeeklyWorkoutRow {
    pub weight_used: Option<f64>,
    pub reps: Option<i32>,
    pub sets: Option<i32>,
    pub workout_duration_minutes: i32,
    pub category_name: Option<String>,
    pub met_value: Option<f64>,
}
