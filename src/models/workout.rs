use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single workout session entry, joined with its category name for display.
#[derive(Debug, sqlx::FromRow, Serialize)]
pub struct WorkoutRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub exercise_name: String,
    pub weight_used: Option<f64>,
    pub reps: Option<i32>,
    pub sets: Option<i32>,
    pub workout_duration_minutes: i32,
    pub date: NaiveDate,
    pub notes: Option<String>,
    pub image_url: Option<String>,
    pub category_id: Option<Uuid>,
    pub category_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Deserialize)]
pub struct CreateWorkoutRequest {
    pub exercise_name: String,
    pub weight_used: Option<f64>,
    pub reps: Option<i32>,
    pub sets: Option<i32>,
    #[serde(default)]
    pub workout_duration_minutes: i32,
    pub date: NaiveDate,
    pub notes: Option<String>,
    pub image_url: Option<String>,
    pub category_id: Option<Uuid>,
}

/// Partial update with a fixed, enumerated field set. Fields left out of the
/// payload keep their stored value.
#[derive(Deserialize)]
pub struct UpdateWorkoutRequest {
    pub exercise_name: Option<String>,
    pub weight_used: Option<f64>,
    pub reps: Option<i32>,
    pub sets: Option<i32>,
    pub workout_duration_minutes: Option<i32>,
    pub date: Option<NaiveDate>,
    pub notes: Option<String>,
    pub image_url: Option<String>,
    pub category_id: Option<Uuid>,
}

#[derive(Debug, Deserialize)]
pub struct WorkoutListQuery {
    pub date: Option<NaiveDate>,
    pub date_after: Option<NaiveDate>,
    pub date_before: Option<NaiveDate>,
    pub exercise_name: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
