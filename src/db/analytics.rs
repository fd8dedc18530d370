use sqlx::PgPool;
use uuid::Uuid;

use crate::models::analytics::{WeeklyAnalytics, WeeklyMetrics};

/// Create-or-overwrite the single analytics row for (user, week).
///
/// The uniqueness constraint plus ON CONFLICT makes this atomic: concurrent
/// recomputations for the same user and week cannot produce duplicate rows,
/// and the stored row always reflects one coherent computation.
pub async fn upsert_weekly_analytics(
    pool: &PgPool,
    user_id: Uuid,
    metrics: &WeeklyMetrics,
) -> Result<WeeklyAnalytics, sqlx::Error> {
    sqlx::query_as::<_, WeeklyAnalytics>(
        r#"
        INSERT INTO weekly_analytics (
            id, user_id, week_start_date,
            total_volume, max_lift, average_intensity, strength_level,
            total_calories_burned, weekly_workout_duration_minutes, updated_at
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, NOW())
        ON CONFLICT (user_id, week_start_date)
        DO UPDATE SET
            total_volume = $4,
            max_lift = $5,
            average_intensity = $6,
            strength_level = $7,
            total_calories_burned = $8,
            weekly_workout_duration_minutes = $9,
            updated_at = NOW()
        RETURNING
            id, user_id, week_start_date, total_volume, max_lift,
            average_intensity, strength_level, total_calories_burned,
            weekly_workout_duration_minutes, updated_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(metrics.week_start_date)
    .bind(metrics.total_volume)
    .bind(metrics.max_lift)
    .bind(metrics.average_intensity)
    .bind(metrics.strength_level.as_str())
    .bind(metrics.total_calories_burned)
    .bind(metrics.weekly_workout_duration_minutes)
    .fetch_one(pool)
    .await
}
