use chrono::{NaiveDate, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::analytics::WeeklyWorkoutRow;
use crate::models::workout::{
    CreateWorkoutRequest, UpdateWorkoutRequest, WorkoutListQuery, WorkoutRecord,
};

const SELECT_WORKOUT: &str = r#"
    SELECT
        w.id, w.user_id, w.exercise_name, w.weight_used, w.reps, w.sets,
        w.workout_duration_minutes, w.date, w.notes, w.image_url,
        w.category_id, c.name AS category_name, w.created_at, w.updated_at
    FROM workouts w
    LEFT JOIN categories c ON c.id = w.category_id
"#;

pub async fn insert_workout(
    pool: &PgPool,
    user_id: Uuid,
    request: &CreateWorkoutRequest,
) -> Result<WorkoutRecord, sqlx::Error> {
    let workout_id = Uuid::new_v4();
    let now = Utc::now();

    sqlx::query(
        r#"
        INSERT INTO workouts (
            id, user_id, exercise_name, weight_used, reps, sets,
            workout_duration_minutes, date, notes, image_url, category_id,
            created_at, updated_at
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
        "#,
    )
    .bind(workout_id)
    .bind(user_id)
    .bind(&request.exercise_name)
    .bind(request.weight_used)
    .bind(request.reps)
    .bind(request.sets)
    .bind(request.workout_duration_minutes)
    .bind(request.date)
    .bind(request.notes.as_deref())
    .bind(request.image_url.as_deref())
    .bind(request.category_id)
    .bind(now)
    .bind(now)
    .execute(pool)
    .await?;

    // Re-read through the join so the response carries the category name
    get_workout(pool, user_id, workout_id)
        .await?
        .ok_or(sqlx::Error::RowNotFound)
}

/// List a user's workouts, most recent date first, ties broken by exercise
/// name. All filters are optional.
pub async fn list_workouts(
    pool: &PgPool,
    user_id: Uuid,
    query: &WorkoutListQuery,
) -> Result<Vec<WorkoutRecord>, sqlx::Error> {
    let limit = query.limit.unwrap_or(20).clamp(1, 100);
    let offset = query.offset.unwrap_or(0).max(0);

    let sql = format!(
        r#"
        {SELECT_WORKOUT}
        WHERE w.user_id = $1
            AND ($2::date IS NULL OR w.date = $2)
            AND ($3::date IS NULL OR w.date >= $3)
            AND ($4::date IS NULL OR w.date <= $4)
            AND ($5::text IS NULL OR w.exercise_name ILIKE '%' || $5 || '%')
        ORDER BY w.date DESC, w.exercise_name ASC
        LIMIT $6 OFFSET $7
        "#
    );

    sqlx::query_as::<_, WorkoutRecord>(&sql)
        .bind(user_id)
        .bind(query.date)
        .bind(query.date_after)
        .bind(query.date_before)
        .bind(query.exercise_name.as_deref())
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await
}

pub async fn get_workout(
    pool: &PgPool,
    user_id: Uuid,
    workout_id: Uuid,
) -> Result<Option<WorkoutRecord>, sqlx::Error> {
    let sql = format!("{SELECT_WORKOUT} WHERE w.id = $1 AND w.user_id = $2");

    sqlx::query_as::<_, WorkoutRecord>(&sql)
        .bind(workout_id)
        .bind(user_id)
        .fetch_optional(pool)
        .await
}

/// Enumerated field-by-field merge; fields absent from the payload keep their
/// stored value.
pub async fn update_workout(
    pool: &PgPool,
    user_id: Uuid,
    workout_id: Uuid,
    update: &UpdateWorkoutRequest,
) -> Result<Option<WorkoutRecord>, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE workouts
        SET
            exercise_name = COALESCE($3, exercise_name),
            weight_used = COALESCE($4, weight_used),
            reps = COALESCE($5, reps),
            sets = COALESCE($6, sets),
            workout_duration_minutes = COALESCE($7, workout_duration_minutes),
            date = COALESCE($8, date),
            notes = COALESCE($9, notes),
            image_url = COALESCE($10, image_url),
            category_id = COALESCE($11, category_id),
            updated_at = NOW()
        WHERE id = $1 AND user_id = $2
        "#,
    )
    .bind(workout_id)
    .bind(user_id)
    .bind(update.exercise_name.as_deref())
    .bind(update.weight_used)
    .bind(update.reps)
    .bind(update.sets)
    .bind(update.workout_duration_minutes)
    .bind(update.date)
    .bind(update.notes.as_deref())
    .bind(update.image_url.as_deref())
    .bind(update.category_id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Ok(None);
    }

    get_workout(pool, user_id, workout_id).await
}

pub async fn delete_workout(
    pool: &PgPool,
    user_id: Uuid,
    workout_id: Uuid,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        DELETE FROM workouts
        WHERE id = $1 AND user_id = $2
        "#,
    )
    .bind(workout_id)
    .bind(user_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

/// The rows the weekly calculator aggregates: a bounded seven-day window
/// starting on `week_start`, with category name and MET coefficient joined in.
pub async fn fetch_week_workouts(
    pool: &PgPool,
    user_id: Uuid,
    week_start: NaiveDate,
) -> Result<Vec<WeeklyWorkoutRow>, sqlx::Error> {
    sqlx::query_as::<_, WeeklyWorkoutRow>(
        r#"
        SELECT
            w.weight_used, w.reps, w.sets, w.workout_duration_minutes,
            c.name AS category_name, c.met_value
        FROM workouts w
        LEFT JOIN categories c ON c.id = w.category_id
        WHERE w.user_id = $1
            AND w.date >= $2
            AND w.date < $2 + INTERVAL '7 days'
        "#,
    )
    .bind(user_id)
    .bind(week_start)
    .fetch_all(pool)
    .await
}
