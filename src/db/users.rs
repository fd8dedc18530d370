use chrono::Utc;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::models::user::{ProfileResponse, RegistrationRequest, UpdateProfileRequest};

pub struct UserCredentials {
    pub id: Uuid,
    pub username: String,
    pub password_hash: String,
}

pub async fn insert_user(
    pool: &PgPool,
    request: &RegistrationRequest,
    password_hash: &str,
) -> Result<Uuid, sqlx::Error> {
    let user_id = Uuid::new_v4();
    let now = Utc::now();

    sqlx::query(
        r#"
        INSERT INTO users (
            id, username, email, password_hash,
            height_cm, weight_kg, date_of_birth, gender,
            created_at, updated_at
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
        "#,
    )
    .bind(user_id)
    .bind(&request.username)
    .bind(&request.email)
    .bind(password_hash)
    .bind(request.height_cm)
    .bind(request.weight_kg)
    .bind(request.date_of_birth)
    .bind(request.gender.as_deref())
    .bind(now)
    .bind(now)
    .execute(pool)
    .await?;

    Ok(user_id)
}

pub async fn find_credentials_by_email(
    pool: &PgPool,
    email: &str,
) -> Result<Option<UserCredentials>, sqlx::Error> {
    let row = sqlx::query(
        r#"
        SELECT id, username, password_hash
        FROM users
        WHERE email = $1
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|row| UserCredentials {
        id: row.get("id"),
        username: row.get("username"),
        password_hash: row.get("password_hash"),
    }))
}

pub async fn get_profile(
    pool: &PgPool,
    user_id: Uuid,
) -> Result<Option<ProfileResponse>, sqlx::Error> {
    sqlx::query_as::<_, ProfileResponse>(
        r#"
        SELECT id, username, email, height_cm, weight_kg, date_of_birth, gender
        FROM users
        WHERE id = $1
        "#,
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await
}

/// Enumerated field-by-field merge of the mutable profile attributes. A field
/// absent from the payload keeps its stored value.
pub async fn update_profile(
    pool: &PgPool,
    user_id: Uuid,
    update: &UpdateProfileRequest,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE users
        SET
            height_cm = COALESCE($2, height_cm),
            weight_kg = COALESCE($3, weight_kg),
            date_of_birth = COALESCE($4, date_of_birth),
            gender = COALESCE($5, gender),
            updated_at = NOW()
        WHERE id = $1
        "#,
    )
    .bind(user_id)
    .bind(update.height_cm)
    .bind(update.weight_kg)
    .bind(update.date_of_birth)
    .bind(update.gender.as_deref())
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

/// Body weight in kg for calorie estimation. None when the user has no weight
/// on file; the caller applies the fixed default.
pub async fn get_user_weight(pool: &PgPool, user_id: Uuid) -> Result<Option<f64>, sqlx::Error> {
    let row = sqlx::query(
        r#"
        SELECT weight_kg
        FROM users
        WHERE id = $1
        "#,
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    Ok(row.and_then(|row| row.get::<Option<f64>, _>("weight_kg")))
}
