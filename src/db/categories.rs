use sqlx::PgPool;
use uuid::Uuid;

use crate::models::category::{Category, CreateCategoryRequest, UpdateCategoryRequest};

pub async fn list_categories(pool: &PgPool) -> Result<Vec<Category>, sqlx::Error> {
    sqlx::query_as::<_, Category>(
        r#"
        SELECT id, name, met_value, created_at
        FROM categories
        ORDER BY name
        "#,
    )
    .fetch_all(pool)
    .await
}

pub async fn insert_category(
    pool: &PgPool,
    request: &CreateCategoryRequest,
) -> Result<Category, sqlx::Error> {
    sqlx::query_as::<_, Category>(
        r#"
        INSERT INTO categories (id, name, met_value)
        VALUES ($1, $2, $3)
        RETURNING id, name, met_value, created_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(&request.name)
    .bind(request.met_value)
    .fetch_one(pool)
    .await
}

pub async fn get_category(pool: &PgPool, id: Uuid) -> Result<Option<Category>, sqlx::Error> {
    sqlx::query_as::<_, Category>(
        r#"
        SELECT id, name, met_value, created_at
        FROM categories
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn update_category(
    pool: &PgPool,
    id: Uuid,
    update: &UpdateCategoryRequest,
) -> Result<Option<Category>, sqlx::Error> {
    sqlx::query_as::<_, Category>(
        r#"
        UPDATE categories
        SET
            name = COALESCE($2, name),
            met_value = COALESCE($3, met_value)
        WHERE id = $1
        RETURNING id, name, met_value, created_at
        "#,
    )
    .bind(id)
    .bind(update.name.as_deref())
    .bind(update.met_value)
    .fetch_optional(pool)
    .await
}

/// Dependent workouts keep their history: the FK is ON DELETE SET NULL.
pub async fn delete_category(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        DELETE FROM categories
        WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
