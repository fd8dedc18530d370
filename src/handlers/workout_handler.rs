use actix_web::{web, HttpResponse};
use serde_json::json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::workouts;
use crate::middleware::auth::Claims;
use crate::models::workout::{CreateWorkoutRequest, UpdateWorkoutRequest, WorkoutListQuery};

fn parse_user_id(claims: &Claims) -> Result<Uuid, HttpResponse> {
    claims.user_id().ok_or_else(|| {
        tracing::error!("Failed to parse user ID from token claims");
        HttpResponse::BadRequest().json(json!({
            "error": "Invalid user ID"
        }))
    })
}

#[tracing::instrument(
    name = "Create workout",
    skip(pool, claims, workout_data),
    fields(username = %claims.username, exercise_name = %workout_data.exercise_name)
)]
pub async fn create_workout(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    workout_data: web::Json<CreateWorkoutRequest>,
) -> HttpResponse {
    let user_id = match parse_user_id(&claims) {
        Ok(id) => id,
        Err(response) => return response,
    };

    if workout_data.exercise_name.trim().is_empty() {
        return HttpResponse::BadRequest().json(json!({
            "error": "Exercise name must not be empty"
        }));
    }
    if workout_data.workout_duration_minutes < 0 {
        return HttpResponse::BadRequest().json(json!({
            "error": "Workout duration must not be negative"
        }));
    }

    match workouts::insert_workout(&pool, user_id, &workout_data).await {
        Ok(workout) => HttpResponse::Ok().json(json!({
            "success": true,
            "data": workout
        })),
        Err(sqlx::Error::Database(e)) if e.is_foreign_key_violation() => {
            HttpResponse::BadRequest().json(json!({
                "error": "Unknown category"
            }))
        }
        Err(e) => {
            tracing::error!("Database error creating workout: {}", e);
            HttpResponse::InternalServerError().json(json!({
                "error": "Failed to create workout"
            }))
        }
    }
}

#[tracing::instrument(
    name = "List workouts",
    skip(pool, claims, query),
    fields(username = %claims.username)
)]
pub async fn list_workouts(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    query: web::Query<WorkoutListQuery>,
) -> HttpResponse {
    let user_id = match parse_user_id(&claims) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match workouts::list_workouts(&pool, user_id, &query).await {
        Ok(list) => HttpResponse::Ok().json(json!({
            "success": true,
            "count": list.len(),
            "data": list
        })),
        Err(e) => {
            tracing::error!("Database error listing workouts: {}", e);
            HttpResponse::InternalServerError().json(json!({
                "error": "Failed to list workouts"
            }))
        }
    }
}

#[tracing::instrument(
    name = "Get workout",
    skip(pool, claims),
    fields(username = %claims.username)
)]
pub async fn get_workout(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    path: web::Path<Uuid>,
) -> HttpResponse {
    let user_id = match parse_user_id(&claims) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match workouts::get_workout(&pool, user_id, path.into_inner()).await {
        Ok(Some(workout)) => HttpResponse::Ok().json(json!({
            "success": true,
            "data": workout
        })),
        Ok(None) => HttpResponse::NotFound().json(json!({
            "error": "Workout not found"
        })),
        Err(e) => {
            tracing::error!("Database error fetching workout: {}", e);
            HttpResponse::InternalServerError().json(json!({
                "error": "Failed to fetch workout"
            }))
        }
    }
}

#[tracing::instrument(
    name = "Update workout",
    skip(pool, claims, workout_data),
    fields(username = %claims.username)
)]
pub async fn update_workout(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    path: web::Path<Uuid>,
    workout_data: web::Json<UpdateWorkoutRequest>,
) -> HttpResponse {
    let user_id = match parse_user_id(&claims) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match workouts::update_workout(&pool, user_id, path.into_inner(), &workout_data).await {
        Ok(Some(workout)) => HttpResponse::Ok().json(json!({
            "success": true,
            "data": workout,
            "message": "Workout updated successfully"
        })),
        Ok(None) => HttpResponse::NotFound().json(json!({
            "error": "Workout not found"
        })),
        Err(sqlx::Error::Database(e)) if e.is_foreign_key_violation() => {
            HttpResponse::BadRequest().json(json!({
                "error": "Unknown category"
            }))
        }
        Err(e) => {
            tracing::error!("Database error updating workout: {}", e);
            HttpResponse::InternalServerError().json(json!({
                "error": "Failed to update workout"
            }))
        }
    }
}

#[tracing::instrument(
    name = "Delete workout",
    skip(pool, claims),
    fields(username = %claims.username)
)]
pub async fn delete_workout(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    path: web::Path<Uuid>,
) -> HttpResponse {
    let user_id = match parse_user_id(&claims) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match workouts::delete_workout(&pool, user_id, path.into_inner()).await {
        Ok(true) => HttpResponse::Ok().json(json!({
            "success": true,
            "message": "Workout deleted"
        })),
        Ok(false) => HttpResponse::NotFound().json(json!({
            "error": "Workout not found"
        })),
        Err(e) => {
            tracing::error!("Database error deleting workout: {}", e);
            HttpResponse::InternalServerError().json(json!({
                "error": "Failed to delete workout"
            }))
        }
    }
}
