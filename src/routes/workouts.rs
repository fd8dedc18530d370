use actix_web::{delete, get, post, put, web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

use crate::handlers::workout_handler;
use crate::middleware::auth::Claims;
use crate::models::workout::{CreateWorkoutRequest, UpdateWorkoutRequest, WorkoutListQuery};

#[get("")]
async fn list_workouts(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    query: web::Query<WorkoutListQuery>,
) -> HttpResponse {
    workout_handler::list_workouts(pool, claims, query).await
}

#[post("")]
async fn create_workout(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    workout_data: web::Json<CreateWorkoutRequest>,
) -> HttpResponse {
    workout_handler::create_workout(pool, claims, workout_data).await
}

#[get("/{id}")]
async fn get_workout(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    path: web::Path<Uuid>,
) -> HttpResponse {
    workout_handler::get_workout(pool, claims, path).await
}

#[put("/{id}")]
async fn update_workout(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    path: web::Path<Uuid>,
    workout_data: web::Json<UpdateWorkoutRequest>,
) -> HttpResponse {
    workout_handler::update_workout(pool, claims, path, workout_data).await
}

#[delete("/{id}")]
async fn delete_workout(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    path: web::Path<Uuid>,
) -> HttpResponse {
    workout_handler::delete_workout(pool, claims, path).await
}
