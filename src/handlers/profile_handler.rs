use actix_web::{web, HttpResponse};
use chrono::Utc;
use serde_json::json;
use sqlx::PgPool;

use crate::db::users::{get_profile, update_profile};
use crate::handlers::registration_handler::validate_profile_bounds;
use crate::middleware::auth::Claims;
use crate::models::user::UpdateProfileRequest;

#[tracing::instrument(
    name = "Get user profile",
    skip(pool, claims),
    fields(username = %claims.username)
)]
pub async fn get_user_profile(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>
) -> HttpResponse {
    let user_id = match claims.user_id() {
        Some(id) => id,
        None => {
            tracing::error!("Failed to parse user ID from token claims");
            return HttpResponse::BadRequest().json(json!({
                "error": "Invalid user ID"
            }));
        }
    };

    match get_profile(&pool, user_id).await {
        Ok(Some(profile)) => HttpResponse::Ok().json(json!({
            "success": true,
            "data": profile.with_age(Utc::now().date_naive())
        })),
        Ok(None) => HttpResponse::NotFound().json(json!({
            "error": "Profile not found"
        })),
        Err(e) => {
            tracing::error!("Database error fetching profile: {}", e);
            HttpResponse::InternalServerError().json(json!({
                "error": "Failed to fetch profile"
            }))
        }
    }
}

#[tracing::instrument(
    name = "Update user profile",
    skip(pool, claims, profile_data),
    fields(username = %claims.username)
)]
pub async fn update_user_profile(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    profile_data: web::Json<UpdateProfileRequest>
) -> HttpResponse {
    let user_id = match claims.user_id() {
        Some(id) => id,
        None => {
            tracing::error!("Failed to parse user ID from token claims");
            return HttpResponse::BadRequest().json(json!({
                "error": "Invalid user ID"
            }));
        }
    };

    if let Err(message) = validate_profile_bounds(profile_data.height_cm, profile_data.weight_kg) {
        return HttpResponse::BadRequest().json(json!({ "error": message }));
    }

    match update_profile(&pool, user_id, &profile_data).await {
        Ok(true) => {
            // Fetch and return the updated profile
            match get_profile(&pool, user_id).await {
                Ok(Some(profile)) => HttpResponse::Ok().json(json!({
                    "success": true,
                    "data": profile.with_age(Utc::now().date_naive()),
                    "message": "Profile updated successfully"
                })),
                Ok(None) => HttpResponse::NotFound().json(json!({
                    "error": "Profile not found"
                })),
                Err(e) => {
                    tracing::error!("Failed to fetch updated profile: {}", e);
                    HttpResponse::InternalServerError().json(json!({
                        "error": "Profile updated but failed to retrieve updated data"
                    }))
                }
            }
        }
        Ok(false) => HttpResponse::NotFound().json(json!({
            "error": "Profile not found"
        })),
        Err(e) => {
            tracing::error!("Database error updating profile: {}", e);
            HttpResponse::InternalServerError().json(json!({
                "error": "Failed to update profile"
            }))
        }
    }
}
