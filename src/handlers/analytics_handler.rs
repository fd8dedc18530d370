// src/handlers/analytics_handler.rs
use actix_web::{web, HttpResponse};
use chrono::Utc;
use serde_json::json;
use sqlx::PgPool;

use crate::analytics::calculator::{compute_weekly_metrics, week_start_for, DEFAULT_BODYWEIGHT_KG};
use crate::db::analytics::upsert_weekly_analytics;
use crate::db::users::get_user_weight;
use crate::db::workouts::fetch_week_workouts;
use crate::middleware::auth::Claims;

/// Compute and persist the authenticated user's analytics for the current
/// week, then return the stored record.
///
/// Read-aggregate-write: the preceding reads are plain queries, the write is a
/// single atomic upsert keyed on (user, week_start_date). An empty week stores
/// a zeroed record so recomputation stays deterministic.
#[tracing::instrument(
    name = "Generate weekly analytics",
    skip(pool, claims),
    fields(username = %claims.username)
)]
pub async fn generate_weekly_analytics(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
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

    let week_start = week_start_for(Utc::now().date_naive());

    let bodyweight_kg = match get_user_weight(&pool, user_id).await {
        Ok(weight) => weight.unwrap_or(DEFAULT_BODYWEIGHT_KG),
        Err(e) => {
            tracing::error!("Database error fetching user weight: {}", e);
            return HttpResponse::InternalServerError().json(json!({
                "error": "Failed to compute analytics"
            }));
        }
    };

    let week_workouts = match fetch_week_workouts(&pool, user_id, week_start).await {
        Ok(rows) => rows,
        Err(e) => {
            tracing::error!("Database error fetching weekly workouts: {}", e);
            return HttpResponse::InternalServerError().json(json!({
                "error": "Failed to compute analytics"
            }));
        }
    };

    let metrics = compute_weekly_metrics(week_start, &week_workouts, bodyweight_kg);

    tracing::info!(
        week_start = %week_start,
        workout_count = week_workouts.len(),
        total_volume = metrics.total_volume,
        "Computed weekly analytics"
    );

    match upsert_weekly_analytics(&pool, user_id, &metrics).await {
        Ok(analytics) => {
            let message = if week_workouts.is_empty() {
                "No workouts recorded this week"
            } else {
                "Weekly analytics updated"
            };
            HttpResponse::Ok().json(json!({
                "success": true,
                "data": analytics,
                "message": message
            }))
        }
        Err(e) => {
            tracing::error!("Database error storing weekly analytics: {}", e);
            HttpResponse::InternalServerError().json(json!({
                "error": "Failed to store analytics"
            }))
        }
    }
}
