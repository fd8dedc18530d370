use actix_web::{web, HttpResponse};
use secrecy::ExposeSecret;
use serde_json::json;
use sqlx::PgPool;

use crate::db::users::insert_user;
use crate::models::user::RegistrationRequest;
use crate::utils::password::hash_password;

#[tracing::instrument(
    name = "Adding a new user",
    // Don't show arguments
    skip(user_form, pool),
    fields(
        username = %user_form.username,
        email = %user_form
    )
)]
pub async fn register_user(
    user_form: web::Json<RegistrationRequest>,
    pool: web::Data<PgPool>
) -> HttpResponse {
    if let Err(message) = validate_profile_bounds(user_form.height_cm, user_form.weight_kg) {
        return HttpResponse::BadRequest().json(json!({ "error": message }));
    }

    let password_hash = hash_password(user_form.password.expose_secret());

    match insert_user(&pool, &user_form, &password_hash).await {
        Ok(user_id) => HttpResponse::Ok().json(json!({
            "success": true,
            "data": { "id": user_id }
        })),
        Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
            tracing::info!("Registration rejected, username or email already taken");
            HttpResponse::BadRequest().json(json!({
                "error": "Username or email already in use"
            }))
        }
        Err(e) => {
            tracing::error!("Failed to insert user: {:?}", e);
            HttpResponse::InternalServerError().finish()
        }
    }
}

pub fn validate_profile_bounds(
    height_cm: Option<f64>,
    weight_kg: Option<f64>,
) -> Result<(), &'static str> {
    if let Some(height) = height_cm {
        if !(50.0..=300.0).contains(&height) {
            return Err("Height must be between 50 and 300 cm");
        }
    }
    if let Some(weight) = weight_kg {
        if !(20.0..=500.0).contains(&weight) {
            return Err("Weight must be between 20 and 500 kg");
        }
    }
    Ok(())
}
