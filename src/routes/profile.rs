use actix_web::{get, put, web, HttpResponse};
use sqlx::PgPool;

use crate::handlers::profile_handler::{get_user_profile, update_user_profile};
use crate::middleware::auth::Claims;
use crate::models::user::UpdateProfileRequest;

#[get("")]
async fn get_profile(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> HttpResponse {
    get_user_profile(pool, claims).await
}

#[put("")]
async fn update_profile(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    profile_data: web::Json<UpdateProfileRequest>,
) -> HttpResponse {
    update_user_profile(pool, claims, profile_data).await
}
