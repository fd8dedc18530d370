use actix_web::{get, web, HttpResponse};
use sqlx::PgPool;

use crate::handlers::analytics_handler::generate_weekly_analytics;
use crate::middleware::auth::Claims;

#[get("/analytics")]
async fn generate_analytics(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> HttpResponse {
    generate_weekly_analytics(pool, claims).await
}
