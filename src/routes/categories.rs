use actix_web::{delete, get, post, put, web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

use crate::handlers::category_handler;
use crate::middleware::auth::Claims;
use crate::models::category::{CreateCategoryRequest, UpdateCategoryRequest};

#[get("")]
async fn list_categories(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> HttpResponse {
    category_handler::list_categories(pool, claims).await
}

#[post("")]
async fn create_category(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    category_data: web::Json<CreateCategoryRequest>,
) -> HttpResponse {
    category_handler::create_category(pool, claims, category_data).await
}

#[get("/{id}")]
async fn get_category(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    path: web::Path<Uuid>,
) -> HttpResponse {
    category_handler::get_category(pool, claims, path).await
}

#[put("/{id}")]
async fn update_category(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    path: web::Path<Uuid>,
    category_data: web::Json<UpdateCategoryRequest>,
) -> HttpResponse {
    category_handler::update_category(pool, claims, path, category_data).await
}

#[delete("/{id}")]
async fn delete_category(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    path: web::Path<Uuid>,
) -> HttpResponse {
    category_handler::delete_category(pool, claims, path).await
}
