use actix_web::{web, HttpResponse};
use serde_json::json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::categories;
use crate::middleware::auth::Claims;
use crate::models::category::{CreateCategoryRequest, UpdateCategoryRequest};

#[tracing::instrument(name = "List categories", skip(pool, claims), fields(username = %claims.username))]
pub async fn list_categories(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> HttpResponse {
    match categories::list_categories(&pool).await {
        Ok(list) => HttpResponse::Ok().json(json!({
            "success": true,
            "data": list
        })),
        Err(e) => {
            tracing::error!("Database error listing categories: {}", e);
            HttpResponse::InternalServerError().json(json!({
                "error": "Failed to list categories"
            }))
        }
    }
}

#[tracing::instrument(
    name = "Create category",
    skip(pool, claims, category_data),
    fields(username = %claims.username, category_name = %category_data.name)
)]
pub async fn create_category(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    category_data: web::Json<CreateCategoryRequest>,
) -> HttpResponse {
    if category_data.name.trim().is_empty() {
        return HttpResponse::BadRequest().json(json!({
            "error": "Category name must not be empty"
        }));
    }
    if category_data.met_value <= 0.0 {
        return HttpResponse::BadRequest().json(json!({
            "error": "MET value must be positive"
        }));
    }

    match categories::insert_category(&pool, &category_data).await {
        Ok(category) => HttpResponse::Ok().json(json!({
            "success": true,
            "data": category
        })),
        Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
            HttpResponse::BadRequest().json(json!({
                "error": "Category name already exists"
            }))
        }
        Err(e) => {
            tracing::error!("Database error creating category: {}", e);
            HttpResponse::InternalServerError().json(json!({
                "error": "Failed to create category"
            }))
        }
    }
}

#[tracing::instrument(name = "Get category", skip(pool, claims), fields(username = %claims.username))]
pub async fn get_category(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    path: web::Path<Uuid>,
) -> HttpResponse {
    match categories::get_category(&pool, path.into_inner()).await {
        Ok(Some(category)) => HttpResponse::Ok().json(json!({
            "success": true,
            "data": category
        })),
        Ok(None) => HttpResponse::NotFound().json(json!({
            "error": "Category not found"
        })),
        Err(e) => {
            tracing::error!("Database error fetching category: {}", e);
            HttpResponse::InternalServerError().json(json!({
                "error": "Failed to fetch category"
            }))
        }
    }
}

#[tracing::instrument(name = "Update category", skip(pool, claims, category_data), fields(username = %claims.username))]
pub async fn update_category(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    path: web::Path<Uuid>,
    category_data: web::Json<UpdateCategoryRequest>,
) -> HttpResponse {
    if let Some(met_value) = category_data.met_value {
        if met_value <= 0.0 {
            return HttpResponse::BadRequest().json(json!({
                "error": "MET value must be positive"
            }));
        }
    }

    match categories::update_category(&pool, path.into_inner(), &category_data).await {
        Ok(Some(category)) => HttpResponse::Ok().json(json!({
            "success": true,
            "data": category
        })),
        Ok(None) => HttpResponse::NotFound().json(json!({
            "error": "Category not found"
        })),
        Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
            HttpResponse::BadRequest().json(json!({
                "error": "Category name already exists"
            }))
        }
        Err(e) => {
            tracing::error!("Database error updating category: {}", e);
            HttpResponse::InternalServerError().json(json!({
                "error": "Failed to update category"
            }))
        }
    }
}

#[tracing::instrument(name = "Delete category", skip(pool, claims), fields(username = %claims.username))]
pub async fn delete_category(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    path: web::Path<Uuid>,
) -> HttpResponse {
    match categories::delete_category(&pool, path.into_inner()).await {
        Ok(true) => HttpResponse::Ok().json(json!({
            "success": true,
            "message": "Category deleted"
        })),
        Ok(false) => HttpResponse::NotFound().json(json!({
            "error": "Category not found"
        })),
        Err(e) => {
            tracing::error!("Database error deleting category: {}", e);
            HttpResponse::InternalServerError().json(json!({
                "error": "Failed to delete category"
            }))
        }
    }
}
