use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A semantic workout class ("Strength Training", "Cardiovascular Training", ...)
/// carrying the MET coefficient used for calorie estimation.
#[derive(Debug, sqlx::FromRow, Serialize)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub met_value: f64,
    pub created_at: DateTime<Utc>,
}

#[derive(Deserialize)]
pub struct CreateCategoryRequest {
    pub name: String,
    pub met_value: f64,
}

#[derive(Deserialize)]
pub struct UpdateCategoryRequest {
    pub name: Option<String>,
    pub met_value: Option<f64>,
}
