pub mod analytics_handler;
pub mod auth_handler;
pub mod backend_health_handler;
pub mod category_handler;
pub mod profile_handler;
pub mod registration_handler;
pub mod workout_handler;
