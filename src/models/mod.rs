pub mod analytics;
pub mod auth;
pub mod category;
pub mod user;
pub mod workout;
