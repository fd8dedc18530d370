pub mod analytics;
pub mod categories;
pub mod users;
pub mod workouts;
