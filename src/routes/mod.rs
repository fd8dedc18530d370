use actix_web::web;

pub mod analytics;
pub mod auth;
pub mod backend_health;
pub mod categories;
pub mod profile;
pub mod registration;
pub mod workouts;

use crate::middleware::auth::AuthMiddleware;

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(registration::register)
        .service(backend_health::backend_health)
        .service(auth::login);

    // Profile routes (require authentication)
    cfg.service(
        web::scope("/profile")
            .wrap(AuthMiddleware)
            .service(profile::get_profile)
            .service(profile::update_profile)
    );
    // Category routes (require authentication)
    cfg.service(
        web::scope("/categories")
            .wrap(AuthMiddleware)
            .service(categories::list_categories)
            .service(categories::create_category)
            .service(categories::get_category)
            .service(categories::update_category)
            .service(categories::delete_category)
    );
    // Workout routes (require authentication). The analytics route is
    // registered before the {id} routes so it is not captured as an id.
    cfg.service(
        web::scope("/workouts")
            .wrap(AuthMiddleware)
            .service(analytics::generate_analytics)
            .service(workouts::list_workouts)
            .service(workouts::create_workout)
            .service(workouts::get_workout)
            .service(workouts::update_workout)
            .service(workouts::delete_workout)
    );
}
