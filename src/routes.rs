use actix_web::web;

use crate::errors::{not_found, see_other};
use crate::handlers;

/// Route table, shared by `main` and the integration tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        // Static files
        .service(actix_files::Files::new("/static", "./static"))
        .route("/", web::get().to(|| async { see_other("/counters") }))
        // Counters
        .route("/counters", web::get().to(handlers::counter_handlers::list))
        // Customer service overview
        .route("/dashboard", web::get().to(handlers::dashboard::index))
        // Users: /users/trashed BEFORE /users/{id}/...
        .route("/users/trashed", web::get().to(handlers::user_handlers::trashed))
        .route("/users/{id}/loket", web::get().to(handlers::user_handlers::loket_form))
        .route("/users/{id}/loket", web::post().to(handlers::user_handlers::assign))
        .route("/users/{id}/role", web::post().to(handlers::user_handlers::change_role))
        .route("/users/{id}/delete", web::post().to(handlers::user_handlers::delete))
        .route("/users/{id}/restore", web::post().to(handlers::user_handlers::restore))
        .route("/users/{id}/force-delete", web::post().to(handlers::user_handlers::force_delete))
        // API token held in the session
        .route("/token", web::get().to(handlers::token_handlers::form))
        .route("/token", web::post().to(handlers::token_handlers::save))
        .route("/token/clear", web::post().to(handlers::token_handlers::clear))
        // Default 404 handler (must be registered last)
        .default_service(web::to(|| async { not_found() }));
}
