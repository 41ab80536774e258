//! HTTP handlers and route configuration.

mod comments;
mod health;
mod posts;

use actix_cors::Cors;
use actix_web::{http::header, web};

use crate::middleware::admin::AdminGate;
use crate::middleware::error::{json_error, path_error};

/// Largest JSON body accepted. Content itself has no length rule; this only
/// bounds what a single request may hold in memory.
pub const MAX_JSON_BYTES: usize = 16 * 1024 * 1024;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .limit(MAX_JSON_BYTES)
            .error_handler(json_error),
    )
        .app_data(web::PathConfig::default().error_handler(path_error))
        // Public routes
        .route("/health", web::get().to(health::health_check))
        .service(
            web::resource("/comments")
                .route(web::get().to(comments::list_comments))
                .route(web::post().to(comments::submit_comment)),
        )
        .route("/posts", web::get().to(posts::list_posts))
        .route("/posts/{id}", web::get().to(posts::get_post))
        // Admin routes
        .service(
            web::scope("/admin")
                .wrap(AdminGate)
                .route("/posts", web::post().to(posts::create_post))
                .service(
                    web::resource("/posts/{id}")
                        .route(web::put().to(posts::update_post))
                        .route(web::delete().to(posts::delete_post)),
                )
                .route("/comments/{id}", web::delete().to(comments::delete_comment)),
        );
}

/// Any origin may call the API with the verbs and headers the site uses.
pub fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![
            header::ORIGIN,
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
        ])
        .max_age(3600)
}
