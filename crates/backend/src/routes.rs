use axum::{http::header, http::Method, middleware, routing::get, Router};
use tower_http::cors::{Any, CorsLayer};

use crate::domain::a001_product::repository::ProductRepository;
use crate::handlers;
use crate::system::middleware::request_logger::request_logger;

/// All routes of the products service
pub fn configure_routes(repo: ProductRepository) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route(
            "/products",
            get(handlers::a001_product::list_all).post(handlers::a001_product::create),
        )
        .route(
            "/products/:id",
            get(handlers::a001_product::get_by_id).delete(handlers::a001_product::delete),
        )
        .with_state(repo)
        .layer(middleware::from_fn(request_logger))
        .layer(cors)
}
