use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

pub mod handlers;
pub mod state;

pub use state::AppState;

pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::permissive();

    Router::new()
        .route("/api/articles", get(handlers::current_page))
        .route("/api/articles/:id", get(handlers::article_details))
        .route("/api/search", post(handlers::set_search))
        .route("/api/category", post(handlers::set_category))
        .route("/api/year", post(handlers::set_year))
        .route("/api/page", post(handlers::navigate))
        .route("/api/stats", get(handlers::stats))
        .route("/api/export", get(handlers::export))
        .layer(cors)
        .with_state(Arc::new(state))
}

pub mod prelude {
    pub use ax_core::{Article, Error, Result};

    pub use crate::AppState;
}
