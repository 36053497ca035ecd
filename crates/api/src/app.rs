use axum::{middleware, routing::get, Router};
use sqlx::PgPool;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::config::Config;
use crate::middleware::trace_id;
use crate::routes::{self, health};

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: Arc<Config>,
}

pub fn create_app(config: Config, pool: PgPool) -> Router {
    let state = AppState {
        pool,
        config: Arc::new(config),
    };

    // CORS is wide open; every response carries the permissive headers.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // The catalog surface is classified by path shape rather than fixed
    // routes, so it hangs off the fallback; only health is explicit.
    Router::new()
        .route("/health", get(health::health_check))
        .fallback(routes::dispatch)
        // Global middleware (order matters: bottom layers run first)
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(trace_id))
        .layer(cors)
        .with_state(state)
}
