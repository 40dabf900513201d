//! 应用层：路由与处理器

pub mod health;
pub mod product;

use axum::{middleware, routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::core::middleware::request_logging_middleware;
use product::handler::AppState;

/// 组装完整的应用路由
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(product::routes())
        .route("/health", get(health::health_check))
        .layer(middleware::from_fn(request_logging_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
