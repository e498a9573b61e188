use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use gil_contract::GoodsInspectionContract;
use gil_store::KvStore;
use tower_http::trace::TraceLayer;

use crate::handler;

/// Build the axum router with all GIL endpoints.
pub fn build_router<S: KvStore + 'static>(
    contract: Arc<GoodsInspectionContract<S>>,
    max_body_bytes: usize,
) -> Router {
    Router::new()
        .route("/v1/health", get(handler::health_handler))
        .route("/v1/info", get(handler::info_handler))
        .route("/v1/invoke", post(handler::invoke_handler::<S>))
        .route("/v1/query", post(handler::query_handler::<S>))
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(contract)
}
