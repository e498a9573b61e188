use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use gil_contract::command::{INVOKE_FUNCTIONS, QUERY_FUNCTIONS};
use gil_contract::{GoodsInspectionContract, Invocation};
use gil_store::KvStore;
use serde_json::json;

use crate::error::ServerResult;

/// Health check handler.
pub async fn health_handler() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

/// Info handler.
pub async fn info_handler() -> Json<serde_json::Value> {
    Json(json!({
        "name": "gil-server",
        "version": env!("CARGO_PKG_VERSION"),
        "invoke": INVOKE_FUNCTIONS,
        "query": QUERY_FUNCTIONS,
    }))
}

/// Invoke entry point. Responds `204 No Content` on success.
///
/// The body is an [`Invocation`]; the route picks the entry point, so its
/// `entry` field is not consulted.
pub async fn invoke_handler<S: KvStore + 'static>(
    State(contract): State<Arc<GoodsInspectionContract<S>>>,
    Json(request): Json<Invocation>,
) -> ServerResult<StatusCode> {
    contract.invoke(&request.function, request.args.as_slice())?;
    Ok(StatusCode::NO_CONTENT)
}

/// Query entry point. Responds with the stored record bytes verbatim.
pub async fn query_handler<S: KvStore + 'static>(
    State(contract): State<Arc<GoodsInspectionContract<S>>>,
    Json(request): Json<Invocation>,
) -> ServerResult<Response> {
    let bytes = contract.query(&request.function, request.args.as_slice())?;
    Ok(([(header::CONTENT_TYPE, "application/json")], bytes).into_response())
}
