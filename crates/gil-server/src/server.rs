use std::sync::Arc;

use gil_contract::GoodsInspectionContract;
use gil_store::{InMemoryKvStore, KvStore};
use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::router::build_router;

/// GIL development host.
pub struct GilServer<S = InMemoryKvStore> {
    config: ServerConfig,
    contract: Arc<GoodsInspectionContract<S>>,
}

impl GilServer<InMemoryKvStore> {
    /// A host over a fresh in-memory store.
    pub fn new(config: ServerConfig) -> ServerResult<Self> {
        Self::with_store(config, InMemoryKvStore::new())
    }
}

impl<S: KvStore + 'static> GilServer<S> {
    /// A host over `store`. Runs the contract's `init` hook.
    pub fn with_store(config: ServerConfig, store: S) -> ServerResult<Self> {
        let contract = GoodsInspectionContract::with_config(store, config.contract.clone());
        contract.init::<&str>(&[])?;
        Ok(Self {
            config,
            contract: Arc::new(contract),
        })
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    pub fn contract(&self) -> &GoodsInspectionContract<S> {
        &self.contract
    }

    /// Build the router (useful for testing).
    pub fn router(&self) -> axum::Router {
        build_router(Arc::clone(&self.contract), self.config.max_body_bytes)
    }

    /// Start serving requests.
    pub async fn serve(self) -> ServerResult<()> {
        let app = self.router();
        let listener = TcpListener::bind(&self.config.bind_addr).await?;
        tracing::info!("GIL server listening on {}", self.config.bind_addr);
        axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::Internal(e.to_string()))
    }
}
