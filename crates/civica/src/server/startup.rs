//! REST server startup and configuration

use anyhow::Result;
use axum::serve;
use std::{net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::server::routing::create_router;
use crate::server::AppState;
use crate::store::Store;

/// Start the REST server against the given store
pub async fn start_server(addr: SocketAddr, store: Store) -> Result<()> {
  tracing::info!(%addr, "starting civica REST server");

  let state = Arc::new(AppState { store });
  let app = create_router(state)
    .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()).layer(CorsLayer::permissive()));

  let listener = TcpListener::bind(addr).await?;
  tracing::info!(%addr, "server listening");

  serve(listener, app).await.map_err(|e| anyhow::anyhow!("Server error: {}", e))
}
