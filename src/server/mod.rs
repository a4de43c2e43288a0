//! Dashboard API server bootstrap.

use axum::{response::IntoResponse, routing::get, Json, Router};
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::api_routes;

/// Start the JSON API server and block until it exits.
pub async fn start_server(bind: &str, port: u16) -> anyhow::Result<()> {
    let app = Router::new()
        .merge(api_routes::api_routes())
        .route("/", get(index_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("{bind}:{port}").parse()?;
    tracing::info!("Dashboard API listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// The dashboard frontend is served separately; the root just lists what
/// this API offers.
async fn index_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "name": "telemetry-lab",
        "endpoints": [
            "/api/catalog/programs",
            "/api/catalog/games",
            "/api/catalog/builds",
            "/api/metrics/snapshot?game_id=&sku=&build=",
            "/api/metrics/index?sku=&build=",
            "/api/metrics/trend?game_id=&sku=&build=",
            "/api/series/frame-times?seed=",
            "/api/series/core-frequency?sku=&seed=",
            "/api/series/core-temperature?sku=&seed=",
            "/api/series/residency?seed=",
            "/api/series/capability?seed=",
            "/api/series/clip-reasons?seed=",
            "/api/series/power?seed=",
        ],
    }))
}
