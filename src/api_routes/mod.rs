//! JSON API the browser dashboard fetches from.
//!
//! Every route is a thin adapter over one engine operation: resolve the
//! query, call the pure function, serialize the result. No route holds
//! state or caches; determinism lives in the engine.

use axum::{
    extract::Query,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::catalog::BUILTIN;
use crate::metrics::MetricsEngine;
use crate::series::{capability, clip, frame_time, power, residency};

// --- Models ---

#[derive(Debug, Serialize)]
struct SkuResponse {
    id: String,
    name: String,
    topology: String,
    performance_cores: usize,
    efficiency_cores: usize,
    tdp: String,
}

#[derive(Debug, Serialize)]
struct ProgramResponse {
    id: String,
    name: String,
    color: String,
    skus: Vec<SkuResponse>,
}

#[derive(Debug, Serialize)]
struct GameResponse {
    id: u32,
    name: String,
    genre: String,
}

#[derive(Debug, Serialize)]
struct PerformanceIndexResponse {
    sku: String,
    build: String,
    index: f64,
}

#[derive(Debug, Serialize)]
struct ClipEventResponse {
    time_ms: u32,
    label: String,
}

#[derive(Debug, Deserialize)]
struct MetricsQuery {
    game_id: u32,
    sku: String,
    build: String,
}

#[derive(Debug, Deserialize)]
struct IndexQuery {
    sku: String,
    build: String,
}

#[derive(Debug, Deserialize)]
struct SeedQuery {
    seed: i64,
}

#[derive(Debug, Deserialize)]
struct SkuSeedQuery {
    sku: String,
    seed: i64,
}

// --- Handlers ---

async fn list_programs() -> Json<Vec<ProgramResponse>> {
    let programs = BUILTIN
        .programs
        .iter()
        .map(|p| ProgramResponse {
            id: p.id.to_string(),
            name: p.name.to_string(),
            color: p.color.to_string(),
            skus: p
                .skus
                .iter()
                .map(|s| SkuResponse {
                    id: s.id.to_string(),
                    name: s.name.to_string(),
                    topology: s.topology.to_string(),
                    performance_cores: s.topology.performance_cores,
                    efficiency_cores: s.topology.efficiency_cores,
                    tdp: s.tdp.to_string(),
                })
                .collect(),
        })
        .collect();

    Json(programs)
}

async fn list_games() -> Json<Vec<GameResponse>> {
    let games = BUILTIN
        .games
        .iter()
        .map(|g| GameResponse {
            id: g.id,
            name: g.name.to_string(),
            genre: g.genre.to_string(),
        })
        .collect();

    Json(games)
}

async fn list_builds() -> Json<Vec<&'static str>> {
    Json(BUILTIN.builds.to_vec())
}

async fn game_metrics(Query(query): Query<MetricsQuery>) -> impl IntoResponse {
    let engine = MetricsEngine::default();
    Json(engine.game_metrics(query.game_id, &query.sku, &query.build))
}

async fn performance_index(Query(query): Query<IndexQuery>) -> Json<PerformanceIndexResponse> {
    let engine = MetricsEngine::default();
    let index = engine.performance_index(&query.sku, &query.build);
    Json(PerformanceIndexResponse {
        sku: query.sku,
        build: query.build,
        index,
    })
}

async fn build_trend(Query(query): Query<MetricsQuery>) -> impl IntoResponse {
    let engine = MetricsEngine::default();
    Json(engine.build_trend(query.game_id, &query.sku, &query.build))
}

async fn frame_time_series(Query(query): Query<SeedQuery>) -> impl IntoResponse {
    Json(frame_time::series(query.seed))
}

async fn core_frequency_series(Query(query): Query<SkuSeedQuery>) -> impl IntoResponse {
    let engine = MetricsEngine::default();
    Json(engine.core_frequency_series(&query.sku, query.seed))
}

async fn core_temperature_series(Query(query): Query<SkuSeedQuery>) -> impl IntoResponse {
    let engine = MetricsEngine::default();
    Json(engine.core_temperature_series(&query.sku, query.seed))
}

async fn residency_series(Query(query): Query<SeedQuery>) -> impl IntoResponse {
    Json(residency::series(query.seed))
}

async fn capability_series(Query(query): Query<SeedQuery>) -> impl IntoResponse {
    Json(capability::series(query.seed))
}

async fn clip_reason_series(Query(query): Query<SeedQuery>) -> Json<Vec<ClipEventResponse>> {
    let events = clip::series(query.seed)
        .iter()
        .map(|e| ClipEventResponse {
            time_ms: e.time_ms,
            label: e.label(),
        })
        .collect();

    Json(events)
}

async fn power_series(Query(query): Query<SeedQuery>) -> impl IntoResponse {
    Json(power::series(query.seed))
}

/// The dashboard API router.
pub fn api_routes() -> Router {
    Router::new()
        .route("/api/catalog/programs", get(list_programs))
        .route("/api/catalog/games", get(list_games))
        .route("/api/catalog/builds", get(list_builds))
        .route("/api/metrics/snapshot", get(game_metrics))
        .route("/api/metrics/index", get(performance_index))
        .route("/api/metrics/trend", get(build_trend))
        .route("/api/series/frame-times", get(frame_time_series))
        .route("/api/series/core-frequency", get(core_frequency_series))
        .route("/api/series/core-temperature", get(core_temperature_series))
        .route("/api/series/residency", get(residency_series))
        .route("/api/series/capability", get(capability_series))
        .route("/api/series/clip-reasons", get(clip_reason_series))
        .route("/api/series/power", get(power_series))
}

#[cfg(test)]
mod tests {
    use super::api_routes;
    use axum::Router;
    use serde_json::Value;
    use std::net::SocketAddr;

    async fn spawn_server(app: Router) -> (SocketAddr, tokio::task::JoinHandle<()>) {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        (addr, handle)
    }

    #[tokio::test]
    async fn catalog_routes_list_reference_data() {
        let (addr, handle) = spawn_server(api_routes()).await;
        let client = reqwest::Client::new();

        let games: Value = client
            .get(format!("http://{addr}/api/catalog/games"))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(games.as_array().unwrap().len(), 12);
        assert_eq!(games[0]["name"], "Cyberpunk 2077");

        let programs: Value = client
            .get(format!("http://{addr}/api/catalog/programs"))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(programs[0]["skus"][0]["id"], "arl-s");
        assert_eq!(programs[0]["skus"][0]["topology"], "24C/24T");

        handle.abort();
    }

    #[tokio::test]
    async fn snapshot_route_is_deterministic() {
        let (addr, handle) = spawn_server(api_routes()).await;
        let client = reqwest::Client::new();
        let url =
            format!("http://{addr}/api/metrics/snapshot?game_id=1&sku=arl-s&build=2025.48");

        let first: Value = client.get(&url).send().await.unwrap().json().await.unwrap();
        let second: Value = client.get(&url).send().await.unwrap().json().await.unwrap();
        assert_eq!(first, second);
        assert!(first["avg_fps"].as_f64().unwrap() > 0.0);

        handle.abort();
    }

    #[tokio::test]
    async fn frame_time_route_returns_full_series() {
        let (addr, handle) = spawn_server(api_routes()).await;

        let series: Value = reqwest::Client::new()
            .get(format!("http://{addr}/api/series/frame-times?seed=10748"))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(series.as_array().unwrap().len(), 500);
        assert!(series[0]["fps"].as_f64().is_some());

        handle.abort();
    }

    #[tokio::test]
    async fn unknown_sku_still_renders_a_series() {
        let (addr, handle) = spawn_server(api_routes()).await;

        let series: Value = reqwest::Client::new()
            .get(format!("http://{addr}/api/series/core-frequency?sku=nope&seed=1"))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        let p = series["performance_cores"].as_u64().unwrap();
        let e = series["efficiency_cores"].as_u64().unwrap();
        assert_eq!(p + e, 8);

        handle.abort();
    }

    #[tokio::test]
    async fn index_route_orders_skus_by_tier() {
        let (addr, handle) = spawn_server(api_routes()).await;
        let client = reqwest::Client::new();

        let desktop: Value = client
            .get(format!("http://{addr}/api/metrics/index?sku=arl-s&build=2025.48"))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        let mobile: Value = client
            .get(format!("http://{addr}/api/metrics/index?sku=ptl-u&build=2025.48"))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();

        assert!(desktop["index"].as_f64().unwrap() > mobile["index"].as_f64().unwrap());

        handle.abort();
    }
}
