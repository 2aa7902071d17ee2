//! IPMint API Server
//!
//! Backend for the creator IP-registration dashboard: engagement scoring,
//! AI-assisted license generation with a deterministic fallback, and the
//! asset/license registry. Uses hexagonal (ports & adapters) architecture
//! for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    routing::{get, post, put},
    Json, Router,
};
use sea_orm::Database;
use serde::Serialize;
use tower_governor::governor::GovernorConfigBuilder;
use tower_governor::key_extractor::PeerIpKeyExtractor;
use tower_governor::GovernorLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod entity;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::{
    OpenAiClient, PostgresAssetRepository, PostgresLicenseRepository, SimulatedMetricsProvider,
};
use app::{AssetService, LicenseService, SnapshotService};
use config::Config;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub asset_service: Arc<AssetService<PostgresAssetRepository, PostgresLicenseRepository>>,
    pub license_service: Arc<LicenseService<OpenAiClient>>,
    pub snapshot_service: Arc<SnapshotService<SimulatedMetricsProvider>>,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,ipmint_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting IPMint API...");

    // Load configuration
    let config = Config::from_env();

    // Connect to PostgreSQL
    tracing::info!("Connecting to database...");
    let db = Database::connect(&config.database_url)
        .await
        .expect("Failed to connect to database");
    tracing::info!("Database connected");

    // Create adapters
    let asset_repo = Arc::new(PostgresAssetRepository::new(db.clone()));
    let license_repo = Arc::new(PostgresLicenseRepository::new(db.clone()));
    let metrics_provider = Arc::new(SimulatedMetricsProvider::new());

    let llm_client = Arc::new(OpenAiClient::new(
        config.openai_base_url.clone(),
        config.openai_api_key.clone(),
        config.openai_model.clone(),
    ));

    if !config.llm_enabled() {
        tracing::warn!(
            "OPENAI_API_KEY not set - license generation will always use the fallback terms"
        );
    }

    // Create application services
    let asset_service = Arc::new(AssetService::new(asset_repo.clone(), license_repo.clone()));
    let license_service = Arc::new(LicenseService::new(llm_client.clone()));
    let snapshot_service = Arc::new(SnapshotService::new(metrics_provider.clone()));

    // Create app state
    let state = AppState {
        asset_service,
        license_service,
        snapshot_service,
    };

    // Rate limiting config for the LLM-backed endpoint: 1 req/sec sustained,
    // burst of 3. Uses PeerIpKeyExtractor to get client IP from the socket
    // connection (SmartIpKeyExtractor requires X-Forwarded-For headers from
    // a reverse proxy).
    let governor_config = Arc::new(
        GovernorConfigBuilder::default()
            .key_extractor(PeerIpKeyExtractor)
            .per_second(1)
            .burst_size(3)
            .finish()
            .expect("Failed to build governor config"),
    );

    // Rate-limited routes (completion API spend)
    let rate_limited_routes = Router::new()
        .route("/licenses/generate", post(handlers::post_generate))
        .layer(GovernorLayer {
            config: governor_config,
        });

    // Build router
    let app = Router::new()
        // Health check
        .route("/health", get(health))
        // Scoring
        .route("/score", post(handlers::post_score))
        .route("/score/tiers", get(handlers::get_score_tiers))
        // Social ingestion
        .route("/social/parse", post(handlers::post_parse))
        .route("/social/platforms", get(handlers::get_platforms))
        // Licensing
        .route("/licenses/questions", get(handlers::get_questions))
        .route("/licenses", get(handlers::list_licenses))
        // Assets
        .route("/assets", post(handlers::create_asset).get(handlers::list_assets))
        .route("/assets/:id", get(handlers::get_asset))
        .route("/assets/:id/score", post(handlers::score_asset))
        .route("/assets/:id/license", put(handlers::set_asset_license))
        .route(
            "/assets/:id/licenses",
            post(handlers::issue_license).get(handlers::list_asset_licenses),
        )
        // Merge rate-limited routes
        .merge(rate_limited_routes)
        // Middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .unwrap();
}
