// Server module - router assembly and the listening loop used by main.rs

use axum::http::HeaderValue;
use axum::Router;
use std::net::SocketAddr;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api;
use crate::api_docs::ApiDoc;
use crate::config::{Config, CorsPolicy};
use crate::db;
use crate::infrastructure::AppState;

/// Translate the configured policy into a CORS layer
pub fn cors_layer(policy: &CorsPolicy) -> CorsLayer {
    let origin = match policy {
        // Mirroring the request origin is how "*" is expressed together with
        // credentials; a literal wildcard is rejected by browsers in that case.
        CorsPolicy::AllowAll => AllowOrigin::mirror_request(),
        CorsPolicy::Origins(origins) => {
            let mut allowed = Vec::new();
            for origin in origins {
                match origin.parse::<HeaderValue>() {
                    Ok(v) => allowed.push(v),
                    Err(e) => tracing::error!("Failed to parse CORS origin '{}': {}", origin, e),
                }
            }
            AllowOrigin::list(allowed)
        }
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

/// Build the full application router
pub fn build_router(state: AppState, cors: &CorsPolicy) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(api::api_router(state))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(cors))
}

/// Initialise the store, bind the listener and serve until Ctrl-C
pub async fn run(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    // Store must be ready before any traffic is accepted
    let db = db::init_db(&config.database_url).await?;
    tracing::info!("Interaction log opened at {}", config.database_url);

    if config.cors == CorsPolicy::AllowAll {
        tracing::warn!("CORS policy is allow-all (any origin, credentials allowed)");
    }

    let state = AppState::new(db, &config);
    let app = build_router(state, &config.cors);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| format!("Failed to bind to {}: {}", addr, e))?;

    tracing::info!("qna-relay listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    tracing::info!("Shutdown signal received");
}
