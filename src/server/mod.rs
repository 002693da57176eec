pub mod handlers;
pub mod types;

use crate::{
    Error, Result,
    config::{Config, ServerConfig},
    llm::GeminiClient,
    proxy::GenerationProxy,
};
use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method, header},
    routing::post,
};
use handlers::AppState;
use std::{net::SocketAddr, sync::Arc};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

/// Builds the application router around an already-constructed proxy.
pub fn router(server: &ServerConfig, proxy: GenerationProxy) -> Result<Router> {
    if !server.route.starts_with('/') {
        return Err(Error::config(format!(
            "Route must start with '/': {}",
            server.route
        )));
    }

    let origins = server
        .cors_origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin)
                .map_err(|e| Error::config(format!("Invalid CORS origin '{}': {}", origin, e)))
        })
        .collect::<Result<Vec<_>>>()?;

    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    Ok(Router::new()
        .route(&server.route, post(handlers::generate))
        .layer(DefaultBodyLimit::max(server.max_body_bytes))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(AppState { proxy }))
}

pub async fn run(config: Config) -> Result<()> {
    let backend = GeminiClient::new(config.llm.clone())?;
    info!("Using model {}", backend.model());

    let proxy = GenerationProxy::new(Arc::new(backend));
    let app = router(&config.server, proxy)?;

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {} (route {})", addr, config.server.route);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
