use anyhow::{Context, Result};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

mod error;
mod generator;
mod jwt;
mod middleware;
mod models;
mod repositories;
mod routes;
mod seed;
mod state;
mod validation;

use common::AppConfig;

use crate::{
    generator::CannedResponseGenerator,
    jwt::{JwtConfig, JwtService},
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    common::logging::init();

    info!("Starting chat API service");

    let config = AppConfig::load()?;

    let jwt_service = JwtService::new(JwtConfig::from(&config.auth));
    info!("Issued tokens expire after {}s", jwt_service.token_expiry());
    let generator = Arc::new(CannedResponseGenerator::from_config(&config.generator));
    let app_state = AppState::new(jwt_service, generator);

    if config.seed_demo_data {
        seed::seed_demo_data(&app_state).await?;
    }

    info!("Chat API service initialized successfully");

    // Start the web server
    let app = routes::create_router(app_state)
        .layer(routes::cors_layer(&config.cors)?)
        .layer(TraceLayer::new_for_http());

    let address = config.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {address}"))?;

    info!("Chat API service listening on {}", address);
    for (method, path) in routes::ROUTES {
        info!("  {:<6} {}", method, path);
    }
    if config.seed_demo_data {
        info!("Demo login: user@example.com / password123");
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Chat API service stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
