use anyhow::Result;
use tokio::net::TcpListener;
use tracing::{debug, error, info, trace};

use crate::config::AppConfig;
use crate::router::create_router;
use crate::schemas::AppState;

pub async fn serve(config: AppConfig) -> Result<()> {
    trace!("Entering serve function");
    info!("Grade predictor gateway starting up");
    debug!("Upstream URL: {}", config.upstream_url);
    debug!("Bind address: {}", config.bind_address);

    let bind_address = config.bind_address.clone();
    match &config.static_dir {
        Some(dir) => info!("Serving frontend from {}", dir.display()),
        None => info!("No static directory configured, serving API only"),
    }

    trace!("Creating application router");
    let state = match AppState::new(config) {
        Ok(state) => state,
        Err(e) => {
            error!("Failed to create upstream client: {}", e);
            return Err(e.into());
        }
    };
    let app = create_router(state);
    debug!("Router created successfully");

    info!("Starting server on {}", bind_address);
    let listener = match TcpListener::bind(&bind_address).await {
        Ok(listener) => {
            debug!("Successfully bound to address: {}", bind_address);
            listener
        }
        Err(e) => {
            error!("Failed to bind to address {}: {}", bind_address, e);
            return Err(e.into());
        }
    };

    info!("Grade predictor running on http://{}", bind_address);
    info!("Swagger UI available at http://{}/swagger-ui", bind_address);

    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
        return Err(e.into());
    }

    info!("Server shutdown gracefully");
    Ok(())
}
