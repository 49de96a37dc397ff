pub mod handlers;
mod types;

pub use types::ErrorResponse;

use crate::{
    Result,
    config::Config,
    llm::OpenAiClient,
    pricing::PriceEstimator,
};
use axum::{Router, routing::post};
use handlers::AppState;
use std::{net::SocketAddr, sync::Arc};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

pub const ESTIMATE_PRICE_PATH: &str = "/api/estimate-price";

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(ESTIMATE_PRICE_PATH, post(handlers::estimate_price))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    // One provider client for the whole process, shared by every request
    let llm_client = OpenAiClient::new(config.llm.clone())?;
    let model = llm_client.model().to_string();
    let estimator = PriceEstimator::new(Arc::new(llm_client), model.clone());

    let app_state = AppState {
        estimator: Arc::new(estimator),
    };

    let app = router(app_state);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!(
        "Starting pricing server on http://{} (model: {})",
        addr, model
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
