use super::types::ErrorResponse;
use crate::pricing::{PriceEstimate, PriceEstimator, PricingRequest};
use axum::{
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use std::sync::Arc;
use tracing::{debug, error, info};
use uuid::Uuid;

#[derive(Clone)]
pub struct AppState {
    pub estimator: Arc<PriceEstimator>,
}

pub async fn estimate_price(
    State(state): State<AppState>,
    payload: Result<Json<PricingRequest>, JsonRejection>,
) -> Result<Json<PriceEstimate>, Response> {
    let request_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(request)) => request,
        // A body not declared as JSON is priced as a job with no fields
        Err(JsonRejection::MissingJsonContentType(_)) => {
            debug!("Request {} has no JSON content type, using empty job", request_id);
            PricingRequest::default()
        }
        Err(rejection) => return Err(rejection.into_response()),
    };

    info!("Received price estimate request {}", request_id);

    match state.estimator.estimate(&request).await {
        Ok(estimate) => {
            info!(
                "Estimated request {}: recommended {} (range {}-{})",
                request_id,
                estimate.recommended_price,
                estimate.estimated_price_min,
                estimate.estimated_price_max
            );
            Ok(Json(estimate))
        }
        Err(e) => {
            error!("Failed to estimate price for request {}: {}", request_id, e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::estimate_failed(e.to_string())),
            )
                .into_response())
        }
    }
}
