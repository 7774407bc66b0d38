//! Axum route handlers for the forecast relay API.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::get,
};
use forecast_core::{ForecastGateway, ForecastRequest};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::error::ApiError;

type Gateway = Arc<ForecastGateway>;

/// Build the application router around the given gateway.
pub fn create_router(gateway: Gateway) -> Router {
    Router::new()
        .route("/api/previsao/{cidade}", get(forecast))
        .route("/health", get(health))
        .with_state(gateway)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// `GET /health` — liveness probe.
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(serde_json::json!({"status": "ok"})))
}

/// `GET /api/previsao/{cidade}` — forward a forecast lookup to OpenWeather.
///
/// On success the upstream JSON body is relayed byte-for-byte under a JSON
/// content type; on failure the response is `{"error": <message>}` with the
/// status mapped by the gateway.
pub async fn forecast(
    State(gateway): State<Gateway>,
    Path(cidade): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let request = ForecastRequest::new(cidade);
    let payload = gateway.fetch_forecast(&request).await?;

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        payload.into_string(),
    ))
}
