//! Error mapping from gateway failures to HTTP responses.

use axum::{
    Json,
    response::{IntoResponse, Response},
};
use forecast_core::ForecastError;
use serde_json::json;

/// Wrapper turning [`ForecastError`] into the relay's JSON error responses.
///
/// Every failure becomes `{"error": <message>}` with the status the gateway
/// mapped for it.
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct ApiError(#[from] ForecastError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.0.status();
        (status, Json(json!({"error": self.0.to_string()}))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn api_error_status_codes_map_correctly() {
        let missing_city = ApiError::from(ForecastError::MissingCity);
        assert_eq!(missing_city.into_response().status(), StatusCode::BAD_REQUEST);

        let missing_credential = ApiError::from(ForecastError::MissingCredential);
        assert_eq!(
            missing_credential.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn api_error_keeps_the_upstream_status() {
        let err = ApiError::from(ForecastError::Upstream {
            status: StatusCode::SERVICE_UNAVAILABLE,
            message: "maintenance".to_string(),
        });
        assert_eq!(err.into_response().status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn api_error_display_includes_the_message() {
        let err = ApiError::from(ForecastError::Upstream {
            status: StatusCode::NOT_FOUND,
            message: "city not found".to_string(),
        });
        assert!(err.to_string().contains("city not found"), "Display must include the message");
    }
}
