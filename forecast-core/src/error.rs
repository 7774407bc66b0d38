use reqwest::StatusCode;

/// Fallback user-facing message when the upstream gives no usable one.
pub const FETCH_FAILED_MESSAGE: &str = "failed to fetch the weather forecast";

/// Errors produced while relaying a forecast request.
///
/// Each variant carries everything the HTTP layer needs: [`status`] yields
/// the response code and `Display` yields the user-visible message.
///
/// [`status`]: ForecastError::status
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ForecastError {
    /// The OpenWeather API key is absent from the server configuration.
    #[error("credential not configured")]
    MissingCredential,

    /// The inbound request did not name a city.
    #[error("city is required")]
    MissingCity,

    /// The upstream answered with a non-success status.
    #[error("{message}")]
    Upstream { status: StatusCode, message: String },

    /// The upstream could not be reached at all (connect, DNS, read).
    #[error("{}", FETCH_FAILED_MESSAGE)]
    UpstreamUnreachable(#[source] reqwest::Error),
}

impl ForecastError {
    /// HTTP status the relay reports for this failure.
    ///
    /// Upstream rejections keep the status the upstream reported; every
    /// other fault maps to a generic server fault or a bad request.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingCredential | Self::UpstreamUnreachable(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            Self::MissingCity => StatusCode::BAD_REQUEST,
            Self::Upstream { status, .. } => *status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_credential_maps_to_500() {
        let err = ForecastError::MissingCredential;
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "credential not configured");
    }

    #[test]
    fn missing_city_maps_to_400() {
        let err = ForecastError::MissingCity;
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "city is required");
    }

    #[test]
    fn upstream_error_keeps_status_and_message() {
        let err = ForecastError::Upstream {
            status: StatusCode::NOT_FOUND,
            message: "city not found".to_string(),
        };
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "city not found");
    }
}
