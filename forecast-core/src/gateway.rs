use reqwest::Client;
use serde::Deserialize;
use tracing::{info, warn};

use crate::{
    error::{FETCH_FAILED_MESSAGE, ForecastError},
    model::{ForecastPayload, ForecastRequest},
};

/// OpenWeather 5-day forecast endpoint.
pub const OPENWEATHER_FORECAST_URL: &str = "https://api.openweathermap.org/data/2.5/forecast";

const UNITS: &str = "metric";
const LANG: &str = "pt_br";

/// Forwards forecast lookups to OpenWeather using a server-held API key.
///
/// The gateway owns the credential; callers never see it. Each lookup is a
/// single outbound GET with no retries and no caching.
#[derive(Debug, Clone)]
pub struct ForecastGateway {
    api_key: Option<String>,
    forecast_url: String,
    http: Client,
}

impl ForecastGateway {
    /// Create a gateway holding the given API key.
    ///
    /// `None` (or an empty string) is accepted so the server can start
    /// without a key; every lookup then fails with
    /// [`ForecastError::MissingCredential`].
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key,
            forecast_url: OPENWEATHER_FORECAST_URL.to_string(),
            http: Client::new(),
        }
    }

    /// Point the gateway at a different forecast endpoint.
    pub fn with_forecast_url(mut self, url: impl Into<String>) -> Self {
        self.forecast_url = url.into();
        self
    }

    /// Fetch the forecast for `request.city` and relay the upstream body as-is.
    ///
    /// On a 2xx upstream response the payload is returned untouched. On a
    /// non-2xx response the upstream status is kept and its `message` field
    /// (when present) becomes the error message; transport failures map to a
    /// generic server fault. Nothing is retried.
    pub async fn fetch_forecast(
        &self,
        request: &ForecastRequest,
    ) -> Result<ForecastPayload, ForecastError> {
        let Some(api_key) = self.api_key.as_deref().filter(|key| !key.is_empty()) else {
            return Err(ForecastError::MissingCredential);
        };

        if request.city.is_empty() {
            return Err(ForecastError::MissingCity);
        }

        info!(city = %request.city, "fetching forecast from OpenWeather");

        // The query string carries the key, so log the city and never the URL.
        let res = self
            .http
            .get(&self.forecast_url)
            .query(&[
                ("q", request.city.as_str()),
                ("appid", api_key),
                ("units", UNITS),
                ("lang", LANG),
            ])
            .send()
            .await
            .map_err(|e| {
                warn!(city = %request.city, error = %e, "OpenWeather request did not complete");
                ForecastError::UpstreamUnreachable(e)
            })?;

        let status = res.status();
        let body = res.text().await.map_err(|e| {
            warn!(city = %request.city, error = %e, "failed to read OpenWeather response body");
            ForecastError::UpstreamUnreachable(e)
        })?;

        if !status.is_success() {
            let message = upstream_message(&body);
            warn!(city = %request.city, status = %status, message = %message, "OpenWeather rejected the request");
            return Err(ForecastError::Upstream { status, message });
        }

        info!(city = %request.city, bytes = body.len(), "forecast received from OpenWeather");

        Ok(ForecastPayload::new(body))
    }
}

/// Error body shape OpenWeather uses, e.g. `{"cod":"404","message":"city not found"}`.
///
/// `message` is optional: proxies and other upstream layers may answer with
/// a different document, or with none at all.
#[derive(Debug, Deserialize)]
struct UpstreamErrorBody {
    #[serde(default)]
    message: Option<String>,
}

fn upstream_message(body: &str) -> String {
    serde_json::from_str::<UpstreamErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.message)
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| FETCH_FAILED_MESSAGE.to_string())
}
