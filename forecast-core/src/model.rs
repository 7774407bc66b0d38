/// A single inbound forecast lookup, identified by a free-text city name.
#[derive(Debug, Clone)]
pub struct ForecastRequest {
    pub city: String,
}

impl ForecastRequest {
    pub fn new(city: impl Into<String>) -> Self {
        Self { city: city.into() }
    }
}

/// Raw JSON document returned by the upstream provider.
///
/// The body is kept as the exact text the upstream produced and is relayed
/// without re-serialization, so key order and whitespace survive the trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForecastPayload(String);

impl ForecastPayload {
    pub(crate) fn new(body: String) -> Self {
        Self(body)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for ForecastPayload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
