use reqwest::Client;
use tracing::{debug, warn};

use crate::{
    config::Config,
    error::{FetchError, ServiceError},
    model::{WeatherQuery, WeatherResponse},
};

/// Production endpoint of the Visual Crossing timeline service.
pub const DEFAULT_BASE_URL: &str = "https://weather.visualcrossing.com/VisualCrossingWebServices";

/// Client for the timeline weather API.
///
/// Holds the API key as explicit state; there is no process-wide
/// configuration. The underlying HTTP client is shared across fetches.
#[derive(Debug, Clone)]
pub struct WeatherClient {
    api_key: String,
    base_url: String,
    http: Client,
}

impl WeatherClient {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_owned())
    }

    /// Same client against a different endpoint. Test seam.
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            api_key,
            base_url,
            http: Client::new(),
        }
    }

    /// Construct a client from stored configuration.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let api_key = config.api_key().ok_or_else(|| {
            anyhow::anyhow!(
                "No API key configured.\n\
                 Hint: run `skycast configure` and enter your Visual Crossing API key."
            )
        })?;

        Ok(Self::new(api_key.to_owned()))
    }

    /// Perform one fetch for the given query.
    ///
    /// Exactly one network call per invocation; the returned future
    /// resolves exactly once with either a decoded response or an error.
    /// Overlapping fetches are independent: starting a new one does not
    /// cancel or deduplicate an in-flight one, so with concurrent calls
    /// the caller observes whichever completion arrives last.
    ///
    /// The location travels verbatim (percent-encoded) to the remote API;
    /// it is not validated locally. Transport failures pass through
    /// unmodified; undecodable bodies are classified into [`ServiceError`]
    /// by their raw text. The HTTP status code is not consulted: the API
    /// signals failures through the body, and that is what is matched.
    pub async fn fetch(&self, query: &WeatherQuery) -> Result<WeatherResponse, FetchError> {
        let url = self.request_url(query);
        debug!(location = %query.location, unit = %query.unit, "fetching timeline weather");

        let response = self.http.get(&url).send().await?;
        let body = response.text().await?;

        match serde_json::from_str::<WeatherResponse>(&body) {
            Ok(decoded) => {
                debug!(
                    resolved_address = %decoded.resolved_address,
                    days = decoded.days.len(),
                    "timeline payload decoded"
                );
                Ok(decoded)
            }
            Err(decode_error) => {
                let service_error = ServiceError::from_error_body(&body);
                warn!(%decode_error, %service_error, "timeline body did not decode");
                Err(FetchError::Service(service_error))
            }
        }
    }

    fn request_url(&self, query: &WeatherQuery) -> String {
        format!(
            "{}/rest/services/timeline/{}?unitGroup={}&key={}&contentType=json",
            self.base_url,
            urlencoding::encode(&query.location),
            query.unit.query_value(),
            self.api_key,
        )
    }
}
