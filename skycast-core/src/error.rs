use thiserror::Error;

/// Raw error bodies the timeline API is known to return, matched verbatim.
/// New error strings get a row here, not new control flow.
const KNOWN_ERROR_BODIES: &[(&str, ServiceError)] = &[(
    "Bad API Request:Invalid location parameter value.",
    ServiceError::InvalidLocation,
)];

/// Closed set of service-level failures derived from the raw API error
/// body. Each variant's `Display` is its fixed user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ServiceError {
    #[error("Unknown location. Please try another location.")]
    InvalidLocation,
    #[error("Oops, sorry, something went wrong.")]
    Unknown,
}

impl ServiceError {
    /// Classify a raw response body that failed to decode as a payload.
    /// Anything outside the known table collapses to `Unknown`.
    pub fn from_error_body(body: &str) -> Self {
        KNOWN_ERROR_BODIES
            .iter()
            .find(|(literal, _)| *literal == body)
            .map_or(ServiceError::Unknown, |(_, error)| *error)
    }
}

/// Outcome channel of a fetch: either the transport failed, or the body
/// could not be decoded and was classified as a service error.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport-level failure (DNS, connectivity, TLS), passed through
    /// unmodified from the HTTP client.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    #[error(transparent)]
    Service(#[from] ServiceError),
}
