//! Place search error types.

/// Errors from the place-search provider.
///
/// The search fields swallow these (the list just closes), but they are
/// kept distinct for logging.
#[derive(Debug, thiserror::Error)]
pub enum GeocodeError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Provider answered with a non-success status
    #[error("geocoder error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse response JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = GeocodeError::Api {
            status: 429,
            message: "slow down".into(),
        };
        assert_eq!(err.to_string(), "geocoder error 429: slow down");
    }
}
