//! Underground client error types.

/// Errors from the underground service client.
///
/// `Service` is an error the backend itself reported in a well-formed
/// reply body (for example an unknown station name); the other variants
/// are transport-level failures where no usable reply arrived.
#[derive(Debug, thiserror::Error)]
pub enum UndergroundError {
    /// HTTP request failed (connection error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error status without a readable error body
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse the reply JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// The backend reported an error in its reply
    #[error("service error: {message}")]
    Service { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = UndergroundError::Api {
            status: 500,
            message: "Internal Server Error".into(),
        };
        assert_eq!(err.to_string(), "API error 500: Internal Server Error");

        let err = UndergroundError::Json {
            message: "expected value at line 1".into(),
        };
        assert_eq!(err.to_string(), "JSON parse error: expected value at line 1");

        let err = UndergroundError::Service {
            message: "No such station 'Narnia'".into(),
        };
        assert_eq!(err.to_string(), "service error: No such station 'Narnia'");
    }
}
