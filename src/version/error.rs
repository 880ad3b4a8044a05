use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConnectionError {
    #[error("invalid endpoint URL: {0}")]
    InvalidUrl(String),

    #[error("endpoint URL has no host: {0}")]
    MissingHost(String),
}

/// Terminal failure of the version probe.
///
/// Only the fallback phase surfaces errors; every primary-phase failure is
/// absorbed into the fallback attempt.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// Endpoint URL could not be turned into a request target
    #[error(transparent)]
    Connection(#[from] ConnectionError),

    /// Fallback request failed on the wire
    #[error("unable to get version: {0}")]
    Network(#[from] reqwest::Error),

    /// Fallback response body was not valid JSON
    #[error("unable to get version: invalid response body: {0}")]
    Body(#[from] serde_json::Error),

    /// Fallback response reported an error status in its body
    #[error("HTTP STATUS: {status} - unable to get version")]
    Rejected {
        /// Status reported by the response body (`status` or `error.code`)
        status: u16,
        /// Server-reported error object, serialized for display
        description: String,
    },
}

impl ResolveError {
    /// Server-reported error details, when the server supplied any
    pub fn description(&self) -> Option<&str> {
        match self {
            ResolveError::Rejected { description, .. } => Some(description),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_error_message_summarizes_the_status_code() {
        let err = ResolveError::Rejected {
            status: 403,
            description: r#"{"reason": "forbidden"}"#.to_string(),
        };

        assert_eq!(err.to_string(), "HTTP STATUS: 403 - unable to get version");
        assert_eq!(err.description(), Some(r#"{"reason": "forbidden"}"#));
    }

    #[test]
    fn connection_error_passes_through_unchanged() {
        let err = ResolveError::from(ConnectionError::InvalidUrl("nope".to_string()));

        assert_eq!(err.to_string(), "invalid endpoint URL: nope");
        assert_eq!(err.description(), None);
    }
}
