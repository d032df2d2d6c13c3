// Error taxonomy for the OAuth2 flow.
//
// Every failure is surfaced synchronously to the caller as a distinguishable
// outcome; the crate never retries or silently recovers. The host framework
// owns user-facing error presentation and session cleanup.

use std::fmt;

/// Outcome of a failed step in the login flow.
#[derive(Debug, thiserror::Error)]
pub enum GtawError {
    /// The end user declined the authorization request at the UCP.
    #[error("user denied the authorization request")]
    Denied,

    /// The provider returned a non-success signal. Carries the raw error
    /// code from the redirect, or the HTTP status of a failed API call.
    #[error("provider error: {0}")]
    Provider(String),

    /// Transport-level failure: timeout, DNS, connection reset.
    #[error("network failure: {0}")]
    Network(#[source] reqwest::Error),

    /// A response was received but did not match the expected shape.
    #[error("malformed provider response: {0}")]
    MalformedResponse(String),

    /// Invalid configuration detected at construction time.
    #[error("configuration error: {0}")]
    Config(String),
}

impl GtawError {
    /// Provider error carrying an HTTP status code, e.g. `Provider("401")`.
    pub(crate) fn provider_status(status: reqwest::StatusCode) -> Self {
        Self::Provider(status.as_u16().to_string())
    }

    /// The raw provider error code or HTTP status, if this outcome has one.
    pub fn provider_code(&self) -> Option<&str> {
        match self {
            Self::Provider(code) => Some(code),
            _ => None,
        }
    }
}

impl GtawError {
    /// Short machine-readable tag, stable across releases. Useful for host
    /// frameworks that map outcomes onto their own error pages.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Denied => ErrorKind::Denied,
            Self::Provider(_) => ErrorKind::Provider,
            Self::Network(_) => ErrorKind::Network,
            Self::MalformedResponse(_) => ErrorKind::MalformedResponse,
            Self::Config(_) => ErrorKind::Config,
        }
    }
}

/// Discriminant of [`GtawError`], without the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Denied,
    Provider,
    Network,
    MalformedResponse,
    Config,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Self::Denied => "denied",
            Self::Provider => "provider_error",
            Self::Network => "network_failure",
            Self::MalformedResponse => "malformed_response",
            Self::Config => "config_error",
        };
        write!(f, "{tag}")
    }
}

/// Unified result type for gtaw-oauth operations.
pub type Result<T> = std::result::Result<T, GtawError>;
