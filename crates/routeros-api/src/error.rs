use std::fmt;

use serde::Deserialize;
use thiserror::Error;

/// Top-level error type for the `routeros-api` crate.
#[derive(Debug, Error)]
pub enum Error {
    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, timeout, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// CA certificate could not be loaded or the HTTP client could not be built.
    #[error("TLS error: {0}")]
    Tls(String),

    // ── Router ──────────────────────────────────────────────────────
    /// The router answered with a non-success status.
    #[error(transparent)]
    Remote(RemoteError),

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

impl Error {
    /// Returns `true` if this is a transient error worth retrying.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_timeout() || e.is_connect(),
            Self::Remote(e) => matches!(e.code, 502..=504),
            _ => false,
        }
    }

    /// Returns `true` if the addressed object does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Remote(e) if e.code == 404)
    }

    /// The router's error body, if this error came from one.
    pub fn remote(&self) -> Option<&RemoteError> {
        match self {
            Self::Remote(e) => Some(e),
            _ => None,
        }
    }
}

/// Error body returned by RouterOS for any non-success response:
/// `{"error": 404, "message": "Not Found", "detail": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RemoteError {
    #[serde(rename = "error")]
    pub code: u16,
    pub message: String,
    #[serde(default)]
    pub detail: Option<String>,
}

impl fmt::Display for RemoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "routeros: response code {}, message {:?}", self.code, self.message)?;
        if let Some(detail) = &self.detail {
            write!(f, ", detail {detail:?}")?;
        }
        Ok(())
    }
}

impl std::error::Error for RemoteError {}
