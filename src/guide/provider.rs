//! The local-guide boundary.
//!
//! Guide generation is the one operation in the system with genuine failure
//! modes, and they are all swallowed here: callers get a displayable string
//! every time, never an error. The typed [`GuideError`] exists for logging
//! and for the provider's internal plumbing only.

use std::fmt;

use async_trait::async_trait;

/// What the guest sees when guide generation fails, whatever the reason.
pub const GUIDE_UNAVAILABLE: &str = "We're sorry, but we couldn't generate a local guide at this \
                                     time. Please check your API key and network connection.";

/// Failure modes of a guide backend. Never escapes the provider boundary.
#[derive(Debug)]
pub enum GuideError {
    /// Provider misconfigured (missing API key, bad URL).
    Config(String),
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// The service returned an error response.
    Api { status: u16, message: String },
    /// Failed to parse the service's response.
    Parse(String),
}

impl fmt::Display for GuideError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GuideError::Config(msg) => write!(f, "config error: {msg}"),
            GuideError::Network(msg) => write!(f, "network error: {msg}"),
            GuideError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            GuideError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for GuideError {}

#[async_trait]
pub trait GuideProvider: Send + Sync {
    /// Returns the name of the provider.
    fn name(&self) -> &str;

    /// Produces a markdown local guide for a stay at `hotel_name` in `city`.
    ///
    /// Infallible by contract: implementations map every internal failure to
    /// [`GUIDE_UNAVAILABLE`] (or their own fixed fallback) rather than
    /// surfacing it.
    async fn generate_local_guide(&self, hotel_name: &str, city: &str) -> String;
}
