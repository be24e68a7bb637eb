// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Error types for hreq
//!
//! Transport failures, timeouts and redirect-limit failures are kept apart so
//! the caller can tell a policy stop from a broken connection. Cookie jar
//! problems never show up here except as [`Error::Persist`], which the driver
//! only logs.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use crate::http::RedirectLimitExceeded;

/// Result type alias for hreq operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for hreq
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// Timeout error
    #[error(
        "Request timed out after {duration_ms}ms{}",
        .url.as_deref().map(|u| format!(": {}", u)).unwrap_or_default()
    )]
    Timeout { duration_ms: u64, url: Option<String> },

    /// Redirect limit exceeded while configured to fail
    #[error("stopped after {limit} redirects")]
    RedirectLimit { limit: usize },

    /// Malformed header argument
    #[error("bad header format, expecting 'key:value': {0}")]
    Header(String),

    /// Cookie jar snapshot could not be written
    #[error("failed to save cookie jar to {}: {source}", .path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a timeout error
    pub fn timeout(timeout: Option<Duration>) -> Self {
        Error::Timeout {
            duration_ms: timeout.map_or(0, |t| t.as_millis() as u64),
            url: None,
        }
    }

    /// Create a header error
    pub fn header<S: Into<String>>(msg: S) -> Self {
        Error::Header(msg.into())
    }

    /// Classify an error coming out of reqwest.
    ///
    /// The redirect policy reports a limit overflow by boxing
    /// [`RedirectLimitExceeded`] into the reqwest error, so the source chain is
    /// searched for it before falling back to timeout or plain transport.
    pub fn from_transport(err: reqwest::Error, timeout: Option<Duration>) -> Self {
        if let Some(limit) = redirect_limit(&err) {
            return Error::RedirectLimit { limit };
        }
        if err.is_timeout() {
            return Error::Timeout {
                duration_ms: timeout.map_or(0, |t| t.as_millis() as u64),
                url: err.url().map(|u| u.to_string()),
            };
        }
        Error::Http(err)
    }

    /// Check if this is a timeout error
    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Timeout { .. })
    }

    /// Check if this is a redirect-limit failure
    pub fn is_redirect_limit(&self) -> bool {
        matches!(self, Error::RedirectLimit { .. })
    }

    /// Check if this is a transport failure (DNS, connect, TLS, protocol)
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Http(_))
    }

    /// Get URL if available
    pub fn url(&self) -> Option<&str> {
        match self {
            Error::Timeout { url: Some(u), .. } => Some(u),
            Error::Http(e) => e.url().map(|u| u.as_str()),
            _ => None,
        }
    }
}

fn redirect_limit(err: &reqwest::Error) -> Option<usize> {
    let mut source: Option<&(dyn std::error::Error + 'static)> = std::error::Error::source(err);
    while let Some(e) = source {
        if let Some(exceeded) = e.downcast_ref::<RedirectLimitExceeded>() {
            return Some(exceeded.limit);
        }
        source = e.source();
    }
    None
}

/// Helper trait for adding context to errors
pub trait ErrorContext<T> {
    /// Add URL context to error
    fn with_url(self, url: &str) -> Result<T>;

    /// Add operation context to error
    fn context(self, msg: &str) -> Result<T>;
}

impl<T, E: Into<Error>> ErrorContext<T> for std::result::Result<T, E> {
    fn with_url(self, url: &str) -> Result<T> {
        self.map_err(|e| match e.into() {
            Error::Timeout { duration_ms, .. } => Error::Timeout {
                duration_ms,
                url: Some(url.to_string()),
            },
            other => other,
        })
    }

    fn context(self, msg: &str) -> Result<T> {
        self.map_err(|e| {
            let err = e.into();
            Error::Other(format!("{}: {}", msg, err))
        })
    }
}
