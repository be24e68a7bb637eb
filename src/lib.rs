// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! # hreq - one request, persistent cookies
//!
//! A command-line HTTP client that sends a single request and streams the
//! response body to stdout. Cookies survive between invocations in a jar
//! directory.
//!
//! ## Features
//!
//! - Persistent cookie jar with RFC 6265 domain and path matching
//! - Public Suffix List scoping: no cookies on `co.uk` or `com`
//! - Per-domain and jar-wide limits with least-recently-used eviction
//! - Atomic snapshot writes, tolerant snapshot reads
//! - Redirect limit that either returns the last response or fails
//! - Overall timeout across every redirect hop
//!
//! ## Example
//!
//! ```rust,no_run
//! use hreq::{Driver, RunConfig};
//! use url::Url;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = RunConfig::new(Url::parse("https://example.com")?)
//!         .redirects(5, true)
//!         .jar_dir("/tmp/hreq-cookies");
//!     let driver = Driver::new(config)?;
//!
//!     let mut body = Vec::new();
//!     driver.run(&mut body, &mut std::io::stderr()).await?;
//!     println!("{} bytes", body.len());
//!
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod driver;
pub mod error;
pub mod http;
pub mod jar;

// Re-exports for convenience

// Driver and configuration
pub use config::RunConfig;
pub use driver::Driver;

// Errors
pub use error::{Error, ErrorContext, Result};

// HTTP
pub use http::{HttpClient, HttpClientConfig, RedirectAction, RedirectPolicy, Request, Response};

// Cookies
pub use jar::{Cookie, CookieJar, JarConfig, JarFile, SetCookie, SharedJar};

/// hreq version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
