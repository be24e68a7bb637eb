// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! HTTP client layer for hreq
//!
//! A thin wrapper over reqwest that plugs in the cookie jar, the redirect
//! policy and the overall timeout, and keeps the response body streaming.

mod client;
mod redirect;
mod request;
mod response;

pub use client::{HttpClient, HttpClientConfig};
pub use redirect::{
    decide, RedirectAction, RedirectLimitExceeded, RedirectPolicy, DEFAULT_MAX_REDIRECTS,
};
pub use request::{parse_header, parse_method, Request};
pub use response::Response;

/// Default user agent string
pub const DEFAULT_USER_AGENT: &str = concat!("hreq/", env!("CARGO_PKG_VERSION"));
