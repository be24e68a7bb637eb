// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! HTTP client implementation

use std::sync::Arc;
use std::time::{Duration, Instant};

use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::Client;

use super::redirect::RedirectPolicy;
use super::request::Request;
use super::response::Response;
use super::DEFAULT_USER_AGENT;
use crate::error::{Error, Result};
use crate::jar::SharedJar;

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// User agent string
    pub user_agent: String,
    /// Overall timeout covering every redirect hop and the body (None = no timeout)
    pub timeout: Option<Duration>,
    /// Redirect limit and overflow behaviour
    pub redirect: RedirectPolicy,
    /// Default headers
    pub default_headers: HeaderMap,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        let mut default_headers = HeaderMap::new();
        default_headers.insert("accept", HeaderValue::from_static("*/*"));

        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: None,
            redirect: RedirectPolicy::default(),
            default_headers,
        }
    }
}

impl HttpClientConfig {
    /// Create a new client config
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the overall timeout; zero disables it
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = (!timeout.is_zero()).then_some(timeout);
        self
    }

    /// Set the redirect policy
    pub fn redirect(mut self, redirect: RedirectPolicy) -> Self {
        self.redirect = redirect;
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// HTTP client wired to a cookie jar and a redirect policy
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    config: HttpClientConfig,
    cookie_jar: SharedJar,
}

impl HttpClient {
    /// Create a new HTTP client backed by `cookie_jar`
    pub fn new(config: HttpClientConfig, cookie_jar: SharedJar) -> Result<Self> {
        let mut builder = Client::builder()
            .user_agent(&config.user_agent)
            .redirect(config.redirect.to_reqwest())
            .default_headers(config.default_headers.clone())
            .cookie_provider(Arc::new(cookie_jar.clone()));

        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|e| Error::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            config,
            cookie_jar,
        })
    }

    /// Get the cookie jar
    pub fn cookie_jar(&self) -> &SharedJar {
        &self.cookie_jar
    }

    /// Get client configuration
    pub fn config(&self) -> &HttpClientConfig {
        &self.config
    }

    /// Execute a request, following redirects per the configured policy
    pub async fn execute(&self, request: Request) -> Result<Response> {
        let start = Instant::now();
        let mut builder = self
            .client
            .request(request.method.clone(), request.url.clone())
            .headers(request.headers);

        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        tracing::debug!(method = %request.method, url = %request.url, "sending request");
        let response = builder
            .send()
            .await
            .map_err(|e| Error::from_transport(e, self.config.timeout))?;

        let redirected = response.url() != &request.url;
        tracing::debug!(
            status = response.status().as_u16(),
            url = %response.url(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "received response"
        );

        Ok(Response::new(response, self.config.timeout, redirected))
    }
}
