// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Run configuration
//!
//! Everything one invocation needs, built once (usually from the command
//! line) and handed to the [`Driver`](crate::Driver).

use std::path::PathBuf;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Method;
use url::Url;

use crate::http::{HttpClientConfig, RedirectPolicy, DEFAULT_MAX_REDIRECTS};
use crate::jar::JarConfig;

/// Name of the default jar directory under the home directory
pub const DEFAULT_JAR_DIR_NAME: &str = ".hreq-cookies";

/// Configuration for a single request
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Request method
    pub method: Method,
    /// Request URL
    pub url: Url,
    /// Extra request headers
    pub headers: HeaderMap,
    /// File whose contents become the request body
    pub body_file: Option<PathBuf>,
    /// Echo status line and headers to stderr
    pub verbose: bool,
    /// Overall timeout (None = no timeout)
    pub timeout: Option<Duration>,
    /// Maximum redirects to follow
    pub max_redirects: usize,
    /// Fail instead of returning the last redirect response
    pub fail_on_exceed: bool,
    /// Jar directory (None = in-memory jar)
    pub jar_dir: Option<PathBuf>,
    /// Jar limits
    pub jar: JarConfig,
}

impl RunConfig {
    /// Create a GET config for `url` with in-memory cookies
    pub fn new(url: Url) -> Self {
        Self {
            method: Method::GET,
            url,
            headers: HeaderMap::new(),
            body_file: None,
            verbose: false,
            timeout: None,
            max_redirects: DEFAULT_MAX_REDIRECTS,
            fail_on_exceed: false,
            jar_dir: None,
            jar: JarConfig::default(),
        }
    }

    /// Set the method
    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Set a header, replacing any previous value
    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Read the body from `path`
    pub fn body_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.body_file = Some(path.into());
        self
    }

    /// Echo status and headers
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Set the overall timeout; zero disables it
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = (!timeout.is_zero()).then_some(timeout);
        self
    }

    /// Set the redirect limit and overflow behaviour
    pub fn redirects(mut self, max_redirects: usize, fail_on_exceed: bool) -> Self {
        self.max_redirects = max_redirects;
        self.fail_on_exceed = fail_on_exceed;
        self
    }

    /// Persist cookies in `dir`; an empty path keeps them in memory
    pub fn jar_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        self.jar_dir = (!dir.as_os_str().is_empty()).then_some(dir);
        self
    }

    /// Set jar limits
    pub fn jar_limits(mut self, jar: JarConfig) -> Self {
        self.jar = jar;
        self
    }

    /// Redirect policy for this run
    pub fn redirect_policy(&self) -> RedirectPolicy {
        RedirectPolicy::new(self.max_redirects, self.fail_on_exceed)
    }

    /// Client settings for this run
    pub fn client_config(&self) -> HttpClientConfig {
        let mut config = HttpClientConfig::new().redirect(self.redirect_policy());
        config.timeout = self.timeout;
        config
    }
}

/// `~/.hreq-cookies`, if the home directory is known
pub fn default_jar_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(DEFAULT_JAR_DIR_NAME))
}
