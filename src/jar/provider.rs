// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Bridge between the cookie jar and reqwest's cookie hooks

use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};
use reqwest::header::HeaderValue;
use url::Url;

use super::cookie::SetCookie;
use super::store::CookieJar;

/// Shared handle to the jar, handed to the HTTP client.
///
/// reqwest calls [`cookies`](reqwest::cookie::CookieStore::cookies) before
/// every hop and [`set_cookies`](reqwest::cookie::CookieStore::set_cookies)
/// after every response, including redirect responses.
#[derive(Debug, Clone, Default)]
pub struct SharedJar {
    inner: Arc<Mutex<CookieJar>>,
}

impl SharedJar {
    /// Wrap a jar for sharing with the client
    pub fn new(jar: CookieJar) -> Self {
        Self {
            inner: Arc::new(Mutex::new(jar)),
        }
    }

    /// Lock the jar for direct inspection
    pub fn lock(&self) -> MutexGuard<'_, CookieJar> {
        self.inner.lock()
    }
}

impl reqwest::cookie::CookieStore for SharedJar {
    fn set_cookies(&self, cookie_headers: &mut dyn Iterator<Item = &HeaderValue>, url: &Url) {
        let cookies: Vec<SetCookie> = cookie_headers
            .filter_map(|value| value.to_str().ok())
            .filter_map(SetCookie::parse)
            .collect();
        if cookies.is_empty() {
            return;
        }
        tracing::debug!(url = %url, count = cookies.len(), "received cookies");
        self.inner.lock().set_cookies(url, cookies);
    }

    fn cookies(&self, url: &Url) -> Option<HeaderValue> {
        let header = self.inner.lock().header_value(url)?;
        HeaderValue::from_str(&header).ok()
    }
}
