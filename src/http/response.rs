// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Streaming HTTP response

use std::io::Write;
use std::time::Duration;

use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use url::Url;

use crate::error::{Error, Result};

/// Final response after redirects, with the body still on the wire
#[derive(Debug)]
pub struct Response {
    inner: reqwest::Response,
    timeout: Option<Duration>,
    /// Whether this was reached through at least one redirect
    pub redirected: bool,
}

impl Response {
    pub(crate) fn new(
        inner: reqwest::Response,
        timeout: Option<Duration>,
        redirected: bool,
    ) -> Self {
        Self {
            inner,
            timeout,
            redirected,
        }
    }

    /// Response status code
    pub fn status(&self) -> StatusCode {
        self.inner.status()
    }

    /// Response headers
    pub fn headers(&self) -> &HeaderMap {
        self.inner.headers()
    }

    /// Final URL (after redirects)
    pub fn url(&self) -> &Url {
        self.inner.url()
    }

    /// Check if status is redirect (3xx)
    pub fn is_redirect(&self) -> bool {
        self.status().is_redirection()
    }

    /// Write the status line and headers, as `-v` shows them
    pub fn write_head<W: Write>(&self, out: &mut W) -> Result<()> {
        let status = self.status();
        writeln!(
            out,
            "{} {}\n",
            status.as_u16(),
            status.canonical_reason().unwrap_or("")
        )?;
        let mut lines: Vec<(String, String)> = self
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    canonical_header_name(name.as_str()),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();
        // Stable, so repeated headers keep their order
        lines.sort_by(|a, b| a.0.cmp(&b.0));
        for (name, value) in lines {
            writeln!(out, "{}: {}", name, value)?;
        }
        out.flush()?;
        Ok(())
    }

    /// Stream the body into `out`, returning the number of bytes written
    pub async fn copy_to<W: AsyncWrite + Unpin>(mut self, out: &mut W) -> Result<u64> {
        let timeout = self.timeout;
        let mut written = 0u64;
        while let Some(chunk) = self
            .inner
            .chunk()
            .await
            .map_err(|e| Error::from_transport(e, timeout))?
        {
            out.write_all(&chunk).await?;
            written += chunk.len() as u64;
        }
        out.flush().await?;
        Ok(written)
    }

    /// Read the whole body as text
    pub async fn text(self) -> Result<String> {
        let timeout = self.timeout;
        self.inner
            .text()
            .await
            .map_err(|e| Error::from_transport(e, timeout))
    }
}

/// `content-type` -> `Content-Type`
fn canonical_header_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut upper = true;
    for c in name.chars() {
        if upper {
            out.push(c.to_ascii_uppercase());
        } else {
            out.push(c.to_ascii_lowercase());
        }
        upper = c == '-';
    }
    out
}
