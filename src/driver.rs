// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Request driver
//!
//! Loads the jar, sends the request, delivers the response and saves the jar
//! once at the end. A jar that cannot be saved is reported as a warning only,
//! since the response has already been written by then.

use std::io::Write;

use tokio::io::AsyncWrite;

use crate::config::RunConfig;
use crate::error::{ErrorContext, Result};
use crate::http::{HttpClient, Request, Response};
use crate::jar::{JarFile, SharedJar};

/// Runs one configured request
pub struct Driver {
    config: RunConfig,
    jar_file: JarFile,
    jar: SharedJar,
    client: HttpClient,
}

impl Driver {
    /// Load the jar and build the client
    pub fn new(config: RunConfig) -> Result<Self> {
        let jar_file = match &config.jar_dir {
            Some(dir) => JarFile::new(dir.clone()),
            None => JarFile::in_memory(),
        };
        let jar = SharedJar::new(jar_file.load(config.jar));
        let client = HttpClient::new(config.client_config(), jar.clone())?;

        Ok(Self {
            config,
            jar_file,
            jar,
            client,
        })
    }

    /// The jar shared with the client
    pub fn jar(&self) -> &SharedJar {
        &self.jar
    }

    /// Where the jar is persisted
    pub fn jar_file(&self) -> &JarFile {
        &self.jar_file
    }

    /// Send the request and return the final response, body unread
    pub async fn send(&self) -> Result<Response> {
        let mut request = Request::from_url(self.config.method.clone(), self.config.url.clone())
            .headers(self.config.headers.clone());

        if let Some(path) = &self.config.body_file {
            let body = tokio::fs::read(path)
                .await
                .context(&format!("failed to read request body {}", path.display()))?;
            request = request.body(body);
        }

        self.client
            .execute(request)
            .await
            .with_url(self.config.url.as_str())
    }

    /// Write the jar to disk
    pub fn save_jar(&self) -> Result<()> {
        let jar = self.jar.lock();
        self.jar_file.save(&jar)
    }

    /// Send, echo the head to `err` if verbose, stream the body to `out`,
    /// then save the jar whatever the outcome.
    pub async fn run<O, E>(&self, out: &mut O, err: &mut E) -> Result<()>
    where
        O: AsyncWrite + Unpin,
        E: Write,
    {
        let result = self.deliver(out, err).await;

        if let Err(e) = self.save_jar() {
            tracing::warn!(error = %e, "cookie jar not saved");
        }
        result
    }

    async fn deliver<O, E>(&self, out: &mut O, err: &mut E) -> Result<()>
    where
        O: AsyncWrite + Unpin,
        E: Write,
    {
        let response = self.send().await?;
        tracing::debug!(
            status = response.status().as_u16(),
            redirected = response.redirected,
            stopped_at_redirect = response.is_redirect(),
            "final response"
        );
        if self.config.verbose {
            response.write_head(err)?;
        }
        let bytes = response.copy_to(out).await?;
        tracing::debug!(bytes, "response body written");
        Ok(())
    }
}
