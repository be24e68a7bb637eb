// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Cookie jar snapshots on disk
//!
//! A jar directory holds a single `cookies.json`. Loading never fails: a
//! missing or broken snapshot is logged and the jar starts empty. Saving
//! writes a temporary file next to the snapshot and renames it into place.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

use super::cookie::Cookie;
use super::store::{CookieJar, JarConfig};
use crate::error::{Error, Result};

/// File name of the snapshot inside the jar directory
pub const JAR_FILE_NAME: &str = "cookies.json";

/// Current snapshot format version
pub const SNAPSHOT_VERSION: u32 = 1;

/// On-disk snapshot. Unknown fields are ignored so newer files still load.
#[derive(Debug, Serialize, Deserialize)]
struct Snapshot {
    #[serde(default)]
    version: u32,
    #[serde(default)]
    cookies: Vec<Cookie>,
}

/// Location of a persisted jar, or none for an in-memory jar
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JarFile {
    dir: Option<PathBuf>,
}

impl JarFile {
    /// Persist into `dir`. An empty path disables persistence.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        if dir.as_os_str().is_empty() {
            Self::in_memory()
        } else {
            Self { dir: Some(dir) }
        }
    }

    /// A jar that is never loaded or saved
    pub fn in_memory() -> Self {
        Self { dir: None }
    }

    /// Whether this jar survives the process
    pub fn is_persistent(&self) -> bool {
        self.dir.is_some()
    }

    /// Full path of the snapshot file
    pub fn snapshot_path(&self) -> Option<PathBuf> {
        self.dir.as_ref().map(|d| d.join(JAR_FILE_NAME))
    }

    /// Load the jar, falling back to an empty one on any failure
    pub fn load(&self, config: JarConfig) -> CookieJar {
        self.load_at(config, Utc::now())
    }

    /// Load the jar as of `now`
    pub fn load_at(&self, config: JarConfig, now: DateTime<Utc>) -> CookieJar {
        let Some(path) = self.snapshot_path() else {
            return CookieJar::new(config);
        };

        match read_snapshot(&path) {
            Ok(snapshot) => {
                let cookies: Vec<Cookie> = snapshot
                    .cookies
                    .into_iter()
                    .filter(|c| c.is_persistent())
                    .collect();
                let jar = CookieJar::restore(config, cookies, now);
                tracing::debug!(
                    path = %path.display(),
                    cookies = jar.len(),
                    "loaded cookie jar"
                );
                jar
            }
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "could not load cookie jar, starting empty"
                );
                CookieJar::new(config)
            }
        }
    }

    /// Write the persistent cookies of `jar` to disk
    pub fn save(&self, jar: &CookieJar) -> Result<()> {
        self.save_at(jar, Utc::now())
    }

    /// Write the persistent cookies of `jar`, as of `now`
    pub fn save_at(&self, jar: &CookieJar, now: DateTime<Utc>) -> Result<()> {
        let (Some(dir), Some(path)) = (self.dir.as_ref(), self.snapshot_path()) else {
            return Ok(());
        };

        let mut cookies = jar.persistent_cookies(now);
        cookies.sort_by_key(|c| c.seq);
        let snapshot = Snapshot {
            version: SNAPSHOT_VERSION,
            cookies,
        };

        write_atomic(dir, &path, &snapshot).map_err(|source| Error::Persist {
            path: path.clone(),
            source,
        })?;
        tracing::debug!(
            path = %path.display(),
            cookies = snapshot.cookies.len(),
            "saved cookie jar"
        );
        Ok(())
    }
}

fn read_snapshot(path: &Path) -> Result<Snapshot> {
    let data = fs::read(path)?;
    Ok(serde_json::from_slice(&data)?)
}

fn write_atomic(dir: &Path, path: &Path, snapshot: &Snapshot) -> io::Result<()> {
    fs::create_dir_all(dir)?;
    let mut tmp = NamedTempFile::new_in(dir)?;
    serde_json::to_writer_pretty(&mut tmp, snapshot)?;
    tmp.write_all(b"\n")?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
