// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Persistent cookie jar
//!
//! Stores cookies per registrable domain, refuses cookies scoped to public
//! suffixes, evicts least recently used cookies past the configured limits
//! and snapshots persistent cookies to disk between runs.

mod cookie;
mod persist;
mod provider;
mod store;
pub mod suffix;

pub use cookie::{default_path, domain_match, path_match, Cookie, SameSite, SetCookie};
pub use persist::{JarFile, JAR_FILE_NAME, SNAPSHOT_VERSION};
pub use provider::SharedJar;
pub use store::{CookieJar, JarConfig, DEFAULT_MAX_COOKIES, DEFAULT_MAX_COOKIES_PER_DOMAIN};
pub use suffix::{is_public_suffix, registrable_domain};
