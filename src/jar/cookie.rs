// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Cookie types, `Set-Cookie` parsing and RFC 6265 matching rules

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use url::{Host, Url};

/// A cookie as kept by the jar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cookie {
    /// Cookie name
    pub name: String,
    /// Cookie value
    pub value: String,
    /// Domain the cookie belongs to, lowercase without a leading dot
    pub domain: String,
    /// Only sent to `domain` itself, never to its subdomains
    #[serde(default)]
    pub host_only: bool,
    /// Path the cookie is valid for
    pub path: String,
    /// Secure flag (HTTPS only)
    #[serde(default)]
    pub secure: bool,
    /// HttpOnly flag
    #[serde(default)]
    pub http_only: bool,
    /// SameSite attribute
    #[serde(default)]
    pub same_site: SameSite,
    /// Expiration time (None = session cookie)
    #[serde(default)]
    pub expires: Option<DateTime<Utc>>,
    /// When the cookie was first stored
    pub created: DateTime<Utc>,
    /// When the cookie was last stored or sent
    pub last_access: DateTime<Utc>,
    /// Insertion order within the jar, breaks creation-time ties
    #[serde(default)]
    pub seq: u64,
}

/// SameSite cookie attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SameSite {
    /// Cookie sent with all requests
    #[default]
    None,
    /// Cookie sent with same-site and top-level navigations
    Lax,
    /// Cookie only sent with same-site requests
    Strict,
}

impl SameSite {
    fn parse(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "strict" => SameSite::Strict,
            "lax" => SameSite::Lax,
            _ => SameSite::None,
        }
    }
}

impl Cookie {
    /// Session cookies are never written to disk
    pub fn is_persistent(&self) -> bool {
        self.expires.is_some()
    }

    /// Check if the cookie has expired at `now`
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires.map_or(false, |exp| exp <= now)
    }

    /// Check if the cookie should be sent to `host` / `path` over a channel
    /// that is (or is not) secure.
    pub fn matches(&self, host: &str, is_ip: bool, path: &str, secure: bool) -> bool {
        let domain_ok = if self.host_only {
            host == self.domain
        } else {
            !is_ip && domain_match(host, &self.domain)
        };
        domain_ok && path_match(path, &self.path) && (!self.secure || secure)
    }

    /// Convert to cookie header format
    pub fn to_header_value(&self) -> String {
        format!("{}={}", self.name, self.value)
    }
}

/// A parsed `Set-Cookie` header, attributes as the server sent them
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SetCookie {
    /// Cookie name
    pub name: String,
    /// Cookie value
    pub value: String,
    /// `Domain` attribute
    pub domain: Option<String>,
    /// `Path` attribute
    pub path: Option<String>,
    /// `Expires` attribute
    pub expires: Option<DateTime<Utc>>,
    /// `Max-Age` attribute in seconds
    pub max_age: Option<i64>,
    /// `Secure` attribute
    pub secure: bool,
    /// `HttpOnly` attribute
    pub http_only: bool,
    /// `SameSite` attribute
    pub same_site: SameSite,
}

impl SetCookie {
    /// Create a new cookie with no attributes
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            ..Default::default()
        }
    }

    /// Set the domain attribute
    pub fn domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    /// Set the path attribute
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Set secure flag
    pub fn secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    /// Set http_only flag
    pub fn http_only(mut self, http_only: bool) -> Self {
        self.http_only = http_only;
        self
    }

    /// Set same_site attribute
    pub fn same_site(mut self, same_site: SameSite) -> Self {
        self.same_site = same_site;
        self
    }

    /// Set expiration time
    pub fn expires(mut self, expires: DateTime<Utc>) -> Self {
        self.expires = Some(expires);
        self
    }

    /// Set max-age in seconds
    pub fn max_age(mut self, secs: i64) -> Self {
        self.max_age = Some(secs);
        self
    }

    /// Parse a Set-Cookie header value.
    ///
    /// Returns `None` when there is no `name=value` pair or the name is empty.
    /// Unknown or malformed attributes are skipped.
    pub fn parse(header: &str) -> Option<Self> {
        let mut parts = header.split(';');
        let first = parts.next()?.trim();

        let (name, value) = first.split_once('=')?;
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        let value = value.trim().trim_matches('"');
        let mut cookie = SetCookie::new(name, value);

        for part in parts {
            let part = part.trim();
            let (attr, val) = match part.split_once('=') {
                Some((attr, val)) => (attr.trim(), val.trim()),
                None => (part, ""),
            };
            match attr.to_ascii_lowercase().as_str() {
                "domain" if !val.is_empty() => cookie.domain = Some(val.to_string()),
                "path" => cookie.path = Some(val.to_string()),
                "expires" => {
                    if let Some(dt) = parse_cookie_date(val) {
                        cookie.expires = Some(dt);
                    }
                }
                "max-age" => {
                    if let Ok(secs) = val.parse::<i64>() {
                        cookie.max_age = Some(secs);
                    }
                }
                "samesite" => cookie.same_site = SameSite::parse(val),
                "secure" => cookie.secure = true,
                "httponly" => cookie.http_only = true,
                _ => {}
            }
        }

        Some(cookie)
    }
}

/// Parse the date formats servers actually send in `Expires`.
fn parse_cookie_date(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc2822(value) {
        return Some(dt.with_timezone(&Utc));
    }
    // RFC 850 and the dashed variant some servers emit
    for format in ["%A, %d-%b-%y %H:%M:%S GMT", "%a, %d-%b-%Y %H:%M:%S GMT"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Some(naive.and_utc());
        }
    }
    None
}

/// Request host in canonical form plus whether it is an IP address.
pub fn request_host(url: &Url) -> Option<(String, bool)> {
    match url.host()? {
        Host::Domain(domain) => {
            let domain = domain.trim_end_matches('.').to_ascii_lowercase();
            (!domain.is_empty()).then_some((domain, false))
        }
        Host::Ipv4(addr) => Some((addr.to_string(), true)),
        Host::Ipv6(addr) => Some((addr.to_string(), true)),
    }
}

/// RFC 6265 5.1.3: `host` equals `domain` or is a subdomain of it.
pub fn domain_match(host: &str, domain: &str) -> bool {
    if host == domain {
        return true;
    }
    host.len() > domain.len()
        && host.ends_with(domain)
        && host.as_bytes()[host.len() - domain.len() - 1] == b'.'
}

/// RFC 6265 5.1.4 path-match.
pub fn path_match(request_path: &str, cookie_path: &str) -> bool {
    if request_path == cookie_path {
        return true;
    }
    request_path.starts_with(cookie_path)
        && (cookie_path.ends_with('/') || request_path[cookie_path.len()..].starts_with('/'))
}

/// RFC 6265 5.1.4 default-path: the directory of the request path.
pub fn default_path(request_path: &str) -> String {
    if !request_path.starts_with('/') {
        return "/".to_string();
    }
    match request_path.rfind('/') {
        Some(0) | None => "/".to_string(),
        Some(idx) => request_path[..idx].to_string(),
    }
}
