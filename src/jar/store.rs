// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! In-memory cookie jar
//!
//! Cookies are partitioned by the registrable domain of the host that set
//! them, so a lookup only scans one partition. Every accepted cookie passes
//! the public suffix check first, and both the per-partition and the total
//! counts are kept within [`JarConfig`] limits by evicting the least recently
//! used cookies.

use std::cmp::Reverse;
use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use url::Url;

use super::cookie::{default_path, domain_match, request_host, Cookie, SetCookie};
use super::suffix::{is_public_suffix, jar_key, registrable_domain};

/// RFC 6265 6.1 minimum per-domain capacity
pub const DEFAULT_MAX_COOKIES_PER_DOMAIN: usize = 50;

/// RFC 6265 6.1 minimum total capacity
pub const DEFAULT_MAX_COOKIES: usize = 3000;

/// Upper bound applied to `Max-Age`, 400 days
const MAX_AGE_CAP_SECS: i64 = 400 * 24 * 60 * 60;

/// Jar limits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JarConfig {
    /// Cookies kept per registrable domain
    pub max_cookies_per_domain: usize,
    /// Cookies kept in the whole jar
    pub max_cookies: usize,
}

impl Default for JarConfig {
    fn default() -> Self {
        Self {
            max_cookies_per_domain: DEFAULT_MAX_COOKIES_PER_DOMAIN,
            max_cookies: DEFAULT_MAX_COOKIES,
        }
    }
}

impl JarConfig {
    /// Create a new jar config
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the per-domain limit
    pub fn max_cookies_per_domain(mut self, max: usize) -> Self {
        self.max_cookies_per_domain = max;
        self
    }

    /// Set the total limit
    pub fn max_cookies(mut self, max: usize) -> Self {
        self.max_cookies = max;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CookieKey {
    domain: String,
    path: String,
    name: String,
}

impl CookieKey {
    fn of(cookie: &Cookie) -> Self {
        Self {
            domain: cookie.domain.clone(),
            path: cookie.path.clone(),
            name: cookie.name.clone(),
        }
    }
}

/// Eviction order: least recently accessed, then oldest, then first inserted.
fn eviction_rank(cookie: &Cookie) -> (DateTime<Utc>, DateTime<Utc>, u64) {
    (cookie.last_access, cookie.created, cookie.seq)
}

/// Cookie storage for a single invocation
#[derive(Debug, Clone, Default)]
pub struct CookieJar {
    config: JarConfig,
    partitions: HashMap<String, HashMap<CookieKey, Cookie>>,
    next_seq: u64,
}

impl CookieJar {
    /// Create a new empty cookie jar
    pub fn new(config: JarConfig) -> Self {
        Self {
            config,
            partitions: HashMap::new(),
            next_seq: 0,
        }
    }

    /// Rebuild a jar from previously stored cookies.
    ///
    /// Expired cookies are dropped. Sequence numbers are reassigned in
    /// `(created, seq)` order so they stay dense and unique, and the limits
    /// are enforced as if the cookies had just been inserted.
    pub fn restore(config: JarConfig, cookies: Vec<Cookie>, now: DateTime<Utc>) -> Self {
        let mut jar = Self::new(config);
        let mut cookies: Vec<Cookie> = cookies.into_iter().filter(|c| !c.is_expired(now)).collect();
        cookies.sort_by_key(|c| (c.created, c.seq));

        for mut cookie in cookies {
            cookie.seq = jar.bump_seq();
            let is_ip = cookie.domain.parse::<std::net::IpAddr>().is_ok();
            let key = jar_key(&cookie.domain, is_ip);
            jar.partitions
                .entry(key)
                .or_default()
                .insert(CookieKey::of(&cookie), cookie);
        }

        let keys: Vec<String> = jar.partitions.keys().cloned().collect();
        for key in keys {
            jar.evict_partition(&key);
        }
        jar.evict_global();
        jar
    }

    /// The limits this jar enforces
    pub fn config(&self) -> JarConfig {
        self.config
    }

    /// Get all cookies to send to `url`
    pub fn cookies(&mut self, url: &Url) -> Vec<Cookie> {
        self.cookies_at(url, Utc::now())
    }

    /// Get all cookies to send to `url`, as of `now`.
    ///
    /// Expired cookies anywhere in the jar are removed. Matching cookies have
    /// their last-access time updated. The result is ordered longest path
    /// first, then by creation time, then by insertion order.
    pub fn cookies_at(&mut self, url: &Url, now: DateTime<Utc>) -> Vec<Cookie> {
        self.remove_expired(now);

        let Some((host, is_ip)) = request_host(url) else {
            return Vec::new();
        };
        let secure = matches!(url.scheme(), "https" | "wss");
        let path = if url.path().is_empty() { "/" } else { url.path() };

        let Some(partition) = self.partitions.get_mut(&jar_key(&host, is_ip)) else {
            return Vec::new();
        };

        let mut result: Vec<Cookie> = partition
            .values_mut()
            .filter(|c| c.matches(&host, is_ip, path, secure))
            .map(|c| {
                c.last_access = now;
                c.clone()
            })
            .collect();

        result.sort_by_key(|c| (Reverse(c.path.len()), c.created, c.seq));
        result
    }

    /// Get Cookie header value for a URL
    pub fn header_value(&mut self, url: &Url) -> Option<String> {
        let cookies = self.cookies(url);
        if cookies.is_empty() {
            return None;
        }

        Some(
            cookies
                .iter()
                .map(|c| c.to_header_value())
                .collect::<Vec<_>>()
                .join("; "),
        )
    }

    /// Store cookies received from `url`
    pub fn set_cookies(&mut self, url: &Url, cookies: Vec<SetCookie>) {
        self.set_cookies_at(url, cookies, Utc::now())
    }

    /// Store cookies received from `url`, as of `now`.
    ///
    /// Cookies whose domain does not cover the request host, or that target a
    /// public suffix, are dropped. Cookies that are already expired delete any
    /// stored cookie with the same domain, path and name.
    pub fn set_cookies_at(&mut self, url: &Url, cookies: Vec<SetCookie>, now: DateTime<Utc>) {
        let Some((host, is_ip)) = request_host(url) else {
            return;
        };
        let key = jar_key(&host, is_ip);
        let mut inserted = false;

        for set in cookies {
            let Some((domain, host_only)) = resolve_domain(&set, &host, is_ip) else {
                tracing::trace!(cookie = %set.name, host = %host, "rejected cookie domain");
                continue;
            };
            let path = match set.path.as_deref() {
                Some(p) if p.starts_with('/') => p.to_string(),
                _ => default_path(url.path()),
            };
            // Max-Age wins over Expires; a past expiry or Max-Age<=0 is a deletion
            let (expires, delete) = match (set.max_age, set.expires) {
                (Some(secs), _) => (
                    Some(now + Duration::seconds(secs.clamp(0, MAX_AGE_CAP_SECS))),
                    secs <= 0,
                ),
                (None, Some(at)) => (Some(at), at <= now),
                (None, None) => (None, false),
            };
            let cookie_key = CookieKey {
                domain,
                path,
                name: set.name,
            };

            if delete {
                if let Some(partition) = self.partitions.get_mut(&key) {
                    partition.remove(&cookie_key);
                }
                continue;
            }

            let existing = self
                .partitions
                .get(&key)
                .and_then(|p| p.get(&cookie_key))
                .map(|c| (c.created, c.seq));
            let (created, seq) = match existing {
                Some(kept) => kept,
                None => (now, self.bump_seq()),
            };

            let cookie = Cookie {
                name: cookie_key.name.clone(),
                value: set.value,
                domain: cookie_key.domain.clone(),
                host_only,
                path: cookie_key.path.clone(),
                secure: set.secure,
                http_only: set.http_only,
                same_site: set.same_site,
                expires,
                created,
                last_access: now,
                seq,
            };
            self.partitions
                .entry(key.clone())
                .or_default()
                .insert(cookie_key, cookie);
            inserted = true;
        }

        if self.partitions.get(&key).map_or(false, |p| p.is_empty()) {
            self.partitions.remove(&key);
        }
        if inserted {
            self.remove_expired(now);
            self.evict_partition(&key);
            self.evict_global();
        }
    }

    /// Iterate over every stored cookie, in no particular order
    pub fn iter(&self) -> impl Iterator<Item = &Cookie> {
        self.partitions.values().flat_map(|p| p.values())
    }

    /// Non-expired cookies that carry an explicit expiry
    pub fn persistent_cookies(&self, now: DateTime<Utc>) -> Vec<Cookie> {
        self.iter()
            .filter(|c| c.is_persistent() && !c.is_expired(now))
            .cloned()
            .collect()
    }

    /// Get total cookie count
    pub fn len(&self) -> usize {
        self.partitions.values().map(|p| p.len()).sum()
    }

    /// Check if jar is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn bump_seq(&mut self) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        seq
    }

    fn remove_expired(&mut self, now: DateTime<Utc>) {
        for partition in self.partitions.values_mut() {
            partition.retain(|_, c| !c.is_expired(now));
        }
        self.partitions.retain(|_, p| !p.is_empty());
    }

    fn evict_partition(&mut self, key: &str) {
        let max = self.config.max_cookies_per_domain;
        let Some(partition) = self.partitions.get_mut(key) else {
            return;
        };
        if partition.len() <= max {
            return;
        }

        let mut ranked: Vec<(CookieKey, (DateTime<Utc>, DateTime<Utc>, u64))> = partition
            .iter()
            .map(|(k, c)| (k.clone(), eviction_rank(c)))
            .collect();
        ranked.sort_by_key(|(_, rank)| *rank);

        let excess = partition.len() - max;
        for (cookie_key, _) in ranked.into_iter().take(excess) {
            partition.remove(&cookie_key);
        }
        tracing::debug!(domain = %key, evicted = excess, "evicted cookies over per-domain limit");

        if partition.is_empty() {
            self.partitions.remove(key);
        }
    }

    fn evict_global(&mut self) {
        let total = self.len();
        let max = self.config.max_cookies;
        if total <= max {
            return;
        }

        let mut ranked: Vec<(String, CookieKey, (DateTime<Utc>, DateTime<Utc>, u64))> = self
            .partitions
            .iter()
            .flat_map(|(pk, p)| {
                p.iter()
                    .map(move |(k, c)| (pk.clone(), k.clone(), eviction_rank(c)))
            })
            .collect();
        ranked.sort_by_key(|(_, _, rank)| *rank);

        let excess = total - max;
        for (partition_key, cookie_key, _) in ranked.into_iter().take(excess) {
            if let Some(partition) = self.partitions.get_mut(&partition_key) {
                partition.remove(&cookie_key);
            }
        }
        self.partitions.retain(|_, p| !p.is_empty());
        tracing::debug!(evicted = excess, "evicted cookies over jar limit");
    }
}

/// Decide which domain a cookie is stored under and whether it is host-only.
fn resolve_domain(set: &SetCookie, host: &str, is_ip: bool) -> Option<(String, bool)> {
    let attr = set
        .domain
        .as_deref()
        .map(|d| d.trim_start_matches('.').trim_end_matches('.').to_ascii_lowercase())
        .filter(|d| !d.is_empty());

    let Some(domain) = attr else {
        return Some((host.to_string(), true));
    };

    if is_ip || is_public_suffix(&domain) {
        // Only acceptable as the exact host, which makes it host-only
        return (domain == host).then(|| (host.to_string(), true));
    }
    if !domain_match(host, &domain) {
        return None;
    }
    // A domain above the host's registrable domain would land in a partition
    // the host never reads from
    if registrable_domain(&domain) != jar_key(host, false) {
        return None;
    }
    Some((domain, false))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap()
    }

    fn at(secs: i64) -> DateTime<Utc> {
        t0() + Duration::seconds(secs)
    }

    fn names(cookies: &[Cookie]) -> Vec<&str> {
        cookies.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn test_cookie_jar() {
        let mut jar = CookieJar::default();
        let u = url("https://example.com/path");

        jar.set_cookies_at(&u, vec![SetCookie::new("test", "value")], t0());
        assert_eq!(jar.len(), 1);

        let cookies = jar.cookies_at(&u, at(1));
        assert_eq!(cookies.len(), 1);
        assert_eq!(cookies[0].name, "test");
        assert!(cookies[0].host_only);
        assert_eq!(cookies[0].path, "/");
        assert_eq!(cookies[0].last_access, at(1));
    }

    #[test]
    fn test_domain_cookie_matches_subdomains() {
        let mut jar = CookieJar::default();
        jar.set_cookies_at(
            &url("https://www.example.com/"),
            vec![SetCookie::new("d", "1").domain(".Example.com")],
            t0(),
        );

        assert_eq!(jar.cookies_at(&url("https://example.com/"), t0()).len(), 1);
        assert_eq!(jar.cookies_at(&url("https://api.example.com/"), t0()).len(), 1);
        assert!(jar.cookies_at(&url("https://example.org/"), t0()).is_empty());
    }

    #[test]
    fn test_host_only_cookie_matches_exact_host() {
        let mut jar = CookieJar::default();
        jar.set_cookies_at(&url("https://example.com/"), vec![SetCookie::new("h", "1")], t0());

        assert_eq!(jar.cookies_at(&url("https://example.com/"), t0()).len(), 1);
        assert!(jar.cookies_at(&url("https://www.example.com/"), t0()).is_empty());
    }

    #[test]
    fn test_rejects_foreign_domain() {
        let mut jar = CookieJar::default();
        jar.set_cookies_at(
            &url("https://example.com/"),
            vec![
                SetCookie::new("a", "1").domain("other.com"),
                SetCookie::new("b", "1").domain("www.example.com"),
            ],
            t0(),
        );
        assert!(jar.is_empty());
    }

    #[test]
    fn test_rejects_public_suffix_domain() {
        let mut jar = CookieJar::default();
        jar.set_cookies_at(
            &url("https://www.example.co.uk/"),
            vec![SetCookie::new("a", "1").domain(".co.uk")],
            t0(),
        );
        assert!(jar.is_empty());

        jar.set_cookies_at(
            &url("https://example.com/"),
            vec![SetCookie::new("b", "1").domain("com")],
            t0(),
        );
        assert!(jar.is_empty());
    }

    #[test]
    fn test_public_suffix_host_gets_host_only_cookie() {
        let mut jar = CookieJar::default();
        jar.set_cookies_at(
            &url("https://co.uk/"),
            vec![SetCookie::new("a", "1").domain("co.uk")],
            t0(),
        );
        let cookies = jar.cookies_at(&url("https://co.uk/"), t0());
        assert_eq!(cookies.len(), 1);
        assert!(cookies[0].host_only);
        assert!(jar.cookies_at(&url("https://example.co.uk/"), t0()).is_empty());
    }

    #[test]
    fn test_ip_host_domain_attribute() {
        let mut jar = CookieJar::default();
        let u = url("http://127.0.0.1:8080/");
        jar.set_cookies_at(
            &u,
            vec![
                SetCookie::new("ok", "1").domain("127.0.0.1"),
                SetCookie::new("bad", "1").domain("0.0.1"),
            ],
            t0(),
        );
        assert_eq!(names(&jar.cookies_at(&u, t0())), vec!["ok"]);
    }

    #[test]
    fn test_path_and_secure_matching() {
        let mut jar = CookieJar::default();
        let u = url("https://example.com/account/login");
        jar.set_cookies_at(
            &u,
            vec![
                SetCookie::new("dir", "1"),
                SetCookie::new("docs", "1").path("/docs"),
                SetCookie::new("sec", "1").path("/").secure(true),
            ],
            t0(),
        );

        assert_eq!(
            names(&jar.cookies_at(&url("https://example.com/account/settings"), t0())),
            vec!["dir", "sec"]
        );
        assert_eq!(
            names(&jar.cookies_at(&url("http://example.com/account"), t0())),
            vec!["dir"]
        );
        assert_eq!(
            names(&jar.cookies_at(&url("https://example.com/docs/intro"), t0())),
            vec!["docs", "sec"]
        );
        assert!(jar.cookies_at(&url("http://example.com/"), t0()).is_empty());
    }

    #[test]
    fn test_ordering_path_then_creation_then_sequence() {
        let mut jar = CookieJar::default();
        let u = url("https://example.com/");
        jar.set_cookies_at(&u, vec![SetCookie::new("late", "1").path("/")], at(10));
        jar.set_cookies_at(
            &u,
            vec![
                SetCookie::new("first", "1").path("/"),
                SetCookie::new("second", "1").path("/"),
            ],
            at(5),
        );
        jar.set_cookies_at(&u, vec![SetCookie::new("deep", "1").path("/a/b")], at(20));

        let cookies = jar.cookies_at(&url("https://example.com/a/b/c"), at(30));
        assert_eq!(names(&cookies), vec!["deep", "first", "second", "late"]);
    }

    #[test]
    fn test_upsert_keeps_creation_time() {
        let mut jar = CookieJar::default();
        let u = url("https://example.com/");
        let set = SetCookie::new("sid", "1").max_age(3600);

        jar.set_cookies_at(&u, vec![set.clone()], t0());
        let once: Vec<Cookie> = jar.iter().cloned().collect();

        jar.set_cookies_at(&u, vec![set], at(60));
        let twice: Vec<Cookie> = jar.iter().cloned().collect();

        assert_eq!(twice.len(), 1);
        assert_eq!(twice[0].created, once[0].created);
        assert_eq!(twice[0].seq, once[0].seq);
        assert_eq!(twice[0].value, once[0].value);
        assert_eq!(twice[0].last_access, at(60));

        jar.set_cookies_at(&u, vec![SetCookie::new("sid", "2").max_age(3600)], at(120));
        let updated = jar.cookies_at(&u, at(121));
        assert_eq!(updated[0].value, "2");
        assert_eq!(updated[0].created, t0());
    }

    #[test]
    fn test_max_age_zero_deletes() {
        let mut jar = CookieJar::default();
        let u = url("https://example.com/");
        jar.set_cookies_at(&u, vec![SetCookie::new("sid", "1"), SetCookie::new("keep", "1")], t0());

        jar.set_cookies_at(&u, vec![SetCookie::new("sid", "").max_age(0)], at(1));
        assert_eq!(names(&jar.cookies_at(&u, at(2))), vec!["keep"]);

        jar.set_cookies_at(&u, vec![SetCookie::new("keep", "").expires(at(-100))], at(3));
        assert!(jar.is_empty());
    }

    #[test]
    fn test_expired_cookies_are_purged_on_lookup() {
        let mut jar = CookieJar::default();
        jar.set_cookies_at(
            &url("https://example.com/"),
            vec![SetCookie::new("short", "1").max_age(10)],
            t0(),
        );
        jar.set_cookies_at(
            &url("https://other.org/"),
            vec![SetCookie::new("short", "1").max_age(10)],
            t0(),
        );
        assert_eq!(jar.len(), 2);

        assert!(jar.cookies_at(&url("https://example.com/"), at(11)).is_empty());
        assert!(jar.is_empty());
    }

    #[test]
    fn test_per_domain_eviction_is_lru_and_scoped() {
        let config = JarConfig::new().max_cookies_per_domain(3);
        let mut jar = CookieJar::new(config);
        let a = url("https://a.example.com/");
        let other = url("https://other.org/");

        jar.set_cookies_at(&other, vec![SetCookie::new("o", "1")], t0());
        for (i, name) in ["c0", "c1", "c2"].iter().enumerate() {
            jar.set_cookies_at(&a, vec![SetCookie::new(*name, "1")], at(i as i64 + 1));
        }
        // c0 was sent most recently, so c1 becomes the oldest access
        jar.set_cookies_at(&a, vec![SetCookie::new("c0", "1")], at(10));
        jar.set_cookies_at(&a, vec![SetCookie::new("c3", "1")], at(11));

        let mut left: Vec<String> = names(&jar.cookies_at(&a, at(12)))
            .into_iter()
            .map(String::from)
            .collect();
        left.sort();
        assert_eq!(left, vec!["c0", "c2", "c3"]);
        assert_eq!(names(&jar.cookies_at(&other, at(12))), vec!["o"]);
    }

    #[test]
    fn test_global_eviction() {
        let config = JarConfig::new().max_cookies(2);
        let mut jar = CookieJar::new(config);

        jar.set_cookies_at(&url("https://one.com/"), vec![SetCookie::new("a", "1")], at(1));
        jar.set_cookies_at(&url("https://two.com/"), vec![SetCookie::new("b", "1")], at(2));
        jar.set_cookies_at(&url("https://three.com/"), vec![SetCookie::new("c", "1")], at(3));

        assert_eq!(jar.len(), 2);
        assert!(jar.cookies_at(&url("https://one.com/"), at(4)).is_empty());
        assert_eq!(jar.cookies_at(&url("https://three.com/"), at(4)).len(), 1);
    }

    #[test]
    fn test_restore_resequences_and_drops_expired() {
        let cookie = |name: &str, seq: u64, created: i64, expires: Option<i64>| Cookie {
            name: name.to_string(),
            value: "v".to_string(),
            domain: "example.com".to_string(),
            host_only: true,
            path: "/".to_string(),
            secure: false,
            http_only: false,
            same_site: Default::default(),
            expires: expires.map(at),
            created: at(created),
            last_access: at(created),
            seq,
        };
        let jar = CookieJar::restore(
            JarConfig::default(),
            vec![
                cookie("b", 9, 2, Some(100)),
                cookie("a", 40, 1, Some(100)),
                cookie("gone", 1, 0, Some(5)),
            ],
            at(10),
        );

        let mut restored: Vec<(String, u64)> =
            jar.iter().map(|c| (c.name.clone(), c.seq)).collect();
        restored.sort();
        assert_eq!(restored, vec![("a".to_string(), 0), ("b".to_string(), 1)]);
    }

    fn stored(name: &str, domain: &str, created: i64, last_access: i64) -> Cookie {
        Cookie {
            name: name.to_string(),
            value: "v".to_string(),
            domain: domain.to_string(),
            host_only: true,
            path: "/".to_string(),
            secure: false,
            http_only: false,
            same_site: Default::default(),
            expires: Some(at(1000)),
            created: at(created),
            last_access: at(last_access),
            seq: 0,
        }
    }

    fn sorted_names(jar: &CookieJar) -> Vec<String> {
        let mut names: Vec<String> = jar.iter().map(|c| c.name.clone()).collect();
        names.sort();
        names
    }

    #[test]
    fn test_restore_applies_per_domain_limit() {
        let config = JarConfig::new().max_cookies_per_domain(2);
        let jar = CookieJar::restore(
            config,
            vec![
                // Created last but read longest ago
                stored("stale", "example.com", 3, 1),
                stored("fresh", "example.com", 1, 6),
                stored("warm", "example.com", 2, 4),
                stored("o1", "other.org", 0, 0),
                stored("o2", "other.org", 0, 0),
            ],
            at(10),
        );

        assert_eq!(sorted_names(&jar), vec!["fresh", "o1", "o2", "warm"]);
    }

    #[test]
    fn test_restore_applies_jar_limit() {
        let config = JarConfig::new().max_cookies(3);
        let jar = CookieJar::restore(
            config,
            vec![
                stored("a", "one.com", 0, 5),
                stored("b", "two.com", 1, 2),
                stored("c", "three.com", 2, 8),
                stored("d", "one.com", 3, 1),
            ],
            at(10),
        );

        assert_eq!(jar.len(), 3);
        assert_eq!(sorted_names(&jar), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_rejects_domain_above_registrable_domain() {
        let mut jar = CookieJar::default();
        let setter = url("http://api.localhost/");
        jar.set_cookies_at(
            &setter,
            vec![
                SetCookie::new("above", "1").domain("localhost").max_age(3600),
                SetCookie::new("own", "1").domain("api.localhost").max_age(3600),
            ],
            t0(),
        );
        assert_eq!(sorted_names(&jar), vec!["own"]);

        let cookies = jar.iter().cloned().collect();
        let mut restored = CookieJar::restore(JarConfig::default(), cookies, t0());
        assert_eq!(names(&restored.cookies_at(&setter, at(1))), vec!["own"]);
        assert!(restored.cookies_at(&url("http://web.localhost/"), at(1)).is_empty());
    }
}
