// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Command line interface

use std::path::PathBuf;
use std::time::Duration;

use clap::{ArgAction, Parser};
use reqwest::header::{HeaderName, HeaderValue};
use url::Url;

use crate::config::{default_jar_dir, RunConfig};
use crate::error::{Error, Result};
use crate::http::{parse_header, parse_method, DEFAULT_MAX_REDIRECTS};
use crate::jar::{JarConfig, DEFAULT_MAX_COOKIES, DEFAULT_MAX_COOKIES_PER_DOMAIN};

/// A `-h key:value` argument
#[derive(Debug, Clone)]
pub struct HeaderArg {
    pub name: HeaderName,
    pub value: HeaderValue,
}

fn header_arg(s: &str) -> std::result::Result<HeaderArg, String> {
    parse_header(s)
        .map(|(name, value)| HeaderArg { name, value })
        .map_err(|e| e.to_string())
}

fn duration_arg(s: &str) -> std::result::Result<Duration, String> {
    parse_duration(s)
}

/// Issue one HTTP request and write the response body to stdout
#[derive(Debug, Parser)]
#[command(name = "hreq", version, disable_help_flag = true)]
pub struct Cli {
    /// HTTP method
    #[arg(short = 'm', value_name = "METHOD", default_value = "get")]
    pub method: String,

    /// Request body file
    #[arg(short = 'f', value_name = "FILE")]
    pub body_file: Option<PathBuf>,

    /// Write status and headers to stderr
    #[arg(short = 'v')]
    pub verbose: bool,

    /// Timeout for the whole request, e.g. 500ms, 10s, 1m30s (0 means no timeout)
    #[arg(short = 't', value_name = "DURATION", default_value = "0", value_parser = duration_arg)]
    pub timeout: Duration,

    /// Number of redirects to follow
    #[arg(short = 'r', value_name = "N", default_value_t = DEFAULT_MAX_REDIRECTS)]
    pub max_redirects: usize,

    /// Exit with error if the redirection limit is exceeded
    #[arg(short = 'e')]
    pub fail_on_exceed: bool,

    /// Cookie jar directory, ~/.hreq-cookies by default (empty string for an in-memory jar)
    #[arg(short = 'j', value_name = "DIR")]
    pub jar: Option<String>,

    /// HTTP header, repeatable
    #[arg(
        short = 'h',
        value_name = "KEY:VALUE",
        value_parser = header_arg,
        action = ArgAction::Append
    )]
    pub headers: Vec<HeaderArg>,

    /// Cookies kept per registrable domain
    #[arg(long, value_name = "N", default_value_t = DEFAULT_MAX_COOKIES_PER_DOMAIN)]
    pub max_cookies_per_domain: usize,

    /// Cookies kept in the whole jar
    #[arg(long, value_name = "N", default_value_t = DEFAULT_MAX_COOKIES)]
    pub max_cookies: usize,

    /// Print help
    #[arg(long, action = ArgAction::Help)]
    pub help: Option<bool>,

    /// URL to request
    pub url: Url,
}

impl Cli {
    /// Turn parsed arguments into a run configuration
    pub fn into_config(self) -> Result<RunConfig> {
        let jar_dir = match self.jar {
            Some(dir) => PathBuf::from(dir),
            None => default_jar_dir().ok_or_else(|| {
                Error::Config("cannot determine home directory for cookie jar".into())
            })?,
        };

        let mut config = RunConfig::new(self.url)
            .method(parse_method(&self.method)?)
            .verbose(self.verbose)
            .timeout(self.timeout)
            .redirects(self.max_redirects, self.fail_on_exceed)
            .jar_dir(jar_dir)
            .jar_limits(
                JarConfig::new()
                    .max_cookies_per_domain(self.max_cookies_per_domain)
                    .max_cookies(self.max_cookies),
            );
        for HeaderArg { name, value } in self.headers {
            config = config.header(name, value);
        }
        if let Some(path) = self.body_file {
            config = config.body_file(path);
        }
        Ok(config)
    }
}

/// Parse a Go-style duration: `300ms`, `1.5s`, `2m`, `1h30m`, or `0`.
///
/// A bare number is taken as seconds.
pub fn parse_duration(s: &str) -> std::result::Result<Duration, String> {
    let s = s.trim();
    if s.is_empty() {
        return Err("empty duration".to_string());
    }
    if let Ok(secs) = s.parse::<f64>() {
        return nanos(secs * 1e9, s);
    }

    let mut total = 0f64;
    let mut rest = s;
    while !rest.is_empty() {
        let digits = rest
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .ok_or_else(|| format!("missing unit in duration {:?}", s))?;
        let value: f64 = rest[..digits]
            .parse()
            .map_err(|_| format!("invalid duration {:?}", s))?;
        rest = &rest[digits..];

        let unit_len = rest
            .find(|c: char| c.is_ascii_digit() || c == '.')
            .unwrap_or(rest.len());
        let scale = match &rest[..unit_len] {
            "ns" => 1.0,
            "us" | "µs" => 1e3,
            "ms" => 1e6,
            "s" => 1e9,
            "m" => 60e9,
            "h" => 3600e9,
            unit => return Err(format!("unknown unit {:?} in duration {:?}", unit, s)),
        };
        total += value * scale;
        rest = &rest[unit_len..];
    }
    nanos(total, s)
}

fn nanos(total: f64, original: &str) -> std::result::Result<Duration, String> {
    if !total.is_finite() || total < 0.0 || total > u64::MAX as f64 {
        return Err(format!("invalid duration {:?}", original));
    }
    Ok(Duration::from_nanos(total.round() as u64))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_duration() {
        assert_eq!(parse_duration("0").unwrap(), Duration::ZERO);
        assert_eq!(parse_duration("5").unwrap(), Duration::from_secs(5));
        assert_eq!(parse_duration("500ms").unwrap(), Duration::from_millis(500));
        assert_eq!(parse_duration("1.5s").unwrap(), Duration::from_millis(1500));
        assert_eq!(parse_duration("1m30s").unwrap(), Duration::from_secs(90));
        assert_eq!(parse_duration("2h").unwrap(), Duration::from_secs(7200));
        assert!(parse_duration("10x").is_err());
        assert!(parse_duration("-1s").is_err());
        assert!(parse_duration("").is_err());
    }

    #[test]
    fn test_cli_flags() {
        let cli = Cli::try_parse_from([
            "hreq",
            "-m",
            "post",
            "-h",
            "Accept: application/json",
            "-h",
            "X-Trace:1",
            "-r",
            "3",
            "-e",
            "-t",
            "2s",
            "-j",
            "",
            "-v",
            "https://example.com/api",
        ])
        .unwrap();
        let config = cli.into_config().unwrap();

        assert_eq!(config.method, reqwest::Method::POST);
        assert_eq!(config.headers["accept"].to_str().unwrap(), "application/json");
        assert_eq!(config.headers["x-trace"].to_str().unwrap(), "1");
        assert_eq!(config.max_redirects, 3);
        assert!(config.fail_on_exceed);
        assert!(config.verbose);
        assert_eq!(config.timeout, Some(Duration::from_secs(2)));
        assert_eq!(config.jar_dir, None);
        assert_eq!(config.url.as_str(), "https://example.com/api");
    }

    #[test]
    fn test_cli_defaults() {
        let cli =
            Cli::try_parse_from(["hreq", "-j", "/tmp/jar", "http://localhost:8080/"]).unwrap();
        let config = cli.into_config().unwrap();

        assert_eq!(config.method, reqwest::Method::GET);
        assert_eq!(config.max_redirects, 10);
        assert!(!config.fail_on_exceed);
        assert_eq!(config.timeout, None);
        assert_eq!(config.jar_dir, Some(PathBuf::from("/tmp/jar")));
        assert_eq!(config.jar, JarConfig::default());
    }

    #[test]
    fn test_cli_rejects_bad_input() {
        assert!(Cli::try_parse_from(["hreq"]).is_err());
        assert!(Cli::try_parse_from(["hreq", "-h", "nocolon", "https://example.com"]).is_err());
        assert!(Cli::try_parse_from(["hreq", "https://a.com", "https://b.com"]).is_err());
    }
}
