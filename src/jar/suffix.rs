// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Public Suffix List lookups
//!
//! Thin layer over the compiled-in list from the `psl` crate. Inputs are
//! normalized (lowercase, no trailing dot) before lookup.

use psl::Psl;

/// Return the registrable domain (public suffix plus one label) of `host`.
///
/// A host that is itself a public suffix, or that has no registrable part at
/// all (`localhost`), is treated as its own registrable domain.
pub fn registrable_domain(host: &str) -> String {
    let host = normalize(host);
    match psl::List.domain(host.as_bytes()) {
        Some(domain) => String::from_utf8_lossy(domain.as_bytes()).into_owned(),
        None => host,
    }
}

/// Check whether `domain` exactly matches a rule in the public suffix list.
///
/// The implicit `*` rule that makes any unknown TLD a suffix does not count.
pub fn is_public_suffix(domain: &str) -> bool {
    let domain = normalize(domain);
    match psl::List.suffix(domain.as_bytes()) {
        Some(suffix) => suffix.is_known() && suffix.as_bytes() == domain.as_bytes(),
        None => false,
    }
}

/// Partition key used by the jar for a request host.
pub fn jar_key(host: &str, is_ip: bool) -> String {
    if is_ip {
        host.to_string()
    } else {
        registrable_domain(host)
    }
}

fn normalize(name: &str) -> String {
    name.trim_end_matches('.').to_ascii_lowercase()
}
