// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Redirect policy
//!
//! [`decide`] holds the whole policy as a pure function of the hop count.
//! [`RedirectPolicy::to_reqwest`] wires it into the client.

use reqwest::redirect::{Attempt, Policy};
use thiserror::Error;

/// Default number of redirects to follow
pub const DEFAULT_MAX_REDIRECTS: usize = 10;

/// What to do with a redirect response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectAction {
    /// Follow the redirect
    Proceed,
    /// Stop and return the redirect response as the final response
    StopAccept,
    /// Stop and fail the request
    StopFail,
}

/// Raised through reqwest when the limit is exceeded and failing is enabled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("stopped after {limit} redirects")]
pub struct RedirectLimitExceeded {
    /// Configured maximum
    pub limit: usize,
}

/// Decide whether to follow a redirect.
///
/// `hops` is the number of requests already made in the chain, so it is 1
/// for the first redirect response.
pub fn decide(hops: usize, limit: usize, fail_on_exceed: bool) -> RedirectAction {
    if hops <= limit {
        RedirectAction::Proceed
    } else if fail_on_exceed {
        RedirectAction::StopFail
    } else {
        RedirectAction::StopAccept
    }
}

/// Redirect limit and overflow behaviour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RedirectPolicy {
    /// Maximum redirects to follow
    pub max_redirects: usize,
    /// Fail instead of returning the last response when the limit is hit
    pub fail_on_exceed: bool,
}

impl Default for RedirectPolicy {
    fn default() -> Self {
        Self {
            max_redirects: DEFAULT_MAX_REDIRECTS,
            fail_on_exceed: false,
        }
    }
}

impl RedirectPolicy {
    /// Create a policy
    pub fn new(max_redirects: usize, fail_on_exceed: bool) -> Self {
        Self {
            max_redirects,
            fail_on_exceed,
        }
    }

    /// Decide for a chain that has made `hops` requests so far
    pub fn decide(&self, hops: usize) -> RedirectAction {
        decide(hops, self.max_redirects, self.fail_on_exceed)
    }

    /// Build the reqwest policy that consults [`decide`] on every hop
    pub fn to_reqwest(self) -> Policy {
        Policy::custom(move |attempt: Attempt<'_>| {
            let hops = attempt.previous().len();
            let action = self.decide(hops);
            tracing::debug!(
                hops,
                status = attempt.status().as_u16(),
                to = %attempt.url(),
                ?action,
                "redirect"
            );
            match action {
                RedirectAction::Proceed => attempt.follow(),
                RedirectAction::StopAccept => attempt.stop(),
                RedirectAction::StopFail => attempt.error(RedirectLimitExceeded {
                    limit: self.max_redirects,
                }),
            }
        })
    }
}
