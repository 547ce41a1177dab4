// SPDX-License-Identifier: MPL-2.0
//! Per-group exclusion tokens.
//!
//! Each stack group owns one single-permit semaphore. Waiters are woken in
//! the order they started waiting, so token acquisition follows submission
//! order within a group.

use crate::domain::banner::StackGroup;
use std::sync::Arc;
use tokio::sync::{OwnedSemaphorePermit, Semaphore};

/// One-permit asynchronous mutex gating show and hide animations.
#[derive(Debug, Clone)]
pub struct ExclusionToken {
    group: StackGroup,
    permits: Arc<Semaphore>,
}

/// Proof of holding an [`ExclusionToken`]. Dropping it releases the token.
#[derive(Debug)]
pub struct TokenPermit {
    group: StackGroup,
    _permit: OwnedSemaphorePermit,
}

impl ExclusionToken {
    #[must_use]
    pub fn new(group: StackGroup) -> Self {
        Self {
            group,
            permits: Arc::new(Semaphore::new(1)),
        }
    }

    /// Waits until the token is free, then takes it.
    ///
    /// Returns `None` only if the token was closed.
    pub async fn acquire(&self) -> Option<TokenPermit> {
        let permit = Arc::clone(&self.permits).acquire_owned().await.ok()?;
        tracing::trace!(group = %self.group, "token acquired");
        Some(TokenPermit {
            group: self.group,
            _permit: permit,
        })
    }

    /// Returns true when nobody holds the token.
    #[must_use]
    pub fn is_free(&self) -> bool {
        self.permits.available_permits() == 1
    }
}

impl TokenPermit {
    #[must_use]
    pub fn group(&self) -> StackGroup {
        self.group
    }
}

impl Drop for TokenPermit {
    fn drop(&mut self) {
        tracing::trace!(group = %self.group, "token released");
    }
}

/// The two tokens that exist per coordinator.
#[derive(Debug, Clone)]
pub(crate) struct Tokens {
    top: ExclusionToken,
    bottom: ExclusionToken,
}

impl Tokens {
    pub(crate) fn new() -> Self {
        Self {
            top: ExclusionToken::new(StackGroup::Top),
            bottom: ExclusionToken::new(StackGroup::Bottom),
        }
    }

    pub(crate) fn get(&self, group: StackGroup) -> &ExclusionToken {
        match group {
            StackGroup::Top => &self.top,
            StackGroup::Bottom => &self.bottom,
        }
    }
}
