// SPDX-License-Identifier: MPL-2.0
//! Headless animation driver.
//!
//! Completes each animation once its duration has elapsed on the Tokio
//! clock. Renderers sample intermediate values from the banner's recorded
//! tweens, so this driver is all a GUI needs as well.

use super::{AnimationDriver, AnimationRequest, Completion};

/// Driver that sleeps for the requested duration, then completes.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimedDriver;

impl TimedDriver {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl AnimationDriver for TimedDriver {
    fn animate(&self, request: AnimationRequest, completion: Completion) {
        tracing::trace!(
            banner = %request.banner,
            kind = ?request.kind,
            duration_ms = request.duration.as_millis() as u64,
            "animation started"
        );
        let duration = request.duration;
        tokio::spawn(async move {
            if !duration.is_zero() {
                tokio::time::sleep(duration).await;
            }
            completion.complete();
        });
    }
}
