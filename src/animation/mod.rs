// SPDX-License-Identifier: MPL-2.0
//! Animation driver contract.
//!
//! The coordinator never looks inside an animation. It hands a driver an
//! [`AnimationRequest`] together with a [`Completion`], and reacts only to
//! "an animation of kind K on banner B completed". That signal is the sole
//! input driving banner state transitions.
//!
//! # Components
//!
//! - [`AnimationDriver`] - trait implemented by whatever actually animates
//! - [`TimedDriver`] - headless driver that completes after the duration elapses
//! - [`tween`] - tweens, timing curves and sampling helpers for renderers

pub mod timed;
pub mod tween;

pub use timed::TimedDriver;
pub use tween::{Running, TimingCurve, Tween};

use crate::banner::Banner;
use crate::coordinator::UiCommand;
use crate::domain::banner::BannerId;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;

/// Identifies which transition an animation belongs to, so a completion can
/// be told apart from other animations running on the same banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimationKind {
    /// Opacity ramp at the start of a show.
    FadeIn,
    /// Slide from the entry frame to the resting frame.
    Show,
    /// Reflow caused by a sibling's show or hide.
    Move,
    /// Exit animation.
    Hide,
    /// Opacity ramp after the exit animation; the banner detaches on completion.
    FadeOut,
}

/// A single geometric or opacity transition for one banner.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationRequest {
    pub banner: BannerId,
    pub kind: AnimationKind,
    pub tween: Tween,
    pub duration: Duration,
    pub curve: TimingCurve,
}

/// Typed completion event delivered back to the UI context.
#[derive(Debug, Clone)]
pub struct AnimationCompleted {
    pub(crate) banner: Banner,
    pub(crate) kind: AnimationKind,
    pub(crate) ticket: u64,
}

impl AnimationCompleted {
    #[must_use]
    pub fn banner(&self) -> BannerId {
        self.banner.id()
    }

    #[must_use]
    pub fn kind(&self) -> AnimationKind {
        self.kind
    }
}

/// One-shot handle a driver uses to report that an animation finished.
///
/// Dropping it without calling [`Completion::complete`] leaves the banner in
/// its current state forever, so drivers must always complete.
#[derive(Debug)]
pub struct Completion {
    sink: UnboundedSender<UiCommand>,
    event: AnimationCompleted,
}

impl Completion {
    pub(crate) fn new(
        sink: UnboundedSender<UiCommand>,
        banner: Banner,
        kind: AnimationKind,
        ticket: u64,
    ) -> Self {
        Self {
            sink,
            event: AnimationCompleted {
                banner,
                kind,
                ticket,
            },
        }
    }

    #[must_use]
    pub fn kind(&self) -> AnimationKind {
        self.event.kind
    }

    #[must_use]
    pub fn banner(&self) -> BannerId {
        self.event.banner.id()
    }

    /// Reports completion to the coordinator.
    pub fn complete(self) {
        // The UI context is gone when this fails; nothing is left to notify.
        let _ = self.sink.send(UiCommand::Completed(self.event));
    }
}

/// Performs animations on behalf of the coordinator.
///
/// Implementations must eventually call [`Completion::complete`] exactly
/// once per request. They are invoked from the UI context and must not block.
pub trait AnimationDriver: Send + Sync {
    fn animate(&self, request: AnimationRequest, completion: Completion);
}
