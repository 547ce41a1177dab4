// SPDX-License-Identifier: MPL-2.0
//! UI-affinity context.
//!
//! A single task receives every command that mutates what is on screen and
//! handles them one at a time. Nothing in here awaits while handling a
//! command.

use super::queue::Request;
use super::token::TokenPermit;
use super::{Coordinator, Shared};
use crate::animation::AnimationCompleted;
use crate::banner::{transition, Banner};
use std::sync::Weak;
use tokio::sync::mpsc::UnboundedReceiver;

/// Work for the UI context.
#[derive(Debug)]
pub(crate) enum UiCommand {
    /// A queued request acquired its group's token.
    Begin {
        request: Request,
        permit: TokenPermit,
    },
    /// Forced hide, bypassing the queue and the token.
    ForceHide(Banner),
    Completed(AnimationCompleted),
    Deferred(Deferred),
}

/// Work scheduled to run on the UI context after a delay.
#[derive(Debug, Clone)]
pub(crate) enum Deferred {
    /// Start the slide of a banner whose fade-in is under way.
    SlideIn(Banner),
    Push {
        banner: Banner,
        distance: f32,
        forward: bool,
    },
}

/// Runs until every coordinator handle and command sender is gone.
pub(crate) async fn run(shared: Weak<Shared>, mut rx: UnboundedReceiver<UiCommand>) {
    while let Some(command) = rx.recv().await {
        let Some(shared) = shared.upgrade() else {
            break;
        };
        let coordinator = Coordinator { shared };
        handle(&coordinator, command);
    }
    tracing::debug!("ui context stopped");
}

fn handle(coordinator: &Coordinator, command: UiCommand) {
    match command {
        UiCommand::Begin {
            request: Request::Show(banner),
            permit,
        } => {
            if banner.should_force_hide() || !coordinator.is_pending(&banner) {
                tracing::debug!(banner = %banner.id(), "queued show dropped");
                drop(permit);
                coordinator.forget(&banner);
                return;
            }
            transition::run_show(coordinator, &banner, permit);
        }
        UiCommand::Begin {
            request: Request::Hide(banner),
            permit,
        } => transition::run_hide(coordinator, &banner, Some(permit)),
        UiCommand::ForceHide(banner) => transition::run_hide(coordinator, &banner, None),
        UiCommand::Completed(event) => {
            if event.banner.settle(event.kind, event.ticket) {
                transition::on_animation_completed(coordinator, &event.banner, event.kind);
            } else {
                tracing::trace!(banner = %event.banner.id(), kind = ?event.kind, "stale completion ignored");
            }
        }
        UiCommand::Deferred(Deferred::SlideIn(banner)) => transition::slide_in(coordinator, &banner),
        UiCommand::Deferred(Deferred::Push {
            banner,
            distance,
            forward,
        }) => transition::apply_push(coordinator, &banner, distance, forward),
    }
}
