// SPDX-License-Identifier: MPL-2.0
//! Show, hide and push sequences.
//!
//! Every function here runs on the coordinator's UI context. They mutate a
//! banner's display state, start animations and react to completions; the
//! state machine only advances when a completion arrives.

use super::geometry;
use super::{Banner, BannerState};
use crate::animation::{AnimationKind, TimingCurve, Tween};
use crate::coordinator::{Coordinator, Deferred, TokenPermit};
use crate::surface::HostSurface;
use std::time::Duration;
use tokio::time::Instant;

/// Starts the show sequence: fade in, then slide to the resting slot.
///
/// The permit stays with the banner until `did_show` releases it.
pub(crate) fn run_show(coordinator: &Coordinator, banner: &Banner, permit: TokenPermit) {
    if banner.state() != BannerState::Hidden {
        tracing::debug!(banner = %banner.id(), state = ?banner.state(), "show ignored, banner already on screen");
        return;
    }

    let settings = coordinator.settings();
    let options = banner.options();
    let bounds = banner.surface().bounds();
    let rest = geometry::resting_frame(bounds, options.position(), options.size(), settings.margin);
    let entry = geometry::entry_frame(bounds, options.position(), rest);

    banner.hold_permit(permit);
    {
        let mut display = banner.display();
        display.frame = entry;
        display.opacity = 0.0;
        display.frame_tween = None;
        display.opacity_tween = None;
        display.slide_target = Some(rest);
    }
    banner.set_state(BannerState::Showing);

    banner.lifecycle().will_show(banner);
    banner.surface().attach(banner);

    let fade_in = options.fade_in_duration();
    banner.animate(
        coordinator,
        AnimationKind::FadeIn,
        Tween::Opacity {
            from: 0.0,
            to: options.view_opacity().value(),
        },
        fade_in,
        TimingCurve::Linear,
    );

    let slide_delay = fade_in.saturating_sub(settings.show_overlap);
    coordinator.defer(slide_delay, Deferred::SlideIn(banner.clone()));
}

/// Slides a showing banner from its entry frame to its resting slot.
pub(crate) fn slide_in(coordinator: &Coordinator, banner: &Banner) {
    if banner.state() != BannerState::Showing {
        return;
    }
    let Some(target) = banner.display().slide_target.take() else {
        return;
    };

    let from = banner.presented(Instant::now()).0;
    banner.animate(
        coordinator,
        AnimationKind::Show,
        Tween::Frame { from, to: target },
        banner.options().show_animation_duration(),
        TimingCurve::EaseOut,
    );
}

/// Starts the hide sequence, or drops the request if it no longer applies.
///
/// `permit` is `None` for forced hides, which never hold the token.
pub(crate) fn run_hide(coordinator: &Coordinator, banner: &Banner, permit: Option<TokenPermit>) {
    let state = banner.state();
    match state {
        BannerState::Hidden => {
            // Never shown, or already gone. A queued show is dropped here.
            drop(permit);
            coordinator.forget(banner);
            return;
        }
        BannerState::Hiding => {
            tracing::debug!(banner = %banner.id(), "hide ignored, already hiding");
            return;
        }
        BannerState::Showing
        | BannerState::Visible
        | BannerState::MovingForward
        | BannerState::MovingBackward => {}
    }

    // Cut short mid-show: close the show half of the lifecycle first. This
    // releases the show's permit before a hide permit can be stored.
    if state == BannerState::Showing {
        banner.lifecycle().did_show(banner);
    }

    if let Some(permit) = permit {
        banner.hold_permit(permit);
    }
    banner.clear_pending();
    banner.display().slide_target = None;

    banner.lifecycle().will_hide(banner);
    banner.set_state(BannerState::Hiding);

    let now = Instant::now();
    let (current, _) = banner.presented(now);
    let exit = geometry::exit_frame(
        banner.options().exit_type(),
        banner.surface().bounds(),
        banner.position(),
        current,
    );
    let duration = hide_duration(coordinator, banner, banner.options().hide_animation_duration());
    banner.animate(
        coordinator,
        AnimationKind::Hide,
        Tween::Frame {
            from: current,
            to: exit,
        },
        duration,
        TimingCurve::EaseIn,
    );
}

/// Routes an accepted completion through the state machine.
pub(crate) fn on_animation_completed(coordinator: &Coordinator, banner: &Banner, kind: AnimationKind) {
    let state = banner.state();
    let next = state.completed(kind);
    tracing::trace!(banner = %banner.id(), ?kind, ?state, ?next, "animation completed");

    match (state, kind) {
        (BannerState::Showing, AnimationKind::Show) => {
            banner.set_state(next);
            banner.lifecycle().did_show(banner);
        }
        (BannerState::MovingForward | BannerState::MovingBackward, AnimationKind::Move) => {
            banner.set_state(next);
        }
        (BannerState::Hiding, AnimationKind::Hide) => fade_out(coordinator, banner),
        (BannerState::Hiding, AnimationKind::FadeOut) => {
            banner.set_state(next);
            banner.surface().detach(banner.id());
            banner.lifecycle().did_hide(banner);
        }
        _ => {}
    }
}

/// Second hide stage. The banner detaches only once this completes.
fn fade_out(coordinator: &Coordinator, banner: &Banner) {
    let (_, opacity) = banner.presented(Instant::now());
    let duration = hide_duration(coordinator, banner, banner.options().fade_out_duration());
    banner.animate(
        coordinator,
        AnimationKind::FadeOut,
        Tween::Opacity {
            from: opacity,
            to: 0.0,
        },
        duration,
        TimingCurve::Linear,
    );
}

fn hide_duration(coordinator: &Coordinator, banner: &Banner, normal: Duration) -> Duration {
    if banner.should_force_hide() {
        coordinator.settings().forced_hide_duration
    } else {
        normal
    }
}

/// Schedules a push of `distance` after `delay`.
pub(crate) fn push(
    coordinator: &Coordinator,
    banner: &Banner,
    distance: f32,
    forward: bool,
    delay: Duration,
) {
    if delay.is_zero() {
        apply_push(coordinator, banner, distance, forward);
    } else {
        coordinator.defer(
            delay,
            Deferred::Push {
                banner: banner.clone(),
                distance,
                forward,
            },
        );
    }
}

/// Moves a banner along its stacking axis by `distance`.
///
/// Forward pushes make room and ease out; backward pushes close a gap and
/// ease in.
pub(crate) fn apply_push(coordinator: &Coordinator, banner: &Banner, distance: f32, forward: bool) {
    let state = banner.state();
    if state == BannerState::Hidden {
        tracing::debug!(banner = %banner.id(), "push skipped, banner hidden");
        return;
    }

    let dy = geometry::push_delta(banner.position(), distance);
    coordinator.emit_pushed(banner, distance, forward);

    // The exit animation owns the frame of a leaving banner.
    if state == BannerState::Hiding {
        return;
    }

    // Not slid in yet: move the slot it is heading to.
    {
        let mut display = banner.display();
        if let Some(target) = display.slide_target {
            display.slide_target = Some(geometry::offset(target, dy));
            return;
        }
    }

    let now = Instant::now();
    let (from, _) = banner.presented(now);
    let to = geometry::offset(banner.frame(), dy);
    let (duration, curve) = if forward {
        (banner.options().show_animation_duration(), TimingCurve::EaseOut)
    } else {
        (banner.options().hide_animation_duration(), TimingCurve::EaseIn)
    };

    banner.set_state(state.pushed(forward));
    banner.animate(
        coordinator,
        AnimationKind::Move,
        Tween::Frame { from, to },
        duration,
        curve,
    );
}
