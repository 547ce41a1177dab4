// SPDX-License-Identifier: MPL-2.0
//! Banner entity.
//!
//! A [`Banner`] is a cheap, clonable handle to one notification. It carries
//! its configuration, its lifecycle state and the display state the UI
//! context mutates (frame, opacity, in-flight tweens). Everything that
//! changes what is on screen happens on the coordinator's UI context; the
//! handle itself can be shared freely across tasks.
//!
//! # Components
//!
//! - [`BannerOptions`] - recognized options with their defaults
//! - [`BannerState`] - lifecycle state machine
//! - [`geometry`] - resting, entry and exit frames

pub mod geometry;
pub mod options;
pub mod state;
pub(crate) mod transition;

pub use options::{BannerOptions, TapCallback};
pub use state::BannerState;

use crate::animation::{AnimationKind, AnimationRequest, Completion, Running, TimingCurve, Tween};
use crate::coordinator::{BannerLifecycle, Coordinator, TokenPermit};
use crate::domain::banner::{BannerId, Category, Position, StackGroup, SurfaceId, Tag};
use crate::error::Result;
use crate::surface::HostSurface;
use iced::{Point, Rectangle, Size};
use state::StateCell;
use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::time::Instant;

/// Handle to one notification banner.
///
/// Clones refer to the same banner; equality compares identity.
#[derive(Clone)]
pub struct Banner {
    inner: Arc<Inner>,
}

struct Inner {
    id: BannerId,
    title: String,
    message: String,
    category: Option<Category>,
    options: BannerOptions,
    surface: Arc<dyn HostSurface>,
    lifecycle: Arc<dyn BannerLifecycle>,
    state: StateCell,
    scheduled_to_hide: AtomicBool,
    force_hide: AtomicBool,
    display: Mutex<Display>,
}

/// Mutable display state, written from the UI context.
#[derive(Debug)]
pub(crate) struct Display {
    /// Model frame: where the banner is, or is heading to.
    pub(crate) frame: Rectangle,
    /// Model opacity.
    pub(crate) opacity: f32,
    pub(crate) frame_tween: Option<Running>,
    pub(crate) opacity_tween: Option<Running>,
    /// Resting frame of a banner whose slide-in has not started yet.
    pub(crate) slide_target: Option<Rectangle>,
    /// Latest ticket issued per animation kind. Older completions are stale.
    pub(crate) pending: HashMap<AnimationKind, u64>,
    pub(crate) next_ticket: u64,
    /// Exclusion token held on behalf of this banner's show or hide.
    pub(crate) permit: Option<TokenPermit>,
}

impl Default for Display {
    fn default() -> Self {
        Self {
            frame: Rectangle::new(Point::ORIGIN, Size::ZERO),
            opacity: 0.0,
            frame_tween: None,
            opacity_tween: None,
            slide_target: None,
            pending: HashMap::new(),
            next_ticket: 0,
            permit: None,
        }
    }
}

impl Banner {
    /// Creates a banner presented on the coordinator's overlay surface.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::Error::SurfaceUnavailable`] when the
    /// coordinator has no overlay size to create its surface with.
    pub fn create(
        coordinator: &Coordinator,
        title: impl Into<String>,
        message: impl Into<String>,
        category: Option<Category>,
        options: BannerOptions,
    ) -> Result<Self> {
        let overlay: Arc<dyn HostSurface> = coordinator.overlay()?;
        Ok(Self::create_in(
            coordinator,
            &overlay,
            title,
            message,
            category,
            options,
        ))
    }

    /// Creates a banner presented on a caller-provided host surface.
    pub fn create_in(
        coordinator: &Coordinator,
        surface: &Arc<dyn HostSurface>,
        title: impl Into<String>,
        message: impl Into<String>,
        category: Option<Category>,
        options: BannerOptions,
    ) -> Self {
        coordinator.register_surface(Arc::clone(surface));
        let lifecycle: Arc<dyn BannerLifecycle> = Arc::new(coordinator.clone());

        Self {
            inner: Arc::new(Inner {
                id: BannerId::next(),
                title: title.into(),
                message: message.into(),
                category,
                options,
                surface: Arc::clone(surface),
                lifecycle,
                state: StateCell::default(),
                scheduled_to_hide: AtomicBool::new(false),
                force_hide: AtomicBool::new(false),
                display: Mutex::new(Display::default()),
            }),
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[must_use]
    pub fn id(&self) -> BannerId {
        self.inner.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.inner.title
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.inner.message
    }

    #[must_use]
    pub fn category(&self) -> Option<Category> {
        self.inner.category
    }

    #[must_use]
    pub fn options(&self) -> &BannerOptions {
        &self.inner.options
    }

    #[must_use]
    pub fn tag(&self) -> Tag {
        self.inner.options.tag()
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.inner.options.position()
    }

    #[must_use]
    pub fn group(&self) -> StackGroup {
        self.position().group()
    }

    #[must_use]
    pub fn height(&self) -> f32 {
        self.inner.options.size().height
    }

    #[must_use]
    pub fn surface(&self) -> &Arc<dyn HostSurface> {
        &self.inner.surface
    }

    #[must_use]
    pub fn surface_id(&self) -> SurfaceId {
        self.inner.surface.id()
    }

    #[must_use]
    pub fn state(&self) -> BannerState {
        self.inner.state.get()
    }

    /// Returns true once a hide has been requested for this banner.
    #[must_use]
    pub fn is_scheduled_to_hide(&self) -> bool {
        self.inner.scheduled_to_hide.load(Ordering::Acquire)
    }

    /// Returns true when the banner is being hidden with the short forced
    /// durations.
    #[must_use]
    pub fn should_force_hide(&self) -> bool {
        self.inner.force_hide.load(Ordering::Acquire)
    }

    /// Model frame: the resting slot, or the target of the running animation.
    #[must_use]
    pub fn frame(&self) -> Rectangle {
        self.display().frame
    }

    /// Frame and opacity as they appear at `now`, sampling in-flight tweens.
    #[must_use]
    pub fn presented(&self, now: Instant) -> (Rectangle, f32) {
        let display = self.display();
        let frame = display
            .frame_tween
            .and_then(|running| running.frame_at(now))
            .unwrap_or(display.frame);
        let opacity = display
            .opacity_tween
            .and_then(|running| running.opacity_at(now))
            .unwrap_or(display.opacity);
        (frame, opacity)
    }

    // =========================================================================
    // Control
    // =========================================================================

    /// Requests this banner to be shown.
    ///
    /// Returns `false` when the request was ignored: the banner is already
    /// shown or scheduled to hide, or another banner with the same non-zero
    /// tag is displayed on the same surface.
    pub async fn show(&self) -> bool {
        self.inner.lifecycle.show(self).await
    }

    /// Requests a normal hide. Returns `false` if a hide was already requested.
    pub async fn hide(&self) -> bool {
        self.inner.lifecycle.hide(self, false).await
    }

    /// Hides the banner immediately with the short forced durations,
    /// bypassing the request queue.
    pub async fn force_hide(&self) -> bool {
        self.inner.lifecycle.hide(self, true).await
    }

    // =========================================================================
    // Crate internals
    // =========================================================================

    pub(crate) fn lifecycle(&self) -> &Arc<dyn BannerLifecycle> {
        &self.inner.lifecycle
    }

    pub(crate) fn set_state(&self, state: BannerState) {
        let previous = self.inner.state.get();
        if previous != state {
            tracing::trace!(banner = %self.id(), from = ?previous, to = ?state, "state changed");
        }
        self.inner.state.set(state);
    }

    /// Flips the scheduled-to-hide flag. Returns false if it was already set.
    pub(crate) fn mark_scheduled_to_hide(&self) -> bool {
        self.inner
            .scheduled_to_hide
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    pub(crate) fn set_force_hide(&self) {
        self.inner.force_hide.store(true, Ordering::Release);
    }

    pub(crate) fn display(&self) -> MutexGuard<'_, Display> {
        self.inner
            .display
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Records a tween and hands it to the coordinator's driver.
    pub(crate) fn animate(
        &self,
        coordinator: &Coordinator,
        kind: AnimationKind,
        tween: Tween,
        duration: Duration,
        curve: TimingCurve,
    ) {
        let ticket = {
            let mut display = self.display();
            display.next_ticket += 1;
            let ticket = display.next_ticket;
            display.pending.insert(kind, ticket);

            let running = Running::new(tween, Instant::now(), duration, curve);
            match tween {
                Tween::Frame { to, .. } => {
                    display.frame = to;
                    display.frame_tween = Some(running);
                }
                Tween::Opacity { to, .. } => {
                    display.opacity = to;
                    display.opacity_tween = Some(running);
                }
            }
            ticket
        };

        let request = AnimationRequest {
            banner: self.id(),
            kind,
            tween,
            duration,
            curve,
        };
        let completion = Completion::new(coordinator.ui_sender(), self.clone(), kind, ticket);
        coordinator.driver().animate(request, completion);
    }

    /// Accepts a completion if it belongs to the latest animation of its kind.
    pub(crate) fn settle(&self, kind: AnimationKind, ticket: u64) -> bool {
        let mut display = self.display();
        if display.pending.get(&kind) == Some(&ticket) {
            display.pending.remove(&kind);
            true
        } else {
            false
        }
    }

    /// Forgets every in-flight animation so their completions are ignored.
    pub(crate) fn clear_pending(&self) {
        self.display().pending.clear();
    }

    pub(crate) fn hold_permit(&self, permit: TokenPermit) {
        self.display().permit = Some(permit);
    }

    /// Releases the exclusion token held for this banner, if any.
    pub(crate) fn release_permit(&self) -> bool {
        let permit = self.display().permit.take();
        permit.is_some()
    }
}

impl PartialEq for Banner {
    fn eq(&self, other: &Self) -> bool {
        self.inner.id == other.inner.id
    }
}

impl Eq for Banner {}

impl fmt::Debug for Banner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Banner")
            .field("id", &self.inner.id)
            .field("title", &self.inner.title)
            .field("tag", &self.tag())
            .field("position", &self.position())
            .field("state", &self.state())
            .field("surface", &self.surface_id())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::TimedDriver;
    use crate::coordinator::Settings;
    use crate::surface::OverlaySurface;

    fn coordinator() -> Coordinator {
        Coordinator::start(Settings::default(), Arc::new(TimedDriver::new()))
            .expect("runtime available")
    }

    #[tokio::test]
    async fn create_uses_options_and_starts_hidden() {
        let coordinator = coordinator();
        let options = BannerOptions::default()
            .with_tag(3)
            .with_position(Position::BottomLeft);
        let banner = Banner::create(&coordinator, "Saved", "All good", None, options)
            .expect("overlay available");

        assert_eq!(banner.title(), "Saved");
        assert_eq!(banner.message(), "All good");
        assert_eq!(banner.tag(), Tag::new(3));
        assert_eq!(banner.group(), StackGroup::Bottom);
        assert_eq!(banner.state(), BannerState::Hidden);
        assert!(!banner.is_scheduled_to_hide());
        assert!(!banner.should_force_hide());
    }

    #[tokio::test]
    async fn create_without_overlay_size_fails() {
        let settings = Settings {
            window: None,
            ..Settings::default()
        };
        let coordinator =
            Coordinator::start(settings, Arc::new(TimedDriver::new())).expect("runtime available");
        let result = Banner::create(&coordinator, "t", "m", None, BannerOptions::default());
        assert!(matches!(
            result,
            Err(crate::error::Error::SurfaceUnavailable)
        ));
    }

    #[tokio::test]
    async fn clones_compare_by_identity() {
        let coordinator = coordinator();
        let surface: Arc<dyn HostSurface> = Arc::new(OverlaySurface::new(Size::new(800.0, 600.0)));
        let a = Banner::create_in(&coordinator, &surface, "a", "", None, BannerOptions::default());
        let b = Banner::create_in(&coordinator, &surface, "a", "", None, BannerOptions::default());
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
    }

    #[tokio::test]
    async fn scheduled_to_hide_flips_once() {
        let coordinator = coordinator();
        let banner = Banner::create(&coordinator, "t", "m", None, BannerOptions::default())
            .expect("overlay available");
        assert!(banner.mark_scheduled_to_hide());
        assert!(!banner.mark_scheduled_to_hide());
        assert!(banner.is_scheduled_to_hide());
    }

    #[tokio::test]
    async fn only_latest_ticket_settles() {
        let coordinator = coordinator();
        let banner = Banner::create(&coordinator, "t", "m", None, BannerOptions::default())
            .expect("overlay available");
        {
            let mut display = banner.display();
            display.pending.insert(AnimationKind::Move, 2);
        }
        assert!(!banner.settle(AnimationKind::Move, 1));
        assert!(banner.settle(AnimationKind::Move, 2));
        assert!(!banner.settle(AnimationKind::Move, 2));
    }

    #[tokio::test(start_paused = true)]
    async fn presented_samples_running_tweens() {
        let coordinator = coordinator();
        let banner = Banner::create(&coordinator, "t", "m", None, BannerOptions::default())
            .expect("overlay available");
        let from = Rectangle::new(Point::new(0.0, 0.0), Size::new(100.0, 50.0));
        let to = Rectangle::new(Point::new(0.0, 100.0), Size::new(100.0, 50.0));
        let start = Instant::now();
        {
            let mut display = banner.display();
            display.frame = to;
            display.opacity = 1.0;
            display.frame_tween = Some(Running::new(
                Tween::Frame { from, to },
                start,
                Duration::from_millis(200),
                TimingCurve::Linear,
            ));
        }

        let (frame, opacity) = banner.presented(start + Duration::from_millis(100));
        assert!((frame.y - 50.0).abs() < 1e-3);
        assert_eq!(opacity, 1.0);

        let (frame, _) = banner.presented(start + Duration::from_secs(1));
        assert_eq!(frame, to);
    }
}
