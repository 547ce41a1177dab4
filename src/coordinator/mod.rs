// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle coordinator.
//!
//! The coordinator serializes show and hide requests per stack group,
//! keeps track of every banner on screen and reflows siblings when one
//! arrives or leaves.
//!
//! # Flow
//!
//! 1. A request is submitted to the serial queue; the caller waits only
//!    until it has been taken.
//! 2. The request's lane waits for its group's exclusion token.
//! 3. The UI context runs the show or hide sequence. Siblings are pushed
//!    out of the way or pulled back in.
//! 4. `did_show`/`did_hide` release the token; the next request in the
//!    group starts.
//!
//! Forced hides skip steps 1 and 2.
//!
//! # Example
//!
//! ```no_run
//! use iced_banners::banner::{Banner, BannerOptions};
//! use iced_banners::coordinator::{Coordinator, Settings};
//!
//! # async fn demo() -> iced_banners::error::Result<()> {
//! let coordinator = Coordinator::new(Settings::default())?;
//! let banner = Banner::create(&coordinator, "Saved", "Your file was saved", None, BannerOptions::default())?;
//! banner.show().await;
//! # Ok(())
//! # }
//! ```

pub mod group;
mod lifecycle;
mod queue;
mod token;
mod ui;

pub use group::{Push, StackEntry};
pub use lifecycle::BannerLifecycle;
pub use token::{ExclusionToken, TokenPermit};
pub(crate) use ui::{Deferred, UiCommand};

use crate::animation::{AnimationDriver, TimedDriver};
use crate::banner::{transition, Banner, BannerOptions};
use crate::config::{defaults, Config};
use crate::domain::banner::{BannerId, Idiom, Position, StackGroup, SurfaceId, Tag};
use crate::error::{Error, Result};
use crate::surface::{Hit, HostSurface, OverlaySurface};
use async_trait::async_trait;
use iced::{Point, Size};
use queue::{Request, RequestQueue};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};
use std::time::Duration;
use token::Tokens;
use tokio::sync::{broadcast, mpsc};
use tokio::time::Instant;

/// Default capacity of the lifecycle event channel.
const EVENT_CAPACITY: usize = 256;

// =============================================================================
// Settings
// =============================================================================

/// Coordinator-wide parameters.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Gap between stacked banners.
    pub gap: f32,
    /// Distance between a resting banner and the surface edges.
    pub margin: f32,
    /// How much the slide-in overlaps the end of the fade-in.
    pub show_overlap: Duration,
    /// Exit and fade-out duration of forced hides.
    pub forced_hide_duration: Duration,
    /// Size of the overlay surface. `None` means no overlay can be created.
    pub window: Option<Size>,
    /// Device class that picks the default banner size.
    pub idiom: Idiom,
    /// Defaults handed out by [`Coordinator::default_options`].
    pub options: BannerOptions,
    /// Buffer size of the lifecycle event channel.
    pub event_capacity: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            gap: defaults::STACK_GAP,
            margin: defaults::EDGE_MARGIN,
            show_overlap: Duration::from_secs_f32(defaults::SHOW_OVERLAP_SECS),
            forced_hide_duration: Duration::from_secs_f32(defaults::FORCED_HIDE_SECS),
            window: Some(Size::new(defaults::WINDOW_WIDTH, defaults::WINDOW_HEIGHT)),
            idiom: Idiom::default(),
            options: BannerOptions::default(),
            event_capacity: EVENT_CAPACITY,
        }
    }
}

impl Settings {
    /// Builds settings from a loaded configuration file.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let defaults = Self::default();
        Self {
            window: config.window_size().or(defaults.window),
            idiom: config.idiom(),
            options: config.banner_options(),
            ..defaults
        }
    }
}

// =============================================================================
// Events
// =============================================================================

/// Lifecycle notifications published to subscribers.
#[derive(Debug, Clone, PartialEq)]
pub enum LifecycleEvent {
    WillShow {
        banner: BannerId,
        group: StackGroup,
    },
    DidShow {
        banner: BannerId,
        group: StackGroup,
    },
    WillHide {
        banner: BannerId,
        group: StackGroup,
        forced: bool,
    },
    DidHide {
        banner: BannerId,
        group: StackGroup,
    },
    /// A sibling was pushed; negative distances pull toward the anchor edge.
    Pushed {
        banner: BannerId,
        distance: f32,
        forward: bool,
    },
    /// A queued banner was hidden before its show started.
    Dropped { banner: BannerId },
}

impl LifecycleEvent {
    #[must_use]
    pub fn banner(&self) -> BannerId {
        match self {
            LifecycleEvent::WillShow { banner, .. }
            | LifecycleEvent::DidShow { banner, .. }
            | LifecycleEvent::WillHide { banner, .. }
            | LifecycleEvent::DidHide { banner, .. }
            | LifecycleEvent::Pushed { banner, .. }
            | LifecycleEvent::Dropped { banner } => *banner,
        }
    }
}

// =============================================================================
// Coordinator
// =============================================================================

/// Banners known to the coordinator.
#[derive(Debug, Default)]
struct Stage {
    /// Banners between `will_show` and `did_hide`, in show order.
    tracked: Vec<Banner>,
    /// Banners whose show request is queued.
    pending: Vec<Banner>,
}

impl Stage {
    fn contains(&self, banner: &Banner) -> bool {
        self.tracked.contains(banner) || self.pending.contains(banner)
    }

    fn all(&self) -> impl Iterator<Item = &Banner> {
        self.tracked.iter().chain(self.pending.iter())
    }
}

pub(crate) struct Shared {
    settings: Settings,
    driver: Arc<dyn AnimationDriver>,
    stage: Mutex<Stage>,
    surfaces: Mutex<HashMap<SurfaceId, Arc<dyn HostSurface>>>,
    overlay: OnceLock<Arc<OverlaySurface>>,
    ui_tx: mpsc::UnboundedSender<UiCommand>,
    queue: RequestQueue,
    tokens: Tokens,
    events: broadcast::Sender<LifecycleEvent>,
}

/// Handle to the lifecycle coordinator. Clones share one instance.
#[derive(Clone)]
pub struct Coordinator {
    pub(crate) shared: Arc<Shared>,
}

impl std::fmt::Debug for Coordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let stage = self.stage();
        f.debug_struct("Coordinator")
            .field("tracked", &stage.tracked.len())
            .field("pending", &stage.pending.len())
            .finish_non_exhaustive()
    }
}

impl Coordinator {
    /// Starts a coordinator using the headless [`TimedDriver`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::RuntimeUnavailable`] outside a Tokio runtime.
    pub fn new(settings: Settings) -> Result<Self> {
        Self::start(settings, Arc::new(TimedDriver::new()))
    }

    /// Starts a coordinator with a custom animation driver.
    ///
    /// Spawns the request queue and the UI context on the current runtime.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RuntimeUnavailable`] outside a Tokio runtime.
    pub fn start(settings: Settings, driver: Arc<dyn AnimationDriver>) -> Result<Self> {
        tokio::runtime::Handle::try_current().map_err(|_| Error::RuntimeUnavailable)?;

        let (ui_tx, ui_rx) = mpsc::unbounded_channel();
        let tokens = Tokens::new();
        let queue = RequestQueue::spawn(&tokens, ui_tx.clone());
        let (events, _) = broadcast::channel(settings.event_capacity.max(1));

        let shared = Arc::new(Shared {
            settings,
            driver,
            stage: Mutex::new(Stage::default()),
            surfaces: Mutex::new(HashMap::new()),
            overlay: OnceLock::new(),
            ui_tx,
            queue,
            tokens,
            events,
        });
        tokio::spawn(ui::run(Arc::downgrade(&shared), ui_rx));

        tracing::debug!("coordinator started");
        Ok(Self { shared })
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.shared.settings
    }

    /// Options new banners start from.
    #[must_use]
    pub fn default_options(&self) -> BannerOptions {
        self.shared.settings.options.clone()
    }

    /// Receives lifecycle events published from now on.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<LifecycleEvent> {
        self.shared.events.subscribe()
    }

    /// Returns the overlay surface, creating it on first use.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SurfaceUnavailable`] when no window size is known.
    pub fn overlay(&self) -> Result<Arc<OverlaySurface>> {
        if let Some(overlay) = self.shared.overlay.get() {
            return Ok(Arc::clone(overlay));
        }
        let size = self.shared.settings.window.ok_or(Error::SurfaceUnavailable)?;
        let overlay = Arc::clone(
            self.shared
                .overlay
                .get_or_init(|| Arc::new(OverlaySurface::new(size))),
        );
        self.register_surface(Arc::clone(&overlay) as Arc<dyn HostSurface>);
        tracing::debug!(surface = overlay.id().value(), "overlay created");
        Ok(overlay)
    }

    /// Makes a host surface known for queries and hit testing.
    pub fn register_surface(&self, surface: Arc<dyn HostSurface>) {
        self.surfaces().entry(surface.id()).or_insert(surface);
    }

    #[must_use]
    pub fn surface(&self, id: SurfaceId) -> Option<Arc<dyn HostSurface>> {
        self.surfaces().get(&id).cloned()
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Banners currently displayed on `surface`, in show order.
    #[must_use]
    pub fn notifications(&self, surface: SurfaceId) -> Vec<Banner> {
        self.stage()
            .tracked
            .iter()
            .filter(|banner| banner.surface_id() == surface)
            .cloned()
            .collect()
    }

    /// Displayed banners on `surface` carrying `tag`.
    #[must_use]
    pub fn notification(&self, tag: Tag, surface: SurfaceId) -> Vec<Banner> {
        self.stage()
            .tracked
            .iter()
            .filter(|banner| banner.surface_id() == surface && banner.tag() == tag)
            .cloned()
            .collect()
    }

    /// Position group at `position` on `surface`, oldest first.
    #[must_use]
    pub fn group(&self, surface: SurfaceId, position: Position) -> Vec<Banner> {
        group::position_group(&self.stage().tracked, surface, position)
    }

    /// Returns true when no show or hide holds `group`'s token.
    #[must_use]
    pub fn is_group_idle(&self, group: StackGroup) -> bool {
        self.shared.tokens.get(group).is_free()
    }

    // =========================================================================
    // Bulk control
    // =========================================================================

    /// Requests a normal hide of every banner on every surface.
    ///
    /// Returns the number of hides that were accepted.
    pub async fn hide_all_notifications(&self) -> usize {
        let banners: Vec<Banner> = self.stage().all().cloned().collect();
        hide_each(banners, false).await
    }

    /// Requests a normal hide of every banner on `surface`.
    pub async fn hide_notifications(&self, surface: SurfaceId) -> usize {
        hide_each(self.on_surface(surface), false).await
    }

    /// Hides every banner on `surface` right away, bypassing the queue.
    pub async fn force_hide_all_notifications(&self, surface: SurfaceId) -> usize {
        hide_each(self.on_surface(surface), true).await
    }

    /// Routes a pointer press on `surface`.
    ///
    /// A hit runs the banner's tap callback, then hides it if tap to
    /// dismiss is allowed. Misses should be forwarded to the application.
    pub async fn tap(&self, surface: SurfaceId, point: Point) -> Hit {
        let Some(host) = self.surface(surface) else {
            return Hit::PassThrough;
        };
        let hit = host.hit_test(point, Instant::now());
        if let Hit::Banner(banner) = &hit {
            self.activate(banner).await;
        }
        hit
    }

    /// Runs a banner's tap behavior: its callback, then a hide if tap to
    /// dismiss is allowed.
    pub async fn activate(&self, banner: &Banner) {
        tracing::debug!(banner = %banner.id(), "banner tapped");
        if let Some(callback) = banner.options().tapped_callback() {
            callback(banner);
        }
        if banner.options().allows_tap_to_dismiss() {
            banner.hide().await;
        }
    }

    // =========================================================================
    // Crate internals
    // =========================================================================

    fn stage(&self) -> MutexGuard<'_, Stage> {
        self.shared
            .stage
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn surfaces(&self) -> MutexGuard<'_, HashMap<SurfaceId, Arc<dyn HostSurface>>> {
        self.shared
            .surfaces
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn on_surface(&self, surface: SurfaceId) -> Vec<Banner> {
        self.stage()
            .all()
            .filter(|banner| banner.surface_id() == surface)
            .cloned()
            .collect()
    }

    pub(crate) fn driver(&self) -> &Arc<dyn AnimationDriver> {
        &self.shared.driver
    }

    pub(crate) fn ui_sender(&self) -> mpsc::UnboundedSender<UiCommand> {
        self.shared.ui_tx.clone()
    }

    pub(crate) fn is_pending(&self, banner: &Banner) -> bool {
        self.stage().pending.contains(banner)
    }

    /// Drops a banner whose show never started.
    pub(crate) fn forget(&self, banner: &Banner) {
        let removed = {
            let mut stage = self.stage();
            let before = stage.pending.len();
            stage.pending.retain(|pending| pending != banner);
            before != stage.pending.len()
        };
        if removed {
            tracing::debug!(banner = %banner.id(), "queued banner dropped");
            self.emit(LifecycleEvent::Dropped { banner: banner.id() });
        }
    }

    /// Runs `deferred` on the UI context after `delay`.
    pub(crate) fn defer(&self, delay: Duration, deferred: Deferred) {
        let tx = self.ui_sender();
        if delay.is_zero() {
            let _ = tx.send(UiCommand::Deferred(deferred));
            return;
        }
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(UiCommand::Deferred(deferred));
        });
    }

    pub(crate) fn emit_pushed(&self, banner: &Banner, distance: f32, forward: bool) {
        tracing::debug!(banner = %banner.id(), distance, forward, "banner pushed");
        self.emit(LifecycleEvent::Pushed {
            banner: banner.id(),
            distance,
            forward,
        });
    }

    fn emit(&self, event: LifecycleEvent) {
        // No subscribers is fine.
        let _ = self.shared.events.send(event);
    }
}

async fn hide_each(banners: Vec<Banner>, forced: bool) -> usize {
    let mut accepted = 0;
    for banner in banners {
        let requested = if forced {
            banner.force_hide().await
        } else {
            banner.hide().await
        };
        if requested {
            accepted += 1;
        }
    }
    accepted
}

#[async_trait]
impl BannerLifecycle for Coordinator {
    async fn show(&self, banner: &Banner) -> bool {
        if banner.is_scheduled_to_hide() {
            tracing::debug!(banner = %banner.id(), "show refused, hide already requested");
            return false;
        }

        {
            let mut stage = self.stage();
            if stage.contains(banner) {
                tracing::debug!(banner = %banner.id(), "show refused, already requested");
                return false;
            }
            let tag = banner.tag();
            let duplicate = tag.is_singleton()
                && stage.all().any(|other| {
                    other.surface_id() == banner.surface_id() && other.tag() == tag
                });
            if duplicate {
                tracing::debug!(banner = %banner.id(), tag = tag.value(), "show refused, tag already displayed");
                return false;
            }
            stage.pending.push(banner.clone());
        }

        match self.shared.queue.submit(Request::Show(banner.clone())).await {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(banner = %banner.id(), error = %err, "show request not submitted");
                self.stage().pending.retain(|pending| pending != banner);
                false
            }
        }
    }

    fn will_show(&self, banner: &Banner) {
        let siblings: Vec<Banner> = {
            let mut stage = self.stage();
            stage.pending.retain(|pending| pending != banner);
            if !stage.tracked.contains(banner) {
                stage.tracked.push(banner.clone());
            }
            group::position_group(&stage.tracked, banner.surface_id(), banner.position())
                .into_iter()
                .filter(|sibling| sibling != banner)
                .collect()
        };

        tracing::debug!(
            banner = %banner.id(),
            tag = banner.tag().value(),
            group = %banner.group(),
            siblings = siblings.len(),
            "will show"
        );
        self.emit(LifecycleEvent::WillShow {
            banner: banner.id(),
            group: banner.group(),
        });

        let entries: Vec<StackEntry> = siblings.iter().map(StackEntry::from).collect();
        let delay = banner.options().fade_in_duration();
        for push in group::make_room(&entries, banner.height(), self.shared.settings.gap) {
            transition::push(self, &siblings[push.index], push.distance, push.forward, delay);
        }
    }

    fn did_show(&self, banner: &Banner) {
        banner.release_permit();
        tracing::debug!(banner = %banner.id(), group = %banner.group(), "did show");
        self.emit(LifecycleEvent::DidShow {
            banner: banner.id(),
            group: banner.group(),
        });

        if let Some(delay) = banner.options().seconds_to_show() {
            let banner = banner.clone();
            tokio::spawn(async move {
                tokio::time::sleep(delay).await;
                banner.hide().await;
            });
        }
    }

    async fn hide(&self, banner: &Banner, forced: bool) -> bool {
        if !banner.mark_scheduled_to_hide() {
            tracing::debug!(banner = %banner.id(), "hide ignored, already scheduled");
            return false;
        }

        if forced {
            banner.set_force_hide();
            tracing::debug!(banner = %banner.id(), "forced hide");
            return self
                .shared
                .ui_tx
                .send(UiCommand::ForceHide(banner.clone()))
                .is_ok();
        }

        match self.shared.queue.submit(Request::Hide(banner.clone())).await {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(banner = %banner.id(), error = %err, "hide request not submitted");
                false
            }
        }
    }

    fn will_hide(&self, banner: &Banner) {
        let order = group::position_group(&self.stage().tracked, banner.surface_id(), banner.position());
        let entries: Vec<StackEntry> = order.iter().map(StackEntry::from).collect();

        tracing::debug!(
            banner = %banner.id(),
            group = %banner.group(),
            forced = banner.should_force_hide(),
            "will hide"
        );
        self.emit(LifecycleEvent::WillHide {
            banner: banner.id(),
            group: banner.group(),
            forced: banner.should_force_hide(),
        });

        match group::close_gap(&entries, banner.id(), self.shared.settings.gap) {
            Some(pushes) => {
                for push in pushes {
                    transition::push(self, &order[push.index], push.distance, push.forward, Duration::ZERO);
                }
            }
            None => {
                tracing::warn!(banner = %banner.id(), "departing banner missing from its position group");
            }
        }
    }

    fn did_hide(&self, banner: &Banner) {
        {
            let mut stage = self.stage();
            stage.tracked.retain(|tracked| tracked != banner);
            stage.pending.retain(|pending| pending != banner);
        }
        banner.release_permit();
        tracing::debug!(banner = %banner.id(), group = %banner.group(), "did hide");
        self.emit(LifecycleEvent::DidHide {
            banner: banner.id(),
            group: banner.group(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::banner::BannerState;
    use crate::domain::banner::Category;

    fn coordinator() -> Coordinator {
        Coordinator::new(Settings::default()).expect("runtime available")
    }

    fn banner(coordinator: &Coordinator, options: BannerOptions) -> Banner {
        Banner::create(coordinator, "title", "message", Some(Category::Info), options)
            .expect("overlay available")
    }

    #[test]
    fn start_outside_runtime_fails() {
        let result = Coordinator::new(Settings::default());
        assert!(matches!(result, Err(Error::RuntimeUnavailable)));
    }

    #[test]
    fn settings_follow_config() {
        let config = Config {
            idiom: Some("tablet".to_string()),
            window_width: Some(640.0),
            window_height: Some(480.0),
            ..Config::default()
        };
        let settings = Settings::from_config(&config);
        assert_eq!(settings.idiom, Idiom::Tablet);
        assert_eq!(settings.window, Some(Size::new(640.0, 480.0)));
        assert_eq!(settings.options.size().width, defaults::TABLET_WIDTH);
        assert_eq!(settings.gap, defaults::STACK_GAP);
    }

    #[tokio::test]
    async fn overlay_is_created_once() {
        let coordinator = coordinator();
        let first = coordinator.overlay().expect("overlay");
        let second = coordinator.overlay().expect("overlay");
        assert_eq!(first.id(), second.id());
        assert!(coordinator.surface(first.id()).is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn show_registers_pending_then_tracked() {
        let coordinator = coordinator();
        let banner = banner(&coordinator, BannerOptions::default().sticky());

        assert!(banner.show().await);
        assert!(!banner.show().await, "second show of the same banner is refused");

        tokio::time::sleep(Duration::from_millis(500)).await;
        assert_eq!(banner.state(), BannerState::Visible);
        assert_eq!(coordinator.notifications(banner.surface_id()), vec![banner.clone()]);
        assert!(coordinator.is_group_idle(StackGroup::Top));
    }

    #[tokio::test(start_paused = true)]
    async fn hide_is_idempotent() {
        let coordinator = coordinator();
        let banner = banner(&coordinator, BannerOptions::default().sticky());
        banner.show().await;
        tokio::time::sleep(Duration::from_millis(500)).await;

        assert!(banner.hide().await);
        assert!(!banner.hide().await);
        assert!(!banner.force_hide().await);

        tokio::time::sleep(Duration::from_secs(1)).await;
        assert_eq!(banner.state(), BannerState::Hidden);
        assert!(coordinator.notifications(banner.surface_id()).is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn tap_runs_callback_and_dismisses() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        let coordinator = coordinator();
        let taps = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&taps);
        let options = BannerOptions::default().sticky().on_tap(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        let banner = banner(&coordinator, options);
        banner.show().await;
        tokio::time::sleep(Duration::from_millis(500)).await;

        let center = banner.frame().center();
        let hit = coordinator.tap(banner.surface_id(), center).await;
        assert_eq!(hit, Hit::Banner(banner.clone()));
        assert_eq!(taps.load(Ordering::SeqCst), 1);
        assert!(banner.is_scheduled_to_hide());

        let miss = coordinator
            .tap(banner.surface_id(), Point::new(-50.0, -50.0))
            .await;
        assert_eq!(miss, Hit::PassThrough);
    }

    #[tokio::test(start_paused = true)]
    async fn tap_without_dismiss_keeps_banner() {
        let coordinator = coordinator();
        let banner = banner(
            &coordinator,
            BannerOptions::default().sticky().with_tap_to_dismiss(false),
        );
        banner.show().await;
        tokio::time::sleep(Duration::from_millis(500)).await;

        let hit = coordinator.tap(banner.surface_id(), banner.frame().center()).await;
        assert!(matches!(hit, Hit::Banner(_)));
        assert!(!banner.is_scheduled_to_hide());
    }

    #[tokio::test(start_paused = true)]
    async fn notification_filters_by_tag() {
        let coordinator = coordinator();
        let tagged = banner(&coordinator, BannerOptions::default().sticky().with_tag(9));
        let untagged = banner(&coordinator, BannerOptions::default().sticky());
        tagged.show().await;
        untagged.show().await;
        tokio::time::sleep(Duration::from_secs(1)).await;

        let surface = tagged.surface_id();
        assert_eq!(coordinator.notification(Tag::new(9), surface), vec![tagged]);
        assert_eq!(coordinator.notifications(surface).len(), 2);
    }
}
