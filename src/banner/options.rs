// SPDX-License-Identifier: MPL-2.0
//! Banner configuration.
//!
//! [`BannerOptions`] carries every recognized option with its documented
//! default. Builders follow the `with_*` pattern and can be chained:
//!
//! ```
//! use iced_banners::banner::BannerOptions;
//! use iced_banners::domain::banner::{ExitType, Position};
//! use std::time::Duration;
//!
//! let options = BannerOptions::default()
//!     .with_position(Position::BottomRight)
//!     .with_exit_type(ExitType::Slide)
//!     .with_seconds_to_show(Duration::from_secs(6));
//! assert_eq!(options.position(), Position::BottomRight);
//! ```

use super::Banner;
use crate::config::defaults;
use crate::domain::banner::{ExitType, Idiom, Opacity, Position, Tag};
use iced::Size;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Callback invoked when a banner is tapped.
pub type TapCallback = Arc<dyn Fn(&Banner) + Send + Sync>;

/// Options recognized when creating a banner.
#[derive(Clone)]
pub struct BannerOptions {
    tag: Tag,
    position: Position,
    size: Size,
    fade_in_duration: Duration,
    fade_out_duration: Duration,
    show_animation_duration: Duration,
    hide_animation_duration: Duration,
    /// `None` keeps the banner until it is hidden explicitly.
    seconds_to_show: Option<Duration>,
    view_opacity: Opacity,
    allow_tap_to_dismiss: bool,
    exit_type: ExitType,
    tapped: Option<TapCallback>,
}

impl BannerOptions {
    /// Returns the defaults for a device class.
    #[must_use]
    pub fn for_idiom(idiom: Idiom) -> Self {
        let size = match idiom {
            Idiom::Phone => Size::new(defaults::PHONE_WIDTH, defaults::PHONE_HEIGHT),
            Idiom::Tablet => Size::new(defaults::TABLET_WIDTH, defaults::TABLET_HEIGHT),
        };

        Self {
            tag: Tag::NONE,
            position: Position::default(),
            size,
            fade_in_duration: Duration::from_secs_f32(defaults::FADE_IN_SECS),
            fade_out_duration: Duration::from_secs_f32(defaults::FADE_OUT_SECS),
            show_animation_duration: Duration::from_secs_f32(defaults::SHOW_ANIMATION_SECS),
            hide_animation_duration: Duration::from_secs_f32(defaults::HIDE_ANIMATION_SECS),
            seconds_to_show: Some(Duration::from_secs_f32(defaults::SECONDS_TO_SHOW)),
            view_opacity: Opacity::new(defaults::VIEW_OPACITY),
            allow_tap_to_dismiss: true,
            exit_type: ExitType::default(),
            tapped: None,
        }
    }

    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<Tag>) -> Self {
        self.tag = tag.into();
        self
    }

    #[must_use]
    pub fn with_position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    #[must_use]
    pub fn with_width(mut self, width: f32) -> Self {
        self.size.width = width.max(0.0);
        self
    }

    /// Sets the banner height. Content measurement happens outside this
    /// crate; the height is taken as given.
    #[must_use]
    pub fn with_height(mut self, height: f32) -> Self {
        self.size.height = height.max(0.0);
        self
    }

    #[must_use]
    pub fn with_fade_in_duration(mut self, duration: Duration) -> Self {
        self.fade_in_duration = duration;
        self
    }

    #[must_use]
    pub fn with_fade_out_duration(mut self, duration: Duration) -> Self {
        self.fade_out_duration = duration;
        self
    }

    #[must_use]
    pub fn with_show_animation_duration(mut self, duration: Duration) -> Self {
        self.show_animation_duration = duration;
        self
    }

    #[must_use]
    pub fn with_hide_animation_duration(mut self, duration: Duration) -> Self {
        self.hide_animation_duration = duration;
        self
    }

    /// Sets how long the banner stays visible before hiding itself.
    #[must_use]
    pub fn with_seconds_to_show(mut self, duration: Duration) -> Self {
        self.seconds_to_show = Some(duration);
        self
    }

    /// Keeps the banner on screen until it is hidden explicitly.
    #[must_use]
    pub fn sticky(mut self) -> Self {
        self.seconds_to_show = None;
        self
    }

    #[must_use]
    pub fn with_view_opacity(mut self, opacity: f32) -> Self {
        self.view_opacity = Opacity::new(opacity);
        self
    }

    #[must_use]
    pub fn with_tap_to_dismiss(mut self, allow: bool) -> Self {
        self.allow_tap_to_dismiss = allow;
        self
    }

    #[must_use]
    pub fn with_exit_type(mut self, exit_type: ExitType) -> Self {
        self.exit_type = exit_type;
        self
    }

    /// Registers a callback run when the banner is tapped.
    #[must_use]
    pub fn on_tap<F>(mut self, callback: F) -> Self
    where
        F: Fn(&Banner) + Send + Sync + 'static,
    {
        self.tapped = Some(Arc::new(callback));
        self
    }

    #[must_use]
    pub fn tag(&self) -> Tag {
        self.tag
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    #[must_use]
    pub fn fade_in_duration(&self) -> Duration {
        self.fade_in_duration
    }

    #[must_use]
    pub fn fade_out_duration(&self) -> Duration {
        self.fade_out_duration
    }

    #[must_use]
    pub fn show_animation_duration(&self) -> Duration {
        self.show_animation_duration
    }

    #[must_use]
    pub fn hide_animation_duration(&self) -> Duration {
        self.hide_animation_duration
    }

    #[must_use]
    pub fn seconds_to_show(&self) -> Option<Duration> {
        self.seconds_to_show
    }

    #[must_use]
    pub fn view_opacity(&self) -> Opacity {
        self.view_opacity
    }

    #[must_use]
    pub fn allows_tap_to_dismiss(&self) -> bool {
        self.allow_tap_to_dismiss
    }

    #[must_use]
    pub fn exit_type(&self) -> ExitType {
        self.exit_type
    }

    #[must_use]
    pub fn tapped_callback(&self) -> Option<&TapCallback> {
        self.tapped.as_ref()
    }
}

impl Default for BannerOptions {
    fn default() -> Self {
        Self::for_idiom(Idiom::default())
    }
}

impl fmt::Debug for BannerOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BannerOptions")
            .field("tag", &self.tag)
            .field("position", &self.position)
            .field("size", &self.size)
            .field("fade_in_duration", &self.fade_in_duration)
            .field("fade_out_duration", &self.fade_out_duration)
            .field("show_animation_duration", &self.show_animation_duration)
            .field("hide_animation_duration", &self.hide_animation_duration)
            .field("seconds_to_show", &self.seconds_to_show)
            .field("view_opacity", &self.view_opacity)
            .field("allow_tap_to_dismiss", &self.allow_tap_to_dismiss)
            .field("exit_type", &self.exit_type)
            .field("tapped", &self.tapped.is_some())
            .finish()
    }
}
