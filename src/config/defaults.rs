// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Stack**: spacing between stacked banners and the screen edge
//! - **Timing**: fade, slide and auto-hide durations (in seconds)
//! - **Size**: default banner dimensions per device idiom
//! - **Overlay**: default window size used by the demo

// ==========================================================================
// Stack Defaults
// ==========================================================================

/// Gap between two stacked banners, added to a banner's height when it
/// pushes or pulls its siblings.
pub const STACK_GAP: f32 = 10.0;

/// Distance between a resting banner and the screen edges it is anchored to.
pub const EDGE_MARGIN: f32 = 10.0;

// ==========================================================================
// Timing Defaults
// ==========================================================================

/// Fade-in duration when a banner appears.
pub const FADE_IN_SECS: f32 = 0.25;

/// Fade-out duration after the exit animation.
pub const FADE_OUT_SECS: f32 = 0.2;

/// Slide-in animation duration.
pub const SHOW_ANIMATION_SECS: f32 = 0.25;

/// Exit animation duration.
pub const HIDE_ANIMATION_SECS: f32 = 0.25;

/// How long a banner stays visible before it hides itself.
pub const SECONDS_TO_SHOW: f32 = 4.0;

/// How much the slide-in overlaps the end of the fade-in.
pub const SHOW_OVERLAP_SECS: f32 = 0.05;

/// Exit and fade-out duration used by forced hides.
pub const FORCED_HIDE_SECS: f32 = 0.1;

/// Minimum auto-hide delay accepted from configuration files.
pub const MIN_SECONDS_TO_SHOW: f32 = 0.5;

/// Maximum auto-hide delay accepted from configuration files.
pub const MAX_SECONDS_TO_SHOW: f32 = 120.0;

// ==========================================================================
// Appearance Defaults
// ==========================================================================

/// Resting opacity of a banner.
pub const VIEW_OPACITY: f32 = 0.95;

/// Default banner width on phone-class devices.
pub const PHONE_WIDTH: f32 = 300.0;

/// Default banner height on phone-class devices.
pub const PHONE_HEIGHT: f32 = 80.0;

/// Default banner width on tablet-class devices.
pub const TABLET_WIDTH: f32 = 420.0;

/// Default banner height on tablet-class devices.
pub const TABLET_HEIGHT: f32 = 96.0;

// ==========================================================================
// Overlay Defaults
// ==========================================================================

/// Default overlay width used when a configuration file provides none.
pub const WINDOW_WIDTH: f32 = 1280.0;

/// Default overlay height used when a configuration file provides none.
pub const WINDOW_HEIGHT: f32 = 800.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(STACK_GAP >= 0.0);
    assert!(EDGE_MARGIN >= 0.0);

    // The slide-in starts before the fade-in ends, never before it starts
    assert!(SHOW_OVERLAP_SECS < FADE_IN_SECS);
    assert!(FORCED_HIDE_SECS < HIDE_ANIMATION_SECS);
    assert!(FORCED_HIDE_SECS < FADE_OUT_SECS);

    assert!(MIN_SECONDS_TO_SHOW > 0.0);
    assert!(MAX_SECONDS_TO_SHOW >= MIN_SECONDS_TO_SHOW);
    assert!(SECONDS_TO_SHOW >= MIN_SECONDS_TO_SHOW);
    assert!(SECONDS_TO_SHOW <= MAX_SECONDS_TO_SHOW);

    assert!(VIEW_OPACITY > 0.0);
    assert!(VIEW_OPACITY <= 1.0);

    assert!(TABLET_WIDTH > PHONE_WIDTH);
    assert!(TABLET_HEIGHT > PHONE_HEIGHT);
    assert!(WINDOW_WIDTH > TABLET_WIDTH);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn show_timeline_defaults_are_valid() {
        assert_eq!(FADE_IN_SECS, 0.25);
        assert_eq!(SHOW_ANIMATION_SECS, 0.25);
        assert!(SHOW_OVERLAP_SECS < FADE_IN_SECS);
    }

    #[test]
    fn forced_hide_is_shorter_than_normal_hide() {
        assert!(FORCED_HIDE_SECS < HIDE_ANIMATION_SECS);
        assert!(FORCED_HIDE_SECS < FADE_OUT_SECS);
    }

    #[test]
    fn seconds_to_show_defaults_are_valid() {
        assert_eq!(SECONDS_TO_SHOW, 4.0);
        assert!(SECONDS_TO_SHOW >= MIN_SECONDS_TO_SHOW);
        assert!(SECONDS_TO_SHOW <= MAX_SECONDS_TO_SHOW);
    }

    #[test]
    fn tablet_banners_are_larger() {
        assert!(TABLET_WIDTH > PHONE_WIDTH);
        assert!(TABLET_HEIGHT > PHONE_HEIGHT);
    }
}
