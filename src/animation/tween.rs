// SPDX-License-Identifier: MPL-2.0
//! Tweens and timing curves.
//!
//! The coordinator only needs start and end values; drivers and renderers
//! use [`Running`] to sample intermediate values.

use iced::Rectangle;
use std::time::Duration;
use tokio::time::Instant;

/// Easing applied to an animation's progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimingCurve {
    #[default]
    Linear,
    /// Starts slow, used when closing a gap.
    EaseIn,
    /// Ends slow, used when making room and sliding in.
    EaseOut,
    EaseInOut,
}

impl TimingCurve {
    /// Maps linear progress in `0.0..=1.0` to eased progress.
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            TimingCurve::Linear => t,
            TimingCurve::EaseIn => t * t,
            TimingCurve::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            TimingCurve::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
        }
    }
}

/// What an animation changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tween {
    Frame { from: Rectangle, to: Rectangle },
    Opacity { from: f32, to: f32 },
}

fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

/// Interpolates between two frames.
#[must_use]
pub fn lerp_frame(from: Rectangle, to: Rectangle, t: f32) -> Rectangle {
    Rectangle {
        x: lerp(from.x, to.x, t),
        y: lerp(from.y, to.y, t),
        width: lerp(from.width, to.width, t),
        height: lerp(from.height, to.height, t),
    }
}

/// A tween that started at a given instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Running {
    pub tween: Tween,
    pub start: Instant,
    pub duration: Duration,
    pub curve: TimingCurve,
}

impl Running {
    #[must_use]
    pub fn new(tween: Tween, start: Instant, duration: Duration, curve: TimingCurve) -> Self {
        Self {
            tween,
            start,
            duration,
            curve,
        }
    }

    /// Eased progress at `now`, `1.0` once the duration has elapsed.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.start);
        self.curve
            .apply(elapsed.as_secs_f32() / self.duration.as_secs_f32())
    }

    #[must_use]
    pub fn is_finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.start) >= self.duration
    }

    /// Frame at `now`, if this is a frame tween.
    #[must_use]
    pub fn frame_at(&self, now: Instant) -> Option<Rectangle> {
        match self.tween {
            Tween::Frame { from, to } => Some(lerp_frame(from, to, self.progress(now))),
            Tween::Opacity { .. } => None,
        }
    }

    /// Opacity at `now`, if this is an opacity tween.
    #[must_use]
    pub fn opacity_at(&self, now: Instant) -> Option<f32> {
        match self.tween {
            Tween::Opacity { from, to } => Some(lerp(from, to, self.progress(now))),
            Tween::Frame { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, F32_EPSILON};
    use iced::{Point, Size};

    #[test]
    fn curves_pin_their_endpoints() {
        for curve in [
            TimingCurve::Linear,
            TimingCurve::EaseIn,
            TimingCurve::EaseOut,
            TimingCurve::EaseInOut,
        ] {
            assert_abs_diff_eq!(curve.apply(0.0), 0.0, epsilon = F32_EPSILON);
            assert_abs_diff_eq!(curve.apply(1.0), 1.0, epsilon = F32_EPSILON);
        }
    }

    #[test]
    fn ease_out_leads_and_ease_in_lags() {
        assert!(TimingCurve::EaseOut.apply(0.5) > 0.5);
        assert!(TimingCurve::EaseIn.apply(0.5) < 0.5);
        assert_abs_diff_eq!(TimingCurve::EaseInOut.apply(0.5), 0.5, epsilon = F32_EPSILON);
    }

    #[test]
    fn progress_is_clamped() {
        assert_eq!(TimingCurve::Linear.apply(-1.0), 0.0);
        assert_eq!(TimingCurve::Linear.apply(3.0), 1.0);
    }

    #[tokio::test(start_paused = true)]
    async fn running_frame_tween_samples_midpoint() {
        let from = Rectangle::new(Point::new(0.0, 0.0), Size::new(100.0, 40.0));
        let to = Rectangle::new(Point::new(0.0, 100.0), Size::new(100.0, 40.0));
        let running = Running::new(
            Tween::Frame { from, to },
            Instant::now(),
            Duration::from_millis(200),
            TimingCurve::Linear,
        );

        tokio::time::advance(Duration::from_millis(100)).await;
        let frame = running.frame_at(Instant::now()).expect("frame tween");
        assert_abs_diff_eq!(frame.y, 50.0, epsilon = 1.0);
        assert!(running.opacity_at(Instant::now()).is_none());

        tokio::time::advance(Duration::from_millis(150)).await;
        assert!(running.is_finished(Instant::now()));
        assert_eq!(running.frame_at(Instant::now()), Some(to));
    }

    #[test]
    fn zero_duration_completes_immediately() {
        let running = Running::new(
            Tween::Opacity { from: 0.0, to: 1.0 },
            Instant::now(),
            Duration::ZERO,
            TimingCurve::EaseIn,
        );
        assert_eq!(running.opacity_at(Instant::now()), Some(1.0));
    }
}
