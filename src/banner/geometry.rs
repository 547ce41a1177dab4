// SPDX-License-Identifier: MPL-2.0
//! Banner frame computations.
//!
//! All frames are expressed in host surface coordinates. Top-anchored stacks
//! grow downward, bottom-anchored stacks grow upward.

use crate::domain::banner::{ExitType, HorizontalAnchor, Position};
use iced::{Point, Rectangle, Size};

/// Frame a banner rests at when it is the newest one at its anchor.
#[must_use]
pub fn resting_frame(bounds: Rectangle, position: Position, size: Size, margin: f32) -> Rectangle {
    let x = match position.horizontal() {
        HorizontalAnchor::Left => bounds.x + margin,
        HorizontalAnchor::Center => bounds.x + (bounds.width - size.width) / 2.0,
        HorizontalAnchor::Right => bounds.x + bounds.width - size.width - margin,
    };
    let y = if position.is_top() {
        bounds.y + margin
    } else {
        bounds.y + bounds.height - size.height - margin
    };

    Rectangle::new(Point::new(x, y), size)
}

/// Frame a banner enters from: just past the anchor edge.
#[must_use]
pub fn entry_frame(bounds: Rectangle, position: Position, rest: Rectangle) -> Rectangle {
    let y = if position.is_top() {
        bounds.y - rest.height
    } else {
        bounds.y + bounds.height
    };

    Rectangle { y, ..rest }
}

/// Frame a banner leaves toward, starting from where it currently is.
#[must_use]
pub fn exit_frame(
    exit: ExitType,
    bounds: Rectangle,
    position: Position,
    current: Rectangle,
) -> Rectangle {
    match exit {
        ExitType::Dequeue => entry_frame(bounds, position, current),
        ExitType::Pop => {
            let center = current.center();
            Rectangle::new(center, Size::ZERO)
        }
        ExitType::Slide => {
            let x = match position.horizontal() {
                HorizontalAnchor::Left => bounds.x - current.width,
                HorizontalAnchor::Center | HorizontalAnchor::Right => bounds.x + bounds.width,
            };
            Rectangle { x, ..current }
        }
    }
}

/// Moves a frame along the vertical axis.
#[must_use]
pub fn offset(frame: Rectangle, dy: f32) -> Rectangle {
    Rectangle {
        y: frame.y + dy,
        ..frame
    }
}

/// Vertical displacement for a push of `distance` at `position`.
///
/// Positive distances move away from the anchor edge: downward for top
/// anchors, upward for bottom anchors.
#[must_use]
pub fn push_delta(position: Position, distance: f32) -> f32 {
    if position.is_bottom() {
        -distance
    } else {
        distance
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, F32_EPSILON};

    fn screen() -> Rectangle {
        Rectangle::new(Point::ORIGIN, Size::new(1000.0, 600.0))
    }

    #[test]
    fn top_center_rests_below_top_edge() {
        let frame = resting_frame(screen(), Position::TopCenter, Size::new(300.0, 80.0), 10.0);
        assert_abs_diff_eq!(frame.x, 350.0, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(frame.y, 10.0, epsilon = F32_EPSILON);
        assert_eq!(frame.size(), Size::new(300.0, 80.0));
    }

    #[test]
    fn bottom_right_rests_in_the_corner() {
        let frame = resting_frame(screen(), Position::BottomRight, Size::new(300.0, 80.0), 10.0);
        assert_abs_diff_eq!(frame.x, 690.0, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(frame.y, 510.0, epsilon = F32_EPSILON);
    }

    #[test]
    fn entry_frames_are_off_screen() {
        let size = Size::new(300.0, 80.0);
        let top_rest = resting_frame(screen(), Position::TopLeft, size, 10.0);
        let top_entry = entry_frame(screen(), Position::TopLeft, top_rest);
        assert!(top_entry.y + top_entry.height <= 0.0);
        assert_eq!(top_entry.x, top_rest.x);

        let bottom_rest = resting_frame(screen(), Position::BottomLeft, size, 10.0);
        let bottom_entry = entry_frame(screen(), Position::BottomLeft, bottom_rest);
        assert!(bottom_entry.y >= 600.0);
    }

    #[test]
    fn pop_collapses_to_center() {
        let current = Rectangle::new(Point::new(100.0, 100.0), Size::new(200.0, 50.0));
        let exit = exit_frame(ExitType::Pop, screen(), Position::TopCenter, current);
        assert_eq!(exit.center(), current.center());
        assert_eq!(exit.size(), Size::ZERO);
    }

    #[test]
    fn slide_exits_toward_nearest_side() {
        let current = Rectangle::new(Point::new(10.0, 10.0), Size::new(200.0, 50.0));
        let left = exit_frame(ExitType::Slide, screen(), Position::TopLeft, current);
        assert_abs_diff_eq!(left.x, -200.0, epsilon = F32_EPSILON);
        assert_eq!(left.y, current.y);

        let right = exit_frame(ExitType::Slide, screen(), Position::BottomRight, current);
        assert_abs_diff_eq!(right.x, 1000.0, epsilon = F32_EPSILON);
    }

    #[test]
    fn dequeue_leaves_through_the_anchor_edge() {
        let current = Rectangle::new(Point::new(10.0, 190.0), Size::new(200.0, 50.0));
        let exit = exit_frame(ExitType::Dequeue, screen(), Position::TopCenter, current);
        assert_abs_diff_eq!(exit.y, -50.0, epsilon = F32_EPSILON);
        assert_eq!(exit.x, current.x);
    }

    #[test]
    fn push_direction_depends_on_anchor() {
        assert_eq!(push_delta(Position::TopCenter, 90.0), 90.0);
        assert_eq!(push_delta(Position::BottomLeft, 90.0), -90.0);
        assert_eq!(push_delta(Position::BottomLeft, -90.0), 90.0);
    }
}
