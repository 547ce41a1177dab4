// SPDX-License-Identifier: MPL-2.0
//! Banner lifecycle state machine.
//!
//! A banner moves through `Hidden → Showing → Visible → Hiding → Hidden`.
//! While visible it may be pushed by a sibling, entering `MovingForward` or
//! `MovingBackward` until the move animation completes.
//!
//! Transitions are driven only by animation completions; the pure helpers
//! here compute the next state, the banner stores it.

use crate::animation::AnimationKind;
use std::sync::atomic::{AtomicU8, Ordering};

/// Lifecycle state of a banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum BannerState {
    /// Not on screen. Initial and terminal state.
    #[default]
    Hidden = 0,
    /// Fading and sliding in.
    Showing = 1,
    /// Resting at its slot.
    Visible = 2,
    /// Exit animation or fade-out in progress.
    Hiding = 3,
    /// Being pushed away from the anchor edge to make room.
    MovingForward = 4,
    /// Being pulled toward the anchor edge to close a gap.
    MovingBackward = 5,
}

impl BannerState {
    fn from_u8(value: u8) -> Self {
        match value {
            1 => Self::Showing,
            2 => Self::Visible,
            3 => Self::Hiding,
            4 => Self::MovingForward,
            5 => Self::MovingBackward,
            _ => Self::Hidden,
        }
    }

    /// Returns the state after an animation of `kind` completed.
    #[must_use]
    pub fn completed(self, kind: AnimationKind) -> Self {
        match (self, kind) {
            (Self::Showing, AnimationKind::Show) => Self::Visible,
            (Self::MovingForward | Self::MovingBackward, AnimationKind::Move) => Self::Visible,
            (Self::Hiding, AnimationKind::FadeOut) => Self::Hidden,
            (state, _) => state,
        }
    }

    /// Returns the state after a sibling started pushing this banner.
    ///
    /// Only a resting banner changes state; a banner that is still entering
    /// or already leaving keeps its state and just moves.
    #[must_use]
    pub fn pushed(self, forward: bool) -> Self {
        match self {
            Self::Visible | Self::MovingForward | Self::MovingBackward => {
                if forward {
                    Self::MovingForward
                } else {
                    Self::MovingBackward
                }
            }
            state => state,
        }
    }

    /// Returns true while the banner is on screen and not leaving.
    #[must_use]
    pub fn accepts_touch(self) -> bool {
        matches!(
            self,
            Self::Showing | Self::Visible | Self::MovingForward | Self::MovingBackward
        )
    }

    /// Returns true while the banner is being reflowed by a sibling.
    #[must_use]
    pub fn is_moving(self) -> bool {
        matches!(self, Self::MovingForward | Self::MovingBackward)
    }
}

/// Lock-free cell holding a [`BannerState`].
///
/// Written only from the UI context; read from anywhere.
#[derive(Debug, Default)]
pub(crate) struct StateCell(AtomicU8);

impl StateCell {
    pub(crate) fn get(&self) -> BannerState {
        BannerState::from_u8(self.0.load(Ordering::Acquire))
    }

    pub(crate) fn set(&self, state: BannerState) {
        self.0.store(state as u8, Ordering::Release);
    }
}
