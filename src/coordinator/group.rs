// SPDX-License-Identifier: MPL-2.0
//! Position groups and reflow plans.
//!
//! A position group is derived on demand: the tracked banners of one host
//! surface sharing one anchor, oldest first. The oldest banner has been
//! pushed furthest from the anchor edge; the newest rests against it.
//!
//! The plan functions are pure so the reflow rules can be checked without
//! a runtime.

use crate::banner::{Banner, BannerState};
use crate::domain::banner::{BannerId, Position, SurfaceId};

/// What a plan needs to know about one member of a group.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StackEntry {
    pub id: BannerId,
    pub height: f32,
    pub state: BannerState,
}

impl From<&Banner> for StackEntry {
    fn from(banner: &Banner) -> Self {
        Self {
            id: banner.id(),
            height: banner.height(),
            state: banner.state(),
        }
    }
}

/// A push to apply to the group member at `index`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Push {
    pub index: usize,
    /// Signed distance; negative pulls toward the anchor edge.
    pub distance: f32,
    pub forward: bool,
}

/// Pushes that make room for an incoming banner of `incoming_height`.
///
/// `order` excludes the incoming banner. Hidden members are not moved.
#[must_use]
pub fn make_room(order: &[StackEntry], incoming_height: f32, gap: f32) -> Vec<Push> {
    let distance = incoming_height + gap;
    order
        .iter()
        .enumerate()
        .filter(|(_, entry)| entry.state != BannerState::Hidden)
        .map(|(index, _)| Push {
            index,
            distance,
            forward: true,
        })
        .collect()
}

/// Pushes that close the gap left by `departing`.
///
/// `order` includes the departing banner. Members older than it sit
/// further out and are pulled in; newer members stay put. Returns `None`
/// when `departing` is not part of `order`.
#[must_use]
pub fn close_gap(order: &[StackEntry], departing: BannerId, gap: f32) -> Option<Vec<Push>> {
    let index = order.iter().position(|entry| entry.id == departing)?;
    let distance = -(order[index].height + gap);
    Some(
        (0..index)
            .map(|index| Push {
                index,
                distance,
                forward: false,
            })
            .collect(),
    )
}

/// Tracked banners of `surface` anchored at `position`, oldest first.
pub(crate) fn position_group(
    tracked: &[Banner],
    surface: SurfaceId,
    position: Position,
) -> Vec<Banner> {
    tracked
        .iter()
        .filter(|banner| banner.surface_id() == surface && banner.position() == position)
        .cloned()
        .collect()
}
