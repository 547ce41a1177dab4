// SPDX-License-Identifier: MPL-2.0
//! Host surfaces banners are presented on.
//!
//! The coordinator only needs a surface's bounds and a place to attach and
//! detach banners. Hit testing has a default implementation that checks
//! the front-most banner first and lets everything else pass through to
//! the application underneath.

pub mod overlay;

pub use overlay::OverlaySurface;

use crate::banner::Banner;
use crate::domain::banner::{BannerId, SurfaceId};
use iced::{Point, Rectangle};
use tokio::time::Instant;

/// Result of a pointer hit on a host surface.
#[derive(Debug, Clone, PartialEq)]
pub enum Hit {
    /// The pointer landed on this banner.
    Banner(Banner),
    /// Nothing here; forward the event to the application surface.
    PassThrough,
}

/// A surface banners are attached to while on screen.
pub trait HostSurface: Send + Sync {
    fn id(&self) -> SurfaceId;

    /// Area banners are laid out in.
    fn bounds(&self) -> Rectangle;

    /// Adds a banner on top of the existing children.
    fn attach(&self, banner: &Banner);

    fn detach(&self, banner: BannerId);

    /// Attached banners, back to front.
    fn children(&self) -> Vec<Banner>;

    /// Finds the front-most banner under `point` that accepts touches.
    fn hit_test(&self, point: Point, now: Instant) -> Hit {
        self.children()
            .into_iter()
            .rev()
            .find(|banner| {
                banner.state().accepts_touch() && banner.presented(now).0.contains(point)
            })
            .map_or(Hit::PassThrough, Hit::Banner)
    }
}
