// SPDX-License-Identifier: MPL-2.0
//! Transparent overlay surface.
//!
//! The coordinator creates one lazily, sized to the application window.
//! Applications resize it when their window changes.

use super::HostSurface;
use crate::banner::Banner;
use crate::domain::banner::{BannerId, SurfaceId};
use iced::{Point, Rectangle, Size};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Always-on-top surface covering the whole window.
#[derive(Debug)]
pub struct OverlaySurface {
    id: SurfaceId,
    bounds: Mutex<Rectangle>,
    children: Mutex<Vec<Banner>>,
}

impl OverlaySurface {
    #[must_use]
    pub fn new(size: Size) -> Self {
        Self {
            id: SurfaceId::next(),
            bounds: Mutex::new(Rectangle::new(Point::ORIGIN, size)),
            children: Mutex::new(Vec::new()),
        }
    }

    /// Updates the overlay size. Banners already on screen keep their frames.
    pub fn resize(&self, size: Size) {
        *lock(&self.bounds) = Rectangle::new(Point::ORIGIN, size);
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl HostSurface for OverlaySurface {
    fn id(&self) -> SurfaceId {
        self.id
    }

    fn bounds(&self) -> Rectangle {
        *lock(&self.bounds)
    }

    fn attach(&self, banner: &Banner) {
        let mut children = lock(&self.children);
        if !children.contains(banner) {
            children.push(banner.clone());
        }
    }

    fn detach(&self, banner: BannerId) {
        lock(&self.children).retain(|child| child.id() != banner);
    }

    fn children(&self) -> Vec<Banner> {
        lock(&self.children).clone()
    }
}
