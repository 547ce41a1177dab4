// SPDX-License-Identifier: MPL-2.0
//! Banner newtypes.
//!
//! Type-safe wrappers for banner identity and presentation values.

use std::sync::atomic::{AtomicU64, Ordering};

// =============================================================================
// BannerId
// =============================================================================

/// Unique identifier for a banner, allocated at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BannerId(u64);

impl BannerId {
    /// Allocates a new unique banner ID.
    #[must_use]
    pub fn next() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the raw identifier.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for BannerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "banner#{}", self.0)
    }
}

// =============================================================================
// SurfaceId
// =============================================================================

/// Identifier of a host surface banners are attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SurfaceId(u64);

impl SurfaceId {
    /// Allocates a new unique surface ID.
    #[must_use]
    pub fn next() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the raw identifier.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

// =============================================================================
// Tag
// =============================================================================

/// Optional client tag.
///
/// `0` means untagged. Any other value makes the banner a singleton for that
/// tag within its host surface: a second banner carrying the same tag is not
/// shown while the first one is still around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Tag(u32);

impl Tag {
    /// The untagged value.
    pub const NONE: Self = Self(0);

    #[must_use]
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }

    /// Returns true if this tag restricts the banner to one instance per surface.
    #[must_use]
    pub fn is_singleton(self) -> bool {
        self.0 > 0
    }
}

impl From<u32> for Tag {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

// =============================================================================
// Opacity
// =============================================================================

/// Resting opacity of a banner, guaranteed to be within `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Opacity(f32);

impl Opacity {
    /// Fully opaque.
    pub const OPAQUE: Self = Self(1.0);

    /// Creates a new opacity, clamping the value to the valid range.
    /// NaN is treated as fully opaque.
    #[must_use]
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            return Self::OPAQUE;
        }
        Self(value.clamp(0.0, 1.0))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for Opacity {
    fn default() -> Self {
        Self::OPAQUE
    }
}
