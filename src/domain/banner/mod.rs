// SPDX-License-Identifier: MPL-2.0
//! Banner domain types.
//!
//! Value objects describing where a banner is anchored, how it leaves the
//! screen and how it is identified. They are independent of any
//! presentation framework.

pub mod newtypes;
pub mod position;

// Re-export commonly used types
pub use newtypes::{BannerId, Opacity, SurfaceId, Tag};
pub use position::{Category, ExitType, HorizontalAnchor, Idiom, ParseError, Position, StackGroup};
