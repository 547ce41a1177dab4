// SPDX-License-Identifier: MPL-2.0
//! Rendering adapter for iced applications.
//!
//! - [`overlay`] - draws the banners of a host surface as positioned cards
//! - [`design_tokens`] - colors, spacing and chrome used by the cards

pub mod design_tokens;
pub mod overlay;
