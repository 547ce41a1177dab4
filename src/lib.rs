// SPDX-License-Identifier: MPL-2.0
//! `iced_banners` presents stacks of transient notification banners above
//! an application's content.
//!
//! Banners enter from one of six anchors, stay for a configured time and
//! leave with one of three exit animations. Banners sharing an anchor stack
//! and reflow as siblings come and go. The [`coordinator`] serializes show
//! and hide requests so that at most one of them animates per stack group.

#![doc(html_root_url = "https://docs.rs/iced_banners/0.1.0")]

pub mod animation;
pub mod banner;
pub mod config;
pub mod coordinator;
pub mod domain;
pub mod error;
pub mod surface;
pub mod ui;

#[cfg(test)]
mod test_utils;

pub use banner::{Banner, BannerOptions, BannerState};
pub use coordinator::{Coordinator, LifecycleEvent, Settings};
pub use domain::banner::{Category, ExitType, Position, Tag};
pub use error::{Error, Result};
