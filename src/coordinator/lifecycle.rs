// SPDX-License-Identifier: MPL-2.0
//! Capability interface between a banner and the coordinator.

use crate::banner::Banner;
use async_trait::async_trait;

/// The six lifecycle operations a banner delegates to its coordinator.
///
/// `show` and `hide` are requests and may be refused; the `will_*`/`did_*`
/// notifications are sent by the banner's transitions on the UI context,
/// each `will_*` followed by exactly one matching `did_*`. A banner hidden
/// before its show finishes gets `did_show` right before `will_hide`.
#[async_trait]
pub trait BannerLifecycle: Send + Sync {
    /// Requests that `banner` be shown. Returns false if it was refused.
    async fn show(&self, banner: &Banner) -> bool;

    fn will_show(&self, banner: &Banner);

    fn did_show(&self, banner: &Banner);

    /// Requests that `banner` be hidden. Returns false if a hide was
    /// already requested.
    async fn hide(&self, banner: &Banner, forced: bool) -> bool;

    fn will_hide(&self, banner: &Banner);

    fn did_hide(&self, banner: &Banner);
}
