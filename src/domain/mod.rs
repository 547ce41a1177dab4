// SPDX-License-Identifier: MPL-2.0
//! Domain layer - value objects with no runtime dependencies.
//!
//! # Modules
//!
//! - [`banner`]: banner identity and configuration enums
//!   ([`Position`](banner::Position), [`ExitType`](banner::ExitType),
//!   [`Tag`](banner::Tag), [`Category`](banner::Category))

pub mod banner;
