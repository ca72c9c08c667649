// SPDX-License-Identifier: MPL-2.0
//! Domain layer - gallery data model with no dependency on the UI or wire format.
//!
//! Wire representations live in [`crate::api::types`] and convert into these
//! types at the network boundary.
//!
//! # Modules
//!
//! - [`gallery`]: [`Gallery`](gallery::Gallery), [`Image`](gallery::Image),
//!   [`GalleryStatus`](gallery::GalleryStatus)

pub mod gallery;

pub use gallery::{Gallery, GalleryStatus, Image};
