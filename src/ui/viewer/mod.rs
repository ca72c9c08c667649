// SPDX-License-Identifier: MPL-2.0
//! Gallery modal: the lightbox viewer over a single gallery.
//!
//! - [`state`] - selection, loading flag and swipe tracking
//! - [`component`] - modal state machine and its keyboard/touch subscription
//! - [`view`] - layout of the modal

pub mod component;
pub mod state;
mod view;

pub use component::{subscription, Effect, GalleryModal, Message};
pub use state::{ImageViewerState, SwipeDirection, SWIPE_THRESHOLD};
pub use view::{view, ViewContext};
