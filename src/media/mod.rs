// SPDX-License-Identifier: MPL-2.0
//! Downloading, decoding and caching of gallery images.

pub mod cache;
pub mod image;

pub use cache::{CachedImage, ImageCache};
pub use image::{decode_image, placeholder, ImageData};
