// SPDX-License-Identifier: MPL-2.0
//! Image decoding from downloaded bytes (PNG, JPEG, GIF, WebP, BMP, SVG).

use crate::error::{Error, Result};
use iced::widget::image;
use image_rs::{GenericImageView, ImageError};
use resvg::usvg;
use std::sync::OnceLock;

/// Shown in place of images that fail to download or decode.
const PLACEHOLDER_SVG: &[u8] = include_bytes!("../../assets/placeholder.svg");

/// Neutral grey used if the placeholder artwork itself cannot be rendered.
const FALLBACK_PIXEL: [u8; 4] = [0x9c, 0xa3, 0xaf, 0xff];

#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl ImageData {
    /// Creates a new `ImageData` from RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            handle: image::Handle::from_rgba(width, height, pixels),
            width,
            height,
        }
    }
}

/// Decodes downloaded image bytes.
///
/// SVG documents are detected by content and rasterized with resvg; all
/// other data goes through the raster decoders.
///
/// # Errors
///
/// Returns [`Error::Decode`] if the bytes are not a supported image or if an
/// SVG has zero dimensions.
pub fn decode_image(bytes: &[u8]) -> Result<ImageData> {
    if looks_like_svg(bytes) {
        rasterize_svg(bytes)
    } else {
        let img = image_rs::load_from_memory(bytes)?;
        let (width, height) = img.dimensions();
        Ok(ImageData::from_rgba(width, height, img.to_rgba8().into_vec()))
    }
}

/// The built-in placeholder graphic, rendered once.
pub fn placeholder() -> &'static ImageData {
    static PLACEHOLDER: OnceLock<ImageData> = OnceLock::new();
    PLACEHOLDER.get_or_init(|| {
        rasterize_svg(PLACEHOLDER_SVG).unwrap_or_else(|err| {
            tracing::warn!(%err, "placeholder artwork failed to render");
            ImageData::from_rgba(1, 1, FALLBACK_PIXEL.to_vec())
        })
    })
}

fn looks_like_svg(bytes: &[u8]) -> bool {
    let head = &bytes[..bytes.len().min(512)];
    let text = String::from_utf8_lossy(head);
    let text = text.trim_start_matches('\u{feff}').trim_start();
    text.starts_with("<svg") || (text.starts_with("<?xml") && text.contains("<svg"))
}

fn rasterize_svg(data: &[u8]) -> Result<ImageData> {
    let tree = usvg::Tree::from_data(data, &usvg::Options::default())
        .map_err(|e| Error::Decode(e.to_string()))?;

    let pixmap_size = tree.size().to_int_size();
    let width = pixmap_size.width();
    let height = pixmap_size.height();
    if width == 0 || height == 0 {
        return Err(Error::Decode("SVG has empty dimensions".into()));
    }

    let mut pixmap = tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| Error::Decode("Failed to allocate SVG pixmap".into()))?;

    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

    Ok(ImageData::from_rgba(width, height, pixmap.take()))
}

impl From<ImageError> for Error {
    fn from(err: ImageError) -> Self {
        Error::Decode(err.to_string())
    }
}
