// SPDX-License-Identifier: MPL-2.0
//! Gallery and image value types.
//!
//! Galleries are treated as immutable snapshots: removing an image produces a
//! new [`Gallery`] and leaves the original untouched, so every view holding a
//! copy keeps a consistent sequence until it is explicitly replaced.

use crate::error::ValidationError;
use std::collections::BTreeSet;

/// Publication status of a gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GalleryStatus {
    Draft,
    #[default]
    Published,
}

impl GalleryStatus {
    /// Returns the i18n key of the status label.
    pub fn i18n_key(self) -> &'static str {
        match self {
            GalleryStatus::Draft => "gallery-status-draft",
            GalleryStatus::Published => "gallery-status-published",
        }
    }
}

/// A single image belonging to a gallery.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Image {
    pub url: String,
    pub caption: Option<String>,
    pub uploaded_at: Option<String>,
    /// Backend handle, required to delete this image individually.
    pub public_id: Option<String>,
}

impl Image {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_public_id(mut self, public_id: impl Into<String>) -> Self {
        self.public_id = Some(public_id.into());
        self
    }

    #[must_use]
    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    /// Returns the public identifier when it is present and non-blank.
    pub fn public_id(&self) -> Option<&str> {
        self.public_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
    }
}

/// A named, ordered collection of images with metadata.
///
/// Image order is meaningful: index 0 is the default thumbnail.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Gallery {
    pub id: String,
    pub title: String,
    pub description: String,
    pub thumbnail_image: Option<String>,
    pub images: Vec<Image>,
    pub category: String,
    pub tags: BTreeSet<String>,
    pub status: GalleryStatus,
    pub is_public: bool,
    pub location: String,
    pub photographer: String,
    pub client_name: String,
    pub event_date: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub views: u64,
    pub downloads: u64,
    pub featured: bool,
}

impl Gallery {
    pub fn new(id: impl Into<String>, title: impl Into<String>, images: Vec<Image>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            images,
            ..Self::default()
        }
    }

    pub fn image_count(&self) -> usize {
        self.images.len()
    }

    pub fn image(&self, index: usize) -> Option<&Image> {
        self.images.get(index)
    }

    /// URL used for the gallery card: explicit thumbnail, else the first image.
    pub fn thumbnail_url(&self) -> Option<&str> {
        self.thumbnail_image
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .or_else(|| self.images.first().map(|image| image.url.as_str()))
    }

    pub fn is_draft(&self) -> bool {
        self.status == GalleryStatus::Draft
    }

    /// Whether `updated_at` carries information beyond `created_at`.
    pub fn was_updated(&self) -> bool {
        match (&self.created_at, &self.updated_at) {
            (Some(created), Some(updated)) => created != updated,
            (None, Some(_)) => true,
            _ => false,
        }
    }

    /// Checks that the image at `index` may be deleted individually.
    ///
    /// Returns the image's public identifier on success.
    pub fn validate_image_removal(&self, index: usize) -> Result<&str, ValidationError> {
        let len = self.images.len();
        let image = self
            .images
            .get(index)
            .ok_or(ValidationError::IndexOutOfRange { index, len })?;
        if len <= 1 {
            return Err(ValidationError::LastImage);
        }
        image.public_id().ok_or(ValidationError::MissingPublicId)
    }

    /// Returns a copy of this gallery without the image at `index`.
    ///
    /// The image sequence is never emptied through this path.
    pub fn without_image(&self, index: usize) -> Result<Gallery, ValidationError> {
        let len = self.images.len();
        if index >= len {
            return Err(ValidationError::IndexOutOfRange { index, len });
        }
        if len <= 1 {
            return Err(ValidationError::LastImage);
        }

        let images = self
            .images
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .map(|(_, image)| image.clone())
            .collect();

        Ok(Gallery {
            images,
            ..self.clone()
        })
    }

    /// Index of the image carrying `public_id`, if any.
    pub fn position_of(&self, public_id: &str) -> Option<usize> {
        self.images
            .iter()
            .position(|image| image.public_id() == Some(public_id))
    }
}
