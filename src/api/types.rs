// SPDX-License-Identifier: MPL-2.0
//! Wire representations of the backend's JSON payloads.
//!
//! Field names follow the backend (camelCase, `_id`, `public_id`). Every
//! optional field defaults, and an explicit `null` counts as absent, so one
//! sparse document cannot fail the whole list.

use crate::domain::{Gallery, GalleryStatus, Image};
use serde::{Deserialize, Deserializer, Serialize};

/// Older galleries store images as bare URL strings.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ImageDto {
    Url(String),
    Record(ImageRecord),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageRecord {
    pub url: String,
    #[serde(default)]
    pub caption: Option<String>,
    #[serde(default)]
    pub uploaded_at: Option<String>,
    #[serde(default, rename = "public_id", alias = "publicId")]
    pub public_id: Option<String>,
}

#[derive(Debug, Clone, Copy, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StatusDto {
    Draft,
    #[default]
    Published,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryDto {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default)]
    pub thumbnail_image: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub images: Vec<ImageDto>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: StatusDto,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_public: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub location: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub photographer: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub client_name: String,
    #[serde(default)]
    pub event_date: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub views: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub downloads: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub featured: bool,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// The list endpoint answers either with a bare array or a `{ data }` envelope.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum GalleryListResponse {
    Bare(Vec<GalleryDto>),
    Envelope { data: Vec<GalleryDto> },
}

impl GalleryListResponse {
    pub fn into_galleries(self) -> Vec<Gallery> {
        let dtos = match self {
            GalleryListResponse::Bare(dtos) => dtos,
            GalleryListResponse::Envelope { data } => data,
        };
        dtos.into_iter().map(Gallery::from).collect()
    }
}

/// Body of `DELETE /api/v1/delete-image`.
#[derive(Debug, Clone, Serialize)]
pub struct DeleteImageRequest<'a> {
    #[serde(rename = "galleryId")]
    pub gallery_id: &'a str,
    pub public_id: &'a str,
}

/// Loose "operation result" returned by the delete endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct OperationResult {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl OperationResult {
    /// Only an explicit `success: false` counts as failure.
    pub fn is_failure(&self) -> bool {
        self.success == Some(false)
    }

    pub fn reason(&self) -> Option<&str> {
        self.message.as_deref().or(self.error.as_deref())
    }
}

impl From<ImageDto> for Image {
    fn from(dto: ImageDto) -> Self {
        match dto {
            // No public id: such an image can be shown but not deleted.
            ImageDto::Url(url) => Image::new(url),
            ImageDto::Record(record) => Image {
                url: record.url,
                caption: record.caption.filter(|c| !c.trim().is_empty()),
                uploaded_at: record.uploaded_at,
                public_id: record.public_id,
            },
        }
    }
}

impl From<StatusDto> for GalleryStatus {
    fn from(dto: StatusDto) -> Self {
        match dto {
            StatusDto::Draft => GalleryStatus::Draft,
            StatusDto::Published | StatusDto::Unknown => GalleryStatus::Published,
        }
    }
}

impl From<GalleryDto> for Gallery {
    fn from(dto: GalleryDto) -> Self {
        Gallery {
            id: dto.id,
            title: dto.title,
            description: dto.description,
            thumbnail_image: dto.thumbnail_image,
            images: dto.images.into_iter().map(Image::from).collect(),
            category: dto.category,
            tags: dto.tags.into_iter().collect(),
            status: dto.status.into(),
            is_public: dto.is_public,
            location: dto.location,
            photographer: dto.photographer,
            client_name: dto.client_name,
            event_date: dto.event_date,
            created_at: dto.created_at,
            updated_at: dto.updated_at,
            views: dto.views,
            downloads: dto.downloads,
            featured: dto.featured,
        }
    }
}
