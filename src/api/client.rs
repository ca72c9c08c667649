// SPDX-License-Identifier: MPL-2.0
//! Thin wrapper around the three backend endpoints plus image downloads.
//!
//! No retry, caching or deduplication is layered on top: each call issues
//! exactly one request and maps the outcome into [`crate::error::Error`].

use super::types::{DeleteImageRequest, GalleryListResponse, OperationResult};
use crate::domain::Gallery;
use crate::error::{Error, Result};
use reqwest::{StatusCode, Url};
use std::time::Duration;

const LIST_PATH: &str = "api/v1/get-images";
const DELETE_IMAGE_PATH: &str = "api/v1/delete-image";
const DELETE_GALLERY_PATH: &str = "api/v1/delete-gallery";

const USER_AGENT: &str = concat!("GalleryAdmin/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base: Url,
}

impl ApiClient {
    /// Builds a client for `base_url`.
    ///
    /// `timeout` of `None` leaves requests unbounded.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let base = parse_base_url(base_url)?;

        let mut builder = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| Error::Config(format!("HTTP client: {e}")))?;

        Ok(Self { http, base })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// `GET /api/v1/get-images`
    pub async fn list_galleries(&self) -> Result<Vec<Gallery>> {
        let url = self.endpoint(LIST_PATH)?;
        tracing::debug!(%url, "fetching galleries");

        let response = self.http.get(url).send().await?;
        let body = read_success_body(response).await?;
        let parsed: GalleryListResponse = serde_json::from_str(&body)?;
        let galleries = parsed.into_galleries();

        tracing::info!(count = galleries.len(), "galleries loaded");
        Ok(galleries)
    }

    /// `DELETE /api/v1/delete-image` with `{ galleryId, public_id }`.
    pub async fn delete_image(&self, gallery_id: &str, public_id: &str) -> Result<()> {
        let url = self.endpoint(DELETE_IMAGE_PATH)?;
        tracing::debug!(gallery_id, public_id, "deleting image");

        let response = self
            .http
            .delete(url)
            .json(&DeleteImageRequest {
                gallery_id,
                public_id,
            })
            .send()
            .await?;
        read_operation_result(response).await
    }

    /// `DELETE /api/v1/delete-gallery/{galleryId}`
    pub async fn delete_gallery(&self, gallery_id: &str) -> Result<()> {
        let url = self.gallery_url(gallery_id)?;
        tracing::debug!(gallery_id, "deleting gallery");

        let response = self.http.delete(url).send().await?;
        read_operation_result(response).await
    }

    /// Downloads raw image bytes. Relative URLs resolve against the API base.
    pub async fn fetch_image(&self, raw_url: &str) -> Result<Vec<u8>> {
        let url = self.resolve_url(raw_url)?;
        let response = self.http.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(status_error(status, None));
        }
        Ok(response.bytes().await?.to_vec())
    }

    /// Resolves an image URL that may be relative to the API host.
    pub fn resolve_url(&self, raw_url: &str) -> Result<Url> {
        let trimmed = raw_url.trim();
        match Url::parse(trimmed) {
            Ok(url) => Ok(url),
            Err(_) => self
                .base
                .join(trimmed)
                .map_err(|e| Error::Config(format!("invalid image URL '{trimmed}': {e}"))),
        }
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base
            .join(path)
            .map_err(|e| Error::Config(format!("invalid endpoint '{path}': {e}")))
    }

    fn gallery_url(&self, gallery_id: &str) -> Result<Url> {
        let mut url = self.endpoint(DELETE_GALLERY_PATH)?;
        url.path_segments_mut()
            .map_err(|()| Error::Config("API base URL cannot carry a path".into()))?
            .push(gallery_id);
        Ok(url)
    }
}

/// Parses the base URL, ensuring a trailing slash so endpoint joins keep any
/// path prefix.
fn parse_base_url(raw: &str) -> Result<Url> {
    let trimmed = raw.trim();
    let with_slash = if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{trimmed}/")
    };
    let url = Url::parse(&with_slash)
        .map_err(|e| Error::Config(format!("invalid API base URL '{trimmed}': {e}")))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(Error::Config(format!(
            "unsupported API URL scheme '{other}'"
        ))),
    }
}

async fn read_success_body(response: reqwest::Response) -> Result<String> {
    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        return Err(status_error(status, Some(&body)));
    }
    Ok(body)
}

async fn read_operation_result(response: reqwest::Response) -> Result<()> {
    let status = response.status();
    let body = read_success_body(response).await?;
    if body.trim().is_empty() {
        return Ok(());
    }

    // Non-JSON success bodies are accepted as-is.
    let result: OperationResult = serde_json::from_str(&body).unwrap_or_default();
    if result.is_failure() {
        let message = result.reason().unwrap_or("operation failed").to_string();
        tracing::warn!(status = status.as_u16(), %message, "backend reported failure");
        return Err(Error::Http {
            status: status.as_u16(),
            message,
        });
    }
    Ok(())
}

fn status_error(status: StatusCode, body: Option<&str>) -> Error {
    let message = body
        .and_then(|b| serde_json::from_str::<OperationResult>(b).ok())
        .and_then(|r| r.reason().map(str::to_string))
        .unwrap_or_else(|| status.to_string());

    if status == StatusCode::NOT_FOUND {
        Error::NotFound(message)
    } else {
        Error::Http {
            status: status.as_u16(),
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> ApiClient {
        ApiClient::new(base, None).expect("valid base url")
    }

    #[test]
    fn endpoints_keep_base_path_prefix() {
        let api = client("https://admin.test/backend");
        assert_eq!(
            api.endpoint(LIST_PATH).expect("url").as_str(),
            "https://admin.test/backend/api/v1/get-images"
        );
    }

    #[test]
    fn gallery_id_is_percent_encoded() {
        let api = client("http://localhost:3000/");
        let url = api.gallery_url("a b/c").expect("url");
        assert_eq!(
            url.as_str(),
            "http://localhost:3000/api/v1/delete-gallery/a%20b%2Fc"
        );
    }

    #[test]
    fn rejects_non_http_base_url() {
        assert!(matches!(
            ApiClient::new("ftp://example.test", None),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            ApiClient::new("not a url", None),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn resolve_url_handles_relative_and_absolute() {
        let api = client("http://localhost:3000/backend");
        assert_eq!(
            api.resolve_url("https://cdn.test/a.jpg").expect("url").as_str(),
            "https://cdn.test/a.jpg"
        );
        assert_eq!(
            api.resolve_url("/uploads/a.jpg").expect("url").as_str(),
            "http://localhost:3000/uploads/a.jpg"
        );
        assert_eq!(
            api.resolve_url("uploads/a.jpg").expect("url").as_str(),
            "http://localhost:3000/backend/uploads/a.jpg"
        );
    }

    #[test]
    fn status_error_maps_not_found() {
        let err = status_error(StatusCode::NOT_FOUND, Some(r#"{"message":"gone"}"#));
        assert_eq!(err, Error::NotFound("gone".into()));
    }

    #[test]
    fn status_error_falls_back_to_status_text() {
        let err = status_error(StatusCode::INTERNAL_SERVER_ERROR, Some("<html>"));
        match err {
            Error::Http { status, message } => {
                assert_eq!(status, 500);
                assert!(message.contains("500"));
            }
            other => panic!("expected Http, got {other:?}"),
        }
    }
}
