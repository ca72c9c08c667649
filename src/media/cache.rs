// SPDX-License-Identifier: MPL-2.0
//! Decoded image cache shared by gallery cards and the viewer.
//!
//! # Design
//!
//! - **LRU eviction**: Least recently used images are evicted first
//! - **Count-bounded**: Capacity comes from `[viewer] image_cache_capacity`
//! - **URL-keyed**: Images indexed by the URL the backend returned
//! - **Failures are remembered**: a URL that failed renders the placeholder
//!   without being fetched again until evicted
//!
//! An evicted URL is simply absent again: callers that still need it refetch
//! it and [`ImageCache::promote`] the image on screen to keep it resident.

use crate::api::ApiClient;
use crate::error::{Error, Result};
use crate::media::{decode_image, ImageData};
use lru::LruCache;
use std::collections::HashSet;
use std::num::NonZeroUsize;

/// Default number of decoded images kept in memory.
pub const DEFAULT_CAPACITY: usize = 64;

/// Minimum cache capacity.
pub const MIN_CAPACITY: usize = 8;

/// Maximum cache capacity.
pub const MAX_CAPACITY: usize = 512;

#[derive(Debug, Clone)]
pub enum CachedImage {
    Ready(ImageData),
    Failed,
}

/// Statistics about cache performance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub insertions: u64,
}

pub struct ImageCache {
    cache: LruCache<String, CachedImage>,
    /// URLs with a fetch in flight.
    pending: HashSet<String>,
    stats: CacheStats,
}

impl ImageCache {
    /// Creates a cache holding at most `capacity` images, clamped to
    /// [`MIN_CAPACITY`]..=[`MAX_CAPACITY`].
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let clamped = capacity.clamp(MIN_CAPACITY, MAX_CAPACITY);
        let capacity = NonZeroUsize::new(clamped).unwrap_or(NonZeroUsize::MIN);

        Self {
            cache: LruCache::new(capacity),
            pending: HashSet::new(),
            stats: CacheStats::default(),
        }
    }

    /// Looks up `url` without touching LRU order. Used from `view`.
    #[must_use]
    pub fn peek(&self, url: &str) -> Option<&CachedImage> {
        self.cache.peek(url)
    }

    /// Looks up `url`, marking it as recently used.
    pub fn get(&mut self, url: &str) -> Option<&CachedImage> {
        match self.cache.get(url) {
            Some(entry) => {
                self.stats.hits += 1;
                Some(entry)
            }
            None => {
                self.stats.misses += 1;
                None
            }
        }
    }

    /// Marks `url` as most recently used, if cached.
    pub fn promote(&mut self, url: &str) {
        self.cache.promote(url);
    }

    /// Registers a fetch for `url`.
    ///
    /// Returns `false` if the image is cached or already being fetched.
    pub fn begin_fetch(&mut self, url: &str) -> bool {
        if self.cache.contains(url) || self.pending.contains(url) {
            return false;
        }
        self.pending.insert(url.to_string());
        true
    }

    /// Stores the outcome of a fetch started with [`Self::begin_fetch`].
    ///
    /// Returns `true` if the image decoded successfully.
    pub fn finish_fetch(&mut self, url: &str, result: Result<ImageData>) -> bool {
        self.pending.remove(url);
        let (entry, ok) = match result {
            Ok(image) => (CachedImage::Ready(image), true),
            Err(err) => {
                tracing::debug!(%url, %err, "image fetch failed");
                (CachedImage::Failed, false)
            }
        };
        self.cache.put(url.to_string(), entry);
        self.stats.insertions += 1;
        ok
    }

    /// Returns the URLs from `urls` that are neither cached nor in flight.
    #[must_use]
    pub fn urls_to_fetch<'a>(&self, urls: impl IntoIterator<Item = &'a str>) -> Vec<String> {
        let mut seen = HashSet::new();
        urls.into_iter()
            .filter(|url| !self.cache.contains(*url) && !self.pending.contains(*url))
            .filter(|url| seen.insert(*url))
            .map(str::to_string)
            .collect()
    }

    #[must_use]
    pub fn is_pending(&self, url: &str) -> bool {
        self.pending.contains(url)
    }

    /// Maximum number of images kept.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.cache.cap().get()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    #[must_use]
    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    /// Drops every entry, including remembered failures.
    pub fn clear(&mut self) {
        self.cache.clear();
    }
}

impl Default for ImageCache {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl std::fmt::Debug for ImageCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageCache")
            .field("len", &self.cache.len())
            .field("capacity", &self.cache.cap())
            .field("pending", &self.pending.len())
            .field("stats", &self.stats)
            .finish()
    }
}

/// Downloads and decodes one image.
///
/// Decoding runs on the blocking pool so large images do not stall the
/// async runtime. Returns the URL alongside the result for routing.
pub async fn fetch_image(api: ApiClient, url: String) -> (String, Result<ImageData>) {
    let result = match api.fetch_image(&url).await {
        Ok(bytes) => tokio::task::spawn_blocking(move || decode_image(&bytes))
            .await
            .unwrap_or_else(|e| Err(Error::Decode(format!("decode task failed: {e}")))),
        Err(err) => Err(err),
    };
    (url, result)
}
