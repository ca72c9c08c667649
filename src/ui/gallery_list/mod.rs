// SPDX-License-Identifier: MPL-2.0
//! Gallery collection: loading, card grid and reconciliation after deletes.
//!
//! The controller never talks to the network. [`GalleryListController::load`]
//! hands back a request token and the owner reports the response through
//! [`Message::Loaded`]; responses carrying an outdated token are dropped so a
//! refresh issued mid-load cannot be overwritten by the earlier answer.

mod view;

pub use view::{view, ViewContext};

use crate::domain::Gallery;
use crate::error::Error;

/// Observable state of the collection.
#[derive(Debug, Clone, Default)]
pub enum LoadState {
    #[default]
    Loading,
    Loaded(Vec<Gallery>),
    Failed(Error),
}

#[derive(Debug, Clone)]
pub enum Message {
    Retry,
    ToggleErrorDetails,
    Loaded {
        request: u64,
        result: Result<Vec<Gallery>, Error>,
    },
    Open(String),
    RequestDelete(String),
}

#[derive(Debug, Clone)]
pub enum Effect {
    None,
    /// Issue `GET /api/v1/get-images` tagged with `request`.
    Fetch { request: u64 },
    /// Collection replaced; thumbnails may need fetching.
    Loaded,
    /// Collection could not be loaded.
    LoadFailed(Error),
    OpenGallery(Gallery),
    RequestDelete(Gallery),
}

#[derive(Debug, Default)]
pub struct GalleryListController {
    state: LoadState,
    request: u64,
    show_error_details: bool,
}

impl GalleryListController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, LoadState::Loading)
    }

    pub fn show_error_details(&self) -> bool {
        self.show_error_details
    }

    /// Galleries currently shown; empty unless loaded.
    pub fn galleries(&self) -> &[Gallery] {
        match &self.state {
            LoadState::Loaded(galleries) => galleries,
            LoadState::Loading | LoadState::Failed(_) => &[],
        }
    }

    pub fn find(&self, gallery_id: &str) -> Option<&Gallery> {
        self.galleries().iter().find(|g| g.id == gallery_id)
    }

    /// Enters `Loading` and returns the fetch to perform.
    pub fn load(&mut self) -> Effect {
        self.request = self.request.wrapping_add(1);
        self.state = LoadState::Loading;
        self.show_error_details = false;
        Effect::Fetch {
            request: self.request,
        }
    }

    pub fn handle(&mut self, message: Message) -> Effect {
        match message {
            Message::Retry => self.load(),
            Message::ToggleErrorDetails => {
                self.show_error_details = !self.show_error_details;
                Effect::None
            }
            Message::Loaded { request, result } => {
                if request != self.request {
                    tracing::debug!(request, current = self.request, "dropping stale gallery list");
                    return Effect::None;
                }
                match result {
                    Ok(galleries) => {
                        self.state = LoadState::Loaded(galleries);
                        Effect::Loaded
                    }
                    Err(error) => {
                        self.state = LoadState::Failed(error.clone());
                        Effect::LoadFailed(error)
                    }
                }
            }
            Message::Open(id) => self
                .find(&id)
                .cloned()
                .map_or(Effect::None, Effect::OpenGallery),
            Message::RequestDelete(id) => self
                .find(&id)
                .cloned()
                .map_or(Effect::None, Effect::RequestDelete),
        }
    }

    /// Removes a gallery after the backend confirmed its deletion.
    ///
    /// Returns `true` if the gallery was present.
    pub fn handle_deleted(&mut self, gallery_id: &str) -> bool {
        match &mut self.state {
            LoadState::Loaded(galleries) => {
                let before = galleries.len();
                galleries.retain(|g| g.id != gallery_id);
                galleries.len() != before
            }
            LoadState::Loading | LoadState::Failed(_) => false,
        }
    }

    /// Swaps in a new snapshot of a gallery, matched by id.
    pub fn replace_gallery(&mut self, updated: Gallery) -> bool {
        match &mut self.state {
            LoadState::Loaded(galleries) => {
                match galleries.iter_mut().find(|g| g.id == updated.id) {
                    Some(slot) => {
                        *slot = updated;
                        true
                    }
                    None => false,
                }
            }
            LoadState::Loading | LoadState::Failed(_) => false,
        }
    }
}
