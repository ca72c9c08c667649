// SPDX-License-Identifier: MPL-2.0
//! Gallery modal: lightbox, thumbnail strip, details and delete actions.
//!
//! The modal owns a snapshot of the gallery it shows, the selection state of
//! the lightbox and its own [`DeleteConfirmationFlow`]. Network work and
//! image decoding are requested from the application through [`Effect`].

use super::state::ImageViewerState;
use crate::domain::Gallery;
use crate::error::{Error, ValidationError};
use crate::ui::delete_confirmation::{self, DeleteConfirmationFlow, PendingDeletion};
use iced::keyboard::{self, key::Named, Key};
use iced::{event, touch, Subscription};

#[derive(Debug, Clone)]
pub enum Message {
    Close,
    Next,
    Previous,
    SelectIndex(usize),
    ToggleDetails,
    /// Keyboard or touch event routed by [`subscription`].
    RawEvent(event::Event),
    RequestDeleteImage,
    RequestDeleteGallery,
    Delete(delete_confirmation::Message),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Modal opened; these image URLs should be fetched for the strip.
    Prefetch(Vec<String>),
    Closed,
    /// Deletion rejected before confirmation.
    Warn(ValidationError),
    /// Perform the confirmed delete request.
    Execute(PendingDeletion),
    /// Image removed server-side; carries the new gallery snapshot.
    ImageDeleted(Gallery),
    /// Gallery removed server-side; the modal is already closed.
    GalleryDeleted(String),
    DeleteFailed {
        target: PendingDeletion,
        error: Error,
    },
}

#[derive(Debug, Default)]
pub struct GalleryModal {
    gallery: Option<Gallery>,
    viewer: ImageViewerState,
    delete: DeleteConfirmationFlow,
    show_details: bool,
}

impl GalleryModal {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens the modal on the first image of `gallery`.
    pub fn open(&mut self, gallery: Gallery) -> Effect {
        self.viewer.open(gallery.image_count());
        self.delete = DeleteConfirmationFlow::new();
        self.show_details = false;

        let urls = gallery.images.iter().map(|image| image.url.clone()).collect();
        tracing::debug!(gallery = %gallery.id, images = gallery.image_count(), "opening gallery");
        self.gallery = Some(gallery);
        Effect::Prefetch(urls)
    }

    pub fn is_open(&self) -> bool {
        self.viewer.is_open()
    }

    pub fn gallery(&self) -> Option<&Gallery> {
        self.gallery.as_ref()
    }

    pub fn viewer(&self) -> &ImageViewerState {
        &self.viewer
    }

    pub fn delete_flow(&self) -> &DeleteConfirmationFlow {
        &self.delete
    }

    pub fn show_details(&self) -> bool {
        self.show_details
    }

    /// URL of the displayed image.
    pub fn current_url(&self) -> Option<&str> {
        self.gallery
            .as_ref()
            .and_then(|g| g.image(self.viewer.index()))
            .map(|image| image.url.as_str())
    }

    /// URL of the displayed image while it is still loading.
    pub fn loading_url(&self) -> Option<&str> {
        if self.viewer.is_loading() {
            self.current_url()
        } else {
            None
        }
    }

    /// Reports that `url` finished loading.
    ///
    /// Ignored unless `url` is the image being waited for, so a slow
    /// response for an image navigated away from cannot settle the new one.
    pub fn settle_image(&mut self, url: &str, ok: bool) -> bool {
        if self.loading_url() != Some(url) {
            return false;
        }
        if ok {
            self.viewer.on_image_loaded();
        } else {
            self.viewer.on_image_load_failed();
        }
        true
    }

    /// Shows the spinner until the current image is fetched again.
    pub fn reload_current(&mut self) {
        self.viewer.reload();
    }

    /// Replaces the held snapshot if it has the same id.
    pub fn replace_gallery(&mut self, updated: &Gallery) {
        if let Some(gallery) = self.gallery.as_mut().filter(|g| g.id == updated.id) {
            *gallery = updated.clone();
        }
    }

    pub fn handle(&mut self, message: Message) -> Effect {
        if !self.is_open() {
            return Effect::None;
        }

        match message {
            Message::Close => self.close(),
            Message::Next => {
                if self.delete.is_idle() {
                    self.viewer.next();
                }
                Effect::None
            }
            Message::Previous => {
                if self.delete.is_idle() {
                    self.viewer.previous();
                }
                Effect::None
            }
            Message::SelectIndex(index) => {
                if self.delete.is_idle() {
                    self.viewer.select_index(index);
                }
                Effect::None
            }
            Message::ToggleDetails => {
                self.show_details = !self.show_details;
                Effect::None
            }
            Message::RawEvent(event) => self.handle_raw_event(event),
            Message::RequestDeleteImage => {
                let Some(gallery) = &self.gallery else {
                    return Effect::None;
                };
                let target = PendingDeletion::image(gallery, self.viewer.index());
                let effect = self.delete.request(target);
                self.route_delete(effect)
            }
            Message::RequestDeleteGallery => {
                let Some(gallery) = &self.gallery else {
                    return Effect::None;
                };
                let target = Ok(PendingDeletion::gallery(gallery));
                let effect = self.delete.request(target);
                self.route_delete(effect)
            }
            Message::Delete(message) => {
                let effect = self.delete.handle(message);
                self.route_delete(effect)
            }
        }
    }

    fn close(&mut self) -> Effect {
        // An in-flight delete must resolve first
        if self.delete.is_deleting() {
            return Effect::None;
        }
        self.viewer.close();
        self.delete = DeleteConfirmationFlow::new();
        self.gallery = None;
        Effect::Closed
    }

    fn handle_raw_event(&mut self, event: event::Event) -> Effect {
        match event {
            event::Event::Keyboard(keyboard::Event::KeyPressed {
                key: Key::Named(named),
                ..
            }) => self.handle_key(named),
            event::Event::Touch(touch) => {
                self.handle_touch(touch);
                Effect::None
            }
            _ => Effect::None,
        }
    }

    fn handle_key(&mut self, key: Named) -> Effect {
        match key {
            Named::Escape if self.delete.is_idle() => self.close(),
            Named::Escape => {
                let effect = self
                    .delete
                    .handle(delete_confirmation::Message::EscapePressed);
                self.route_delete(effect)
            }
            Named::ArrowLeft => self.handle(Message::Previous),
            Named::ArrowRight => self.handle(Message::Next),
            _ => Effect::None,
        }
    }

    fn handle_touch(&mut self, event: touch::Event) {
        match event {
            touch::Event::FingerPressed { position, .. } => {
                self.viewer.record_touch_start(position.x);
            }
            touch::Event::FingerMoved { position, .. } => {
                self.viewer.record_touch_move(position.x);
            }
            touch::Event::FingerLifted { .. } => {
                if !self.delete.is_idle() {
                    self.viewer.clear_touch();
                    return;
                }
                if let Some(direction) = self.viewer.resolve_touch_end() {
                    tracing::trace!(?direction, index = self.viewer.index(), "swipe");
                }
            }
            touch::Event::FingerLost { .. } => self.viewer.clear_touch(),
        }
    }

    fn route_delete(&mut self, effect: delete_confirmation::Effect) -> Effect {
        match effect {
            delete_confirmation::Effect::None => Effect::None,
            delete_confirmation::Effect::Rejected(reason) => Effect::Warn(reason),
            delete_confirmation::Effect::Execute(target) => Effect::Execute(target),
            delete_confirmation::Effect::Failed { target, error } => {
                Effect::DeleteFailed { target, error }
            }
            delete_confirmation::Effect::Committed(target) => self.commit(target),
        }
    }

    fn commit(&mut self, target: PendingDeletion) -> Effect {
        match target {
            PendingDeletion::Gallery { gallery_id, .. } => {
                self.viewer.close();
                self.gallery = None;
                Effect::GalleryDeleted(gallery_id)
            }
            PendingDeletion::Image {
                public_id, index, ..
            } => {
                let Some(gallery) = &self.gallery else {
                    return Effect::None;
                };
                let position = gallery.position_of(&public_id).unwrap_or(index);
                match gallery.without_image(position) {
                    Ok(updated) => {
                        self.viewer
                            .on_image_removed(position, updated.image_count());
                        self.gallery = Some(updated.clone());
                        Effect::ImageDeleted(updated)
                    }
                    Err(reason) => {
                        tracing::warn!(%reason, %public_id, "deleted image no longer matches local snapshot");
                        Effect::None
                    }
                }
            }
        }
    }
}

/// Keyboard and touch events for the open modal.
///
/// Only returned by the application while the modal is open, so the
/// listener exists exactly as long as the modal does. Events already
/// captured by a widget are dropped.
pub fn subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window| {
        if status == event::Status::Captured {
            return None;
        }
        let relevant = matches!(
            event,
            event::Event::Keyboard(keyboard::Event::KeyPressed {
                key: Key::Named(Named::Escape | Named::ArrowLeft | Named::ArrowRight),
                ..
            }) | event::Event::Touch(_)
        );
        relevant.then_some(Message::RawEvent(event))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Image;
    use crate::ui::delete_confirmation::Message as DeleteMessage;
    use iced::Point;

    fn gallery(ids: &[&str]) -> Gallery {
        let images = ids
            .iter()
            .map(|id| Image::new(format!("https://cdn.test/{id}.jpg")).with_public_id(*id))
            .collect();
        Gallery::new("gallery_001", "Sunset", images)
    }

    fn opened(ids: &[&str]) -> GalleryModal {
        let mut modal = GalleryModal::new();
        modal.open(gallery(ids));
        modal
    }

    fn finger(make: fn(Point) -> touch::Event, x: f32) -> Message {
        Message::RawEvent(event::Event::Touch(make(Point::new(x, 100.0))))
    }

    fn pressed(position: Point) -> touch::Event {
        touch::Event::FingerPressed {
            id: touch::Finger(0),
            position,
        }
    }

    fn moved(position: Point) -> touch::Event {
        touch::Event::FingerMoved {
            id: touch::Finger(0),
            position,
        }
    }

    fn lifted(position: Point) -> touch::Event {
        touch::Event::FingerLifted {
            id: touch::Finger(0),
            position,
        }
    }

    fn lost(position: Point) -> touch::Event {
        touch::Event::FingerLost {
            id: touch::Finger(0),
            position,
        }
    }

    #[test]
    fn open_prefetches_every_image() {
        let mut modal = GalleryModal::new();
        let effect = modal.open(gallery(&["a", "b"]));
        assert_eq!(
            effect,
            Effect::Prefetch(vec![
                "https://cdn.test/a.jpg".to_string(),
                "https://cdn.test/b.jpg".to_string()
            ])
        );
        assert_eq!(modal.loading_url(), Some("https://cdn.test/a.jpg"));
    }

    #[test]
    fn settle_ignores_other_urls() {
        let mut modal = opened(&["a", "b"]);
        assert!(!modal.settle_image("https://cdn.test/b.jpg", true));
        assert!(modal.viewer().is_loading());
        assert!(modal.settle_image("https://cdn.test/a.jpg", false));
        assert!(modal.viewer().is_showing_placeholder());
    }

    #[test]
    fn arrow_keys_navigate_and_escape_closes() {
        let mut modal = opened(&["a", "b", "c"]);
        modal.handle_key(Named::ArrowLeft);
        assert_eq!(modal.viewer().index(), 2);
        modal.handle_key(Named::ArrowRight);
        assert_eq!(modal.viewer().index(), 0);

        assert_eq!(modal.handle_key(Named::Escape), Effect::Closed);
        assert!(!modal.is_open());
        assert_eq!(modal.viewer().index(), 0);
    }

    #[test]
    fn escape_cancels_confirmation_before_closing() {
        let mut modal = opened(&["a", "b"]);
        modal.handle(Message::RequestDeleteImage);
        assert!(!modal.delete_flow().is_idle());

        assert_eq!(modal.handle_key(Named::Escape), Effect::None);
        assert!(modal.delete_flow().is_idle());
        assert!(modal.is_open());
    }

    #[test]
    fn escape_is_ignored_while_deleting() {
        let mut modal = opened(&["a", "b"]);
        modal.handle(Message::RequestDeleteImage);
        modal.handle(Message::Delete(DeleteMessage::Confirm));

        modal.handle_key(Named::Escape);
        assert!(modal.delete_flow().is_deleting());
        assert!(modal.is_open());
        assert_eq!(modal.handle(Message::Close), Effect::None);
        assert!(modal.is_open());
    }

    #[test]
    fn swipe_left_advances() {
        let mut modal = opened(&["a", "b", "c"]);
        modal.handle(finger(pressed, 300.0));
        modal.handle(finger(moved, 249.0));
        modal.handle(finger(lifted, 249.0));
        assert_eq!(modal.viewer().index(), 1);
    }

    #[test]
    fn lost_finger_cancels_swipe() {
        let mut modal = opened(&["a", "b", "c"]);
        modal.handle(finger(pressed, 300.0));
        modal.handle(finger(moved, 100.0));
        modal.handle(finger(lost, 100.0));
        modal.handle(finger(lifted, 100.0));
        assert_eq!(modal.viewer().index(), 0);
    }

    #[test]
    fn deleting_last_image_warns() {
        let mut modal = opened(&["a"]);
        assert_eq!(
            modal.handle(Message::RequestDeleteImage),
            Effect::Warn(ValidationError::LastImage)
        );
        assert!(modal.delete_flow().is_idle());
    }

    #[test]
    fn deleting_earlier_image_keeps_current_one() {
        let mut modal = opened(&["a", "b", "c"]);
        modal.handle(Message::SelectIndex(1));
        modal.settle_image("https://cdn.test/b.jpg", true);

        // The delete button targets the displayed image; stage A directly.
        let target = PendingDeletion::image(modal.gallery().expect("open"), 0);
        modal.delete.request(target);
        let Effect::Execute(_) = modal.handle(Message::Delete(DeleteMessage::Confirm)) else {
            panic!("confirm must execute");
        };
        let effect = modal.handle(Message::Delete(DeleteMessage::Completed(Ok(()))));

        let Effect::ImageDeleted(updated) = effect else {
            panic!("expected ImageDeleted, got {effect:?}");
        };
        let ids: Vec<_> = updated.images.iter().filter_map(Image::public_id).collect();
        assert_eq!(ids, vec!["b", "c"]);
        assert_eq!(modal.viewer().index(), 0);
        assert_eq!(modal.current_url(), Some("https://cdn.test/b.jpg"));
        assert!(!modal.viewer().is_loading());
    }

    #[test]
    fn failed_image_delete_keeps_snapshot() {
        let mut modal = opened(&["a", "b"]);
        let before = modal.gallery().cloned();
        modal.handle(Message::RequestDeleteImage);
        modal.handle(Message::Delete(DeleteMessage::Confirm));
        let effect = modal.handle(Message::Delete(DeleteMessage::Completed(Err(
            Error::Network("refused".into()),
        ))));

        assert!(matches!(effect, Effect::DeleteFailed { .. }));
        assert_eq!(modal.gallery().cloned(), before);
        assert!(modal.delete_flow().is_idle());
    }

    #[test]
    fn gallery_delete_closes_modal_first() {
        let mut modal = opened(&["a", "b"]);
        modal.handle(Message::RequestDeleteGallery);
        modal.handle(Message::Delete(DeleteMessage::Confirm));
        let effect = modal.handle(Message::Delete(DeleteMessage::Completed(Ok(()))));

        assert_eq!(effect, Effect::GalleryDeleted("gallery_001".into()));
        assert!(!modal.is_open());
        assert!(modal.gallery().is_none());
    }

    #[test]
    fn navigation_is_blocked_while_confirming() {
        let mut modal = opened(&["a", "b", "c"]);
        modal.handle(Message::RequestDeleteImage);
        modal.handle(Message::Next);
        assert_eq!(modal.viewer().index(), 0);
    }

    #[test]
    fn closed_modal_ignores_messages() {
        let mut modal = GalleryModal::new();
        assert_eq!(modal.handle(Message::Next), Effect::None);
        assert_eq!(modal.handle(Message::RequestDeleteGallery), Effect::None);
    }
}
