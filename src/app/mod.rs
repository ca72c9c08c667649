// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the gallery list, the
//! gallery modal and the backend.
//!
//! The `App` struct owns every component and translates their effects into
//! side effects: REST calls, image downloads, config persistence and toasts.
//! Components never talk to each other directly; all coupling goes through
//! [`update`].

pub mod config;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::api::ApiClient;
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::media::ImageCache;
use crate::ui::delete_confirmation::DeleteConfirmationFlow;
use crate::ui::gallery_list::GalleryListController;
use crate::ui::notifications;
use crate::ui::theming::ThemeMode;
use crate::ui::viewer::GalleryModal;
use config::Config;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    /// `Err` when the configured base URL is unusable; every request then
    /// fails with that error.
    api: Result<ApiClient, Error>,
    config: Config,
    theme_mode: ThemeMode,
    list: GalleryListController,
    modal: GalleryModal,
    /// Deletion started from a gallery card, outside the modal.
    card_delete: DeleteConfirmationFlow,
    images: ImageCache,
    notifications: notifications::Manager,
    spinner_rotation: f32,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("api", &self.api.as_ref().map(ApiClient::base_url))
            .field("galleries", &self.list.galleries().len())
            .field("modal_open", &self.modal.is_open())
            .field("cached_images", &self.images.len())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1200;
pub const MIN_WINDOW_HEIGHT: u32 = 600;
pub const MIN_WINDOW_WIDTH: u32 = 720;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot function; flags are consumed on first call
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self::with_config(Config::default(), I18n::default(), config::DEFAULT_API_BASE_URL)
    }
}

impl App {
    fn with_config(config: Config, i18n: I18n, api_url: &str) -> Self {
        let api = ApiClient::new(api_url, config.api.request_timeout());
        let mut notifications = notifications::Manager::new();
        match &api {
            Ok(api) => tracing::info!(base_url = %api.base_url(), "gallery backend configured"),
            Err(err) => {
                tracing::error!(%api_url, %err, "invalid gallery backend URL");
                notifications.push(
                    notifications::Notification::error("notification-api-url-invalid")
                        .with_arg("url", api_url),
                );
            }
        }

        Self {
            i18n,
            api,
            theme_mode: config.general.theme_mode,
            images: ImageCache::new(config.viewer.clamped_cache_capacity()),
            config,
            list: GalleryListController::new(),
            modal: GalleryModal::new(),
            card_delete: DeleteConfirmationFlow::new(),
            notifications,
            spinner_rotation: 0.0,
        }
    }

    /// Loads config, resolves the backend and starts the first list load.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.config_dir.clone());
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), config.general.language.as_deref());
        let api_url = config::resolve_api_base_url(flags.api_url.as_deref(), &config);

        let mut app = Self::with_config(config, i18n, &api_url);

        if let Some(key) = config_warning {
            app.notifications
                .push(notifications::Notification::warning(&key));
        }

        let task = app.update(Message::GalleryCreated);
        (app, task)
    }

    fn title(&self) -> String {
        match self.modal.gallery() {
            Some(gallery) => format!("{} - {}", gallery.title, self.i18n.tr("window-title")),
            None => self.i18n.tr("window-title"),
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let modal_events = subscription::create_event_subscription(
            self.modal.is_open(),
            !self.card_delete.is_idle(),
        );
        let tick = subscription::create_tick_subscription(
            self.list.is_loading() || self.modal.viewer().is_loading(),
            self.notifications.has_notifications(),
        );

        Subscription::batch([modal_events, tick])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &self.i18n,
            api: &self.api,
            config: &mut self.config,
            theme_mode: &mut self.theme_mode,
            list: &mut self.list,
            modal: &mut self.modal,
            card_delete: &mut self.card_delete,
            images: &mut self.images,
            notifications: &mut self.notifications,
            spinner_rotation: &mut self.spinner_rotation,
        };

        match message {
            Message::Navbar(navbar_message) => {
                update::handle_navbar_message(&mut ctx, navbar_message)
            }
            Message::GalleryList(list_message) => {
                update::handle_list_message(&mut ctx, list_message)
            }
            Message::Modal(modal_message) => update::handle_modal_message(&mut ctx, modal_message),
            Message::CardDelete(delete_message) => {
                update::handle_card_delete_message(&mut ctx, delete_message)
            }
            Message::Notification(notification_message) => {
                ctx.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::GalleryCreated => update::handle_gallery_created(&mut ctx),
            Message::ImageFetched { url, result } => {
                update::handle_image_fetched(&mut ctx, &url, result)
            }
            Message::Tick(_) => update::handle_tick(&mut ctx),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            theme_mode: self.theme_mode,
            list: &self.list,
            modal: &self.modal,
            card_delete: &self.card_delete,
            images: &self.images,
            notifications: &self.notifications,
            spinner_rotation: self.spinner_rotation,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Gallery, Image};
    use crate::ui::delete_confirmation::{self, PendingDeletion};
    use crate::ui::gallery_list::{self, LoadState};
    use crate::ui::viewer;

    fn gallery(id: &str, images: &[&str]) -> Gallery {
        Gallery::new(
            id,
            format!("Title {id}"),
            images
                .iter()
                .map(|p| Image::new(format!("https://cdn.test/{p}.jpg")).with_public_id(*p))
                .collect(),
        )
    }

    fn loaded_app(galleries: Vec<Gallery>) -> App {
        let mut app = App::default();
        let _ = app.update(Message::GalleryCreated);
        let _ = app.update(Message::GalleryList(gallery_list::Message::Loaded {
            request: 1,
            result: Ok(galleries),
        }));
        app
    }

    #[test]
    fn default_app_starts_loading_with_empty_modal() {
        let app = App::default();
        assert!(app.list.is_loading());
        assert!(!app.modal.is_open());
        assert!(app.api.is_ok());
    }

    #[test]
    fn invalid_base_url_fails_list_load() {
        let mut app = App::with_config(Config::default(), I18n::default(), "ftp://nope");
        let err = app.api.clone().expect_err("ftp is not a supported scheme");

        let _ = app.update(Message::GalleryCreated);
        assert!(app.list.is_loading());
        // The load task resolves immediately with the construction error.
        let _ = app.update(Message::GalleryList(gallery_list::Message::Loaded {
            request: 1,
            result: Err(err),
        }));

        assert!(matches!(app.list.state(), LoadState::Failed(Error::Config(_))));
        let keys: Vec<_> = app
            .notifications
            .visible()
            .map(notifications::Notification::message_key)
            .collect();
        assert!(keys.contains(&"notification-api-url-invalid"));
        assert!(keys.contains(&"notification-list-error"));
    }

    #[test]
    fn escape_cancels_card_delete_until_request_is_sent() {
        let mut app = loaded_app(vec![gallery("gallery_001", &["a"])]);
        let request = || Message::GalleryList(gallery_list::Message::RequestDelete("gallery_001".into()));

        let _ = app.update(request());
        assert!(!app.card_delete.is_idle());
        let _ = app.update(Message::CardDelete(delete_confirmation::Message::EscapePressed));
        assert!(app.card_delete.is_idle());

        let _ = app.update(request());
        let _ = app.update(Message::CardDelete(delete_confirmation::Message::Confirm));
        let _ = app.update(Message::CardDelete(delete_confirmation::Message::EscapePressed));
        assert!(app.card_delete.is_deleting());

        let _ = app.update(Message::CardDelete(delete_confirmation::Message::Completed(Ok(()))));
        assert!(app.card_delete.is_idle());
        assert!(app.list.find("gallery_001").is_none());
    }

    #[test]
    fn failed_load_shows_error_toast_and_retry_clears_it() {
        let mut app = App::default();
        let _ = app.update(Message::GalleryCreated);
        let _ = app.update(Message::GalleryList(gallery_list::Message::Loaded {
            request: 1,
            result: Err(Error::Network("refused".into())),
        }));

        assert!(matches!(app.list.state(), LoadState::Failed(_)));
        assert_eq!(app.notifications.visible_count(), 1);

        let _ = app.update(Message::GalleryList(gallery_list::Message::Retry));
        assert!(app.list.is_loading());
        let _ = app.update(Message::GalleryList(gallery_list::Message::Loaded {
            request: 2,
            result: Ok(Vec::new()),
        }));
        assert!(!app.notifications.has_notifications());
    }

    #[test]
    fn opening_gallery_opens_modal() {
        let mut app = loaded_app(vec![gallery("gallery_001", &["a", "b"])]);
        let _ = app.update(Message::GalleryList(gallery_list::Message::Open(
            "gallery_001".into(),
        )));
        assert!(app.modal.is_open());
        assert!(app.images.is_pending("https://cdn.test/a.jpg"));
    }

    #[test]
    fn image_delete_in_modal_updates_list_snapshot() {
        let mut app = loaded_app(vec![gallery("gallery_001", &["a", "b", "c"])]);
        let _ = app.update(Message::GalleryList(gallery_list::Message::Open(
            "gallery_001".into(),
        )));
        let _ = app.update(Message::Modal(viewer::Message::RequestDeleteImage));
        let _ = app.update(Message::Modal(viewer::Message::Delete(
            delete_confirmation::Message::Confirm,
        )));
        let _ = app.update(Message::Modal(viewer::Message::Delete(
            delete_confirmation::Message::Completed(Ok(())),
        )));

        let stored = app.list.find("gallery_001").expect("gallery kept");
        assert_eq!(stored.image_count(), 2);
        assert_eq!(app.modal.gallery(), Some(stored));
    }

    #[test]
    fn gallery_delete_in_modal_closes_and_removes() {
        let mut app = loaded_app(vec![
            gallery("gallery_001", &["a"]),
            gallery("gallery_002", &["b"]),
        ]);
        let _ = app.update(Message::GalleryList(gallery_list::Message::Open(
            "gallery_002".into(),
        )));
        let _ = app.update(Message::Modal(viewer::Message::RequestDeleteGallery));
        let _ = app.update(Message::Modal(viewer::Message::Delete(
            delete_confirmation::Message::Confirm,
        )));
        let _ = app.update(Message::Modal(viewer::Message::Delete(
            delete_confirmation::Message::Completed(Ok(())),
        )));

        assert!(!app.modal.is_open());
        assert!(app.list.find("gallery_002").is_none());
        assert!(app.list.find("gallery_001").is_some());
    }

    #[test]
    fn card_delete_failure_keeps_gallery() {
        let mut app = loaded_app(vec![gallery("gallery_001", &["a"])]);
        let _ = app.update(Message::GalleryList(gallery_list::Message::RequestDelete(
            "gallery_001".into(),
        )));
        assert!(matches!(
            app.card_delete.pending(),
            Some(PendingDeletion::Gallery { .. })
        ));

        let _ = app.update(Message::CardDelete(delete_confirmation::Message::Confirm));
        let _ = app.update(Message::CardDelete(
            delete_confirmation::Message::Completed(Err(Error::NotFound("gone".into()))),
        ));

        assert!(app.card_delete.is_idle());
        assert!(app.list.find("gallery_001").is_some());
        assert_eq!(app.notifications.visible_count(), 1);
    }

    #[test]
    fn last_image_rejection_is_a_warning() {
        let mut app = loaded_app(vec![gallery("gallery_001", &["a"])]);
        let _ = app.update(Message::GalleryList(gallery_list::Message::Open(
            "gallery_001".into(),
        )));
        let _ = app.update(Message::Modal(viewer::Message::RequestDeleteImage));

        assert!(app.modal.delete_flow().is_idle());
        let severities: Vec<_> = app.notifications.visible().map(|n| n.severity()).collect();
        assert_eq!(severities, vec![notifications::Severity::Warning]);
    }

    #[test]
    fn gallery_created_reloads_list() {
        let mut app = loaded_app(vec![gallery("gallery_001", &["a"])]);
        let _ = app.update(Message::GalleryCreated);
        assert!(app.list.is_loading());
    }

    #[test]
    fn image_fetch_settles_modal() {
        let mut app = loaded_app(vec![gallery("gallery_001", &["a", "b"])]);
        let _ = app.update(Message::GalleryList(gallery_list::Message::Open(
            "gallery_001".into(),
        )));
        let _ = app.update(Message::ImageFetched {
            url: "https://cdn.test/a.jpg".into(),
            result: Err(Error::Decode("bad".into())),
        });

        assert!(!app.modal.viewer().is_loading());
        assert!(app.modal.viewer().is_showing_placeholder());
    }

    #[test]
    fn title_includes_open_gallery() {
        let mut app = loaded_app(vec![gallery("gallery_001", &["a"])]);
        let _ = app.update(Message::GalleryList(gallery_list::Message::Open(
            "gallery_001".into(),
        )));
        assert!(app.title().starts_with("Title gallery_001"));
    }
}
