// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application.
//!
//! Each component reports what happened through its effect enum; the
//! handlers here turn those effects into REST calls, image downloads,
//! list reconciliation and toasts.

use super::config::{self, Config};
use super::Message;
use crate::api::ApiClient;
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::media::{self, ImageCache};
use crate::ui::delete_confirmation::{self, DeleteConfirmationFlow, PendingDeletion};
use crate::ui::gallery_list::{self, GalleryListController};
use crate::ui::navbar::{self, Event as NavbarEvent};
use crate::ui::notifications::{self, Notification};
use crate::ui::theming::ThemeMode;
use crate::ui::viewer::{self, GalleryModal};
use crate::ui::widgets::spinner;
use iced::Task;

/// Mutable view of the application state handed to every handler.
pub struct UpdateContext<'a> {
    pub i18n: &'a I18n,
    pub api: &'a Result<ApiClient, Error>,
    pub config: &'a mut Config,
    pub theme_mode: &'a mut ThemeMode,
    pub list: &'a mut GalleryListController,
    pub modal: &'a mut GalleryModal,
    pub card_delete: &'a mut DeleteConfirmationFlow,
    pub images: &'a mut ImageCache,
    pub notifications: &'a mut notifications::Manager,
    pub spinner_rotation: &'a mut f32,
}

pub fn handle_navbar_message(ctx: &mut UpdateContext<'_>, message: navbar::Message) -> Task<Message> {
    match navbar::update(message, ctx.list.is_loading()) {
        NavbarEvent::None => Task::none(),
        NavbarEvent::Refresh => handle_gallery_created(ctx),
        NavbarEvent::ToggleTheme => {
            let mode = ctx.theme_mode.toggled();
            *ctx.theme_mode = mode;
            ctx.config.general.theme_mode = mode;
            if let Err(err) = config::save(ctx.config) {
                tracing::warn!(%err, "failed to persist theme mode");
                ctx.notifications
                    .push(Notification::warning("notification-config-save-error"));
            }
            Task::none()
        }
    }
}

/// Reloads the collection, e.g. after a gallery was created elsewhere.
pub fn handle_gallery_created(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let effect = ctx.list.load();
    handle_list_effect(ctx, effect)
}

pub fn handle_list_message(
    ctx: &mut UpdateContext<'_>,
    message: gallery_list::Message,
) -> Task<Message> {
    let effect = ctx.list.handle(message);
    handle_list_effect(ctx, effect)
}

fn handle_list_effect(ctx: &mut UpdateContext<'_>, effect: gallery_list::Effect) -> Task<Message> {
    match effect {
        gallery_list::Effect::None => Task::none(),
        gallery_list::Effect::Fetch { request } => {
            let to_message = move |result| {
                Message::GalleryList(gallery_list::Message::Loaded { request, result })
            };
            match ctx.api {
                Ok(api) => {
                    let api = api.clone();
                    Task::perform(async move { api.list_galleries().await }, to_message)
                }
                Err(err) => Task::done(to_message(Err(err.clone()))),
            }
        }
        gallery_list::Effect::Loaded => {
            ctx.notifications.clear_with_prefix("notification-list-error");
            fetch_thumbnails(ctx)
        }
        gallery_list::Effect::LoadFailed(err) => {
            tracing::warn!(%err, "gallery list failed to load");
            ctx.notifications.clear_with_prefix("notification-list-error");
            ctx.notifications
                .push(Notification::error("notification-list-error"));
            Task::none()
        }
        gallery_list::Effect::OpenGallery(gallery) => {
            if ctx.modal.is_open() {
                return Task::none();
            }
            let effect = ctx.modal.open(gallery);
            handle_modal_effect(ctx, effect)
        }
        gallery_list::Effect::RequestDelete(gallery) => {
            if ctx.modal.is_open() {
                return Task::none();
            }
            let effect = ctx.card_delete.request(Ok(PendingDeletion::gallery(&gallery)));
            handle_card_delete_effect(ctx, effect)
        }
    }
}

pub fn handle_card_delete_message(
    ctx: &mut UpdateContext<'_>,
    message: delete_confirmation::Message,
) -> Task<Message> {
    let effect = ctx.card_delete.handle(message);
    handle_card_delete_effect(ctx, effect)
}

fn handle_card_delete_effect(
    ctx: &mut UpdateContext<'_>,
    effect: delete_confirmation::Effect,
) -> Task<Message> {
    match effect {
        delete_confirmation::Effect::None => Task::none(),
        delete_confirmation::Effect::Rejected(reason) => {
            ctx.notifications
                .push(Notification::warning(reason.i18n_key()));
            Task::none()
        }
        delete_confirmation::Effect::Execute(target) => execute_delete(ctx.api, target, |result| {
            Message::CardDelete(delete_confirmation::Message::Completed(result))
        }),
        delete_confirmation::Effect::Committed(target) => {
            commit_gallery_removal(ctx, &target);
            Task::none()
        }
        delete_confirmation::Effect::Failed { target, error } => {
            notify_delete_failure(ctx, &target, &error);
            Task::none()
        }
    }
}

pub fn handle_modal_message(ctx: &mut UpdateContext<'_>, message: viewer::Message) -> Task<Message> {
    let effect = ctx.modal.handle(message);
    let task = handle_modal_effect(ctx, effect);
    Task::batch([task, sync_modal_image(ctx)])
}

fn handle_modal_effect(ctx: &mut UpdateContext<'_>, effect: viewer::Effect) -> Task<Message> {
    match effect {
        viewer::Effect::None => Task::none(),
        // Cards are visible again; some thumbnails may have been evicted
        viewer::Effect::Closed => fetch_thumbnails(ctx),
        viewer::Effect::Prefetch(urls) => {
            // Half the cache, so prefetching cannot evict everything else
            let limit = (ctx.images.capacity() / 2).max(1);
            let urls = urls.into_iter().take(limit).collect();
            let prefetch = fetch_images(ctx, urls);
            Task::batch([prefetch, sync_modal_image(ctx)])
        }
        viewer::Effect::Warn(reason) => {
            tracing::debug!(%reason, "delete rejected");
            ctx.notifications
                .push(Notification::warning(reason.i18n_key()));
            Task::none()
        }
        viewer::Effect::Execute(target) => execute_delete(ctx.api, target, |result| {
            Message::Modal(viewer::Message::Delete(
                delete_confirmation::Message::Completed(result),
            ))
        }),
        viewer::Effect::ImageDeleted(gallery) => {
            tracing::info!(gallery = %gallery.id, remaining = gallery.image_count(), "image deleted");
            ctx.list.replace_gallery(gallery);
            ctx.notifications
                .push(Notification::success("notification-delete-image-success"));
            Task::none()
        }
        viewer::Effect::GalleryDeleted(gallery_id) => {
            let title = ctx
                .list
                .find(&gallery_id)
                .map(|gallery| gallery.title.clone())
                .unwrap_or_default();
            commit_gallery_removal(
                ctx,
                &PendingDeletion::Gallery {
                    gallery_id,
                    title,
                },
            );
            fetch_thumbnails(ctx)
        }
        viewer::Effect::DeleteFailed { target, error } => {
            notify_delete_failure(ctx, &target, &error);
            Task::none()
        }
    }
}

/// Issues the REST call for a confirmed deletion.
fn execute_delete(
    api: &Result<ApiClient, Error>,
    target: PendingDeletion,
    to_message: impl Fn(Result<(), Error>) -> Message + Send + 'static,
) -> Task<Message> {
    let api = match api {
        Ok(api) => api.clone(),
        Err(err) => return Task::done(to_message(Err(err.clone()))),
    };

    Task::perform(
        async move {
            match target {
                PendingDeletion::Image {
                    gallery_id,
                    public_id,
                    ..
                } => api.delete_image(&gallery_id, &public_id).await,
                PendingDeletion::Gallery { gallery_id, .. } => {
                    api.delete_gallery(&gallery_id).await
                }
            }
        },
        to_message,
    )
}

fn commit_gallery_removal(ctx: &mut UpdateContext<'_>, target: &PendingDeletion) {
    let PendingDeletion::Gallery { gallery_id, title } = target else {
        return;
    };
    if !ctx.list.handle_deleted(gallery_id) {
        tracing::debug!(%gallery_id, "deleted gallery was not in the list");
    }
    tracing::info!(%gallery_id, "gallery deleted");
    ctx.notifications.push(
        Notification::success("notification-delete-gallery-success")
            .with_arg("title", title.clone()),
    );
}

fn notify_delete_failure(ctx: &mut UpdateContext<'_>, target: &PendingDeletion, error: &Error) {
    tracing::warn!(gallery_id = %target.gallery_id(), %error, "delete failed");
    let key = match target {
        PendingDeletion::Image { .. } => "notification-delete-image-error",
        PendingDeletion::Gallery { .. } => "notification-delete-gallery-error",
    };
    ctx.notifications
        .push(Notification::error(key).with_arg("reason", ctx.i18n.tr(error.i18n_key())));
}

/// Settles the modal's current image from the cache, or starts its download.
///
/// An image already on screen that has since been evicted is waited for
/// again instead of silently turning into the placeholder.
fn sync_modal_image(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let evicted = ctx.modal.loading_url().is_none()
        && ctx
            .modal
            .current_url()
            .is_some_and(|url| ctx.images.peek(url).is_none() && !ctx.images.is_pending(url));
    if evicted {
        ctx.modal.reload_current();
    }
    let Some(url) = ctx.modal.loading_url().map(str::to_string) else {
        return Task::none();
    };

    match ctx.images.get(&url) {
        Some(media::CachedImage::Ready(_)) => {
            ctx.modal.settle_image(&url, true);
            Task::none()
        }
        Some(media::CachedImage::Failed) => {
            ctx.modal.settle_image(&url, false);
            Task::none()
        }
        None => fetch_images(ctx, vec![url]),
    }
}

/// Fetches card thumbnails that are neither cached nor in flight.
fn fetch_thumbnails(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let thumbnails: Vec<String> = ctx
        .list
        .galleries()
        .iter()
        .filter_map(|gallery| gallery.thumbnail_url())
        .map(str::to_string)
        .collect();
    fetch_images(ctx, thumbnails)
}

/// Starts downloads for the URLs that are neither cached nor in flight.
fn fetch_images(ctx: &mut UpdateContext<'_>, urls: Vec<String>) -> Task<Message> {
    let urls = ctx.images.urls_to_fetch(urls.iter().map(String::as_str));
    if urls.is_empty() {
        return Task::none();
    }

    let mut tasks = Vec::with_capacity(urls.len());
    for url in urls {
        if !ctx.images.begin_fetch(&url) {
            continue;
        }
        let task = match ctx.api {
            Ok(api) => Task::perform(
                media::cache::fetch_image(api.clone(), url),
                |(url, result)| Message::ImageFetched { url, result },
            ),
            Err(err) => Task::done(Message::ImageFetched {
                url,
                result: Err(err.clone()),
            }),
        };
        tasks.push(task);
    }

    Task::batch(tasks)
}

pub fn handle_image_fetched(
    ctx: &mut UpdateContext<'_>,
    url: &str,
    result: Result<media::ImageData, Error>,
) -> Task<Message> {
    let ok = ctx.images.finish_fetch(url, result);
    ctx.modal.settle_image(url, ok);
    if let Some(current) = ctx.modal.current_url() {
        ctx.images.promote(current);
    }
    sync_modal_image(ctx)
}

pub fn handle_tick(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    ctx.notifications.tick();
    if ctx.list.is_loading() || ctx.modal.viewer().is_loading() {
        *ctx.spinner_rotation = spinner::advance(*ctx.spinner_rotation);
    }
    Task::none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Gallery, Image};

    struct Fixture {
        i18n: I18n,
        api: Result<ApiClient, Error>,
        config: Config,
        theme_mode: ThemeMode,
        list: GalleryListController,
        modal: GalleryModal,
        card_delete: DeleteConfirmationFlow,
        images: ImageCache,
        notifications: notifications::Manager,
        spinner_rotation: f32,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                i18n: I18n::default(),
                api: ApiClient::new(config::DEFAULT_API_BASE_URL, None),
                config: Config::default(),
                theme_mode: ThemeMode::default(),
                list: GalleryListController::new(),
                modal: GalleryModal::new(),
                card_delete: DeleteConfirmationFlow::new(),
                images: ImageCache::default(),
                notifications: notifications::Manager::new(),
                spinner_rotation: 0.0,
            }
        }

        fn ctx(&mut self) -> UpdateContext<'_> {
            UpdateContext {
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
            }
        }
    }

    fn gallery(id: &str, urls: &[&str]) -> Gallery {
        Gallery::new(
            id,
            id.to_uppercase(),
            urls.iter()
                .map(|u| Image::new(*u).with_public_id(format!("{id}/{u}")))
                .collect(),
        )
    }

    fn load(fixture: &mut Fixture, galleries: Vec<Gallery>) {
        let _ = handle_gallery_created(&mut fixture.ctx());
        let _ = handle_list_message(
            &mut fixture.ctx(),
            gallery_list::Message::Loaded {
                request: 1,
                result: Ok(galleries),
            },
        );
    }

    #[test]
    fn loaded_list_prefetches_thumbnails_once() {
        let mut fixture = Fixture::new();
        load(
            &mut fixture,
            vec![gallery("g1", &["a.jpg"]), gallery("g2", &["a.jpg", "b.jpg"])],
        );

        assert!(fixture.images.is_pending("a.jpg"));
        assert!(!fixture.images.is_pending("b.jpg"));
    }

    #[test]
    fn image_fetch_failure_is_remembered() {
        let mut fixture = Fixture::new();
        load(&mut fixture, vec![gallery("g1", &["a.jpg"])]);

        let _ = handle_image_fetched(
            &mut fixture.ctx(),
            "a.jpg",
            Err(Error::Network("timeout".into())),
        );

        assert!(!fixture.images.is_pending("a.jpg"));
        assert!(matches!(
            fixture.images.peek("a.jpg"),
            Some(media::CachedImage::Failed)
        ));
    }

    #[test]
    fn opening_gallery_with_cached_image_settles_immediately() {
        let mut fixture = Fixture::new();
        load(&mut fixture, vec![gallery("g1", &["a.jpg", "b.jpg"])]);
        let _ = handle_image_fetched(
            &mut fixture.ctx(),
            "a.jpg",
            Ok(media::ImageData::from_rgba(1, 1, vec![0, 0, 0, 255])),
        );

        let _ = handle_list_message(&mut fixture.ctx(), gallery_list::Message::Open("g1".into()));

        assert!(fixture.modal.is_open());
        assert!(!fixture.modal.viewer().is_loading());
        assert!(fixture.images.is_pending("b.jpg"));
    }

    fn pixel() -> media::ImageData {
        media::ImageData::from_rgba(1, 1, vec![0, 0, 0, 255])
    }

    fn settle_pending(fixture: &mut Fixture, urls: &[String]) {
        for url in urls {
            if fixture.images.is_pending(url) {
                let _ = handle_image_fetched(&mut fixture.ctx(), url, Ok(pixel()));
            }
        }
    }

    #[test]
    fn large_gallery_does_not_lose_shown_image_or_thumbnails() {
        let mut fixture = Fixture::new();
        fixture.images = ImageCache::new(media::cache::MIN_CAPACITY);
        let big: Vec<String> = (0..10).map(|i| format!("img{i}.jpg")).collect();
        let big_refs: Vec<&str> = big.iter().map(String::as_str).collect();
        load(
            &mut fixture,
            vec![gallery("cover", &["cover.jpg"]), gallery("big", &big_refs)],
        );
        settle_pending(&mut fixture, &["cover.jpg".to_string(), "img0.jpg".to_string()]);

        let _ = handle_list_message(&mut fixture.ctx(), gallery_list::Message::Open("big".into()));
        // Prefetch stays within half the cache.
        let in_flight = big.iter().filter(|url| fixture.images.is_pending(url)).count();
        assert!(in_flight <= media::cache::MIN_CAPACITY / 2);
        settle_pending(&mut fixture, &big);

        // Unrelated downloads finishing must not push out the shown image.
        for i in 0..media::cache::MIN_CAPACITY {
            let _ = handle_image_fetched(&mut fixture.ctx(), &format!("other{i}.jpg"), Ok(pixel()));
        }
        assert!(fixture.images.peek("img0.jpg").is_some());
        assert!(!fixture.modal.viewer().is_loading());
        assert!(!fixture.modal.viewer().is_showing_placeholder());

        // Back on the grid the evicted cover thumbnail is fetched again.
        assert!(fixture.images.peek("cover.jpg").is_none());
        let _ = handle_modal_message(&mut fixture.ctx(), viewer::Message::Close);
        assert!(fixture.images.is_pending("cover.jpg"));
    }

    #[test]
    fn evicted_current_image_is_fetched_again() {
        let mut fixture = Fixture::new();
        load(&mut fixture, vec![gallery("g1", &["a.jpg", "b.jpg"])]);
        let _ = handle_image_fetched(&mut fixture.ctx(), "a.jpg", Ok(pixel()));
        let _ = handle_list_message(&mut fixture.ctx(), gallery_list::Message::Open("g1".into()));
        assert!(!fixture.modal.viewer().is_loading());

        fixture.images.clear();
        let _ = handle_modal_message(&mut fixture.ctx(), viewer::Message::ToggleDetails);

        assert!(fixture.modal.viewer().is_loading());
        assert!(fixture.images.is_pending("a.jpg"));
        let _ = handle_image_fetched(&mut fixture.ctx(), "a.jpg", Ok(pixel()));
        assert!(!fixture.modal.viewer().is_loading());
        assert!(!fixture.modal.viewer().is_showing_placeholder());
    }

    #[test]
    fn open_is_ignored_while_modal_is_open() {
        let mut fixture = Fixture::new();
        load(
            &mut fixture,
            vec![gallery("g1", &["a.jpg"]), gallery("g2", &["b.jpg"])],
        );
        let _ = handle_list_message(&mut fixture.ctx(), gallery_list::Message::Open("g1".into()));
        let _ = handle_list_message(&mut fixture.ctx(), gallery_list::Message::Open("g2".into()));

        assert_eq!(fixture.modal.gallery().map(|g| g.id.as_str()), Some("g1"));
    }

    #[test]
    fn card_delete_success_removes_gallery_with_toast() {
        let mut fixture = Fixture::new();
        load(
            &mut fixture,
            vec![gallery("g1", &["a.jpg"]), gallery("g2", &["b.jpg"])],
        );

        let _ = handle_list_message(
            &mut fixture.ctx(),
            gallery_list::Message::RequestDelete("g1".into()),
        );
        let _ = handle_card_delete_message(&mut fixture.ctx(), delete_confirmation::Message::Confirm);
        assert!(fixture.card_delete.is_deleting());

        let _ = handle_card_delete_message(
            &mut fixture.ctx(),
            delete_confirmation::Message::Completed(Ok(())),
        );

        assert!(fixture.list.find("g1").is_none());
        let toast = fixture.notifications.visible().next().expect("toast");
        assert_eq!(toast.message_key(), "notification-delete-gallery-success");
        assert_eq!(toast.message_args(), &[("title".to_string(), "G1".to_string())]);
    }

    #[test]
    fn modal_delete_failure_reports_reason() {
        let mut fixture = Fixture::new();
        load(&mut fixture, vec![gallery("g1", &["a.jpg", "b.jpg"])]);
        let _ = handle_list_message(&mut fixture.ctx(), gallery_list::Message::Open("g1".into()));
        let _ = handle_modal_message(&mut fixture.ctx(), viewer::Message::RequestDeleteImage);
        let _ = handle_modal_message(
            &mut fixture.ctx(),
            viewer::Message::Delete(delete_confirmation::Message::Confirm),
        );
        let _ = handle_modal_message(
            &mut fixture.ctx(),
            viewer::Message::Delete(delete_confirmation::Message::Completed(Err(
                Error::Http {
                    status: 500,
                    message: "boom".into(),
                },
            ))),
        );

        assert_eq!(fixture.list.find("g1").map(Gallery::image_count), Some(2));
        let toast = fixture.notifications.visible().next().expect("toast");
        assert_eq!(toast.message_key(), "notification-delete-image-error");
        assert_eq!(toast.severity(), notifications::Severity::Error);
    }

    #[test]
    fn refresh_is_ignored_while_loading() {
        let mut fixture = Fixture::new();
        let _ = handle_gallery_created(&mut fixture.ctx());
        let _ = handle_navbar_message(&mut fixture.ctx(), navbar::Message::Refresh);

        // The first request stays current: a response tagged 1 is accepted.
        let _ = handle_list_message(
            &mut fixture.ctx(),
            gallery_list::Message::Loaded {
                request: 1,
                result: Ok(Vec::new()),
            },
        );
        assert!(!fixture.list.is_loading());
    }

    #[test]
    fn tick_spins_only_while_loading() {
        let mut fixture = Fixture::new();
        let _ = handle_gallery_created(&mut fixture.ctx());
        let _ = handle_tick(&mut fixture.ctx());
        assert!(fixture.spinner_rotation > 0.0);

        let _ = handle_list_message(
            &mut fixture.ctx(),
            gallery_list::Message::Loaded {
                request: 1,
                result: Ok(Vec::new()),
            },
        );
        let before = fixture.spinner_rotation;
        let _ = handle_tick(&mut fixture.ctx());
        assert_eq!(fixture.spinner_rotation, before);
    }
}
