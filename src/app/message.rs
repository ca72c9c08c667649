// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::media::ImageData;
use crate::ui::delete_confirmation;
use crate::ui::gallery_list;
use crate::ui::navbar;
use crate::ui::notifications;
use crate::ui::viewer;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    GalleryList(gallery_list::Message),
    Modal(viewer::Message),
    /// Confirmation dialog for deleting a gallery from its card.
    CardDelete(delete_confirmation::Message),
    Notification(notifications::NotificationMessage),
    /// A gallery was created elsewhere; the list must resynchronize.
    GalleryCreated,
    ImageFetched {
        url: String,
        result: Result<ImageData, Error>,
    },
    /// Periodic tick for spinner animation and notification auto-dismiss.
    Tick(Instant),
}

/// Runtime flags passed in from the launcher.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`).
    pub lang: Option<String>,
    /// Backend base URL overriding environment and config.
    pub api_url: Option<String>,
    /// Optional config directory override (`--config-dir`).
    pub config_dir: Option<String>,
}
