// SPDX-License-Identifier: MPL-2.0
//! Toast notifications reporting the outcome of deletes, list loads and
//! settings I/O.
//!
//! - [`Notification`] - severity plus an i18n key and its arguments
//! - [`Manager`] - queue, display timers and dismissal
//! - [`Toast`] - widgets for the overlay
//!
//! ```ignore
//! notifications.push(
//!     Notification::error("notification-delete-image-error").with_arg("reason", reason),
//! );
//! let overlay = Toast::view_overlay(&notifications, &i18n).map(Message::Notification);
//! ```

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage, MAX_VISIBLE};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
