// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Keyboard and touch events are only listened to while the gallery modal
//! is open, plus Escape while a card's delete dialog is showing; the grid
//! itself is driven entirely by widget messages.

use super::Message;
use crate::ui::delete_confirmation::DeleteConfirmationFlow;
use crate::ui::viewer;
use iced::{time, Subscription};
use std::time::Duration;

/// Interval of the animation and auto-dismiss tick.
const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Routes native events to the modal while it is open, or to the card
/// delete dialog while it is active. The two never overlap.
pub fn create_event_subscription(modal_open: bool, card_dialog_active: bool) -> Subscription<Message> {
    if modal_open {
        viewer::subscription().map(Message::Modal)
    } else if card_dialog_active {
        DeleteConfirmationFlow::subscription().map(Message::CardDelete)
    } else {
        Subscription::none()
    }
}

/// Creates a periodic tick subscription for spinner animation and
/// notification auto-dismiss.
pub fn create_tick_subscription(is_loading: bool, has_notifications: bool) -> Subscription<Message> {
    if is_loading || has_notifications {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
