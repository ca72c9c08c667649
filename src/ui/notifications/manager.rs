// SPDX-License-Identifier: MPL-2.0
//! Toast queue: at most [`MAX_VISIBLE`] on screen, the rest wait their turn.
//!
//! A toast's display time starts when it becomes visible, not when it is
//! pushed, so a burst of failures cannot expire before being seen. Pushing
//! a toast identical to one already visible restarts that toast's timer
//! instead of stacking a duplicate.

use super::notification::{Notification, NotificationId, Severity};
use std::collections::VecDeque;
use std::time::Instant;

pub const MAX_VISIBLE: usize = 3;

#[derive(Debug, Clone)]
pub enum Message {
    Dismiss(NotificationId),
}

#[derive(Debug, Clone)]
struct Entry {
    id: NotificationId,
    notification: Notification,
    shown_at: Option<Instant>,
}

#[derive(Debug, Default)]
pub struct Manager {
    /// Newest first.
    visible: VecDeque<Entry>,
    waiting: VecDeque<Entry>,
    next_id: u64,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, notification: Notification) -> NotificationId {
        self.push_at(notification, Instant::now())
    }

    fn push_at(&mut self, notification: Notification, now: Instant) -> NotificationId {
        match notification.severity() {
            Severity::Warning => tracing::warn!(
                key = notification.message_key(),
                args = ?notification.message_args(),
                "notification"
            ),
            Severity::Error => tracing::error!(
                key = notification.message_key(),
                args = ?notification.message_args(),
                "notification"
            ),
            Severity::Success => {
                tracing::debug!(key = notification.message_key(), "notification");
            }
        }

        if let Some(entry) = self
            .visible
            .iter_mut()
            .find(|entry| entry.notification == notification)
        {
            entry.shown_at = Some(now);
            return entry.id;
        }

        let id = NotificationId(self.next_id);
        self.next_id += 1;

        let mut entry = Entry {
            id,
            notification,
            shown_at: None,
        };
        if self.visible.len() < MAX_VISIBLE {
            entry.shown_at = Some(now);
            self.visible.push_front(entry);
        } else {
            self.waiting.push_back(entry);
        }
        id
    }

    /// Returns `true` if a toast with `id` existed.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        self.dismiss_at(id, Instant::now())
    }

    fn dismiss_at(&mut self, id: NotificationId, now: Instant) -> bool {
        if let Some(pos) = self.visible.iter().position(|entry| entry.id == id) {
            self.visible.remove(pos);
            self.fill(now);
            return true;
        }
        let before = self.waiting.len();
        self.waiting.retain(|entry| entry.id != id);
        self.waiting.len() != before
    }

    /// Expires toasts whose display time has elapsed.
    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    fn tick_at(&mut self, now: Instant) {
        let before = self.visible.len();
        self.visible.retain(|entry| {
            entry.shown_at.is_none_or(|shown| {
                now.saturating_duration_since(shown) < entry.notification.severity().display_time()
            })
        });
        if self.visible.len() != before {
            self.fill(now);
        }
    }

    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
        }
    }

    /// Visible toasts with their ids, newest first.
    pub fn entries(&self) -> impl Iterator<Item = (NotificationId, &Notification)> {
        self.visible.iter().map(|entry| (entry.id, &entry.notification))
    }

    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter().map(|entry| &entry.notification)
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    #[must_use]
    pub fn waiting_count(&self) -> usize {
        self.waiting.len()
    }

    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.visible.is_empty() || !self.waiting.is_empty()
    }

    /// Drops every toast whose key starts with `prefix`, e.g. stale list
    /// failures once a reload succeeds.
    pub fn clear_with_prefix(&mut self, prefix: &str) {
        let keep = |entry: &Entry| !entry.notification.message_key().starts_with(prefix);
        self.visible.retain(keep);
        self.waiting.retain(keep);
        self.fill(Instant::now());
    }

    fn fill(&mut self, now: Instant) {
        while self.visible.len() < MAX_VISIBLE {
            let Some(mut entry) = self.waiting.pop_front() else {
                break;
            };
            entry.shown_at = Some(now);
            self.visible.push_back(entry);
        }
    }
}
