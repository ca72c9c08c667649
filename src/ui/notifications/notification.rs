// SPDX-License-Identifier: MPL-2.0
//! A single toast: severity plus a localizable message.

use crate::ui::design_tokens::palette;
use iced::Color;
use std::time::Duration;

/// Identifier handed out by [`super::Manager`] when a toast is pushed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(pub(super) u64);

/// Outcome class of the operation a toast reports on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// A delete went through.
    Success,
    /// A request was refused locally, e.g. removing a gallery's last image.
    Warning,
    /// The backend failed or could not be reached.
    Error,
}

impl Severity {
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Error => palette::ERROR_500,
        }
    }

    /// Glyph shown before the message.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Severity::Success => "✓",
            Severity::Warning => "!",
            Severity::Error => "✕",
        }
    }

    /// How long a toast stays on screen once shown.
    ///
    /// Every severity is transient; errors linger longest so a failure
    /// reason can be read.
    #[must_use]
    pub fn display_time(self) -> Duration {
        match self {
            Severity::Success => Duration::from_secs(3),
            Severity::Warning => Duration::from_secs(5),
            Severity::Error => Duration::from_secs(8),
        }
    }
}

/// Message is stored as an i18n key and resolved at render time, so a
/// language switch also retranslates toasts already on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    severity: Severity,
    message_key: String,
    message_args: Vec<(String, String)>,
}

impl Notification {
    pub fn new(severity: Severity, message_key: impl Into<String>) -> Self {
        Self {
            severity,
            message_key: message_key.into(),
            message_args: Vec::new(),
        }
    }

    pub fn success(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Success, message_key)
    }

    pub fn warning(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message_key)
    }

    pub fn error(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Error, message_key)
    }

    /// Adds a Fluent argument, e.g. `("title", gallery.title)`.
    #[must_use]
    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.message_args.push((key.into(), value.into()));
        self
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    #[must_use]
    pub fn message_args(&self) -> &[(String, String)] {
        &self.message_args
    }
}
