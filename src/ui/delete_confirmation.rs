// SPDX-License-Identifier: MPL-2.0
//! Two-step confirmation shared by image and gallery deletion.
//!
//! `Idle -> PendingConfirmation -> Deleting -> Idle`. The flow never talks to
//! the network itself: confirming yields [`Effect::Execute`] and the owner
//! reports the outcome back with [`Message::Completed`].

use crate::domain::Gallery;
use crate::error::{Error, ValidationError};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::keyboard::{self, key::Named, Key};
use iced::widget::{button, container, Column, Row, Text};
use iced::{alignment, event, Element, Length, Subscription};

/// What the user asked to delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingDeletion {
    Image {
        gallery_id: String,
        public_id: String,
        index: usize,
    },
    Gallery {
        gallery_id: String,
        title: String,
    },
}

impl PendingDeletion {
    /// Targets one image, rejecting the gallery's last image and images
    /// without a public identifier.
    pub fn image(gallery: &Gallery, index: usize) -> Result<Self, ValidationError> {
        let public_id = gallery.validate_image_removal(index)?;
        Ok(PendingDeletion::Image {
            gallery_id: gallery.id.clone(),
            public_id: public_id.to_string(),
            index,
        })
    }

    pub fn gallery(gallery: &Gallery) -> Self {
        PendingDeletion::Gallery {
            gallery_id: gallery.id.clone(),
            title: gallery.title.clone(),
        }
    }

    pub fn gallery_id(&self) -> &str {
        match self {
            PendingDeletion::Image { gallery_id, .. }
            | PendingDeletion::Gallery { gallery_id, .. } => gallery_id,
        }
    }
}

/// Phase of the flow; the target travels with it so at most one exists.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    PendingConfirmation(PendingDeletion),
    Deleting(PendingDeletion),
}

#[derive(Debug, Clone)]
pub enum Message {
    Confirm,
    Cancel,
    /// Escape pressed while the flow is visible.
    EscapePressed,
    /// Outcome of the delete request issued after [`Effect::Execute`].
    Completed(Result<(), Error>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Request rejected before confirmation; surface as a warning.
    Rejected(ValidationError),
    /// Issue the delete request for this target.
    Execute(PendingDeletion),
    /// Backend confirmed the deletion; commit it to local data.
    Committed(PendingDeletion),
    /// Backend refused or was unreachable; local data stays untouched.
    Failed {
        target: PendingDeletion,
        error: Error,
    },
}

#[derive(Debug, Clone, Default)]
pub struct DeleteConfirmationFlow {
    phase: Phase,
}

impl DeleteConfirmationFlow {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.phase, Phase::Idle)
    }

    pub fn is_deleting(&self) -> bool {
        matches!(self.phase, Phase::Deleting(_))
    }

    pub fn pending(&self) -> Option<&PendingDeletion> {
        match &self.phase {
            Phase::Idle => None,
            Phase::PendingConfirmation(target) | Phase::Deleting(target) => Some(target),
        }
    }

    /// Opens the confirmation for a validated target.
    ///
    /// Ignored unless idle, so a second request cannot replace one in flight.
    pub fn request(&mut self, target: Result<PendingDeletion, ValidationError>) -> Effect {
        if !self.is_idle() {
            return Effect::None;
        }
        match target {
            Ok(target) => {
                self.phase = Phase::PendingConfirmation(target);
                Effect::None
            }
            Err(reason) => Effect::Rejected(reason),
        }
    }

    pub fn handle(&mut self, message: Message) -> Effect {
        match message {
            Message::Confirm => match std::mem::take(&mut self.phase) {
                Phase::PendingConfirmation(target) => {
                    self.phase = Phase::Deleting(target.clone());
                    Effect::Execute(target)
                }
                other => {
                    self.phase = other;
                    Effect::None
                }
            },
            Message::Cancel | Message::EscapePressed => {
                if matches!(self.phase, Phase::PendingConfirmation(_)) {
                    self.phase = Phase::Idle;
                }
                Effect::None
            }
            Message::Completed(result) => match std::mem::take(&mut self.phase) {
                Phase::Deleting(target) => match result {
                    Ok(()) => Effect::Committed(target),
                    Err(error) => Effect::Failed { target, error },
                },
                other => {
                    self.phase = other;
                    Effect::None
                }
            },
        }
    }

    /// Escape listener for a dialog shown outside the gallery modal.
    ///
    /// The owner subscribes only while the flow is not idle; inside the
    /// modal Escape arrives through the modal's own listener.
    pub fn subscription() -> Subscription<Message> {
        event::listen_with(|event, status, _window| match event {
            event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. })
                if status != event::Status::Captured =>
            {
                escape_message(&key)
            }
            _ => None,
        })
    }

    /// Confirmation dialog, or `None` while idle.
    ///
    /// Both buttons are disabled while the request is in flight.
    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Option<Element<'a, Message>> {
        let (target, deleting) = match &self.phase {
            Phase::Idle => return None,
            Phase::PendingConfirmation(target) => (target, false),
            Phase::Deleting(target) => (target, true),
        };

        let (title, body) = match target {
            PendingDeletion::Image { index, .. } => (
                i18n.tr("delete-image-title"),
                i18n.tr_with_args(
                    "delete-image-body",
                    &[("position", (index + 1).to_string().as_str())],
                ),
            ),
            PendingDeletion::Gallery { title, .. } => (
                i18n.tr("delete-gallery-title"),
                i18n.tr_with_args("delete-gallery-body", &[("title", title.as_str())]),
            ),
        };

        let confirm_label = if deleting {
            i18n.tr("delete-confirm-busy")
        } else {
            i18n.tr("delete-confirm")
        };

        let mut confirm = button(Text::new(confirm_label))
            .padding([spacing::XS, spacing::MD])
            .style(styles::button::danger);
        let mut cancel = button(Text::new(i18n.tr("delete-cancel")))
            .padding([spacing::XS, spacing::MD])
            .style(styles::button::secondary);
        if !deleting {
            confirm = confirm.on_press(Message::Confirm);
            cancel = cancel.on_press(Message::Cancel);
        }

        let actions = Row::new()
            .spacing(spacing::SM)
            .push(cancel)
            .push(confirm);

        let content = Column::new()
            .spacing(spacing::MD)
            .push(Text::new(title).size(typography::TITLE_SM))
            .push(Text::new(body).size(typography::BODY))
            .push(
                container(actions)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Right),
            );

        Some(
            container(content)
                .max_width(sizing::DIALOG_WIDTH)
                .padding(spacing::LG)
                .style(styles::container::dialog)
                .into(),
        )
    }
}

fn escape_message(key: &Key) -> Option<Message> {
    matches!(key, Key::Named(Named::Escape)).then_some(Message::EscapePressed)
}
