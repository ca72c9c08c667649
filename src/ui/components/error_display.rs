// SPDX-License-Identifier: MPL-2.0
//! Centered status panel standing in for content that could not be shown:
//! a failed load or an empty collection.
//!
//! ```ignore
//! ErrorDisplay::new(Tone::Failure, i18n.tr("list-error-title"))
//!     .message(i18n.tr(error.i18n_key()))
//!     .details(Details {
//!         text: error.to_string(),
//!         expanded,
//!         on_toggle: Message::ToggleErrorDetails,
//!         show_label: i18n.tr("error-details-show"),
//!         hide_label: i18n.tr("error-details-hide"),
//!     })
//!     .action(i18n.tr("list-retry"), Message::Retry)
//!     .centered()
//! ```

use crate::ui::design_tokens::{border, palette, radius, sizing, spacing, typography};
use crate::ui::styles::button as button_styles;
use iced::widget::{button, container, rule, text, Column, Container, Text};
use iced::{alignment, Background, Border, Color, Element, Length, Theme};

const MAX_WIDTH: f32 = 520.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Something went wrong; usually paired with a retry action.
    Failure,
    /// Nothing went wrong, there is just nothing to show.
    Empty,
}

impl Tone {
    pub fn color(self) -> Color {
        match self {
            Tone::Failure => palette::ERROR_500,
            Tone::Empty => palette::INFO_500,
        }
    }

    fn glyph(self) -> &'static str {
        match self {
            Tone::Failure => "⚠",
            Tone::Empty => "∅",
        }
    }
}

/// Collapsible technical text, e.g. the raw error.
#[derive(Debug, Clone)]
pub struct Details<Message> {
    pub text: String,
    pub expanded: bool,
    pub on_toggle: Message,
    pub show_label: String,
    pub hide_label: String,
}

#[derive(Debug, Clone)]
pub struct ErrorDisplay<Message> {
    tone: Tone,
    title: String,
    message: Option<String>,
    details: Option<Details<Message>>,
    action: Option<(String, Message)>,
}

impl<Message: Clone + 'static> ErrorDisplay<Message> {
    pub fn new(tone: Tone, title: impl Into<String>) -> Self {
        Self {
            tone,
            title: title.into(),
            message: None,
            details: None,
            action: None,
        }
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn details(mut self, details: Details<Message>) -> Self {
        self.details = Some(details);
        self
    }

    pub fn action(mut self, label: impl Into<String>, message: Message) -> Self {
        self.action = Some((label.into(), message));
        self
    }

    pub fn view(self) -> Element<'static, Message> {
        let accent = self.tone.color();
        let accent_text = move |_theme: &Theme| text::Style {
            color: Some(accent),
        };

        let mut content = Column::new()
            .spacing(spacing::SM)
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .push(Text::new(self.tone.glyph()).size(sizing::ICON_XL).style(accent_text))
            .push(Text::new(self.title).size(typography::TITLE_MD).style(accent_text));

        if let Some(message) = self.message {
            content = content.push(
                Text::new(message)
                    .size(typography::BODY)
                    .align_x(alignment::Horizontal::Center),
            );
        }

        if let Some((label, on_press)) = self.action {
            content = content.push(
                button(Text::new(label))
                    .on_press(on_press)
                    .padding([spacing::XS, spacing::LG])
                    .style(button_styles::primary),
            );
        }

        if let Some(details) = self.details {
            let label = if details.expanded {
                details.hide_label
            } else {
                details.show_label
            };
            content = content.push(
                button(Text::new(label).size(typography::BODY_SM))
                    .on_press(details.on_toggle)
                    .style(button_styles::secondary),
            );
            if details.expanded {
                content = content.push(rule::horizontal(1)).push(
                    Text::new(details.text)
                        .size(typography::CAPTION)
                        .font(iced::Font::MONOSPACE)
                        .width(Length::Fill),
                );
            }
        }

        Container::new(content)
            .width(Length::Fill)
            .max_width(MAX_WIDTH)
            .padding(spacing::LG)
            .style(panel_style)
            .into()
    }

    /// Renders the panel centered in all available space.
    pub fn centered(self) -> Element<'static, Message> {
        Container::new(self.view())
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .padding(spacing::LG)
            .into()
    }
}

fn panel_style(theme: &Theme) -> container::Style {
    let extended = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(extended.background.weak.color)),
        border: Border {
            color: extended.background.strong.color,
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        text_color: Some(extended.background.base.text),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum TestMessage {
        Retry,
        Toggle,
    }

    fn details(expanded: bool) -> Details<TestMessage> {
        Details {
            text: "Network Error: refused".into(),
            expanded,
            on_toggle: TestMessage::Toggle,
            show_label: "Show".into(),
            hide_label: "Hide".into(),
        }
    }

    #[test]
    fn tones_have_distinct_colors() {
        assert_ne!(Tone::Failure.color(), Tone::Empty.color());
    }

    #[test]
    fn builder_keeps_action_and_details() {
        let display = ErrorDisplay::new(Tone::Failure, "Could not load galleries")
            .message("The server could not be reached")
            .details(details(true))
            .action("Retry", TestMessage::Retry);

        assert_eq!(display.action, Some(("Retry".to_string(), TestMessage::Retry)));
        assert!(display.details.as_ref().is_some_and(|d| d.expanded));
    }

    #[test]
    fn renders_collapsed_and_expanded() {
        for expanded in [false, true] {
            let _ = ErrorDisplay::new(Tone::Failure, "title")
                .details(details(expanded))
                .centered();
        }
        let _ = ErrorDisplay::<TestMessage>::new(Tone::Empty, "empty").view();
    }
}
