// SPDX-License-Identifier: MPL-2.0
//! Rendering of the toast stack in the bottom-right corner.

use super::manager::{Manager, Message};
use super::notification::{Notification, NotificationId, Severity};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{border, opacity, palette, radius, shadow, sizing, spacing, typography};
use iced::widget::{button, container, Column, Container, Row, Space, Text};
use iced::{alignment, Background, Border, Color, Element, Length, Theme};

pub struct Toast;

impl Toast {
    /// One toast: severity glyph, translated message and a close button.
    pub fn view<'a>(id: NotificationId, notification: &'a Notification, i18n: &'a I18n) -> Element<'a, Message> {
        let severity = notification.severity();

        let glyph = Container::new(Text::new(severity.glyph()).size(typography::BODY))
            .width(Length::Fixed(sizing::ICON_MD))
            .height(Length::Fixed(sizing::ICON_MD))
            .center_x(Length::Fixed(sizing::ICON_MD))
            .center_y(Length::Fixed(sizing::ICON_MD))
            .style(move |_theme: &Theme| glyph_style(severity));

        let close = button(Text::new("×").size(typography::BODY_LG))
            .on_press(Message::Dismiss(id))
            .padding([0.0, spacing::XXS])
            .style(close_button_style);

        let row = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(glyph)
            .push(
                Text::new(message_text(notification, i18n))
                    .size(typography::BODY)
                    .width(Length::Fill),
            )
            .push(close);

        Container::new(row)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| toast_style(theme, severity))
            .into()
    }

    /// Stack of visible toasts, newest at the bottom, anchored bottom-right.
    pub fn view_overlay<'a>(manager: &'a Manager, i18n: &'a I18n) -> Element<'a, Message> {
        if manager.visible_count() == 0 {
            return Space::new().width(Length::Shrink).height(Length::Shrink).into();
        }

        let mut entries: Vec<_> = manager.entries().collect();
        entries.reverse();
        let stack = entries
            .into_iter()
            .fold(Column::new().spacing(spacing::XS), |column, (id, notification)| {
                column.push(Self::view(id, notification, i18n))
            })
            .align_x(alignment::Horizontal::Right);

        Container::new(stack)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(spacing::LG)
            .align_x(alignment::Horizontal::Right)
            .align_y(alignment::Vertical::Bottom)
            .into()
    }
}

fn message_text(notification: &Notification, i18n: &I18n) -> String {
    let args: Vec<(&str, &str)> = notification
        .message_args()
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect();
    if args.is_empty() {
        i18n.tr(notification.message_key())
    } else {
        i18n.tr_with_args(notification.message_key(), &args)
    }
}

fn toast_style(theme: &Theme, severity: Severity) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(palette.background.base.color)),
        text_color: Some(palette.background.base.text),
        border: Border {
            color: severity.color(),
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        ..Default::default()
    }
}

fn glyph_style(severity: Severity) -> container::Style {
    container::Style {
        background: Some(Background::Color(severity.color())),
        text_color: Some(palette::WHITE),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

fn close_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let text_color = theme.extended_palette().background.base.text;
    let hover = |alpha: f32| {
        Some(Background::Color(Color {
            a: alpha,
            ..palette::GRAY_400
        }))
    };

    button::Style {
        background: match status {
            button::Status::Hovered => hover(opacity::OVERLAY_SUBTLE),
            button::Status::Pressed => hover(opacity::OVERLAY_MEDIUM),
            button::Status::Active | button::Status::Disabled => None,
        },
        text_color,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
