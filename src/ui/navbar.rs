// SPDX-License-Identifier: MPL-2.0
//! Header bar with the application title, refresh and theme toggle.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, rule, Column, Container, Row, Space, Text},
    Element, Length,
};

/// Contextual data needed to render the header.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Refresh is disabled while a load is already running.
    pub loading: bool,
    pub dark_mode: bool,
}

/// Messages emitted by the header.
#[derive(Debug, Clone)]
pub enum Message {
    Refresh,
    ToggleTheme,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    /// Same meaning as a newly created gallery: resynchronize the list.
    Refresh,
    ToggleTheme,
}

/// Process a header message and return the corresponding event.
pub fn update(message: Message, loading: bool) -> Event {
    match message {
        Message::Refresh if loading => Event::None,
        Message::Refresh => Event::Refresh,
        Message::ToggleTheme => Event::ToggleTheme,
    }
}

/// Render the header bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("app-title")).size(typography::TITLE_MD);

    let refresh_button = button(Text::new(ctx.i18n.tr("navbar-refresh")))
        .on_press_maybe((!ctx.loading).then_some(Message::Refresh))
        .style(styles::button::primary);

    // Highlighted while the dark theme is active
    let theme_button = button(Text::new(ctx.i18n.tr("navbar-theme-dark")))
        .on_press(Message::ToggleTheme)
        .style(styles::button::toggle(ctx.dark_mode));

    let row = Row::new()
        .spacing(spacing::SM)
        .padding([spacing::SM, spacing::LG])
        .align_y(Vertical::Center)
        .push(title)
        .push(Space::new().width(Length::Fill))
        .push(refresh_button)
        .push(theme_button);

    Column::new()
        .width(Length::Fill)
        .push(Container::new(row).width(Length::Fill))
        .push(rule::horizontal(1))
        .into()
}
