// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The gallery grid sits under the navbar; the card delete dialog, the
//! gallery modal and the toasts are stacked on top of it.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::media::ImageCache;
use crate::ui::delete_confirmation::DeleteConfirmationFlow;
use crate::ui::gallery_list::{self, GalleryListController};
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::notifications::{self, Toast};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use crate::ui::viewer::{self, GalleryModal};
use iced::widget::{center, opaque, Column, Container, Stack};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub theme_mode: ThemeMode,
    pub list: &'a GalleryListController,
    pub modal: &'a GalleryModal,
    pub card_delete: &'a DeleteConfirmationFlow,
    pub images: &'a ImageCache,
    pub notifications: &'a notifications::Manager,
    pub spinner_rotation: f32,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let navbar = navbar::view(NavbarViewContext {
        i18n: ctx.i18n,
        loading: ctx.list.is_loading(),
        dark_mode: ctx.theme_mode.is_dark(),
    })
    .map(Message::Navbar);

    let grid = gallery_list::view(gallery_list::ViewContext {
        i18n: ctx.i18n,
        list: ctx.list,
        images: ctx.images,
        spinner_rotation: ctx.spinner_rotation,
    })
    .map(Message::GalleryList);

    let base = Column::new()
        .push(navbar)
        .push(
            Container::new(grid)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .width(Length::Fill)
        .height(Length::Fill);

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(base);

    if let Some(dialog) = ctx.card_delete.view(ctx.i18n) {
        let backdrop = Container::new(center(dialog.map(Message::CardDelete)))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::backdrop);
        layers = layers.push(opaque(backdrop));
    }

    if let Some(modal) = viewer::view(viewer::ViewContext {
        i18n: ctx.i18n,
        modal: ctx.modal,
        images: ctx.images,
        spinner_rotation: ctx.spinner_rotation,
    }) {
        layers = layers.push(modal.map(Message::Modal));
    }

    layers
        .push(Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification))
        .into()
}
