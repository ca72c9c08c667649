// SPDX-License-Identifier: MPL-2.0
//! Modal layout: lightbox with navigation overlay, thumbnail strip and
//! details panel, with the confirmation dialog stacked on top.

use super::component::{GalleryModal, Message};
use crate::domain::Gallery;
use crate::i18n::fluent::I18n;
use crate::media::{placeholder, CachedImage, ImageCache, ImageData};
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::format::format_date;
use crate::ui::styles;
use crate::ui::widgets::Spinner;
use iced::widget::{
    button, center, container, image, opaque, scrollable, Column, Container, Row, Space, Stack,
    Text,
};
use iced::{alignment, ContentFit, Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub modal: &'a GalleryModal,
    pub images: &'a ImageCache,
    pub spinner_rotation: f32,
}

/// Render the modal, or `None` while it is closed.
pub fn view<'a>(ctx: ViewContext<'a>) -> Option<Element<'a, Message>> {
    let gallery = ctx.modal.gallery()?;
    let i18n = ctx.i18n;

    let header = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(Text::new(gallery.title.as_str()).size(typography::TITLE_MD))
        .push(Space::new().width(Length::Fill))
        .push(
            button(Text::new(details_label(i18n, ctx.modal.show_details())))
                .on_press(Message::ToggleDetails)
                .style(styles::button::toggle(ctx.modal.show_details())),
        )
        .push(
            button(Text::new(i18n.tr("viewer-delete-gallery")))
                .on_press(Message::RequestDeleteGallery)
                .style(styles::button::danger),
        )
        .push(
            button(Text::new(i18n.tr("viewer-close")))
                .on_press(Message::Close)
                .style(styles::button::secondary),
        );

    let mut body = Row::new()
        .spacing(spacing::LG)
        .height(Length::Fill)
        .push(
            Column::new()
                .spacing(spacing::SM)
                .width(Length::Fill)
                .push(lightbox(&ctx))
                .push(footer(i18n, ctx.modal, gallery))
                .push(thumbnail_strip(ctx.images, ctx.modal, gallery)),
        );
    if ctx.modal.show_details() {
        body = body.push(details_panel(i18n, gallery));
    }

    let content = Container::new(
        Column::new()
            .spacing(spacing::MD)
            .padding(spacing::LG)
            .push(header)
            .push(body),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .style(styles::container::backdrop);

    let mut layers = Stack::new().push(content);
    if let Some(dialog) = ctx.modal.delete_flow().view(i18n) {
        layers = layers.push(opaque(center(dialog.map(Message::Delete))));
    }

    Some(opaque(layers))
}

fn details_label(i18n: &I18n, visible: bool) -> String {
    if visible {
        i18n.tr("viewer-hide-details")
    } else {
        i18n.tr("viewer-show-details")
    }
}

fn lightbox<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let viewer = ctx.modal.viewer();

    let content: Element<'a, Message> = if viewer.is_loading() {
        center(
            Spinner::new(palette::WHITE, ctx.spinner_rotation).size(sizing::ICON_XXL),
        )
        .into()
    } else {
        let data = if viewer.is_showing_placeholder() {
            placeholder()
        } else {
            match ctx
                .modal
                .current_url()
                .and_then(|url| ctx.images.peek(url))
            {
                Some(CachedImage::Ready(data)) => data,
                Some(CachedImage::Failed) | None => placeholder(),
            }
        };
        picture(data)
    };

    let mut layers = Stack::new().width(Length::Fill).height(Length::Fill).push(content);

    if viewer.can_navigate() {
        let arrow = |label: &'static str, message: Message| {
            button(
                Container::new(Text::new(label).size(typography::TITLE_LG))
                    .center_x(Length::Fixed(sizing::NAV_BUTTON))
                    .center_y(Length::Fixed(sizing::NAV_BUTTON)),
            )
            .padding(0)
            .on_press(message)
            .style(styles::button::overlay(
                palette::WHITE,
                opacity::OVERLAY_MEDIUM,
                opacity::OVERLAY_STRONG,
            ))
        };

        layers = layers.push(
            Container::new(
                Row::new()
                    .align_y(alignment::Vertical::Center)
                    .push(arrow("‹", Message::Previous))
                    .push(Space::new().width(Length::Fill))
                    .push(arrow("›", Message::Next)),
            )
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(spacing::SM)
            .align_y(alignment::Vertical::Center),
        );
    }

    layers.into()
}

fn picture<'a>(data: &ImageData) -> Element<'a, Message> {
    center(
        image(data.handle.clone())
            .width(Length::Fill)
            .height(Length::Fill)
            .content_fit(ContentFit::Contain),
    )
    .into()
}

fn footer<'a>(i18n: &I18n, modal: &GalleryModal, gallery: &'a Gallery) -> Element<'a, Message> {
    let index = modal.viewer().index();
    let counter = i18n.tr_with_args(
        "viewer-counter",
        &[
            ("current", (index + 1).to_string().as_str()),
            ("total", gallery.image_count().to_string().as_str()),
        ],
    );

    let mut row = Row::new()
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Center)
        .push(Text::new(counter).size(typography::BODY));

    if let Some(caption) = gallery.image(index).and_then(|img| img.caption.as_deref()) {
        row = row.push(Text::new(caption).size(typography::BODY));
    }

    row = row.push(Space::new().width(Length::Fill)).push(
        button(Text::new(i18n.tr("viewer-delete-image")))
            .on_press(Message::RequestDeleteImage)
            .style(styles::button::danger),
    );

    row.into()
}

fn thumbnail_strip<'a>(
    images: &ImageCache,
    modal: &GalleryModal,
    gallery: &Gallery,
) -> Element<'a, Message> {
    let current = modal.viewer().index();

    let strip = gallery
        .images
        .iter()
        .enumerate()
        .fold(Row::new().spacing(spacing::XS), |row, (index, img)| {
            let thumb: Element<'a, Message> = match images.peek(&img.url) {
                Some(CachedImage::Ready(data)) => thumbnail_image(data),
                Some(CachedImage::Failed) => thumbnail_image(placeholder()),
                None => Container::new(Space::new())
                    .width(Length::Fixed(sizing::THUMBNAIL))
                    .height(Length::Fixed(sizing::THUMBNAIL))
                    .style(styles::container::skeleton)
                    .into(),
            };
            row.push(
                button(thumb)
                    .padding(2)
                    .on_press(Message::SelectIndex(index))
                    .style(styles::button::thumbnail(index == current)),
            )
        });

    scrollable(strip)
        .direction(scrollable::Direction::Horizontal(
            scrollable::Scrollbar::default(),
        ))
        .width(Length::Fill)
        .into()
}

fn thumbnail_image<'a>(data: &ImageData) -> Element<'a, Message> {
    image(data.handle.clone())
        .width(Length::Fixed(sizing::THUMBNAIL))
        .height(Length::Fixed(sizing::THUMBNAIL))
        .content_fit(ContentFit::Cover)
        .into()
}

fn details_panel<'a>(i18n: &I18n, gallery: &'a Gallery) -> Element<'a, Message> {
    let field = |label: String, value: String| {
        Column::new()
            .spacing(2)
            .push(Text::new(label).size(typography::CAPTION))
            .push(Text::new(value).size(typography::BODY))
    };
    let or_unset = |value: &str| {
        if value.trim().is_empty() {
            i18n.tr("details-not-set")
        } else {
            value.to_string()
        }
    };

    let visibility = if gallery.is_public {
        i18n.tr("details-public")
    } else {
        i18n.tr("details-private")
    };

    let mut column = Column::new()
        .spacing(spacing::SM)
        .push(Text::new(i18n.tr("details-title")).size(typography::TITLE_SM))
        .push(field(
            i18n.tr("details-status"),
            i18n.tr(gallery.status.i18n_key()),
        ))
        .push(field(i18n.tr("details-visibility"), visibility))
        .push(field(
            i18n.tr("details-category"),
            or_unset(&gallery.category),
        ))
        .push(field(
            i18n.tr("details-photographer"),
            or_unset(&gallery.photographer),
        ))
        .push(field(
            i18n.tr("details-client"),
            or_unset(&gallery.client_name),
        ))
        .push(field(
            i18n.tr("details-location"),
            or_unset(&gallery.location),
        ))
        .push(field(
            i18n.tr("details-event-date"),
            format_date(gallery.event_date.as_deref(), i18n),
        ))
        .push(field(
            i18n.tr("details-created"),
            format_date(gallery.created_at.as_deref(), i18n),
        ));

    if gallery.was_updated() {
        column = column.push(field(
            i18n.tr("details-updated"),
            format_date(gallery.updated_at.as_deref(), i18n),
        ));
    }

    column = column
        .push(field(i18n.tr("details-views"), gallery.views.to_string()))
        .push(field(
            i18n.tr("details-downloads"),
            gallery.downloads.to_string(),
        ));

    if !gallery.tags.is_empty() {
        let tags = gallery
            .tags
            .iter()
            .map(|tag| format!("#{tag}"))
            .collect::<Vec<_>>()
            .join(" ");
        column = column.push(field(i18n.tr("details-tags"), tags));
    }

    if !gallery.description.trim().is_empty() {
        column = column.push(Text::new(gallery.description.as_str()).size(typography::BODY_SM));
    }

    container(scrollable(column))
        .width(Length::Fixed(sizing::SIDEBAR_WIDTH))
        .height(Length::Fill)
        .padding(spacing::MD)
        .style(styles::container::panel)
        .into()
}
