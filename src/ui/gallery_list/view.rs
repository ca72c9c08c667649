// SPDX-License-Identifier: MPL-2.0
//! Card grid rendering for the gallery collection.

use super::{GalleryListController, LoadState, Message};
use crate::domain::Gallery;
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::media::{placeholder, CachedImage, ImageCache};
use crate::ui::components::error_display::{Details, ErrorDisplay, Tone};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::format::{format_date, truncate_text, CARD_DESCRIPTION_CHARS};
use crate::ui::styles;
use crate::ui::widgets::Spinner;
use iced::widget::{
    button, image, mouse_area, scrollable, Column, Container, Row, Space, Stack, Text,
};
use iced::{alignment, ContentFit, Element, Length};

/// Number of skeleton cards rendered while the collection loads.
const SKELETON_CARDS: usize = 6;

/// Contextual data needed to render the gallery list.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub list: &'a GalleryListController,
    pub images: &'a ImageCache,
    pub spinner_rotation: f32,
}

/// Render the collection for its current load state.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    match ctx.list.state() {
        LoadState::Loading => loading_view(ctx.i18n, ctx.spinner_rotation),
        LoadState::Failed(error) => failed_view(ctx.i18n, error, ctx.list.show_error_details()),
        LoadState::Loaded(galleries) if galleries.is_empty() => {
            ErrorDisplay::new(Tone::Empty, ctx.i18n.tr("list-empty-title"))
                .message(ctx.i18n.tr("list-empty-message"))
                .centered()
        }
        LoadState::Loaded(galleries) => grid(galleries, ctx.i18n, ctx.images),
    }
}

fn loading_view<'a>(i18n: &I18n, rotation: f32) -> Element<'a, Message> {
    let header = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(Spinner::new(palette::PRIMARY_500, rotation))
        .push(Text::new(i18n.tr("list-loading")).size(typography::BODY_LG));

    let cards = (0..SKELETON_CARDS).fold(Row::new().spacing(spacing::MD), |row, _| {
        row.push(skeleton_card())
    });

    scrollable(
        Column::new()
            .spacing(spacing::LG)
            .padding(spacing::LG)
            .push(header)
            .push(cards.wrap().vertical_spacing(spacing::MD)),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

fn skeleton_card<'a>() -> Element<'a, Message> {
    let block = |height: f32, width: Length| {
        Container::new(Space::new().width(width).height(Length::Fixed(height)))
            .style(styles::container::skeleton)
    };

    Container::new(
        Column::new()
            .spacing(spacing::SM)
            .push(block(sizing::CARD_THUMBNAIL_HEIGHT, Length::Fill))
            .push(block(typography::TITLE_SM, Length::FillPortion(3)))
            .push(block(typography::BODY, Length::Fill))
            .push(block(typography::BODY, Length::FillPortion(2))),
    )
    .width(Length::Fixed(sizing::CARD_WIDTH))
    .padding(spacing::SM)
    .style(styles::container::card)
    .into()
}

fn failed_view<'a>(i18n: &I18n, error: &Error, show_details: bool) -> Element<'a, Message> {
    ErrorDisplay::new(Tone::Failure, i18n.tr("list-error-title"))
        .message(i18n.tr(error.i18n_key()))
        .details(Details {
            text: error.to_string(),
            expanded: show_details,
            on_toggle: Message::ToggleErrorDetails,
            show_label: i18n.tr("error-details-show"),
            hide_label: i18n.tr("error-details-hide"),
        })
        .action(i18n.tr("list-retry"), Message::Retry)
        .centered()
}

fn grid<'a>(galleries: &'a [Gallery], i18n: &I18n, images: &ImageCache) -> Element<'a, Message> {
    let cards = galleries
        .iter()
        .fold(Row::new().spacing(spacing::MD), |row, gallery| {
            row.push(card(gallery, i18n, images))
        });

    scrollable(
        Container::new(cards.wrap().vertical_spacing(spacing::MD))
            .width(Length::Fill)
            .padding(spacing::LG),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

fn card<'a>(gallery: &'a Gallery, i18n: &I18n, images: &ImageCache) -> Element<'a, Message> {
    let thumbnail = mouse_area(
        Stack::new()
            .push(thumbnail(gallery, images))
            .push(badges(gallery, i18n)),
    )
    .on_press(Message::Open(gallery.id.clone()));

    let mut body = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(gallery.title.as_str()).size(typography::TITLE_SM));

    if !gallery.description.trim().is_empty() {
        body = body.push(
            Text::new(truncate_text(&gallery.description, CARD_DESCRIPTION_CHARS))
                .size(typography::BODY_SM),
        );
    }

    body = body.push(facts(gallery, i18n));

    if !gallery.category.trim().is_empty() {
        let mut byline = Row::new()
            .spacing(spacing::XS)
            .align_y(alignment::Vertical::Center)
            .push(
                Container::new(Text::new(gallery.category.as_str()).size(typography::CAPTION))
                    .padding([2.0, spacing::XS])
                    .style(styles::container::badge(palette::PRIMARY_500)),
            )
            .push(Space::new().width(Length::Fill));
        if !gallery.photographer.trim().is_empty() {
            byline = byline.push(
                Text::new(i18n.tr_with_args("card-by", &[("name", gallery.photographer.as_str())]))
                    .size(typography::CAPTION),
            );
        }
        body = body.push(byline);
    }

    let actions = Row::new()
        .spacing(spacing::XS)
        .push(
            button(Text::new(i18n.tr("card-view")).size(typography::BODY_SM))
                .padding([spacing::XXS, spacing::SM])
                .style(styles::button::primary)
                .on_press(Message::Open(gallery.id.clone())),
        )
        .push(Space::new().width(Length::Fill))
        .push(
            button(Text::new(i18n.tr("card-delete")).size(typography::BODY_SM))
                .padding([spacing::XXS, spacing::SM])
                .style(styles::button::danger)
                .on_press(Message::RequestDelete(gallery.id.clone())),
        );

    Container::new(
        Column::new()
            .spacing(spacing::SM)
            .push(thumbnail)
            .push(body)
            .push(actions),
    )
    .width(Length::Fixed(sizing::CARD_WIDTH))
    .padding(spacing::SM)
    .style(styles::container::card)
    .into()
}

/// Created date, photo count, then location and views when known.
fn facts<'a>(gallery: &'a Gallery, i18n: &I18n) -> Element<'a, Message> {
    let line = |label: String| Text::new(label).size(typography::CAPTION);

    let mut column = Column::new()
        .spacing(spacing::XXS)
        .push(line(format_date(gallery.created_at.as_deref(), i18n)))
        .push(line(i18n.tr_with_args(
            "card-photos",
            &[("count", gallery.image_count().to_string().as_str())],
        )));
    if !gallery.location.trim().is_empty() {
        column = column.push(line(gallery.location.clone()));
    }
    if gallery.views > 0 {
        column = column.push(line(i18n.tr_with_args(
            "card-views",
            &[("count", gallery.views.to_string().as_str())],
        )));
    }
    column.into()
}

fn thumbnail<'a>(gallery: &Gallery, images: &ImageCache) -> Element<'a, Message> {
    let handle = match gallery.thumbnail_url().map(|url| images.peek(url)) {
        Some(Some(CachedImage::Ready(data))) => data.handle.clone(),
        // Still downloading
        Some(None) => {
            return Container::new(Space::new())
                .width(Length::Fill)
                .height(Length::Fixed(sizing::CARD_THUMBNAIL_HEIGHT))
                .style(styles::container::skeleton)
                .into();
        }
        Some(Some(CachedImage::Failed)) | None => placeholder().handle.clone(),
    };

    image(handle)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::CARD_THUMBNAIL_HEIGHT))
        .content_fit(ContentFit::Cover)
        .into()
}

fn badges<'a>(gallery: &Gallery, i18n: &I18n) -> Element<'a, Message> {
    let badge = |label: String, color| {
        Container::new(Text::new(label).size(typography::CAPTION))
            .padding([2.0, spacing::XS])
            .style(styles::container::badge(color))
    };

    let mut row = Row::new().spacing(spacing::XXS);
    if gallery.image_count() > 1 {
        row = row.push(badge(
            i18n.tr_with_args(
                "card-photo-count",
                &[("count", gallery.image_count().to_string().as_str())],
            ),
            palette::GRAY_900,
        ));
    }
    if gallery.is_draft() {
        row = row.push(badge(i18n.tr("badge-draft"), palette::WARNING_500));
    }
    if gallery.featured {
        row = row.push(badge(i18n.tr("badge-featured"), palette::PRIMARY_600));
    }

    Container::new(row).padding(spacing::XS).into()
}
