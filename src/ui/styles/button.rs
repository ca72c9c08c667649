// SPDX-License-Identifier: MPL-2.0
//! Button styles shared by the list, the viewer and the dialogs.
//!
//! Every framed button is built from a [`Tint`]: the fill, label and edge
//! colors of its resting state. Hover lightens the fill and lifts the
//! shadow; a disabled button always falls back to the same muted look so
//! "busy" reads identically everywhere.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::button::{Status, Style};
use iced::{Background, Border, Color, Shadow, Theme};

#[derive(Debug, Clone, Copy)]
struct Tint {
    fill: Color,
    hover: Color,
    label: Color,
    edge: Color,
}

const BRAND: Tint = Tint {
    fill: palette::PRIMARY_500,
    hover: palette::PRIMARY_400,
    label: palette::WHITE,
    edge: palette::PRIMARY_600,
};

const DESTRUCTIVE: Tint = Tint {
    fill: palette::ERROR_500,
    hover: Color {
        a: opacity::OVERLAY_HOVER,
        ..palette::ERROR_500
    },
    label: palette::WHITE,
    edge: palette::ERROR_500,
};

fn neutral(theme: &Theme) -> Tint {
    if theme.extended_palette().is_dark {
        Tint {
            fill: palette::GRAY_700,
            hover: Color::from_rgb(0.35, 0.35, 0.37),
            label: palette::WHITE,
            edge: palette::GRAY_400,
        }
    } else {
        Tint {
            fill: palette::GRAY_100,
            hover: palette::GRAY_200,
            label: palette::GRAY_900,
            edge: palette::GRAY_400,
        }
    }
}

fn framed(tint: Tint, status: Status, resting: Shadow) -> Style {
    let (fill, label, edge, shadow) = match status {
        Status::Active | Status::Pressed => (tint.fill, tint.label, tint.edge, resting),
        Status::Hovered => (tint.hover, tint.label, tint.edge, shadow::MD),
        Status::Disabled => (palette::GRAY_200, palette::GRAY_400, palette::GRAY_400, shadow::NONE),
    };

    Style {
        background: Some(Background::Color(fill)),
        text_color: label,
        border: Border {
            color: edge,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        shadow,
        snap: true,
    }
}

/// Main call to action (retry, refresh).
pub fn primary(_theme: &Theme, status: Status) -> Style {
    framed(BRAND, status, shadow::SM)
}

/// Low-emphasis action (cancel, close, "show details").
pub fn secondary(theme: &Theme, status: Status) -> Style {
    let mut style = framed(neutral(theme), status, shadow::NONE);
    if status == Status::Hovered {
        style.border.color = palette::PRIMARY_500;
        style.shadow = shadow::SM;
    }
    style
}

/// Two-state toggle: brand colors while `active`, neutral otherwise.
pub fn toggle(active: bool) -> impl Fn(&Theme, Status) -> Style {
    move |theme, status| {
        if active {
            primary(theme, status)
        } else {
            secondary(theme, status)
        }
    }
}

/// Destructive action (delete image, delete gallery).
pub fn danger(_theme: &Theme, status: Status) -> Style {
    framed(DESTRUCTIVE, status, shadow::NONE)
}

/// Translucent buttons drawn over the image (previous, next).
pub fn overlay(label: Color, alpha: f32, alpha_hover: f32) -> impl Fn(&Theme, Status) -> Style {
    move |_theme, status| {
        let a = match status {
            Status::Hovered => alpha_hover,
            Status::Pressed => opacity::OVERLAY_PRESSED,
            Status::Active | Status::Disabled => alpha,
        };
        Style {
            background: Some(Background::Color(Color { a, ..palette::BLACK })),
            text_color: label,
            border: Border::default(),
            shadow: shadow::MD,
            snap: true,
        }
    }
}

/// Frame around a strip thumbnail; `current` marks the displayed image.
pub fn thumbnail(current: bool) -> impl Fn(&Theme, Status) -> Style {
    move |_theme, status| {
        let edge = match (current, status) {
            (true, _) => palette::PRIMARY_500,
            (false, Status::Hovered) => palette::GRAY_200,
            (false, _) => Color::TRANSPARENT,
        };
        Style {
            background: None,
            text_color: palette::WHITE,
            border: Border {
                color: edge,
                width: border::WIDTH_MD,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}
