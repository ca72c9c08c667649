// SPDX-License-Identifier: MPL-2.0
//! Surfaces: cards, panels, dialogs and the modal backdrop.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Details sidebar; also the base of [`dialog`].
pub fn panel(theme: &Theme) -> container::Style {
    let base = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SURFACE,
            ..base
        })),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Gallery card in the list grid.
pub fn card(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        border: Border {
            color: palette.background.strong.color,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Skeleton block shown while galleries load.
pub fn skeleton(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.strong.color)),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Small pill label over a card thumbnail.
pub fn badge(color: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(color)),
        text_color: Some(palette::WHITE),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Opaque layer covering the gallery grid while the viewer is open.
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_PRESSED,
            ..palette::BLACK
        })),
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

/// Confirmation dialog surface.
pub fn dialog(theme: &Theme) -> container::Style {
    container::Style {
        shadow: shadow::LG,
        border: Border {
            color: palette::ERROR_500,
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        ..panel(theme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backdrop_is_nearly_opaque() {
        let style = backdrop(&Theme::Light);
        match style.background {
            Some(Background::Color(color)) => assert!(color.a > opacity::OVERLAY_HOVER),
            other => panic!("expected color background, got {other:?}"),
        }
    }

    #[test]
    fn badge_uses_given_color() {
        let style = badge(palette::WARNING_500)(&Theme::Dark);
        assert_eq!(
            style.background,
            Some(Background::Color(palette::WARNING_500))
        );
    }
}
