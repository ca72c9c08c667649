// SPDX-License-Identifier: MPL-2.0
//! Design tokens shared by every widget style.
//!
//! Values live in small modules named after what they scale (`spacing`,
//! `sizing`, `palette`...) so call sites read as `spacing::MD` or
//! `palette::ERROR_500`. Components never hard-code a color or a size that
//! has a token here.
//!
//! ```
//! use gallery_admin::ui::design_tokens::{opacity, palette, spacing};
//! use iced::Color;
//!
//! let scrim = Color { a: opacity::OVERLAY_STRONG, ..palette::BLACK };
//! assert_eq!(spacing::MD, 16.0);
//! # let _ = scrim;
//! ```

use iced::Color;

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;

    pub const GRAY_900: Color = Color::from_rgb(0.11, 0.11, 0.12);
    pub const GRAY_700: Color = Color::from_rgb(0.29, 0.30, 0.32);
    pub const GRAY_400: Color = Color::from_rgb(0.42, 0.43, 0.45);
    pub const GRAY_200: Color = Color::from_rgb(0.76, 0.77, 0.79);
    pub const GRAY_100: Color = Color::from_rgb(0.88, 0.89, 0.90);

    /// Accent used for primary actions and the selected thumbnail.
    pub const PRIMARY_400: Color = Color::from_rgb(0.40, 0.63, 0.98);
    pub const PRIMARY_500: Color = Color::from_rgb(0.24, 0.51, 0.93);
    pub const PRIMARY_600: Color = Color::from_rgb(0.17, 0.41, 0.80);

    pub const ERROR_500: Color = Color::from_rgb(0.86, 0.21, 0.22);
    pub const WARNING_500: Color = Color::from_rgb(0.93, 0.62, 0.11);
    pub const SUCCESS_500: Color = Color::from_rgb(0.20, 0.66, 0.40);
    pub const INFO_500: Color = Color::from_rgb(0.35, 0.56, 0.96);
}

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    /// Modal backdrop and lightbox arrows at rest.
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OVERLAY_HOVER: f32 = 0.8;
    pub const OVERLAY_PRESSED: f32 = 0.9;
    pub const SURFACE: f32 = 0.95;
    pub const OPAQUE: f32 = 1.0;
}

/// 4px grid.
pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
}

pub mod sizing {
    pub const ICON_MD: f32 = 24.0;
    pub const ICON_XL: f32 = 48.0;
    pub const ICON_XXL: f32 = 64.0;

    pub const TOAST_WIDTH: f32 = 340.0;
    pub const DIALOG_WIDTH: f32 = 420.0;
    /// Width of the gallery details panel beside the lightbox.
    pub const SIDEBAR_WIDTH: f32 = 300.0;

    pub const CARD_WIDTH: f32 = 280.0;
    pub const CARD_THUMBNAIL_HEIGHT: f32 = 190.0;

    /// Edge of a thumbnail in the modal strip.
    pub const THUMBNAIL: f32 = 64.0;
    /// Previous/next hit target; 44px is the smallest comfortable touch target.
    pub const NAV_BUTTON: f32 = 44.0;
}

pub mod typography {
    pub const TITLE_LG: f32 = 28.0;
    pub const TITLE_MD: f32 = 20.0;
    pub const TITLE_SM: f32 = 17.0;
    pub const BODY_LG: f32 = 16.0;
    pub const BODY: f32 = 14.0;
    pub const BODY_SM: f32 = 13.0;
    pub const CAPTION: f32 = 12.0;
}

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    /// Selected thumbnail and toast outline.
    pub const WIDTH_MD: f32 = 2.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    /// Pill badges.
    pub const FULL: f32 = 9999.0;
}

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    const fn elevation(offset_y: f32, blur_radius: f32) -> Shadow {
        Shadow {
            color: palette::BLACK,
            offset: Vector { x: 0.0, y: offset_y },
            blur_radius,
        }
    }

    pub const NONE: Shadow = elevation(0.0, 0.0);
    pub const SM: Shadow = elevation(2.0, 4.0);
    pub const MD: Shadow = elevation(4.0, 10.0);
    pub const LG: Shadow = elevation(10.0, 24.0);
}

const _: () = {
    assert!(spacing::XXS < spacing::XS);
    assert!(spacing::XS < spacing::SM);
    assert!(spacing::SM < spacing::MD);
    assert!(spacing::MD < spacing::LG);

    assert!(opacity::OVERLAY_SUBTLE < opacity::OVERLAY_MEDIUM);
    assert!(opacity::OVERLAY_MEDIUM < opacity::OVERLAY_STRONG);
    assert!(opacity::OVERLAY_HOVER < opacity::OVERLAY_PRESSED);

    assert!(sizing::NAV_BUTTON >= 44.0);
    assert!(sizing::CARD_WIDTH < sizing::DIALOG_WIDTH);

    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::BODY > typography::CAPTION);
};
