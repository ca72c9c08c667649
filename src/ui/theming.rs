// SPDX-License-Identifier: MPL-2.0
//! Theme preference stored in `settings.toml`.

use iced::Theme;
use serde::{Deserialize, Serialize};

/// `system` follows the desktop setting; the header toggle always writes
/// an explicit `light` or `dark`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    #[must_use]
    pub fn is_dark(self) -> bool {
        self.resolve(system_prefers_dark)
    }

    // Dark when the desktop setting cannot be read.
    fn resolve(self, system_dark: impl FnOnce() -> bool) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => system_dark(),
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        if self.is_dark() {
            ThemeMode::Light
        } else {
            ThemeMode::Dark
        }
    }

    #[must_use]
    pub fn iced_theme(self) -> Theme {
        if self.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

fn system_prefers_dark() -> bool {
    match dark_light::detect() {
        Ok(dark_light::Mode::Light) => false,
        Ok(_) => true,
        Err(err) => {
            tracing::debug!(%err, "system theme detection failed");
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_modes_ignore_the_desktop() {
        assert!(!ThemeMode::Light.resolve(|| true));
        assert!(ThemeMode::Dark.resolve(|| false));
    }

    #[test]
    fn system_mode_follows_the_desktop() {
        assert!(ThemeMode::System.resolve(|| true));
        assert!(!ThemeMode::System.resolve(|| false));
    }

    #[test]
    fn toggle_always_yields_an_explicit_mode() {
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
        assert_ne!(ThemeMode::System.toggled(), ThemeMode::System);
        assert_eq!(ThemeMode::Dark.iced_theme(), Theme::Dark);
    }

    #[test]
    fn stored_in_lowercase() {
        #[derive(Serialize, Deserialize)]
        struct Section {
            theme: ThemeMode,
        }
        let text = toml::to_string(&Section {
            theme: ThemeMode::Dark,
        })
        .expect("serialize");
        assert_eq!(text.trim(), "theme = \"dark\"");

        let parsed: Section = toml::from_str("theme = \"system\"").expect("parse");
        assert_eq!(parsed.theme, ThemeMode::System);
    }
}
