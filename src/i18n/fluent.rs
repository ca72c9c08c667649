// SPDX-License-Identifier: MPL-2.0
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

const DEFAULT_LOCALE: &str = "en-US";

fn default_locale() -> LanguageIdentifier {
    DEFAULT_LOCALE.parse().unwrap_or_default()
}

pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    pub available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, None)
    }
}

impl std::fmt::Debug for I18n {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("I18n")
            .field("available_locales", &self.available_locales)
            .field("current_locale", &self.current_locale)
            .finish_non_exhaustive()
    }
}

impl I18n {
    /// Loads every embedded `.ftl` bundle and picks the active locale.
    ///
    /// Resolution order: CLI flag, config file, OS locale, then `en-US`.
    pub fn new(cli_lang: Option<String>, config_lang: Option<&str>) -> Self {
        let mut bundles = HashMap::new();
        let mut available_locales = Vec::new();

        for file in Asset::iter() {
            let filename = file.as_ref();
            let Some(locale) = filename
                .strip_suffix(".ftl")
                .and_then(|stem| stem.parse::<LanguageIdentifier>().ok())
            else {
                continue;
            };
            let Some(content) = Asset::get(filename) else {
                continue;
            };

            let source = String::from_utf8_lossy(content.data.as_ref()).to_string();
            let resource = match FluentResource::try_new(source) {
                Ok(res) => res,
                Err((res, errors)) => {
                    tracing::warn!(%filename, count = errors.len(), "translation file has syntax errors");
                    res
                }
            };

            let mut bundle = FluentBundle::new(vec![locale.clone()]);
            // Unicode isolation marks render as visible glyphs in some fonts.
            bundle.set_use_isolating(false);
            if let Err(errors) = bundle.add_resource(resource) {
                tracing::warn!(%filename, count = errors.len(), "duplicate translation entries");
            }
            bundles.insert(locale.clone(), bundle);
            available_locales.push(locale);
        }
        available_locales.sort_by_key(|l| l.to_string());

        let current_locale =
            resolve_locale(cli_lang, config_lang, &available_locales).unwrap_or_else(default_locale);

        Self {
            bundles,
            available_locales,
            current_locale,
        }
    }

    pub fn set_locale(&mut self, locale: LanguageIdentifier) {
        if self.bundles.contains_key(&locale) {
            self.current_locale = locale;
        }
    }

    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    pub fn tr(&self, key: &str) -> String {
        self.format(key, None)
    }

    /// Integer-looking values are passed as numbers so plural selectors
    /// such as `[one]` match.
    pub fn tr_with_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            match value.parse::<i64>() {
                Ok(number) => fluent_args.set(*name, number),
                Err(_) => fluent_args.set(*name, value.to_string()),
            }
        }
        self.format(key, Some(&fluent_args))
    }

    fn format(&self, key: &str, args: Option<&FluentArgs>) -> String {
        let bundle = self
            .bundles
            .get(&self.current_locale)
            .filter(|bundle| bundle.has_message(key))
            .or_else(|| self.bundles.get(&default_locale()));

        if let Some(bundle) = bundle {
            if let Some(pattern) = bundle.get_message(key).and_then(|msg| msg.value()) {
                let mut errors = vec![];
                let value = bundle.format_pattern(pattern, args, &mut errors);
                if errors.is_empty() {
                    return value.to_string();
                }
            }
        }
        format!("MISSING: {}", key)
    }
}

fn resolve_locale(
    cli_lang: Option<String>,
    config_lang: Option<&str>,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    let supported = |raw: &str| {
        raw.parse::<LanguageIdentifier>()
            .ok()
            .and_then(|lang| match_available(&lang, available))
    };

    cli_lang
        .as_deref()
        .and_then(&supported)
        .or_else(|| config_lang.and_then(&supported))
        .or_else(|| sys_locale::get_locale().and_then(|os| supported(&os)))
}

/// Exact match first, then the first locale sharing the language subtag.
fn match_available(
    lang: &LanguageIdentifier,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    available
        .iter()
        .find(|candidate| *candidate == lang)
        .or_else(|| available.iter().find(|candidate| candidate.language == lang.language))
        .cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lang(raw: &str) -> LanguageIdentifier {
        raw.parse().expect("valid language identifier")
    }

    fn available() -> Vec<LanguageIdentifier> {
        vec![lang("en-US"), lang("fr")]
    }

    #[test]
    fn resolve_locale_prefers_cli() {
        let resolved = resolve_locale(Some("fr".to_string()), Some("en-US"), &available());
        assert_eq!(resolved, Some(lang("fr")));
    }

    #[test]
    fn resolve_locale_uses_config() {
        let resolved = resolve_locale(None, Some("fr"), &available());
        assert_eq!(resolved, Some(lang("fr")));
    }

    #[test]
    fn resolve_locale_matches_language_subtag() {
        let resolved = resolve_locale(Some("fr-CA".to_string()), None, &available());
        assert_eq!(resolved, Some(lang("fr")));
    }

    #[test]
    fn resolve_locale_default_is_available_or_none() {
        // OS dependent: only check the result is one of the shipped locales.
        if let Some(resolved) = resolve_locale(Some("xx".to_string()), None, &available()) {
            assert!(available().contains(&resolved));
        }
    }

    #[test]
    fn bundled_locales_are_loaded() {
        let i18n = I18n::new(Some("en-US".into()), None);
        assert!(i18n.available_locales.contains(&lang("en-US")));
        assert!(i18n.available_locales.contains(&lang("fr")));
    }

    #[test]
    fn tr_returns_translation_and_missing_marker() {
        let i18n = I18n::new(Some("en-US".into()), None);
        assert_eq!(i18n.tr("navbar-refresh"), "Refresh");
        assert_eq!(i18n.tr("no-such-key"), "MISSING: no-such-key");
    }

    #[test]
    fn tr_with_args_interpolates() {
        let i18n = I18n::new(Some("en-US".into()), None);
        let text = i18n.tr_with_args("viewer-counter", &[("current", "2"), ("total", "5")]);
        assert_eq!(text, "2 / 5");
    }

    #[test]
    fn numeric_args_select_plural_forms() {
        let i18n = I18n::new(Some("en-US".into()), None);
        assert_eq!(i18n.tr_with_args("card-photos", &[("count", "1")]), "1 Photo");
        assert_eq!(i18n.tr_with_args("card-photos", &[("count", "3")]), "3 Photos");
        assert_eq!(i18n.tr_with_args("card-by", &[("name", "Ana")]), "by Ana");
    }

    #[test]
    fn french_translation_is_used_when_selected() {
        let i18n = I18n::new(Some("fr".into()), None);
        assert_eq!(i18n.tr("navbar-refresh"), "Actualiser");
    }
}
