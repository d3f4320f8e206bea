//! Language registry: Single source of truth for all supported languages.
//!
//! Every language the site serves is declared here together with the locale
//! data needed to render it: BCP-47 locale, default currency, number format
//! and date pattern. The registry is initialized once via `OnceLock` and is
//! immutable afterwards.

use crate::i18n::format::NumberFormat;
use std::sync::OnceLock;

/// Configuration for a supported language.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// ISO 639-1 language code, also the first path segment of every route (e.g., "pl")
    pub code: &'static str,

    /// English name of the language (e.g., "Polish")
    pub name: &'static str,

    /// Native name of the language (e.g., "Polski")
    pub native_name: &'static str,

    /// BCP-47 locale used for number and date formatting (e.g., "pl-PL")
    pub locale: &'static str,

    /// ISO 4217 currency used when an offer carries no currency of its own
    pub default_currency: &'static str,

    /// Decimal and grouping conventions for this locale
    pub number_format: NumberFormat,

    /// chrono format string for calendar dates
    pub date_pattern: &'static str,

    /// Whether this is the language served when none is requested (only one should be true)
    pub is_default: bool,

    /// Whether this language is enabled for use
    pub enabled: bool,
}

/// Global language registry singleton.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    /// Get a language configuration by its code.
    ///
    /// Matching is case-insensitive so that `/PL/spa` resolves like `/pl/spa`.
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages
            .iter()
            .find(|lang| lang.code.eq_ignore_ascii_case(code))
    }

    /// Get all enabled languages, in declaration order.
    pub fn list_enabled(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().filter(|lang| lang.enabled).collect()
    }

    /// Get all languages (including disabled ones).
    pub fn list_all(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().collect()
    }

    /// Get the default language configuration.
    ///
    /// # Panics
    /// Panics if no default language is found or if multiple default
    /// languages are defined (this indicates a configuration error).
    pub fn default_language(&self) -> &LanguageConfig {
        let defaults: Vec<_> = self
            .languages
            .iter()
            .filter(|lang| lang.is_default)
            .collect();

        match defaults.len() {
            0 => panic!("No default language found in registry"),
            1 => defaults[0],
            _ => panic!("Multiple default languages found in registry"),
        }
    }
}

/// Default language configurations.
///
/// Polish is the house language of the hotel and the default; English is the
/// secondary locale.
fn default_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            code: "pl",
            name: "Polish",
            native_name: "Polski",
            locale: "pl-PL",
            default_currency: "PLN",
            number_format: NumberFormat::POLISH,
            date_pattern: "%d.%m.%Y",
            is_default: true,
            enabled: true,
        },
        LanguageConfig {
            code: "en",
            name: "English",
            native_name: "English",
            locale: "en-US",
            default_currency: "USD",
            number_format: NumberFormat::US_ENGLISH,
            date_pattern: "%m/%d/%Y",
            is_default: false,
            enabled: true,
        },
    ]
}
