//! Language type: validated handle onto a registry entry.

use crate::i18n::{LanguageConfig, LanguageRegistry};
use anyhow::{bail, Result};
use std::fmt;

/// A validated language.
///
/// Only supported, enabled languages can be constructed, so every route
/// handler that holds a `Language` can render without further checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Language {
    /// ISO 639-1 language code (e.g., "pl", "en")
    code: &'static str,
}

impl Language {
    pub const POLISH: Language = Language { code: "pl" };

    pub const ENGLISH: Language = Language { code: "en" };

    /// Create a Language from a language code string.
    ///
    /// # Returns
    /// * `Ok(Language)` if the code is valid and the language is enabled
    /// * `Err` if the code is not found or the language is disabled
    pub fn from_code(code: &str) -> Result<Language> {
        let registry = LanguageRegistry::get();

        match registry.get_by_code(code) {
            Some(config) if config.enabled => Ok(Language { code: config.code }),
            Some(_) => bail!("Language '{}' is not enabled", code),
            None => bail!("Unknown language code: '{}'", code),
        }
    }

    /// The language served when the visitor expresses no usable preference.
    pub fn default_language() -> Language {
        let config = LanguageRegistry::get().default_language();
        Language { code: config.code }
    }

    /// All enabled languages, in registry order.
    pub fn all() -> Vec<Language> {
        LanguageRegistry::get()
            .list_enabled()
            .into_iter()
            .map(|config| Language { code: config.code })
            .collect()
    }

    /// Pick a language from an `Accept-Language` header value.
    ///
    /// Entries are weighted by their `q` parameter (default 1.0) and matched
    /// on the primary subtag, so `en-GB` selects English. Entries with
    /// `q=0`, wildcards and unknown languages are skipped. Falls back to the
    /// default language.
    pub fn negotiate(accept_language: Option<&str>) -> Language {
        let Some(header) = accept_language else {
            return Language::default_language();
        };

        let mut candidates: Vec<(f32, usize, Language)> = header
            .split(',')
            .enumerate()
            .filter_map(|(position, entry)| {
                let mut parts = entry.trim().split(';');
                let tag = parts.next()?.trim();
                let weight = parts
                    .filter_map(|p| p.trim().strip_prefix("q="))
                    .find_map(|q| q.trim().parse::<f32>().ok())
                    .unwrap_or(1.0);

                if weight <= 0.0 || tag == "*" {
                    return None;
                }

                let primary = tag.split('-').next()?;
                Language::from_code(primary)
                    .ok()
                    .map(|language| (weight, position, language))
            })
            .collect();

        // Highest weight first; earlier entries win ties.
        candidates.sort_by(|a, b| b.0.total_cmp(&a.0).then(a.1.cmp(&b.1)));

        candidates
            .first()
            .map(|(_, _, language)| *language)
            .unwrap_or_else(Language::default_language)
    }

    /// Get the ISO 639-1 language code.
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Get the full language configuration from the registry.
    ///
    /// # Panics
    /// Panics if the language code is not found in the registry. This cannot
    /// happen for a Language built through `from_code` or the constants.
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get()
            .get_by_code(self.code)
            .expect("Language code should always be valid")
    }

    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    /// BCP-47 locale (e.g., "pl-PL").
    pub fn locale(&self) -> &'static str {
        self.config().locale
    }

    pub fn is_default(&self) -> bool {
        self.config().is_default
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}
