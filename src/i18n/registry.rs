//! Language registry: Single source of truth for all supported languages.
//!
//! The page is authored in Spanish (the base language) and can be swapped to
//! English. The registry is initialized once with `OnceLock` and never mutated.

use crate::i18n::strings::{PageStrings, ENGLISH_STRINGS, SPANISH_STRINGS};
use std::sync::OnceLock;

/// Configuration for a supported language.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// ISO 639-1 language code, also used as the `data-lang` button value
    pub code: &'static str,

    /// English name of the language (e.g., "English", "Spanish")
    pub name: &'static str,

    /// Whether this is the language the page is authored in (exactly one)
    pub is_base: bool,

    /// Whether this language is enabled for use
    pub enabled: bool,

    /// Hardcoded title/description for this language
    pub strings: &'static PageStrings,
}

/// Global language registry singleton.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

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
    /// # Returns
    /// * `Some(&LanguageConfig)` if the language exists
    /// * `None` if the language is not found
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// Get the base language configuration.
    ///
    /// # Panics
    /// Panics if the registry does not define exactly one base language
    /// (a configuration error in `default_languages`).
    pub fn base(&self) -> &LanguageConfig {
        let base_langs: Vec<_> = self.languages.iter().filter(|lang| lang.is_base).collect();

        match base_langs.len() {
            0 => panic!("No base language found in registry"),
            1 => base_langs[0],
            _ => panic!("Multiple base languages found in registry"),
        }
    }
}

/// Spanish (base) and English.
fn default_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            code: "es",
            name: "Spanish",
            is_base: true,
            enabled: true,
            strings: &SPANISH_STRINGS,
        },
        LanguageConfig {
            code: "en",
            name: "English",
            is_base: false,
            enabled: true,
            strings: &ENGLISH_STRINGS,
        },
    ]
}
