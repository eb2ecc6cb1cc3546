//! Language type: validated language representation.

use crate::i18n::{LanguageConfig, LanguageRegistry};
use anyhow::{bail, Result};
use std::fmt;
use tracing::warn;

/// A validated language.
///
/// Only registered, enabled languages can be constructed, so every
/// `Language` has a `LanguageConfig` behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Language {
    /// ISO 639-1 language code (e.g., "es", "en")
    code: &'static str,
}

impl Language {
    /// Spanish, the language the page is authored in.
    pub const SPANISH: Language = Language { code: "es" };

    /// English, the alternate language.
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

    /// Resolve a stored preference value.
    ///
    /// A missing value silently yields the base language; an unrecognized one
    /// is logged and also yields the base language.
    pub fn from_preference(stored: Option<&str>) -> Language {
        match stored {
            None => Language::base(),
            Some(code) => Language::from_code(code).unwrap_or_else(|e| {
                warn!("Ignoring stored language preference: {}", e);
                Language::base()
            }),
        }
    }

    /// Get the base language.
    pub fn base() -> Language {
        let config = LanguageRegistry::get().base();
        Language { code: config.code }
    }

    /// Get the ISO 639-1 language code.
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Get the full language configuration from the registry.
    ///
    /// # Panics
    /// Panics if the code is not in the registry, which cannot happen for a
    /// `Language` built through `from_code` or the constants.
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get()
            .get_by_code(self.code)
            .expect("Language code should always be valid")
    }

    /// Get the English name of the language.
    pub fn name(&self) -> &'static str {
        self.config().name
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}
