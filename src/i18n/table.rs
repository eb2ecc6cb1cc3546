//! Translation table derived from authoritative phrase pairs.
//!
//! Every pair contributes one entry to *each* direction, so the map for the
//! language currently displayed always contains the reverse of the map that
//! produced it. Building rejects pairs that would make a reverse lookup
//! ambiguous; without that, switching A -> B -> A would not restore the page.

use crate::i18n::phrases::{HOSTEL_PHRASES, PHRASE_SOURCE, PHRASE_TARGET};
use crate::i18n::Language;
use std::collections::HashMap;
use thiserror::Error;

/// Exact-match dictionary from displayed phrase to the phrase to show instead.
pub type PhraseMap = HashMap<String, String>;

/// One authored translation: `source_text` in `source` is `target_text` in `target`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhrasePair {
    pub source: Language,
    pub target: Language,
    pub source_text: String,
    pub target_text: String,
}

impl PhrasePair {
    pub fn new(
        source: Language,
        source_text: impl Into<String>,
        target: Language,
        target_text: impl Into<String>,
    ) -> Self {
        Self {
            source,
            target,
            source_text: source_text.into(),
            target_text: target_text.into(),
        }
    }
}

/// Reasons a set of phrase pairs cannot form a translation table.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    #[error("phrase '{phrase}' would translate to both '{existing}' and '{conflicting}' in {language}")]
    Collision {
        language: Language,
        phrase: String,
        existing: String,
        conflicting: String,
    },

    #[error("pair '{phrase}' maps {language} onto itself")]
    SameLanguage { language: Language, phrase: String },
}

/// Immutable per-language phrase maps.
#[derive(Debug, Clone, Default)]
pub struct TranslationTable {
    maps: HashMap<Language, PhraseMap>,
}

impl TranslationTable {
    /// Build both lookup directions from `pairs`.
    ///
    /// The map for language `L` is keyed by text in the *other* language and
    /// yields the text to display in `L`. Exact duplicate pairs are folded.
    pub fn from_pairs<I>(pairs: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = PhrasePair>,
    {
        let mut table = TranslationTable::default();

        for pair in pairs {
            if pair.source == pair.target {
                return Err(TableError::SameLanguage {
                    language: pair.source,
                    phrase: pair.source_text,
                });
            }

            table.insert(pair.target, &pair.source_text, &pair.target_text)?;
            table.insert(pair.source, &pair.target_text, &pair.source_text)?;
        }

        Ok(table)
    }

    /// The hostel page table.
    pub fn builtin() -> Result<Self, TableError> {
        Self::from_pairs(builtin_pairs())
    }

    fn insert(&mut self, language: Language, key: &str, value: &str) -> Result<(), TableError> {
        let map = self.maps.entry(language).or_default();

        match map.get(key) {
            Some(existing) if existing != value => Err(TableError::Collision {
                language,
                phrase: key.to_string(),
                existing: existing.clone(),
                conflicting: value.to_string(),
            }),
            Some(_) => Ok(()),
            None => {
                map.insert(key.to_string(), value.to_string());
                Ok(())
            }
        }
    }

    /// Look up the phrase to display in `language` for the currently shown `phrase`.
    ///
    /// `None` means there is no translation, which is distinct from an empty one.
    /// The lookup is exact and case-sensitive; callers trim beforehand.
    pub fn lookup(&self, language: Language, phrase: &str) -> Option<&str> {
        self.maps
            .get(&language)
            .and_then(|map| map.get(phrase))
            .map(String::as_str)
    }

    /// The phrase map that produces `language`.
    pub fn phrase_map(&self, language: Language) -> Option<&PhraseMap> {
        self.maps.get(&language)
    }

    /// Number of entries in the map for `language`.
    pub fn len(&self, language: Language) -> usize {
        self.maps.get(&language).map_or(0, HashMap::len)
    }

    pub fn is_empty(&self) -> bool {
        self.maps.values().all(HashMap::is_empty)
    }
}

/// The hostel phrases as typed pairs.
pub fn builtin_pairs() -> impl Iterator<Item = PhrasePair> {
    HOSTEL_PHRASES
        .iter()
        .map(|(source, target)| PhrasePair::new(PHRASE_SOURCE, *source, PHRASE_TARGET, *target))
}
