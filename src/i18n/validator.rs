//! Phrase table audit.
//!
//! `TranslationTable::from_pairs` stops at the first collision; the auditor
//! instead walks every pair and reports all problems at once, together with
//! softer warnings about phrases the rewriter can never match.

use crate::i18n::{Language, PhrasePair};
use regex::Regex;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Validation report containing errors and warnings about a phrase set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    /// Problems that make a round trip non-idempotent
    pub errors: Vec<String>,

    /// Phrases that are valid but suspicious or unreachable
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Auditor for authored phrase pairs.
pub struct PhraseAuditor;

static NUMBER_REGEX: OnceLock<Regex> = OnceLock::new();
static NUMERIC_ONLY_REGEX: OnceLock<Regex> = OnceLock::new();

impl PhraseAuditor {
    /// Audit a phrase set.
    ///
    /// Errors:
    /// - the same phrase translating to two different phrases (either direction)
    /// - a pair whose two sides are the same language
    ///
    /// Warnings:
    /// - leading/trailing whitespace (lookups are done on trimmed text)
    /// - phrases made only of digits and phone punctuation (always skipped)
    /// - numbers or times that differ between the two sides
    pub fn audit(pairs: &[PhrasePair]) -> ValidationReport {
        let mut report = ValidationReport::new();
        let mut seen: HashMap<(Language, &str), &str> = HashMap::new();

        for pair in pairs {
            if pair.source == pair.target {
                report.errors.push(format!(
                    "Pair '{}' maps {} onto itself",
                    pair.source_text, pair.source
                ));
                continue;
            }

            let directions = [
                (pair.target, pair.source_text.as_str(), pair.target_text.as_str()),
                (pair.source, pair.target_text.as_str(), pair.source_text.as_str()),
            ];
            for (language, key, value) in directions {
                match seen.get(&(language, key)) {
                    Some(existing) if *existing != value => report.errors.push(format!(
                        "Collision in {}: '{}' translates to both '{}' and '{}'",
                        language, key, existing, value
                    )),
                    Some(_) => {}
                    None => {
                        seen.insert((language, key), value);
                    }
                }
            }

            for text in [&pair.source_text, &pair.target_text] {
                if text.trim() != text {
                    report
                        .warnings
                        .push(format!("Phrase '{}' has surrounding whitespace", text));
                }
                if Self::is_numeric_only(text) {
                    report
                        .warnings
                        .push(format!("Phrase '{}' is numeric and is never rewritten", text));
                }
            }

            let source_numbers = Self::extract_numbers(&pair.source_text);
            let target_numbers = Self::extract_numbers(&pair.target_text);
            if source_numbers != target_numbers {
                report.warnings.push(format!(
                    "Number mismatch: '{}' has {:?}, '{}' has {:?}",
                    pair.source_text, source_numbers, pair.target_text, target_numbers
                ));
            }
        }

        report
    }

    /// Whether the rewriter treats `text` as a phone number or count.
    pub fn is_numeric_only(text: &str) -> bool {
        let regex = NUMERIC_ONLY_REGEX.get_or_init(|| Regex::new(r"^[\d\s\-+()]+$").unwrap());
        regex.is_match(text)
    }

    /// Extract numbers and clock times (e.g. "7:00") in order.
    fn extract_numbers(text: &str) -> Vec<String> {
        let regex = NUMBER_REGEX.get_or_init(|| Regex::new(r"\d+(?::\d+)?").unwrap());

        regex
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}
