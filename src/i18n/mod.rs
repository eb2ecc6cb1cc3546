//! Internationalization (i18n) module for the bilingual page.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for the supported languages and their page strings
//! - `language`: Type-safe `Language` validated against the registry
//! - `strings`: Hardcoded title/description per language
//! - `phrases`: Authored `(english, spanish)` phrase pairs for the page
//! - `table`: `TranslationTable` deriving both lookup directions from the pairs
//! - `validator`: Phrase set audit (collisions, unreachable phrases)
//! - `metrics`: Per-pass rewrite counters
//!
//! # Example
//!
//! ```rust,ignore
//! use sol_y_lago_i18n::i18n::{Language, TranslationTable};
//!
//! let table = TranslationTable::builtin()?;
//! assert_eq!(table.lookup(Language::ENGLISH, "Habitaciones"), Some("Rooms"));
//! ```

mod language;
mod metrics;
pub mod phrases;
mod registry;
mod strings;
mod table;
mod validator;

pub use language::Language;
pub use metrics::RewriteReport;
pub use registry::{LanguageConfig, LanguageRegistry};
pub use strings::PageStrings;
pub use table::{builtin_pairs, PhraseMap, PhrasePair, TableError, TranslationTable};
pub use validator::{PhraseAuditor, ValidationReport};
