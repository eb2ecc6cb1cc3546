//! I18n session: the active language and everything a switch touches.
//!
//! The session owns the translation table, the messaging-link rules and the
//! preference store. All operations take the document explicitly and run to
//! completion synchronously, so two switches can never interleave; the last
//! request wins for both the page and the stored preference.

use crate::document::{Document, NodeId};
use crate::i18n::{Language, RewriteReport, TranslationTable};
use crate::meta::update_meta_tags;
use crate::preference::{PreferenceStore, PREFERENCE_KEY};
use crate::rewriter::rewrite_visible_text;
use crate::whatsapp::MessagingLinkRewriter;
use tracing::{debug, info, warn};

/// Class shared by the language selector buttons.
pub const LANGUAGE_BUTTON_CLASS: &str = "lang-btn";

/// Attribute carrying a button's language code.
pub const LANGUAGE_BUTTON_ATTRIBUTE: &str = "data-lang";

const ACTIVE_CLASS: &str = "active";

/// Result of a switch request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SwitchOutcome {
    /// The page was rewritten into the requested language
    Switched(RewriteReport),

    /// The requested language is already active; nothing was touched
    AlreadyActive,

    /// The requested code is not a supported language; nothing was touched
    UnknownLanguage(String),
}

pub struct I18nSession<S: PreferenceStore> {
    table: TranslationTable,
    links: MessagingLinkRewriter,
    store: S,
    active: Language,
}

impl<S: PreferenceStore> I18nSession<S> {
    /// Create a session in the base language. Call [`initialize`](Self::initialize)
    /// once the page is loaded.
    pub fn new(table: TranslationTable, links: MessagingLinkRewriter, store: S) -> Self {
        Self {
            table,
            links,
            store,
            active: Language::base(),
        }
    }

    pub fn active_language(&self) -> Language {
        self.active
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Apply the stored preference (or the base language) to a freshly loaded page.
    ///
    /// Runs a full switch even when the stored language equals the default.
    pub fn initialize<D: Document>(&mut self, doc: &mut D) -> RewriteReport {
        let stored = self.store.get(PREFERENCE_KEY);
        let language = Language::from_preference(stored.as_deref());
        info!(
            "Initializing page language: {} (stored preference: {:?})",
            language, stored
        );
        self.switch_language(doc, language)
    }

    /// Handle an explicit switch request carrying a language code.
    ///
    /// Unknown codes and the already active language are ignored.
    pub fn request_switch<D: Document>(&mut self, doc: &mut D, code: &str) -> SwitchOutcome {
        let language = match Language::from_code(code) {
            Ok(language) => language,
            Err(e) => {
                debug!("Ignoring switch request: {}", e);
                return SwitchOutcome::UnknownLanguage(code.to_string());
            }
        };

        if language == self.active {
            debug!("Language {} already active, skipping rewrite", language);
            return SwitchOutcome::AlreadyActive;
        }

        SwitchOutcome::Switched(self.switch_language(doc, language))
    }

    /// Click on a language button: read its `data-lang` and request the switch.
    pub fn handle_language_button<D: Document>(
        &mut self,
        doc: &mut D,
        button: NodeId,
    ) -> SwitchOutcome {
        let code = doc
            .attribute(button, LANGUAGE_BUTTON_ATTRIBUTE)
            .unwrap_or_default()
            .to_string();
        self.request_switch(doc, &code)
    }

    /// Unconditionally switch to `language`: button state, `<html lang>`,
    /// rewrite pass, meta tags, stored preference.
    ///
    /// A failed preference write is logged; the page is switched regardless.
    pub fn switch_language<D: Document>(&mut self, doc: &mut D, language: Language) -> RewriteReport {
        let previous = self.active;
        self.active = language;

        update_language_buttons(doc, language);
        if let Some(root) = doc.root() {
            doc.set_attribute(root, "lang", language.code());
        }

        let report = rewrite_visible_text(doc, &self.table, &self.links, language);
        update_meta_tags(doc, language);

        if let Err(e) = self.store.set(PREFERENCE_KEY, language.code()) {
            warn!("Failed to persist language preference '{}': {:#}", language, e);
        }

        info!(
            "Switched language {} -> {} ({}): {} phrases rewritten, {:.1}% coverage",
            previous,
            language,
            language.name(),
            report.rewritten,
            report.coverage()
        );

        report
    }
}

fn update_language_buttons<D: Document>(doc: &mut D, language: Language) {
    for button in doc.select(|d, id| d.has_class(id, LANGUAGE_BUTTON_CLASS)) {
        doc.remove_class(button, ACTIVE_CLASS);
        if doc.attribute(button, LANGUAGE_BUTTON_ATTRIBUTE) == Some(language.code()) {
            doc.add_class(button, ACTIVE_CLASS);
        }
    }
}
