//! WhatsApp deep-link rewriting.
//!
//! Booking buttons link to `wa.me`/`api.whatsapp.com` with a prewritten,
//! percent-encoded message in the query. On a language switch only the known
//! message fragments are swapped; the rest of the URL is left byte-for-byte.

use crate::i18n::Language;

/// Marker that identifies a messaging link in an `href`.
pub const DEFAULT_LINK_MARKER: &str = "whatsapp";

/// `(english, spanish)` fragments exactly as they appear in the encoded query.
const MESSAGE_FRAGMENTS: &[(&str, &str)] = &[
    ("Hello%2C%20I%20am%20interested%20in", "Hola%2C%20me%20interesa"),
    ("information%20about", "información%20sobre"),
    ("booking%20a%20room", "reservar%20una%20habitación"),
    ("making%20a%20reservation", "hacer%20una%20reserva"),
];

/// Fragment substitution for messaging links.
#[derive(Debug, Clone)]
pub struct MessagingLinkRewriter {
    marker: String,
    fragments: Vec<(Language, &'static str, Language, &'static str)>,
}

impl MessagingLinkRewriter {
    pub fn new(marker: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
            fragments: MESSAGE_FRAGMENTS
                .iter()
                .map(|(en, es)| (Language::ENGLISH, *en, Language::SPANISH, *es))
                .collect(),
        }
    }

    /// Whether `href` points at the messaging service.
    pub fn is_messaging_link(&self, href: &str) -> bool {
        !self.marker.is_empty() && href.contains(&self.marker)
    }

    /// Swap every known fragment into `target`.
    ///
    /// Fragments already in `target` and unknown text are untouched, so the
    /// operation is idempotent and reversible.
    pub fn rewrite_href(&self, href: &str, target: Language) -> String {
        let mut rewritten = href.to_string();

        for &(a, a_text, b, b_text) in &self.fragments {
            let (from, to) = if target == a {
                (b_text, a_text)
            } else if target == b {
                (a_text, b_text)
            } else {
                continue;
            };
            if rewritten.contains(from) {
                rewritten = rewritten.replace(from, to);
            }
        }

        rewritten
    }
}

impl Default for MessagingLinkRewriter {
    fn default() -> Self {
        Self::new(DEFAULT_LINK_MARKER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPANISH_HREF: &str =
        "https://api.whatsapp.com/send?phone=59173064877&text=Hola%2C%20me%20interesa%20reservar%20una%20habitación";
    const ENGLISH_HREF: &str =
        "https://api.whatsapp.com/send?phone=59173064877&text=Hello%2C%20I%20am%20interested%20in%20booking%20a%20room";

    #[test]
    fn test_is_messaging_link() {
        let links = MessagingLinkRewriter::default();
        assert!(links.is_messaging_link(SPANISH_HREF));
        assert!(!links.is_messaging_link("https://wa.me/59173064877"));
        assert!(!links.is_messaging_link("tel:+59173064877"));
    }

    #[test]
    fn test_custom_marker() {
        let links = MessagingLinkRewriter::new("wa.me");
        assert!(links.is_messaging_link("https://wa.me/59173064877?text=Hola"));
    }

    #[test]
    fn test_empty_marker_matches_nothing() {
        let links = MessagingLinkRewriter::new("");
        assert!(!links.is_messaging_link(SPANISH_HREF));
    }

    #[test]
    fn test_rewrite_to_english() {
        let links = MessagingLinkRewriter::default();
        assert_eq!(links.rewrite_href(SPANISH_HREF, Language::ENGLISH), ENGLISH_HREF);
    }

    #[test]
    fn test_rewrite_back_to_spanish_restores_original() {
        let links = MessagingLinkRewriter::default();
        let english = links.rewrite_href(SPANISH_HREF, Language::ENGLISH);
        assert_eq!(links.rewrite_href(&english, Language::SPANISH), SPANISH_HREF);
    }

    #[test]
    fn test_rewrite_same_language_is_noop() {
        let links = MessagingLinkRewriter::default();
        assert_eq!(links.rewrite_href(SPANISH_HREF, Language::SPANISH), SPANISH_HREF);
    }

    #[test]
    fn test_rewrite_replaces_every_occurrence() {
        let links = MessagingLinkRewriter::default();
        let href = "https://api.whatsapp.com/send?text=hacer%20una%20reserva%20o%20hacer%20una%20reserva";
        assert_eq!(
            links.rewrite_href(href, Language::ENGLISH),
            "https://api.whatsapp.com/send?text=making%20a%20reservation%20o%20making%20a%20reservation"
        );
    }

    #[test]
    fn test_rewrite_leaves_other_parameters_alone() {
        let links = MessagingLinkRewriter::default();
        let href = "https://api.whatsapp.com/send?phone=591%2073064877&text=Hola%2C%20me%20interesa&utm=a%20b";
        let rewritten = links.rewrite_href(href, Language::ENGLISH);

        assert!(rewritten.starts_with("https://api.whatsapp.com/send?phone=591%2073064877&text="));
        assert!(rewritten.ends_with("&utm=a%20b"));
        assert!(!rewritten.contains("%2520"));
    }

    #[test]
    fn test_unknown_message_unchanged() {
        let links = MessagingLinkRewriter::default();
        let href = "https://api.whatsapp.com/send?text=Buenos%20d%C3%ADas";
        assert_eq!(links.rewrite_href(href, Language::ENGLISH), href);
    }
}
