//! Content rewriter: one in-place pass over the visible text of a page.
//!
//! The pass is keyed by whatever text is displayed right now, not by a stable
//! id, so it relies on the translation table being an exact mirror in both
//! directions.
//!
//! A candidate that contains another translatable candidate (a `li` wrapping
//! a nav `a`) is left to that inner candidate; overwriting the outer element
//! would delete it. Otherwise the translation is written into the single
//! element holding the text, so icons and inline wrappers survive. Text spread
//! over several elements is replaced as a whole.

use crate::document::{Document, NodeId};
use crate::i18n::{Language, PhraseAuditor, RewriteReport, TranslationTable};
use crate::whatsapp::MessagingLinkRewriter;
use tracing::debug;

const TEXT_TAGS: &[&str] = &["h1", "h2", "h3", "h4", "p", "span", "a", "li"];
const FLAG_CLASS: &str = "flag";

/// Rewrite every translatable element of `doc` into `language`.
///
/// Missing translations are not errors; the element is left as it is.
pub fn rewrite_visible_text<D: Document>(
    doc: &mut D,
    table: &TranslationTable,
    links: &MessagingLinkRewriter,
    language: Language,
) -> RewriteReport {
    let mut pass = RewritePass {
        table,
        links,
        language,
        report: RewriteReport::default(),
    };
    let candidates = doc.select(|d, id| is_candidate(d, id));

    for node in candidates {
        pass.report.candidates += 1;

        if is_in_excluded_context(doc, node) {
            pass.report.record_skipped();
            continue;
        }

        let Some(text) = doc.text_content(node) else {
            pass.report.record_skipped();
            continue;
        };
        let current = text.trim();
        if current.is_empty() || PhraseAuditor::is_numeric_only(current) {
            pass.report.record_skipped();
            continue;
        }

        let container = has_translatable_descendant(doc, node);

        if let Some(href) = messaging_href(doc, node, links) {
            // The label of a container link is translated through its inner candidate
            if !container {
                pass.translate(doc, node, current);
            }
            pass.rewrite_href(doc, node, &href);
            continue;
        }

        if container {
            pass.report.record_skipped();
            continue;
        }

        pass.translate(doc, node, current);
    }

    let report = pass.report;
    debug!(
        "Rewrite pass to {}: {} candidates, {} rewritten, {} untranslated, {} skipped, {} links",
        language,
        report.candidates,
        report.rewritten,
        report.untranslated,
        report.skipped,
        report.links_rewritten
    );

    report
}

struct RewritePass<'a> {
    table: &'a TranslationTable,
    links: &'a MessagingLinkRewriter,
    language: Language,
    report: RewriteReport,
}

impl RewritePass<'_> {
    fn translate<D: Document>(&mut self, doc: &mut D, node: NodeId, current: &str) {
        let Some(translated) = self.table.lookup(self.language, current) else {
            self.report.record_untranslated();
            return;
        };

        match text_holders(doc, node).as_slice() {
            [holder] => doc.replace_text(*holder, translated),
            _ => doc.set_text_content(node, translated),
        }
        self.report.record_rewritten();
    }

    fn rewrite_href<D: Document>(&mut self, doc: &mut D, node: NodeId, href: &str) {
        let rewritten = self.links.rewrite_href(href, self.language);
        if rewritten != href {
            doc.set_attribute(node, "href", &rewritten);
            self.report.record_link();
        }
    }
}

/// Tag-level selection: `h1-h4, p, span:not(.flag), a:not([href*=tel:]):not([href*=mailto:]), li`.
fn is_candidate<D: Document>(doc: &D, node: NodeId) -> bool {
    if !TEXT_TAGS.iter().any(|tag| doc.is_tag(node, tag)) {
        return false;
    }
    if doc.is_tag(node, "span") && doc.has_class(node, FLAG_CLASS) {
        return false;
    }
    if doc.is_tag(node, "a") {
        if let Some(href) = doc.attribute(node, "href") {
            if href.contains("tel:") || href.contains("mailto:") {
                return false;
            }
        }
    }
    true
}

fn is_in_excluded_context<D: Document>(doc: &D, node: NodeId) -> bool {
    doc.closest(node, |d, id| {
        d.is_tag(id, "script") || d.is_tag(id, "style") || d.has_class(id, FLAG_CLASS)
    })
    .is_some()
}

fn messaging_href<D: Document>(
    doc: &D,
    node: NodeId,
    links: &MessagingLinkRewriter,
) -> Option<String> {
    if !doc.is_tag(node, "a") {
        return None;
    }
    doc.attribute(node, "href")
        .filter(|href| links.is_messaging_link(href))
        .map(str::to_string)
}

fn descendants<D: Document>(doc: &D, node: NodeId) -> Vec<NodeId> {
    let mut found = Vec::new();
    let mut stack = doc.children(node);
    stack.reverse();

    while let Some(id) = stack.pop() {
        found.push(id);
        stack.extend(doc.children(id).into_iter().rev());
    }
    found
}

fn has_translatable_descendant<D: Document>(doc: &D, node: NodeId) -> bool {
    descendants(doc, node)
        .into_iter()
        .any(|id| is_candidate(doc, id) && !is_in_excluded_context(doc, id))
}

/// `node` and its descendants that hold non-blank text of their own.
fn text_holders<D: Document>(doc: &D, node: NodeId) -> Vec<NodeId> {
    std::iter::once(node)
        .chain(descendants(doc, node))
        .filter(|&id| doc.own_text(id).is_some_and(|text| !text.trim().is_empty()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{MemoryDocument, PageNode};

    fn body(children: Vec<PageNode>) -> MemoryDocument {
        let body = children
            .into_iter()
            .fold(PageNode::new("body"), |body, child| body.with_child(child));
        MemoryDocument::from_tree(PageNode::new("html").with_child(body))
    }

    fn text_of(doc: &MemoryDocument, tag: &str) -> String {
        let node = doc.select(|d, id| d.is_tag(id, tag))[0];
        doc.text_content(node).unwrap()
    }

    fn rewrite(doc: &mut MemoryDocument, language: Language) -> RewriteReport {
        let table = TranslationTable::builtin().unwrap();
        rewrite_visible_text(doc, &table, &MessagingLinkRewriter::default(), language)
    }

    // ==================== Selection Tests ====================

    #[test]
    fn test_translates_every_text_tag() {
        let mut doc = body(vec![
            PageNode::new("h1").with_text("Nuestras Habitaciones"),
            PageNode::new("h2").with_text("Galería de Fotos"),
            PageNode::new("h3").with_text("Habitación Doble"),
            PageNode::new("h4").with_text("Enlaces Rápidos"),
            PageNode::new("p").with_text("Desayuno incluido"),
            PageNode::new("span").with_text("Terraza"),
            PageNode::new("a").with_attribute("href", "#rooms").with_text("Habitaciones"),
            PageNode::new("li").with_text("Mercados de artesanías"),
        ]);

        let report = rewrite(&mut doc, Language::ENGLISH);

        assert_eq!(report.rewritten, 8);
        assert_eq!(text_of(&doc, "h1"), "Our Rooms");
        assert_eq!(text_of(&doc, "a"), "Rooms");
        assert_eq!(text_of(&doc, "li"), "Craft markets");
    }

    #[test]
    fn test_other_tags_are_not_candidates() {
        let mut doc = body(vec![
            PageNode::new("div").with_text("Terraza"),
            PageNode::new("button").with_text("Terraza"),
            PageNode::new("h5").with_text("Terraza"),
        ]);

        let report = rewrite(&mut doc, Language::ENGLISH);

        assert_eq!(report.candidates, 0);
        assert_eq!(text_of(&doc, "div"), "Terraza");
    }

    #[test]
    fn test_flag_span_is_excluded() {
        let mut doc = body(vec![PageNode::new("span").with_class("flag").with_text("Terraza")]);
        let report = rewrite(&mut doc, Language::ENGLISH);

        assert_eq!(report.candidates, 0);
        assert_eq!(text_of(&doc, "span"), "Terraza");
    }

    #[test]
    fn test_tel_and_mailto_links_are_excluded() {
        let mut doc = body(vec![
            PageNode::new("a").with_attribute("href", "tel:+59173064877").with_text("Llamar"),
            PageNode::new("a")
                .with_attribute("href", "mailto:info@solylago.bo")
                .with_text("Email"),
        ]);

        let report = rewrite(&mut doc, Language::ENGLISH);

        assert_eq!(report.candidates, 0);
        assert_eq!(text_of(&doc, "a"), "Llamar");
    }

    #[test]
    fn test_script_style_and_flag_context_excluded() {
        let mut doc = body(vec![
            PageNode::new("script").with_child(PageNode::new("span").with_text("Terraza")),
            PageNode::new("style").with_child(PageNode::new("p").with_text("Terraza")),
            PageNode::new("div")
                .with_class("flag")
                .with_child(PageNode::new("li").with_text("Terraza")),
        ]);

        let report = rewrite(&mut doc, Language::ENGLISH);

        assert_eq!(report.candidates, 3);
        assert_eq!(report.skipped, 3);
        assert_eq!(report.rewritten, 0);
    }

    // ==================== Text Filter Tests ====================

    #[test]
    fn test_numeric_text_is_never_rewritten() {
        let mut doc = body(vec![
            PageNode::new("span").with_text(" +591 73064877 "),
            PageNode::new("p").with_text("(591) 2-862"),
        ]);

        let report = rewrite(&mut doc, Language::ENGLISH);

        assert_eq!(report.skipped, 2);
        assert_eq!(text_of(&doc, "span"), " +591 73064877 ");
    }

    #[test]
    fn test_short_mixed_text_passes_through() {
        let mut doc = body(vec![PageNode::new("span").with_text("24h")]);
        let report = rewrite(&mut doc, Language::ENGLISH);

        assert_eq!(report.untranslated, 1);
        assert_eq!(text_of(&doc, "span"), "24h");
    }

    #[test]
    fn test_empty_text_is_skipped() {
        let mut doc = body(vec![PageNode::new("p").with_text("   \n  ")]);
        let report = rewrite(&mut doc, Language::ENGLISH);
        assert_eq!(report.skipped, 1);
    }

    #[test]
    fn test_unknown_phrase_passthrough() {
        let mut doc = body(vec![PageNode::new("p").with_text("XYZ123")]);
        let report = rewrite(&mut doc, Language::ENGLISH);

        assert_eq!(report.untranslated, 1);
        assert_eq!(text_of(&doc, "p"), "XYZ123");
    }

    #[test]
    fn test_lookup_uses_trimmed_text_and_replaces_verbatim() {
        let mut doc = body(vec![PageNode::new("h2").with_text("\n    Contáctanos\n  ")]);
        rewrite(&mut doc, Language::ENGLISH);
        assert_eq!(text_of(&doc, "h2"), "Contact Us");
    }

    #[test]
    fn test_icon_child_is_kept() {
        let mut doc = body(vec![PageNode::new("li")
            .with_child(PageNode::new("i").with_class("fas"))
            .with_text(" Baño privado")]);

        rewrite(&mut doc, Language::ENGLISH);

        // Surrounding whitespace is not preserved
        assert_eq!(text_of(&doc, "li"), "Private bathroom");
        assert_eq!(doc.select(|d, id| d.is_tag(id, "i")).len(), 1);
    }

    #[test]
    fn test_container_is_skipped_and_child_translated() {
        let mut doc = body(vec![PageNode::new("li").with_child(
            PageNode::new("a")
                .with_attribute("href", "#rooms")
                .with_text("Habitaciones"),
        )]);

        let report = rewrite(&mut doc, Language::ENGLISH);

        assert_eq!(text_of(&doc, "li"), "Rooms");
        assert_eq!(doc.select(|d, id| d.is_tag(id, "a")).len(), 1);
        assert_eq!(report.candidates, 2);
        assert_eq!(report.skipped, 1);
        assert_eq!(report.rewritten, 1);
    }

    #[test]
    fn test_text_inside_inline_wrapper_is_translated() {
        let mut doc = body(vec![PageNode::new("p").with_child(
            PageNode::new("strong").with_text("Dirección"),
        )]);

        let report = rewrite(&mut doc, Language::ENGLISH);

        assert_eq!(text_of(&doc, "p"), "Address");
        assert_eq!(text_of(&doc, "strong"), "Address");
        assert_eq!(report.rewritten, 1);
        assert_eq!(report.skipped, 0);
    }

    #[test]
    fn test_inline_wrapper_round_trip_keeps_markup() {
        let mut doc = body(vec![PageNode::new("p").with_child(
            PageNode::new("em").with_text("Dirección"),
        )]);
        let before = doc.to_tree();

        rewrite(&mut doc, Language::ENGLISH);
        rewrite(&mut doc, Language::SPANISH);

        assert_eq!(doc.to_tree(), before);
    }

    #[test]
    fn test_flag_child_does_not_make_a_container() {
        let mut doc = body(vec![PageNode::new("li")
            .with_child(PageNode::new("span").with_class("flag").with_text(""))
            .with_text("Terraza")]);

        let report = rewrite(&mut doc, Language::ENGLISH);

        assert_eq!(text_of(&doc, "li"), "Terrace");
        assert_eq!(report.rewritten, 1);
    }

    #[test]
    fn test_phrase_split_across_markup_is_replaced_whole() {
        let mut doc = body(vec![PageNode::new("p")
            .with_text("Desayuno ")
            .with_child(PageNode::new("b").with_text("incluido"))]);

        let report = rewrite(&mut doc, Language::ENGLISH);

        assert_eq!(text_of(&doc, "p"), "Breakfast included");
        assert!(doc.select(|d, id| d.is_tag(id, "b")).is_empty());
        assert_eq!(report.rewritten, 1);
    }

    // ==================== Messaging Link Tests ====================

    #[test]
    fn test_messaging_link_label_and_href() {
        let mut doc = body(vec![PageNode::new("a")
            .with_attribute(
                "href",
                "https://api.whatsapp.com/send?phone=59173064877&text=Hola%2C%20me%20interesa%20informaci%C3%B3n",
            )
            .with_text("Reservar por WhatsApp")]);

        let report = rewrite(&mut doc, Language::ENGLISH);

        let link = doc.select(|d, id| d.is_tag(id, "a"))[0];
        assert_eq!(doc.text_content(link).unwrap(), "Book via WhatsApp");
        assert_eq!(
            doc.attribute(link, "href"),
            Some("https://api.whatsapp.com/send?phone=59173064877&text=Hello%2C%20I%20am%20interested%20in%20informaci%C3%B3n")
        );
        assert_eq!(report.rewritten, 1);
        assert_eq!(report.links_rewritten, 1);
    }

    #[test]
    fn test_messaging_link_with_unknown_label_still_rewrites_href() {
        let mut doc = body(vec![PageNode::new("a")
            .with_attribute("href", "https://api.whatsapp.com/send?text=hacer%20una%20reserva")
            .with_text("WhatsApp")]);

        let report = rewrite(&mut doc, Language::ENGLISH);

        let link = doc.select(|d, id| d.is_tag(id, "a"))[0];
        assert_eq!(doc.text_content(link).unwrap(), "WhatsApp");
        assert!(doc.attribute(link, "href").unwrap().ends_with("making%20a%20reservation"));
        assert_eq!(report.untranslated, 1);
        assert_eq!(report.links_rewritten, 1);
    }

    #[test]
    fn test_messaging_link_with_wrapped_label_rewrites_href() {
        let mut doc = body(vec![PageNode::new("a")
            .with_class("cta-button")
            .with_attribute("href", "https://api.whatsapp.com/send?text=Hola%2C%20me%20interesa")
            .with_child(PageNode::new("i").with_class("fab"))
            .with_child(PageNode::new("span").with_text("Reservar por WhatsApp"))]);
        let before = doc.to_tree();

        let report = rewrite(&mut doc, Language::ENGLISH);

        let link = doc.select(|d, id| d.is_tag(id, "a"))[0];
        assert_eq!(text_of(&doc, "span"), "Book via WhatsApp");
        assert_eq!(
            doc.attribute(link, "href"),
            Some("https://api.whatsapp.com/send?text=Hello%2C%20I%20am%20interested%20in")
        );
        assert_eq!(doc.children(link).len(), 2);
        assert_eq!(report.rewritten, 1);
        assert_eq!(report.links_rewritten, 1);

        rewrite(&mut doc, Language::SPANISH);
        assert_eq!(doc.to_tree(), before);
    }

    #[test]
    fn test_messaging_link_with_numeric_label_is_skipped() {
        let href = "https://api.whatsapp.com/send?text=Hola%2C%20me%20interesa";
        let mut doc = body(vec![PageNode::new("a")
            .with_attribute("href", href)
            .with_text("+591 73064877")]);

        rewrite(&mut doc, Language::ENGLISH);

        let link = doc.select(|d, id| d.is_tag(id, "a"))[0];
        assert_eq!(doc.attribute(link, "href"), Some(href));
    }

    // ==================== Round Trip Tests ====================

    #[test]
    fn test_round_trip_restores_text() {
        let original = vec![
            PageNode::new("h1").with_text("Tu hogar en el corazón de Copacabana"),
            PageNode::new("li").with_text("WiFi Gratuito"),
            PageNode::new("li").with_text("WiFi gratuito"),
            PageNode::new("p").with_text("Check-in: 14:00 hrs"),
        ];
        let mut doc = body(original);
        let before = doc.to_tree();

        rewrite(&mut doc, Language::ENGLISH);
        assert_ne!(doc.to_tree(), before);
        rewrite(&mut doc, Language::SPANISH);

        assert_eq!(doc.to_tree(), before);
    }

    #[test]
    fn test_empty_document() {
        let mut doc = MemoryDocument::empty();
        let report = rewrite(&mut doc, Language::ENGLISH);
        assert_eq!(report, RewriteReport::default());
    }
}
