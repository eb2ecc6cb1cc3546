use crate::document::Document;
use crate::i18n::Language;

/// Overwrite the first `<title>` and the first description meta with
/// `language`'s strings.
///
/// Not table-driven: the values come straight from the registry. Missing
/// elements are skipped.
pub fn update_meta_tags<D: Document>(doc: &mut D, language: Language) {
    let strings = language.config().strings;

    if let Some(&title) = doc.select(|d, id| d.is_tag(id, "title")).first() {
        doc.set_text_content(title, strings.title);
    }

    let description = doc
        .select(|d, id| d.is_tag(id, "meta") && d.attribute(id, "name") == Some("description"))
        .first()
        .copied();
    if let Some(meta) = description {
        doc.set_attribute(meta, "content", strings.description);
    }
}
