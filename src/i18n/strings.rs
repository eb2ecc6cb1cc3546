/// Page-level strings that are not driven by the phrase table.
///
/// These are written verbatim on every language switch: the document title
/// and the `<meta name="description">` content.
#[derive(Debug, Clone)]
pub struct PageStrings {
    /// Text of the `<title>` element
    pub title: &'static str,

    /// `content` attribute of `<meta name="description">`
    pub description: &'static str,
}

// ==================== Spanish Strings ====================

/// Spanish page strings (base language)
pub const SPANISH_STRINGS: PageStrings = PageStrings {
    title: "Hostal Sol y Lago - Copacabana, Bolivia | Vista al Lago Titicaca",
    description: "Hostal Sol y Lago en Copacabana, Bolivia. Habitaciones con vista al Lago \
Titicaca, desayuno incluido, WiFi gratuito. Reservas por WhatsApp +591 73064877",
};

// ==================== English Strings ====================

/// English page strings
pub const ENGLISH_STRINGS: PageStrings = PageStrings {
    title: "Hostal Sol y Lago - Copacabana, Bolivia | Lake Titicaca View",
    description: "Hostal Sol y Lago in Copacabana, Bolivia. Rooms with Lake Titicaca view, \
breakfast included, free WiFi. Reservations via WhatsApp +591 73064877",
};
