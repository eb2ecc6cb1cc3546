//! Hostel phrase pairs.
//!
//! Each entry is `(english, spanish)` exactly as it is rendered on the page,
//! punctuation included. Both lookup directions are derived from this list,
//! so a phrase must never appear on the same side twice with different
//! partners.

use crate::i18n::Language;

/// Language of the first element of every pair in [`HOSTEL_PHRASES`].
pub const PHRASE_SOURCE: Language = Language::ENGLISH;

/// Language of the second element of every pair in [`HOSTEL_PHRASES`].
pub const PHRASE_TARGET: Language = Language::SPANISH;

/// All translatable phrases on the page.
pub const HOSTEL_PHRASES: &[(&str, &str)] = &[
    // Navigation
    ("Home", "Home"),
    ("Rooms", "Habitaciones"),
    ("Services", "Servicios"),
    ("Gallery", "Galería"),
    ("Contact", "Contacto"),

    // Hero Section
    ("Your home in the heart of Copacabana", "Tu hogar en el corazón de Copacabana"),
    (
        "Enjoy spectacular views of Lake Titicaca",
        "Disfruta de vistas espectaculares del Lago Titicaca",
    ),
    ("Book via WhatsApp", "Reservar por WhatsApp"),

    // About Section
    ("Welcome to Sol y Lago", "Bienvenidos a Sol y Lago"),
    (
        "Located in the picturesque city of Copacabana, Bolivia, our hostel offers a unique experience with stunning views of the majestic Lake Titicaca. Enjoy the tranquility and natural beauty while exploring one of the most mystical destinations in South America.",
        "Ubicado en la pintoresca ciudad de Copacabana, Bolivia, nuestro hostal ofrece una experiencia única con vistas impresionantes del majestuoso Lago Titicaca. Disfruta de la tranquilidad y belleza natural mientras exploras uno de los destinos más místicos de América del Sur.",
    ),
    ("Panoramic Views", "Vistas Panorámicas"),
    (
        "Wake up every morning to spectacular views of Lake Titicaca",
        "Despierta cada mañana con vistas espectaculares del Lago Titicaca",
    ),
    ("Privileged Location", "Ubicación Privilegiada"),
    (
        "Steps away from downtown Copacabana and its main attractions",
        "A pasos del centro de Copacabana y sus principales atractivos",
    ),
    ("Family Atmosphere", "Ambiente Familiar"),
    (
        "Personalized attention in a warm and welcoming environment",
        "Atención personalizada en un ambiente cálido y acogedor",
    ),

    // Rooms Section
    ("Our Rooms", "Nuestras Habitaciones"),
    ("Single Room", "Habitación Individual"),
    (
        "Perfect for solo travelers seeking comfort and tranquility.",
        "Perfecta para viajeros solos que buscan comodidad y tranquilidad.",
    ),
    ("Comfortable single bed", "Cama individual cómoda"),
    ("Private bathroom", "Baño privado"),
    ("Lake view", "Vista al lago"),
    ("Double Room", "Habitación Doble"),
    (
        "Ideal for couples or friends traveling together.",
        "Ideal para parejas o amigos que viajan juntos.",
    ),
    ("Queen bed", "Cama matrimonial"),
    ("Terrace with view", "Terraza con vista"),
    ("Triple Room", "Habitación Triple"),
    (
        "Spacious room for small groups or families seeking comfort.",
        "Espaciosa habitación para grupos pequeños o familias que buscan confort.",
    ),
    ("Three single beds", "Tres camas individuales"),
    ("Large private bathroom", "Baño privado amplio"),
    ("Seating area", "Área de estar"),

    // Amenities Section
    ("Services & Amenities", "Servicios y Comodidades"),
    ("Free WiFi", "WiFi Gratuito"),
    ("High-speed internet in all areas", "Internet de alta velocidad en todas las áreas"),
    ("Breakfast", "Desayuno"),
    ("Continental breakfast included", "Desayuno continental incluido"),
    ("Parking", "Estacionamiento"),
    ("Free parking available", "Estacionamiento gratuito disponible"),
    ("24h Reception", "Recepción 24h"),
    ("Personalized attention 24 hours a day", "Atención personalizada las 24 horas"),
    ("Luggage Storage", "Guarda Equipaje"),
    ("Luggage storage service", "Servicio de custodia de equipaje"),
    ("Tourist Information", "Información Turística"),
    ("Advice on tours and activities", "Asesoramiento sobre tours y actividades"),
    ("Hot Water", "Agua Caliente"),
    ("Hot water available 24 hours", "Agua caliente disponible las 24 horas"),
    ("Lake View", "Vista al Lago"),
    ("Rooms with panoramic views of Titicaca", "Habitaciones con vista panorámica al Titicaca"),

    // Gallery Section
    ("Photo Gallery", "Galería de Fotos"),
    (
        "Discover the beauty of our hostel and surroundings",
        "Descubre la belleza de nuestro hostal y sus alrededores",
    ),
    ("Exterior View", "Vista Exterior"),
    ("Common Area", "Área Común"),
    ("Terrace", "Terraza"),
    ("Reception", "Recepción"),
    ("Hallways", "Pasillos"),

    // Restaurant Section
    ("Sol y Lago Restaurant", "Restaurante Sol y Lago"),
    (
        "Enjoy delicious Bolivian and international cuisine in our cozy restaurant with panoramic views of Lake Titicaca.",
        "Disfruta de deliciosos platos de la gastronomía boliviana e internacional en nuestro acogedor restaurante con vista panorámica al Lago Titicaca.",
    ),
    ("Bolivian & International Cuisine", "Cocina Boliviana e Internacional"),
    ("Lake Trout Specialty", "Especialidad en Trucha del Lago"),
    ("Homemade Breakfasts", "Desayunos Caseros"),
    ("Panoramic View", "Vista Panorámica"),
    ("Service Hours", "Horarios de Atención"),
    ("Breakfast: 7:00 - 10:00", "Desayuno: 7:00 - 10:00"),
    ("Lunch: 12:00 - 15:00", "Almuerzo: 12:00 - 15:00"),
    ("Dinner: 18:00 - 21:00", "Cena: 18:00 - 21:00"),

    // Testimonials Section
    ("What Our Guests Say", "Lo que Dicen Nuestros Huéspedes"),

    // Location Section
    ("Our Location", "Nuestra Ubicación"),
    ("In the Heart of Copacabana", "En el Corazón de Copacabana"),
    (
        "Hostal Sol y Lago is strategically located in Copacabana, Bolivia, offering easy access to:",
        "Hostal Sol y Lago se encuentra estratégicamente ubicado en Copacabana, Bolivia, ofreciendo fácil acceso a:",
    ),
    ("Basilica of Copacabana (5 min walk)", "Basílica de Copacabana (5 min caminando)"),
    ("Lake Titicaca Port (3 min walk)", "Puerto del Lago Titicaca (3 min caminando)"),
    ("Calvario Hill (10 min walk)", "Cerro Calvario (10 min caminando)"),
    ("Local restaurants and cafes", "Restaurantes y cafés locales"),
    ("Craft markets", "Mercados de artesanías"),

    // Contact Section
    ("Contact Us", "Contáctanos"),
    ("Address", "Dirección"),
    ("Email", "Email"),
    ("Reception Hours", "Horario de Recepción"),
    ("24 hours, every day", "24 horas, todos los días"),
    ("Contact Methods", "Formas de Contacto"),
    ("Immediate response", "Respuesta inmediata"),
    ("Detailed inquiries", "Consultas detalladas"),
    ("Call", "Llamar"),
    ("Direct attention", "Atención directa"),
    ("Quick Information", "Información Rápida"),
    ("Check-in: 2:00 PM", "Check-in: 14:00 hrs"),
    ("Check-out: 11:00 AM", "Check-out: 11:00 hrs"),
    // "Free WiFi" already belongs to the amenities card
    ("Free Wi-Fi", "WiFi gratuito"),
    ("Breakfast included", "Desayuno incluido"),
    ("Follow Us", "Síguenos"),

    // Footer
    (
        "Your home in Copacabana, Bolivia. Enjoy the magic of Lake Titicaca in a warm and welcoming environment.",
        "Tu hogar en Copacabana, Bolivia. Disfruta de la magia del Lago Titicaca en un ambiente cálido y acogedor.",
    ),
    ("Quick Links", "Enlaces Rápidos"),
    ("Information", "Información"),
    ("All rights reserved.", "Todos los derechos reservados."),
];
