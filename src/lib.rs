//! Bilingual (Spanish/English) text swapping for the Hostal Sol y Lago page.
//!
//! A language switch rewrites every visible phrase of the page in place
//! through a [`document::Document`], swaps the prewritten WhatsApp messages,
//! updates the title/description and persists the choice.

pub mod config;
pub mod document;
pub mod i18n;
pub mod meta;
pub mod preference;
pub mod rewriter;
pub mod session;
pub mod whatsapp;
