//! Apply the language system to a page snapshot.
//!
//! Usage:
//!   sol-y-lago-i18n <page.json>          # Initialize from the stored preference
//!   sol-y-lago-i18n <page.json> en       # ...then switch to English
//!
//! The resulting page snapshot is printed to stdout.
//!
//! Optional environment variables:
//! - PREFERENCE_FILE (defaults to data/preferences.json)
//! - INIT_DELAY_MS (defaults to 100)
//! - MESSAGING_LINK_MARKER (defaults to whatsapp)

use anyhow::{Context, Result};
use sol_y_lago_i18n::config::Config;
use sol_y_lago_i18n::document::MemoryDocument;
use sol_y_lago_i18n::i18n::TranslationTable;
use sol_y_lago_i18n::preference::FileStore;
use sol_y_lago_i18n::session::{I18nSession, SwitchOutcome};
use sol_y_lago_i18n::whatsapp::MessagingLinkRewriter;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    // Logs go to stderr so stdout stays a clean snapshot
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("sol_y_lago_i18n=info".parse()?),
        )
        .init();

    let config = Config::from_env()?;

    let mut args = std::env::args().skip(1);
    let page_path = args
        .next()
        .context("Usage: sol-y-lago-i18n <page.json> [language]")?;
    let requested = args.next();

    let json = std::fs::read_to_string(&page_path)
        .with_context(|| format!("Failed to read page snapshot {}", page_path))?;
    let mut doc = MemoryDocument::from_json(&json)?;

    // The page wires up its language system shortly after load
    tokio::time::sleep(config.init_delay).await;

    let table = TranslationTable::builtin().context("Built-in phrase table is inconsistent")?;
    let store = FileStore::open_or_default(&config.preference_file);
    let mut session = I18nSession::new(
        table,
        MessagingLinkRewriter::new(config.messaging_link_marker.clone()),
        store,
    );

    session.initialize(&mut doc);
    info!(
        "Language preference kept in {}",
        session.store().path().display()
    );

    if let Some(code) = requested {
        match session.request_switch(&mut doc, &code) {
            SwitchOutcome::Switched(report) => {
                info!("Switch report: {}", serde_json::to_string(&report)?)
            }
            SwitchOutcome::AlreadyActive => info!("Language '{}' is already active", code),
            SwitchOutcome::UnknownLanguage(code) => info!("Unsupported language '{}'", code),
        }
    }

    println!("{}", doc.to_json_pretty()?);
    Ok(())
}
