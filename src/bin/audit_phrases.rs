//! Audit the built-in phrase table.
//!
//! Usage:
//!   cargo run --bin audit
//!
//! Prints the validation report as JSON and exits with status 1 when a phrase
//! collision would break round-trip switching.

use anyhow::Result;
use sol_y_lago_i18n::i18n::{builtin_pairs, PhraseAuditor};
use tracing::{info, warn};

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("audit=info".parse()?),
        )
        .init();

    let pairs: Vec<_> = builtin_pairs().collect();
    info!("Auditing {} phrase pairs", pairs.len());

    let report = PhraseAuditor::audit(&pairs);
    println!("{}", serde_json::to_string_pretty(&report)?);

    if report.has_errors() {
        warn!("{} phrase errors found", report.errors.len());
        std::process::exit(1);
    }

    info!(
        "Phrase table is consistent ({} warnings)",
        report.warnings.len()
    );
    Ok(())
}
