//! Rewrite pass metrics.
//!
//! Each rewrite pass counts what it did with every candidate element so the
//! caller can log how much of the page the phrase table actually covers.

use serde::Serialize;

/// Counters for a single rewrite pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RewriteReport {
    /// Candidate elements visited
    pub candidates: usize,

    /// Candidates skipped (inside script/style/flag, empty, or numeric)
    pub skipped: usize,

    /// Elements whose text was replaced
    pub rewritten: usize,

    /// Elements with text but no entry in the phrase map
    pub untranslated: usize,

    /// Messaging links whose destination changed
    pub links_rewritten: usize,
}

impl RewriteReport {
    pub fn record_skipped(&mut self) {
        self.skipped += 1;
    }

    pub fn record_rewritten(&mut self) {
        self.rewritten += 1;
    }

    pub fn record_untranslated(&mut self) {
        self.untranslated += 1;
    }

    pub fn record_link(&mut self) {
        self.links_rewritten += 1;
    }

    /// Percentage of text-bearing candidates that had a translation.
    pub fn coverage(&self) -> f64 {
        let with_text = self.rewritten + self.untranslated;
        if with_text > 0 {
            (self.rewritten as f64 / with_text as f64) * 100.0
        } else {
            0.0
        }
    }
}
