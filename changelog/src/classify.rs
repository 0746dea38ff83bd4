//! Commit subject classification and report assembly.

use crate::noise::{is_low_value, is_noise};
use crate::normalize::normalize;
use crate::report::ChangelogReport;
use crate::rules::RuleTable;
use std::collections::HashSet;
use tracing::debug;

/// Outcome of classifying one commit subject
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    Matched { label: String, description: String },
    /// Recognized and deliberately dropped (merge, version bump, low-value).
    Suppressed,
    /// No rule matched; the line is left out of the report.
    Unmatched,
}

#[derive(Debug, Clone, Default)]
pub struct Classifier {
    table: RuleTable,
}

impl Classifier {
    #[must_use]
    pub const fn new(table: RuleTable) -> Self {
        Self { table }
    }

    #[must_use]
    pub const fn table(&self) -> &RuleTable {
        &self.table
    }

    #[must_use]
    pub fn classify(&self, raw: &str) -> Classification {
        if is_noise(raw) {
            return Classification::Suppressed;
        }

        let line = normalize(raw.trim());
        match self.table.find_match(&line) {
            Some((_, description)) if description.is_empty() || is_low_value(&description) => {
                Classification::Suppressed
            }
            Some((rule, description)) => Classification::Matched {
                label: rule.label.clone(),
                description,
            },
            None => Classification::Unmatched,
        }
    }

    /// Classifies every line into a report, dropping case-insensitive duplicates.
    pub fn build_report<I, S>(&self, lines: I) -> ChangelogReport
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut report = ChangelogReport::new();
        let mut seen = HashSet::new();

        for line in lines {
            let line = line.as_ref().trim();
            if line.is_empty() || !seen.insert(line.to_lowercase()) {
                continue;
            }

            match self.classify(line) {
                Classification::Matched { label, description } => {
                    debug!(%label, %description, "classified commit");
                    report.push(label, description);
                }
                Classification::Suppressed => debug!(line, "suppressed commit"),
                Classification::Unmatched => debug!(line, "no category for commit"),
            }
        }

        report
    }
}
