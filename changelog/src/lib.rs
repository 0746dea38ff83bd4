//! Release-notes generation from one-line commit subjects.
//!
//! Subjects are normalized, filtered for noise, filed under the first
//! matching category of an ordered [`RuleTable`], and rendered as a grouped
//! report in either [`RenderStyle::Plain`] or [`RenderStyle::Decorated`].

pub mod classify;
pub mod config;
pub mod error;
pub mod formatter;
pub mod noise;
pub mod normalize;
pub mod report;
pub mod rules;
mod utils;

pub use classify::{Classification, Classifier};
pub use config::ChangelogConfig;
pub use error::{ChangelogError, Result};
pub use formatter::{RenderStyle, ReportFormatter, create_formatter};
pub use report::ChangelogReport;
pub use rules::{CategoryRule, RuleTable};

/// Classifies `lines` with the configured table and renders the report.
///
/// # Errors
///
/// Returns an error if the configured rule table is invalid
pub fn generate<I, S>(
    lines: I,
    config: &ChangelogConfig,
    style: RenderStyle,
    version: Option<&str>,
) -> Result<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let classifier = Classifier::new(config.rule_table()?);
    let report = classifier.build_report(lines);
    Ok(create_formatter(style, config).render(&report, version))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn end_to_end_plain_report() {
        let lines = [
            "feat: add on_message_create() handler",
            "fix: wasnt checking null",
            "Merge branch 'dev'",
            "chore: bump deps version bump",
        ];
        let output = generate(lines, &ChangelogConfig::default(), RenderStyle::Plain, None).unwrap();

        assert_eq!(
            output,
            "Release Changelog\n===========\n\n\
             ## ✨ New Features\n\
             - add `on_message_create()` handler\n\
             \n\
             ## 🐞 Bug Fixes\n\
             - wasn't checking null\n\
             \n\
             **Thank you for using D++!**\n"
        );
    }

    #[test]
    fn invalid_configured_rules_fail_before_processing() {
        let config = ChangelogConfig {
            rules: Some(vec![CategoryRule::new("fix", "")]),
            ..ChangelogConfig::default()
        };
        assert!(generate(["fix: a"], &config, RenderStyle::Plain, None).is_err());
    }

    #[test]
    fn decorated_report_links_the_release() {
        let output = generate(
            ["fix/null pointer"],
            &ChangelogConfig::default(),
            RenderStyle::Decorated,
            Some("10.0.30"),
        )
        .unwrap();

        assert!(output.contains("**🐞 Bug Fixes**\n• Null pointer\n"));
        assert!(output.ends_with("releases/tag/v10.0.30\n"));
    }

    #[test]
    fn output_is_deterministic() {
        let lines = ["docs: a", "fix: b", "feat: c", "docs: d"];
        let config = ChangelogConfig::default();
        let first = generate(lines, &config, RenderStyle::Plain, None).unwrap();
        let second = generate(lines, &config, RenderStyle::Plain, None).unwrap();
        assert_eq!(first, second);
    }
}
