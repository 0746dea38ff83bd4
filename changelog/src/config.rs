use crate::error::{ChangelogError, Result};
use crate::formatter::RenderStyle;
use crate::rules::{CategoryRule, RuleTable};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Configuration options for changelog classification and rendering
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChangelogConfig {
    pub leading_banner: String,
    pub trailing_banner: String,
    /// Sentence appended by decorated output; `{version}` is substituted.
    pub download_template: String,
    pub style: RenderStyle,
    /// Ordered category table; the built-in table is used when absent.
    pub rules: Option<Vec<CategoryRule>>,
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        Self {
            leading_banner: "Release Changelog\n===========".to_string(),
            trailing_banner: "**Thank you for using D++!**".to_string(),
            download_template:
                "The release can be downloaded from https://github.com/brainboxdotcc/DPP/releases/tag/v{version}"
                    .to_string(),
            style: RenderStyle::Plain,
            rules: None,
        }
    }
}

impl ChangelogConfig {
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed or has unknown keys
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| ChangelogError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml_str(&content)
            .map_err(|e| e.with_context(format!("Loading {}", path.display())))
    }

    /// Validated category table for this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ChangelogError::InvalidRule`] if a configured rule is malformed
    pub fn rule_table(&self) -> Result<RuleTable> {
        match &self.rules {
            Some(rules) => RuleTable::new(rules.clone()),
            None => Ok(RuleTable::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_document_uses_defaults() {
        let config = ChangelogConfig::from_toml_str("").unwrap();
        assert_eq!(config.style, RenderStyle::Plain);
        assert_eq!(config.rule_table().unwrap(), RuleTable::default());
    }

    #[test]
    fn rules_keep_declaration_order() {
        let config = ChangelogConfig::from_toml_str(
            r#"
style = "decorated"

[[rules]]
keyword = "hotfix"
label = "Hotfixes"

[[rules]]
keyword = "feat"
label = "Features"
"#,
        )
        .unwrap();

        assert_eq!(config.style, RenderStyle::Decorated);
        let table = config.rule_table().unwrap();
        let keywords: Vec<&str> = table.iter().map(|r| r.keyword.as_str()).collect();
        assert_eq!(keywords, ["hotfix", "feat"]);
    }

    #[test]
    fn malformed_rule_is_rejected() {
        let config = ChangelogConfig::from_toml_str(
            r#"
[[rules]]
keyword = ""
label = "Anything"
"#,
        )
        .unwrap();

        assert!(matches!(
            config.rule_table(),
            Err(ChangelogError::InvalidRule { index: 0, .. })
        ));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(ChangelogConfig::from_toml_str("colour = true").is_err());
    }

    #[test]
    fn load_reads_file_and_reports_missing_ones() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("release-notes.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "trailing_banner = \"bye\"").unwrap();

        let config = ChangelogConfig::load(&path).unwrap();
        assert_eq!(config.trailing_banner, "bye");

        let missing = ChangelogConfig::load(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(missing, ChangelogError::ReadError { .. }));
    }
}
