//! The ordered keyword → category table consulted by the classifier.

use crate::error::{ChangelogError, Result};
use serde::Deserialize;
use tracing::debug;

/// One keyword and the category it files commits under
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CategoryRule {
    pub keyword: String,
    pub label: String,
}

impl CategoryRule {
    pub fn new(keyword: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            label: label.into(),
        }
    }

    /// Tries every prefix form in order and returns the cleaned description.
    #[must_use]
    pub fn match_line(&self, line: &str) -> Option<String> {
        PrefixForm::ALL
            .iter()
            .find_map(|form| form.strip(line, &self.keyword))
    }
}

/// The structural shapes a category keyword can take at the start of a subject
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefixForm {
    /// `fix: text`
    Colon,
    /// `[fix] text`, `[fix/scope] text`, `[fix: text`
    Bracket,
    /// `fix/text`
    Slash,
    /// `fix text`, kept verbatim
    Space,
}

impl PrefixForm {
    pub const ALL: [PrefixForm; 4] = [Self::Colon, Self::Bracket, Self::Slash, Self::Space];

    /// Returns the description if `line` starts with `keyword` in this form.
    #[must_use]
    pub fn strip(self, line: &str, keyword: &str) -> Option<String> {
        match self {
            Self::Colon => strip_keyword(line, keyword)
                .and_then(|rest| rest.strip_prefix(':'))
                .map(|rest| rest.trim_start().to_string()),
            Self::Bracket => {
                let rest = strip_keyword(line.strip_prefix('[')?, keyword)?;
                match rest.chars().next()? {
                    ']' => Some(rest[1..].trim_start().to_string()),
                    '/' | ':' => Some(match line.find(']') {
                        Some(close) => line[close + 1..].trim_start().to_string(),
                        None => strip_first_token(line),
                    }),
                    _ => None,
                }
            }
            Self::Slash => strip_keyword(line, keyword)
                .and_then(|rest| rest.strip_prefix('/'))
                .map(|rest| rest.trim_start().to_string()),
            Self::Space => strip_keyword(line, keyword)
                .filter(|rest| rest.starts_with(' '))
                .map(|_| line.to_string()),
        }
    }
}

/// Case-insensitive keyword prefix; returns what follows it.
fn strip_keyword<'a>(line: &'a str, keyword: &str) -> Option<&'a str> {
    let head = line.get(..keyword.len())?;
    head.eq_ignore_ascii_case(keyword)
        .then(|| &line[keyword.len()..])
}

fn strip_first_token(line: &str) -> String {
    line.split_once(char::is_whitespace)
        .map(|(_, rest)| rest.trim_start().to_string())
        .unwrap_or_default()
}

/// Validated, ordered list of rules; earlier rules win.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleTable {
    rules: Vec<CategoryRule>,
}

impl RuleTable {
    /// Builds a table, rejecting rules that could never match or would match everything.
    ///
    /// # Errors
    ///
    /// Returns [`ChangelogError::InvalidRule`] for an empty keyword, a keyword
    /// containing whitespace, or an empty label.
    pub fn new(rules: Vec<CategoryRule>) -> Result<Self> {
        for (index, rule) in rules.iter().enumerate() {
            let reason = if rule.keyword.trim().is_empty() {
                Some("keyword is empty")
            } else if rule.keyword.chars().any(char::is_whitespace) {
                Some("keyword must be a single word")
            } else if rule.label.trim().is_empty() {
                Some("label is empty")
            } else {
                None
            };

            if let Some(reason) = reason {
                return Err(ChangelogError::InvalidRule {
                    index,
                    reason: format!("{reason} (keyword '{}')", rule.keyword),
                });
            }
        }

        debug!(rules = rules.len(), "loaded category table");
        Ok(Self { rules })
    }

    /// First rule that matches, with its cleaned description.
    #[must_use]
    pub fn find_match(&self, line: &str) -> Option<(&CategoryRule, String)> {
        self.rules
            .iter()
            .find_map(|rule| rule.match_line(line).map(|description| (rule, description)))
    }

    pub fn iter(&self) -> impl Iterator<Item = &CategoryRule> {
        self.rules.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

pub const BREAKING_CHANGES: &str = "💣 Breaking Changes";
pub const NEW_FEATURES: &str = "✨ New Features";
pub const BUG_FIXES: &str = "🐞 Bug Fixes";
pub const PERFORMANCE: &str = "🚀 Performance Improvements";
pub const REFACTORING: &str = "♻️ Refactoring";
pub const TESTING: &str = "🚨 Testing";
pub const BUILD_CI: &str = "👷 Build/CI";
pub const DOCUMENTATION: &str = "📚 Documentation";
pub const STYLE: &str = "💎 Style Changes";
pub const CHORE: &str = "🔧 Chore";
pub const MISCELLANEOUS: &str = "📜 Miscellaneous Changes";

const DEFAULT_RULES: &[(&str, &str)] = &[
    ("break", BREAKING_CHANGES),
    ("breaking", BREAKING_CHANGES),
    ("feat", NEW_FEATURES),
    ("feature", NEW_FEATURES),
    ("add", NEW_FEATURES),
    ("added", NEW_FEATURES),
    ("fix", BUG_FIXES),
    ("bug", BUG_FIXES),
    ("bugfix", BUG_FIXES),
    ("fixed", BUG_FIXES),
    ("fixes", BUG_FIXES),
    ("perf", PERFORMANCE),
    ("performance", PERFORMANCE),
    ("impro", REFACTORING),
    ("improved", REFACTORING),
    ("improvement", REFACTORING),
    ("refactor", REFACTORING),
    ("refactored", REFACTORING),
    ("deprecated", REFACTORING),
    ("deprecate", REFACTORING),
    ("remove", REFACTORING),
    ("change", REFACTORING),
    ("changed", REFACTORING),
    ("test", TESTING),
    ("testing", TESTING),
    ("ci", BUILD_CI),
    ("build", BUILD_CI),
    ("docs", DOCUMENTATION),
    ("documentation", DOCUMENTATION),
    ("style", STYLE),
    ("chore", CHORE),
    ("misc", MISCELLANEOUS),
    ("update", MISCELLANEOUS),
    ("updated", MISCELLANEOUS),
];

impl Default for RuleTable {
    fn default() -> Self {
        Self {
            rules: DEFAULT_RULES
                .iter()
                .map(|(keyword, label)| CategoryRule::new(*keyword, *label))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(keyword: &str) -> CategoryRule {
        CategoryRule::new(keyword, BUG_FIXES)
    }

    #[test]
    fn colon_form_strips_keyword() {
        assert_eq!(rule("fix").match_line("fix: null pointer"), Some("null pointer".into()));
        assert_eq!(rule("fix").match_line("FIX:null pointer"), Some("null pointer".into()));
    }

    #[test]
    fn slash_form_strips_keyword() {
        assert_eq!(rule("fix").match_line("fix/null pointer"), Some("null pointer".into()));
    }

    #[test]
    fn space_form_keeps_whole_line() {
        assert_eq!(
            rule("fix").match_line("fix null pointer"),
            Some("fix null pointer".into())
        );
    }

    #[test]
    fn bracket_forms_strip_through_closing_bracket() {
        assert_eq!(rule("fix").match_line("[fix] crash"), Some("crash".into()));
        assert_eq!(rule("fix").match_line("[Fix/voice] crash"), Some("crash".into()));
        assert_eq!(rule("fix").match_line("[fix: crash on exit"), Some("crash on exit".into()));
    }

    #[test]
    fn keyword_must_be_followed_by_a_delimiter() {
        assert_eq!(rule("fix").match_line("fixed: thing"), None);
        assert_eq!(rule("fix").match_line("[fixed] thing"), None);
        assert_eq!(rule("fix").match_line("prefix: thing"), None);
        assert_eq!(rule("fix").match_line("fix"), None);
    }

    #[test]
    fn non_ascii_input_does_not_panic() {
        assert_eq!(rule("fix").match_line("ñx"), None);
        assert_eq!(rule("fix").match_line("✨"), None);
    }

    #[test]
    fn earlier_rule_wins() {
        let table = RuleTable::new(vec![
            CategoryRule::new("fixed", "First"),
            CategoryRule::new("FIXED", "Second"),
        ])
        .unwrap();

        let (rule, description) = table.find_match("fixed: thing").unwrap();
        assert_eq!(rule.label, "First");
        assert_eq!(description, "thing");
    }

    #[test]
    fn rejects_empty_keyword_and_label() {
        let err = RuleTable::new(vec![rule("fix"), CategoryRule::new("", "Label")]).unwrap_err();
        assert!(matches!(err, ChangelogError::InvalidRule { index: 1, .. }));

        let err = RuleTable::new(vec![CategoryRule::new("fix", "  ")]).unwrap_err();
        assert!(matches!(err, ChangelogError::InvalidRule { index: 0, .. }));

        let err = RuleTable::new(vec![CategoryRule::new("bug fix", "Bugs")]).unwrap_err();
        assert!(err.to_string().contains("single word"));
    }

    #[test]
    fn default_table_folds_keywords_into_categories() {
        let table = RuleTable::default();
        assert_eq!(table.len(), 34);
        for keyword in ["fix", "bug", "bugfix", "fixed", "fixes"] {
            let line = format!("{keyword}: thing");
            assert_eq!(table.find_match(&line).unwrap().0.label, BUG_FIXES);
        }
    }
}
