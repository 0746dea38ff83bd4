use crate::utils::{LOW_VALUE_PATTERN, VERSION_BUMP_PATTERN};

const MERGE_PREFIXES: [&str; 3] = [
    "Merge branch ",
    "Merge pull request ",
    "Merge remote-tracking branch ",
];

/// Merge commits and version bumps never reach the report.
#[must_use]
pub fn is_noise(line: &str) -> bool {
    MERGE_PREFIXES.iter().any(|prefix| line.starts_with(prefix))
        || VERSION_BUMP_PATTERN.is_match(line)
}

/// Matches exactly two tokens led by `typo`, `test` or `fix` (e.g. "test push").
///
/// Longer descriptions starting with one of those words are kept.
#[must_use]
pub fn is_low_value(description: &str) -> bool {
    LOW_VALUE_PATTERN.is_match(description)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_commits_are_noise() {
        assert!(is_noise("Merge pull request #12 from x/y"));
        assert!(is_noise("Merge branch 'dev'"));
        assert!(is_noise("Merge remote-tracking branch 'origin/dev' into dev"));
        assert!(!is_noise("merge branch 'dev'"));
        assert!(!is_noise("Merge the two caches"));
    }

    #[test]
    fn version_bumps_are_noise_anywhere() {
        assert!(is_noise("chore: bump deps version bump"));
        assert!(is_noise("VERSION BUMP"));
        assert!(!is_noise("bump version"));
    }

    #[test]
    fn low_value_is_two_tokens_only() {
        assert!(is_low_value("test push"));
        assert!(is_low_value("typo stuff"));
        assert!(is_low_value("fix typo"));
        assert!(!is_low_value("fix typo in docs"));
        assert!(!is_low_value("Fix typo"));
        assert!(!is_low_value("fix"));
    }
}
