use crate::error::{CliError, Result, ResultExt};
use crate::progress::ProgressTracker;
use crate::ui;
use changelog::{ChangelogConfig, Classifier, RenderStyle, create_formatter};
use git::{CommitSource, RealGitRepository};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

const DEFAULT_CONFIG_FILE: &str = "release-notes.toml";

pub fn execute(
    style: Option<RenderStyle>,
    release_version: Option<String>,
    config_path: Option<PathBuf>,
    input: Option<PathBuf>,
    since: Option<String>,
    verbose: bool,
) -> Result<()> {
    let mut progress = ProgressTracker::new(
        "Release Changelog",
        &[
            "Loading configuration",
            "Collecting commit subjects",
            "Classifying commits",
        ],
    );

    progress.start_step();
    let config = load_config(config_path)?;
    let style = style.unwrap_or(config.style);
    let classifier = Classifier::new(config.rule_table()?);
    debug!(%style, rules = classifier.table().len(), "configuration ready");
    progress.complete_step();

    progress.start_step();
    let subjects = match &input {
        Some(path) => read_subjects(path)?,
        None => collect_from_git(since.as_deref())?,
    };
    if verbose {
        ui::info_message(&format!("Found {} commit subjects", subjects.len()));
    }
    progress.complete_step();

    progress.start_step();
    let report = classifier.build_report(&subjects);
    let output = create_formatter(style, &config).render(&report, release_version.as_deref());
    progress.complete_step();

    progress.complete();
    ui::info_message(&format!(
        "{} entries in {} categories",
        report.len(),
        report.labels().len()
    ));
    if style == RenderStyle::Decorated && release_version.is_none() {
        ui::warning_message("No --release-version given, the download line was left out");
    }

    print!("{output}");
    Ok(())
}

fn load_config(path: Option<PathBuf>) -> Result<ChangelogConfig> {
    let path = match path {
        Some(path) => path,
        None if Path::new(DEFAULT_CONFIG_FILE).exists() => PathBuf::from(DEFAULT_CONFIG_FILE),
        None => return Ok(ChangelogConfig::default()),
    };

    debug!(path = %path.display(), "loading configuration");
    Ok(ChangelogConfig::load(&path)?)
}

fn read_subjects(input: &Path) -> Result<Vec<String>> {
    let content = if input == Path::new("-") {
        io::read_to_string(io::stdin()).with_context(|| "Failed to read commit subjects from stdin")?
    } else {
        if !input.exists() {
            return Err(CliError::InputNotFound(input.to_path_buf()));
        }
        fs::read_to_string(input).with_context(|| format!("Failed to read {}", input.display()))?
    };

    Ok(content.lines().map(str::to_string).collect())
}

fn collect_from_git(since: Option<&str>) -> Result<Vec<String>> {
    let repo = RealGitRepository::open()
        .map_err(|e| CliError::Git(e).with_context("Failed to open git repository"))?;

    let subjects = match since {
        Some(rev) => repo.subjects_since(rev)?,
        None => {
            match repo.latest_tag()? {
                Some(tag) => ui::info_message(&format!("Collecting commits since {tag}")),
                None => ui::warning_message("No tags found, using the full history"),
            }
            repo.subjects_since_last_tag()?
        }
    };

    Ok(subjects)
}
