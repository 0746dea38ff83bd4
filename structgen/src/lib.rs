//! Generates blocking and coroutine wrappers for the REST methods of
//! `dpp::cluster` by scanning the cluster sources.

pub mod error;
pub mod generator;
pub mod header;
pub mod scanner;
mod utils;

pub use error::{Result, StructGenError};
pub use generator::{
    CallGenerator, CallStyle, CoroGenerator, GeneratedCalls, SyncGenerator, create_generator,
    render_calls,
};
pub use header::ClusterHeader;
pub use scanner::{Method, Scanner};

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use tracing::debug;

/// Concatenated `*.cpp` sources of `dir` in file-name order, with the files read.
///
/// # Errors
/// Returns error if the directory has no sources or one cannot be read
pub fn read_sources(dir: &Path) -> Result<(String, Vec<PathBuf>)> {
    let pattern = format!("{}/*.cpp", dir.display());
    let mut files = Vec::new();
    for entry in glob::glob(&pattern)? {
        match entry {
            Ok(path) => files.push(path),
            Err(e) => {
                let path = e.path().to_path_buf();
                return Err(StructGenError::ReadError {
                    path,
                    source: e.into_error(),
                });
            }
        }
    }
    if files.is_empty() {
        return Err(StructGenError::NoSources(dir.to_path_buf()));
    }
    files.sort();

    let mut combined = String::new();
    for path in &files {
        let content = fs::read_to_string(path).map_err(|source| StructGenError::ReadError {
            path: path.clone(),
            source,
        })?;
        combined.push_str(&content);
        if !content.ends_with('\n') {
            combined.push('\n');
        }
    }

    debug!(files = files.len(), "read cluster sources");
    Ok((combined, files))
}

/// True when an output is missing or older than any input.
///
/// # Errors
/// Returns error if an input's modification time cannot be read
pub fn needs_regeneration(inputs: &[PathBuf], outputs: &[&Path]) -> Result<bool> {
    let mut oldest_output: Option<SystemTime> = None;
    for output in outputs {
        let Ok(modified) = fs::metadata(output).and_then(|m| m.modified()) else {
            debug!(path = %output.display(), "output missing");
            return Ok(true);
        };
        oldest_output = Some(oldest_output.map_or(modified, |t| t.min(modified)));
    }
    let Some(oldest_output) = oldest_output else {
        return Ok(true);
    };

    for input in inputs {
        let modified = fs::metadata(input)
            .and_then(|m| m.modified())
            .map_err(|source| StructGenError::ReadError {
                path: input.clone(),
                source,
            })?;
        if modified > oldest_output {
            debug!(path = %input.display(), "input newer than generated output");
            return Ok(true);
        }
    }

    Ok(false)
}

/// Writes `content` to `path`, creating parent directories.
///
/// # Errors
/// Returns error if the file cannot be written
pub fn write_output(path: &Path, content: &str) -> Result<()> {
    let write_error = |source| StructGenError::WriteError {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_error)?;
    }
    fs::write(path, content).map_err(write_error)?;
    debug!(path = %path.display(), "wrote generated file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const GUILD_CPP: &str = "void cluster::guild_get(snowflake guild_id, command_completion_event_t callback) {\n\
                             \trest_request<guild>(this, API_PATH \"/guilds\", std::to_string(guild_id), \"\", m_get, \"\", callback);\n\
                             }\n";

    const ROLES_CPP: &str = "void cluster::roles_get(snowflake guild_id, command_completion_event_t callback) {\n\
                             \trest_request_list<role>(this, API_PATH \"/guilds\", std::to_string(guild_id), \"roles\", m_get, \"\", callback);\n\
                             }";

    #[test]
    fn sources_are_read_in_name_order() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("roles.cpp"), ROLES_CPP).unwrap();
        fs::write(dir.path().join("guild.cpp"), GUILD_CPP).unwrap();
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let (source, files) = read_sources(dir.path()).unwrap();
        let names: Vec<String> = Scanner::default()
            .scan(&source)
            .into_iter()
            .map(|m| format!("{} -> {}", m.name, m.return_type))
            .collect();

        assert_eq!(files.len(), 2);
        assert_eq!(names, vec!["guild_get -> guild", "roles_get -> role_map"]);
    }

    #[test]
    fn empty_source_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            read_sources(dir.path()),
            Err(StructGenError::NoSources(_))
        ));
    }

    #[test]
    fn missing_output_needs_regeneration() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("guild.cpp");
        fs::write(&input, GUILD_CPP).unwrap();
        let output = dir.path().join("out").join("calls.h");

        assert!(needs_regeneration(&[input.clone()], &[&output]).unwrap());

        write_output(&output, "generated").unwrap();
        assert_eq!(fs::read_to_string(&output).unwrap(), "generated");
        assert!(!needs_regeneration(&[input], &[&output]).unwrap());
    }
}
