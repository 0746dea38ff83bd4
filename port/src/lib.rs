//! vcpkg port scaffolding for a tagged release.

pub mod error;
pub mod manifest;
pub mod portfile;
pub mod probe;

pub use error::{PortError, Result};
pub use manifest::{PortSpec, render_manifest};
pub use portfile::render_portfile;
pub use probe::{parse_actual_hash, probe_hash};

use semver::Version;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const PORTFILE_NAME: &str = "portfile.cmake";
pub const MANIFEST_NAME: &str = "vcpkg.json";

/// Parses a release tag such as `v10.0.30` (surrounding whitespace allowed).
///
/// # Errors
/// Returns error if the tag is not a semantic version
pub fn version_from_tag(tag: &str) -> Result<Version> {
    let trimmed = tag.trim();
    let bare = trimmed.strip_prefix('v').unwrap_or(trimmed);
    Ok(Version::parse(bare)?)
}

/// Writes `portfile.cmake` and `vcpkg.json` into `dir`, creating it if needed.
///
/// # Errors
/// Returns error if the directory or either file cannot be written
pub fn write_port(dir: &Path, spec: &PortSpec) -> Result<(PathBuf, PathBuf)> {
    fs::create_dir_all(dir).map_err(|source| PortError::WriteError {
        path: dir.to_path_buf(),
        source,
    })?;

    let portfile_path = dir.join(PORTFILE_NAME);
    let manifest_path = dir.join(MANIFEST_NAME);

    for (path, content) in [
        (&portfile_path, render_portfile(spec)),
        (&manifest_path, render_manifest(spec)?),
    ] {
        fs::write(path, content).map_err(|source| PortError::WriteError {
            path: path.clone(),
            source,
        })?;
        debug!(path = %path.display(), "wrote port file");
    }

    Ok((portfile_path, manifest_path))
}
