use crate::error::{PortError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;
use std::process::Command;
use tracing::{debug, warn};

static ACTUAL_HASH_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"Actual hash:\s+([0-9a-fA-F]+)").expect("Failed to compile actual hash regex")
});

/// Extracts the hash vcpkg prints when a download does not match `SHA512`.
#[must_use]
pub fn parse_actual_hash(build_output: &str) -> Option<String> {
    ACTUAL_HASH_PATTERN
        .captures(build_output)
        .map(|caps| caps[1].to_string())
}

/// Runs `vcpkg install <port>:<triplet>` against the port in `overlay` and reads back
/// the real archive hash.
///
/// The port is expected to carry a placeholder hash, so the install fails; only its
/// output matters.
///
/// # Errors
/// Returns error if vcpkg cannot be started or prints no hash
pub fn probe_hash(vcpkg: &Path, overlay: &Path, port: &str, triplet: &str) -> Result<String> {
    let target = format!("{port}:{triplet}");
    debug!(vcpkg = %vcpkg.display(), overlay = %overlay.display(), %target, "running probe build");

    let output = Command::new(vcpkg)
        .arg("install")
        .arg(format!("--overlay-ports={}", overlay.display()))
        .arg(&target)
        .output()
        .map_err(|e| PortError::IoError(e).with_context(format!("Failed to run {}", vcpkg.display())))?;

    if output.status.success() {
        warn!("probe build succeeded, the placeholder hash may already be correct");
    }

    let combined = format!(
        "{}\n{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    parse_actual_hash(&combined).ok_or(PortError::HashNotFound)
}
