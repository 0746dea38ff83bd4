use crate::error::{Result, ResultExt};
use crate::progress::ProgressTracker;
use crate::ui;
use port::{PortSpec, probe_hash, version_from_tag, write_port};
use std::path::PathBuf;

pub fn execute(
    release_version: String,
    sha512: Option<String>,
    out: PathBuf,
    probe: Option<PathBuf>,
    triplet: String,
    verbose: bool,
) -> Result<()> {
    let mut progress = ProgressTracker::new(
        "vcpkg Port",
        &[
            "Parsing release version",
            "Probing vcpkg for the archive hash",
            "Writing port files",
        ],
    );

    progress.start_step();
    let version = version_from_tag(&release_version)
        .with_context(|| format!("'{release_version}' is not a release version"))?;
    let mut spec = PortSpec::dpp(version);
    if let Some(sha512) = sha512 {
        spec = spec.with_sha512(sha512);
    }
    progress.complete_step();

    match probe {
        Some(vcpkg) => {
            progress.start_step();
            write_port(&out, &spec)?;
            let hash = probe_hash(&vcpkg, &out, &spec.name, &triplet)?;
            if verbose {
                ui::info_message(&format!("vcpkg reported SHA512 {hash}"));
            }
            spec = spec.with_sha512(hash);
            progress.complete_step();
        }
        None => progress.skip_step("no --probe binary given"),
    }

    progress.start_step();
    let (portfile, manifest) = write_port(&out, &spec)?;
    progress.complete_step();

    progress.complete();
    ui::info_message(&format!(
        "Wrote {} and {}",
        portfile.display(),
        manifest.display()
    ));
    if spec.sha512 == "0" {
        ui::warning_message("SHA512 is still the placeholder; rerun with --probe or --sha512");
    }

    Ok(())
}
