use crate::error::{Result, ResultExt};
use crate::progress::ProgressTracker;
use crate::ui;
use std::fs;
use std::path::PathBuf;
use structgen::{
    CallStyle, ClusterHeader, Scanner, create_generator, needs_regeneration, read_sources,
    render_calls, write_output,
};
use tracing::debug;

pub struct StructOptions {
    pub style: CallStyle,
    pub sources: PathBuf,
    pub header: PathBuf,
    pub out_header: Option<PathBuf>,
    pub out_source: Option<PathBuf>,
    pub force: bool,
    pub verbose: bool,
}

/// Default output locations next to the library headers and sources.
fn default_outputs(style: CallStyle) -> (PathBuf, PathBuf) {
    (
        PathBuf::from(format!("include/dpp/cluster_{style}_calls.h")),
        PathBuf::from(format!("src/dpp/cluster_{style}_calls.cpp")),
    )
}

pub fn execute(options: StructOptions) -> Result<()> {
    let StructOptions {
        style,
        sources,
        header,
        out_header,
        out_source,
        force,
        verbose,
    } = options;
    let (default_header, default_source) = default_outputs(style);
    let out_header = out_header.unwrap_or(default_header);
    let out_source = out_source.unwrap_or(default_source);

    let mut progress = ProgressTracker::new(
        "Cluster Call Wrappers",
        &[
            "Reading cluster sources",
            "Scanning methods",
            "Writing generated files",
        ],
    );

    progress.start_step();
    let (source, mut inputs) = read_sources(&sources)
        .with_context(|| format!("Failed to read cluster sources from {}", sources.display()))?;
    let cluster = if header.exists() {
        let text = fs::read_to_string(&header)
            .with_context(|| format!("Failed to read {}", header.display()))?;
        inputs.push(header.clone());
        ClusterHeader::parse(&text)
    } else {
        ui::warning_message(&format!(
            "{} not found; wrappers get no doc comments or default arguments",
            header.display()
        ));
        ClusterHeader::default()
    };
    progress.complete_step();

    if !force && !needs_regeneration(&inputs, &[&out_header, &out_source])? {
        progress.skip_step("generated files are up to date");
        ui::info_message("Nothing to do, pass --force to regenerate anyway");
        return Ok(());
    }

    progress.start_step();
    let methods = Scanner::default().scan(&source);
    debug!(%style, methods = methods.len(), "scanned cluster sources");
    if verbose {
        for method in &methods {
            ui::info_message(&format!("{} -> {}", method.name, method.return_type));
        }
    }
    progress.complete_step();

    progress.start_step();
    let generator = create_generator(style);
    let calls = render_calls(&methods, &cluster, generator.as_ref());
    write_output(&out_header, &calls.header)?;
    write_output(&out_source, &calls.source)?;
    progress.complete_step();

    progress.complete();
    ui::info_message(&format!(
        "Generated {} {style} wrappers into {} and {}",
        calls.methods,
        out_header.display(),
        out_source.display()
    ));

    Ok(())
}
