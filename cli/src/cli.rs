use changelog::RenderStyle;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use structgen::CallStyle;

#[derive(Parser)]
#[command(name = "reltool")]
#[command(
    author,
    version,
    about = "Release-engineering helpers: release notes from commit subjects, vcpkg port scaffolding and cluster call wrappers"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn verbose(&self) -> bool {
        match &self.command {
            Commands::Changelog { verbose, .. }
            | Commands::Port { verbose, .. }
            | Commands::Struct { verbose, .. } => *verbose,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate categorized release notes from commit subjects
    Changelog {
        /// Output style (defaults to the configured style)
        #[clap(short, long, value_enum)]
        style: Option<StyleArg>,

        /// Release version referenced by the download line of decorated output
        #[clap(long)]
        release_version: Option<String>,

        /// Configuration file (defaults to release-notes.toml when present)
        #[clap(short, long)]
        config: Option<PathBuf>,

        /// Read commit subjects from a file, or '-' for stdin, instead of git
        #[clap(short, long)]
        input: Option<PathBuf>,

        /// Collect commits after this revision instead of after the latest tag
        #[clap(long, conflicts_with = "input")]
        since: Option<String>,

        /// Enable verbose output with additional information
        #[clap(short, long, default_value_t = false)]
        verbose: bool,
    },

    /// Write vcpkg portfile.cmake and vcpkg.json for a release
    Port {
        /// Release version or tag, e.g. v10.0.30
        #[clap(long)]
        release_version: String,

        /// SHA512 of the release archive (defaults to the "0" placeholder)
        #[clap(long, conflicts_with = "probe")]
        sha512: Option<String>,

        /// Directory the port files are written to
        #[clap(short, long, default_value = "vcpkg/ports/dpp")]
        out: PathBuf,

        /// Path to a vcpkg binary used to discover the real SHA512
        #[clap(long)]
        probe: Option<PathBuf>,

        /// Triplet used for the probe build
        #[clap(long, default_value = "x64-linux")]
        triplet: String,

        /// Enable verbose output with additional information
        #[clap(short, long, default_value_t = false)]
        verbose: bool,
    },

    /// Generate sync or coroutine wrappers for the cluster REST methods
    Struct {
        /// Kind of wrapper to generate
        #[clap(short, long, value_enum, default_value_t = CallStyleArg::Sync)]
        style: CallStyleArg,

        /// Directory holding the cluster/*.cpp sources
        #[clap(long, default_value = "src/dpp/cluster")]
        sources: PathBuf,

        /// cluster.h, read for doc comments and default arguments
        #[clap(long, default_value = "include/dpp/cluster.h")]
        header: PathBuf,

        /// Generated header (defaults to include/dpp/cluster_<style>_calls.h)
        #[clap(long)]
        out_header: Option<PathBuf>,

        /// Generated source (defaults to src/dpp/cluster_<style>_calls.cpp)
        #[clap(long)]
        out_source: Option<PathBuf>,

        /// Regenerate even when the outputs are newer than the sources
        #[clap(short, long, default_value_t = false)]
        force: bool,

        /// Enable verbose output with additional information
        #[clap(short, long, default_value_t = false)]
        verbose: bool,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum StyleArg {
    /// Markdown headers and dash bullets
    Plain,

    /// Bold headers, bullet glyphs and a download link
    Decorated,
}

impl From<StyleArg> for RenderStyle {
    fn from(style: StyleArg) -> Self {
        match style {
            StyleArg::Plain => RenderStyle::Plain,
            StyleArg::Decorated => RenderStyle::Decorated,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum CallStyleArg {
    /// Blocking `*_sync` wrappers
    Sync,

    /// Coroutine `co_*` wrappers
    Coro,
}

impl From<CallStyleArg> for CallStyle {
    fn from(style: CallStyleArg) -> Self {
        match style {
            CallStyleArg::Sync => CallStyle::Sync,
            CallStyleArg::Coro => CallStyle::Coro,
        }
    }
}
