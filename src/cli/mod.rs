pub mod build;
pub mod clean;
pub mod validate;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::error::Result;

/// xpak - Game content manifest build tool
#[derive(Parser, Debug)]
#[command(name = "xpak")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build all assets declared in a manifest
    Build(build::BuildArgs),

    /// Reset a manifest's output directory
    Clean(clean::CleanArgs),

    /// Parse a manifest and print what it declares
    Validate(validate::ValidateArgs),
}

/// Resolve the manifest path argument, defaulting to `Content.manifest` in
/// the current directory.
pub(crate) fn resolve_manifest_path(manifest: Option<PathBuf>) -> Result<PathBuf> {
    match manifest {
        Some(path) => Ok(path),
        None => Ok(std::env::current_dir()?.join("Content.manifest")),
    }
}
