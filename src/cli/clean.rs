//! Clean command implementation.
//!
//! Destructive reset of a manifest's output directory, without building.

use std::path::PathBuf;

use clap::Args;

use crate::error::Result;
use crate::manifest::Manifest;
use crate::output::{ConsoleSink, LogSink};
use crate::pipeline::Pipeline;

/// Reset a manifest's output directory
#[derive(Args, Debug)]
pub struct CleanArgs {
    /// Path to the manifest file (defaults to ./Content.manifest)
    #[arg(long, short)]
    pub manifest: Option<PathBuf>,
}

pub fn run(args: CleanArgs) -> Result<()> {
    let path = super::resolve_manifest_path(args.manifest)?;

    let mut sink = ConsoleSink::new();
    sink.info(&format!("Reading manifest from: {}", path.display()));

    let manifest = Manifest::load(&path)?;
    Pipeline::new(&mut sink).clean(&manifest)?;

    Ok(())
}
