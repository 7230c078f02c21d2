//! Build command implementation.
//!
//! Loads the manifest and runs the full pipeline: clean, convert, compress,
//! write.

use std::path::PathBuf;

use clap::Args;

use crate::error::Result;
use crate::manifest::Manifest;
use crate::output::{ConsoleSink, LogSink};
use crate::pipeline::Pipeline;

/// Build all assets declared in a manifest
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Path to the manifest file (defaults to ./Content.manifest)
    #[arg(long, short)]
    pub manifest: Option<PathBuf>,
}

pub fn run(args: BuildArgs) -> Result<()> {
    let path = super::resolve_manifest_path(args.manifest)?;

    let mut sink = ConsoleSink::new();
    sink.info(&format!("Reading manifest from: {}", path.display()));

    let manifest = Manifest::load(&path)?;
    Pipeline::new(&mut sink).build(&manifest)?;

    Ok(())
}
