//! Build pipeline: directory lifecycle, per-asset conversion, packaging.
//!
//! `build` always starts from a pristine output directory: the clean pass
//! runs first, so renamed or removed assets never leave stale files behind.
//! Assets are processed sequentially in manifest order. A failed conversion
//! is logged and yields an empty payload; directory and output-write
//! failures abort the whole operation at that point, with no rollback.

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::compress;
use crate::error::{Result, XpakError};
use crate::manifest::Manifest;
use crate::output::LogSink;
use crate::paths::split_segments;
use crate::process;

/// Outcome of a successful build.
#[derive(Debug)]
pub struct BuildReport {
    pub assets_built: usize,
    pub content_dir: PathBuf,
}

/// Outcome of a successful clean.
#[derive(Debug)]
pub struct CleanReport {
    pub content_dir: PathBuf,
}

/// Runs clean/build against a manifest, reporting progress to a log sink.
///
/// A pipeline is not reentrant; holding it by `&mut` serializes callers, so
/// only one build per pipeline can be in flight.
pub struct Pipeline<'a> {
    sink: &'a mut dyn LogSink,
}

impl<'a> Pipeline<'a> {
    pub fn new(sink: &'a mut dyn LogSink) -> Self {
        Self { sink }
    }

    /// Delete and recreate the manifest's output directory.
    pub fn clean(&mut self, manifest: &Manifest) -> Result<CleanReport> {
        self.sink.info("Cleaning manifest.");
        let content_dir = self.reset_content_dir(manifest)?;
        self.sink.info("Manifest cleaned.");
        Ok(CleanReport { content_dir })
    }

    /// Build every asset in the manifest into the output directory.
    pub fn build(&mut self, manifest: &Manifest) -> Result<BuildReport> {
        self.sink.info("Building manifest.");
        let content_dir = self.reset_content_dir(manifest)?;
        self.sink
            .info(&format!("Created output directory: {}", content_dir.display()));
        self.sink
            .info(&format!("Found {} assets.", manifest.assets.len()));

        let total = manifest.assets.len();
        for (index, asset) in manifest.assets.iter().enumerate() {
            self.sink.info(&format!(
                "[{}/{}] Building asset: {}",
                index + 1,
                total,
                asset.name
            ));

            let segments = split_segments(&asset.name);
            let Some((file_name, parents)) = segments.split_last() else {
                // The parser rejects names with no usable segments.
                continue;
            };

            let mut output_path = content_dir.clone();
            for parent in parents {
                output_path.push(parent);
            }
            if !parents.is_empty() {
                if let Err(e) = fs::create_dir_all(&output_path) {
                    return Err(self.fail(XpakError::Directory {
                        path: output_path,
                        message: format!("Failed to create directory: {}", e),
                    }));
                }
            }

            let source = manifest.root_dir.join(&asset.source);
            let mut payload = process::convert(asset.kind, &source, self.sink);
            if manifest.compress {
                payload = compress::pack(&payload);
            }

            output_path.push(format!("{}.xpak", file_name));
            if let Err(e) = fs::write(&output_path, &payload) {
                return Err(self.fail(XpakError::Write {
                    path: output_path,
                    message: format!("Failed to create output file: {}", e),
                }));
            }
        }

        self.sink.info(&format!(
            "Build successful: {} assets written to {}",
            total,
            content_dir.display()
        ));
        Ok(BuildReport {
            assets_built: total,
            content_dir,
        })
    }

    /// Delete the content directory (if any) and recreate it empty.
    fn reset_content_dir(&mut self, manifest: &Manifest) -> Result<PathBuf> {
        let content_dir = manifest.content_dir();
        self.remove_tree(&content_dir)?;
        if let Err(e) = fs::create_dir_all(&content_dir) {
            return Err(self.fail(XpakError::Directory {
                path: content_dir,
                message: format!("Failed to create directory: {}", e),
            }));
        }
        Ok(content_dir)
    }

    /// Post-order recursive delete: files before their parent directories.
    /// A missing directory is a no-op.
    fn remove_tree(&mut self, dir: &Path) -> Result<()> {
        if !dir.exists() {
            return Ok(());
        }

        for entry in WalkDir::new(dir).contents_first(true) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    let path = e
                        .path()
                        .map(Path::to_path_buf)
                        .unwrap_or_else(|| dir.to_path_buf());
                    return Err(self.fail(XpakError::Directory {
                        path,
                        message: format!("Failed to walk directory: {}", e),
                    }));
                }
            };

            let removed = if entry.file_type().is_dir() {
                fs::remove_dir(entry.path())
            } else {
                fs::remove_file(entry.path())
            };
            if let Err(e) = removed {
                return Err(self.fail(XpakError::Directory {
                    path: entry.path().to_path_buf(),
                    message: format!("Failed to delete: {}", e),
                }));
            }
        }

        Ok(())
    }

    /// Log a fatal error through the sink before handing it back.
    fn fail(&mut self, error: XpakError) -> XpakError {
        self.sink.error(&error.to_string());
        error
    }
}
