//! Texture conversion.
//!
//! Decodes any supported image format and flattens it to interleaved 8-bit
//! RGBA. The payload is the bare pixel buffer, no container or header; the
//! consuming engine knows the dimensions from its own metadata.

use std::path::Path;

use crate::error::{Result, XpakError};

/// Decode an image file into raw RGBA8 pixels (width * height * 4 bytes).
pub fn import_texture(path: &Path) -> Result<Vec<u8>> {
    let image = image::open(path).map_err(|e| XpakError::Import {
        path: path.to_path_buf(),
        message: format!("{}", e),
    })?;

    Ok(image.to_rgba8().into_raw())
}
