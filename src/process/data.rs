//! Generic data conversion: the source file's bytes, untouched.

use std::path::Path;

use crate::error::{Result, XpakError};

/// Read a source file verbatim.
pub fn import_data(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).map_err(|e| XpakError::Import {
        path: path.to_path_buf(),
        message: format!("{}", e),
    })
}
