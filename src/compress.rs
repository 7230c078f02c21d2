//! LZ4 block compression for packed payloads.
//!
//! Compression is a whole-payload pass controlled by the manifest's
//! `Compress` flag; it is never applied per asset. The output is a raw LZ4
//! block with no framing, so decompression needs the original length; the
//! consuming engine tracks that out-of-band.

use lz4_flex::block::{compress_into, decompress, get_maximum_output_size};

use crate::error::{Result, XpakError};

/// Compress a payload into a raw LZ4 block.
///
/// The output buffer is sized to the worst-case bound up front, so the pass
/// never reallocates. An empty payload stays empty.
pub fn pack(payload: &[u8]) -> Vec<u8> {
    if payload.is_empty() {
        return Vec::new();
    }

    let mut output = vec![0u8; get_maximum_output_size(payload.len())];
    match compress_into(payload, &mut output) {
        Ok(written) => {
            output.truncate(written);
            output
        }
        // Unreachable with a worst-case sized buffer.
        Err(_) => Vec::new(),
    }
}

/// Decompress a raw LZ4 block produced by [`pack`].
pub fn unpack(payload: &[u8], original_len: usize) -> Result<Vec<u8>> {
    if payload.is_empty() && original_len == 0 {
        return Ok(Vec::new());
    }

    decompress(payload, original_len).map_err(|e| XpakError::Parse {
        message: format!("Failed to decompress payload: {}", e),
        help: None,
    })
}
