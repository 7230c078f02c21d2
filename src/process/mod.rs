//! Per-type asset conversion.
//!
//! Each [`AssetKind`] has exactly one conversion: textures become a raw
//! interleaved RGBA8 pixel dump, audio becomes the first PCM frame of the
//! source waveform, and data passes through verbatim. Conversion failure is
//! recoverable per asset: the failure is reported to the log sink and the
//! asset's payload is empty; the build carries on.

mod audio;
mod data;
mod texture;

use std::path::Path;

use crate::error::Result;
use crate::manifest::AssetKind;
use crate::output::LogSink;

pub use audio::import_audio;
pub use data::import_data;
pub use texture::import_texture;

/// Convert a source file to its canonical payload for `kind`.
///
/// Never fails: a conversion error is logged against the source file and an
/// empty payload is returned in its place.
pub fn convert(kind: AssetKind, source: &Path, sink: &mut dyn LogSink) -> Vec<u8> {
    let converted: Result<Vec<u8>> = match kind {
        AssetKind::Texture => import_texture(source),
        AssetKind::Audio => import_audio(source),
        AssetKind::Data => import_data(source),
    };

    match converted {
        Ok(payload) => payload,
        Err(e) => {
            sink.error(&e.to_string());
            Vec::new()
        }
    }
}
