//! xpak - Game content manifest build pipeline
//!
//! A library for turning declarative asset manifests into packed binary
//! content: type-directed conversion, optional LZ4 compression, and a
//! deterministic output tree mirroring each asset's logical name.

pub mod cli;
pub mod compress;
pub mod error;
pub mod manifest;
pub mod output;
pub mod paths;
pub mod pipeline;
pub mod process;

pub use compress::{pack, unpack};
pub use error::{Result, XpakError};
pub use manifest::{manifest_to_xml, parse_manifest, Asset, AssetKind, Manifest};
pub use output::{BufferSink, ConsoleSink, LogSink};
pub use paths::split_segments;
pub use pipeline::{BuildReport, CleanReport, Pipeline};
pub use process::{convert, import_audio, import_data, import_texture};
