//! Manifest model: the parsed, in-memory representation of a content
//! manifest file.
//!
//! A manifest names an output directory, a compression flag, and an ordered
//! list of assets. All relative paths in it resolve against the directory
//! containing the manifest file. The model is read-only after parsing; the
//! only way back out is [`Manifest::save`].

mod parser;
mod writer;

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::{Result, XpakError};

pub use parser::parse_manifest;
pub use writer::manifest_to_xml;

/// The kind of asset, deciding which conversion an asset goes through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetKind {
    Texture,
    Audio,
    Data,
}

impl AssetKind {
    /// Parse a manifest `Type` value. Unknown values are a parse error at
    /// the call site, not a silent fallback.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Texture" => Some(AssetKind::Texture),
            "Audio" => Some(AssetKind::Audio),
            "Data" => Some(AssetKind::Data),
            _ => None,
        }
    }

    /// The manifest spelling of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetKind::Texture => "Texture",
            AssetKind::Audio => "Audio",
            AssetKind::Data => "Data",
        }
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single asset declaration.
///
/// `name` is both the asset's identity and its relative output path;
/// `source` is the source file path relative to the manifest's root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    pub name: String,
    pub kind: AssetKind,
    pub source: String,
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {}, Type: {}, Build: {}",
            self.name, self.kind, self.source
        )
    }
}

/// A parsed content manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    /// Display name, taken from the manifest file's name.
    pub display_name: String,

    /// Absolute directory containing the manifest file. All relative paths
    /// resolve against this.
    pub root_dir: PathBuf,

    /// Output directory for packed content, relative to `root_dir`.
    pub output_dir: PathBuf,

    /// Whether payloads are LZ4-compressed before writing.
    pub compress: bool,

    /// Assets in manifest order. Order drives build progress numbering.
    pub assets: Vec<Asset>,
}

impl Manifest {
    /// Load and parse a manifest file.
    ///
    /// The manifest's root directory is the canonicalized parent of `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let absolute = path.canonicalize().map_err(|e| XpakError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to locate manifest: {}", e),
        })?;
        let root_dir = absolute
            .parent()
            .map(|p| p.to_path_buf())
            .ok_or_else(|| XpakError::Io {
                path: absolute.clone(),
                message: "Manifest file has no parent directory".to_string(),
            })?;
        let display_name = absolute
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let content = std::fs::read_to_string(&absolute).map_err(|e| XpakError::Io {
            path: absolute.clone(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        parse_manifest(&content, display_name, root_dir)
    }

    /// Serialize the manifest back to its XML format at `path`.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let xml = manifest_to_xml(self)?;
        std::fs::write(path, xml).map_err(|e| XpakError::Write {
            path: path.to_path_buf(),
            message: format!("Failed to write manifest: {}", e),
        })
    }

    /// The absolute directory packed output is written to.
    pub fn content_dir(&self) -> PathBuf {
        self.root_dir.join(&self.output_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_kind_parse_known_values() {
        assert_eq!(AssetKind::parse("Texture"), Some(AssetKind::Texture));
        assert_eq!(AssetKind::parse("Audio"), Some(AssetKind::Audio));
        assert_eq!(AssetKind::parse("Data"), Some(AssetKind::Data));
    }

    #[test]
    fn test_asset_kind_parse_rejects_unknown() {
        assert_eq!(AssetKind::parse("Font"), None);
        assert_eq!(AssetKind::parse("texture"), None);
        assert_eq!(AssetKind::parse(""), None);
    }

    #[test]
    fn test_asset_kind_round_trips_through_str() {
        for kind in [AssetKind::Texture, AssetKind::Audio, AssetKind::Data] {
            assert_eq!(AssetKind::parse(kind.as_str()), Some(kind));
        }
    }

    #[test]
    fn test_asset_display() {
        let asset = Asset {
            name: "sprites/player".to_string(),
            kind: AssetKind::Texture,
            source: "art/player.png".to_string(),
        };
        assert_eq!(
            asset.to_string(),
            "Name: sprites/player, Type: Texture, Build: art/player.png"
        );
    }

    #[test]
    fn test_content_dir_joins_root_and_output() {
        let manifest = Manifest {
            display_name: "Content.manifest".to_string(),
            root_dir: PathBuf::from("/project"),
            output_dir: PathBuf::from("build/content"),
            compress: false,
            assets: vec![],
        };
        assert_eq!(manifest.content_dir(), PathBuf::from("/project/build/content"));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = Manifest::load("/nonexistent/Content.manifest").unwrap_err();
        assert!(matches!(err, XpakError::Io { .. }));
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Game.manifest");

        let manifest = Manifest {
            display_name: "Game.manifest".to_string(),
            root_dir: dir.path().canonicalize().unwrap(),
            output_dir: PathBuf::from("content"),
            compress: true,
            assets: vec![Asset {
                name: "sprites/player".to_string(),
                kind: AssetKind::Texture,
                source: "art/player.png".to_string(),
            }],
        };
        manifest.save(&path).unwrap();

        let loaded = Manifest::load(&path).unwrap();
        assert_eq!(loaded, manifest);
    }
}
