//! Validate command implementation.
//!
//! Parses a manifest and prints what it declares, without building anything.
//! A manifest that parses is a manifest the build will accept.

use std::path::PathBuf;

use clap::Args;

use crate::error::Result;
use crate::manifest::Manifest;

/// Parse a manifest and print what it declares
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Path to the manifest file (defaults to ./Content.manifest)
    #[arg(long, short)]
    pub manifest: Option<PathBuf>,
}

pub fn run(args: ValidateArgs) -> Result<()> {
    let path = super::resolve_manifest_path(args.manifest)?;
    let manifest = Manifest::load(&path)?;

    println!("Manifest: {}", manifest.display_name);
    println!("OutputDir: {}", manifest.output_dir.display());
    println!("Compress: {}", manifest.compress);
    println!("Assets: {}", manifest.assets.len());
    for asset in &manifest.assets {
        println!("  {}", asset);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::XpakError;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_validate_accepts_valid_manifest() {
        let dir = tempdir().unwrap();
        let manifest_path = dir.path().join("Content.manifest");
        fs::write(
            &manifest_path,
            r#"<Manifest>
    <OutputDir>content</OutputDir>
    <Compress>true</Compress>
    <Content>
        <Asset name="a"><Type>Data</Type><Build>a.dat</Build></Asset>
    </Content>
</Manifest>"#,
        )
        .unwrap();

        run(ValidateArgs {
            manifest: Some(manifest_path),
        })
        .unwrap();
    }

    #[test]
    fn test_validate_rejects_unknown_asset_type() {
        let dir = tempdir().unwrap();
        let manifest_path = dir.path().join("Content.manifest");
        fs::write(
            &manifest_path,
            r#"<Manifest>
    <OutputDir>content</OutputDir>
    <Compress>false</Compress>
    <Content>
        <Asset name="f"><Type>Font</Type><Build>f.ttf</Build></Asset>
    </Content>
</Manifest>"#,
        )
        .unwrap();

        let err = run(ValidateArgs {
            manifest: Some(manifest_path),
        })
        .unwrap_err();
        assert!(matches!(err, XpakError::Parse { .. }));
    }
}
