//! XML manifest parsing.
//!
//! Manifests look like:
//!
//! ```xml
//! <Manifest>
//!     <OutputDir>build/content</OutputDir>
//!     <Compress>true</Compress>
//!     <Content>
//!         <Asset name="sprites/player">
//!             <Type>Texture</Type>
//!             <Build>art/player.png</Build>
//!         </Asset>
//!     </Content>
//! </Manifest>
//! ```
//!
//! The root element's name is not checked (older manifests used
//! `<PakManifest>`), but `OutputDir`, `Compress` and `Content` must all be
//! present, and every `Asset` needs a `name` attribute plus `Type` and
//! `Build` children. Parsing is all-or-nothing: any missing field or unknown
//! `Type` value fails the whole parse.

use std::path::PathBuf;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::error::{Result, XpakError};
use crate::paths::split_segments;

use super::{Asset, AssetKind, Manifest};

/// An `<Asset>` element being collected.
#[derive(Debug, Default)]
struct PendingAsset {
    name: Option<String>,
    kind: Option<String>,
    source: Option<String>,
}

/// Parse manifest XML into a [`Manifest`].
///
/// `display_name` and `root_dir` come from the manifest file's own location;
/// [`Manifest::load`] fills them in.
pub fn parse_manifest(
    xml: &str,
    display_name: impl Into<String>,
    root_dir: impl Into<PathBuf>,
) -> Result<Manifest> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut stack: Vec<String> = Vec::new();
    let mut saw_root = false;
    let mut saw_compress = false;
    let mut saw_content = false;
    let mut output_dir: Option<String> = None;
    let mut compress_text: Option<String> = None;
    let mut pending: Option<PendingAsset> = None;
    let mut assets: Vec<Asset> = Vec::new();

    loop {
        let event = reader.read_event().map_err(|e| XpakError::Parse {
            message: format!(
                "Invalid manifest XML at position {}: {}",
                reader.buffer_position(),
                e
            ),
            help: None,
        })?;

        match event {
            Event::Start(element) => {
                let name = element_name(&element)?;
                note_element(&stack, &name, &mut saw_compress, &mut saw_content);
                if is_asset_context(&stack, &name) {
                    pending = Some(begin_asset(&element)?);
                }
                if stack.is_empty() {
                    saw_root = true;
                }
                stack.push(name);
            }
            Event::Empty(element) => {
                let name = element_name(&element)?;
                note_element(&stack, &name, &mut saw_compress, &mut saw_content);
                if is_asset_context(&stack, &name) {
                    assets.push(finish_asset(begin_asset(&element)?)?);
                }
            }
            Event::Text(text) => {
                let value = text
                    .unescape()
                    .map_err(|e| XpakError::Parse {
                        message: format!("Invalid text content in manifest: {}", e),
                        help: None,
                    })?
                    .into_owned();
                assign_text(&stack, value, &mut output_dir, &mut compress_text, &mut pending);
            }
            Event::End(_) => {
                let closed = stack.pop();
                if closed.as_deref() == Some("Asset") && stack.len() == 2 {
                    if let Some(partial) = pending.take() {
                        assets.push(finish_asset(partial)?);
                    }
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !saw_root {
        return Err(XpakError::Parse {
            message: "Manifest file has no root element".to_string(),
            help: None,
        });
    }
    let output_dir = match output_dir {
        Some(dir) if !dir.is_empty() => dir,
        _ => {
            return Err(XpakError::Parse {
                message: "Manifest is missing a non-empty <OutputDir>".to_string(),
                help: None,
            })
        }
    };
    if !saw_compress {
        return Err(XpakError::Parse {
            message: "Manifest is missing <Compress>".to_string(),
            help: None,
        });
    }
    if !saw_content {
        return Err(XpakError::Parse {
            message: "Manifest is missing <Content>".to_string(),
            help: None,
        });
    }

    let compress = compress_text
        .map(|text| text.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    Ok(Manifest {
        display_name: display_name.into(),
        root_dir: root_dir.into(),
        output_dir: PathBuf::from(output_dir),
        compress,
        assets,
    })
}

fn element_name(element: &BytesStart<'_>) -> Result<String> {
    std::str::from_utf8(element.name().as_ref())
        .map(|name| name.to_string())
        .map_err(|_| XpakError::Parse {
            message: "Manifest contains a non-UTF-8 element name".to_string(),
            help: None,
        })
}

/// True when `name` opens an `<Asset>` directly under `<Content>`.
fn is_asset_context(stack: &[String], name: &str) -> bool {
    stack.len() == 2 && stack[1] == "Content" && name == "Asset"
}

fn note_element(stack: &[String], name: &str, saw_compress: &mut bool, saw_content: &mut bool) {
    if stack.len() == 1 {
        match name {
            "Compress" => *saw_compress = true,
            "Content" => *saw_content = true,
            _ => {}
        }
    }
}

fn assign_text(
    stack: &[String],
    value: String,
    output_dir: &mut Option<String>,
    compress_text: &mut Option<String>,
    pending: &mut Option<PendingAsset>,
) {
    match stack.len() {
        2 => match stack[1].as_str() {
            "OutputDir" => *output_dir = Some(value),
            "Compress" => *compress_text = Some(value),
            _ => {}
        },
        4 if stack[2] == "Asset" => {
            if let Some(partial) = pending.as_mut() {
                match stack[3].as_str() {
                    "Type" => partial.kind = Some(value),
                    "Build" => partial.source = Some(value),
                    _ => {}
                }
            }
        }
        _ => {}
    }
}

/// Pull the `name` attribute off an opening `<Asset>` tag.
fn begin_asset(element: &BytesStart<'_>) -> Result<PendingAsset> {
    let mut partial = PendingAsset::default();
    for attribute in element.attributes() {
        let attribute = attribute.map_err(|e| XpakError::Parse {
            message: format!("Invalid attribute on <Asset>: {}", e),
            help: None,
        })?;
        if attribute.key.as_ref() == b"name" {
            let value = attribute.unescape_value().map_err(|e| XpakError::Parse {
                message: format!("Invalid <Asset> name attribute: {}", e),
                help: None,
            })?;
            partial.name = Some(value.into_owned());
        }
    }
    Ok(partial)
}

fn finish_asset(partial: PendingAsset) -> Result<Asset> {
    let name = partial.name.ok_or_else(|| XpakError::Parse {
        message: "An <Asset> is missing its name attribute".to_string(),
        help: Some("Declare assets as <Asset name=\"logical/path\">".to_string()),
    })?;
    if split_segments(&name).is_empty() {
        return Err(XpakError::Parse {
            message: format!("Asset name \"{}\" has no usable path segments", name),
            help: None,
        });
    }
    let kind_text = partial.kind.ok_or_else(|| XpakError::Parse {
        message: format!("Asset \"{}\" is missing <Type>", name),
        help: None,
    })?;
    let kind = AssetKind::parse(&kind_text).ok_or_else(|| XpakError::Parse {
        message: format!("Unknown asset type \"{}\" for asset \"{}\"", kind_text, name),
        help: Some("Expected Texture, Audio or Data".to_string()),
    })?;
    let source = partial.source.ok_or_else(|| XpakError::Parse {
        message: format!("Asset \"{}\" is missing <Build>", name),
        help: None,
    })?;

    Ok(Asset { name, kind, source })
}
