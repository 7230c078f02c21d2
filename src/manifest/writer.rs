//! XML manifest serialization.
//!
//! Writes a [`Manifest`] back to the on-disk format with stable 4-space
//! indentation, so an editor-initiated save produces the same layout every
//! time.

use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::error::{Result, XpakError};

use super::Manifest;

/// Serialize a manifest to an XML string.
pub fn manifest_to_xml(manifest: &Manifest) -> Result<String> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 4);

    write_event(&mut writer, Event::Start(BytesStart::new("Manifest")))?;

    write_text_element(
        &mut writer,
        "OutputDir",
        &manifest.output_dir.to_string_lossy(),
    )?;
    write_text_element(
        &mut writer,
        "Compress",
        if manifest.compress { "true" } else { "false" },
    )?;

    write_event(&mut writer, Event::Start(BytesStart::new("Content")))?;
    for asset in &manifest.assets {
        let mut open = BytesStart::new("Asset");
        open.push_attribute(("name", asset.name.as_str()));
        write_event(&mut writer, Event::Start(open))?;

        write_text_element(&mut writer, "Type", asset.kind.as_str())?;
        write_text_element(&mut writer, "Build", &asset.source)?;

        write_event(&mut writer, Event::End(BytesEnd::new("Asset")))?;
    }
    write_event(&mut writer, Event::End(BytesEnd::new("Content")))?;

    write_event(&mut writer, Event::End(BytesEnd::new("Manifest")))?;

    let bytes = writer.into_inner();
    String::from_utf8(bytes).map_err(|e| XpakError::Parse {
        message: format!("Serialized manifest is not valid UTF-8: {}", e),
        help: None,
    })
}

fn write_text_element<W: std::io::Write>(
    writer: &mut Writer<W>,
    name: &str,
    text: &str,
) -> Result<()> {
    write_event(writer, Event::Start(BytesStart::new(name)))?;
    write_event(writer, Event::Text(BytesText::new(text)))?;
    write_event(writer, Event::End(BytesEnd::new(name)))
}

fn write_event<W: std::io::Write>(writer: &mut Writer<W>, event: Event<'_>) -> Result<()> {
    writer.write_event(event).map_err(|e| XpakError::Parse {
        message: format!("Failed to serialize manifest: {}", e),
        help: None,
    })
}
