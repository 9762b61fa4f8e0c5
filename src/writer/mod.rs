//! Streaming glTF document writer.
//!
//! Serializes a [`Document`] as textual glTF in a single top-to-bottom pass:
//! the driver opens the root, emits the asset block and the meshes, then
//! closes out every remaining top-level category as an empty placeholder
//! block. The output is well-formed JSON but intentionally partial glTF;
//! see DESIGN.md for the recorded coverage limitations.

mod context;
mod serialize;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::Context;

pub use context::{Collection, WriteError};
use context::{RefTables, WriteContext};
use serialize::{write_asset, write_mesh};

use crate::document::Document;

/// Top-level categories emitted as empty placeholder blocks. Serialization
/// for these has not landed; emitting the empty block keeps the overall
/// document shape stable.
const PLACEHOLDER_CATEGORIES: [&str; 13] = [
    "accessors",
    "bufferViews",
    "buffers",
    "materials",
    "images",
    "textures",
    "samplers",
    "skins",
    "cameras",
    "nodes",
    "scenes",
    "scene",
    "animations",
];

/// Writer configuration, passed explicitly into the document driver.
#[derive(Debug, Clone, Default)]
pub struct WriteOptions {
    /// Drop all textures from the output deliberately. Textures are not
    /// serialized either way; this silences the warning about them.
    pub discard_textures: bool,
    /// Emit an (empty) top-level `extensions` block. Not exposed on the
    /// CLI; reserved until extension serialization lands.
    pub extensions: bool,
}

/// Serialize `doc` to `sink` in one pass.
///
/// The document is only read; concurrent writes of the same document to
/// different sinks are safe. Errors are terminal: a failed write means no
/// usable output was produced.
pub fn write_gltf<W: Write>(
    sink: W,
    doc: &Document,
    options: &WriteOptions,
) -> Result<(), WriteError> {
    if !doc.textures.is_empty() && !options.discard_textures {
        let names: Vec<&str> = doc
            .textures
            .iter()
            .map(|texture| texture.name.as_deref().unwrap_or("<unnamed>"))
            .collect();
        tracing::warn!("textures {:?} are not carried to the output", names);
    }

    let mut ctx = WriteContext::new(sink, RefTables::new(doc));
    ctx.begin_object(None)?;

    if !doc.asset.is_empty() {
        write_asset(&mut ctx, &doc.asset)?;
    }

    ctx.begin_array(Some("meshes"))?;
    for mesh in &doc.meshes {
        write_mesh(&mut ctx, mesh)?;
    }
    ctx.end()?;

    for category in PLACEHOLDER_CATEGORIES {
        ctx.begin_object(Some(category))?;
        ctx.end()?;
    }

    if options.extensions {
        ctx.begin_object(Some("extensions"))?;
        ctx.end()?;
    }

    ctx.end()?;
    ctx.finish()
}

/// Serialize `doc` to a file at `path`. The file is created up front and
/// released on every exit path; a write failure leaves no usable output.
pub fn write_gltf_file(path: &Path, doc: &Document, options: &WriteOptions) -> anyhow::Result<()> {
    let file =
        File::create(path).with_context(|| format!("Failed to create output: {:?}", path))?;
    let mut writer = BufWriter::new(file);
    write_gltf(&mut writer, doc, options)
        .with_context(|| format!("Failed to write glTF: {:?}", path))?;
    writer
        .flush()
        .with_context(|| format!("Failed to flush output: {:?}", path))?;
    Ok(())
}
