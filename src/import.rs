//! glTF import (.gltf -> [`Document`]).
//!
//! Loading resolves external buffers up front, so a document that reaches
//! the writer is known to be complete. Conversion assigns every
//! cross-entity reference its stable 0-based position within the owning
//! collection; the writer validates those positions again before emitting.

use std::path::Path;

use anyhow::{Context, Result};
use gltf::json;
use json::validation::Checked;

use crate::document::{Asset, Document, Entity, Mesh, Primitive, PrimitiveMode, VertexAttribute};

/// Load a glTF file and reduce it to the writer's [`Document`] model.
pub fn load_gltf(input: &Path) -> Result<Document> {
    let (document, _buffers, _images) =
        gltf::import(input).with_context(|| format!("Failed to load glTF: {:?}", input))?;
    let root = document.into_json();
    let doc = convert_root(&root);

    tracing::debug!(
        "loaded {} mesh(es), {} accessor(s), {} material(s), {} texture(s)",
        doc.meshes.len(),
        doc.accessors.len(),
        doc.materials.len(),
        doc.textures.len()
    );

    Ok(doc)
}

fn convert_root(root: &json::Root) -> Document {
    Document {
        asset: Asset {
            copyright: root.asset.copyright.clone(),
            generator: root.asset.generator.clone(),
            version: Some(root.asset.version.clone()),
            min_version: root.asset.min_version.clone(),
        },
        meshes: root.meshes.iter().map(convert_mesh).collect(),
        accessors: root.accessors.iter().map(|a| named(&a.name)).collect(),
        materials: root.materials.iter().map(|m| named(&m.name)).collect(),
        textures: root.textures.iter().map(|t| named(&t.name)).collect(),
    }
}

fn named(name: &Option<String>) -> Entity {
    Entity { name: name.clone() }
}

fn convert_mesh(mesh: &json::Mesh) -> Mesh {
    if mesh.weights.is_some() {
        tracing::warn!(
            "mesh {:?}: morph-target weights are not carried to the output",
            mesh.name.as_deref().unwrap_or("<unnamed>")
        );
    }
    Mesh {
        name: mesh.name.clone(),
        primitives: mesh.primitives.iter().map(convert_primitive).collect(),
    }
}

fn convert_primitive(primitive: &json::mesh::Primitive) -> Primitive {
    if primitive.targets.is_some() {
        tracing::warn!("morph targets are not carried to the output");
    }

    let attributes = primitive
        .attributes
        .iter()
        .filter_map(|(semantic, accessor)| match semantic {
            Checked::Valid(semantic) => Some(VertexAttribute {
                semantic: semantic.to_string(),
                accessor: accessor.value(),
            }),
            Checked::Invalid => {
                tracing::warn!("skipping attribute with unrecognized semantic");
                None
            }
        })
        .collect();

    Primitive {
        mode: convert_mode(&primitive.mode),
        indices: primitive.indices.as_ref().map(|index| index.value()),
        material: primitive.material.as_ref().map(|index| index.value()),
        attributes,
    }
}

fn convert_mode(mode: &Checked<json::mesh::Mode>) -> PrimitiveMode {
    use json::mesh::Mode;
    match mode {
        Checked::Valid(mode) => match mode {
            Mode::Points => PrimitiveMode::Points,
            Mode::Lines => PrimitiveMode::Lines,
            Mode::LineLoop => PrimitiveMode::LineLoop,
            Mode::LineStrip => PrimitiveMode::LineStrip,
            Mode::Triangles => PrimitiveMode::Triangles,
            Mode::TriangleStrip => PrimitiveMode::TriangleStrip,
            Mode::TriangleFan => PrimitiveMode::TriangleFan,
        },
        Checked::Invalid => {
            tracing::warn!("unrecognized primitive mode, assuming triangles");
            PrimitiveMode::default()
        }
    }
}
