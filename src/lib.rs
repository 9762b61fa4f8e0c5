//! atlasgen library
//!
//! Loads glTF 2.0 scene descriptions and rewrites them as textual glTF, as
//! the front half of a lightmap UV-atlas pipeline. The writer is streaming
//! and intentionally partial: meshes, primitives and asset metadata are
//! serialized; the remaining top-level categories are emitted as empty
//! placeholder blocks until their serializers land.

pub mod document;
pub mod import;
pub mod writer;

// Re-export key types for downstream tools
pub use document::{Asset, Document, Entity, Mesh, Primitive, PrimitiveMode, VertexAttribute};
pub use import::load_gltf;
pub use writer::{write_gltf, write_gltf_file, Collection, WriteError, WriteOptions};
