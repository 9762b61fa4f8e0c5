//! Programmatic glTF generation for integration tests.
//!
//! Writes a small indexed plane as a `.gltf` file with a side `.bin`
//! buffer, the shape the converter consumes.

use gltf_json as json;
use json::validation::Checked::Valid;
use std::fs;
use std::path::{Path, PathBuf};

/// Plane vertex positions (two triangles).
const POSITIONS: [[f32; 3]; 4] = [
    [0.0, 0.0, 0.0],
    [1.0, 0.0, 0.0],
    [1.0, 1.0, 0.0],
    [0.0, 1.0, 0.0],
];

const INDICES: [u16; 6] = [0, 1, 2, 0, 2, 3];

/// Generate `plane.gltf` + `plane.bin` in `dir`, returning the `.gltf` path.
pub fn generate_plane_gltf(dir: &Path) -> PathBuf {
    let mut buffer = Vec::new();

    // Positions
    let pos_offset = buffer.len();
    for pos in &POSITIONS {
        for component in pos {
            buffer.extend_from_slice(&component.to_le_bytes());
        }
    }
    let pos_len = buffer.len() - pos_offset;

    // Indices
    let idx_offset = buffer.len();
    for index in &INDICES {
        buffer.extend_from_slice(&index.to_le_bytes());
    }
    let idx_len = buffer.len() - idx_offset;

    let buffer_views = vec![
        json::buffer::View {
            buffer: json::Index::new(0),
            byte_length: pos_len.into(),
            byte_offset: Some(pos_offset.into()),
            byte_stride: None,
            extensions: Default::default(),
            extras: Default::default(),
            name: None,
            target: Some(Valid(json::buffer::Target::ArrayBuffer)),
        },
        json::buffer::View {
            buffer: json::Index::new(0),
            byte_length: idx_len.into(),
            byte_offset: Some(idx_offset.into()),
            byte_stride: None,
            extensions: Default::default(),
            extras: Default::default(),
            name: None,
            target: Some(Valid(json::buffer::Target::ElementArrayBuffer)),
        },
    ];

    let accessors = vec![
        json::Accessor {
            buffer_view: Some(json::Index::new(0)),
            byte_offset: Some(0u64.into()),
            count: POSITIONS.len().into(),
            component_type: Valid(json::accessor::GenericComponentType(
                json::accessor::ComponentType::F32,
            )),
            extensions: Default::default(),
            extras: Default::default(),
            type_: Valid(json::accessor::Type::Vec3),
            min: Some(json::Value::Array(
                [0.0f32, 0.0, 0.0].into_iter().map(json::Value::from).collect(),
            )),
            max: Some(json::Value::Array(
                [1.0f32, 1.0, 0.0].into_iter().map(json::Value::from).collect(),
            )),
            name: None,
            normalized: false,
            sparse: None,
        },
        json::Accessor {
            buffer_view: Some(json::Index::new(1)),
            byte_offset: Some(0u64.into()),
            count: INDICES.len().into(),
            component_type: Valid(json::accessor::GenericComponentType(
                json::accessor::ComponentType::U16,
            )),
            extensions: Default::default(),
            extras: Default::default(),
            type_: Valid(json::accessor::Type::Scalar),
            min: None,
            max: None,
            name: None,
            normalized: false,
            sparse: None,
        },
    ];

    let mut attributes = std::collections::BTreeMap::new();
    attributes.insert(Valid(json::mesh::Semantic::Positions), json::Index::new(0));

    let meshes = vec![json::Mesh {
        extensions: Default::default(),
        extras: Default::default(),
        name: Some("Plane".to_string()),
        primitives: vec![json::mesh::Primitive {
            attributes,
            extensions: Default::default(),
            extras: Default::default(),
            indices: Some(json::Index::new(1)),
            material: None,
            mode: Valid(json::mesh::Mode::Triangles),
            targets: None,
        }],
        weights: None,
    }];

    let buffers = vec![json::Buffer {
        byte_length: (buffer.len() as u64).into(),
        extensions: Default::default(),
        extras: Default::default(),
        name: None,
        uri: Some("plane.bin".to_string()),
    }];

    let root = json::Root {
        accessors,
        animations: Vec::new(),
        asset: json::Asset {
            copyright: None,
            extensions: Default::default(),
            extras: Default::default(),
            generator: Some("atlasgen-test".to_string()),
            min_version: None,
            version: "2.0".to_string(),
        },
        buffers,
        buffer_views,
        cameras: Vec::new(),
        extensions: Default::default(),
        extras: Default::default(),
        extensions_required: Vec::new(),
        extensions_used: Vec::new(),
        images: Vec::new(),
        materials: Vec::new(),
        meshes,
        nodes: Vec::new(),
        samplers: Vec::new(),
        scene: None,
        scenes: Vec::new(),
        skins: Vec::new(),
        textures: Vec::new(),
    };

    fs::write(dir.join("plane.bin"), &buffer).expect("Failed to write plane.bin");

    let gltf_path = dir.join("plane.gltf");
    let text = serde_json::to_string_pretty(&root).expect("Failed to serialize test glTF");
    fs::write(&gltf_path, text).expect("Failed to write plane.gltf");
    gltf_path
}
