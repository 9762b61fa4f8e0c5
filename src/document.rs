//! In-memory glTF scene description.
//!
//! The writer consumes this graph read-only. Cross-entity references are
//! stored as 0-based positions into the owning [`Document`] collection,
//! assigned by the loader when the graph is built; `None` means "no
//! relationship" and is distinct from a valid index 0. Collection order is
//! stable for the lifetime of the value.

/// Top-level glTF asset metadata. All four fields are optional free text;
/// an empty field is treated the same as an absent one.
#[derive(Debug, Clone, Default)]
pub struct Asset {
    pub copyright: Option<String>,
    pub generator: Option<String>,
    pub version: Option<String>,
    pub min_version: Option<String>,
}

impl Asset {
    /// True when every field is absent or empty. An empty asset block is
    /// omitted from the output entirely.
    pub fn is_empty(&self) -> bool {
        fn blank(field: &Option<String>) -> bool {
            field.as_deref().is_none_or(str::is_empty)
        }
        blank(&self.copyright)
            && blank(&self.generator)
            && blank(&self.version)
            && blank(&self.min_version)
    }
}

/// Primitive topology. Values mirror the glTF `mode` enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PrimitiveMode {
    Points,
    Lines,
    LineLoop,
    LineStrip,
    #[default]
    Triangles,
    TriangleStrip,
    TriangleFan,
}

impl PrimitiveMode {
    /// The integer written to a primitive's `mode` property.
    pub const fn as_gl_enum(self) -> u32 {
        match self {
            Self::Points => 0,
            Self::Lines => 1,
            Self::LineLoop => 2,
            Self::LineStrip => 3,
            Self::Triangles => 4,
            Self::TriangleStrip => 5,
            Self::TriangleFan => 6,
        }
    }
}

/// One vertex attribute of a primitive: a semantic name (`POSITION`,
/// `TEXCOORD_0`, ...) paired with an accessor reference.
#[derive(Debug, Clone)]
pub struct VertexAttribute {
    pub semantic: String,
    pub accessor: usize,
}

/// A single drawable primitive of a [`Mesh`].
#[derive(Debug, Clone, Default)]
pub struct Primitive {
    pub mode: PrimitiveMode,
    /// Index-buffer accessor, when the primitive is indexed.
    pub indices: Option<usize>,
    /// Material reference, when one is assigned.
    pub material: Option<usize>,
    /// Attributes in deterministic source order.
    pub attributes: Vec<VertexAttribute>,
}

/// A named group of primitives.
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    pub name: Option<String>,
    pub primitives: Vec<Primitive>,
}

/// Opaque entry in one of the document's top-level collections. Only its
/// position within the collection matters to the writer; the name is kept
/// for diagnostics.
#[derive(Debug, Clone, Default)]
pub struct Entity {
    pub name: Option<String>,
}

/// A parsed glTF scene, reduced to what the writer consumes.
#[derive(Debug, Clone, Default)]
pub struct Document {
    pub asset: Asset,
    pub meshes: Vec<Mesh>,
    pub accessors: Vec<Entity>,
    pub materials: Vec<Entity>,
    pub textures: Vec<Entity>,
}
