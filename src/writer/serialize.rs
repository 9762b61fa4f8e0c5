//! Per-entity serialization routines.
//!
//! Each routine knows the shape (keys, nesting) of its entity and defers all
//! separator and indentation bookkeeping to the write context.

use std::io::Write;

use super::context::{Collection, WriteContext, WriteError};
use crate::document::{Asset, Mesh, Primitive, PrimitiveMode};

pub(crate) fn write_asset<W: Write>(
    ctx: &mut WriteContext<W>,
    asset: &Asset,
) -> Result<(), WriteError> {
    ctx.begin_object(Some("asset"))?;
    ctx.str_prop("copyright", asset.copyright.as_deref())?;
    ctx.str_prop("generator", asset.generator.as_deref())?;
    ctx.str_prop("version", asset.version.as_deref())?;
    ctx.str_prop("minVersion", asset.min_version.as_deref())?;
    ctx.end()
}

pub(crate) fn write_mesh<W: Write>(
    ctx: &mut WriteContext<W>,
    mesh: &Mesh,
) -> Result<(), WriteError> {
    ctx.begin_object(None)?;
    ctx.str_prop("name", mesh.name.as_deref())?;
    ctx.begin_array(Some("primitives"))?;
    for primitive in &mesh.primitives {
        ctx.begin_object(None)?;
        write_primitive(ctx, primitive)?;
        ctx.end()?;
    }
    ctx.end()?;
    // Morph-target weights are not carried over.
    ctx.end()
}

pub(crate) fn write_primitive<W: Write>(
    ctx: &mut WriteContext<W>,
    primitive: &Primitive,
) -> Result<(), WriteError> {
    ctx.int_prop(
        "mode",
        primitive.mode.as_gl_enum(),
        PrimitiveMode::Triangles.as_gl_enum(),
    )?;
    ctx.index_prop("indices", primitive.indices, Collection::Accessors)?;
    ctx.index_prop("material", primitive.material, Collection::Materials)?;
    ctx.begin_object(Some("attributes"))?;
    for attribute in &primitive.attributes {
        ctx.index_prop(&attribute.semantic, Some(attribute.accessor), Collection::Accessors)?;
    }
    ctx.end()
    // Morph targets are not carried over.
}
