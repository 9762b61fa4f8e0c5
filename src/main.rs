//! atlasgen - glTF lightmap-atlas preparation tool
//!
//! Consumes a glTF 2.0 file and produces a new glTF file as the front half
//! of a lightmap-baking pipeline. The mesh topology in the output will not
//! necessarily match the input once atlas generation lands, since new
//! vertices might be inserted into the geometry.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;

use atlasgen::writer::WriteOptions;
use atlasgen::{import, writer};

const LICENSE: &str = "\
atlasgen is distributed under the MIT License.

Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the \"Software\"), to
deal in the Software without restriction, including without limitation the
rights to use, copy, modify, merge, publish, distribute, sublicense, and/or
sell copies of the Software, subject to the conditions of the MIT License.

THE SOFTWARE IS PROVIDED \"AS IS\", WITHOUT WARRANTY OF ANY KIND.";

#[derive(Parser)]
#[command(name = "atlasgen")]
#[command(about = "glTF lightmap-atlas preparation tool")]
#[command(version)]
struct Cli {
    /// Input glTF file, or a directory containing one
    #[arg(required_unless_present = "license")]
    input: Option<PathBuf>,

    /// Output glTF file
    #[arg(required_unless_present = "license")]
    output: Option<PathBuf>,

    /// Discard all textures from the original model
    #[arg(short, long)]
    discard: bool,

    /// Print copyright and license information
    #[arg(short = 'L', long)]
    license: bool,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    if cli.license {
        println!("{LICENSE}");
        return Ok(());
    }

    let (input, output) = match (cli.input, cli.output) {
        (Some(input), Some(output)) => (input, output),
        _ => bail!("input and output paths are required"),
    };

    let input = resolve_input(input)?;
    if extension(&input) != Some("gltf") || extension(&output) != Some("gltf") {
        bail!("File extension must be gltf.");
    }

    let document = import::load_gltf(&input)?;

    let options = WriteOptions {
        discard_textures: cli.discard,
        ..WriteOptions::default()
    };
    writer::write_gltf_file(&output, &document, &options)?;

    tracing::info!("Generated {:?}", output);
    Ok(())
}

/// Resolve the input path: plain files pass through, directories are
/// scanned for their first `.gltf` entry.
fn resolve_input(path: PathBuf) -> Result<PathBuf> {
    if !path.exists() {
        bail!("{:?} not found", path);
    }
    if !path.is_dir() {
        return Ok(path);
    }

    let entries =
        fs::read_dir(&path).with_context(|| format!("Failed to read directory: {:?}", path))?;
    for entry in entries {
        let candidate = entry?.path();
        if extension(&candidate) == Some("gltf") {
            tracing::info!("Found {:?}", candidate.file_name().unwrap_or_default());
            return Ok(candidate);
        }
    }
    bail!("no glTF file found in {:?}", path)
}

fn extension(path: &Path) -> Option<&str> {
    path.extension().and_then(|ext| ext.to_str())
}
