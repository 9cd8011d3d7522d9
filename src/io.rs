use std::{fs::File, io::{BufReader, BufWriter, Write}, path::Path};

use anyhow::{Context, Result};
use facegraph::{RawGraph, SerializedGraph};
use serde::de::DeserializeOwned;

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let file = File::open(path)
        .with_context(|| format!("Failed to read JSON file: {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse JSON file: {}", path.display()))
}

/// Reads `{ "vertices": [[x, y], ...], "edges": [[a, b], ...] }` from `path`.
pub fn read_raw_graph(path: &Path) -> Result<RawGraph> {
    read_json(path)
}

/// Reads a serialized graph (vertices, half-edges and faces) from `path`.
/// A raw graph has no `faces` key and is rejected.
pub fn read_serialized_graph(path: &Path) -> Result<SerializedGraph> {
    read_json(path)
}

/// Writes `graph` to `path` as pretty-printed JSON.
pub fn write_serialized_graph(path: &Path, graph: &SerializedGraph) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, graph)
        .with_context(|| format!("Failed to write graph to {}", path.display()))?;
    writer.flush()?;
    Ok(())
}
