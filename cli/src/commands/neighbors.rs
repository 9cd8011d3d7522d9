use anyhow::Result;
use planarmap::{face_neighbors, read_serialized_graph, FaceSelector};

pub fn run(_cli: &crate::cli::Cli, args: &crate::cli::FaceArgs) -> Result<()> {
    let graph = read_serialized_graph(&args.graph)?;
    let result = face_neighbors(&graph, FaceSelector::from(args.face.as_str()))?;

    println!("{}: {}", result.face, result.neighbors.join(" "));

    Ok(())
}
