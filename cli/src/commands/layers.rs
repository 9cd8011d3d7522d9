use anyhow::Result;
use planarmap::{face_neighbor_layers, read_serialized_graph, FaceSelector};

pub fn run(_cli: &crate::cli::Cli, args: &crate::cli::FaceArgs) -> Result<()> {
    let graph = read_serialized_graph(&args.graph)?;
    let layers = face_neighbor_layers(&graph, FaceSelector::from(args.face.as_str()))?;

    println!("{}", serde_json::to_string(&layers)?);

    Ok(())
}
