use anyhow::Result;
use planarmap::{face_polylines, read_serialized_graph};

pub fn run(_cli: &crate::cli::Cli, args: &crate::cli::GraphArgs) -> Result<()> {
    let graph = read_serialized_graph(&args.graph)?;
    for line in face_polylines(&graph)? {
        println!("{line}");
    }

    Ok(())
}
