use anyhow::Result;
use planarmap::{locate_point, read_serialized_graph};

pub fn run(_cli: &crate::cli::Cli, args: &crate::cli::LocateArgs) -> Result<()> {
    let graph = read_serialized_graph(&args.graph)?;
    println!("{}", locate_point(&graph, [args.x, args.y])?);

    Ok(())
}
