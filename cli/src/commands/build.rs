use anyhow::{Context, Result};
use planarmap::{build, read_raw_graph, write_serialized_graph};

pub fn run(cli: &crate::cli::Cli, args: &crate::cli::BuildArgs) -> Result<()> {
    let raw = read_raw_graph(&args.input)?;
    let graph = build(&raw)?;

    match &args.output {
        Some(path) => {
            write_serialized_graph(path, &graph)?;
            if cli.verbose > 0 {
                eprintln!("[build] wrote {}", path.display());
            }
        }
        None => {
            let json = serde_json::to_string_pretty(&graph).context("Failed to serialize graph")?;
            println!("{json}");
        }
    }
    eprintln!("[build] {} faces", graph.faces.len());

    Ok(())
}
