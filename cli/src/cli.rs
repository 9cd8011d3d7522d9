use std::path::PathBuf;

/// Planar graph faces: build, locate and adjacency queries
#[derive(clap::Parser, Debug)]
#[command(name = "planarmap", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Discover the faces of a raw graph and write the serialized graph
    Build(BuildArgs),

    /// Name the face containing a point
    Locate(LocateArgs),

    /// List the faces sharing an edge with a face
    Neighbors(FaceArgs),

    /// Print breadth-first neighbor layers around a face as JSON
    Layers(FaceArgs),

    /// Print one "x,y x,y ..." outline per face
    Polylines(GraphArgs),
}

#[derive(clap::Args, Debug)]
pub struct BuildArgs {
    /// Raw graph JSON: { "vertices": [[x, y], ...], "edges": [[a, b], ...] }
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub input: PathBuf,

    /// Output file for the serialized graph, defaults to stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}

#[derive(clap::Args, Debug)]
pub struct LocateArgs {
    /// Serialized graph JSON, as written by `build`
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub graph: PathBuf,

    #[arg(allow_negative_numbers = true)]
    pub x: f64,

    #[arg(allow_negative_numbers = true)]
    pub y: f64,
}

#[derive(clap::Args, Debug)]
pub struct FaceArgs {
    /// Serialized graph JSON, as written by `build`
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub graph: PathBuf,

    /// Face index or name (e.g. 3, p3); falls back to face 0 when unknown
    #[arg(allow_hyphen_values = true)]
    pub face: String,
}

#[derive(clap::Args, Debug)]
pub struct GraphArgs {
    /// Serialized graph JSON, as written by `build`
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub graph: PathBuf,
}
