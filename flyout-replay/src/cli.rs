use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about = "Replay overlay positioning fixtures")]
pub struct Args {
    /// JSON file with an array of fixture cases
    pub fixtures: PathBuf,

    /// JSON position config (gap, edge margins, inset)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Fail when a case's `expected` coordinate differs from the solved one
    #[arg(long)]
    pub check: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}
