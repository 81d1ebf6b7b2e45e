//! flyout-replay - run characterization fixtures through the position solver.

mod cli;
mod fixture;
mod logging;

use anyhow::{Context, Result};
use clap::Parser;
use flyout_kernel::PositionConfig;

use crate::cli::Args;
use crate::fixture::{load_cases, replay};
use crate::logging::setup_logging;

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(args.verbose);

    let config = match &args.config {
        Some(path) => PositionConfig::load(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => PositionConfig::default(),
    };

    let cases = load_cases(&args.fixtures)?;
    tracing::info!(cases = cases.len(), "replaying fixtures");

    let outcomes = replay(&config, &cases);
    for outcome in &outcomes {
        println!("{}", serde_json::to_string(&outcome.result)?);
    }

    if args.check {
        let failed: Vec<&str> = outcomes
            .iter()
            .filter(|o| o.matches == Some(false))
            .map(|o| o.result.name.as_str())
            .collect();
        if !failed.is_empty() {
            anyhow::bail!("{} case(s) diverged: {}", failed.len(), failed.join(", "));
        }
    }

    Ok(())
}
