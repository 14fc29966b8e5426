use std::error::Error;
use std::path::PathBuf;

use chrono::NaiveDateTime;
use clap::Args;
use serde::Serialize;
use tvh_graph::{network_from_path, summarize, HypergraphSummary};
use tvh_paths::Traversal;

use crate::write_json;

#[derive(Args, Debug)]
pub struct StatsArgs {
    /// Network document (`.json` or `.json.bz2`).
    #[arg(long)]
    pub network: PathBuf,
    /// Report destination; stdout when omitted.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct StatsReport {
    #[serde(flatten)]
    summary: HypergraphSummary<NaiveDateTime>,
    cheaper_traversal: Traversal,
}

pub fn run(args: &StatsArgs) -> Result<(), Box<dyn Error>> {
    let network = network_from_path(&args.network)?;
    let report = StatsReport {
        summary: summarize(network.hypergraph()),
        cheaper_traversal: Traversal::cheaper_for(&network),
    };
    write_json(args.out.as_deref(), &report)
}
