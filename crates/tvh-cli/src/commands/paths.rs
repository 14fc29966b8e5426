use std::collections::BTreeMap;
use std::error::Error;

use clap::Args;
use serde::Serialize;
use serde_json::Value;
use tvh_core::DistanceType;
use tvh_graph::network_from_path;
use tvh_paths::{minimal_paths, Traversal, TraversalStats};

use super::QueryArgs;
use crate::config::QueryConfig;
use crate::render::{distance_table, timestamp};
use crate::write_json;

#[derive(Args, Debug)]
pub struct PathsArgs {
    #[command(flatten)]
    pub query: QueryArgs,
    /// Frontier strategy: vertices, hyperedges or auto.
    #[arg(long)]
    pub traversal: Option<Traversal>,
}

#[derive(Debug, Serialize)]
struct PathsReport {
    source: String,
    distance: DistanceType,
    #[serde(skip_serializing_if = "Option::is_none")]
    min_timing: Option<String>,
    traversal: Traversal,
    stats: TraversalStats,
    reached: usize,
    distances: BTreeMap<String, Value>,
}

pub fn run(args: &PathsArgs) -> Result<(), Box<dyn Error>> {
    let query = args.query.query(QueryConfig {
        traversal: args.traversal,
        ..QueryConfig::default()
    })?;
    let network = network_from_path(&query.network)?;
    let report = minimal_paths(
        &network,
        &query.source,
        query.distance,
        query.min_timing,
        query.traversal,
    )?;
    tracing::info!(
        source = %query.source,
        traversal = %report.traversal,
        reached = report.distances.len(),
        "computed minimal paths"
    );
    let output = PathsReport {
        source: query.source,
        distance: query.distance,
        min_timing: query.min_timing.as_ref().map(timestamp),
        traversal: report.traversal,
        stats: report.stats,
        reached: report.distances.len(),
        distances: distance_table(&report.distances),
    };
    write_json(query.output.as_deref(), &output)
}
