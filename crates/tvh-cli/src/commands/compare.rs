use std::error::Error;
use std::time::Instant;

use clap::Args;
use serde::Serialize;
use tvh_core::{DistanceType, ErrorInfo, TvhError};
use tvh_graph::{network_from_path, CommunicationNetwork};
use tvh_paths::{minimal_paths, Traversal, TraversalReport, TraversalStats};

use super::QueryArgs;
use crate::config::{Query, QueryConfig};
use crate::write_json;

#[derive(Args, Debug)]
pub struct CompareArgs {
    #[command(flatten)]
    pub query: QueryArgs,
    /// Timed runs per traversal; the report carries their mean.
    #[arg(long, default_value_t = 20)]
    pub repeat: u32,
}

#[derive(Debug, Serialize)]
struct Timed {
    mean_seconds: f64,
    stats: TraversalStats,
}

#[derive(Debug, Serialize)]
struct CompareReport {
    source: String,
    distance: DistanceType,
    reached: usize,
    repeat: u32,
    estimated_cheaper: Traversal,
    faster: Traversal,
    vertices: Timed,
    hyperedges: Timed,
}

type Report = TraversalReport<String, chrono::NaiveDateTime>;

pub fn run(args: &CompareArgs) -> Result<(), Box<dyn Error>> {
    let query = args.query.query(QueryConfig::default())?;
    let network = network_from_path(&query.network)?;
    let repeat = args.repeat.max(1);

    let (by_vertices, by_hyperedges) = rayon::join(
        || traverse(&network, &query, Traversal::Vertices),
        || traverse(&network, &query, Traversal::Hyperedges),
    );
    let (by_vertices, by_hyperedges) = (by_vertices?, by_hyperedges?);

    if by_vertices.distances != by_hyperedges.distances {
        let differing = by_vertices
            .distances
            .keys()
            .chain(by_hyperedges.distances.keys())
            .filter(|participant| {
                by_vertices.distances.get(*participant) != by_hyperedges.distances.get(*participant)
            })
            .count();
        return Err(TvhError::Graph(
            ErrorInfo::new("traversal-mismatch", "traversals returned different distances")
                .with_context("source", query.source.clone())
                .with_context("differing", differing.to_string()),
        )
        .into());
    }

    // Timed one traversal at a time so neither competes with the other.
    let vertices = Timed {
        mean_seconds: mean_seconds(&network, &query, Traversal::Vertices, repeat)?,
        stats: by_vertices.stats,
    };
    let hyperedges = Timed {
        mean_seconds: mean_seconds(&network, &query, Traversal::Hyperedges, repeat)?,
        stats: by_hyperedges.stats,
    };
    let faster = if hyperedges.mean_seconds < vertices.mean_seconds {
        Traversal::Hyperedges
    } else {
        Traversal::Vertices
    };
    tracing::info!(
        vertices = vertices.mean_seconds,
        hyperedges = hyperedges.mean_seconds,
        repeat,
        %faster,
        "traversals agree"
    );
    let report = CompareReport {
        source: query.source.clone(),
        distance: query.distance,
        reached: by_vertices.distances.len(),
        repeat,
        estimated_cheaper: Traversal::cheaper_for(&network),
        faster,
        vertices,
        hyperedges,
    };
    write_json(query.output.as_deref(), &report)
}

fn traverse(
    network: &CommunicationNetwork,
    query: &Query,
    traversal: Traversal,
) -> Result<Report, TvhError> {
    minimal_paths(
        network,
        &query.source,
        query.distance,
        query.min_timing,
        traversal,
    )
}

fn mean_seconds(
    network: &CommunicationNetwork,
    query: &Query,
    traversal: Traversal,
    repeat: u32,
) -> Result<f64, TvhError> {
    let started = Instant::now();
    for _ in 0..repeat {
        traverse(network, query, traversal)?;
    }
    Ok(started.elapsed().as_secs_f64() / f64::from(repeat))
}
