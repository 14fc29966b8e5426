use std::error::Error;
use std::path::PathBuf;

use chrono::TimeDelta;
use clap::Args;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tvh_graph::{parse_timestamp, summarize, write_network, RandomTopology};

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Destination document; compressed when it ends in `.bz2`.
    #[arg(long)]
    pub out: PathBuf,
    /// Number of participants to draw from.
    #[arg(long, default_value_t = 1_000)]
    pub vertices: usize,
    /// Number of channels to generate.
    #[arg(long, default_value_t = 5_000)]
    pub hyperedges: usize,
    /// Largest number of participants per channel.
    #[arg(long, default_value_t = 8)]
    pub max_arity: usize,
    /// Channels close on a whole hour within this many hours of the epoch.
    #[arg(long, default_value_t = 24 * 365)]
    pub horizon_hours: i64,
    /// First instant channels may close at (ISO-8601).
    #[arg(long, default_value = "2023-01-01T00:00:00")]
    pub epoch: String,
    /// Seed for the deterministic generator.
    #[arg(long, default_value_t = 0)]
    pub seed: u64,
}

pub fn run(args: &GenerateArgs) -> Result<(), Box<dyn Error>> {
    let topology = RandomTopology {
        vertices: args.vertices,
        hyperedges: args.hyperedges,
        max_arity: args.max_arity,
        horizon: args.horizon_hours,
    };
    let epoch = parse_timestamp(&args.epoch)?;
    let mut rng = StdRng::seed_from_u64(args.seed);
    let network = topology.generate_network(&mut rng, epoch, TimeDelta::hours(1))?;
    write_network(&args.out, &network)?;
    let summary = summarize(network.hypergraph());
    tracing::info!(
        path = %args.out.display(),
        participants = summary.vertices,
        channels = summary.hyperedges,
        seed = args.seed,
        "generated network"
    );
    Ok(())
}
