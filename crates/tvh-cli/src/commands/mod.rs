pub mod compare;
pub mod generate;
pub mod paths;
pub mod stats;

use std::path::PathBuf;

use clap::Args;
use tvh_core::{DistanceType, TvhError};

use crate::config::{Query, QueryConfig};

/// Query options shared by `paths` and `compare`.
#[derive(Args, Debug, Default)]
pub struct QueryArgs {
    /// YAML query file; explicit flags override its values.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Network document (`.json` or `.json.bz2`).
    #[arg(long)]
    pub network: Option<PathBuf>,
    /// Participant the walks start from.
    #[arg(long)]
    pub source: Option<String>,
    /// Metric to minimize: shortest, fastest or foremost.
    #[arg(long)]
    pub distance: Option<DistanceType>,
    /// Inclusive lower bound on the first hop (ISO-8601).
    #[arg(long)]
    pub min_timing: Option<String>,
    /// Report destination; stdout when omitted.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

impl QueryArgs {
    /// Merges the optional config file with the explicit flags.
    pub fn query(&self, flags: QueryConfig) -> Result<Query, TvhError> {
        let file = match &self.config {
            Some(path) => QueryConfig::load(path)?,
            None => QueryConfig::default(),
        };
        let flags = QueryConfig {
            network: self.network.clone(),
            source: self.source.clone(),
            distance: self.distance,
            min_timing: self.min_timing.clone(),
            output: self.out.clone(),
            ..flags
        };
        file.overlay(flags).resolve()
    }
}
