use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tvh_core::{DistanceType, ErrorInfo, TvhError};
use tvh_graph::parse_timestamp;
use tvh_paths::Traversal;

/// YAML description of a path query. Every field may also be given as a
/// command line flag, which takes precedence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct QueryConfig {
    /// Network document to load.
    pub network: Option<PathBuf>,
    /// Participant the walks start from.
    pub source: Option<String>,
    /// Metric to minimize. Defaults to `shortest`.
    pub distance: Option<DistanceType>,
    /// Inclusive lower bound on the first hop, as an ISO-8601 timestamp.
    pub min_timing: Option<String>,
    /// Frontier strategy. Defaults to `auto`.
    pub traversal: Option<Traversal>,
    /// Report destination. Defaults to stdout.
    pub output: Option<PathBuf>,
}

/// Fully resolved query.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    pub network: PathBuf,
    pub source: String,
    pub distance: DistanceType,
    pub min_timing: Option<NaiveDateTime>,
    pub traversal: Traversal,
    pub output: Option<PathBuf>,
}

impl QueryConfig {
    pub fn load(path: &Path) -> Result<Self, TvhError> {
        let yaml = fs::read_to_string(path).map_err(|err| {
            TvhError::Config(
                ErrorInfo::new("read-config", err.to_string())
                    .with_context("path", path.display().to_string()),
            )
        })?;
        serde_yaml::from_str(&yaml).map_err(|err| {
            TvhError::Config(
                ErrorInfo::new("parse-config", err.to_string())
                    .with_context("path", path.display().to_string()),
            )
        })
    }

    /// Keeps the fields of `self` that `flags` leaves unset.
    pub fn overlay(self, flags: QueryConfig) -> QueryConfig {
        QueryConfig {
            network: flags.network.or(self.network),
            source: flags.source.or(self.source),
            distance: flags.distance.or(self.distance),
            min_timing: flags.min_timing.or(self.min_timing),
            traversal: flags.traversal.or(self.traversal),
            output: flags.output.or(self.output),
        }
    }

    pub fn resolve(self) -> Result<Query, TvhError> {
        let min_timing = self
            .min_timing
            .as_deref()
            .map(parse_timestamp)
            .transpose()?;
        Ok(Query {
            network: self.network.ok_or_else(|| missing("network"))?,
            source: self.source.ok_or_else(|| missing("source"))?,
            distance: self.distance.unwrap_or(DistanceType::Shortest),
            min_timing,
            traversal: self.traversal.unwrap_or_default(),
            output: self.output,
        })
    }
}

fn missing(option: &str) -> TvhError {
    TvhError::Config(
        ErrorInfo::new("missing-option", "required query option is not set")
            .with_context("option", option)
            .with_hint(format!("pass --{option} or set `{option}` in the config file")),
    )
}
