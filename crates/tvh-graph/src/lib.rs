#![deny(missing_docs)]

//! Immutable time-varying hypergraph store implementing the `tvh-core`
//! contracts, plus communication-network persistence and generators.

mod generators;
mod hypergraph;
mod ids;
mod network;
mod serialization;
mod summary;

pub use generators::RandomTopology;
pub use hypergraph::TimeVaryingHypergraph;
pub use network::{ChannelHypergraph, CommunicationNetwork};
pub use summary::{summarize, HypergraphSummary};

/// Re-export persistence helpers for downstream crates.
pub use serialization::{
    network_from_json, network_from_path, network_to_json, parse_timestamp, write_network,
};
