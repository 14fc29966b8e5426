use chrono::{NaiveDateTime, TimeDelta};
use rand::seq::index::sample;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tvh_core::errors::{ErrorInfo, TvhError};

use crate::hypergraph::TimeVaryingHypergraph;
use crate::network::CommunicationNetwork;

/// Shape of a randomly generated time-varying hypergraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RandomTopology {
    /// Size of the vertex pool hyperedges draw from.
    pub vertices: usize,
    /// Number of hyperedges to generate.
    pub hyperedges: usize,
    /// Upper bound on the number of vertices per hyperedge.
    pub max_arity: usize,
    /// Timings are drawn uniformly from `0..horizon`.
    pub horizon: i64,
}

impl RandomTopology {
    /// Generates a hypergraph with integer identifiers and timings.
    ///
    /// Arity is drawn uniformly from `0..=max_arity`, so empty and singleton
    /// hyperedges appear. Vertices of the pool that no hyperedge picked are
    /// kept as isolated vertices. The result is a pure function of the RNG
    /// state.
    pub fn generate<R: Rng>(
        &self,
        rng: &mut R,
    ) -> Result<TimeVaryingHypergraph<u32, u32, i64>, TvhError> {
        self.validate()?;
        let records = self.draw(rng);
        let graph = TimeVaryingHypergraph::from_records(records)?;
        Ok(graph.with_vertices(0..self.vertices as u32))
    }

    /// Generates a communication network whose channels close at
    /// `epoch + timing * step`.
    pub fn generate_network<R: Rng>(
        &self,
        rng: &mut R,
        epoch: NaiveDateTime,
        step: TimeDelta,
    ) -> Result<CommunicationNetwork, TvhError> {
        self.validate()?;
        let mut records = Vec::with_capacity(self.hyperedges);
        for (channel, members, timing) in self.draw(rng) {
            let end = step
                .checked_mul(timing as i32)
                .and_then(|offset| epoch.checked_add_signed(offset))
                .ok_or_else(|| {
                    TvhError::Graph(
                        invalid_topology("channel end overflows the calendar")
                            .with_context("timing", timing.to_string()),
                    )
                })?;
            records.push((
                format!("c{channel}"),
                members.into_iter().map(|member| format!("p{member}")).collect::<Vec<_>>(),
                end,
            ));
        }
        Ok(CommunicationNetwork::from_hypergraph(
            TimeVaryingHypergraph::from_records(records)?,
        ))
    }

    fn validate(&self) -> Result<(), TvhError> {
        if self.horizon <= 0 || self.horizon > i64::from(i32::MAX) {
            return Err(TvhError::Graph(
                invalid_topology("horizon must lie in 1..=i32::MAX")
                    .with_context("horizon", self.horizon.to_string()),
            ));
        }
        if self.vertices > u32::MAX as usize || self.hyperedges > u32::MAX as usize {
            return Err(TvhError::Graph(
                invalid_topology("too many entities for 32-bit identifiers")
                    .with_context("vertices", self.vertices.to_string())
                    .with_context("hyperedges", self.hyperedges.to_string()),
            ));
        }
        Ok(())
    }

    fn draw<R: Rng>(&self, rng: &mut R) -> Vec<(u32, Vec<u32>, i64)> {
        let max_arity = self.max_arity.min(self.vertices);
        (0..self.hyperedges)
            .map(|edge| {
                let arity = rng.gen_range(0..=max_arity);
                let members = sample(&mut *rng, self.vertices, arity)
                    .into_iter()
                    .map(|vertex| vertex as u32)
                    .collect();
                let timing = rng.gen_range(0..self.horizon);
                (edge as u32, members, timing)
            })
            .collect()
    }
}

fn invalid_topology(message: &str) -> ErrorInfo {
    ErrorInfo::new("invalid-topology", message)
}
