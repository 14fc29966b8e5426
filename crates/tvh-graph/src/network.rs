use std::ops::Deref;

use chrono::NaiveDateTime;
use tvh_core::errors::TvhError;
use tvh_core::{EdgeIdx, TemporalHypergraph, Timing, VertexIdx};

use crate::hypergraph::TimeVaryingHypergraph;

/// Hypergraph backing a [`CommunicationNetwork`].
pub type ChannelHypergraph<T> = TimeVaryingHypergraph<String, String, T>;

/// Communication channels between participants, each channel closing at one
/// instant.
///
/// Channels are hyperedges and participants are vertices. Every
/// [`TimeVaryingHypergraph`] query is available through `Deref`, next to the
/// channel and participant synonyms.
#[derive(Debug, Clone)]
pub struct CommunicationNetwork<T: Timing = NaiveDateTime> {
    graph: ChannelHypergraph<T>,
}

impl<T: Timing> CommunicationNetwork<T> {
    /// Builds a network from channel to participants and channel to timing
    /// mappings.
    pub fn new<I, C, P, J, K>(channels: I, timings: J) -> Result<Self, TvhError>
    where
        I: IntoIterator<Item = (K, C)>,
        C: IntoIterator<Item = P>,
        P: Into<String>,
        J: IntoIterator<Item = (K, T)>,
        K: Into<String>,
    {
        let graph = TimeVaryingHypergraph::new(
            channels.into_iter().map(|(channel, participants)| {
                (
                    channel.into(),
                    participants.into_iter().map(Into::into).collect::<Vec<String>>(),
                )
            }),
            timings
                .into_iter()
                .map(|(channel, timing)| (channel.into(), timing)),
        )?;
        Ok(Self { graph })
    }

    /// Wraps an existing hypergraph.
    pub fn from_hypergraph(graph: ChannelHypergraph<T>) -> Self {
        Self { graph }
    }

    /// Returns the underlying hypergraph.
    pub fn hypergraph(&self) -> &ChannelHypergraph<T> {
        &self.graph
    }

    /// Consumes the network and returns the underlying hypergraph.
    pub fn into_hypergraph(self) -> ChannelHypergraph<T> {
        self.graph
    }

    /// Returns every channel.
    pub fn channels(&self) -> impl ExactSizeIterator<Item = &String> + '_ {
        self.graph.hyperedges()
    }

    /// Returns the channels `participant` took part in.
    pub fn channels_of(
        &self,
        participant: &str,
    ) -> Result<impl ExactSizeIterator<Item = &String> + '_, TvhError> {
        self.graph.hyperedges_of(&participant.to_owned())
    }

    /// Returns every participant.
    pub fn participants(&self) -> impl ExactSizeIterator<Item = &String> + '_ {
        self.graph.vertices()
    }

    /// Returns the participants of `channel`.
    pub fn participants_of(
        &self,
        channel: &str,
    ) -> Result<impl ExactSizeIterator<Item = &String> + '_, TvhError> {
        self.graph.vertices_of(&channel.to_owned())
    }
}

impl<T: Timing> Deref for CommunicationNetwork<T> {
    type Target = ChannelHypergraph<T>;

    fn deref(&self) -> &Self::Target {
        &self.graph
    }
}

impl<T: Timing> TemporalHypergraph for CommunicationNetwork<T> {
    type Vertex = String;
    type Timing = T;

    fn vertex_count(&self) -> usize {
        self.graph.vertex_count()
    }

    fn hyperedge_count(&self) -> usize {
        self.graph.hyperedge_count()
    }

    fn vertex_index(&self, vertex: &String) -> Option<VertexIdx> {
        self.graph.vertex_index(vertex)
    }

    fn vertex_at(&self, vertex: VertexIdx) -> &String {
        self.graph.vertex_at(vertex)
    }

    fn incident_hyperedges(&self, vertex: VertexIdx) -> &[EdgeIdx] {
        self.graph.incident_hyperedges(vertex)
    }

    fn incident_vertices(&self, edge: EdgeIdx) -> &[VertexIdx] {
        self.graph.incident_vertices(edge)
    }

    fn timing_at(&self, edge: EdgeIdx) -> T {
        self.graph.timing_at(edge)
    }
}
