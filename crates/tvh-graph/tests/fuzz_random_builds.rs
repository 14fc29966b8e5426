use std::collections::HashSet;

use proptest::prelude::*;
use tvh_core::{EdgeIdx, TemporalHypergraph, VertexIdx};
use tvh_graph::TimeVaryingHypergraph;

proptest! {
    #[test]
    fn incidence_is_bidirectional(
        hedges in prop::collection::vec((prop::collection::vec(0u8..10, 0..6), 1i64..10), 0..12)
    ) {
        let records = hedges
            .iter()
            .enumerate()
            .map(|(edge, (members, timing))| (edge, members.clone(), *timing));
        let graph = TimeVaryingHypergraph::from_records(records).unwrap();

        let expected: HashSet<u8> = hedges.iter().flat_map(|(members, _)| members.iter().copied()).collect();
        let vertices: HashSet<u8> = graph.vertices().copied().collect();
        prop_assert_eq!(vertices, expected);
        prop_assert_eq!(graph.hyperedge_count(), hedges.len());

        for edge in 0..graph.hyperedge_count() {
            let edge = EdgeIdx::from_index(edge);
            let members = graph.incident_vertices(edge);
            prop_assert!(members.windows(2).all(|pair| pair[0] < pair[1]));
            for vertex in members {
                prop_assert!(graph.incident_hyperedges(*vertex).contains(&edge));
            }
        }
        for vertex in 0..graph.vertex_count() {
            let vertex = VertexIdx::from_index(vertex);
            let edges = graph.incident_hyperedges(vertex);
            prop_assert!(edges.windows(2).all(|pair| pair[0] < pair[1]));
            for edge in edges {
                prop_assert!(graph.incident_vertices(*edge).contains(&vertex));
            }
        }
        for (edge, (_, timing)) in hedges.iter().enumerate() {
            prop_assert_eq!(graph.timing(&edge).unwrap(), *timing);
        }
    }
}
