use std::collections::HashMap;

use chrono::TimeDelta;
use tvh_core::{Distance, DistanceType, TvhError};
use tvh_graph::{CommunicationNetwork, TimeVaryingHypergraph};
use tvh_paths::{
    minimal_paths, single_source_dijkstra_hyperedges, single_source_dijkstra_vertices, Traversal,
};

type Graph<T> = TimeVaryingHypergraph<&'static str, &'static str, T>;

fn both<T: tvh_core::Timing>(
    graph: &Graph<T>,
    source: &'static str,
    distance_type: DistanceType,
    floor: Option<T>,
) -> HashMap<&'static str, Distance<T>> {
    let by_vertices = single_source_dijkstra_vertices(graph, &source, distance_type, floor).unwrap();
    let by_hyperedges =
        single_source_dijkstra_hyperedges(graph, &source, distance_type, floor).unwrap();
    assert_eq!(by_vertices, by_hyperedges, "{distance_type} from {source}");
    by_vertices
}

fn three_metrics() -> Graph<i64> {
    TimeVaryingHypergraph::from_records([
        ("e1", vec!["v1", "v2", "v3"], 1),
        ("e2", vec!["v2", "v4"], 2),
        ("e3", vec!["v5"], 3),
        ("e4", vec![], 4),
    ])
    .unwrap()
}

fn causal_tie() -> Graph<TimeDelta> {
    let day = TimeDelta::days;
    TimeVaryingHypergraph::from_records([
        ("e1", vec!["v1", "v2"], day(1)),
        ("e2", vec!["v1", "v3"], day(2)),
        ("e3", vec!["v2", "v4"], day(1)),
        ("e4", vec!["v3", "v4"], day(3)),
        ("e5", vec!["v4", "v5"], day(2)),
        ("e6", vec!["v1", "v5"], day(4)),
    ])
    .unwrap()
}

#[test]
fn hop_counts_along_a_chain() {
    let cn = CommunicationNetwork::new(
        [("h1", vec!["v1", "v2"]), ("h2", vec!["v2", "v3"]), ("h3", vec!["v3", "v4"])],
        [("h1", 1i64), ("h2", 2), ("h3", 3)],
    )
    .unwrap();
    let source = "v1".to_owned();
    for traversal in [Traversal::Vertices, Traversal::Hyperedges] {
        let report = minimal_paths(&cn, &source, DistanceType::Shortest, Some(0), traversal).unwrap();
        assert_eq!(report.traversal, traversal);
        assert_eq!(
            report.distances,
            HashMap::from([
                ("v2".to_owned(), Distance::Hops(1)),
                ("v3".to_owned(), Distance::Hops(2)),
                ("v4".to_owned(), Distance::Hops(3)),
            ])
        );
    }
}

#[test]
fn every_metric_on_a_small_graph() {
    let graph = three_metrics();
    assert_eq!(
        both(&graph, "v1", DistanceType::Shortest, Some(0)),
        HashMap::from([("v2", Distance::Hops(1)), ("v3", Distance::Hops(1)), ("v4", Distance::Hops(2))])
    );
    assert_eq!(
        both(&graph, "v1", DistanceType::Fastest, Some(0)),
        HashMap::from([
            ("v2", Distance::Duration(0)),
            ("v3", Distance::Duration(0)),
            ("v4", Distance::Duration(1)),
        ])
    );
    assert_eq!(
        both(&graph, "v1", DistanceType::Foremost, Some(0)),
        HashMap::from([
            ("v2", Distance::Arrival(1)),
            ("v3", Distance::Arrival(1)),
            ("v4", Distance::Arrival(2)),
        ])
    );
}

#[test]
fn equal_timings_do_not_chain() {
    let graph = causal_tie();
    assert_eq!(
        both(&graph, "v1", DistanceType::Shortest, None),
        HashMap::from([
            ("v2", Distance::Hops(1)),
            ("v3", Distance::Hops(1)),
            ("v4", Distance::Hops(2)),
            ("v5", Distance::Hops(1)),
        ])
    );
    let day = TimeDelta::days;
    assert_eq!(
        both(&graph, "v1", DistanceType::Fastest, None),
        HashMap::from([
            ("v2", Distance::Duration(day(0))),
            ("v3", Distance::Duration(day(0))),
            ("v4", Distance::Duration(day(1))),
            ("v5", Distance::Duration(day(0))),
        ])
    );
    assert_eq!(
        both(&graph, "v1", DistanceType::Foremost, None),
        HashMap::from([
            ("v2", Distance::Arrival(day(1))),
            ("v3", Distance::Arrival(day(2))),
            ("v4", Distance::Arrival(day(3))),
            ("v5", Distance::Arrival(day(4))),
        ])
    );
}

#[test]
fn floor_excludes_early_first_hops() {
    let graph = causal_tie();
    let reached = both(&graph, "v1", DistanceType::Foremost, Some(TimeDelta::days(2)));
    // v2 is only reachable through e1 at day 1.
    assert!(!reached.contains_key("v2"));
    assert_eq!(reached.get("v4"), Some(&Distance::Arrival(TimeDelta::days(3))));
    assert_eq!(reached.get("v5"), Some(&Distance::Arrival(TimeDelta::days(4))));
}

#[test]
fn shortest_walk_may_not_be_the_earliest() {
    // The one-hop route to b is too late to continue, the two-hop one is not.
    let graph: Graph<i64> = TimeVaryingHypergraph::from_records([
        ("late", vec!["s", "b"], 9),
        ("x1", vec!["s", "a"], 1),
        ("x2", vec!["a", "b"], 2),
        ("onward", vec!["b", "c"], 5),
    ])
    .unwrap();
    let hops = both(&graph, "s", DistanceType::Shortest, None);
    assert_eq!(hops.get("b"), Some(&Distance::Hops(1)));
    assert_eq!(hops.get("c"), Some(&Distance::Hops(3)));
}

#[test]
fn fastest_walk_may_start_late() {
    let graph: Graph<i64> = TimeVaryingHypergraph::from_records([
        ("early", vec!["s", "a"], 1),
        ("later", vec!["s", "a"], 6),
        ("onward", vec!["a", "b"], 7),
    ])
    .unwrap();
    let fastest = both(&graph, "s", DistanceType::Fastest, None);
    assert_eq!(fastest.get("b"), Some(&Distance::Duration(1)));
}

#[test]
fn source_and_unreachable_vertices_are_absent() {
    let graph = three_metrics();
    for distance_type in DistanceType::ALL {
        let reached = both(&graph, "v1", distance_type, None);
        assert!(!reached.contains_key("v1"));
        assert!(!reached.contains_key("v5"));
    }
}

#[test]
fn isolated_source_reaches_nothing() {
    let graph = three_metrics().with_vertices(["alone"]);
    for distance_type in DistanceType::ALL {
        assert!(both(&graph, "alone", distance_type, None).is_empty());
    }
    // A singleton hyperedge leads nowhere either.
    assert!(both(&graph, "v5", DistanceType::Shortest, None).is_empty());
}

#[test]
fn missing_source_fails_for_both_traversals() {
    let empty: Graph<i64> = TimeVaryingHypergraph::from_records(Vec::<(&str, Vec<&str>, i64)>::new()).unwrap();
    for distance_type in DistanceType::ALL {
        let err = single_source_dijkstra_vertices(&empty, &"v1", distance_type, Some(0)).unwrap_err();
        assert!(matches!(err, TvhError::EntityNotFound(ref info) if info.code == "unknown-source"));
        let err = single_source_dijkstra_hyperedges(&empty, &"v1", distance_type, Some(0)).unwrap_err();
        assert!(err.is_entity_not_found());
    }
    let err = minimal_paths(&three_metrics(), &"v9", DistanceType::Foremost, None, Traversal::Auto)
        .unwrap_err();
    assert_eq!(err.info().context.get("vertex").map(String::as_str), Some("\"v9\""));
}

#[test]
fn auto_picks_the_cheaper_traversal() {
    // One wide hyperedge: Σ|h|² = 36 against Σdeg² = 6.
    let wide: Graph<i64> =
        TimeVaryingHypergraph::from_records([("all", vec!["a", "b", "c", "d", "e", "f"], 1)]).unwrap();
    assert_eq!(Traversal::cheaper_for(&wide), Traversal::Hyperedges);

    // One hub in many pairs: Σ|h|² = 20 against Σdeg² = 25 + 5.
    let hub: Graph<i64> = TimeVaryingHypergraph::from_records(
        ["a", "b", "c", "d", "e"]
            .into_iter()
            .enumerate()
            .map(|(t, leaf)| (leaf, vec!["hub", leaf], t as i64)),
    )
    .unwrap();
    assert_eq!(Traversal::cheaper_for(&hub), Traversal::Vertices);

    let report = minimal_paths(&wide, &"a", DistanceType::Shortest, None, Traversal::Auto).unwrap();
    assert_eq!(report.traversal, Traversal::Hyperedges);
    assert_eq!(report.distances.len(), 5);
    assert_eq!(report.stats.pops, 1);
}

#[test]
fn traversals_share_a_graph_across_threads() {
    let graph = causal_tie();
    let expected = both(&graph, "v1", DistanceType::Fastest, None);
    std::thread::scope(|scope| {
        let workers: Vec<_> = [Traversal::Vertices, Traversal::Hyperedges, Traversal::Auto]
            .into_iter()
            .map(|traversal| {
                let graph = &graph;
                scope.spawn(move || {
                    minimal_paths(graph, &"v1", DistanceType::Fastest, None, traversal)
                        .unwrap()
                        .distances
                })
            })
            .collect();
        for worker in workers {
            assert_eq!(worker.join().unwrap(), expected);
        }
    });
}

#[test]
fn traversal_names_parse() {
    assert_eq!("Hyperedges".parse::<Traversal>().unwrap(), Traversal::Hyperedges);
    assert_eq!(Traversal::default(), Traversal::Auto);
    assert_eq!(Traversal::Vertices.to_string(), "vertices");
    assert_eq!("sideways".parse::<Traversal>().unwrap_err().info().code, "invalid-traversal");
}
