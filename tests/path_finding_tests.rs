use ordered_float::OrderedFloat;
use rand::rngs::StdRng;
use rand::SeedableRng;
use shortest_route::graph::generators::{
    generate_random_graph, generate_random_ring, generate_ring, DEFAULT_MAX_WEIGHT,
    DEFAULT_MIN_WEIGHT, DEFAULT_RING_SIZE,
};
use shortest_route::graph::{Graph, MutableGraph, WeightedGraph};
use shortest_route::{path_weight, Dijkstra, ShortestPathAlgorithm};
use std::collections::HashMap;

type TestGraph = WeightedGraph<String, OrderedFloat<f64>>;

fn w(weight: f64) -> OrderedFloat<f64> {
    OrderedFloat(weight)
}

fn s(label: &str) -> String {
    label.to_string()
}

fn labels(path: &[String]) -> Vec<&str> {
    path.iter().map(String::as_str).collect()
}

// Test helper building a graph from (node, [(target, weight)]) literals
fn graph_from(entries: &[(&str, &[(&str, f64)])]) -> TestGraph {
    TestGraph::from_adjacency(entries.iter().map(|(node, edges)| {
        (
            s(node),
            edges
                .iter()
                .map(|(target, weight)| (s(target), w(*weight)))
                .collect::<Vec<_>>(),
        )
    }))
    .unwrap()
}

// Bellman-Ford distances, used as the reference for optimality
fn reference_distances(graph: &TestGraph, source: &String) -> HashMap<String, f64> {
    let mut distances = HashMap::new();
    distances.insert(source.clone(), 0.0);

    for _ in 0..graph.node_count() {
        let mut changed = false;
        for node in graph.nodes() {
            let Some(&base) = distances.get(node) else {
                continue;
            };
            for (target, weight) in graph.outgoing_edges(node) {
                let candidate = base + weight.into_inner();
                let current = distances.get(target).copied().unwrap_or(f64::INFINITY);
                if candidate < current {
                    distances.insert(target.clone(), candidate);
                    changed = true;
                }
            }
        }
        if !changed {
            break;
        }
    }

    distances
}

fn assert_edge_connected(graph: &TestGraph, path: &[String]) {
    for hop in path.windows(2) {
        assert!(
            graph.has_edge(&hop[0], &hop[1]),
            "path {:?} uses missing edge {} -> {}",
            path,
            hop[0],
            hop[1]
        );
    }
}

#[test]
fn test_line_routes_through_middle() {
    let graph = graph_from(&[
        ("A", &[("B", 5.0)]),
        ("B", &[("A", 5.0), ("C", 3.0)]),
        ("C", &[("B", 3.0)]),
    ]);

    let path = Dijkstra::new().find(&graph, &s("A"), &s("C"));
    assert_eq!(labels(&path), vec!["A", "B", "C"]);
    assert_eq!(path_weight(&graph, &path), Some(w(8.0)));
}

#[test]
fn test_unknown_endpoint_has_no_path() {
    let graph = graph_from(&[("A", &[("B", 10.0)]), ("B", &[("A", 10.0)])]);

    assert!(Dijkstra::new().find(&graph, &s("A"), &s("Z")).is_empty());
    assert!(Dijkstra::new().find(&graph, &s("Z"), &s("A")).is_empty());
}

#[test]
fn test_disconnected_node_has_no_path() {
    let graph = graph_from(&[
        ("A", &[("B", 1.0)]),
        ("B", &[("A", 1.0)]),
        ("D", &[]),
    ]);

    assert!(Dijkstra::new().find(&graph, &s("A"), &s("D")).is_empty());
    assert!(Dijkstra::new().find(&graph, &s("D"), &s("A")).is_empty());
    assert_eq!(labels(&Dijkstra::new().find(&graph, &s("D"), &s("D"))), vec!["D"]);
}

#[test]
fn test_parallel_edges_pick_cheapest() {
    let graph = graph_from(&[("A", &[("B", 9.0), ("B", 2.0)]), ("B", &[])]);

    let route = Dijkstra::new().find_route(&graph, &s("A"), &s("B")).unwrap();
    assert_eq!(labels(&route.nodes), vec!["A", "B"]);
    assert_eq!(route.total_weight, w(2.0));
    assert_eq!(route.hops(), 1);
}

#[test]
fn test_same_place_is_single_node_path() {
    let mut rng = StdRng::seed_from_u64(42);
    let graph = generate_random_ring(
        DEFAULT_RING_SIZE,
        DEFAULT_MIN_WEIGHT,
        DEFAULT_MAX_WEIGHT,
        &mut rng,
    )
    .unwrap();

    let path = Dijkstra::new().find(&graph, &s("A"), &s("A"));
    assert_eq!(labels(&path), vec!["A"]);
    assert_eq!(path_weight(&graph, &path), Some(w(0.0)));
}

#[test]
fn test_empty_graph_has_no_paths() {
    let graph = TestGraph::new();
    assert!(Dijkstra::new().find(&graph, &s("A"), &s("A")).is_empty());
    assert!(Dijkstra::new().find_route(&graph, &s("A"), &s("B")).is_none());
}

#[test]
fn test_self_loops_are_inert() {
    let graph = graph_from(&[
        ("A", &[("A", 0.0), ("A", 4.0), ("B", 2.0)]),
        ("B", &[("B", 1.0), ("C", 0.0)]),
        ("C", &[]),
    ]);

    let path = Dijkstra::new().find(&graph, &s("A"), &s("C"));
    assert_eq!(labels(&path), vec!["A", "B", "C"]);
    assert_eq!(path_weight(&graph, &path), Some(w(2.0)));
}

#[test]
fn test_asymmetric_weights_pick_direction() {
    let mut graph = TestGraph::new();
    graph.add_undirected_edge(s("A"), s("B"), w(1.0), w(50.0)).unwrap();
    graph.add_undirected_edge(s("B"), s("C"), w(1.0), w(50.0)).unwrap();
    graph.add_undirected_edge(s("C"), s("A"), w(1.0), w(50.0)).unwrap();

    // Going backwards costs 50 directly, 2 the long way round
    let path = Dijkstra::new().find(&graph, &s("B"), &s("A"));
    assert_eq!(labels(&path), vec!["B", "C", "A"]);
}

#[test]
fn test_ring_goes_the_cheaper_way_round() {
    // Clockwise edges cost 1, counter-clockwise edges cost 10
    let weights = vec![(w(1.0), w(10.0)); 6];
    let graph = generate_ring(&weights).unwrap();

    let path = Dijkstra::new().find(&graph, &s("A"), &s("E"));
    assert_eq!(labels(&path), vec!["A", "B", "C", "D", "E"]);
    assert_eq!(path_weight(&graph, &path), Some(w(4.0)));
}

#[test]
fn test_dangling_edges_are_tolerated() {
    let graph = graph_from(&[
        ("A", &[("Ghost", 1.0), ("B", 3.0)]),
        ("B", &[("C", 1.0)]),
        ("C", &[]),
    ]);

    assert_eq!(labels(&Dijkstra::new().find(&graph, &s("A"), &s("C"))), vec!["A", "B", "C"]);
    assert!(Dijkstra::new().find(&graph, &s("A"), &s("Ghost")).is_empty());
    assert!(Dijkstra::new().find(&graph, &s("Ghost"), &s("Ghost")).is_empty());
}

#[test]
fn test_random_graphs_match_reference() {
    let mut rng = StdRng::seed_from_u64(2024);
    let dijkstra = Dijkstra::new();

    for round in 0..40 {
        let graph = generate_random_graph(12, 30, 20, &mut rng).unwrap();
        let nodes: Vec<String> = graph.nodes().cloned().collect();

        for start in &nodes {
            let reference = reference_distances(&graph, start);

            for end in &nodes {
                let path = dijkstra.find(&graph, start, end);

                // Trivial path
                if start == end {
                    assert_eq!(path, vec![start.clone()], "round {}", round);
                    continue;
                }

                // Connectivity
                let reachable = reference.contains_key(end);
                assert_eq!(path.len() >= 2, reachable, "round {} {} -> {}", round, start, end);
                if !reachable {
                    assert!(path.is_empty());
                    continue;
                }

                // Validity and optimality
                assert_eq!(path.first(), Some(start));
                assert_eq!(path.last(), Some(end));
                assert_edge_connected(&graph, &path);
                let weight = path_weight(&graph, &path).unwrap().into_inner();
                assert_eq!(weight, reference[end], "round {} {} -> {}", round, start, end);

                // Reproducibility
                assert_eq!(dijkstra.find(&graph, start, end), path);
            }
        }
    }
}

#[test]
fn test_tree_agrees_with_point_queries() {
    let mut rng = StdRng::seed_from_u64(99);
    let graph = generate_random_graph(15, 40, 9, &mut rng).unwrap();
    let dijkstra = Dijkstra::new();

    for source in graph.nodes() {
        let tree = dijkstra.compute_shortest_paths(&graph, source).unwrap();
        for target in graph.nodes() {
            assert_eq!(tree.path_to(target), dijkstra.find(&graph, source, target));
        }
    }
}

#[test]
fn test_concurrent_searches_share_one_graph() {
    let mut rng = StdRng::seed_from_u64(5);
    let graph = generate_random_graph(30, 90, 50, &mut rng).unwrap();
    let nodes: Vec<String> = graph.nodes().cloned().collect();
    let dijkstra = Dijkstra::new();

    let expected: Vec<Vec<String>> = nodes
        .iter()
        .map(|end| dijkstra.find(&graph, &nodes[0], end))
        .collect();

    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                for (end, expected) in nodes.iter().zip(&expected) {
                    assert_eq!(&dijkstra.find(&graph, &nodes[0], end), expected);
                }
            });
        }
    });
}
