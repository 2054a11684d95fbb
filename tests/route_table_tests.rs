use ordered_float::OrderedFloat;
use rand::rngs::StdRng;
use rand::SeedableRng;
use shortest_route::algorithm::find_all_pairs;
use shortest_route::graph::generators::{generate_random_graph, generate_random_ring};
use shortest_route::graph::{Graph, WeightedGraph};
use shortest_route::{Dijkstra, ShortestPathAlgorithm};

#[test]
fn test_table_matches_point_queries_on_ring() {
    let mut rng = StdRng::seed_from_u64(11);
    let graph = generate_random_ring(9, 5, 70, &mut rng).unwrap();
    let dijkstra = Dijkstra::new();

    let table = find_all_pairs(&dijkstra, &graph).unwrap();
    let nodes: Vec<String> = graph.nodes().cloned().collect();
    assert_eq!(table.nodes, nodes);

    for start in &nodes {
        for end in &nodes {
            assert_eq!(table.route(start, end), dijkstra.find(&graph, start, end));
            assert_eq!(
                table.distance(start, end),
                dijkstra.find_route(&graph, start, end).map(|route| route.total_weight)
            );
        }
    }
}

#[test]
fn test_table_on_disconnected_graph() {
    let mut rng = StdRng::seed_from_u64(3);
    let graph = generate_random_graph(20, 15, 10, &mut rng).unwrap();
    let dijkstra = Dijkstra::new();

    let table = find_all_pairs(&dijkstra, &graph).unwrap();
    for start in graph.nodes() {
        let tree = table.tree(start).unwrap();
        assert_eq!(tree.distance(start), Some(OrderedFloat(0.0)));
        for end in graph.nodes() {
            let path = table.route(start, end);
            assert_eq!(path.is_empty(), tree.distance(end).is_none());
        }
    }
}

#[test]
fn test_table_ignores_unknown_endpoints() {
    let mut graph: WeightedGraph<String, OrderedFloat<f64>> = WeightedGraph::new();
    shortest_route::graph::MutableGraph::add_edge(
        &mut graph,
        "A".to_string(),
        "Ghost".to_string(),
        OrderedFloat(1.0),
    )
    .unwrap();

    let table = find_all_pairs(&Dijkstra::new(), &graph).unwrap();
    let a = "A".to_string();
    let ghost = "Ghost".to_string();
    assert!(table.route(&a, &ghost).is_empty());
    assert!(table.distance(&a, &ghost).is_none());
    assert!(table.tree(&ghost).is_none());
    assert_eq!(table.route(&a, &a), vec![a.clone()]);
}
