use colored::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use shortest_route::graph::generators::{
    generate_random_ring, DEFAULT_MAX_WEIGHT, DEFAULT_MIN_WEIGHT, DEFAULT_RING_SIZE,
};
use shortest_route::graph::Graph;
use shortest_route::{Dijkstra, RouteStatus, ShortestPathAlgorithm};

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(2025);
    let mut rng = StdRng::seed_from_u64(seed);
    let graph = generate_random_ring(
        DEFAULT_RING_SIZE,
        DEFAULT_MIN_WEIGHT,
        DEFAULT_MAX_WEIGHT,
        &mut rng,
    )
    .expect("default ring parameters are valid");

    println!("{}", format!("Ring of {} places (seed {})", graph.node_count(), seed).bold());
    for node in graph.nodes() {
        let edges: Vec<String> = graph
            .outgoing_edges(node)
            .map(|(target, weight)| format!("{} ({})", target, weight.into_inner()))
            .collect();
        println!("  {} -> {}", node.cyan(), edges.join(", "));
    }
    println!();

    let dijkstra = Dijkstra::new();
    let start = "A".to_string();
    for end in graph.nodes() {
        let path = dijkstra.find(&graph, &start, end);
        let status = RouteStatus::classify(Some(&start), Some(end), &path);

        match dijkstra.find_route(&graph, &start, end) {
            Some(route) if status == RouteStatus::Found => println!(
                "  {} {} {}  {}",
                start.green(),
                "→".dimmed(),
                end.magenta(),
                format!("{} (weight {})", route.nodes.join(" → "), route.total_weight.into_inner())
                    .bold()
            ),
            _ => println!("  {} {} {}  {}", start.green(), "→".dimmed(), end.magenta(), status.to_string().red()),
        }
    }
}
