use crate::graph::{Graph, MutableGraph, Weight, WeightedGraph};
use crate::{Error, Result};
use ordered_float::OrderedFloat;
use rand::Rng;

/// Number of places on the default ring
pub const DEFAULT_RING_SIZE: usize = 9;

/// Smallest random weight on a default ring edge
pub const DEFAULT_MIN_WEIGHT: u32 = 5;

/// Largest random weight on a default ring edge
pub const DEFAULT_MAX_WEIGHT: u32 = 70;

/// Label for the node at `index`: "A".."Z", then "AA", "AB", ...
pub fn ring_label(index: usize) -> String {
    let mut label = Vec::new();
    let mut remaining = index;
    loop {
        label.push(b'A' + (remaining % 26) as u8);
        if remaining < 26 {
            break;
        }
        remaining = remaining / 26 - 1;
    }
    label.reverse();
    String::from_utf8_lossy(&label).into_owned()
}

/// The first `count` ring labels in order
pub fn ring_labels(count: usize) -> Vec<String> {
    (0..count).map(ring_label).collect()
}

/// Builds a ring where node `i` links to its successor with `weights[i].0`
/// and to its predecessor with `weights[i].1`, in that order.
pub fn generate_ring<W: Weight>(weights: &[(W, W)]) -> Result<WeightedGraph<String, W>> {
    let count = weights.len();
    let labels = ring_labels(count);
    let mut graph = WeightedGraph::with_capacity(count);

    for label in &labels {
        graph.add_node(label.clone());
    }

    for (i, &(to_next, to_prev)) in weights.iter().enumerate() {
        let next = &labels[(i + 1) % count];
        let prev = &labels[(i + count - 1) % count];
        graph.add_edge(labels[i].clone(), next.clone(), to_next)?;
        graph.add_edge(labels[i].clone(), prev.clone(), to_prev)?;
    }

    Ok(graph)
}

/// Generates a ring of `count` places with independent random integer
/// weights in `min..=max` on every directed edge
pub fn generate_random_ring<R: Rng + ?Sized>(
    count: usize,
    min: u32,
    max: u32,
    rng: &mut R,
) -> Result<WeightedGraph<String, OrderedFloat<f64>>> {
    if min > max {
        return Err(Error::InvalidParameter(format!(
            "weight range {}..={} is empty",
            min, max
        )));
    }

    let weights: Vec<_> = (0..count)
        .map(|_| {
            let to_next = OrderedFloat(rng.gen_range(min..=max) as f64);
            let to_prev = OrderedFloat(rng.gen_range(min..=max) as f64);
            (to_next, to_prev)
        })
        .collect();

    generate_ring(&weights)
}

/// Generates an arbitrary directed graph with `count` nodes labeled "0".."n-1"
/// and `edges` random edges with integer weights in `0..=max_weight`.
/// Self-loops and parallel edges may occur.
pub fn generate_random_graph<R: Rng + ?Sized>(
    count: usize,
    edges: usize,
    max_weight: u32,
    rng: &mut R,
) -> Result<WeightedGraph<String, OrderedFloat<f64>>> {
    if count == 0 && edges > 0 {
        return Err(Error::InvalidParameter(
            "cannot place edges in a graph without nodes".to_string(),
        ));
    }

    let mut graph = WeightedGraph::with_capacity(count);
    for v in 0..count {
        graph.add_node(v.to_string());
    }

    for _ in 0..edges {
        let u = rng.gen_range(0..count);
        let v = rng.gen_range(0..count);
        let weight = OrderedFloat(rng.gen_range(0..=max_weight) as f64);
        graph.add_edge(u.to_string(), v.to_string(), weight)?;
    }

    debug_assert_eq!(graph.edge_count(), edges);
    Ok(graph)
}
