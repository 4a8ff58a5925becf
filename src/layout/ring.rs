use std::collections::{HashMap, HashSet};

use crate::ir::FsmGraph;

/// Order the non-hub states into a ring with a greedy chain walk over
/// transition adjacency: follow outgoing transitions so causally-connected
/// states land next to each other, jump on dead ends. A heuristic
/// Hamiltonian-path approximation, not an optimizer; the only guarantees are
/// completeness (every non-hub state exactly once) and determinism (all scans
/// run in declaration order).
pub(super) fn order_rim(graph: &FsmGraph, hub: usize) -> Vec<usize> {
    let rim: Vec<usize> = (0..graph.states.len()).filter(|&idx| idx != hub).collect();
    if rim.is_empty() {
        return Vec::new();
    }

    let index: HashMap<&str, usize> = graph
        .states
        .iter()
        .enumerate()
        .map(|(idx, state)| (state.id.as_str(), idx))
        .collect();
    let hub_id = graph.states[hub].id.as_str();

    // Seed with the first state the hub transitions to: the flow usually
    // starts right after reset. Fall back to the first non-hub state.
    let seed = graph
        .transitions
        .iter()
        .filter(|transition| transition.from == hub_id)
        .find_map(|transition| {
            let idx = *index.get(transition.to.as_str())?;
            (idx != hub).then_some(idx)
        })
        .unwrap_or(rim[0]);

    let mut order = Vec::with_capacity(rim.len());
    let mut visited: HashSet<usize> = HashSet::new();
    order.push(seed);
    visited.insert(seed);
    let mut current = seed;

    while order.len() < rim.len() {
        let current_id = graph.states[current].id.as_str();
        let next = graph
            .transitions
            .iter()
            .filter(|transition| transition.from == current_id)
            .find_map(|transition| {
                let idx = *index.get(transition.to.as_str())?;
                (idx != hub && !visited.contains(&idx)).then_some(idx)
            })
            // Chain break: no unvisited outgoing neighbor, jump to the first
            // unvisited state in input order.
            .or_else(|| rim.iter().copied().find(|idx| !visited.contains(idx)));
        let Some(next) = next else {
            break;
        };
        order.push(next);
        visited.insert(next);
        current = next;
    }

    order
}
