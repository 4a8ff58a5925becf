use std::collections::{BTreeMap, HashMap};

use crate::config::{EdgeConfig, EdgeMode, LayoutConfig};
use crate::ir::FsmGraph;

use super::geometry::{
    cubic_midpoint, normalize, parallel_edge_offset, perpendicular, point_on_circle, quad_midpoint,
};
use super::types::{PathCommand, PlacedEdge, PlacedNode};

/// Route every transition against the placed nodes. Classification flags are
/// computed here, once, and persisted on the edge; the interactive surface
/// styles off them without recomputation. Transitions whose endpoints are
/// missing from the node map (a caller contract violation, see `loader`) are
/// skipped.
pub(super) fn route_edges(
    graph: &FsmGraph,
    nodes: &BTreeMap<String, PlacedNode>,
    hub: Option<&str>,
    ring: &[String],
    config: &LayoutConfig,
) -> Vec<PlacedEdge> {
    let ranks = sibling_ranks(graph);
    let ring_pos: HashMap<&str, usize> = ring
        .iter()
        .enumerate()
        .map(|(pos, id)| (id.as_str(), pos))
        .collect();

    let mut edges = Vec::with_capacity(graph.transitions.len());
    for (index, transition) in graph.transitions.iter().enumerate() {
        let Some(from_node) = nodes.get(&transition.from) else {
            continue;
        };
        let Some(to_node) = nodes.get(&transition.to) else {
            continue;
        };
        let (sibling_index, sibling_count) = ranks[index];

        let is_self_loop = transition.is_self_loop();
        let is_hub_connection = hub == Some(transition.from.as_str())
            || hub == Some(transition.to.as_str());
        let is_neighbor = !is_self_loop
            && ring_adjacent(
                ring_pos.get(transition.from.as_str()).copied(),
                ring_pos.get(transition.to.as_str()).copied(),
                ring.len(),
            );

        let (path, label_anchor) = if is_self_loop {
            route_self_loop(from_node, sibling_index, &config.edge)
        } else {
            route_connection(from_node, to_node, sibling_index, sibling_count, &config.edge)
        };

        edges.push(PlacedEdge {
            index,
            from: transition.from.clone(),
            to: transition.to.clone(),
            label: (index + 1).to_string(),
            condition: transition.condition.clone(),
            action: transition.action.clone(),
            is_self_loop,
            is_hub_connection,
            is_neighbor,
            sibling_index,
            sibling_count,
            path,
            label_anchor,
        });
    }
    edges
}

/// Rank each transition among the transitions sharing its ordered
/// (from, to) pair: `(occurrence index, total count)`.
fn sibling_ranks(graph: &FsmGraph) -> Vec<(usize, usize)> {
    let mut counts: HashMap<(&str, &str), usize> = HashMap::new();
    for transition in &graph.transitions {
        *counts
            .entry((transition.from.as_str(), transition.to.as_str()))
            .or_insert(0) += 1;
    }
    let mut cursor: HashMap<(&str, &str), usize> = HashMap::new();
    graph
        .transitions
        .iter()
        .map(|transition| {
            let key = (transition.from.as_str(), transition.to.as_str());
            let slot = cursor.entry(key).or_insert(0);
            let index = *slot;
            *slot += 1;
            (index, counts[&key])
        })
        .collect()
}

fn ring_adjacent(a: Option<usize>, b: Option<usize>, len: usize) -> bool {
    let (Some(a), Some(b)) = (a, b) else {
        return false;
    };
    if len < 2 {
        return false;
    }
    (a + 1) % len == b || (b + 1) % len == a
}

/// Direction a node's self-loops point: away from the hub at the origin.
/// The hub's own direction degenerates to zero; its loops point up.
fn self_loop_direction(node: &PlacedNode) -> (f32, f32) {
    let dir = normalize(node.x, node.y);
    if dir == (0.0, 0.0) { (0.0, -1.0) } else { dir }
}

fn route_self_loop(
    node: &PlacedNode,
    sibling_index: usize,
    config: &EdgeConfig,
) -> (Vec<PathCommand>, (f32, f32)) {
    let dir = self_loop_direction(node);
    let base = dir.1.atan2(dir.0);
    let out_angle = base - config.loop_spread;
    let in_angle = base + config.loop_spread;

    let start = (
        node.x + node.radius * out_angle.cos(),
        node.y + node.radius * out_angle.sin(),
    );
    let end = (
        node.x + node.radius * in_angle.cos(),
        node.y + node.radius * in_angle.sin(),
    );

    // Repeated loops on one state nest outward instead of overlapping.
    let reach = node.radius + config.loop_base + config.loop_step * sibling_index as f32;
    let ctrl1 = (
        node.x + reach * out_angle.cos(),
        node.y + reach * out_angle.sin(),
    );
    let ctrl2 = (
        node.x + reach * in_angle.cos(),
        node.y + reach * in_angle.sin(),
    );

    let path = vec![
        PathCommand::Move { to: start },
        PathCommand::Cubic {
            ctrl1,
            ctrl2,
            to: end,
        },
    ];
    (path, cubic_midpoint(start, ctrl1, ctrl2, end))
}

fn route_connection(
    from: &PlacedNode,
    to: &PlacedNode,
    sibling_index: usize,
    sibling_count: usize,
    config: &EdgeConfig,
) -> (Vec<PathCommand>, (f32, f32)) {
    // Anchor on the body circles, not the centers, so arrowheads meet the rim.
    let start = point_on_circle(from.center(), to.center(), from.radius);
    let end = point_on_circle(to.center(), from.center(), to.radius);

    match config.mode {
        EdgeMode::Straight => {
            let path = vec![PathCommand::Move { to: start }, PathCommand::Line { to: end }];
            let anchor = ((start.0 + end.0) / 2.0, (start.1 + end.1) / 2.0);
            (path, anchor)
        }
        EdgeMode::Curved => {
            let dx = end.0 - start.0;
            let dy = end.1 - start.1;
            let len = (dx * dx + dy * dy).sqrt();
            let normal = perpendicular(normalize(dx, dy));
            let arch = (len * config.arch_ratio).clamp(config.arch_min, config.arch_max)
                + parallel_edge_offset(sibling_index, sibling_count, config.parallel_spacing);
            let mid = ((start.0 + end.0) / 2.0, (start.1 + end.1) / 2.0);
            let ctrl = (mid.0 + normal.0 * arch, mid.1 + normal.1 * arch);
            let path = vec![
                PathCommand::Move { to: start },
                PathCommand::Quad { ctrl, to: end },
            ];
            (path, quad_midpoint(start, ctrl, end))
        }
    }
}
