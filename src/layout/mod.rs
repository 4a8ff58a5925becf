pub mod geometry;
mod hub;
mod ring;
mod routing;
pub(crate) mod types;
pub use types::*;

use std::collections::BTreeMap;
use std::f32::consts::{FRAC_PI_2, TAU};

use crate::config::LayoutConfig;
use crate::ir::FsmGraph;

/// Compute a radial layout for the whole graph: pick the hub, order the rim,
/// place nodes, route edges. Pure and deterministic; identical input yields a
/// bit-for-bit identical layout, so the editor can re-invoke it for an
/// auto-wire reset at any time.
pub fn compute_layout(graph: &FsmGraph, config: &LayoutConfig) -> Layout {
    let Some(hub_idx) = hub::select_hub(graph, &config.radial) else {
        // Nothing to draw is a valid terminal state, not an error.
        return Layout::empty();
    };
    let ring_order = ring::order_rim(graph, hub_idx);

    let mut nodes: BTreeMap<String, PlacedNode> = BTreeMap::new();
    let hub_state = &graph.states[hub_idx];
    nodes.insert(
        hub_state.id.clone(),
        PlacedNode {
            id: hub_state.id.clone(),
            x: 0.0,
            y: 0.0,
            radius: config.radial.node_radius,
            body: NodeBody::Hub,
            ring_index: None,
            label: hub_state.label.clone(),
            role: hub_state.role,
        },
    );

    let count = ring_order.len();
    for (ring_index, &state_idx) in ring_order.iter().enumerate() {
        let state = &graph.states[state_idx];
        // Index 0 sits at the top, then clockwise in y-down coordinates.
        let angle = TAU * ring_index as f32 / count as f32 - FRAC_PI_2;
        nodes.insert(
            state.id.clone(),
            PlacedNode {
                id: state.id.clone(),
                x: config.radial.ring_radius * angle.cos(),
                y: config.radial.ring_radius * angle.sin(),
                radius: config.radial.node_radius,
                body: NodeBody::Rim,
                ring_index: Some(ring_index),
                label: state.label.clone(),
                role: state.role,
            },
        );
    }

    let ring_ids: Vec<String> = ring_order
        .iter()
        .map(|&idx| graph.states[idx].id.clone())
        .collect();
    let edges = routing::route_edges(
        graph,
        &nodes,
        Some(hub_state.id.as_str()),
        &ring_ids,
        config,
    );

    let mut layout = Layout {
        hub: Some(hub_state.id.clone()),
        ring: ring_ids,
        nodes,
        edges,
        min_x: 0.0,
        min_y: 0.0,
        width: 0.0,
        height: 0.0,
    };
    compute_bounds(&mut layout);
    layout
}

/// Bounding box over node bodies and every path point (control points
/// included, so outward self-loops stay inside the canvas).
fn compute_bounds(layout: &mut Layout) {
    let mut min_x = f32::MAX;
    let mut min_y = f32::MAX;
    let mut max_x = f32::MIN;
    let mut max_y = f32::MIN;
    let mut cover = |x: f32, y: f32| {
        min_x = min_x.min(x);
        min_y = min_y.min(y);
        max_x = max_x.max(x);
        max_y = max_y.max(y);
    };

    for node in layout.nodes.values() {
        cover(node.x - node.radius, node.y - node.radius);
        cover(node.x + node.radius, node.y + node.radius);
    }
    for edge in &layout.edges {
        for command in &edge.path {
            match *command {
                PathCommand::Move { to } | PathCommand::Line { to } => cover(to.0, to.1),
                PathCommand::Quad { ctrl, to } => {
                    cover(ctrl.0, ctrl.1);
                    cover(to.0, to.1);
                }
                PathCommand::Cubic { ctrl1, ctrl2, to } => {
                    cover(ctrl1.0, ctrl1.1);
                    cover(ctrl2.0, ctrl2.1);
                    cover(to.0, to.1);
                }
            }
        }
        cover(edge.label_anchor.0, edge.label_anchor.1);
    }

    if min_x == f32::MAX {
        return;
    }
    layout.min_x = min_x;
    layout.min_y = min_y;
    layout.width = max_x - min_x;
    layout.height = max_y - min_y;
}
