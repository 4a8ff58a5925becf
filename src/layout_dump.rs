use crate::ir::StateRole;
use crate::layout::{Layout, NodeBody, PathCommand};
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Machine-readable snapshot of a placed graph. This is the hand-off format
/// the interactive editing surface consumes; after the hand-off it owns the
/// positions and may mutate them freely.
#[derive(Debug, Serialize)]
pub struct LayoutDump {
    pub hub: Option<String>,
    pub ring: Vec<String>,
    pub min_x: f32,
    pub min_y: f32,
    pub width: f32,
    pub height: f32,
    pub nodes: Vec<NodeDump>,
    pub edges: Vec<EdgeDump>,
}

#[derive(Debug, Serialize)]
pub struct NodeDump {
    pub id: String,
    pub label: String,
    pub role: StateRole,
    pub body: NodeBody,
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub ring_index: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct EdgeDump {
    pub id: usize,
    pub from: String,
    pub to: String,
    pub label: String,
    pub condition: String,
    pub action: Option<String>,
    pub self_loop: bool,
    pub hub_connection: bool,
    pub neighbor: bool,
    pub sibling_index: usize,
    pub sibling_count: usize,
    pub path: Vec<PathCommand>,
    pub label_anchor: [f32; 2],
}

impl LayoutDump {
    pub fn from_layout(layout: &Layout) -> Self {
        let nodes = layout
            .nodes
            .values()
            .map(|node| NodeDump {
                id: node.id.clone(),
                label: node.label.clone(),
                role: node.role,
                body: node.body,
                x: node.x,
                y: node.y,
                radius: node.radius,
                ring_index: node.ring_index,
            })
            .collect();

        let edges = layout
            .edges
            .iter()
            .map(|edge| EdgeDump {
                id: edge.index,
                from: edge.from.clone(),
                to: edge.to.clone(),
                label: edge.label.clone(),
                condition: edge.condition.clone(),
                action: edge.action.clone(),
                self_loop: edge.is_self_loop,
                hub_connection: edge.is_hub_connection,
                neighbor: edge.is_neighbor,
                sibling_index: edge.sibling_index,
                sibling_count: edge.sibling_count,
                path: edge.path.clone(),
                label_anchor: [edge.label_anchor.0, edge.label_anchor.1],
            })
            .collect();

        LayoutDump {
            hub: layout.hub.clone(),
            ring: layout.ring.clone(),
            min_x: layout.min_x,
            min_y: layout.min_y,
            width: layout.width,
            height: layout.height,
            nodes,
            edges,
        }
    }
}

pub fn dump_to_string(layout: &Layout) -> anyhow::Result<String> {
    let dump = LayoutDump::from_layout(layout);
    Ok(serde_json::to_string_pretty(&dump)?)
}

pub fn write_layout_dump(path: &Path, layout: &Layout) -> anyhow::Result<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    let dump = LayoutDump::from_layout(layout);
    serde_json::to_writer_pretty(writer, &dump)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LayoutConfig;
    use crate::ir::FsmGraph;
    use crate::layout::compute_layout;

    #[test]
    fn dump_carries_flags_and_paths() {
        let mut graph = FsmGraph::new();
        graph.ensure_state("IDLE", None, None);
        graph.ensure_state("RUN", None, None);
        graph.add_transition("IDLE", "RUN", "start");
        graph.add_transition("RUN", "RUN", "busy");

        let layout = compute_layout(&graph, &LayoutConfig::default());
        let json = dump_to_string(&layout).unwrap();
        assert!(json.contains("\"hub\": \"IDLE\""));
        assert!(json.contains("\"self_loop\": true"));
        assert!(json.contains("\"op\": \"cubic\""));
        assert!(json.contains("\"label_anchor\""));
    }

    #[test]
    fn nodes_dump_in_stable_id_order() {
        let mut graph = FsmGraph::new();
        for id in ["IDLE", "Z", "A"] {
            graph.ensure_state(id, None, None);
        }
        let layout = compute_layout(&graph, &LayoutConfig::default());
        let dump = LayoutDump::from_layout(&layout);
        let ids: Vec<&str> = dump.nodes.iter().map(|node| node.id.as_str()).collect();
        assert_eq!(ids, vec!["A", "IDLE", "Z"]);
    }
}
