use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::ir::StateRole;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeBody {
    Hub,
    Rim,
}

#[derive(Debug, Clone)]
pub struct PlacedNode {
    pub id: String,
    pub x: f32,
    pub y: f32,
    /// Circular body footprint; every edge anchor lies on this circle.
    pub radius: f32,
    pub body: NodeBody,
    /// Position around the ring, hub excluded.
    pub ring_index: Option<usize>,
    pub label: String,
    pub role: StateRole,
}

impl PlacedNode {
    pub fn center(&self) -> (f32, f32) {
        (self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum PathCommand {
    Move { to: (f32, f32) },
    Line { to: (f32, f32) },
    Quad { ctrl: (f32, f32), to: (f32, f32) },
    Cubic { ctrl1: (f32, f32), ctrl2: (f32, f32), to: (f32, f32) },
}

impl PathCommand {
    pub fn endpoint(&self) -> (f32, f32) {
        match *self {
            PathCommand::Move { to }
            | PathCommand::Line { to }
            | PathCommand::Quad { to, .. }
            | PathCommand::Cubic { to, .. } => to,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PlacedEdge {
    /// Position of the source transition in the input sequence.
    pub index: usize,
    pub from: String,
    pub to: String,
    /// Derived 1-based display label; the inspector may rewrite it later.
    pub label: String,
    pub condition: String,
    pub action: Option<String>,
    pub is_self_loop: bool,
    pub is_hub_connection: bool,
    /// Both endpoints are ring-adjacent rim nodes, wraparound included.
    pub is_neighbor: bool,
    pub sibling_index: usize,
    pub sibling_count: usize,
    pub path: Vec<PathCommand>,
    pub label_anchor: (f32, f32),
}

#[derive(Debug, Clone)]
pub struct Layout {
    pub hub: Option<String>,
    /// Rim state ids in ring order.
    pub ring: Vec<String>,
    pub nodes: BTreeMap<String, PlacedNode>,
    pub edges: Vec<PlacedEdge>,
    pub min_x: f32,
    pub min_y: f32,
    pub width: f32,
    pub height: f32,
}

impl Layout {
    pub fn empty() -> Self {
        Self {
            hub: None,
            ring: Vec::new(),
            nodes: BTreeMap::new(),
            edges: Vec::new(),
            min_x: 0.0,
            min_y: 0.0,
            width: 0.0,
            height: 0.0,
        }
    }
}
