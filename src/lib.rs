#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod ir;
pub mod layout;
pub mod layout_dump;
pub mod loader;

#[cfg(feature = "cli")]
pub use cli::run;
pub use config::{Config, EdgeMode, LayoutConfig, load_config};
pub use ir::{FsmGraph, State, StateRole, Transition};
pub use layout::{Layout, PathCommand, PlacedEdge, PlacedNode, compute_layout};
pub use loader::{GraphError, parse_graph, validate_graph};
