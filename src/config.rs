use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeMode {
    Straight,
    Curved,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RadialConfig {
    /// Distance from the hub to every rim node center.
    pub ring_radius: f32,
    /// Body radius of every node; all anchor math projects onto this circle.
    pub node_radius: f32,
    /// Reset/idle labels that force hub selection. Empty means the built-in
    /// vocabulary (IDLE, RESET, WAIT, MAIN).
    pub hub_labels: Vec<String>,
}

impl Default for RadialConfig {
    fn default() -> Self {
        Self {
            // Keeps 80px bodies clear of each other up to ~20 rim nodes.
            ring_radius: 260.0,
            node_radius: 40.0,
            hub_labels: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgeConfig {
    pub mode: EdgeMode,
    /// Gap between fanned parallel transitions sharing an endpoint pair.
    pub parallel_spacing: f32,
    /// Arch height as a fraction of anchor-to-anchor distance.
    pub arch_ratio: f32,
    pub arch_min: f32,
    pub arch_max: f32,
    /// Half-angle between the two self-loop anchors, radians.
    pub loop_spread: f32,
    /// Control-point reach of the first self-loop beyond the node body.
    pub loop_base: f32,
    /// Extra reach per stacked self-loop on the same state.
    pub loop_step: f32,
}

impl Default for EdgeConfig {
    fn default() -> Self {
        Self {
            mode: EdgeMode::Curved,
            parallel_spacing: 26.0,
            arch_ratio: 0.18,
            arch_min: 14.0,
            arch_max: 72.0,
            loop_spread: 0.55,
            loop_base: 52.0,
            loop_step: 24.0,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LayoutConfig {
    pub radial: RadialConfig,
    pub edge: EdgeConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    pub layout: LayoutConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RadialFile {
    ring_radius: Option<f32>,
    node_radius: Option<f32>,
    hub_labels: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EdgeFile {
    mode: Option<EdgeMode>,
    parallel_spacing: Option<f32>,
    arch_ratio: Option<f32>,
    arch_min: Option<f32>,
    arch_max: Option<f32>,
    loop_spread: Option<f32>,
    loop_base: Option<f32>,
    loop_step: Option<f32>,
}

/// Partial config file: every field optional, unset fields keep defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigFile {
    radial: Option<RadialFile>,
    edge: Option<EdgeFile>,
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let mut config = Config::default();
    let Some(path) = path else {
        return Ok(config);
    };

    let contents = std::fs::read_to_string(path)?;
    let parsed: ConfigFile = json5::from_str(&contents)?;
    apply_config_file(&mut config, parsed);
    Ok(config)
}

fn apply_config_file(config: &mut Config, parsed: ConfigFile) {
    if let Some(radial) = parsed.radial {
        if let Some(v) = radial.ring_radius {
            config.layout.radial.ring_radius = v;
        }
        if let Some(v) = radial.node_radius {
            config.layout.radial.node_radius = v;
        }
        if let Some(v) = radial.hub_labels {
            config.layout.radial.hub_labels = v;
        }
    }
    if let Some(edge) = parsed.edge {
        if let Some(v) = edge.mode {
            config.layout.edge.mode = v;
        }
        if let Some(v) = edge.parallel_spacing {
            config.layout.edge.parallel_spacing = v;
        }
        if let Some(v) = edge.arch_ratio {
            config.layout.edge.arch_ratio = v;
        }
        if let Some(v) = edge.arch_min {
            config.layout.edge.arch_min = v;
        }
        if let Some(v) = edge.arch_max {
            config.layout.edge.arch_max = v;
        }
        if let Some(v) = edge.loop_spread {
            config.layout.edge.loop_spread = v;
        }
        if let Some(v) = edge.loop_base {
            config.layout.edge.loop_base = v;
        }
        if let Some(v) = edge.loop_step {
            config.layout.edge.loop_step = v;
        }
    }
}
