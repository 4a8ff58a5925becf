use crate::config::{Config, EdgeMode, load_config};
use crate::layout::compute_layout;
use crate::layout_dump::{dump_to_string, write_layout_dump};
use crate::loader::parse_graph;
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::io::{self, Read};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "swl", version, about = "Radial FSM diagram layout (hub/rim placement + edge routing)")]
pub struct Args {
    /// Input graph description (.json) or '-' for stdin
    #[arg(short = 'i', long = "input")]
    pub input: Option<PathBuf>,

    /// Output layout dump (.json). Defaults to stdout if omitted.
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Config file (JSON5, partial overrides)
    #[arg(short = 'c', long = "configFile")]
    pub config: Option<PathBuf>,

    /// Edge routing mode, overrides the config file
    #[arg(short = 'm', long = "mode", value_enum)]
    pub mode: Option<ModeArg>,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum ModeArg {
    Straight,
    Curved,
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    let mut config = load_config(args.config.as_deref())?;
    apply_mode(&mut config, args.mode);

    let input = read_input(args.input.as_deref())?;
    // Ill-formed descriptions must fail here, visibly, before layout runs.
    let graph = parse_graph(&input).context("graph description rejected")?;
    let layout = compute_layout(&graph, &config.layout);

    match args.output.as_deref() {
        Some(path) => write_layout_dump(path, &layout)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => println!("{}", dump_to_string(&layout)?),
    }
    Ok(())
}

fn apply_mode(config: &mut Config, mode: Option<ModeArg>) {
    if let Some(mode) = mode {
        config.layout.edge.mode = match mode {
            ModeArg::Straight => EdgeMode::Straight,
            ModeArg::Curved => EdgeMode::Curved,
        };
    }
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        _ => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}
