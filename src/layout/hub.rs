use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;

use crate::config::RadialConfig;
use crate::ir::FsmGraph;

/// Labels that conventionally mark the canonical reset/idle state of an FSM.
static RESET_VOCABULARY: Lazy<HashSet<&'static str>> =
    Lazy::new(|| ["IDLE", "RESET", "WAIT", "MAIN"].into_iter().collect());

/// Pick the center state: first a reset-vocabulary label match, otherwise the
/// maximum-degree state. Both passes walk states in input order, so ties are
/// broken by declaration. Returns an index into `graph.states`, or `None` for
/// an empty state set.
pub(super) fn select_hub(graph: &FsmGraph, config: &RadialConfig) -> Option<usize> {
    if graph.states.is_empty() {
        return None;
    }

    for (idx, state) in graph.states.iter().enumerate() {
        if label_matches_vocabulary(&state.label, config) {
            return Some(idx);
        }
    }

    let degrees = degrees(graph);
    let mut best = 0usize;
    let mut best_degree = degrees[0];
    for (idx, &degree) in degrees.iter().enumerate().skip(1) {
        if degree > best_degree {
            best = idx;
            best_degree = degree;
        }
    }
    Some(best)
}

fn label_matches_vocabulary(label: &str, config: &RadialConfig) -> bool {
    if config.hub_labels.is_empty() {
        RESET_VOCABULARY
            .iter()
            .any(|word| label.eq_ignore_ascii_case(word))
    } else {
        config
            .hub_labels
            .iter()
            .any(|word| label.eq_ignore_ascii_case(word))
    }
}

/// Per-state transition degree; a self-loop counts once per occurrence, not
/// twice.
fn degrees(graph: &FsmGraph) -> Vec<usize> {
    let index: HashMap<&str, usize> = graph
        .states
        .iter()
        .enumerate()
        .map(|(idx, state)| (state.id.as_str(), idx))
        .collect();
    let mut degrees = vec![0usize; graph.states.len()];
    for transition in &graph.transitions {
        if let Some(&from) = index.get(transition.from.as_str()) {
            degrees[from] += 1;
        }
        if !transition.is_self_loop()
            && let Some(&to) = index.get(transition.to.as_str())
        {
            degrees[to] += 1;
        }
    }
    degrees
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> RadialConfig {
        RadialConfig::default()
    }

    #[test]
    fn vocabulary_match_beats_degree() {
        let mut graph = FsmGraph::new();
        graph.ensure_state("S0", Some("busy".to_string()), None);
        graph.ensure_state("S1", Some("idle".to_string()), None);
        graph.add_transition("S0", "S1", "done");
        graph.add_transition("S1", "S0", "go");
        graph.add_transition("S0", "S0", "tick");
        assert_eq!(select_hub(&graph, &config()), Some(1));
    }

    #[test]
    fn max_degree_wins_without_vocabulary_match() {
        let mut graph = FsmGraph::new();
        graph.ensure_state("A", None, None);
        graph.ensure_state("B", None, None);
        graph.ensure_state("C", None, None);
        graph.add_transition("A", "B", "x");
        graph.add_transition("B", "C", "y");
        graph.add_transition("C", "B", "z");
        // degrees: A=1, B=3, C=2
        assert_eq!(select_hub(&graph, &config()), Some(1));
    }

    #[test]
    fn degree_tie_breaks_by_input_order() {
        let mut graph = FsmGraph::new();
        graph.ensure_state("A", None, None);
        graph.ensure_state("B", None, None);
        graph.add_transition("A", "B", "x");
        assert_eq!(select_hub(&graph, &config()), Some(0));
    }

    #[test]
    fn self_loop_counts_once() {
        let mut graph = FsmGraph::new();
        graph.ensure_state("A", None, None);
        graph.ensure_state("B", None, None);
        graph.add_transition("A", "A", "spin");
        graph.add_transition("B", "A", "x");
        graph.add_transition("B", "A", "y");
        // A: loop(1) + two incoming = 3; B: two outgoing = 2.
        assert_eq!(select_hub(&graph, &config()), Some(0));
    }

    #[test]
    fn custom_vocabulary_replaces_builtin() {
        let mut graph = FsmGraph::new();
        graph.ensure_state("A", Some("idle".to_string()), None);
        graph.ensure_state("B", Some("home".to_string()), None);
        let mut config = config();
        config.hub_labels = vec!["HOME".to_string()];
        assert_eq!(select_hub(&graph, &config), Some(1));
    }

    #[test]
    fn empty_state_set_has_no_hub() {
        assert_eq!(select_hub(&FsmGraph::new(), &config()), None);
    }
}
