use std::collections::HashSet;

use thiserror::Error;

use crate::ir::FsmGraph;

/// Rejections for ill-formed graph descriptions. Referential integrity is
/// enforced here, before layout ever runs; the layout pipeline assumes
/// well-formed input and never re-validates.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("invalid graph description: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("duplicate state id `{0}`")]
    DuplicateState(String),
    #[error("transition {index} references unknown state `{id}`")]
    UnknownState { index: usize, id: String },
}

/// Parse a JSON graph description and validate it.
pub fn parse_graph(input: &str) -> Result<FsmGraph, GraphError> {
    let graph: FsmGraph = serde_json::from_str(input)?;
    validate_graph(&graph)?;
    Ok(graph)
}

pub fn validate_graph(graph: &FsmGraph) -> Result<(), GraphError> {
    let mut seen: HashSet<&str> = HashSet::new();
    for state in &graph.states {
        if !seen.insert(state.id.as_str()) {
            return Err(GraphError::DuplicateState(state.id.clone()));
        }
    }
    for (index, transition) in graph.transitions.iter().enumerate() {
        for id in [&transition.from, &transition.to] {
            if !seen.contains(id.as_str()) {
                return Err(GraphError::UnknownState {
                    index,
                    id: id.clone(),
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_description() {
        let input = r#"{
            "states": [
                { "id": "IDLE", "label": "Idle", "role": "initial" },
                { "id": "RUN", "label": "Run" }
            ],
            "transitions": [
                { "from": "IDLE", "to": "RUN", "condition": "start" }
            ]
        }"#;
        let graph = parse_graph(input).unwrap();
        assert_eq!(graph.states.len(), 2);
        assert_eq!(graph.transitions.len(), 1);
        assert_eq!(graph.transitions[0].condition, "start");
        assert!(graph.transitions[0].action.is_none());
    }

    #[test]
    fn rejects_duplicate_state_id() {
        let mut graph = FsmGraph::new();
        graph.states.push(crate::ir::State {
            id: "A".to_string(),
            label: "A".to_string(),
            description: None,
            role: crate::ir::StateRole::State,
        });
        graph.states.push(crate::ir::State {
            id: "A".to_string(),
            label: "A again".to_string(),
            description: None,
            role: crate::ir::StateRole::State,
        });
        let err = validate_graph(&graph).unwrap_err();
        assert!(matches!(err, GraphError::DuplicateState(id) if id == "A"));
    }

    #[test]
    fn rejects_dangling_transition() {
        let mut graph = FsmGraph::new();
        graph.ensure_state("A", None, None);
        graph.add_transition("A", "GHOST", "go");
        let err = validate_graph(&graph).unwrap_err();
        match err {
            GraphError::UnknownState { index, id } => {
                assert_eq!(index, 0);
                assert_eq!(id, "GHOST");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn error_messages_are_readable() {
        let err = GraphError::UnknownState {
            index: 2,
            id: "FOO".to_string(),
        };
        assert_eq!(err.to_string(), "transition 2 references unknown state `FOO`");
    }
}
