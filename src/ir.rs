use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StateRole {
    Initial,
    #[default]
    State,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct State {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub role: StateRole,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transition {
    pub from: String,
    pub to: String,
    #[serde(default)]
    pub condition: String,
    #[serde(default)]
    pub action: Option<String>,
}

impl Transition {
    pub fn is_self_loop(&self) -> bool {
        self.from == self.to
    }
}

/// A directed multigraph of states and transitions. Both lists are ordered:
/// declaration order drives hub tie-breaks, rim seeding, and sibling ranks,
/// so reordering the input reorders the layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FsmGraph {
    pub states: Vec<State>,
    pub transitions: Vec<Transition>,
}

impl FsmGraph {
    pub fn new() -> Self {
        Self {
            states: Vec::new(),
            transitions: Vec::new(),
        }
    }

    pub fn ensure_state(&mut self, id: &str, label: Option<String>, role: Option<StateRole>) {
        if let Some(state) = self.states.iter_mut().find(|state| state.id == id) {
            if let Some(label) = label {
                state.label = label;
            }
            if let Some(role) = role {
                state.role = role;
            }
            return;
        }
        self.states.push(State {
            id: id.to_string(),
            label: label.unwrap_or_else(|| id.to_string()),
            description: None,
            role: role.unwrap_or_default(),
        });
    }

    pub fn add_transition(&mut self, from: &str, to: &str, condition: &str) {
        self.transitions.push(Transition {
            from: from.to_string(),
            to: to.to_string(),
            condition: condition.to_string(),
            action: None,
        });
    }

    pub fn state(&self, id: &str) -> Option<&State> {
        self.states.iter().find(|state| state.id == id)
    }
}

impl Default for FsmGraph {
    fn default() -> Self {
        Self::new()
    }
}
