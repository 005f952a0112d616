//! Graph-specific error types.

use on_core::{CompId, OnError};

pub type GraphResult<T> = Result<T, GraphError>;

/// Structural errors: a mutation whose precondition does not hold, or a graph
/// that breaks one of the adjacency invariants.
///
/// None of these are expected on a correctly loaded graph; they indicate an
/// internal invariant breach and are fatal to the run.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    /// A mutation primitive was called on a component that cannot satisfy it.
    #[error("{op} on {component}: {detail}")]
    PrecondViolation {
        op: &'static str,
        component: String,
        detail: String,
    },

    /// A resistor was required at this position.
    #[error("{component} is not a resistor")]
    NotAResistor { component: String },

    /// An adjacency entry refers to a component that does not exist (or was removed).
    #[error("{component} refers to missing component {target}")]
    Dangling { component: String, target: CompId },

    /// A lists B a different number of times than B lists A.
    #[error("adjacency between {a} and {b} is not symmetric ({a} lists {b} {forward}x, {b} lists {a} {backward}x)")]
    Asymmetric {
        a: String,
        b: String,
        forward: usize,
        backward: usize,
    },

    /// A component lists itself as a neighbour.
    #[error("{component} is connected to itself")]
    SelfLoop { component: String },

    /// Two components share a name.
    #[error("duplicate component name {name}")]
    DuplicateName { name: String },

    /// A series walk from `seed` came back to `seed` without meeting a junction.
    #[error("resistor ring through {seed} has no junction boundary")]
    ResistorCycle { seed: String },

    /// A lookup by handle fell outside the table.
    #[error("no component at {id} (graph has {len})")]
    NoSuchComponent { id: CompId, len: usize },

    #[error(transparent)]
    Core(#[from] OnError),
}

impl GraphError {
    pub fn precond(
        op: &'static str,
        component: &str,
        detail: impl Into<String>,
    ) -> Self {
        GraphError::PrecondViolation {
            op,
            component: component.to_string(),
            detail: detail.into(),
        }
    }
}
