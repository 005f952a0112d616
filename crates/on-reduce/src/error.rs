//! Error types for on-reduce.

use on_core::OnError;
use on_graph::GraphError;

pub type ReduceResult<T> = Result<T, ReduceError>;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ReduceError {
    /// A parallel bundle contains a zero-ohm resistor.
    #[error("parallel merge through zero-resistance {name}")]
    ZeroResistance { name: String },

    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Core(#[from] OnError),
}
