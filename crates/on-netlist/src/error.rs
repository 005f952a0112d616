//! Error types for on-netlist.

use std::path::PathBuf;

use on_graph::GraphError;

pub type LoadResult<T> = Result<T, LoadError>;

/// Load errors. All are fatal: nothing is reduced from a netlist that fails
/// to load.
#[derive(thiserror::Error, Debug)]
pub enum LoadError {
    #[error("failed to read netlist file: {path}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("line {line}: duplicate symbol {symbol} (first declared on line {first_line})")]
    DuplicateSymbol {
        line: usize,
        symbol: String,
        first_line: usize,
    },

    #[error("line {line}: unknown declaration kind {symbol}")]
    UnknownKind { line: usize, symbol: String },

    #[error("line {line}: symbol {symbol} contains reserved character '{ch}'")]
    ReservedSymbol { line: usize, symbol: String, ch: char },

    #[error("line {line}: {symbol} is missing its {field}")]
    MissingField {
        line: usize,
        symbol: String,
        field: &'static str,
    },

    #[error("line {line}: unexpected token {token} after {symbol}")]
    UnexpectedToken {
        line: usize,
        symbol: String,
        token: String,
    },

    #[error("line {line}: invalid {field} '{value}' for {symbol}")]
    InvalidValue {
        line: usize,
        symbol: String,
        field: &'static str,
        value: String,
    },

    #[error("line {line}: {symbol} refers to undeclared symbol {target}")]
    UndeclaredSymbol {
        line: usize,
        symbol: String,
        target: String,
    },

    #[error("line {line}: {symbol} refers to itself")]
    SelfReference { line: usize, symbol: String },

    #[error("{from} lists {to}, but {to} does not connect back to {from}")]
    Asymmetric { from: String, to: String },

    #[error(transparent)]
    Graph(#[from] GraphError),
}
