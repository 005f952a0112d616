//! Error type for the ohmnet CLI.

use std::path::PathBuf;

/// Everything that can stop a run, wrapping the library errors.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Failed to read config file: {path}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("Load error: {0}")]
    Load(#[from] on_netlist::LoadError),

    #[error("No junction named {name} to mark as a port")]
    UnknownPort { name: String },

    #[error("Cannot mark port: {0}")]
    Graph(#[from] on_graph::GraphError),

    #[error("Reduction error: {0}")]
    Reduce(#[from] on_reduce::ReduceError),
}

pub type CliResult<T> = Result<T, CliError>;
