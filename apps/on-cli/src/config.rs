//! YAML reduction options.
//!
//! ```yaml
//! max_rounds: 20
//! check_invariants: false
//! ```
//!
//! Missing keys keep their defaults.

use std::path::Path;

use on_reduce::ReduceOptions;

use crate::error::{CliError, CliResult};

pub fn load_options(path: &Path) -> CliResult<ReduceOptions> {
    let text = std::fs::read_to_string(path).map_err(|source| CliError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse_options(&text).map_err(|source| CliError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_options(text: &str) -> Result<ReduceOptions, serde_yaml::Error> {
    // An empty document deserializes as null, not as an empty map
    if text.trim().is_empty() {
        return Ok(ReduceOptions::default());
    }
    serde_yaml::from_str(text)
}
