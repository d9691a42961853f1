//! Errors returned while building or coloring graphs.

use std::path::PathBuf;

use thiserror::Error;

use crate::graph::Rule;

#[derive(Debug, Error)]
pub enum GraphError {
    /// The adjacency list grammar rejected the input.
    #[error("could not parse adjacency list: {0}")]
    Parse(#[from] Box<pest::error::Error<Rule>>),

    /// The adjacency list could not be read from disk.
    #[error("can't read file: {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No built in example graph goes by this name.
    #[error("no example graph named {0:?}")]
    UnknownExample(String),
}
