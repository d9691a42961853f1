//! Top level api methods for chromatic-rs.

use std::fs;
use std::path::Path;

use log::info;

use crate::{
    error::GraphError,
    graph::{Color, Graph},
};

/// Everything a report about a colored graph needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColoringSummary {
    /// Each vertex with its neighbours' names, in creation order.
    pub adjacency: Vec<(String, Vec<String>)>,
    /// Each vertex with its color, in creation order.  None if the coloring never reached it.
    pub colors: Vec<(String, Option<Color>)>,
    /// Number of distinct colors, counting "uncolored" as one of them.
    pub unique_color_count: usize,
}

impl From<&Graph> for ColoringSummary {
    fn from(graph: &Graph) -> Self {
        ColoringSummary {
            adjacency: graph.describe(),
            colors: graph.colors(),
            unique_color_count: graph.unique_color_count(),
        }
    }
}

/// Given an adjacency list, return its colored graph.
pub fn color_graph_str(adjacency: &str) -> Result<Graph, GraphError> {
    let mut graph = Graph::parse(adjacency)?;

    graph.color_graph();

    Ok(graph)
}

/// Given an adjacency list, color it and summarize the result.
pub fn color_adjacency_list(adjacency: &str) -> Result<ColoringSummary, GraphError> {
    let graph = color_graph_str(adjacency)?;

    Ok(ColoringSummary::from(&graph))
}

/// Read the whole adjacency list stored at path.
///
/// An empty file is a valid, empty adjacency list.
pub fn read_adjacency_file(path: impl AsRef<Path>) -> Result<String, GraphError> {
    let path = path.as_ref();
    info!("reading adjacency list from {}", path.display());

    fs::read_to_string(path).map_err(|source| GraphError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Read the adjacency list stored at path, color it and summarize the result.
pub fn color_adjacency_file(path: impl AsRef<Path>) -> Result<ColoringSummary, GraphError> {
    let adjacency = read_adjacency_file(path)?;

    color_adjacency_list(&adjacency)
}
