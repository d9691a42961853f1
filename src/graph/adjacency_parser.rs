//! With Graph::parse(), creates a new graph given an adjacency list.
//!
//! The format is one record per line:
//!
//! ```text
//! A:B,C
//! B:A,C
//! C:A,B
//! ```
//!
//! * Everything before the first `:` is the vertex name, everything after is a `,`
//!   separated list of neighbour names.  Names are used verbatim (no trimming).
//! * Lines without a `:` are skipped.
//! * Each record only links the vertex to its neighbours.  The reverse link has to be
//!   declared by its own record.
use std::str::FromStr;

use log::debug;
use pest::iterators::Pair;
use pest::Parser;
use pest_derive::Parser;

use crate::error::GraphError;
use crate::graph::Graph;

#[derive(Parser)]
#[grammar = "adjacency.pest"]
pub struct AdjacencyParser;

impl Graph {
    /// Given an adjacency list, build a graph.
    ///
    /// Uses the Pest crate to split lines and names.  The grammar accepts any text, so
    /// in practice this does not fail: malformed lines are dropped, and duplicate
    /// neighbours are ignored.
    ///
    /// Vertices are created in the order their names are first seen, which is also the
    /// order the coloring later walks them in.
    pub fn parse(text: &str) -> Result<Self, GraphError> {
        let adjacency_list = AdjacencyParser::parse(Rule::adjacency_list, text)
            .map_err(Box::new)?;

        let mut graph = Graph::new();

        for record in adjacency_list.flatten() {
            if record.as_rule() == Rule::declaration {
                add_declaration(&mut graph, record);
            }
        }

        let skipped = text.split('\n').filter(|line| !line.contains(':')).count();
        if skipped > 0 {
            debug!("skipped {skipped} line(s) without a ':' separator");
        }
        debug!("parsed graph with {} vertices", graph.vertex_count());

        Ok(graph)
    }
}

impl FromStr for Graph {
    type Err = GraphError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Self::parse(text)
    }
}

/// Given a declaration (e.g. A:B,C), add the vertex and link it to each of its neighbours.
fn add_declaration(graph: &mut Graph, declaration: Pair<'_, Rule>) {
    let mut parts = declaration.into_inner();
    let (Some(vertex_name), Some(neighbour_list)) = (parts.next(), parts.next()) else {
        return;
    };
    let vertex_idx = graph.get_or_create_vertex(vertex_name.as_str());

    for neighbour_name in neighbour_list.into_inner() {
        let neighbour_idx = graph.get_or_create_vertex(neighbour_name.as_str());
        graph.add_neighbour(vertex_idx, neighbour_idx);
    }
}
