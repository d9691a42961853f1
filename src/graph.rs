//! Implement a graph that can be colored with a greedy vertex coloring.
//!
//! The coloring is not the chromatic number of the graph: it is *a* valid coloring
//! found in a single depth first sweep, which may use more colors than needed.

mod adjacency_parser;
mod greedy_coloring;
mod vertex;

use std::fmt::Display;

use itertools::Itertools;

pub use adjacency_parser::{AdjacencyParser, Rule};
pub use vertex::{Color, Vertex};

/// Adjacency list graph.
///
/// Vertices live in an indexed array owned by the graph, and refer to their neighbours
/// by index, so cyclic adjacency needs neither shared ownership nor interior mutability.
///
/// * Names are unique: vertices are only created through get_or_create_vertex().
/// * Every neighbour index points into vertices.
#[derive(Debug, Default, Clone)]
pub struct Graph {
    /// All vertices in the graph, in creation order.
    vertices: Vec<Vertex>,
}

impl Graph {
    pub fn new() -> Self {
        Graph { vertices: vec![] }
    }

    /// Return the vertex indexed by vertex_idx.
    pub fn get_vertex(&self, vertex_idx: usize) -> &Vertex {
        &self.vertices[vertex_idx]
    }

    /// Return a mutable vertex indexed by vertex_idx.
    fn get_vertex_mut(&mut self, vertex_idx: usize) -> &mut Vertex {
        &mut self.vertices[vertex_idx]
    }

    /// Iterate over all vertices in creation order.
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.vertices.iter()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Return the index of the vertex with exactly the given name.
    ///
    /// Expensive for large data sets: O(n)
    pub fn find_vertex(&self, name: &str) -> Option<usize> {
        self.vertices.iter().position(|vertex| vertex.name == name)
    }

    /// Return the index of the vertex with the given name, adding a new uncolored
    /// vertex to the end of the graph if there is none.
    pub fn get_or_create_vertex(&mut self, name: &str) -> usize {
        if let Some(vertex_idx) = self.find_vertex(name) {
            return vertex_idx;
        }
        let idx = self.vertices.len();
        self.vertices.push(Vertex::new(name));

        idx
    }

    /// Link vertex_idx to neighbour_idx.  The reverse link is not added.
    ///
    /// Returns false if the link already existed, both indexes are the same vertex, or
    /// neighbour_idx is not a vertex of this graph.
    pub fn add_neighbour(&mut self, vertex_idx: usize, neighbour_idx: usize) -> bool {
        if neighbour_idx >= self.vertices.len() {
            return false;
        }
        self.get_vertex_mut(vertex_idx)
            .add_neighbour(vertex_idx, neighbour_idx)
    }

    /// Names of the neighbours of vertex_idx, in adjacency order.
    pub fn neighbour_names(&self, vertex_idx: usize) -> Vec<String> {
        self.get_vertex(vertex_idx)
            .neighbours()
            .iter()
            .map(|neighbour_idx| self.get_vertex(*neighbour_idx).name.clone())
            .collect()
    }

    /// Each vertex name with the names of its neighbours, in creation order.
    pub fn describe(&self) -> Vec<(String, Vec<String>)> {
        (0..self.vertices.len())
            .map(|vertex_idx| {
                (
                    self.get_vertex(vertex_idx).name.clone(),
                    self.neighbour_names(vertex_idx),
                )
            })
            .collect()
    }

    /// Each vertex name with its color, in creation order.
    pub fn colors(&self) -> Vec<(String, Option<Color>)> {
        self.vertices
            .iter()
            .map(|vertex| (vertex.name.clone(), vertex.color))
            .collect()
    }

    /// Names of the vertices which have no color.
    ///
    /// After color_graph(), these are the vertices which can not be reached from the
    /// first vertex.
    pub fn uncolored_vertices(&self) -> Vec<&str> {
        self.vertices
            .iter()
            .filter(|vertex| !vertex.has_color())
            .map(|vertex| vertex.name())
            .collect()
    }

    /// Number of distinct colors across all vertices.
    ///
    /// Being uncolored counts as one more distinct value, so a graph with vertices the
    /// coloring never reached reports one more than the number of colors used.
    pub fn unique_color_count(&self) -> usize {
        self.vertices.iter().map(|vertex| vertex.color).unique().count()
    }
}

impl Display for Graph {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        for (name, neighbours) in self.describe() {
            writeln!(fmt, "{name}: {}", neighbours.iter().join(", "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_or_create_vertex() {
        let mut graph = Graph::new();

        let a_idx = graph.get_or_create_vertex("A");
        let b_idx = graph.get_or_create_vertex("B");

        assert_eq!(graph.get_or_create_vertex("A"), a_idx);
        assert_eq!(graph.get_or_create_vertex("B"), b_idx);
        assert_eq!(graph.vertex_count(), 2);
        assert!(!graph.get_vertex(a_idx).has_color());
    }

    #[test]
    fn test_find_vertex_is_exact() {
        let mut graph = Graph::new();
        graph.get_or_create_vertex("A");

        assert_eq!(graph.find_vertex("A"), Some(0));
        assert_eq!(graph.find_vertex(" A"), None);
        assert_eq!(graph.find_vertex("a"), None);
    }

    #[test]
    fn test_add_neighbour() {
        let mut graph = Graph::new();
        let a_idx = graph.get_or_create_vertex("A");
        let b_idx = graph.get_or_create_vertex("B");

        assert!(graph.add_neighbour(a_idx, b_idx));
        assert!(!graph.add_neighbour(a_idx, b_idx));
        assert!(!graph.add_neighbour(a_idx, a_idx));
        assert!(!graph.add_neighbour(a_idx, 7));

        assert_eq!(graph.neighbour_names(a_idx), vec!["B"]);
        assert!(graph.neighbour_names(b_idx).is_empty());
    }

    #[test]
    fn test_unique_color_count_of_empty_graph() {
        assert_eq!(Graph::new().unique_color_count(), 0);
    }

    #[test]
    fn test_unique_color_count_counts_uncolored() {
        let mut graph = Graph::new();
        let a_idx = graph.get_or_create_vertex("A");
        let b_idx = graph.get_or_create_vertex("B");
        graph.get_or_create_vertex("C");

        assert_eq!(graph.unique_color_count(), 1);

        graph.get_vertex_mut(a_idx).set_color(1);
        graph.get_vertex_mut(b_idx).set_color(1);
        assert_eq!(graph.unique_color_count(), 2);
        assert_eq!(graph.uncolored_vertices(), vec!["C"]);
    }

    #[test]
    fn test_display() {
        let graph = Graph::parse("A:B,C\nB:A").unwrap();

        assert_eq!(graph.to_string(), "A: B, C\nB: A\nC: \n");
    }
}
