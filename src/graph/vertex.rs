//! Represents a vertex (node) within a graph.

use std::fmt::Display;

/// Colors are positive integers handed out by the greedy coloring, starting at 1.
pub type Color = u32;

// Represents the vertex element of a graph.
//
// Vertices are linked together through neighbour lists holding indexes into the graph's
// vertex list.  A link is one directional: if A lists B, B only lists A when the input
// said so as well.
#[derive(Debug, Eq, PartialEq, Clone)]
pub struct Vertex {
    /// Name given in the adjacency list, used verbatim.  Unique within a graph.
    pub(super) name: String,
    /// Color assigned by the greedy coloring.  None until the coloring reaches this vertex.
    pub(super) color: Option<Color>,
    /// Neighbours of this vertex in first seen order.  Each entry is an index into the
    /// graph's vertex list.
    pub(super) neighbours: Vec<usize>,
}

impl Vertex {
    /// Return a new, uncolored vertex which is not yet connected to a graph.
    pub(super) fn new(name: &str) -> Self {
        Vertex {
            name: name.to_string(),
            color: None,
            neighbours: vec![],
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> Option<Color> {
        self.color
    }

    /// True once the coloring has assigned a color to this vertex.
    pub fn has_color(&self) -> bool {
        self.color.is_some()
    }

    /// Indexes of the neighbours of this vertex, in the order they were added.
    pub fn neighbours(&self) -> &[usize] {
        &self.neighbours
    }

    pub fn is_neighbour(&self, vertex_idx: usize) -> bool {
        self.neighbours.contains(&vertex_idx)
    }

    /// Add a neighbour to this vertex.
    ///
    /// * self_idx is the index of this vertex within its graph.
    /// * Returns false (and changes nothing) if the neighbour is already present, or
    ///   if it is this vertex itself.
    ///
    /// Indexes are unique per name within a graph, so this also keeps neighbours
    /// unique by name.
    pub(super) fn add_neighbour(&mut self, self_idx: usize, vertex_idx: usize) -> bool {
        if self_idx == vertex_idx || self.is_neighbour(vertex_idx) {
            return false;
        }
        self.neighbours.push(vertex_idx);

        true
    }

    /// Set the color of this vertex, unless it already has one.
    ///
    /// Returns true if the color was set.
    pub(super) fn set_color(&mut self, color: Color) -> bool {
        if self.has_color() {
            return false;
        }
        self.color = Some(color);

        true
    }
}

impl Display for Vertex {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        match self.color {
            Some(color) => write!(fmt, "{} (color {color})", self.name),
            None => write!(fmt, "{} (uncolored)", self.name),
        }
    }
}
