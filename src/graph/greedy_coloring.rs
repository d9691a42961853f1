//! Greedy coloring of a graph.
//!
//! Starting at the first vertex of the graph, walk the neighbour links depth first and give
//! each vertex the smallest color which is not already taken by a contiguous run of its
//! neighbours' colors, starting at 1.
//!
//! * Only the direct neighbourhood of a vertex is considered when choosing its color.
//! * Vertices which can not be reached from the first vertex are left uncolored.
//! * The walk order is fixed by vertex creation order and neighbour order, so the same
//!   input always produces the same colors.
use itertools::Itertools;
use log::{debug, trace};

use super::{vertex::Color, Graph};

/// A vertex on the walk stack, along with the position of the next neighbour to visit.
#[derive(Debug, Clone, Copy)]
struct WalkFrame {
    vertex_idx: usize,
    next_neighbour: usize,
}

impl WalkFrame {
    fn new(vertex_idx: usize) -> Self {
        WalkFrame {
            vertex_idx,
            next_neighbour: 0,
        }
    }
}

impl Graph {
    /// Color every vertex reachable from the first vertex of the graph.
    ///
    /// Visits vertices in the same order a recursive depth first walk would:
    /// * color the vertex on entry (if it has no color yet),
    /// * then enter each of its neighbours in adjacency order, skipping those which have
    ///   a color by the time they come up.
    ///
    /// An explicit stack is used instead of recursion so long chains can not overflow the
    /// call stack.  Calling this again on a colored graph changes nothing.
    pub fn color_graph(&mut self) {
        if self.is_empty() {
            return;
        }
        let start_idx = 0;

        self.assign_minimum_color(start_idx);
        let mut stack = vec![WalkFrame::new(start_idx)];

        while let Some(frame) = stack.last_mut() {
            let neighbours = self.get_vertex(frame.vertex_idx).neighbours();

            if let Some(&neighbour_idx) = neighbours.get(frame.next_neighbour) {
                frame.next_neighbour += 1;

                if !self.get_vertex(neighbour_idx).has_color() {
                    self.assign_minimum_color(neighbour_idx);
                    stack.push(WalkFrame::new(neighbour_idx));
                }
            } else {
                stack.pop();
            }
        }

        debug!(
            "colored graph: {} unique color(s), {} vertices left uncolored",
            self.unique_color_count(),
            self.uncolored_vertices().len()
        );
    }

    /// Smallest color available to vertex_idx given the colors of its direct neighbours.
    ///
    /// Neighbour colors are scanned in ascending order.  As long as they form a run
    /// 1, 2, 3... the candidate moves past the run; the first gap ends the scan.
    /// Uncolored neighbours do not constrain the result.
    ///
    /// * neighbour colors {1, 2, 4} -> 3
    /// * neighbour colors {1, 2, 3} -> 4
    /// * no colored neighbours -> 1
    pub fn minimum_available_color(&self, vertex_idx: usize) -> Color {
        let neighbour_colors = self
            .get_vertex(vertex_idx)
            .neighbours()
            .iter()
            .filter_map(|neighbour_idx| self.get_vertex(*neighbour_idx).color())
            .sorted();

        let mut run_end: Color = 0;
        for color in neighbour_colors {
            if color > run_end {
                if color == run_end + 1 {
                    run_end = color;
                } else {
                    break;
                }
            }
        }

        run_end + 1
    }

    /// Give vertex_idx its minimum available color, unless it already has a color.
    fn assign_minimum_color(&mut self, vertex_idx: usize) {
        if self.get_vertex(vertex_idx).has_color() {
            return;
        }
        let color = self.minimum_available_color(vertex_idx);
        self.get_vertex_mut(vertex_idx).set_color(color);

        trace!("{}", self.get_vertex(vertex_idx));
    }
}
