//! Greedy vertex coloring of graphs given as adjacency lists.
//!
//! ```
//! use chromatic_rs::api::color_adjacency_list;
//!
//! let summary = color_adjacency_list("A:B,C\nB:A,C\nC:A,B").unwrap();
//! assert_eq!(summary.unique_color_count, 3);
//! ```

pub mod api;
pub mod error;
pub mod graph;
pub mod graph_examples;
