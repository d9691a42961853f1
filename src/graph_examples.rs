//! Examples of adjacency lists to be used for testing and display.

use crate::{error::GraphError, graph::Graph};

pub const GRAPH_EXAMPLES: [(&str, &str); 10] = [
    ("single_edge",         "A:B\nB:A"),
    ("triangle",            "A:B,C\nB:A,C\nC:A,B"),
    ("star",                "A:B,C\nB:A\nC:A"),
    ("square",              "A:B,D\nB:A,C\nC:B,D\nD:A,C"),
    ("one_directional",     "A:B\nB:C\nC:A"),
    ("two_components",      "A:B,C\nB:A,C\nC:A,B\nD:E\nE:D"),
    ("with_malformed_line", "A:B\nmalformed-line\nB:A"),
    (
        "complete_4",
        "A:B,C,D
B:A,C,D
C:A,B,D
D:A,B,C",
    ),
    (
        "crown_6",
        "a1:b2,b3
a2:b1,b3
a3:b1,b2
b1:a2,a3
b2:a1,a3
b3:a1,a2",
    ),
    (
        "petersen",
        "0:1,4,5
1:0,2,6
2:1,3,7
3:2,4,8
4:3,0,9
5:0,7,8
6:1,8,9
7:2,9,5
8:3,5,6
9:4,6,7",
    ),
];

/// Return the adjacency list of the example with the given title.
pub fn example_str(title: &str) -> Option<&'static str> {
    GRAPH_EXAMPLES
        .iter()
        .find(|(example_title, _)| *example_title == title)
        .map(|(_, adjacency)| *adjacency)
}

/// Parse the example with the given title into a graph.
pub fn example_graph(title: &str) -> Result<Graph, GraphError> {
    let adjacency =
        example_str(title).ok_or_else(|| GraphError::UnknownExample(title.to_string()))?;

    Graph::parse(adjacency)
}
