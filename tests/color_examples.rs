//! Color all the examples in GRAPH_EXAMPLES.

use chromatic_rs::api::color_graph_str;
use chromatic_rs::graph::Graph;
use chromatic_rs::graph_examples::{example_graph, example_str};
use rstest::rstest;

/// Every vertex the coloring reached has a color different from each of its neighbours.
///
/// Only meaningful for examples whose links are all declared in both directions.
fn assert_proper_coloring(graph: &Graph) {
    for vertex in graph.vertices() {
        let Some(color) = vertex.color() else {
            continue;
        };
        for neighbour_idx in vertex.neighbours() {
            let neighbour = graph.get_vertex(*neighbour_idx);

            assert_ne!(
                Some(color),
                neighbour.color(),
                "{} and {} share a color",
                vertex.name(),
                neighbour.name()
            );
        }
    }
}

#[rstest(
    title,
    expected_count,
    case::single_edge("single_edge", 2),
    case::triangle("triangle", 3),
    case::star("star", 2),
    case::square("square", 2),
    case::one_directional("one_directional", 2),
    case::two_components("two_components", 4),
    case::with_malformed_line("with_malformed_line", 2),
    case::complete_4("complete_4", 4),
    case::crown_6("crown_6", 2),
    case::petersen("petersen", 3)
)]
fn unique_color_count(title: &str, expected_count: usize) {
    let mut graph = example_graph(title).unwrap();
    graph.color_graph();

    assert_eq!(graph.unique_color_count(), expected_count);
}

#[rstest(
    title,
    case::single_edge("single_edge"),
    case::triangle("triangle"),
    case::star("star"),
    case::square("square"),
    case::two_components("two_components"),
    case::complete_4("complete_4"),
    case::crown_6("crown_6"),
    case::petersen("petersen")
)]
fn reciprocal_examples_are_properly_colored(title: &str) {
    let mut graph = example_graph(title).unwrap();
    graph.color_graph();

    assert_proper_coloring(&graph);
}

#[rstest(
    title,
    case::triangle("triangle"),
    case::one_directional("one_directional"),
    case::two_components("two_components"),
    case::petersen("petersen")
)]
fn coloring_twice_changes_nothing(title: &str) {
    let mut graph = example_graph(title).unwrap();
    graph.color_graph();
    let first = graph.colors();

    graph.color_graph();

    assert_eq!(graph.colors(), first);
}

#[rstest]
fn coloring_is_deterministic() {
    let adjacency = example_str("petersen").unwrap();

    let first = color_graph_str(adjacency).unwrap();
    let second = color_graph_str(adjacency).unwrap();

    assert_eq!(first.colors(), second.colors());
}

#[rstest]
fn disconnected_component_is_left_uncolored() {
    let mut graph = example_graph("two_components").unwrap();
    graph.color_graph();

    assert_eq!(graph.uncolored_vertices(), vec!["D", "E"]);
    for name in ["A", "B", "C"] {
        let vertex_idx = graph.find_vertex(name).unwrap();
        assert!(graph.get_vertex(vertex_idx).color() >= Some(1));
    }
}

#[rstest]
fn one_directional_links_only_constrain_the_declaring_vertex() {
    // B is reached through A's link, but B only lists C, so it does not see A's color.
    let graph = color_graph_str(example_str("one_directional").unwrap()).unwrap();

    assert_eq!(
        graph.colors(),
        vec![
            ("A".to_string(), Some(1)),
            ("B".to_string(), Some(1)),
            ("C".to_string(), Some(2)),
        ]
    );
}
