use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use itertools::Itertools;
use log::LevelFilter;

use chromatic_rs::api::{color_graph_str, read_adjacency_file};
use chromatic_rs::error::GraphError;
use chromatic_rs::graph_examples::{example_str, GRAPH_EXAMPLES};

/// Greedily colors the vertices of a graph so that no two adjacent vertices share a color,
/// and reports how many colors were used.
///
/// The input is an adjacency list, one `name:neighbour,neighbour,...` line per vertex.
#[derive(Parser, Debug)]
#[command(name = "chromatic", version)]
struct Cli {
    /// Path to a file holding the adjacency list
    #[arg(required_unless_present = "example", conflicts_with = "example")]
    path: Option<PathBuf>,

    /// Color one of the built in example graphs instead of a file
    #[arg(short, long)]
    example: Option<String>,

    /// Do not print the adjacency list
    #[arg(short, long)]
    quiet: bool,

    /// Also print the color given to each vertex
    #[arg(short = 'c', long)]
    show_colors: bool,

    /// Log more; repeat for even more.  RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    /// The adjacency list selected on the command line.
    fn adjacency(&self) -> Result<String> {
        match (&self.example, &self.path) {
            (Some(title), _) => {
                let adjacency = example_str(title)
                    .ok_or_else(|| GraphError::UnknownExample(title.clone()))
                    .with_context(|| {
                        format!(
                            "known examples: {}",
                            GRAPH_EXAMPLES.iter().map(|(title, _)| title).join(", ")
                        )
                    })?;
                Ok(adjacency.to_string())
            }
            (None, Some(path)) => Ok(read_adjacency_file(path)?),
            // clap requires one of the two.
            (None, None) => Ok(String::new()),
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let adjacency = cli.adjacency()?;
    let graph = color_graph_str(&adjacency)?;

    if !cli.quiet {
        println!("{graph}");
    }

    if cli.show_colors {
        for vertex in graph.vertices() {
            println!("{vertex}");
        }
        println!();
    }

    println!(
        "This graph has {} unique color(s)",
        graph.unique_color_count()
    );

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
