//! Value Graph command-line tool
//!
//! Loads a graph description from a TOML file, prints it, and optionally
//! reports the shortest path between two values.

use clap::{Arg, ArgMatches, Command};
use tracing::{debug, info};
use value_graph::{Config, Error, Graph, GraphDescription, Result};

fn main() {
    if let Err(err) = run() {
        eprintln!("{}", err);
        let code = if err.is_client_error() { 1 } else { 2 };
        std::process::exit(code);
    }
}

fn run() -> Result<()> {
    let matches = Command::new("value-graph")
        .version(value_graph::VERSION)
        .about("Inspect undirected graphs and find shortest paths.")
        .arg(
            Arg::new("graph")
                .short('g')
                .long("graph")
                .value_name("FILE")
                .required(true)
                .help("Graph description file (TOML with `nodes` and `edges`)")
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Configuration file path")
        )
        .arg(
            Arg::new("from")
                .long("from")
                .value_name("VALUE")
                .requires("to")
                .help("Start of the shortest path")
        )
        .arg(
            Arg::new("to")
                .long("to")
                .value_name("VALUE")
                .requires("from")
                .help("End of the shortest path")
        )
        .arg(
            Arg::new("format")
                .long("format")
                .value_name("FORMAT")
                .value_parser(["text", "json"])
                .default_value("text")
                .help("Output format")
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .value_name("LEVEL")
                .help("Log level (trace, debug, info, warn, error)")
        )
        .get_matches();

    // Load configuration
    let mut config = if let Some(config_path) = matches.get_one::<String>("config") {
        Config::from_file(config_path)?
    } else {
        Config::load()?
    };

    apply_cli_overrides(&mut config, &matches)?;
    value_graph::init(&config)?;

    let Some(graph_path) = matches.get_one::<String>("graph") else {
        return Err(Error::invalid_input("missing --graph"));
    };
    let mut graph = load_graph(graph_path, &config)?;
    info!(nodes = graph.len(), edges = graph.edge_count(), "graph loaded");

    let json = matches
        .get_one::<String>("format")
        .is_some_and(|format| format == "json");

    if json {
        println!("{}", serde_json::to_string_pretty(&graph.describe())?);
    } else {
        print!("{}", graph.dump());
    }

    if let (Some(from), Some(to)) = (
        matches.get_one::<String>("from"),
        matches.get_one::<String>("to"),
    ) {
        let path = graph.shortest_path(from, to)?;
        debug!(hops = path.len() - 1, "shortest path found");

        if json {
            println!("{}", serde_json::to_string(&path)?);
        } else {
            println!("{}", path.join(" -> "));
        }
    }

    Ok(())
}

/// Apply command line argument overrides to configuration
fn apply_cli_overrides(config: &mut Config, matches: &ArgMatches) -> Result<()> {
    if let Some(level) = matches.get_one::<String>("log-level") {
        config.logging.level = level.clone();
    }

    config.validate()
}

/// Read a graph description and build the graph it describes
fn load_graph(path: &str, config: &Config) -> Result<Graph<String>> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| Error::invalid_input(format!("Cannot read graph file {}: {}", path, e)))?;
    let description: GraphDescription<String> = toml::from_str(&contents)?;

    let mut graph = Graph::from_config(&config.graph);
    graph.add_description(&description)?;

    Ok(graph)
}
