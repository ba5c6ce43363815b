use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use wordgraph_core::{WalkInput, WordGraph};

/// Builds a word adjacency graph from a text file and queries it.
#[derive(Parser, Debug)]
#[command(name = "wordgraph", version)]
struct Cli {
    /// Text file to build the graph from (read line by line)
    #[arg(long, short, env = "WORDGRAPH_FILE")]
    file: PathBuf,

    /// Seed for reproducible bridge picks and walks
    #[arg(long, env = "WORDGRAPH_SEED")]
    seed: Option<u64>,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(long, short)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print every edge as "source -> target: weight"
    Show,
    /// Print vertex and edge counts
    Stats,
    /// Query the bridge words from WORD1 to WORD2
    Bridge { word1: String, word2: String },
    /// Rewrite TEXT with bridge words inserted
    Generate { text: String },
    /// Shortest path (fewest hops) from START to END
    Path { start: String, end: String },
    /// Random walk from a random word
    Walk {
        /// Stop after this many steps even if no dead end is reached
        #[arg(long)]
        max_steps: Option<usize>,
    },
}

#[derive(Serialize)]
struct Stats {
    vertices: usize,
    edges: usize,
    pairs: usize,
}

fn print_json<T: Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // WORDGRAPH_LOG takes precedence over RUST_LOG
    let default_level = if cli.verbose { "debug" } else { "warn" };
    let env = env_logger::Env::new()
        .filter_or("WORDGRAPH_LOG", std::env::var("RUST_LOG").unwrap_or_else(|_| default_level.to_owned()));
    env_logger::Builder::from_env(env).init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    // Build the graph one line at a time, edges never cross line boundaries
    let mut graph = WordGraph::new();
    let lines = graph.load_file(&cli.file)?;
    debug!("{} lines ingested", lines);

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };

    match &cli.command {
        Command::Show => {
            let edges = graph.render();
            if cli.json {
                print_json(&edges)?;
            } else {
                println!("Directed Graph:");
                for edge in edges {
                    println!("{}", edge);
                }
            }
        }
        Command::Stats => {
            let stats = Stats {
                vertices: graph.vertex_count(),
                edges: graph.edge_count(),
                pairs: graph.total_weight(),
            };
            if cli.json {
                print_json(&stats)?;
            } else {
                println!("Vertices: {}", stats.vertices);
                println!("Edges: {}", stats.edges);
                println!("Word pairs: {}", stats.pairs);
            }
        }
        Command::Bridge { word1, word2 } => {
            let result = graph.bridge_words(word1, word2);
            if cli.json {
                print_json(&result)?;
            } else {
                println!("{}", result.describe(word1, word2));
            }
        }
        Command::Generate { text } => {
            let generated = graph.generate_text_with(text, &mut rng);
            if cli.json {
                print_json(&generated)?;
            } else {
                println!("Generated text with bridge words:");
                println!("{}", generated);
            }
        }
        Command::Path { start, end } => {
            let result = graph.shortest_path(start, end);
            if cli.json {
                print_json(&result)?;
            } else {
                println!("{}", result);
            }
        }
        Command::Walk { max_steps } => {
            let mut input = WalkInput::new();
            input.set_max_steps(*max_steps)?;

            let walk = graph.random_walk_with(&input, &mut rng)?;
            if cli.json {
                print_json(&walk)?;
            } else {
                println!("Random walk result:");
                println!("{}", walk);
            }
        }
    }

    Ok(())
}
