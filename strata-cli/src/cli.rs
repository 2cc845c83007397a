use std::fmt::{Debug, Display};
use std::fs;
use std::hash::Hash;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use serde::Serialize;
use strata_core::{analyze, parse_edge_list, DiGraph, Error, PipelineOptions, ReadyOrder};
use tracing_subscriber::EnvFilter;

/// The 12-node graph from the original assignment drawing.
const SAMPLE_EDGES: &str = "\
(4, 1), (4, 2), (4, 12),
(2, 1),
(1, 3),
(3, 2), (3, 5),
(12, 11),
(10, 11),
(9, 11), (10, 9),
(9, 5),
(5, 8), (5, 6),
(6, 8), (6, 7), (7, 10),
(8, 9), (8, 10),
(6, 10),
";

/// Decompose a directed graph into strongly connected components and print
/// the condensation with one topological order.
#[derive(Debug, Parser)]
#[command(name = "strata", version, about)]
pub struct Args {
    /// Edge list file: one `u v`, `u -> v` or `u,v` per line, or `(u, v)` tuples.
    #[arg(required_unless_present = "sample", conflicts_with = "sample")]
    pub input: Option<PathBuf>,

    /// Use the built-in 12-node sample graph.
    #[arg(long)]
    pub sample: bool,

    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Tie-break for ready components; overrides the config file.
    #[arg(long, value_enum)]
    pub ready_order: Option<ReadyOrderArg>,

    /// JSON file with pipeline options.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log pipeline stages to stderr.
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReadyOrderArg {
    Fifo,
    LowestId,
}

impl From<ReadyOrderArg> for ReadyOrder {
    fn from(arg: ReadyOrderArg) -> Self {
        match arg {
            ReadyOrderArg::Fifo => ReadyOrder::Fifo,
            ReadyOrderArg::LowestId => ReadyOrder::LowestId,
        }
    }
}

/// Install a stderr subscriber. `RUST_LOG` wins over `--verbose`.
pub fn init_logging(verbose: bool) {
    let default = if verbose { "strata=debug,strata_core=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Run the pipeline and render the report.
pub fn run(args: &Args) -> Result<String> {
    let options = load_options(args)?;

    let text = match (&args.input, args.sample) {
        (_, true) => SAMPLE_EDGES.to_string(),
        (Some(path), false) => fs::read_to_string(path)
            .with_context(|| format!("reading edge list: {}", path.display()))?,
        (None, false) => bail!("no input: pass an edge list file or --sample"),
    };

    // Integer keys sort numerically; fall back to strings for anything else.
    match parse_edge_list::<i64>(&text) {
        Ok(edges) => render(edges, &options, args.format),
        Err(Error::InvalidEdge { .. }) => {
            let edges = parse_edge_list::<String>(&text).context("parsing edge list")?;
            render(edges, &options, args.format)
        }
        Err(err) => Err(err).context("parsing edge list"),
    }
}

fn load_options(args: &Args) -> Result<PipelineOptions> {
    let mut options = match &args.config {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("reading config: {}", path.display()))?;
            PipelineOptions::from_json(&json)
                .with_context(|| format!("parsing config: {}", path.display()))?
        }
        None => PipelineOptions::default(),
    };
    if let Some(ready_order) = args.ready_order {
        options.ready_order = ready_order.into();
    }
    Ok(options)
}

fn render<K>(edges: Vec<(K, K)>, options: &PipelineOptions, format: Format) -> Result<String>
where
    K: Clone + Eq + Hash + Ord + Debug + Display + Serialize,
{
    tracing::debug!(edges = edges.len(), "parsed edge list");
    let graph = DiGraph::from_edges(edges);
    let analysis = analyze(&graph, options).context("analyzing graph")?;
    let report = analysis.report();

    match format {
        Format::Text => Ok(report.to_string()),
        Format::Json => {
            let mut json = serde_json::to_string_pretty(&report).context("serializing report")?;
            json.push('\n');
            Ok(json)
        }
    }
}
