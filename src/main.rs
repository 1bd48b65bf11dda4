use std::path::PathBuf;

use clap::{Parser, Subcommand};
use taxograph::{
    corpus::JsonlCorpus, export, BuildPipeline, GraphDump, GraphMetrics, TaxoConfig, WordTuple,
};

#[derive(Parser, Debug)]
#[command(name = "taxograph", about = "Label hierarchy graph CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build the pruned label hierarchy from a corpus and export it.
    Build {
        /// Path to the input corpus (JSONL with source/provision/label fields)
        #[arg(long)]
        corpus: PathBuf,
        /// Output directory for the exported graph
        #[arg(long)]
        out_dir: PathBuf,
        /// Path to config file (JSON)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// List the roots of an exported graph.
    Roots {
        /// Path to the exported graph JSON
        #[arg(long)]
        graph: PathBuf,
        /// Only list roots that correspond to observed labels
        #[arg(long, default_value_t = false)]
        real_only: bool,
    },

    /// Show direct parents and children of a node.
    Show {
        /// Path to the exported graph JSON
        #[arg(long)]
        graph: PathBuf,
        /// Node id: the label words, space-separated (order-insensitive)
        #[arg(long)]
        node: String,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Build {
            corpus,
            out_dir,
            config,
        } => cmd_build(corpus, out_dir, config)?,
        Commands::Roots { graph, real_only } => cmd_roots(graph, real_only)?,
        Commands::Show { graph, node } => cmd_show(graph, &node)?,
    }

    Ok(())
}

fn cmd_build(
    corpus_path: PathBuf,
    out_dir: PathBuf,
    config_path: Option<PathBuf>,
) -> anyhow::Result<()> {
    let config: TaxoConfig = match config_path {
        Some(path) => serde_json::from_str(&std::fs::read_to_string(path)?)?,
        None => TaxoConfig::default(),
    };

    let corpus = JsonlCorpus::new(corpus_path.to_string_lossy().into_owned());

    println!("Building hierarchy from {}...", corpus_path.display());
    let pipeline = BuildPipeline::new(config);
    let graph = pipeline.build_from_jsonl(&corpus)?;

    let metrics = GraphMetrics::compute(&graph);
    println!(
        "Pruned graph: {} nodes ({} real, {} synthetic), {} edges, {} roots",
        metrics.num_nodes, metrics.num_real, metrics.num_synthetic, metrics.num_edges,
        metrics.num_roots
    );

    std::fs::create_dir_all(&out_dir)?;

    let gexf_path = out_dir.join("label_hierarchy.gexf");
    let mut gexf_file = std::fs::File::create(&gexf_path)?;
    export::write_gexf(&graph, &mut gexf_file)?;
    println!("Wrote {}", gexf_path.display());

    let json_path = out_dir.join("label_hierarchy.json");
    GraphDump::from_graph(&graph).save(&json_path)?;
    println!("Wrote {}", json_path.display());

    Ok(())
}

fn cmd_roots(graph_path: PathBuf, real_only: bool) -> anyhow::Result<()> {
    let graph = GraphDump::load(&graph_path)?.to_graph()?;
    let roots = if real_only {
        graph.real_roots()
    } else {
        graph.roots()
    };
    for root in roots {
        let marker = if root.real_label { "real" } else { "synthetic" };
        println!("{}  [{marker}, weight={}]", root.tuple, root.weight);
    }
    Ok(())
}

fn cmd_show(graph_path: PathBuf, node: &str) -> anyhow::Result<()> {
    let graph = GraphDump::load(&graph_path)?.to_graph()?;
    let words: Vec<String> = node.split_whitespace().map(|w| w.to_string()).collect();
    let tuple = WordTuple::from_words(words)
        .ok_or_else(|| anyhow::anyhow!("empty node id"))?;

    match graph.node(&tuple) {
        Some(found) => {
            println!(
                "{}  [real_label={}, weight={}]",
                found.tuple, found.real_label, found.weight
            );
            println!("parents:");
            for parent in graph.parents_of(&tuple) {
                println!("  {}", parent.tuple);
            }
            println!("children:");
            for child in graph.children_of(&tuple) {
                println!("  {}", child.tuple);
            }
        }
        None => println!("node {tuple:?} not found in graph"),
    }
    Ok(())
}
