mod render;
mod settings;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use plansight_analyzer::{PlanEngine, flatten_plan, parse_plan_with, sample_plan};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use crate::settings::Settings;

/// Normalize EXPLAIN plans from PostgreSQL, MySQL, SQL Server and SQLite
#[derive(Parser)]
#[command(name = "plansight", version, about)]
struct Cli {
    /// Settings file (defaults to <config dir>/plansight/settings.toml)
    #[arg(long, global = true, env = "PLANSIGHT_CONFIG")]
    config: Option<PathBuf>,

    /// Log debug output to stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse a plan dump and print its summary and tree
    Analyze {
        /// Engine that produced the plan (postgres, mysql, sqlserver, sqlite)
        #[arg(short, long)]
        engine: Option<String>,

        /// Print the parse result as JSON
        #[arg(long)]
        json: bool,

        /// Maximum number of tree rows to print
        #[arg(long)]
        max_nodes: Option<usize>,

        /// Maximum plan nesting depth accepted by the parser
        #[arg(long)]
        max_depth: Option<usize>,

        /// Plan file to read; stdin when omitted
        file: Option<PathBuf>,
    },

    /// Print a sample plan for an engine
    Sample {
        #[arg(short, long)]
        engine: Option<String>,
    },

    /// List supported engines
    Engines,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let settings = Settings::load(cli.config.as_deref())?;

    match cli.command {
        Command::Analyze {
            engine,
            json,
            max_nodes,
            max_depth,
            file,
        } => {
            let engine = resolve_engine(engine.as_deref(), &settings);
            let mut options = settings.analyzer;
            if let Some(max_depth) = max_depth {
                options = options.with_max_depth(max_depth);
            }
            let max_nodes = max_nodes.unwrap_or(settings.display.max_nodes);

            let input = read_input(file.as_deref())?;
            let result = parse_plan_with(&engine, &input, &options)
                .with_context(|| format!("Unable to parse {} plan", engine.display_name()))?;

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
                return Ok(());
            }

            println!("{}", render::summary_table(&result.summary));
            if let Some(root) = &result.root {
                let flat = flatten_plan(root, max_nodes);
                print!("{}", render::render_tree(&flat, result.summary.node_count));
            }
        }
        Command::Sample { engine } => {
            let engine = resolve_engine(engine.as_deref(), &settings);
            match sample_plan(&engine) {
                Some(sample) => println!("{sample}"),
                None => bail!("No sample for unsupported engine {:?}", engine.as_str()),
            }
        }
        Command::Engines => {
            for engine in PlanEngine::SUPPORTED {
                println!("{:<10} {}", engine.as_str(), engine.display_name());
            }
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn resolve_engine(flag: Option<&str>, settings: &Settings) -> PlanEngine {
    flag.map(PlanEngine::parse)
        .unwrap_or_else(|| settings.display.default_engine.clone())
}

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read plan from {:?}", path)),
        None => {
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .context("Failed to read plan from stdin")?;
            Ok(input)
        }
    }
}
