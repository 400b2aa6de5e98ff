//! lilsp CLI
//!
//! Main entry point for the `lilsp` command.

use clap::{Parser, Subcommand};
use miette::Result;
use std::path::{Path, PathBuf};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use lilsp::config::Config;
use lilsp::repl::Repl;
use lilsp::{Interpreter, SourceFile};

#[derive(Parser)]
#[command(name = "lilsp")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "A small Lisp with S-expressions and Q-expressions", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Configuration file (defaults to ./lilsp.toml when present)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive REPL (the default)
    Repl,

    /// Evaluate one expression and print the result
    Eval {
        /// Source text, e.g. "+ 1 2"
        #[arg(value_name = "EXPR")]
        expr: String,
    },

    /// Evaluate every expression in a file, printing each result
    Run {
        /// Input file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Print the parse tree of an expression as JSON
    Tree {
        #[arg(value_name = "EXPR")]
        expr: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing; RUST_LOG overrides the default level
    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    if cli.verbose {
        tracing::info!("Verbose mode enabled");
    }

    match cli.command.unwrap_or(Commands::Repl) {
        Commands::Repl => repl(cli.config.as_deref()),
        Commands::Eval { expr } => eval(&expr),
        Commands::Run { input } => run(&input),
        Commands::Tree { expr } => tree(&expr),
    }
}

fn repl(config_path: Option<&Path>) -> Result<()> {
    let config = Config::load(config_path)?;
    tracing::info!("Starting REPL with prompt {:?}", config.repl.prompt);
    Repl::new(config.repl).run()
}

fn eval(expr: &str) -> Result<()> {
    let mut interpreter = Interpreter::new();
    let value = interpreter.eval_line(expr)?;
    println!("{}", value);
    Ok(())
}

fn run(input: &Path) -> Result<()> {
    tracing::info!("Running {:?}", input);

    let source = std::fs::read_to_string(input)
        .map_err(|e| miette::miette!("Failed to read input file: {}", e))?;
    let file = SourceFile::new(input.to_string_lossy().to_string(), source);

    let mut interpreter = Interpreter::new();
    let results = interpreter.eval_file(&file)?;
    tracing::debug!("Evaluated {} expressions", results.len());
    for value in results {
        println!("{}", value);
    }
    Ok(())
}

fn tree(expr: &str) -> Result<()> {
    let tree = lilsp::parse(expr)?;
    let json = serde_json::to_string_pretty(&tree)
        .map_err(|e| miette::miette!("Failed to serialize parse tree: {}", e))?;
    println!("{}", json);
    Ok(())
}
