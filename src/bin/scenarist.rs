//! Scenarist CLI — choice labeling and reporting for dialogue scenarios.
//!
//! Usage:
//!   scenarist label [path] [--dry-run]
//!   scenarist stats [path] [--json]

use clap::{Parser, Subcommand};
use scenarist::{relabel, report, resolve_scenario_path, ScenarioDocument};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "scenarist",
    version,
    about = "Dialogue scenario toolkit: choice labeling and reporting"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Assign choice labels to branching text nodes
    Label {
        /// Path to the scenario JSON file (defaults to the bundled asset)
        path: Option<PathBuf>,
        /// Compute and report changes without writing the file
        #[arg(long)]
        dry_run: bool,
    },
    /// Summarize conversations in a scenario file
    Stats {
        /// Path to the scenario JSON file (defaults to the bundled asset)
        path: Option<PathBuf>,
        /// Emit the summary as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

fn load_document(path: Option<PathBuf>) -> Result<(PathBuf, ScenarioDocument), String> {
    let path =
        resolve_scenario_path(path).map_err(|e| format!("Failed to locate scenario: {}", e))?;
    let document =
        ScenarioDocument::load(&path).map_err(|e| format!("Failed to load scenario: {}", e))?;
    Ok((path, document))
}

fn cmd_label(path: Option<PathBuf>, dry_run: bool) -> i32 {
    let (path, mut document) = match load_document(path) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };
    let changed = relabel(&mut document);
    if changed == 0 {
        println!("No changes made.");
        return 0;
    }
    if dry_run {
        println!(
            "Would modify {} ({} node{} relabeled).",
            path.display(),
            changed,
            if changed == 1 { "" } else { "s" }
        );
        return 0;
    }
    match document.save(&path) {
        Ok(()) => {
            println!("Modified {} successfully.", path.display());
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn cmd_stats(path: Option<PathBuf>, json: bool) -> i32 {
    let (_, document) = match load_document(path) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };
    let stats = report::scan(&document);
    if json {
        match serde_json::to_string_pretty(&stats) {
            Ok(rendered) => {
                println!("{}", rendered);
                return 0;
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                return 1;
            }
        }
    }
    if stats.conversations.is_empty() {
        println!("No conversations found.");
        return 0;
    }
    println!(
        "{:<16}  {:>6}  {:>6}  {:>8}  {:>8}",
        "CONVERSATION", "NODES", "TEXT", "BRANCHES", "LABELED"
    );
    println!("{}", "-".repeat(54));
    for conversation in &stats.conversations {
        println!(
            "{:<16}  {:>6}  {:>6}  {:>8}  {:>8}",
            conversation.id,
            conversation.nodes,
            conversation.text_nodes,
            conversation.branching_nodes,
            conversation.labeled_nodes
        );
    }
    0
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
    let cli = Cli::parse();
    let code = match cli.command {
        Commands::Label { path, dry_run } => cmd_label(path, dry_run),
        Commands::Stats { path, json } => cmd_stats(path, json),
    };
    std::process::exit(code);
}
