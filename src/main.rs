// Dijabeto - rule-based recipe assistant
// Main entry point

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use dijabeto::catalog::{JsonStore, MemoryStore, RecipeStore};
use dijabeto::cli::Repl;
use dijabeto::config;

#[derive(Parser)]
#[command(name = "dijabeto")]
#[command(about = "Rule-based Croatian recipe assistant")]
#[command(version)]
struct Args {
    /// Catalog JSON file (defaults to the config value, or the built-in
    /// seed catalog when neither is set)
    #[arg(long, value_name = "FILE")]
    catalog: Option<PathBuf>,

    /// How many recommendations to show
    #[arg(long)]
    limit: Option<usize>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut settings = config::load()?;
    if let Some(limit) = args.limit {
        settings.recommend_limit = limit;
    }

    let catalog_path = args.catalog.or_else(|| settings.catalog_path.clone());
    let store: Arc<dyn RecipeStore> = match catalog_path {
        Some(path) => Arc::new(JsonStore::open_or_seed(&path)?),
        None => Arc::new(MemoryStore::seeded()?),
    };

    let mut repl = Repl::new(store, settings);
    repl.run()
}
