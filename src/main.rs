//! Command-line interface for rowforge
//!
//! # Usage
//!
//! ```bash
//! # Load 10k synthetic rows into the table described by config.yaml
//! rowforge -c config.yaml
//!
//! # Verbose progress
//! RUST_LOG=info rowforge -c config.yaml
//! ```

use clap::Parser;
use rowforge::{Config, MySqlSink};
use rowforge_generator::GeneratorRegistry;
use rowforge_importer::Importer;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "rowforge")]
#[command(about = "Bulk-load a relational table with synthetic rows built from a declarative column spec")]
struct Cli {
    /// Configuration file to use
    #[arg(long, short = 'c', default_value = "config.yaml", env = "ROWFORGE_CONFIG")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = run().await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

async fn run() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = Config::load(&cli.config)?;

    let sink = MySqlSink::connect(&config.db_dsn).await?;
    if !config.safe_import {
        sink.disable_fk_checks().await?;
    }

    let registry = GeneratorRegistry::default();
    let mut importer = Importer::new(
        sink,
        config.db_table.as_str(),
        &registry,
        &config.columns,
        config.total_records,
        config.batch_size,
    )?;
    let loaded = importer.run().await?;
    tracing::info!(loaded, table = %config.db_table, "import finished");

    let sink = importer.into_sink();
    if !config.safe_import {
        sink.enable_fk_checks().await?;
    }
    sink.disconnect().await?;

    Ok(())
}
