//! # ansicolor
//!
//! Post-processing filter for generated documentation: terminal color and
//! style escape sequences captured in command output are rewritten into
//! inline `<span style="...">` markup.
//!
//! ## Architecture
//!
//! This is Layer 3 - the binary that ties together:
//! - ansicolor-core: Attribute table, config, errors
//! - ansicolor-translator: Escape sequence translation
//! - ansicolor-docs: Document discovery and rewriting

use ansicolor::{run, Args};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let args = Args::parse();
    let config = args.load_config()?;

    // Initialize logging; stdout is reserved for --json
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.general.log_level)),
        )
        .init();

    tracing::info!(
        "ansicolor v{} processing {}",
        env!("CARGO_PKG_VERSION"),
        args.output_dir.display()
    );

    let report = run(&args, &config).map_err(|e| {
        tracing::error!("Post-processing failed: {:#}", e);
        e
    })?;

    match &report {
        Some(report) if args.json => println!("{}", report.to_json()?),
        Some(_) => {}
        None => {
            tracing::info!("Nothing to do");
            if args.json {
                println!("null");
            }
        }
    }

    Ok(())
}
