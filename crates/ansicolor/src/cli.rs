//! Command-line arguments and the post-processing run.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use ansicolor_core::AnsicolorConfig;
use ansicolor_docs::{BuildObserver, HtmlPostProcessor, RewriteReport};

/// Rewrite terminal color escape sequences in a finished documentation build.
#[derive(Parser, Debug, Clone)]
#[command(name = "ansicolor", version, about)]
pub struct Args {
    /// Build output directory containing the generated documents
    pub output_dir: PathBuf,

    /// Output format the build produced (defaults to the configured target format)
    #[arg(long)]
    pub format: Option<String>,

    /// The build reported a failure; nothing is rewritten
    #[arg(long)]
    pub failed: bool,

    /// YAML configuration file
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Also rewrite documents in sub-directories
    #[arg(long)]
    pub recursive: bool,

    /// Translate documents but do not write them back
    #[arg(long)]
    pub dry_run: bool,

    /// Print the run report as JSON on stdout
    #[arg(long)]
    pub json: bool,
}

impl Args {
    /// Load the configuration file (if any) and apply command-line overrides.
    pub fn load_config(&self) -> anyhow::Result<AnsicolorConfig> {
        let mut config = match &self.config {
            Some(path) => AnsicolorConfig::from_file(path)
                .with_context(|| format!("loading config from {}", path.display()))?,
            None => AnsicolorConfig::default(),
        };

        if self.recursive {
            config.target.recursive = true;
        }
        if self.dry_run {
            config.target.dry_run = true;
        }

        Ok(config)
    }

    /// Output format to report to the post-processor.
    pub fn output_format<'a>(&'a self, config: &'a AnsicolorConfig) -> &'a str {
        self.format.as_deref().unwrap_or(&config.target.format)
    }
}

/// Notify the post-processor that the build finished.
///
/// Returns `None` when the build failed or produced a different format.
pub fn run(args: &Args, config: &AnsicolorConfig) -> anyhow::Result<Option<RewriteReport>> {
    let processor = HtmlPostProcessor::with_settings(&args.output_dir, config.target.clone());

    processor
        .on_pipeline_finished(args.output_format(config), args.failed)
        .with_context(|| format!("post-processing {}", args.output_dir.display()))
}
