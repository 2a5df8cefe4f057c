//! Build pipeline completion hook.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use ansicolor_core::{Result, TargetSettings};

use crate::rewriter::{DocumentRewriter, RewriteReport};

/// Notified once when a documentation build pipeline finishes.
pub trait BuildObserver {
    /// Called after the pipeline completes.
    ///
    /// Returns `Ok(None)` when the observer decided not to act (for example
    /// because the build failed).
    fn on_pipeline_finished(
        &self,
        output_format: &str,
        did_fail: bool,
    ) -> Result<Option<RewriteReport>>;
}

/// Rewrites escape sequences in a build's HTML output once it succeeds.
#[derive(Debug, Clone)]
pub struct HtmlPostProcessor {
    output_dir: PathBuf,
    rewriter: DocumentRewriter,
}

impl HtmlPostProcessor {
    /// Create a post-processor with default target settings.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self::with_settings(output_dir, TargetSettings::default())
    }

    /// Create a post-processor with custom target settings.
    pub fn with_settings(output_dir: impl Into<PathBuf>, settings: TargetSettings) -> Self {
        Self {
            output_dir: output_dir.into(),
            rewriter: DocumentRewriter::new(settings),
        }
    }

    /// Directory the build writes its output to.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Target settings in use.
    pub fn settings(&self) -> &TargetSettings {
        self.rewriter.settings()
    }
}

impl BuildObserver for HtmlPostProcessor {
    fn on_pipeline_finished(
        &self,
        output_format: &str,
        did_fail: bool,
    ) -> Result<Option<RewriteReport>> {
        if did_fail {
            warn!("Build failed, skipping escape sequence rewrite");
            return Ok(None);
        }

        if !self.settings().handles_format(output_format) {
            info!(
                "Output format '{}' is not '{}', nothing to rewrite",
                output_format,
                self.settings().format
            );
            return Ok(None);
        }

        self.rewriter.rewrite_dir(&self.output_dir).map(Some)
    }
}
