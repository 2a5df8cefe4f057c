//! # ansicolor-docs
//!
//! Documentation post-processing for ansicolor.
//!
//! This crate provides:
//! - Discovery of generated documents under a build output directory
//! - Read / translate / rewrite-if-changed for each document
//! - The `BuildObserver` notification a build pipeline calls when it finishes
//!
//! ## Architecture
//!
//! This is Layer 2 in the architecture - it depends on ansicolor-core and
//! ansicolor-translator and owns all file I/O.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod observer;
pub mod rewriter;

// Re-export commonly used types
pub use observer::{BuildObserver, HtmlPostProcessor};
pub use rewriter::{DocumentRewriter, FileOutcome, RewriteReport};
