//! ansicolor command-line library
//!
//! This library contains argument parsing and the run loop.
//! The actual binary is in main.rs.

pub mod cli;

// Re-export commonly used types
pub use cli::{run, Args};
