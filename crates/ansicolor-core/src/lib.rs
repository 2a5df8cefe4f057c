//! # ansicolor-core
//!
//! Core types for ansicolor.
//!
//! This crate contains all fundamental types with **no internal dependencies**
//! on other ansicolor crates. It provides:
//!
//! - Attribute codes and the fixed attribute table
//! - Style properties, colors and style declarations
//! - Configuration types
//! - Error types
//!
//! ## Architecture
//!
//! This is Layer 0 in the architecture - all other crates depend on this one,
//! but this crate has no dependencies on other ansicolor crates.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod style;

// Re-export commonly used types
pub use config::{AnsicolorConfig, GeneralSettings, TargetSettings};
pub use error::{Error, Result};
pub use style::{
    AttributeCode, AttributeTable, Color, StyleDeclaration, StyleProperty, ATTRIBUTE_TABLE,
};
