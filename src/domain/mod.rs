//! Domain types for the config exporter.
//!
//! This module defines:
//!
//! - the per-invocation record (`EmitterConfig`)
//! - the precision label choice (`Precision`)
//! - the repository paths derived from a record (`RepoLayout`)

pub mod types;

pub use types::*;
