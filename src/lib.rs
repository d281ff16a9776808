//! `trtis-config` library crate.
//!
//! Writes the `config.pbtxt` model configuration for a WaveGlow TensorRT plan
//! into a TRTIS model repository. The binary is a thin wrapper so the export
//! can be driven (and tested) against any repository root.

pub mod app;
pub mod audit;
pub mod cli;
pub mod domain;
pub mod error;
pub mod io;
pub mod logging;
pub mod render;
