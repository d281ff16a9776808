//! Command-line parsing for the TRTIS config exporter.
//!
//! Flag names keep their historical spelling (`--trtis_model_name` with
//! underscores, `--amp-run` with a dash) because export scripts already call
//! the tool that way.

use std::path::PathBuf;

use clap::Parser;

use crate::domain::EmitterConfig;

/// Top-level CLI.
#[derive(Debug, Parser, Clone)]
#[command(
    name = "trtis-config",
    version,
    about = "WaveGlow TRTIS config exporter"
)]
pub struct Cli {
    /// Model name; exports to `trtis_repo/<name>/`.
    #[arg(long = "trtis_model_name", value_name = "NAME", default_value = "waveglow")]
    pub model_name: String,

    /// Model version; creates `trtis_repo/<name>/<version>/`.
    #[arg(
        long = "trtis_model_version",
        value_name = "VERSION",
        default_value_t = 1,
        allow_negative_numbers = true
    )]
    pub model_version: i64,

    /// Inference with AMP (declares every tensor as TYPE_FP16).
    #[arg(long = "amp-run")]
    pub amp_run: bool,

    /// Also append the argument record as a JSON line to this file.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    pub fn emitter_config(&self) -> EmitterConfig {
        EmitterConfig {
            model_name: self.model_name.clone(),
            model_version: self.model_version,
            use_reduced_precision: self.amp_run,
        }
    }
}
