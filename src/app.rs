//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - sets up logging and the audit sink
//! - prepares the repository layout
//! - renders and writes `config.pbtxt`

use std::path::Path;

use clap::Parser;

use crate::audit::{AuditLog, JsonLinesAudit, Tee, TracingAudit};
use crate::cli::Cli;
use crate::domain::{EmitterConfig, REPO_ROOT, RepoLayout};
use crate::error::AppError;

/// Entry point for the `trtis-config` binary.
pub fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    crate::logging::init_logging();

    let config = cli.emitter_config();
    let mut audit: Box<dyn AuditLog> = match &cli.log_file {
        Some(path) => Box::new(Tee {
            first: TracingAudit,
            second: JsonLinesAudit::new(path),
        }),
        None => Box::new(TracingAudit),
    };

    let layout = emit(Path::new(REPO_ROOT), &config, audit.as_mut())?;
    tracing::info!(
        config = %layout.config_path.display(),
        version_dir = %layout.version_dir.display(),
        "exported model configuration"
    );
    Ok(())
}

/// Export `config` into the repository at `root`.
///
/// Records the arguments, creates the version directory, then overwrites
/// `<root>/<model_name>/config.pbtxt`. If the write fails the directories
/// created so far are left in place.
pub fn emit(root: &Path, config: &EmitterConfig, audit: &mut dyn AuditLog) -> Result<RepoLayout, AppError> {
    audit.log_args(config)?;

    let layout = crate::io::prepare_layout(root, config)?;
    let text = crate::render::render_config(config);
    crate::io::write_config(&layout.config_path, &text)?;

    Ok(layout)
}
