//! Serving repository layout on disk.

use std::fs::create_dir_all;
use std::path::Path;

use crate::domain::{EmitterConfig, RepoLayout};
use crate::error::AppError;

/// Resolve the layout for `config` under `root` and make sure the version
/// directory (and its parents) exist.
///
/// Creation is skipped when anything already exists at the version path, so
/// repeated runs succeed.
pub fn prepare_layout(root: &Path, config: &EmitterConfig) -> Result<RepoLayout, AppError> {
    let layout = RepoLayout::resolve(root, config);

    if !layout.version_dir.exists() {
        create_dir_all(&layout.version_dir)
            .map_err(|e| AppError::io("create version directory", &layout.version_dir, e))?;
        tracing::debug!(path = %layout.version_dir.display(), "created version directory");
    }

    Ok(layout)
}
