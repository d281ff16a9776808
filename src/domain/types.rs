//! Shared domain types.
//!
//! Everything here is plain data: built once from the command line and consumed
//! by the render and I/O steps without mutation.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Repository root the binary always exports into.
pub const REPO_ROOT: &str = "./trtis_repo";

/// File name of the model configuration inside the model directory.
pub const CONFIG_FILE_NAME: &str = "config.pbtxt";

/// Arguments of one export run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmitterConfig {
    /// Directory segment and the `name:` value of the generated config.
    ///
    /// Not sanitized: separators or `..` segments end up in the path as given.
    pub model_name: String,
    /// Directory segment of the version directory. Any integer, including
    /// zero and negatives.
    pub model_version: i64,
    /// Declare tensors as FP16 instead of FP32.
    pub use_reduced_precision: bool,
}

impl EmitterConfig {
    pub fn precision(&self) -> Precision {
        Precision::from_reduced(self.use_reduced_precision)
    }
}

impl Default for EmitterConfig {
    fn default() -> Self {
        Self {
            model_name: "waveglow".to_string(),
            model_version: 1,
            use_reduced_precision: false,
        }
    }
}

/// Tensor data type written into every `data_type:` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precision {
    Fp16,
    Fp32,
}

impl Precision {
    pub fn from_reduced(reduced: bool) -> Self {
        if reduced { Self::Fp16 } else { Self::Fp32 }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Fp16 => "TYPE_FP16",
            Self::Fp32 => "TYPE_FP32",
        }
    }
}

impl std::fmt::Display for Precision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Paths of one model inside the serving repository.
///
/// Note that `config_path` lives in `model_dir`, not in `version_dir`.
/// The serving layout consumers expect it there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoLayout {
    pub model_dir: PathBuf,
    pub version_dir: PathBuf,
    pub config_path: PathBuf,
}

impl RepoLayout {
    /// Compute the layout for `config` under `root`. No filesystem access.
    pub fn resolve(root: &Path, config: &EmitterConfig) -> Self {
        let model_dir = root.join(&config.model_name);
        let version_dir = model_dir.join(config.model_version.to_string());
        let config_path = model_dir.join(CONFIG_FILE_NAME);
        Self {
            model_dir,
            version_dir,
            config_path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn precision_labels() {
        assert_eq!(Precision::from_reduced(true).label(), "TYPE_FP16");
        assert_eq!(Precision::from_reduced(false).label(), "TYPE_FP32");
        assert_eq!(Precision::Fp16.to_string(), "TYPE_FP16");
    }

    #[test]
    fn layout_puts_config_beside_version_dir() {
        let config = EmitterConfig {
            model_name: "foo".to_string(),
            model_version: 3,
            use_reduced_precision: false,
        };
        let layout = RepoLayout::resolve(Path::new(REPO_ROOT), &config);
        assert_eq!(layout.model_dir, Path::new("./trtis_repo/foo"));
        assert_eq!(layout.version_dir, Path::new("./trtis_repo/foo/3"));
        assert_eq!(layout.config_path, Path::new("./trtis_repo/foo/config.pbtxt"));
    }

    #[test]
    fn negative_version_is_a_plain_segment() {
        let config = EmitterConfig {
            model_version: -1,
            ..EmitterConfig::default()
        };
        let layout = RepoLayout::resolve(Path::new(REPO_ROOT), &config);
        assert_eq!(layout.version_dir, Path::new("./trtis_repo/waveglow/-1"));
    }
}
