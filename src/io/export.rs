//! Write the rendered model configuration.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::AppError;

/// Write `text` to `path`, truncating whatever was there before.
pub fn write_config(path: &Path, text: &str) -> Result<(), AppError> {
    let mut file = File::create(path).map_err(|e| AppError::io("create config file", path, e))?;
    file.write_all(text.as_bytes())
        .map_err(|e| AppError::io("write config file", path, e))?;
    file.flush().map_err(|e| AppError::io("write config file", path, e))?;

    tracing::debug!(path = %path.display(), bytes = text.len(), "wrote config");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_existing_content() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.pbtxt");
        std::fs::write(&path, "a much longer stale configuration body\n").unwrap();

        write_config(&path, "short\n").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "short\n");
    }

    #[test]
    fn missing_parent_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("absent").join("config.pbtxt");

        let err = write_config(&path, "x").unwrap_err();
        assert!(err.message().starts_with("Failed to create config file"));
    }
}
