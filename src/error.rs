use std::path::Path;

/// Exit code for filesystem failures (directory creation, config/audit writes).
pub const EXIT_IO: u8 = 1;

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    /// Wrap an I/O failure on `path` with a short description of what was attempted.
    pub fn io(action: &str, path: &Path, err: std::io::Error) -> Self {
        Self::new(EXIT_IO, format!("Failed to {action} '{}': {err}", path.display()))
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_carries_path_and_exit_code() {
        let err = AppError::io(
            "create version directory",
            Path::new("trtis_repo/waveglow/1"),
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(err.exit_code(), EXIT_IO);
        assert_eq!(
            err.to_string(),
            "Failed to create version directory 'trtis_repo/waveglow/1': denied"
        );
    }
}
