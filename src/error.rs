//! Unified error types for the image viewer application.

use std::fmt;
use std::path::PathBuf;

/// Application-specific errors.
#[derive(Debug)]
pub enum AppError {
    /// The file vanished before or while it was read
    NotFound(PathBuf),
    /// Permission or I/O failure reading a file
    Read { path: PathBuf, message: String },
    /// Bytes could not be interpreted as an image
    Decode(String),
    /// Error scanning directory for image files
    DirectoryScan(String),
    /// Error reading or writing the persisted window geometry
    WindowState(String),
    /// The navigation worker could not be started
    Worker(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(path) => write!(f, "File not found: {}", path.display()),
            AppError::Read { path, message } => {
                write!(f, "Could not read {}: {}", path.display(), message)
            }
            AppError::Decode(msg) => write!(f, "Image decode error: {}", msg),
            AppError::DirectoryScan(msg) => write!(f, "Directory scan error: {}", msg),
            AppError::WindowState(msg) => write!(f, "Window state error: {}", msg),
            AppError::Worker(msg) => write!(f, "Navigation worker error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl AppError {
    /// Classifies an I/O failure on a specific file.
    pub fn from_file_io(path: PathBuf, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => AppError::NotFound(path),
            _ => AppError::Read {
                path,
                message: err.to_string(),
            },
        }
    }
}

impl From<image::ImageError> for AppError {
    fn from(err: image::ImageError) -> Self {
        AppError::Decode(err.to_string())
    }
}

impl From<base64::DecodeError> for AppError {
    fn from(err: base64::DecodeError) -> Self {
        AppError::Decode(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::DirectoryScan(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::WindowState(err.to_string())
    }
}

/// Type alias for Results in this application.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn missing_file_maps_to_not_found() {
        let err = AppError::from_file_io(
            PathBuf::from("/gone.png"),
            io::Error::from(io::ErrorKind::NotFound),
        );
        assert!(matches!(err, AppError::NotFound(ref p) if p == &PathBuf::from("/gone.png")));
    }

    #[test]
    fn permission_failure_maps_to_read() {
        let err = AppError::from_file_io(
            PathBuf::from("/locked.png"),
            io::Error::from(io::ErrorKind::PermissionDenied),
        );
        assert!(matches!(err, AppError::Read { .. }));
        assert!(err.to_string().starts_with("Could not read /locked.png"));
    }
}
