use std::io;
use std::path::{Path, PathBuf};
pub type BrowseResult<T> = std::result::Result<T, BrowseError>;
/// Failure raised by a filesystem collaborator or a navigator operation.
///
/// Every variant is recoverable: the session turns it into a one-line status
/// message and keeps running.
#[derive(Debug, Clone)]
pub struct BrowseError {
    pub kind: ErrorKind,
    pub message: String,
    pub path: Option<PathBuf>,
    pub context: Option<String>,
}
impl BrowseError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            path: None,
            context: None,
        }
    }
    pub fn with_path(mut self, path: impl AsRef<Path>) -> Self {
        self.path = Some(path.as_ref().to_path_buf());
        self
    }
    pub fn with_context(mut self, context: &str) -> Self {
        self.context = Some(context.to_string());
        self
    }
    pub fn already_exists(path: &Path) -> Self {
        Self::new(ErrorKind::AlreadyExists, "destination already exists").with_path(path)
    }
    /// Pipes, sockets and devices are never copied.
    pub fn not_regular(path: &Path) -> Self {
        Self::new(ErrorKind::InvalidTarget, "not a regular file or directory").with_path(path)
    }
    pub fn from_io(err: io::Error, path: &Path) -> Self {
        Self::from(err).with_path(path)
    }
    /// Single line suitable for the status row.
    pub fn status_line(&self) -> String {
        let mut line = String::new();
        if let Some(context) = &self.context {
            line.push_str(context);
            line.push_str(": ");
        }
        line.push_str(&self.message);
        if let Some(path) = &self.path {
            line.push_str(&format!(" ({})", path.display()));
        }
        line.replace(['\n', '\r'], " ")
    }
}
impl std::fmt::Display for BrowseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.kind, self.status_line())
    }
}
impl std::error::Error for BrowseError {}
impl From<io::Error> for BrowseError {
    fn from(err: io::Error) -> Self {
        let kind = ErrorKind::classify(&err);
        Self::new(kind, err.to_string())
    }
}
/// Error kinds surfaced to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    PermissionDenied,
    AlreadyExists,
    CrossDeviceMove,
    Unreadable,
    InvalidTarget,
    Other,
}
impl ErrorKind {
    pub fn classify(err: &io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => ErrorKind::NotFound,
            io::ErrorKind::PermissionDenied => ErrorKind::PermissionDenied,
            io::ErrorKind::AlreadyExists => ErrorKind::AlreadyExists,
            io::ErrorKind::CrossesDevices => ErrorKind::CrossDeviceMove,
            io::ErrorKind::InvalidData => ErrorKind::Unreadable,
            _ => ErrorKind::Other,
        }
    }
}
#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn test_io_errors_are_classified() {
        let err = BrowseError::from(io::Error::from(io::ErrorKind::NotFound));
        assert_eq!(err.kind, ErrorKind::NotFound);
        let err = BrowseError::from(io::Error::from(io::ErrorKind::PermissionDenied));
        assert_eq!(err.kind, ErrorKind::PermissionDenied);
        let err = BrowseError::from(io::Error::from(io::ErrorKind::CrossesDevices));
        assert_eq!(err.kind, ErrorKind::CrossDeviceMove);
        let err = BrowseError::from(io::Error::from(io::ErrorKind::Interrupted));
        assert_eq!(err.kind, ErrorKind::Other);
    }
    #[test]
    fn test_status_line_is_single_line() {
        let err = BrowseError::new(ErrorKind::Other, "first\nsecond")
            .with_context("Delete")
            .with_path("/tmp/x");
        let line = err.status_line();
        assert!(! line.contains('\n'));
        assert!(line.starts_with("Delete: first second"));
        assert!(line.ends_with("(/tmp/x)"));
    }
}
