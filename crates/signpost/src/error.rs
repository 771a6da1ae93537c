//! Error type for help rendering and registry validation.

use thiserror::Error;

/// Error type for catalog operations.
///
/// An unresolved command path is deliberately NOT an error: the dispatcher
/// absorbs it and produces no output (see [`run_help`](crate::run_help)).
#[derive(Debug, Error)]
pub enum HelpError {
    /// Writing to the output stream failed.
    #[error("write error: {0}")]
    Io(#[from] std::io::Error),

    /// The registry refers to commands that do not exist in the tree.
    #[error("catalog configuration error:\n  {0}")]
    Config(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = HelpError::Config("\"foo\" is registered but does not exist".into());
        let msg = err.to_string();
        assert!(msg.contains("catalog configuration error"));
        assert!(msg.contains("foo"));
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: HelpError = io_err.into();
        assert!(matches!(err, HelpError::Io(_)));
    }
}
