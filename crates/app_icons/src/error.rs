//! Error types for icon generation.
//!
//! Every variant is fatal: the pipeline stops at the first error and the caller
//! reports it. Variants carry the path involved and, when the failure happened
//! while processing a table entry, that entry's filename.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using [`IconError`].
pub type Result<T> = std::result::Result<T, IconError>;

/// Errors produced while generating an icon set.
#[derive(Error, Debug)]
pub enum IconError {
    /// The source image does not exist or could not be read.
    #[error("Source image '{}' not found or unreadable", path.display())]
    SourceNotFound {
        /// Path that was opened.
        path: PathBuf,
        /// Underlying cause.
        #[source]
        source: std::io::Error,
    },

    /// The source file exists but is not a decodable raster image.
    #[error("Source image '{}' is not a supported raster format", path.display())]
    UnsupportedFormat {
        /// Path that was decoded.
        path: PathBuf,
        /// Underlying cause.
        #[source]
        source: image::ImageError,
    },

    /// Creating the output directory or writing an icon failed.
    #[error("{message} at '{}'{}", path.display(), entry_suffix(entry))]
    Filesystem {
        /// Path being written.
        path: PathBuf,
        /// Filename of the table entry being processed, if any.
        entry: Option<String>,
        /// Error description.
        message: String,
        /// Underlying cause.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A table entry cannot be rendered, e.g. it resolves to zero pixels.
    #[error("Invalid icon entry '{entry}': {message}")]
    InvalidEntry {
        /// Filename of the offending entry.
        entry: String,
        /// Error description.
        message: String,
    },

    /// Encoding or writing the manifest failed.
    #[error("Failed to write manifest '{}'", path.display())]
    Serialization {
        /// Manifest path.
        path: PathBuf,
        /// Underlying cause.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

fn entry_suffix(entry: &Option<String>) -> String {
    match entry {
        Some(entry) => format!(" (entry '{entry}')"),
        None => String::new(),
    }
}

impl IconError {
    /// Create a source-not-found error.
    pub fn source_not_found(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::SourceNotFound {
            path: path.into(),
            source,
        }
    }

    /// Create an unsupported-format error.
    pub fn unsupported_format(path: impl Into<PathBuf>, source: image::ImageError) -> Self {
        Self::UnsupportedFormat {
            path: path.into(),
            source,
        }
    }

    /// Create a filesystem error that is not tied to a table entry.
    pub fn filesystem<E>(path: impl Into<PathBuf>, message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Filesystem {
            path: path.into(),
            entry: None,
            message: message.into(),
            source: Box::new(source),
        }
    }

    /// Create a filesystem error raised while processing `entry`.
    pub fn filesystem_for_entry<E>(
        path: impl Into<PathBuf>,
        entry: impl Into<String>,
        message: impl Into<String>,
        source: E,
    ) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Filesystem {
            path: path.into(),
            entry: Some(entry.into()),
            message: message.into(),
            source: Box::new(source),
        }
    }

    /// Create an invalid-entry error.
    pub fn invalid_entry(entry: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidEntry {
            entry: entry.into(),
            message: message.into(),
        }
    }

    /// Create a serialization error.
    pub fn serialization<E>(path: impl Into<PathBuf>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Serialization {
            path: path.into(),
            source: Box::new(source),
        }
    }

    /// Filename of the table entry that failed, if the error is tied to one.
    #[must_use]
    pub fn entry(&self) -> Option<&str> {
        match self {
            Self::Filesystem { entry, .. } => entry.as_deref(),
            Self::InvalidEntry { entry, .. } => Some(entry.as_str()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_filesystem_message_names_entry() {
        let err = IconError::filesystem_for_entry(
            "out/AppIcon-20x20@2x.png",
            "AppIcon-20x20@2x.png",
            "Failed to write icon",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(
            err.to_string(),
            "Failed to write icon at 'out/AppIcon-20x20@2x.png' (entry 'AppIcon-20x20@2x.png')"
        );
        assert_eq!(err.entry(), Some("AppIcon-20x20@2x.png"));
    }

    #[test]
    fn test_filesystem_without_entry() {
        let err = IconError::filesystem(
            "out",
            "Failed to create output directory",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(err.to_string(), "Failed to create output directory at 'out'");
        assert!(err.entry().is_none());
    }

    #[test]
    fn test_invalid_entry_message() {
        let err = IconError::invalid_entry("z.png", "resolves to 0x0 pixels");
        assert_eq!(err.to_string(), "Invalid icon entry 'z.png': resolves to 0x0 pixels");
        assert_eq!(err.entry(), Some("z.png"));
    }

    #[test]
    fn test_source_chain() {
        let err = IconError::source_not_found(
            "missing.png",
            io::Error::new(io::ErrorKind::NotFound, "no such file"),
        );
        let cause = std::error::Error::source(&err).map(|e| e.to_string());
        assert_eq!(cause.as_deref(), Some("no such file"));
    }
}
