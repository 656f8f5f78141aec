//! Error types for help-center extraction.
//!
//! Two failure families exist. Structural errors ([`ExtractError::NotFound`],
//! [`ExtractError::MissingRegion`], [`ExtractError::Io`]) mean the saved page is
//! missing or incomplete and usually point at a bad download. Field errors
//! ([`FieldError`]) mean the page loaded fine but one of its form fields could
//! not be mapped into an [`ArticleRecord`](crate::ArticleRecord).

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for extraction operations
pub type Result<T> = std::result::Result<T, ExtractError>;

/// Errors that can occur while scanning, loading or extracting pages
#[derive(Error, Debug)]
pub enum ExtractError {
    /// A required path does not exist
    #[error("{} does not exist", .0.display())]
    NotFound(PathBuf),

    /// The parsed page has no content region
    #[error("content not available in {}. Check the download.", .path.display())]
    MissingRegion { path: PathBuf },

    /// The page exists but could not be read as UTF-8 text
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A form field could not be mapped into the article record
    #[error("{}: {source}", .path.display())]
    Field {
        path: PathBuf,
        #[source]
        source: FieldError,
    },

    /// Invalid base URL provided
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Options file could not be loaded
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl ExtractError {
    /// Whether this error signals a missing or broken download rather than a
    /// field-mapping problem.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            ExtractError::NotFound(_) | ExtractError::MissingRegion { .. } | ExtractError::Io { .. }
        )
    }
}

/// Failures while mapping form fields into an article record
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// An expected form field is absent
    #[error("missing field `{0}`")]
    MissingField(&'static str),

    /// Neither a page header nor an article head was found
    #[error("no title found")]
    MissingTitle,

    /// The view count is not a number once separators are removed
    #[error("invalid view count `{value}`")]
    InvalidCount { value: String },

    /// The publication date matches none of the configured formats
    #[error("unrecognised date `{value}`")]
    InvalidDate { value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structural_errors_are_flagged() {
        assert!(ExtractError::NotFound(PathBuf::from("a")).is_structural());
        assert!(ExtractError::MissingRegion {
            path: PathBuf::from("a")
        }
        .is_structural());
        assert!(!ExtractError::Field {
            path: PathBuf::from("a"),
            source: FieldError::MissingTitle,
        }
        .is_structural());
    }

    #[test]
    fn missing_region_message_names_the_file() {
        let err = ExtractError::MissingRegion {
            path: PathBuf::from("pages/foo/index.html"),
        };
        assert!(err.to_string().contains("pages/foo/index.html"));
    }
}
