//! Error types for mdgrab operations.
//!
//! This module defines the main error type [`GrabError`] which represents
//! all possible errors that can occur during fetching, extraction, and
//! writing of an article.
//!
//! # Example
//!
//! ```rust
//! use mdgrab_core::{GrabError, Result};
//!
//! fn check_status(status: u16) -> Result<()> {
//!     if status != 200 {
//!         return Err(GrabError::HttpStatus { status });
//!     }
//!     Ok(())
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for article grabbing operations.
///
/// Every failure in the pipeline is a value of this type; the extractor
/// never lets a panic or foreign error cross its boundary. All failures
/// are terminal for the single invocation; nothing is retried.
#[derive(Error, Debug)]
pub enum GrabError {
    /// HTTP request errors from reqwest.
    ///
    /// Wraps network errors, DNS failures, connection issues, and other
    /// transport-level problems.
    #[cfg(feature = "fetch")]
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Request timeout.
    #[error("Request timed out after {timeout} seconds")]
    Timeout { timeout: u64 },

    /// Invalid URL provided.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The server answered with a non-200 status code.
    ///
    /// Returned before any parsing is attempted; the response body is
    /// not inspected.
    #[error("Request failed with status code {status}")]
    HttpStatus { status: u16 },

    /// The article title region could not be located.
    #[error("Article title not found")]
    MissingTitle,

    /// The article content region could not be located.
    ///
    /// Returned when neither the primary nor the secondary content
    /// selector matches.
    #[error("Article content not found")]
    MissingContent,

    /// Any other internal extraction failure, wrapped as text.
    #[error("Extraction failed: {0}")]
    Extraction(String),

    /// File not found.
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// File write errors.
    ///
    /// Wraps standard I/O errors for file operations.
    #[error("Failed to write to file: {0}")]
    WriteError(#[from] std::io::Error),
}

/// Result type alias for GrabError.
///
/// This is a convenience alias for `std::result::Result<T, GrabError>`.
pub type Result<T> = std::result::Result<T, GrabError>;
