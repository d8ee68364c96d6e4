/*!
 * Error types for the markbridge crate.
 *
 * This module contains custom error types for different parts of the
 * translation core, using the thiserror crate for ergonomic error definitions.
 */

use thiserror::Error;

/// Errors that can occur when invoking the translation backend
#[derive(Error, Debug)]
pub enum BackendError {
    /// Error when making a request to the backend fails
    #[error("API request failed: {0}")]
    RequestFailed(String),

    /// Error when parsing a backend response fails
    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    /// Error returned by the backend itself
    #[error("API responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the backend
        message: String,
    },

    /// Error establishing or maintaining a connection
    #[error("Connection error: {0}")]
    ConnectionError(String),
}

/// Errors that can occur while resolving a model or translating a document.
///
/// Every variant is terminal for the request: nothing in this core retries,
/// and resolver errors are raised before any translation call is made.
#[derive(Error, Debug)]
pub enum TranslateError {
    /// No model in the catalog can translate the requested language pair
    #[error("Language pair {src}-{tgt} is not supported")]
    UnsupportedLanguagePair {
        /// Normalized source language code
        src: String,
        /// Normalized target language code
        tgt: String,
    },

    /// Multilingual translation requested (or auto-selected) but unavailable
    #[error("No multilingual model support for pair {src}-{tgt}. Remove flag `use_multi` from request")]
    NoMultilingualSupport {
        /// Normalized source language code
        src: String,
        /// Normalized target language code
        tgt: String,
    },

    /// The external translation backend failed
    #[error("Translation backend error: {0}")]
    Backend(#[from] BackendError),

    /// The input could not be parsed as markup (HTML pipeline only)
    #[error("Input is not parseable markup: {0}")]
    MalformedMarkup(String),
}

impl TranslateError {
    /// The HTTP status an API layer sitting above this core would map
    /// the error to.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::UnsupportedLanguagePair { .. } => 406,
            Self::NoMultilingualSupport { .. } => 404,
            Self::Backend(_) => 500,
            Self::MalformedMarkup(_) => 400,
        }
    }
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error loading or validating configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error from the translation core
    #[error("Translation error: {0}")]
    Translate(#[from] TranslateError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
