//! Error types for the userdeck plugin.
//!
//! This module defines the centralized error type [`UserdeckError`] and a type alias
//! [`Result`] for convenient error handling throughout the plugin. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.

use thiserror::Error;

/// The main error type for userdeck operations.
///
/// Fetch failures (`Http`, `Decode`) end up as human-readable messages in the
/// request status of the store that issued the request, so their `Display`
/// output is what the user sees.
///
/// # Examples
///
/// ```
/// use userdeck::domain::UserdeckError;
///
/// let err = UserdeckError::Http { resource: "users", status: 503 };
/// assert_eq!(err.to_string(), "Failed to fetch users (HTTP 503)");
/// ```
#[derive(Debug, Error)]
pub enum UserdeckError {
    /// The API answered with a non-success status code.
    ///
    /// The host reports transport failures (DNS, refused connection) as a
    /// non-success status as well, so this variant also covers network errors.
    #[error("Failed to fetch {resource} (HTTP {status})")]
    Http {
        /// Which collection was requested (`users` or `posts`).
        resource: &'static str,
        /// Status code reported by the host.
        status: u16,
    },

    /// The response body was not the expected JSON shape.
    #[error("Failed to read {resource}: {source}")]
    Decode {
        /// Which collection was requested (`users` or `posts`).
        resource: &'static str,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// Preference storage operation failed.
    ///
    /// Occurs when reading from or writing to the preference file fails.
    /// The string contains a description of what went wrong.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations. Automatically converts
    /// from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for userdeck operations.
pub type Result<T> = std::result::Result<T, UserdeckError>;
