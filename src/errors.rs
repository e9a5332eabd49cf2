/*!
 * Error types for the prepbot application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors that can occur at the chat platform boundary
#[derive(Error, Debug)]
pub enum ChatError {
    /// Error when publishing a new message fails
    #[error("failed to send message to channel {channel_id}: {reason}")]
    SendFailed {
        /// Channel the message was addressed to
        channel_id: String,
        /// Reason reported by the platform client
        reason: String,
    },

    /// Error when editing an already published message fails
    #[error("failed to edit message {message_id}: {reason}")]
    EditFailed {
        /// Message that could not be edited
        message_id: String,
        /// Reason reported by the platform client
        reason: String,
    },

    /// Error when the target channel does not exist or is not reachable
    #[error("unknown channel: {0}")]
    UnknownChannel(String),
}

/// Errors that can occur when querying the company enrichment service
#[derive(Error, Debug)]
pub enum EnrichmentError {
    /// Error when making an API request fails
    #[error("API request failed: {0}")]
    RequestFailed(String),

    /// Error when parsing an API response fails
    #[error("failed to parse API response: {0}")]
    ParseError(String),

    /// Error returned by the API itself
    #[error("API responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the API
        message: String,
    },

    /// Error with authentication
    #[error("authentication error: {0}")]
    AuthenticationError(String),
}

impl From<reqwest::Error> for EnrichmentError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            Self::ParseError(error.to_string())
        } else {
            Self::RequestFailed(error.to_string())
        }
    }
}

/// Errors that can occur in the interview-process store
#[derive(Error, Debug)]
pub enum StorageError {
    /// Error from the underlying database
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Error when the blocking storage task could not complete
    #[error("storage task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    /// Error when the connection lock was poisoned by a panicked writer
    #[error("storage connection lock poisoned")]
    Poisoned,

    /// Error when a stored record cannot be decoded
    #[error("invalid stored record: {0}")]
    InvalidRecord(String),

    /// Error from a filesystem operation
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur while loading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Error when PORT does not parse as a TCP port number
    #[error("invalid PORT value: {0}")]
    InvalidPort(String),

    /// Error when LOG_LEVEL is not a recognized level name
    #[error("invalid LOG_LEVEL value: {0}")]
    InvalidLogLevel(String),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from the chat platform boundary
    #[error("chat error: {0}")]
    Chat(#[from] ChatError),

    /// Error from the enrichment service
    #[error("enrichment error: {0}")]
    Enrichment(#[from] EnrichmentError),

    /// Error from the process store
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// Error from configuration loading
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Error from dataset loading
    #[error("dataset error: {0}")]
    Data(String),
}
