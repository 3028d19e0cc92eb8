/*!
 * Error types for the linguabot application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors that can occur when calling the text generator or grader APIs
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Error when making an API request fails
    #[error("API request failed: {0}")]
    RequestFailed(String),

    /// Error when the generator's reply does not match the expected
    /// labeled-field format. The message names the missing field and is
    /// intended to be shown to the user verbatim.
    #[error("Could not interpret response: {0}")]
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
    #[error("Authentication error: {0}")]
    AuthenticationError(String),
}

/// Errors that can occur against the persistent store
#[derive(Error, Debug)]
pub enum StoreError {
    /// Insert collided with an existing row on a unique key.
    /// Callers recover locally by presenting an "already there" message.
    #[error("Entry already exists: {0}")]
    DuplicateEntry(String),

    /// Any other storage failure (connectivity, corruption). Fatal for the
    /// current operation; never retried by this layer.
    #[error("Store error: {0}")]
    Other(String),
}

/// Errors that can occur in a quiz session
#[derive(Error, Debug)]
pub enum QuizError {
    /// Quiz start attempted with an empty word pool
    #[error("Add words to your vocabulary list before starting a quiz")]
    EmptyPool,

    /// An answer was submitted while a grading call was still outstanding
    #[error("An answer is already being graded")]
    AnswerInFlight,

    /// The session has no active word (internal invariant violation)
    #[error("Quiz session is not active")]
    NotActive,
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a provider
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Error from the persistent store
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Error from a quiz session
    #[error("Quiz error: {0}")]
    Quiz(#[from] QuizError),

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
