//! Error types for the hook registry and dispatch engine.
//!
//! # Design
//! `HookError` covers everything that is the user's fault: a bad verb, a bad
//! URL, or a config file that cannot be read or does not have the expected
//! shape. These abort the command before anything is saved or dispatched.
//!
//! `TransportError` is scoped to a single request. The dispatch engine turns
//! it into `Outcome` failure and never lets it escape the round.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building hooks or loading/saving the registry.
#[derive(Debug, Error)]
pub enum HookError {
    /// The string is not one of the nine whitelisted HTTP methods.
    #[error("`{0}` is not a valid HTTP verb")]
    InvalidVerb(String),

    /// The string is not an absolute, parseable URL.
    #[error("malformed URL `{url}`: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// A required field is absent from a config entry.
    #[error("missing field `{0}`")]
    MissingField(&'static str),

    /// A config entry (or one of its fields) has the wrong JSON type.
    #[error("field `{field}` must be {expected}")]
    TypeMismatch {
        field: &'static str,
        expected: &'static str,
    },

    /// A config entry failed validation; `index` is its array position.
    #[error("config entry {index}: {source}")]
    InvalidEntry {
        index: usize,
        #[source]
        source: Box<HookError>,
    },

    #[error("failed to read config {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write config {}: {source}", path.display())]
    ConfigWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid JSON.
    #[error("failed to parse config {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// A single request could not complete at the transport level.
///
/// HTTP error statuses are not transport errors; a 500 response is still a
/// response.
#[derive(Debug, Error)]
#[error("{method} {url} failed: {message}")]
pub struct TransportError {
    pub method: String,
    pub url: String,
    pub message: String,
}
