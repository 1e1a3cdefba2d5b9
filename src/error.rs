//! Error types for key parsing, configuration and the clipboard.
//!
//! The accumulator itself never fails; these only surface at the edges
//! where text comes in from a user or a file.

use std::path::PathBuf;
use thiserror::Error;

/// A key label or key string that does not map to a keypad event.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeyError {
    #[error("unknown key: {0:?}")]
    UnknownKey(String),

    #[error("digit out of range: {0}")]
    InvalidDigit(u8),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid config value: {0}")]
    Invalid(String),
}

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("failed to access clipboard: {0}")]
    Access(#[source] arboard::Error),

    #[error("failed to copy to clipboard: {0}")]
    Copy(#[source] arboard::Error),
}
