//! Error types for network list parsing and subtraction.

use crate::input::ListKind;
use crate::models::Network;
use thiserror::Error;

/// Result type for crate operations
pub type Result<T> = std::result::Result<T, Error>;

/// Defects in the text form of a single network.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NetworkError {
    #[error("missing '/prefix' in '{0}'")]
    MissingPrefix(String),

    #[error("invalid address in '{0}'")]
    InvalidAddress(String),

    #[error("invalid prefix length in '{0}'")]
    InvalidPrefix(String),

    #[error("prefix length exceeds {max} in '{text}'")]
    PrefixTooLong { text: String, max: u8 },

    #[error("'{0}' has host bits set")]
    HostBitsSet(String),

    #[error("'{0}' is not valid UTF-8")]
    NotUtf8(String),
}

/// ip-exclude errors
#[derive(Debug, Error)]
pub enum Error {
    #[error("{list} list, line {line_no}: '{line}': {source}")]
    Parse {
        list: ListKind,
        line_no: usize,
        line: String,
        source: NetworkError,
    },

    #[error("reading {list} list {path}: {source}")]
    Io {
        list: ListKind,
        path: String,
        source: std::io::Error,
    },

    #[error("output network {output} overlaps exclude network {exclude}")]
    InvariantViolation { output: Network, exclude: Network },
}
