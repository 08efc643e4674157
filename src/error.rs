//! Error type shared by decoding, tour construction, and evaluation.

use thiserror::Error as ThisError;

/// Everything that can stop an instance from being decoded or solved.
///
/// None of these are recovered locally: the caller decides whether to skip
/// the instance and move on.
#[derive(Debug, ThisError)]
pub enum Error {
    /// Reading the instance source failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A required header declaration is missing or unreadable.
    #[error("malformed header: {0}")]
    MalformedHeader(String),

    /// The edge-weight format tag is not one of the supported layouts.
    #[error("unsupported edge weight format `{0}`")]
    UnsupportedFormat(String),

    /// The weight section holds fewer values than the dimension requires.
    #[error("truncated edge weight section: expected {expected} values, found {found}")]
    TruncatedData {
        /// Triangular count required by the dimension.
        expected: usize,
        /// Values actually read.
        found: usize,
    },

    /// The weight section holds more values than the dimension allows.
    #[error("edge weight section too long: expected {expected} values, found {found}")]
    SurplusData {
        /// Triangular count required by the dimension.
        expected: usize,
        /// Values actually read.
        found: usize,
    },

    /// A token in the weight section is not an integer.
    #[error("invalid edge weight `{token}` at position {position}")]
    InvalidWeight {
        /// The offending token.
        token: String,
        /// Zero-based position among the weight tokens.
        position: usize,
    },

    /// The instance has no nodes.
    #[error("instance has no nodes")]
    EmptyInstance,

    /// The requested start node does not exist.
    #[error("start node {start} out of range for dimension {dimension}")]
    InvalidStart {
        /// Requested start node.
        start: usize,
        /// Number of nodes in the instance.
        dimension: usize,
    },

    /// Summing edge weights left the `i64` range.
    #[error("edge weight arithmetic overflowed")]
    WeightOverflow,

    /// A tour does not visit every node exactly once.
    #[error("invalid tour: {0}")]
    InvalidTour(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn malformed_header(message: impl Into<String>) -> Self {
        Self::MalformedHeader(message.into())
    }

    pub(crate) fn invalid_tour(message: impl Into<String>) -> Self {
        Self::InvalidTour(message.into())
    }
}
