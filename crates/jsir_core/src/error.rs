//! Error types for IR construction.

use thiserror::Error;

/// Errors raised while constructing IR nodes.
///
/// Serialization itself never fails: a node that was built successfully
/// always renders.
#[derive(Debug, Error)]
pub enum IrError {
    /// A required field failed its type or shape check at construction time.
    #[error("{node}: {message}")]
    InvalidArgument {
        /// Name of the node kind being constructed.
        node: &'static str,
        message: String,
    },

    /// A JSON IR description could not be parsed.
    #[error("invalid IR description: {0}")]
    Json(#[from] serde_json::Error),

    /// A JSON IR description could not be read.
    #[error("failed to read IR description: {0}")]
    Io(#[from] std::io::Error),
}

impl IrError {
    pub fn invalid_argument(node: &'static str, message: impl Into<String>) -> Self {
        IrError::InvalidArgument {
            node,
            message: message.into(),
        }
    }

    /// Whether this is a construction-time contract violation.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, IrError::InvalidArgument { .. })
    }
}

pub type Result<T> = std::result::Result<T, IrError>;
