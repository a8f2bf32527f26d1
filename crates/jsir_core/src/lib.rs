//! jsir_core: Core utilities for the jsir IR toolkit.
//!
//! Provides the indentation helper used by every composite node, node
//! identifiers, and the error type shared across the workspace.

pub mod error;
pub mod id;
pub mod text;

// Re-export commonly used types
pub use error::{IrError, Result};
pub use id::NodeId;
pub use text::{indent, INDENT_WIDTH};
