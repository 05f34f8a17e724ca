//! Error types for table rendering.

use thiserror::Error;

/// Errors reported by the strict render entry points.
///
/// The lenient entry points (`render`, `render_with_order`, `view`) never
/// return these; they repair the group list and log instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// A group column name that the table does not define.
    #[error("unknown group column: {name}")]
    UnknownGroupColumn {
        /// The offending name as given by the caller.
        name: String,
    },

    /// A group column listed more than once.
    #[error("group column listed more than once: {name}")]
    DuplicateGroupColumn {
        /// The repeated name.
        name: String,
    },
}

/// Result type alias using [`TableError`].
pub type Result<T> = std::result::Result<T, TableError>;
