//! Error types for the form adapter.

/// Errors raised while wiring the form to its elements.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UiError {
    /// An element the form relies on is missing from the tree.
    #[error("element not found: #{id}")]
    ElementNotFound {
        /// The id that was looked up.
        id: String,
    },
}

/// A specialized Result type for form adapter operations.
pub type Result<T> = std::result::Result<T, UiError>;
