//! Errors returned by [`Tree`][crate::Tree] operations.
//!
//! Lookups on values that aren't in the tree are not errors, they return `None`. The only
//! failure is calling a visitor-based traversal without a visitor.

use thiserror::Error;

/// The error type for tree operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A `*_for_each` traversal was called with `None` instead of a visitor.
    #[error("function call missing callback")]
    MissingCallback,
}

/// A `Result` alias with this crate's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
