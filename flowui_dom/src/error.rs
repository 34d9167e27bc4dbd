// Copyright 2025 the Flowui Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for document operations.

/// Result type alias for document operations.
pub type Result<T> = core::result::Result<T, DomError>;

/// Errors reported by [`Document`](crate::Document) operations.
///
/// Operations taking an [`ElementId`](crate::ElementId) never fail: stale handles
/// are ignored or yield `None`. Only parsing can fail.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    /// Selector text could not be parsed.
    #[error("invalid selector '{selector}': {message}")]
    InvalidSelector {
        /// The selector text as supplied.
        selector: String,
        /// What went wrong.
        message: String,
    },
}

impl DomError {
    /// Create a selector error.
    pub fn invalid_selector(selector: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidSelector {
            selector: selector.into(),
            message: message.into(),
        }
    }
}
