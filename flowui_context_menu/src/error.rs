// Copyright 2025 the Flowui Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Diagnostics reported while constructing a menu.

use flowui_dom::{DomError, ElementId};

/// A non-fatal construction problem.
///
/// None of these abort construction: the affected collection is left empty,
/// the error is logged, and it is kept in
/// [`ContextMenu::diagnostics`](crate::ContextMenu::diagnostics).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MenuError {
    /// No target was given, or the selector was blank.
    #[error("ContextMenu:: invalid target")]
    MissingTarget,
    /// The target element handle no longer refers to a live element.
    #[error("ContextMenu:: target element {0:?} is no longer alive")]
    StaleTarget(ElementId),
    /// The selector matched nothing.
    #[error("ContextMenu:: \"{selector}\" target not found")]
    TargetNotFound {
        /// Selector text as supplied.
        selector: String,
    },
    /// The selector could not be parsed.
    #[error("ContextMenu:: {0}")]
    InvalidSelector(#[from] DomError),
    /// No menu entries were given.
    #[error("ContextMenu:: menu is empty")]
    EmptyMenu,
}
