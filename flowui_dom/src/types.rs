// Copyright 2025 the Flowui Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Handles, flags, and per-element presentation data.

use core::fmt;

use kurbo::Insets;

/// Identifier for an element in a [`Document`](crate::Document).
///
/// This is a small, copyable handle that stays stable across updates but becomes
/// invalid when the element is released. It consists of a slot index and a
/// generation counter.
///
/// ## Semantics
///
/// - On release, the slot's generation is incremented. Any older `ElementId`
///   that pointed to that slot becomes stale.
/// - Reusing a slot yields a fresh `ElementId` with a higher generation.
/// - Accessors on [`Document`](crate::Document) treat stale ids as absent.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub(crate) u32, pub(crate) u32);

impl ElementId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }

    /// Slot index of this handle.
    pub const fn slot(self) -> u32 {
        self.0
    }

    /// Generation of this handle.
    pub const fn generation(self) -> u32 {
        self.1
    }
}

impl fmt::Debug for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ElementId({}v{})", self.0, self.1)
    }
}

bitflags::bitflags! {
    /// Element flags controlling hit testing.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct ElementFlags: u8 {
        /// Element is visible. Hit testing requires both `VISIBLE` and `PICKABLE`.
        const VISIBLE  = 0b0000_0001;
        /// Element can be hit by pointer input.
        const PICKABLE = 0b0000_0010;
    }
}

impl Default for ElementFlags {
    fn default() -> Self {
        Self::VISIBLE | Self::PICKABLE
    }
}

/// Handle returned when registering an event listener.
///
/// Pass it to [`Document::remove_event_listener`](crate::Document::remove_event_listener)
/// to unsubscribe.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(pub(crate) u64);

/// Value of an inline style property.
///
/// Geometry is kept as data rather than CSS text so hosts without a CSS engine
/// can read it directly; [`Document::style_text`](crate::Document::style_text)
/// renders the CSS form.
#[derive(Clone, Debug, PartialEq)]
pub enum StyleValue {
    /// Length in CSS pixels.
    Px(f64),
    /// Duration in seconds.
    Seconds(f64),
    /// Verbatim CSS value.
    Raw(String),
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Px(v) => write!(f, "{v}px"),
            Self::Seconds(v) => write!(f, "{v}s"),
            Self::Raw(v) => f.write_str(v),
        }
    }
}

/// Layout metrics used by [`Document::scroll_size`](crate::Document::scroll_size)
/// and [`Document::layout_column`](crate::Document::layout_column).
///
/// This is the data mirror of the box-model rules a stylesheet would apply.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoxStyle {
    /// Padding around content or children.
    pub padding: Insets,
    /// Minimum border-box width.
    pub min_width: f64,
    /// Font size used to measure text content.
    pub font_size: f64,
    /// Bottom separator width, drawn only when a following sibling exists.
    pub separator: f64,
}

impl Default for BoxStyle {
    fn default() -> Self {
        Self {
            padding: Insets::ZERO,
            min_width: 0.0,
            font_size: 16.0,
            separator: 0.0,
        }
    }
}

/// Content held directly by an element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Content {
    /// Plain text, such as a stylesheet body.
    Text(String),
    /// Unescaped markup, rendered as-is.
    Markup(String),
}
