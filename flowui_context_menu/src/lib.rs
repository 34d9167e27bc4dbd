// Copyright 2025 the Flowui Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=flowui_context_menu --heading-base-level=0

//! Flowui Context Menu: a contextual popup menu for [`flowui_dom`] documents.
//!
//! ## Overview
//!
//! A [`ContextMenu`] intercepts the context-menu gesture on one or more target
//! elements and shows a styled list of actions next to the pointer.
//! Targets are resolved once, when the menu is built. Item rows are built once
//! too, and are moved into a fresh container every time the menu opens.
//!
//! ## Lifecycle
//!
//! 1) Build: [`ContextMenu::new`] resolves the [`Target`] and renders each
//!    [`MenuEntry`] into detached rows. Groups are flattened in place and their
//!    last row carries the [`DIVIDER_ATTRIBUTE`].
//! 2) Wire: [`ContextMenu::init`] listens for `contextmenu` on every target,
//!    for `click` on the document and for `blur` on the window, then injects
//!    the shared stylesheet ([`inject_styles`]).
//! 3) Open: the gesture's default action is prevented, any open menu is
//!    closed, and a `div.contextMenu` is appended to `body`, measured, and
//!    placed with [`clamp_position`]. Its geometry is published as the
//!    `--width`, `--height`, `--top` and `--left` style properties.
//! 4) Close: a document click (including a click on an item, after the item's
//!    own handlers run) or losing window focus removes the container.
//! 5) Tear down: [`ContextMenu::destroy`] unregisters everything.
//!
//! ## Diagnostics
//!
//! Bad input never fails construction. A missing or unmatched target, an
//! invalid selector, or an empty menu is logged through `tracing` and kept in
//! [`ContextMenu::diagnostics`]; the menu is simply inert.
//!
//! ## Trust
//!
//! Item labels are inserted as markup without escaping. Only pass labels you
//! control.
//!
//! ## Example
//!
//! ```
//! use flowui_context_menu::{ContextMenuOptions, MenuEntry, MenuItem, create_context_menu};
//! use flowui_dom::{Document, event::types};
//! use kurbo::{Point, Rect, Size};
//!
//! let mut doc = Document::new(Size::new(800.0, 600.0));
//! let area = doc.create_element("div");
//! doc.add_class(area, "area");
//! doc.append_child(doc.body(), area);
//! doc.set_bounds(area, Rect::new(0.0, 0.0, 400.0, 300.0));
//!
//! let menu = create_context_menu(
//!     &mut doc,
//!     ContextMenuOptions::new(
//!         ".area",
//!         [
//!             MenuEntry::from(MenuItem::new("Copy").on_click(|_doc, _ev| {})),
//!             MenuEntry::from(vec![MenuItem::new("Rename"), MenuItem::new("Delete")]),
//!         ],
//!     ),
//! );
//!
//! let outcome = doc.pointer_event(types::CONTEXT_MENU, Point::new(40.0, 40.0));
//! assert!(outcome.default_prevented);
//! assert!(menu.is_open());
//!
//! doc.pointer_event(types::CLICK, Point::new(700.0, 500.0));
//! assert!(!menu.is_open());
//! ```

mod error;
mod item;
mod menu;
mod nodes;
mod options;
mod position;
mod style;

pub use error::MenuError;
pub use item::{MenuEntry, MenuItem};
pub use menu::{ContextMenu, create_context_menu};
pub use nodes::DIVIDER_ATTRIBUTE;
pub use options::{Appearance, ContextMenuOptions, MenuConfig, ParseAppearanceError, Target};
pub use position::clamp_position;
pub use style::{STYLE_ELEMENT_ID, STYLES, inject_styles};
