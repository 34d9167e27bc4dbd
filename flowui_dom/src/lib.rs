// Copyright 2025 the Flowui Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flowui DOM: a retained element tree for popup widgets.
//!
//! Flowui DOM gives Rust hosts the parts of a browser document that small
//! widgets lean on, without a browser.
//!
//! - Represents a hierarchy of elements with tag names, attributes, classes, inline style properties, and text or markup content.
//! - Resolves CSS selectors (`query_selector_all`) and ids (`get_element_by_id`) over connected elements in document order.
//! - Routes events capture → target → bubble through window, document, and element listeners.
//! - Measures content and stacks it in a column so popups can be positioned and hit tested.
//!
//! ## Not a browser
//!
//! There is no CSS cascade and no general layout.
//! Stylesheets are stored as text for hosts that render them; geometry that
//! matters to hit testing and positioning is carried as data
//! ([`BoxStyle`], [`StyleValue`], bounds, z-index).
//!
//! ## API overview
//!
//! - [`Document`]: the element arena, viewport, listeners, and text metrics.
//! - [`ElementId`]: generational handle of an element.
//! - [`Event`] / [`EventTarget`] / [`Listener`]: events and their handlers.
//! - [`DispatchOutcome`]: result of delivering an event.
//! - [`SelectorList`]: parsed selectors.
//!
//! Key operations:
//! - [`Document::create_element`] → [`ElementId`], then [`Document::append_child`].
//! - [`Document::query_selector_all`] and [`Document::hit_test_point`].
//! - [`Document::add_event_listener`] → [`ListenerId`]; [`Document::remove_event_listener`].
//! - [`Document::pointer_event`] and [`Document::blur_window`] feed host input.
//! - [`Document::scroll_size`] and [`Document::layout_column`].
//!
//! ### Minimal usage
//!
//! ```
//! use flowui_dom::{Document, EventTarget, event::types};
//! use kurbo::{Point, Rect, Size};
//!
//! let mut doc = Document::new(Size::new(800.0, 600.0));
//! let card = doc.create_element("div");
//! doc.add_class(card, "card");
//! doc.append_child(doc.body(), card);
//! doc.set_bounds(card, Rect::new(0.0, 0.0, 100.0, 100.0));
//!
//! assert_eq!(doc.query_selector_all(".card").unwrap(), [card]);
//!
//! doc.add_event_listener(card, types::CONTEXT_MENU, |_doc, ev| ev.prevent_default());
//! let outcome = doc.pointer_event(types::CONTEXT_MENU, Point::new(10.0, 10.0));
//! assert!(outcome.default_prevented);
//! ```

pub mod dispatch;
mod document;
mod error;
pub mod event;
pub mod layout;
pub mod selector;
mod types;

pub use dispatch::DispatchOutcome;
pub use document::{Document, Hit};
pub use error::{DomError, Result};
pub use event::{Event, EventTarget, Listener, ListenerOptions, Phase};
pub use layout::{FixedAdvance, TextMetrics};
pub use selector::SelectorList;
pub use types::{BoxStyle, Content, ElementFlags, ElementId, ListenerId, StyleValue};
