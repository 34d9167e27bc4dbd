// Copyright 2025 the Flowui Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Menu definitions: items and divided groups.

use std::fmt;
use std::rc::Rc;

use flowui_dom::event::types;
use flowui_dom::{Document, Event, Listener};

/// One clickable row.
///
/// The label is markup and is inserted into the rendered button without
/// escaping; only pass trusted content. Handlers are registered verbatim on the
/// button, keyed by event type.
#[derive(Clone)]
pub struct MenuItem {
    label: String,
    events: Vec<(String, Listener)>,
}

impl MenuItem {
    /// Create an item with a markup label and no handlers.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            events: Vec::new(),
        }
    }

    /// Add a handler for `event_type`.
    pub fn on(
        mut self,
        event_type: impl Into<String>,
        handler: impl Fn(&mut Document, &mut Event) + 'static,
    ) -> Self {
        let handler: Listener = Rc::new(handler);
        self.events.push((event_type.into(), handler));
        self
    }

    /// Add a `click` handler.
    pub fn on_click(self, handler: impl Fn(&mut Document, &mut Event) + 'static) -> Self {
        self.on(types::CLICK, handler)
    }

    /// The markup label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Handlers in registration order.
    pub fn events(&self) -> impl Iterator<Item = (&str, &Listener)> {
        self.events.iter().map(|(t, l)| (t.as_str(), l))
    }
}

impl fmt::Debug for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let events: Vec<&str> = self.events.iter().map(|(t, _)| t.as_str()).collect();
        f.debug_struct("MenuItem")
            .field("label", &self.label)
            .field("events", &events)
            .finish()
    }
}

/// A top-level menu entry.
#[derive(Clone, Debug)]
pub enum MenuEntry {
    /// A single row.
    Item(MenuItem),
    /// Rows rendered as a cluster, followed by a divider.
    Group(Vec<MenuItem>),
}

impl MenuEntry {
    /// Items of this entry, in order.
    pub fn items(&self) -> &[MenuItem] {
        match self {
            Self::Item(item) => core::slice::from_ref(item),
            Self::Group(items) => items,
        }
    }
}

impl From<MenuItem> for MenuEntry {
    fn from(item: MenuItem) -> Self {
        Self::Item(item)
    }
}

impl From<Vec<MenuItem>> for MenuEntry {
    fn from(items: Vec<MenuItem>) -> Self {
        Self::Group(items)
    }
}
