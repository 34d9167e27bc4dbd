// Copyright 2025 the Flowui Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Events, listeners, and the listener registry.
//!
//! Listeners are shared closures receiving the document mutably, so a handler
//! can restructure the tree (open a menu, remove a node) while the event is
//! being delivered. The dispatcher clones the listeners of each step before
//! running them; see [`dispatch`](crate::dispatch).

use std::fmt;
use std::rc::Rc;

use kurbo::Point;

use crate::document::Document;
use crate::types::{ElementId, ListenerId};

/// Well-known event type names.
pub mod types {
    /// Primary button activation.
    pub const CLICK: &str = "click";
    /// Request to open a context menu (secondary click or long press).
    pub const CONTEXT_MENU: &str = "contextmenu";
    /// The window lost focus.
    pub const BLUR: &str = "blur";
}

/// A shared event handler.
pub type Listener = Rc<dyn Fn(&mut Document, &mut Event)>;

/// Where an event is delivered or a listener is registered.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EventTarget {
    /// The window hosting the document.
    Window,
    /// The document itself, above the root element.
    Document,
    /// An element.
    Element(ElementId),
}

impl From<ElementId> for EventTarget {
    fn from(id: ElementId) -> Self {
        Self::Element(id)
    }
}

/// Phases of event propagation.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Phase {
    /// Window-to-target traversal, excluding the target.
    Capture,
    /// Target node.
    Target,
    /// Target-to-window traversal, excluding the target.
    Bubble,
}

/// Options for [`Document::add_event_listener_with`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ListenerOptions {
    /// Run during the capture phase instead of the bubble phase.
    pub capture: bool,
}

/// An event in flight.
#[derive(Clone, Debug)]
pub struct Event {
    event_type: String,
    target: EventTarget,
    current_target: EventTarget,
    phase: Phase,
    client: Point,
    bubbles: bool,
    default_prevented: bool,
    propagation_stopped: bool,
}

impl Event {
    /// Create a bubbling event aimed at `target`.
    pub fn new(event_type: impl Into<String>, target: impl Into<EventTarget>) -> Self {
        let target = target.into();
        Self {
            event_type: event_type.into(),
            target,
            current_target: target,
            phase: Phase::Target,
            client: Point::ORIGIN,
            bubbles: true,
            default_prevented: false,
            propagation_stopped: false,
        }
    }

    /// Set the pointer position in viewport coordinates.
    pub fn with_client(mut self, client: Point) -> Self {
        self.client = client;
        self
    }

    /// Set whether the event bubbles.
    pub fn with_bubbles(mut self, bubbles: bool) -> Self {
        self.bubbles = bubbles;
        self
    }

    /// Event type name, e.g. `"click"`.
    pub fn event_type(&self) -> &str {
        &self.event_type
    }

    /// The target the event was dispatched to.
    pub fn target(&self) -> EventTarget {
        self.target
    }

    /// The node whose listeners are currently running.
    pub fn current_target(&self) -> EventTarget {
        self.current_target
    }

    /// Current propagation phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Pointer position in viewport coordinates (origin for non-pointer events).
    pub fn client(&self) -> Point {
        self.client
    }

    /// Whether the event bubbles.
    pub fn bubbles(&self) -> bool {
        self.bubbles
    }

    /// Cancel the host's default action.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    /// Whether [`prevent_default`](Self::prevent_default) was called.
    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }

    /// Stop after the listeners of the current node have run.
    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    /// Whether [`stop_propagation`](Self::stop_propagation) was called.
    pub fn propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }

    pub(crate) fn enter(&mut self, phase: Phase, current: EventTarget) {
        self.phase = phase;
        self.current_target = current;
    }
}

pub(crate) struct ListenerEntry {
    pub(crate) id: ListenerId,
    pub(crate) target: EventTarget,
    pub(crate) event_type: String,
    pub(crate) capture: bool,
    pub(crate) listener: Listener,
}

/// Registered listeners, in registration order.
#[derive(Default)]
pub(crate) struct ListenerRegistry {
    entries: Vec<ListenerEntry>,
    next_id: u64,
}

impl fmt::Debug for ListenerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerRegistry")
            .field("entries", &self.entries.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}

impl ListenerRegistry {
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn add(
        &mut self,
        target: EventTarget,
        event_type: &str,
        options: ListenerOptions,
        listener: Listener,
    ) -> ListenerId {
        self.next_id += 1;
        let id = ListenerId(self.next_id);
        self.entries.push(ListenerEntry {
            id,
            target,
            event_type: event_type.to_string(),
            capture: options.capture,
            listener,
        });
        id
    }

    pub(crate) fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }

    pub(crate) fn contains(&self, id: ListenerId) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    pub(crate) fn count(&self, target: EventTarget, event_type: Option<&str>) -> usize {
        self.entries
            .iter()
            .filter(|e| e.target == target && event_type.is_none_or(|t| e.event_type == t))
            .count()
    }

    pub(crate) fn drop_element(&mut self, id: ElementId) {
        self.entries.retain(|e| e.target != EventTarget::Element(id));
    }

    /// Snapshot the listeners that should run for `target` in `phase`.
    pub(crate) fn collect(
        &self,
        target: EventTarget,
        event_type: &str,
        phase: Phase,
    ) -> Vec<(ListenerId, Listener)> {
        self.entries
            .iter()
            .filter(|e| e.target == target && e.event_type == event_type)
            .filter(|e| match phase {
                Phase::Capture => e.capture,
                Phase::Target => true,
                Phase::Bubble => !e.capture,
            })
            .map(|e| (e.id, Rc::clone(&e.listener)))
            .collect()
    }
}
