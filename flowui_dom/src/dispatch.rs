// Copyright 2025 the Flowui Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Event routing and delivery.
//!
//! ## Overview
//!
//! Builds the propagation path for a target, emits a capture → target → bubble
//! sequence for it, and runs the registered listeners along that sequence.
//!
//! ## Path
//!
//! - Connected element: window → document → root → … → element.
//! - Detached element: the element's own ancestors only.
//! - Document: window → document.
//! - Window: window.
//!
//! ## Delivery
//!
//! - Capture listeners run on the way down, all listeners at the target, and
//!   non-capture listeners on the way up (only if the event bubbles).
//! - Listeners of each step are snapshotted before running; a listener removed
//!   by an earlier handler in the same step is skipped.
//! - [`Event::stop_propagation`] finishes the current step and stops.

use kurbo::Point;

use crate::document::Document;
use crate::event::{Event, EventTarget, Listener, ListenerOptions, Phase, types};
use crate::types::ListenerId;

/// Summary of a completed dispatch.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct DispatchOutcome {
    /// A listener called [`Event::prevent_default`]; the host must skip its default action.
    pub default_prevented: bool,
    /// Number of listeners invoked.
    pub delivered: usize,
}

/// Propagation path from the outermost target to `target` (inclusive).
pub fn propagation_path(doc: &Document, target: EventTarget) -> Vec<EventTarget> {
    match target {
        EventTarget::Window => vec![EventTarget::Window],
        EventTarget::Document => vec![EventTarget::Window, EventTarget::Document],
        EventTarget::Element(id) => {
            let mut out = Vec::new();
            if doc.is_connected(id) {
                out.push(EventTarget::Window);
                out.push(EventTarget::Document);
            }
            out.extend(doc.path_to_root(id).into_iter().map(EventTarget::Element));
            out
        }
    }
}

/// Emit the capture → target → bubble sequence for a path.
///
/// Returns an empty sequence for an empty path.
pub fn emit_path(path: &[EventTarget], bubbles: bool) -> Vec<(Phase, EventTarget)> {
    let Some((&target, ancestors)) = path.split_last() else {
        return Vec::new();
    };
    let mut out = Vec::with_capacity(path.len() * 2);
    // Capture: outermost→parent
    for &n in ancestors {
        out.push((Phase::Capture, n));
    }
    out.push((Phase::Target, target));
    // Bubble: parent→outermost
    if bubbles {
        for &n in ancestors.iter().rev() {
            out.push((Phase::Bubble, n));
        }
    }
    out
}

impl Document {
    /// Register a bubble-phase listener.
    pub fn add_event_listener(
        &mut self,
        target: impl Into<EventTarget>,
        event_type: &str,
        listener: impl Fn(&mut Self, &mut Event) + 'static,
    ) -> ListenerId {
        self.add_event_listener_with(target, event_type, ListenerOptions::default(), listener)
    }

    /// Register a listener with explicit options.
    pub fn add_event_listener_with(
        &mut self,
        target: impl Into<EventTarget>,
        event_type: &str,
        options: ListenerOptions,
        listener: impl Fn(&mut Self, &mut Event) + 'static,
    ) -> ListenerId {
        self.add_shared_listener(target, event_type, options, std::rc::Rc::new(listener))
    }

    /// Register an already shared listener.
    ///
    /// The same [`Listener`] may be registered on several targets.
    pub fn add_shared_listener(
        &mut self,
        target: impl Into<EventTarget>,
        event_type: &str,
        options: ListenerOptions,
        listener: Listener,
    ) -> ListenerId {
        let target = target.into();
        if let EventTarget::Element(id) = target
            && !self.is_alive(id)
        {
            tracing::debug!(?id, event_type, "listener registered on a stale element");
        }
        self.listeners.add(target, event_type, options, listener)
    }

    /// Unregister a listener. Returns true if it was registered.
    pub fn remove_event_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }

    /// Number of listeners on `target`, optionally restricted to one event type.
    pub fn listener_count(&self, target: impl Into<EventTarget>, event_type: Option<&str>) -> usize {
        self.listeners.count(target.into(), event_type)
    }

    /// Total number of registered listeners.
    pub fn total_listeners(&self) -> usize {
        self.listeners.len()
    }

    /// Deliver `event` along its propagation path.
    pub fn dispatch_event(&mut self, mut event: Event) -> DispatchOutcome {
        let path = propagation_path(self, event.target());
        let sequence = emit_path(&path, event.bubbles());
        let mut delivered = 0;
        for (phase, node) in sequence {
            let listeners = self.listeners.collect(node, event.event_type(), phase);
            if listeners.is_empty() {
                continue;
            }
            event.enter(phase, node);
            for (id, listener) in listeners {
                if !self.listeners.contains(id) {
                    continue;
                }
                listener(self, &mut event);
                delivered += 1;
            }
            if event.propagation_stopped() {
                break;
            }
        }
        tracing::trace!(
            event_type = event.event_type(),
            target = ?event.target(),
            delivered,
            default_prevented = event.default_prevented(),
            "dispatched"
        );
        DispatchOutcome {
            default_prevented: event.default_prevented(),
            delivered,
        }
    }

    /// Deliver a pointer event to the topmost element under `point`.
    ///
    /// Falls back to the document when nothing is hit (e.g. outside the viewport).
    pub fn pointer_event(&mut self, event_type: &str, point: Point) -> DispatchOutcome {
        let target = self
            .hit_test_point(point)
            .map_or(EventTarget::Document, |hit| EventTarget::Element(hit.element));
        self.dispatch_event(Event::new(event_type, target).with_client(point))
    }

    /// Notify the document that its window lost focus.
    pub fn blur_window(&mut self) -> DispatchOutcome {
        self.dispatch_event(Event::new(types::BLUR, EventTarget::Window).with_bubbles(false))
    }
}
