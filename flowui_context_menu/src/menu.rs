// Copyright 2025 the Flowui Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The menu controller.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use flowui_dom::event::types;
use flowui_dom::{BoxStyle, Document, ElementId, EventTarget, ListenerId, StyleValue};
use kurbo::Point;

use crate::error::MenuError;
use crate::nodes::{Rows, build_rows, resolve_targets};
use crate::options::{Appearance, ContextMenuOptions, MenuConfig};
use crate::position::clamp_position;
use crate::style::inject_styles;

/// Minimum container width, `8rem` at a 16px root font size.
const MIN_MENU_WIDTH: f64 = 128.0;

/// State shared between the controller and its listeners.
struct Shared {
    rows: Vec<ElementId>,
    appearance: Appearance,
    config: MenuConfig,
    open: Cell<Option<ElementId>>,
    destroyed: Cell<bool>,
}

impl Shared {
    fn open(&self, doc: &mut Document, pointer: Point) -> Option<ElementId> {
        if self.destroyed.get() {
            tracing::debug!("open ignored on a destroyed menu");
            return None;
        }
        self.close(doc);

        let menu = doc.create_element("div");
        doc.add_class(menu, "contextMenu");
        doc.set_attribute(menu, "data-appearance", self.appearance.as_str());
        doc.set_box_style(
            menu,
            BoxStyle {
                min_width: MIN_MENU_WIDTH,
                ..BoxStyle::default()
            },
        );
        for &row in &self.rows {
            doc.append_child(menu, row);
        }
        let body = doc.body();
        doc.append_child(body, menu);

        let size = doc.scroll_size(menu);
        let origin = clamp_position(pointer, size, doc.viewport_size(), self.config.viewport_margin);
        doc.set_style_property(menu, "--width", StyleValue::Px(size.width));
        doc.set_style_property(menu, "--height", StyleValue::Px(size.height));
        doc.set_style_property(menu, "--top", StyleValue::Px(origin.y));
        doc.set_style_property(menu, "--left", StyleValue::Px(origin.x));
        doc.set_z_index(menu, Some(self.config.z_index));
        doc.layout_column(menu, origin);

        self.open.set(Some(menu));
        tracing::debug!(?menu, ?pointer, ?origin, ?size, "context menu opened");
        Some(menu)
    }

    fn close(&self, doc: &mut Document) {
        let Some(menu) = self.open.take() else {
            return;
        };
        doc.remove(menu);
        for &row in &self.rows {
            doc.remove(row);
        }
        doc.release(menu);
        tracing::debug!(?menu, "context menu closed");
    }
}

/// A context menu bound to one set of targets.
///
/// Construction resolves the targets and builds the item rows; nothing is
/// wired until [`init`](Self::init). A context-menu gesture on any target opens
/// the menu at the pointer, and a document click or window blur closes it.
/// At most one menu is open per controller.
///
/// Problems found during construction do not fail it; see
/// [`diagnostics`](Self::diagnostics).
pub struct ContextMenu {
    shared: Rc<Shared>,
    targets: Vec<ElementId>,
    item_listeners: Vec<ListenerId>,
    listeners: Vec<ListenerId>,
    diagnostics: Vec<MenuError>,
    initialized: bool,
}

impl ContextMenu {
    /// Build a menu with the default [`MenuConfig`].
    pub fn new(doc: &mut Document, options: ContextMenuOptions) -> Self {
        Self::with_config(doc, options, MenuConfig::default())
    }

    /// Build a menu.
    pub fn with_config(doc: &mut Document, options: ContextMenuOptions, config: MenuConfig) -> Self {
        let mut diagnostics = Vec::new();
        let mut report = |err: MenuError| {
            tracing::error!("{err}");
            diagnostics.push(err);
        };

        let targets = resolve_targets(doc, &options.target).unwrap_or_else(|err| {
            report(err);
            Vec::new()
        });
        let Rows { rows, listeners } = build_rows(doc, &options.menu_items, config.stagger_step)
            .unwrap_or_else(|err| {
                report(err);
                Rows::default()
            });

        Self {
            shared: Rc::new(Shared {
                rows,
                appearance: options.appearance.unwrap_or_default(),
                config,
                open: Cell::new(None),
                destroyed: Cell::new(false),
            }),
            targets,
            item_listeners: listeners,
            listeners: Vec::new(),
            diagnostics,
            initialized: false,
        }
    }

    /// Wire the menu into the document and inject the shared stylesheet.
    ///
    /// Registers a document `click` and a window `blur` listener that close
    /// the menu, and a `contextmenu` listener on every target that opens it.
    /// Calling this again registers a second set of listeners. A destroyed
    /// menu stays unwired.
    pub fn init(&mut self, doc: &mut Document) {
        if self.shared.destroyed.get() {
            tracing::warn!("ContextMenu::init called after destroy; nothing is wired");
            return;
        }
        if self.initialized {
            tracing::warn!("ContextMenu::init called more than once; listeners are registered again");
        }
        self.initialized = true;

        let shared = Rc::clone(&self.shared);
        self.listeners.push(doc.add_event_listener(
            EventTarget::Document,
            types::CLICK,
            move |doc, _ev| shared.close(doc),
        ));
        let shared = Rc::clone(&self.shared);
        self.listeners.push(doc.add_event_listener(
            EventTarget::Window,
            types::BLUR,
            move |doc, _ev| shared.close(doc),
        ));
        for &target in &self.targets {
            let shared = Rc::clone(&self.shared);
            self.listeners.push(doc.add_event_listener(
                target,
                types::CONTEXT_MENU,
                move |doc, ev| {
                    ev.prevent_default();
                    shared.open(doc, ev.client());
                },
            ));
        }
        inject_styles(doc);
        tracing::debug!(targets = self.targets.len(), "context menu initialized");
    }

    /// Open the menu with its pointer anchor at `pointer`, closing any open instance first.
    ///
    /// Returns the new container, or `None` after [`destroy`](Self::destroy).
    pub fn open(&self, doc: &mut Document, pointer: Point) -> Option<ElementId> {
        self.shared.open(doc, pointer)
    }

    /// Close the menu. Does nothing, and does not touch the document, when closed.
    pub fn close(&self, doc: &mut Document) {
        self.shared.close(doc);
    }

    /// Close the menu, unregister every listener this controller added, and free its rows.
    ///
    /// Later gestures on the targets are no longer intercepted. Calling this
    /// twice is harmless.
    pub fn destroy(&mut self, doc: &mut Document) {
        self.shared.close(doc);
        for id in self.listeners.drain(..).chain(self.item_listeners.drain(..)) {
            doc.remove_event_listener(id);
        }
        if !self.shared.destroyed.replace(true) {
            for &row in &self.shared.rows {
                doc.release(row);
            }
            tracing::debug!("context menu destroyed");
        }
    }

    /// Returns true while a menu container is attached.
    pub fn is_open(&self) -> bool {
        self.shared.open.get().is_some()
    }

    /// The open container, if any.
    pub fn menu_element(&self) -> Option<ElementId> {
        self.shared.open.get()
    }

    /// Resolved targets, fixed at construction.
    pub fn target_nodes(&self) -> &[ElementId] {
        &self.targets
    }

    /// Item rows in rendering order, groups flattened.
    pub fn item_nodes(&self) -> &[ElementId] {
        &self.shared.rows
    }

    /// Theme forwarded to the container.
    pub fn appearance(&self) -> Appearance {
        self.shared.appearance
    }

    /// Tunables in effect.
    pub fn config(&self) -> MenuConfig {
        self.shared.config
    }

    /// Problems found while constructing the menu, in the order they were found.
    pub fn diagnostics(&self) -> &[MenuError] {
        &self.diagnostics
    }
}

impl fmt::Debug for ContextMenu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContextMenu")
            .field("targets", &self.targets)
            .field("rows", &self.shared.rows)
            .field("appearance", &self.shared.appearance)
            .field("open", &self.shared.open.get())
            .field("listeners", &self.listeners.len())
            .field("diagnostics", &self.diagnostics)
            .finish_non_exhaustive()
    }
}

/// Build a menu and [`init`](ContextMenu::init) it in one call.
pub fn create_context_menu(doc: &mut Document, options: ContextMenuOptions) -> ContextMenu {
    let mut menu = ContextMenu::new(doc, options);
    menu.init(doc);
    menu
}
