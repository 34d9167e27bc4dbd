// Copyright 2025 the Flowui Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Target resolution and item row construction.
//!
//! Both run once, when a menu is constructed. Rows are built detached and
//! are moved into a fresh container on every open.

use flowui_dom::{BoxStyle, Document, ElementId, ListenerId, ListenerOptions, StyleValue};
use kurbo::Insets;

use crate::error::MenuError;
use crate::item::{MenuEntry, MenuItem};
use crate::options::Target;

/// Attribute marking the last row of a group.
pub const DIVIDER_ATTRIBUTE: &str = "data-divider";

/// Resolve `target` against the current document.
pub(crate) fn resolve_targets(doc: &Document, target: &Target) -> Result<Vec<ElementId>, MenuError> {
    match target {
        Target::Absent => Err(MenuError::MissingTarget),
        Target::Element(id) if doc.is_alive(*id) => Ok(vec![*id]),
        Target::Element(id) => Err(MenuError::StaleTarget(*id)),
        Target::Selector(selector) if selector.trim().is_empty() => Err(MenuError::MissingTarget),
        Target::Selector(selector) => {
            let nodes = doc.query_selector_all(selector)?;
            if nodes.is_empty() {
                return Err(MenuError::TargetNotFound {
                    selector: selector.clone(),
                });
            }
            Ok(nodes)
        }
    }
}

/// Detached rows and the item listeners registered on their buttons.
#[derive(Debug, Default)]
pub(crate) struct Rows {
    pub(crate) rows: Vec<ElementId>,
    pub(crate) listeners: Vec<ListenerId>,
}

/// Build one row per item, flattening groups in place.
///
/// Items of a group share the group's stagger tier; the group's last row is
/// marked with [`DIVIDER_ATTRIBUTE`].
pub(crate) fn build_rows(
    doc: &mut Document,
    entries: &[MenuEntry],
    stagger_step: f64,
) -> Result<Rows, MenuError> {
    if entries.is_empty() {
        return Err(MenuError::EmptyMenu);
    }
    let mut out = Rows::default();
    for (tier, entry) in entries.iter().enumerate() {
        #[allow(
            clippy::cast_precision_loss,
            reason = "Menus have far fewer than 2^52 entries."
        )]
        let delay = tier as f64 * stagger_step;
        let grouped = matches!(entry, MenuEntry::Group(_));
        let items = entry.items();
        for (i, item) in items.iter().enumerate() {
            let divided = grouped && i + 1 == items.len();
            let row = build_row(doc, item, delay, divided, &mut out.listeners);
            out.rows.push(row);
        }
    }
    Ok(out)
}

fn build_row(
    doc: &mut Document,
    item: &MenuItem,
    delay: f64,
    divided: bool,
    listeners: &mut Vec<ListenerId>,
) -> ElementId {
    let row = doc.create_element("div");
    doc.add_class(row, "contextMenu-item");
    doc.set_box_style(
        row,
        BoxStyle {
            padding: Insets::uniform(4.0),
            separator: if divided { 1.0 } else { 0.0 },
            ..BoxStyle::default()
        },
    );
    if divided {
        doc.set_attribute(row, DIVIDER_ATTRIBUTE, "");
    }

    let button = doc.create_element("button");
    doc.set_style_property(button, "animation-delay", StyleValue::Seconds(delay));
    doc.set_inner_markup(button, item.label());
    doc.add_class(button, "contextMenu-button");
    doc.set_box_style(
        button,
        BoxStyle {
            padding: Insets::new(7.0, 6.0, 24.0, 6.0),
            font_size: 14.0,
            ..BoxStyle::default()
        },
    );
    doc.append_child(row, button);

    for (event_type, handler) in item.events() {
        let id = doc.add_shared_listener(
            button,
            event_type,
            ListenerOptions::default(),
            handler.clone(),
        );
        listeners.push(id);
    }
    row
}
