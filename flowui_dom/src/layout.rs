// Copyright 2025 the Flowui Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Measurement and a minimal column layout.
//!
//! This is not a layout engine. It covers what popup content needs: measure a
//! block whose children stack vertically (the scroll size), then assign bounds
//! top to bottom so the result can be hit tested. Children stretch to the
//! parent's content width.
//!
//! Sizes come from, in order of precedence:
//! 1. an explicit intrinsic size ([`Document::set_intrinsic_size`]),
//! 2. stacked children,
//! 3. text content measured by the document's [`TextMetrics`],
//!
//! plus the element's [`BoxStyle`](crate::BoxStyle) padding, separator and minimum width.

use kurbo::{Insets, Point, Rect, Size};

use crate::document::Document;
use crate::types::{Content, ElementId};

/// Measures a run of text.
pub trait TextMetrics {
    /// Size of `text` laid out on a single line at `font_size`.
    fn measure(&self, text: &str, font_size: f64) -> Size;
}

/// Fixed per-character advance; adequate for tests and monospace hosts.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FixedAdvance {
    /// Advance per character, as a fraction of the font size.
    pub advance: f64,
    /// Line height, as a fraction of the font size.
    pub line_height: f64,
}

impl Default for FixedAdvance {
    fn default() -> Self {
        Self {
            advance: 0.6,
            line_height: 1.2,
        }
    }
}

impl TextMetrics for FixedAdvance {
    fn measure(&self, text: &str, font_size: f64) -> Size {
        if text.is_empty() {
            return Size::ZERO;
        }
        #[allow(
            clippy::cast_precision_loss,
            reason = "Character counts of UI labels are far below 2^52."
        )]
        let chars = text.chars().count() as f64;
        Size::new(chars * font_size * self.advance, font_size * self.line_height)
    }
}

impl<F: Fn(&str, f64) -> Size> TextMetrics for F {
    fn measure(&self, text: &str, font_size: f64) -> Size {
        self(text, font_size)
    }
}

/// Strip tags from markup and decode the common character references.
pub fn visible_text(markup: &str) -> String {
    let mut out = String::with_capacity(markup.len());
    let mut in_tag = false;
    for ch in markup.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    if !out.contains('&') {
        return out;
    }
    out.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&nbsp;", "\u{a0}")
        .replace("&amp;", "&")
}

/// Measured box of an element, with its children measured in order.
struct Measured {
    id: ElementId,
    size: Size,
    padding: Insets,
    separator: f64,
    children: Vec<Measured>,
}

impl Measured {
    /// Height the child at `i` takes in its parent's column.
    fn stacked_height(&self, i: usize) -> f64 {
        let child = &self.children[i];
        if i + 1 < self.children.len() {
            child.size.height + child.separator
        } else {
            child.size.height
        }
    }
}

impl Document {
    /// Measured size of an element's content box plus padding.
    ///
    /// Equivalent to the element's scroll width and height. Stale ids measure as zero.
    pub fn scroll_size(&self, id: ElementId) -> Size {
        self.measure(id).map_or(Size::ZERO, |m| m.size)
    }

    /// Place `id` with its top-left corner at `origin` and stack its descendants.
    ///
    /// Returns the element's bounds. Only bounds change; the epoch does not advance.
    pub fn layout_column(&mut self, id: ElementId, origin: Point) -> Rect {
        let Some(measured) = self.measure(id) else {
            return Rect::ZERO;
        };
        let width = measured.size.width;
        self.place(&measured, origin, width);
        self.bounds(id).unwrap_or(Rect::ZERO)
    }

    /// Measure `id` and its subtree bottom-up, each element once.
    fn measure(&self, id: ElementId) -> Option<Measured> {
        let node = self.node_opt(id)?;
        let style = node.box_style;
        let children: Vec<Measured> = node
            .children
            .iter()
            .filter_map(|&child| self.measure(child))
            .collect();
        let size = match node.intrinsic_size {
            Some(size) => size,
            None => {
                let content = if children.is_empty() {
                    match &node.content {
                        Some(Content::Markup(m)) => {
                            self.text_metrics.measure(&visible_text(m), style.font_size)
                        }
                        Some(Content::Text(t)) => self.text_metrics.measure(t, style.font_size),
                        None => Size::ZERO,
                    }
                } else {
                    let mut size = Size::ZERO;
                    for (i, child) in children.iter().enumerate() {
                        size.width = size.width.max(child.size.width);
                        size.height += child.size.height;
                        if i + 1 < children.len() {
                            size.height += child.separator;
                        }
                    }
                    size
                };
                let width = (content.width + style.padding.x_value()).max(style.min_width);
                Size::new(width, content.height + style.padding.y_value())
            }
        };
        Some(Measured {
            id,
            size,
            padding: style.padding,
            separator: style.separator,
            children,
        })
    }

    fn place(&mut self, measured: &Measured, origin: Point, width: f64) {
        self.set_bounds(
            measured.id,
            Rect::from_origin_size(origin, Size::new(width, measured.size.height)),
        );
        let inner_width = (width - measured.padding.x_value()).max(0.0);
        let x = origin.x + measured.padding.x0;
        let mut y = origin.y + measured.padding.y0;
        for (i, child) in measured.children.iter().enumerate() {
            self.place(child, Point::new(x, y), inner_width);
            y += measured.stacked_height(i);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BoxStyle;
    use std::cell::Cell;
    use std::rc::Rc;

    fn doc() -> Document {
        let mut doc = Document::new(Size::new(800.0, 600.0));
        doc.set_text_metrics(|text: &str, font_size: f64| {
            Size::new(text.len() as f64 * 10.0, font_size)
        });
        doc
    }

    #[test]
    fn visible_text_strips_tags_and_entities() {
        assert_eq!(visible_text("<i>Open</i> &lt;file&gt;"), "Open <file>");
        assert_eq!(visible_text("Tom &amp; Jerry"), "Tom & Jerry");
        assert_eq!(visible_text("&amp;lt;"), "&lt;");
        assert_eq!(visible_text("plain"), "plain");
    }

    #[test]
    fn fixed_advance_scales_with_font_size() {
        let m = FixedAdvance::default();
        let s = m.measure("abcde", 10.0);
        assert!((s.width - 30.0).abs() < 1e-9, "5 chars × 10 × 0.6");
        assert!((s.height - 12.0).abs() < 1e-9, "10 × 1.2");
        assert_eq!(m.measure("", 10.0), Size::ZERO);
    }

    #[test]
    fn text_element_includes_padding() {
        let mut doc = doc();
        let button = doc.create_element("button");
        doc.set_inner_markup(button, "<b>Copy</b>");
        doc.set_box_style(
            button,
            BoxStyle {
                padding: Insets::new(7.0, 6.0, 24.0, 6.0),
                font_size: 14.0,
                ..BoxStyle::default()
            },
        );
        assert_eq!(doc.scroll_size(button), Size::new(40.0 + 31.0, 14.0 + 12.0));
    }

    #[test]
    fn column_stacks_children_and_respects_min_width() {
        let mut doc = doc();
        let menu = doc.create_element("div");
        doc.set_box_style(
            menu,
            BoxStyle {
                min_width: 128.0,
                ..BoxStyle::default()
            },
        );
        let a = doc.create_element("div");
        doc.set_text_content(a, "ab");
        doc.set_box_style(
            a,
            BoxStyle {
                font_size: 20.0,
                separator: 1.0,
                ..BoxStyle::default()
            },
        );
        let b = doc.create_element("div");
        doc.set_text_content(b, "abc");
        doc.set_box_style(
            b,
            BoxStyle {
                font_size: 20.0,
                separator: 1.0,
                ..BoxStyle::default()
            },
        );
        doc.append_child(menu, a);
        doc.append_child(menu, b);
        // Separator only counts when a sibling follows.
        assert_eq!(doc.scroll_size(menu), Size::new(128.0, 20.0 + 1.0 + 20.0));

        let rect = doc.layout_column(menu, Point::new(100.0, 50.0));
        assert_eq!(rect, Rect::new(100.0, 50.0, 228.0, 91.0));
        assert_eq!(doc.bounds(a), Some(Rect::new(100.0, 50.0, 228.0, 70.0)));
        assert_eq!(doc.bounds(b), Some(Rect::new(100.0, 71.0, 228.0, 91.0)));
    }

    #[test]
    fn intrinsic_size_overrides_measurement() {
        let mut doc = doc();
        let div = doc.create_element("div");
        doc.set_text_content(div, "ignored");
        doc.set_intrinsic_size(div, Some(Size::new(200.0, 100.0)));
        assert_eq!(doc.scroll_size(div), Size::new(200.0, 100.0));
    }

    #[test]
    fn layout_does_not_advance_epoch() {
        let mut doc = doc();
        let div = doc.create_element("div");
        let epoch = doc.epoch();
        doc.layout_column(div, Point::new(1.0, 2.0));
        assert_eq!(doc.epoch(), epoch);
    }

    #[test]
    fn layout_measures_each_text_once() {
        let mut doc = doc();
        let calls = Rc::new(Cell::new(0_usize));
        let counter = Rc::clone(&calls);
        doc.set_text_metrics(move |text: &str, font_size: f64| {
            counter.set(counter.get() + 1);
            Size::new(text.len() as f64 * 10.0, font_size)
        });
        let menu = doc.create_element("div");
        for label in ["a", "bb", "ccc"] {
            let row = doc.create_element("div");
            let button = doc.create_element("button");
            doc.set_text_content(button, label);
            doc.append_child(row, button);
            doc.append_child(menu, row);
        }
        let rect = doc.layout_column(menu, Point::ORIGIN);
        assert_eq!(calls.get(), 3, "one measurement per text element");
        assert_eq!(rect, Rect::new(0.0, 0.0, 30.0, 48.0));
    }
}
