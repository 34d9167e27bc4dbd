// Copyright 2025 the Flowui Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grouped items with an ASCII dump of the rendered menu.
//!
//! Shows how groups flatten into rows, which row carries the divider, and the
//! entrance delay each button receives.
//!
//! Run:
//! - `cargo run -p flowui_demos --example context_menu_groups`

use flowui_context_menu::{ContextMenu, ContextMenuOptions, DIVIDER_ATTRIBUTE, MenuEntry, MenuItem};
use flowui_dom::{Document, ElementId};
use kurbo::{Point, Size};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut doc = Document::new(Size::new(1024.0, 768.0));
    let list = doc.create_element("ul");
    doc.set_attribute(list, "id", "files");
    let body = doc.body();
    doc.append_child(body, list);

    let mut menu = ContextMenu::new(
        &mut doc,
        ContextMenuOptions::new(
            "#files",
            [
                MenuEntry::from(MenuItem::new("Open")),
                MenuEntry::from(vec![
                    MenuItem::new("Rename"),
                    MenuItem::new("Duplicate"),
                    MenuItem::new("Move to&hellip;"),
                ]),
                MenuEntry::from(vec![MenuItem::new("Share"), MenuItem::new("Copy link")]),
                MenuEntry::from(MenuItem::new("<span class=\"danger\">Delete</span>")),
            ],
        ),
    );
    menu.init(&mut doc);

    let Some(container) = menu.open(&mut doc, Point::new(200.0, 120.0)) else {
        return;
    };
    println!("Menu:");
    print_tree(&doc, container, "");

    menu.destroy(&mut doc);
    println!("\nAfter destroy: {} listeners", doc.total_listeners());
}

fn print_tree(doc: &Document, id: ElementId, prefix: &str) {
    let kids = doc.children(id);
    for (i, &kid) in kids.iter().enumerate() {
        let last = i + 1 == kids.len();
        let branch = if last { "└── " } else { "├── " };
        println!("{prefix}{branch}{}", describe(doc, kid));
        let next_prefix = if last {
            format!("{prefix}    ")
        } else {
            format!("{prefix}│   ")
        };
        print_tree(doc, kid, &next_prefix);
    }
}

fn describe(doc: &Document, id: ElementId) -> String {
    let tag = doc.tag_name(id).unwrap_or("?");
    let mut out = format!("{tag}.{}", doc.classes(id).join("."));
    if doc.has_attribute(id, DIVIDER_ATTRIBUTE) {
        out.push_str(" [divider]");
    }
    if let Some(markup) = doc.inner_markup(id) {
        out.push_str(&format!(" \"{}\" <- {markup}", doc.text_content(id)));
    }
    let style = doc.style_text(id);
    if !style.is_empty() {
        out.push_str(&format!("  {{{style}}}"));
    }
    if let Some(rect) = doc.bounds(id) {
        out.push_str(&format!(
            "  ({:.0},{:.0})–({:.0},{:.0})",
            rect.x0, rect.y0, rect.x1, rect.y1
        ));
    }
    out
}
