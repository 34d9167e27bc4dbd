// Copyright 2025 the Flowui Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Context menu basics: open, click an item, reopen near a corner, blur.
//!
//! This example builds a page with one target area, wires a menu onto it, and
//! drives the document the way a host shell would.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p flowui_demos --example context_menu_basics`

use std::cell::RefCell;
use std::rc::Rc;

use flowui_context_menu::{Appearance, ContextMenuOptions, MenuEntry, MenuItem, create_context_menu};
use flowui_dom::event::types;
use flowui_dom::{Document, ElementId, StyleValue};
use kurbo::{Point, Rect, Size};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut doc = Document::new(Size::new(800.0, 600.0));
    let area = doc.create_element("main");
    doc.add_class(area, "workspace");
    doc.set_bounds(area, Rect::new(0.0, 0.0, 800.0, 600.0));
    let body = doc.body();
    doc.append_child(body, area);

    // Handlers record what they did so we can print it afterwards.
    let log = Rc::new(RefCell::new(Vec::<String>::new()));
    let item = |label: &str, action: &'static str| {
        let log = Rc::clone(&log);
        MenuItem::new(label).on_click(move |_doc, ev| {
            log.borrow_mut().push(format!("{action} @ {:?}", ev.client()));
        })
    };

    let menu = create_context_menu(
        &mut doc,
        ContextMenuOptions::new(
            ".workspace",
            [
                MenuEntry::from(item("<b>New file</b>", "new")),
                MenuEntry::from(vec![item("Cut", "cut"), item("Copy", "copy")]),
                MenuEntry::from(item("Delete &hellip;", "delete")),
            ],
        )
        .appearance(Appearance::Dark),
    );

    // Right click near the top-left corner: the menu opens at the pointer.
    let outcome = doc.pointer_event(types::CONTEXT_MENU, Point::new(40.0, 40.0));
    println!("== Gesture @ 40,40 ==");
    println!("  native menu suppressed: {}", outcome.default_prevented);
    let container = menu.menu_element().unwrap_or(area);
    print_geometry(&doc, container);

    // Click the first row's button; its handler runs, then the menu closes.
    let first_button = doc.children(menu.item_nodes()[0])[0];
    let center = doc.bounds(first_button).unwrap_or(Rect::ZERO).center();
    doc.pointer_event(types::CLICK, center);
    println!("\n== Click @ {:.1},{:.1} ==", center.x, center.y);
    println!("  handler log: {:?}", log.borrow());
    println!("  open after click: {}", menu.is_open());

    // Near the bottom-right corner the menu flips to stay on screen.
    doc.pointer_event(types::CONTEXT_MENU, Point::new(780.0, 590.0));
    println!("\n== Gesture @ 780,590 ==");
    if let Some(container) = menu.menu_element() {
        print_geometry(&doc, container);
    }

    doc.blur_window();
    println!("\n== Window blur ==\n  open: {}", menu.is_open());
}

fn print_geometry(doc: &Document, container: ElementId) {
    let read = |name: &str| match doc.style_property(container, name) {
        Some(StyleValue::Px(v)) => *v,
        _ => f64::NAN,
    };
    println!(
        "  menu {:?}: left={} top={} width={} height={}",
        container,
        read("--left"),
        read("--top"),
        read("--width"),
        read("--height"),
    );
    println!("  style=\"{}\"", doc.style_text(container));
}
