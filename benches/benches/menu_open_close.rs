// Copyright 2025 the Flowui Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use flowui_context_menu::{ContextMenu, ContextMenuOptions, MenuEntry, MenuItem, create_context_menu};
use flowui_dom::Document;
use flowui_dom::event::types;
use kurbo::{Point, Rect, Size};

fn gen_entries(n: usize, group: usize) -> Vec<MenuEntry> {
    let mut out = Vec::with_capacity(n);
    for i in 0..n {
        if group > 1 && i % 3 == 2 {
            out.push(MenuEntry::Group(
                (0..group).map(|j| MenuItem::new(format!("Item {i}.{j}"))).collect(),
            ));
        } else {
            out.push(MenuEntry::Item(MenuItem::new(format!("<b>Item</b> {i}"))));
        }
    }
    out
}

fn page() -> Document {
    let mut doc = Document::new(Size::new(1280.0, 800.0));
    let area = doc.create_element("div");
    doc.add_class(area, "area");
    doc.set_bounds(area, Rect::new(0.0, 0.0, 1280.0, 800.0));
    let body = doc.body();
    doc.append_child(body, area);
    doc
}

fn bench_construct(c: &mut Criterion) {
    let mut group = c.benchmark_group("menu_construct");
    for &n in &[4_usize, 16, 64] {
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("new_init_destroy_n{n}"), |b| {
            b.iter_batched(
                || (page(), gen_entries(n, 3)),
                |(mut doc, entries)| {
                    let mut menu =
                        create_context_menu(&mut doc, ContextMenuOptions::new(".area", entries));
                    menu.destroy(&mut doc);
                    black_box(doc.epoch())
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_gesture_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("menu_gesture");
    for &n in &[4_usize, 16, 64] {
        let mut doc = page();
        let menu: ContextMenu =
            create_context_menu(&mut doc, ContextMenuOptions::new(".area", gen_entries(n, 3)));
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("open_click_close_n{n}"), |b| {
            b.iter(|| {
                doc.pointer_event(types::CONTEXT_MENU, black_box(Point::new(1200.0, 700.0)));
                doc.pointer_event(types::CLICK, black_box(Point::new(5.0, 5.0)));
                black_box(menu.is_open())
            });
        });
        group.bench_function(format!("reopen_n{n}"), |b| {
            b.iter(|| black_box(menu.open(&mut doc, black_box(Point::new(100.0, 100.0)))));
        });
        menu.close(&mut doc);
    }
    group.finish();
}

criterion_group!(benches, bench_construct, bench_gesture_cycle);
criterion_main!(benches);
