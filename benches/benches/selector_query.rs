// Copyright 2025 the Flowui Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use flowui_dom::{Document, SelectorList};
use kurbo::{Point, Rect, Size};

/// A `rows × cols` grid of `div.cell` elements inside `section.grid` rows.
fn gen_grid(rows: usize, cols: usize, cell: f64) -> Document {
    let mut doc = Document::new(Size::new(cols as f64 * cell, rows as f64 * cell));
    let body = doc.body();
    for y in 0..rows {
        let row = doc.create_element("section");
        doc.add_class(row, "grid");
        doc.append_child(body, row);
        for x in 0..cols {
            let el = doc.create_element("div");
            doc.add_class(el, "cell");
            if (x + y) % 7 == 0 {
                doc.set_attribute(el, "data-target", "");
            }
            doc.set_bounds(
                el,
                Rect::new(x as f64 * cell, y as f64 * cell, (x + 1) as f64 * cell, (y + 1) as f64 * cell),
            );
            doc.append_child(row, el);
        }
    }
    doc
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("selector_parse");
    for text in [".cell", "section.grid > div.cell[data-target]", "#a, .b .c, d > e[f=g]"] {
        group.bench_function(text, |b| {
            b.iter(|| black_box(SelectorList::parse(black_box(text))));
        });
    }
    group.finish();
}

fn bench_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("selector_query");
    for &n in &[10_usize, 30, 60] {
        let doc = gen_grid(n, n, 10.0);
        group.throughput(Throughput::Elements((n * n) as u64));
        group.bench_function(format!("class_n{n}"), |b| {
            b.iter(|| black_box(doc.query_selector_all(black_box(".cell"))));
        });
        group.bench_function(format!("child_attr_n{n}"), |b| {
            b.iter(|| black_box(doc.query_selector_all(black_box(".grid > .cell[data-target]"))));
        });
        group.bench_function(format!("hit_test_n{n}"), |b| {
            let pt = Point::new(n as f64 * 5.0 + 1.0, n as f64 * 5.0 + 1.0);
            b.iter(|| black_box(doc.hit_test_point(black_box(pt))));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_parse, bench_query);
criterion_main!(benches);
