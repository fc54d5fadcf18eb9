// Copyright 2025 the Sphere Grid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Vec2};
use sphere_grid::{GridItem, ItemTransform, ViewportConfig};
use sphere_grid_pan::{ManualFrames, PanConfig};
use sphere_grid_viewer::{GridViewer, ItemHost, TileContext};

struct Item(u32);

impl GridItem for Item {
    type Id = u32;

    fn id(&self) -> &u32 {
        &self.0
    }
}

/// Accumulates something from every tile so the work is not optimized out.
struct Sink(f64);

impl ItemHost<Item> for Sink {
    fn render(&mut self, _: &Item, transform: &ItemTransform, _: &TileContext<'_>) {
        self.0 += transform.scale * transform.opacity;
    }
}

fn viewer() -> GridViewer<Item, ManualFrames> {
    GridViewer::from_configs(
        (0..8).map(Item).collect(),
        ViewportConfig::default(),
        PanConfig::default(),
        ManualFrames::new(),
    )
    .unwrap()
}

fn bench_render(c: &mut Criterion) {
    let mut viewer = viewer();
    viewer.set_offset(Vec2::new(321.0, 123.0));
    c.bench_function("frame/render", |b| {
        b.iter(|| {
            let mut sink = Sink(0.0);
            viewer.render(&mut sink);
            black_box(sink.0)
        });
    });
}

fn bench_wheel_and_render(c: &mut Criterion) {
    let mut viewer = viewer();
    let mut sink = Sink(0.0);
    c.bench_function("frame/wheel_and_render", |b| {
        b.iter(|| {
            viewer.wheel(black_box(Vec2::new(3.0, 1.5)));
            viewer.render(&mut sink);
        });
    });
    black_box(sink.0);
}

fn bench_full_coast(c: &mut Criterion) {
    c.bench_function("frame/full_coast", |b| {
        b.iter_batched(
            || {
                let mut viewer = viewer();
                viewer.pointer_down(Point::ZERO);
                viewer.pointer_move(Point::new(-60.0, -30.0));
                viewer
            },
            |mut viewer| {
                viewer.pointer_up();
                let mut sink = Sink(0.0);
                while let Some(frame) = viewer.frames_mut().next_due() {
                    viewer.on_frame(frame);
                    viewer.render(&mut sink);
                }
                black_box(sink.0)
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_render, bench_wheel_and_render, bench_full_coast);
criterion_main!(benches);
