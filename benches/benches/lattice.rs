// Copyright 2025 the Sphere Grid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Vec2;
use sphere_grid::{GridItem, Lattice, ViewportConfig, cull};

struct Item(u32);

impl GridItem for Item {
    type Id = u32;

    fn id(&self) -> &u32 {
        &self.0
    }
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("lattice/build");
    let items: Vec<Item> = (0..32).map(Item).collect();

    for span in [20_u32, 40, 80] {
        group.throughput(Throughput::Elements(u64::from(span) * u64::from(span)));
        group.bench_with_input(BenchmarkId::from_parameter(span), &span, |b, &span| {
            b.iter(|| black_box(Lattice::build(&items, span)));
        });
    }

    group.finish();
}

fn bench_cull(c: &mut Criterion) {
    let mut group = c.benchmark_group("lattice/cull");
    let items: Vec<Item> = (0..32).map(Item).collect();

    for span in [20_u32, 40, 80] {
        let viewport = ViewportConfig {
            extended_span: span,
            ..ViewportConfig::default()
        }
        .validate()
        .unwrap();
        let lattice = Lattice::build(&items, span);
        let scroll = Vec2::new(1234.5, 987.25);
        group.throughput(Throughput::Elements(lattice.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(span), &lattice, |b, lattice| {
            b.iter(|| black_box(cull(lattice.tiles(), black_box(scroll), &viewport).len()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_build, bench_cull);
criterion_main!(benches);
