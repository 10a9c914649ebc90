// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::Point;
use understory_benches::{Rng, article_page};
use understory_read_hover::tracker::HoverTracker;
use understory_read_hover::types::HoverConfig;
use understory_readable::select_units;

fn gen_points(count: usize, height: f64) -> Vec<Point> {
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    (0..count)
        .map(|_| Point::new(rng.next_f64() * 800.0, rng.next_f64() * height))
        .collect()
}

fn bench_pointer_moves(c: &mut Criterion) {
    let mut group = c.benchmark_group("hover_pointer_moved");
    for &sections in &[10usize, 100, 500] {
        let (doc, body) = article_page(sections, 10);
        let units = select_units(&doc, body);
        let height = sections as f64 * 800.0;
        let points = gen_points(256, height);
        group.bench_function(format!("units{}", units.len()), |b| {
            b.iter_batched(
                || HoverTracker::new(units.clone(), HoverConfig::default()),
                |mut tracker| {
                    for &pt in &points {
                        black_box(tracker.pointer_moved(&doc, pt).hovered);
                    }
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_pointer_moves);
criterion_main!(benches);
