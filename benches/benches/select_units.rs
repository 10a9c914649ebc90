// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_benches::article_page;
use understory_readable::{Candidacy, Selector, SelectorConfig};

fn bench_select(c: &mut Criterion) {
    let mut group = c.benchmark_group("select_units");
    for &(sections, paragraphs) in &[(10usize, 5usize), (100, 10), (500, 10)] {
        let (doc, body) = article_page(sections, paragraphs);
        group.throughput(Throughput::Elements(doc.len() as u64));
        for (name, candidacy) in [
            ("proxy", Candidacy::StructuralProxy),
            ("nested", Candidacy::Nested),
        ] {
            let selector = Selector::new(SelectorConfig {
                candidacy,
                ..Default::default()
            });
            group.bench_function(format!("{name}_s{sections}_p{paragraphs}"), |b| {
                b.iter(|| black_box(selector.select(&doc, body).len()));
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_select);
criterion_main!(benches);
