// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Regviz-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Regviz and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use regviz::diagram::translate;
use regviz::regex::compile_pattern;

mod fixtures;
mod profiler;

// Benchmark identity (keep stable):
// - Group names in this file: `regex.compile`, `diagram.translate`
// - Case IDs are the names in `fixtures::Case::ALL`.
fn benches_translate(c: &mut Criterion) {
    {
        let mut group = c.benchmark_group("regex.compile");

        for (case_id, case) in fixtures::Case::ALL {
            let pattern = fixtures::pattern(case);
            group.throughput(Throughput::Bytes(pattern.len() as u64));
            group.bench_function(case_id, move |b| {
                b.iter(|| {
                    let nfa = compile_pattern(black_box(&pattern)).expect("compile");
                    black_box(nfa.len())
                })
            });
        }

        group.finish();
    }

    {
        let mut group = c.benchmark_group("diagram.translate");

        for (case_id, case) in fixtures::Case::ALL {
            let nfa = fixtures::fixture(case);
            group.throughput(Throughput::Elements(nfa.len() as u64));
            group.bench_function(case_id, move |b| {
                b.iter(|| {
                    let diagram = translate(black_box(&nfa)).expect("translate");
                    black_box(diagram.nodes().len().wrapping_add(diagram.edges().len()))
                })
            });
        }

        group.finish();
    }
}

criterion_group! {
    name = benches;
    config = profiler::criterion();
    targets = benches_translate
}
criterion_main!(benches);
