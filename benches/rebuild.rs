// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boltforest-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boltforest and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion, Throughput};

use boltforest::model::{CellId, Domain, GridConfig, LatticePoint, Session};
use boltforest::ops::{rebuild_forest, Heading, RebuildReport};

mod fixtures;
mod profiler;

// Benchmark identity (keep stable):
// - Group names: `rebuild.forest`, `edit.move_edge`
// - Case IDs after the `/` must stay stable so results remain comparable.
fn checksum_report(report: &RebuildReport) -> u64 {
    let mut acc = 0u64;
    for value in [
        report.bolts_after,
        report.collisions,
        report.cancellations,
        report.removed_vertices,
    ] {
        acc = acc.wrapping_mul(131).wrapping_add(value as u64);
    }
    acc
}

fn benches_rebuild(c: &mut Criterion) {
    let mut group = c.benchmark_group("rebuild.forest");

    for (name, case, rings) in [
        ("quiet_10", fixtures::Case::Quiet, 10),
        ("quiet_200", fixtures::Case::Quiet, 200),
        ("colliding_10", fixtures::Case::Colliding, 10),
        ("colliding_200", fixtures::Case::Colliding, 200),
    ] {
        let template = fixtures::forest(case, rings);
        group.throughput(Throughput::Elements(fixtures::vertex_count(&template) as u64));
        group.bench_function(name, move |b| {
            b.iter_batched(
                || template.clone(),
                |mut forest| black_box(checksum_report(&rebuild_forest(black_box(&mut forest)))),
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

/// Full 20x20 domain with nested squares drawn through the path builder.
fn nested_squares_session() -> Session {
    let grid = GridConfig::new(20, 20);
    let domain = Domain::from_cells((0..20).flat_map(|r| (0..20).map(move |c| CellId::new(r, c))));
    let mut session = Session::with_domain(grid, domain);

    for k in 0..9 {
        let far = 20 - k;
        session.start_new_path();
        for (row, col) in [(k, k), (k, far), (far, far), (far, k), (k, k)] {
            session.append_point(LatticePoint::new(row, col)).expect("draw nested square");
        }
    }
    session
}

fn benches_edit(c: &mut Criterion) {
    let mut group = c.benchmark_group("edit.move_edge");
    let template = nested_squares_session();

    group.throughput(Throughput::Elements(1));
    group.bench_function("outer_ring_down", move |b| {
        b.iter_batched(
            || template.clone(),
            |mut session| {
                let report = session.move_edge_toward(0, 0, Heading::Down).expect("move edge");
                black_box(checksum_report(&report))
            },
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group! {
    name = benches;
    config = profiler::criterion();
    targets = benches_rebuild, benches_edit
}
criterion_main!(benches);
