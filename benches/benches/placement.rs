// Copyright 2026 the Chronica Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};

use chronica_axis::ViewState;
use chronica_model::{Entity, EntityId, Lane, LaneId};
use chronica_placer::{Candidate, LanePlacer, PlacerParams};
use chronica_scene::{SceneInput, SceneParams, estimate_label_size, layout};

fn clustered_candidates(len: usize) -> Vec<Candidate<u32>> {
    // Tight clusters every 40 px force real displacement work.
    (0..len)
        .map(|i| Candidate {
            source: i as u32,
            x: (i % 10) as f64 * 4.0 + (i / 10) as f64 * 40.0,
            width: 60.0,
            height: 16.0,
            preferred_y: 280.0,
        })
        .collect()
}

fn bench_lane_placer(c: &mut Criterion) {
    let mut group = c.benchmark_group("placer/place_all");
    for len in [64usize, 256, 1_024] {
        let candidates = clustered_candidates(len);
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &candidates, |b, cands| {
            b.iter_batched(
                || LanePlacer::new(&PlacerParams::default(), 1.0, 0.0, 600.0),
                |mut placer| {
                    placer.place_all(cands.iter().copied());
                    black_box(placer.placed().len());
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_full_pass(c: &mut Criterion) {
    let mut group = c.benchmark_group("scene/layout");
    for len in [100usize, 500] {
        let lanes: Vec<Lane> = (0..4)
            .map(|i| Lane {
                id: LaneId(i),
                name: format!("lane {i}"),
                declared_start: Some(1500.0),
                declared_end: Some(2000.0),
            })
            .collect();
        let entities: Vec<Entity> = (0..len)
            .map(|i| Entity {
                id: EntityId(i as u32),
                lane: LaneId((i % 4) as u32),
                label: format!("entity {i}"),
                primary_year: Some(1500.0 + (i % 250) as f64 * 2.0),
                secondary_year: None,
                override_year: None,
            })
            .collect();
        let view = ViewState::new(1600.0, 900.0);
        let params = SceneParams::default();

        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(len),
            &(lanes, entities),
            |b, (lanes, entities)| {
                let input = SceneInput {
                    lanes,
                    entities,
                    events: &[],
                    relations: &[],
                };
                b.iter(|| {
                    let scene = layout(&input, &view, &params, estimate_label_size);
                    black_box(scene.items.len());
                });
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_lane_placer, bench_full_pass);
criterion_main!(benches);
