#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glam::Vec3;
use vitrine::animation::damping::{damp, Damp};
use vitrine::card::CardId;
use vitrine::catalog::Catalog;
use vitrine::engine::CarouselEngine;
use vitrine::input::InputEvent;
use vitrine::options::Options;
use vitrine::scene::FrameRecorder;

const DT: f32 = 1.0 / 60.0;

fn damping_benchmark(c: &mut Criterion) {
    let _ = c.bench_function("damp_scalar", |b| {
        b.iter(|| damp(black_box(0.0), black_box(1.0), 0.12, DT))
    });
    let _ = c.bench_function("damp_vec3", |b| {
        b.iter(|| {
            black_box(Vec3::ZERO).damp(black_box(Vec3::new(1.0, 2.0, 3.0)), 0.12, DT)
        })
    });
}

fn tick_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("tick");

    for count in [5_u32, 20, 100, 500] {
        let mut engine = CarouselEngine::new(
            &Catalog::sequential(count),
            Options::default(),
            1400.0,
            800.0,
        );
        let mut sink = FrameRecorder::new();
        let _ = engine.select(CardId(count / 2));

        let _ = group.bench_function(format!("{count}_cards_selected"), |b| {
            b.iter(|| {
                // keep the selected card tilting so nothing settles
                engine.handle_input(InputEvent::PointerMoved {
                    x: black_box(700.0),
                    y: black_box(400.0),
                });
                engine.tick(DT, &mut sink);
            });
        });
    }
    group.finish();
}

criterion_group!(benches, damping_benchmark, tick_benchmark);
criterion_main!(benches);
